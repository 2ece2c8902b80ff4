//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** of their own; they are defined entirely by
//! their attribute values. Two value objects describing the same thing are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// derive a new value from it (see
/// [`ApplicationId::create_new_snapshot_id`](crate::ApplicationId::create_new_snapshot_id)).
/// Immutability means a value can be shared across threads and used as a map key
/// without any locking.
///
/// The trait requires:
/// - **Clone**: values are copied, not referenced
/// - **PartialEq**: comparison is by attribute value, under whatever equality
///   contract the type defines (it need not be field-wise byte equality)
/// - **Debug**: values show up in logs and test failures
///
/// ```ignore
/// let a = ApplicationId::new("Acme", "Billing", "1.0.0", "SNAPSHOT")?;
/// let b = ApplicationId::new("acme", "billing", "1.0.0", "SNAPSHOT")?;
/// assert_eq!(a, b); // equal by value
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
