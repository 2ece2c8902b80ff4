//! `configstore-core` — identity primitives for the configuration store.
//!
//! This crate contains **pure domain** values (no IO, no storage). The central
//! type is [`ApplicationId`], the composite key naming one version of one
//! application within one tenant.

pub mod application_id;
pub mod error;
pub mod status;
pub mod validation;
pub mod value_object;

pub use application_id::{ApplicationId, DEFAULT_APP, DEFAULT_TENANT, DEFAULT_VERSION};
pub use error::{ValidationError, ValidationResult};
pub use status::ReleaseStatus;
pub use validation::{validate_app, validate_status, validate_tenant, validate_version};
pub use value_object::ValueObject;
