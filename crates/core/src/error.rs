//! Validation error model.

use thiserror::Error;

/// Result type used by every validating operation in this crate.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// An argument/precondition violation raised while validating an identifier.
///
/// Keep this focused on caller-correctable input failures. There is nothing
/// transient here, so nothing is worth retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The tenant (account) was empty.
    #[error("tenant cannot be empty")]
    EmptyTenant,

    /// The application name was empty.
    #[error("app cannot be empty")]
    EmptyApp,

    /// The version was empty.
    #[error("version cannot be empty")]
    EmptyVersion,

    /// The version did not have the `major.minor.revision` form.
    #[error(
        "invalid version: '{0}'. version must follow the form n.n.n where n is a number 0 or greater. \
         The numbers stand for major.minor.revision"
    )]
    InvalidVersion(String),

    /// The status was not one of the release-status literals.
    #[error("invalid status: '{0}'. status must be exactly one of: SNAPSHOT, RELEASE")]
    InvalidStatus(String),
}

impl ValidationError {
    pub fn invalid_version(version: impl Into<String>) -> Self {
        Self::InvalidVersion(version.into())
    }

    pub fn invalid_status(status: impl Into<String>) -> Self {
        Self::InvalidStatus(status.into())
    }

    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyTenant => "tenant",
            ValidationError::EmptyApp => "app",
            ValidationError::EmptyVersion | ValidationError::InvalidVersion(_) => "version",
            ValidationError::InvalidStatus(_) => "status",
        }
    }
}
