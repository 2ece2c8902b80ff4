//! Standalone field checks for application identifiers.
//!
//! Each check can be used on its own (e.g. to validate user input before
//! building an [`ApplicationId`](crate::ApplicationId)); the identifier's
//! constructors run all of them in order: tenant, app, version, status.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ValidationError, ValidationResult};
use crate::status::ReleaseStatus;

/// `major.minor.revision`, ASCII digits only, whole string.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").expect("invalid version regex")
});

pub fn validate_tenant(tenant: &str) -> ValidationResult<()> {
    if tenant.is_empty() {
        tracing::debug!(field = "tenant", "rejected empty tenant");
        return Err(ValidationError::EmptyTenant);
    }
    Ok(())
}

pub fn validate_app(app: &str) -> ValidationResult<()> {
    if app.is_empty() {
        tracing::debug!(field = "app", "rejected empty app");
        return Err(ValidationError::EmptyApp);
    }
    Ok(())
}

/// Check that `version` has the form `n.n.n` where each `n` is a digit run.
///
/// The match is anchored at both ends, so trailing or leading text
/// (`"1.2.3abc"`, `"v1.2.3"`) is rejected.
pub fn validate_version(version: &str) -> ValidationResult<()> {
    if version.is_empty() {
        tracing::debug!(field = "version", "rejected empty version");
        return Err(ValidationError::EmptyVersion);
    }
    if !VERSION_PATTERN.is_match(version) {
        tracing::debug!(field = "version", version, "rejected malformed version");
        return Err(ValidationError::invalid_version(version));
    }
    Ok(())
}

/// Parse `status` as one of the [`ReleaseStatus`] literals (case-sensitive).
pub fn validate_status(status: &str) -> ValidationResult<ReleaseStatus> {
    status.parse::<ReleaseStatus>().inspect_err(|_| {
        tracing::debug!(field = "status", status, "rejected unknown status");
    })
}
