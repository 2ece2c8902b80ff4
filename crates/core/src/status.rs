//! Release lifecycle of an application version.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::value_object::ValueObject;

/// Lifecycle stage of a version.
///
/// `Snapshot` versions are still in development and may change; `Release`
/// versions are published and immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReleaseStatus {
    Snapshot,
    Release,
}

impl ReleaseStatus {
    /// Every status, in declaration order.
    pub const ALL: [ReleaseStatus; 2] = [ReleaseStatus::Snapshot, ReleaseStatus::Release];

    /// The exact literal name of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            ReleaseStatus::Snapshot => "SNAPSHOT",
            ReleaseStatus::Release => "RELEASE",
        }
    }
}

impl core::fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseStatus {
    type Err = ValidationError;

    /// Exact, case-sensitive match against the literal names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReleaseStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_status(s))
    }
}

impl ValueObject for ReleaseStatus {}
