//! Composite identity of a versioned application within a tenant.

use core::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::status::ReleaseStatus;
use crate::validation::{validate_app, validate_status, validate_tenant, validate_version};
use crate::value_object::ValueObject;

pub const DEFAULT_TENANT: &str = "NONE";
pub const DEFAULT_APP: &str = "DEFAULT_APP";
pub const DEFAULT_VERSION: &str = "999.99.9";

/// Account + app + version + status: everything needed to name the
/// application (and version) a piece of configuration belongs to.
///
/// ## Equality
///
/// - `account` and `app` compare **case-insensitively**
/// - `version` and `status` compare **exactly**
///
/// `Hash` and [`cache_key`](Self::cache_key) fold case the same way, so equal
/// identifiers always hash identically and produce the same cache key.
///
/// Every constructed value is valid; there are no setters. Use
/// [`create_new_snapshot_id`](Self::create_new_snapshot_id) to derive a new one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ApplicationIdRepr", into = "ApplicationIdRepr")]
pub struct ApplicationId {
    account: String,
    app: String,
    version: String,
    status: ReleaseStatus,
}

impl ApplicationId {
    /// Build and validate an identifier.
    ///
    /// The strings are stored verbatim. Checks run in the order tenant, app,
    /// version, status and the first failure is returned.
    pub fn new(
        account: impl Into<String>,
        app: impl Into<String>,
        version: impl Into<String>,
        status: &str,
    ) -> ValidationResult<Self> {
        let account = account.into();
        let app = app.into();
        let version = version.into();

        validate_tenant(&account)?;
        validate_app(&app)?;
        validate_version(&version)?;
        let status = validate_status(status)?;

        Ok(Self {
            account,
            app,
            version,
            status,
        })
    }

    /// Same as [`new`](Self::new) with an already-typed status.
    pub fn with_status(
        account: impl Into<String>,
        app: impl Into<String>,
        version: impl Into<String>,
        status: ReleaseStatus,
    ) -> ValidationResult<Self> {
        Self::new(account, app, version, status.as_str())
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn app(&self) -> &str {
        &self.app
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn status(&self) -> ReleaseStatus {
        self.status
    }

    /// Re-run every field check against this identifier.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_tenant(&self.account)?;
        validate_app(&self.app)?;
        validate_version(&self.version)?;
        validate_status(self.status.as_str())?;
        Ok(())
    }

    /// Canonical lookup key: `account/app/version/`, lowercased.
    pub fn cache_key(&self) -> String {
        self.cache_key_with("")
    }

    /// Canonical lookup key with a trailing name: `account/app/version/suffix`,
    /// lowercased.
    pub fn cache_key_with(&self, suffix: &str) -> String {
        let mut key = String::with_capacity(
            self.account.len() + self.app.len() + self.version.len() + suffix.len() + 3,
        );
        for (i, part) in [&*self.account, &*self.app, &*self.version, suffix]
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                key.push('/');
            }
            key.extend(fold_case(part));
        }
        key
    }

    pub fn is_snapshot(&self) -> bool {
        self.status == ReleaseStatus::Snapshot
    }

    pub fn is_release(&self) -> bool {
        self.status == ReleaseStatus::Release
    }

    /// Derive the identifier for a new version of the same application.
    ///
    /// A new version always starts life as a `SNAPSHOT`, whatever the status of
    /// `self`. The result is fully validated, so a malformed `version` fails.
    pub fn create_new_snapshot_id(&self, version: impl Into<String>) -> ValidationResult<Self> {
        let next = Self::with_status(
            self.account.clone(),
            self.app.clone(),
            version,
            ReleaseStatus::Snapshot,
        )?;
        tracing::debug!(from = %self, to = %next, "derived snapshot id");
        Ok(next)
    }
}

impl Default for ApplicationId {
    /// The placeholder identity (`NONE/DEFAULT_APP/999.99.9`, `SNAPSHOT`).
    fn default() -> Self {
        Self {
            account: DEFAULT_TENANT.to_string(),
            app: DEFAULT_APP.to_string(),
            version: DEFAULT_VERSION.to_string(),
            status: ReleaseStatus::Snapshot,
        }
    }
}

/// Per-char lowercase mapping shared by `eq`, `hash` and `cache_key`.
///
/// `str::to_lowercase` is context-sensitive (final sigma), which would let two
/// equal ids hash differently.
fn fold_case(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || fold_case(a).eq(fold_case(b))
}

fn hash_ignore_case<H: Hasher>(s: &str, state: &mut H) {
    for c in fold_case(s) {
        state.write_u32(c as u32);
    }
    state.write_u8(0xff);
}

impl PartialEq for ApplicationId {
    fn eq(&self, other: &Self) -> bool {
        eq_ignore_case(&self.account, &other.account)
            && eq_ignore_case(&self.app, &other.app)
            && self.status == other.status
            && self.version == other.version
    }
}

impl Eq for ApplicationId {}

impl Hash for ApplicationId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_case(&self.account, state);
        hash_ignore_case(&self.app, state);
        self.version.hash(state);
        self.status.hash(state);
    }
}

impl core::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.cache_key())
    }
}

impl ValueObject for ApplicationId {}

/// Wire shape. Missing fields fall back to the default identity, then the
/// whole value is validated.
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct ApplicationIdRepr {
    account: String,
    app: String,
    version: String,
    status: String,
}

impl Default for ApplicationIdRepr {
    fn default() -> Self {
        ApplicationId::default().into()
    }
}

impl From<ApplicationId> for ApplicationIdRepr {
    fn from(id: ApplicationId) -> Self {
        Self {
            account: id.account,
            app: id.app,
            version: id.version,
            status: id.status.as_str().to_string(),
        }
    }
}

impl TryFrom<ApplicationIdRepr> for ApplicationId {
    type Error = ValidationError;

    fn try_from(repr: ApplicationIdRepr) -> Result<Self, Self::Error> {
        ApplicationId::new(repr.account, repr.app, repr.version, &repr.status)
    }
}
