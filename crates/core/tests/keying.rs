//! Using `ApplicationId` the way a configuration registry does: as a map key,
//! a set member, and a serialized payload.

use std::collections::{HashMap, HashSet};
use std::thread;

use configstore_core::{ApplicationId, ReleaseStatus, ValidationError};

fn id(account: &str, app: &str, version: &str, status: &str) -> ApplicationId {
    ApplicationId::new(account, app, version, status).unwrap()
}

#[test]
fn hash_map_lookup_ignores_account_and_app_case() {
    let mut registry = HashMap::new();
    registry.insert(id("Acme", "Billing", "1.0.0", "RELEASE"), "cube-a");

    assert_eq!(registry.get(&id("ACME", "billing", "1.0.0", "RELEASE")), Some(&"cube-a"));
    assert_eq!(registry.get(&id("acme", "billing", "1.0.0", "SNAPSHOT")), None);
    assert_eq!(registry.get(&id("acme", "billing", "1.0.1", "RELEASE")), None);
}

#[test]
fn hash_set_collapses_case_variants() {
    let set: HashSet<ApplicationId> = [
        id("acme", "billing", "1.0.0", "SNAPSHOT"),
        id("ACME", "BILLING", "1.0.0", "SNAPSHOT"),
        id("Acme", "Billing", "1.0.0", "SNAPSHOT"),
        id("acme", "billing", "1.0.0", "RELEASE"),
    ]
    .into_iter()
    .collect();

    assert_eq!(set.len(), 2);
}

#[test]
fn cache_keys_index_the_same_entries_as_equality() {
    let mut by_key = HashMap::new();
    for account in ["acme", "ACME", "AcMe"] {
        let app_id = id(account, "Billing", "1.0.0", "SNAPSHOT");
        by_key
            .entry(app_id.cache_key_with("rates"))
            .or_insert_with(Vec::new)
            .push(app_id);
    }

    assert_eq!(by_key.len(), 1);
    let ids = &by_key["acme/billing/1.0.0/rates"];
    assert!(ids.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn version_bump_from_release_lands_in_a_new_snapshot_slot() {
    let released = id("acme", "billing", "1.0.0", "RELEASE");
    let next = released.create_new_snapshot_id("1.1.0").unwrap();

    let mut registry = HashMap::new();
    registry.insert(released.clone(), "published");
    registry.insert(next.clone(), "in development");

    assert_eq!(registry.len(), 2);
    assert_eq!(next.status(), ReleaseStatus::Snapshot);
    assert_eq!(next.to_string(), "acme/billing/1.1.0/");
    assert!(released.is_release());
}

#[test]
fn standalone_checks_match_constructor() {
    assert_eq!(
        configstore_core::validate_version("1.0.0-beta"),
        Err(ValidationError::invalid_version("1.0.0-beta"))
    );
    assert_eq!(
        ApplicationId::new("acme", "billing", "1.0.0-beta", "SNAPSHOT"),
        Err(ValidationError::invalid_version("1.0.0-beta"))
    );
    assert_eq!(
        configstore_core::validate_status("RELEASE"),
        Ok(ReleaseStatus::Release)
    );
}

#[test]
fn json_round_trip_preserves_identity_and_casing() {
    let original = id("Acme", "Billing", "2.3.4", "RELEASE");
    let json = serde_json::to_string(&original).unwrap();
    let back: ApplicationId = serde_json::from_str(&json).unwrap();

    assert_eq!(back, original);
    assert_eq!(back.account(), "Acme");
    assert_eq!(back.app(), "Billing");
}

#[test]
fn shared_across_threads_without_locking() {
    let app_id = id("acme", "billing", "1.0.0", "SNAPSHOT");
    let keys: Vec<String> = thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| app_id.cache_key())).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(keys.iter().all(|k| k == "acme/billing/1.0.0/"));
}

#[test]
fn rejected_input_is_logged_not_fatal() {
    configstore_observability::init();

    let err = ApplicationId::new("acme", "billing", "1.0", "SNAPSHOT").unwrap_err();
    assert_eq!(err.field(), "version");
}
