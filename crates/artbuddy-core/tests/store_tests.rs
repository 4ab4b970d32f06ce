#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use artbuddy_core::errors::ModelError;
use artbuddy_core::model::{EntityKind, Name, Phone};
use artbuddy_core::ops::{ReadOnlyStore, Store};
use common::{commission, commission_with_fee, customer};

fn name(raw: &str) -> Name {
    Name::new(raw).unwrap()
}

#[test]
fn test_distinct_customers_both_present() {
    let mut store = Store::new();
    store.add_customer(customer("Alice")).unwrap();
    store.add_customer(customer("Bob")).unwrap();

    assert!(store.has_customer(&customer("Alice")));
    assert!(store.has_customer(&customer("Bob")));
    assert_eq!(store.customers().len(), 2);
}

#[test]
fn test_duplicate_customer_rejected_even_with_other_fields_changed() {
    let mut store = Store::new();
    store.add_customer(customer("Alice")).unwrap();

    let same_person = customer("Alice")
        .to_builder()
        .phone(Phone::new("11111111").unwrap())
        .build();
    let err = store.add_customer(same_person).unwrap_err();

    assert_eq!(
        err,
        ModelError::DuplicateEntity {
            kind: EntityKind::Customer,
            key: "Alice".to_string()
        }
    );
    assert_eq!(store.customers().len(), 1);
}

#[test]
fn test_customer_names_are_case_sensitive() {
    let mut store = Store::new();
    store.add_customer(customer("Alice")).unwrap();
    store.add_customer(customer("alice")).unwrap();
    assert_eq!(store.customers().len(), 2);
}

#[test]
fn test_commission_titles_scoped_per_customer() {
    let mut store = Store::new();
    store.add_customer(customer("Alice")).unwrap();
    store.add_customer(customer("Bob")).unwrap();

    store.add_commission(&name("Alice"), commission("Portrait")).unwrap();
    store.add_commission(&name("Bob"), commission("Portrait")).unwrap();

    let err = store
        .add_commission(&name("Alice"), commission_with_fee("Portrait", 99.0))
        .unwrap_err();
    assert!(matches!(err, ModelError::DuplicateEntity { kind: EntityKind::Commission, .. }));
    assert_eq!(store.all_commissions().count(), 2);
}

#[test]
fn test_commission_ops_on_unknown_customer() {
    let mut store = Store::new();
    let err = store
        .add_commission(&name("Nobody"), commission("Portrait"))
        .unwrap_err();
    assert!(matches!(err, ModelError::EntityNotFound { kind: EntityKind::Customer, .. }));
}

#[test]
fn test_edit_preserves_length_and_position() {
    let mut store = Store::new();
    for n in ["Alice", "Bob", "Carl"] {
        store.add_customer(customer(n)).unwrap();
    }

    let edited = customer("Bob")
        .to_builder()
        .phone(Phone::new("99999999").unwrap())
        .build();
    store.set_customer(&customer("Bob"), edited.clone()).unwrap();

    assert_eq!(store.customers().len(), 3);
    assert_eq!(store.customers().get(1), Some(&edited));
}

#[test]
fn test_edit_cannot_take_another_customers_name() {
    let mut store = Store::new();
    store.add_customer(customer("Alice")).unwrap();
    store.add_customer(customer("Bob")).unwrap();

    let err = store
        .set_customer(&customer("Alice"), customer("Bob"))
        .unwrap_err();
    assert!(matches!(err, ModelError::DuplicateEntity { .. }));
    assert!(store.customer(&name("Alice")).is_some());
}

#[test]
fn test_remove_customer_drops_its_commissions() {
    let mut store = Store::new();
    store.add_customer(customer("Alice")).unwrap();
    store.add_commission(&name("Alice"), commission("Portrait")).unwrap();

    let removed = store.remove_customer(&customer("Alice")).unwrap();
    assert_eq!(removed.commissions().len(), 1);
    assert_eq!(store.all_commissions().count(), 0);
    assert!(store.remove_customer(&customer("Alice")).is_err());
}

#[test]
fn test_reset_data_from_snapshot_round_trip() {
    let mut store = Store::new();
    store.add_customer(customer("Alice")).unwrap();
    store.add_commission(&name("Alice"), commission("Portrait")).unwrap();

    let snapshot = store.customer_list().to_vec();
    let mut restored = Store::new();
    restored.add_customer(customer("Zed")).unwrap();
    restored.reset_data(&snapshot).unwrap();

    assert_eq!(restored, store);
}

#[test]
fn test_reset_data_with_duplicates_changes_nothing() {
    let mut store = Store::new();
    store.add_customer(customer("Zed")).unwrap();

    let err = store
        .reset_data(&vec![customer("Alice"), customer("Alice")])
        .unwrap_err();
    assert!(matches!(err, ModelError::DuplicateEntities { .. }));
    assert!(store.has_customer(&customer("Zed")));
}

#[test]
fn test_json_round_trip_restores_owner_keys() {
    let mut store = Store::new();
    store.add_customer(customer("Alice")).unwrap();
    store.add_commission(&name("Alice"), commission("Portrait")).unwrap();

    let json = serde_json::to_string(&store).unwrap();
    assert!(!json.contains("owner"));

    let loaded: Store = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, store);
    let portrait = loaded.all_commissions().next().unwrap();
    assert!(portrait.is_owned_by(&name("Alice")));
}

#[test]
fn test_display_counts_customers() {
    let mut store = Store::new();
    store.add_customer(customer("Alice")).unwrap();
    assert_eq!(store.to_string(), "1 customers");
}
