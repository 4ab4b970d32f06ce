mod common;

use artbuddy_core::errors::{ExError, ExErrorKind, ModelError};
use artbuddy_core::model::{EntityKind, Fee, Name};
use artbuddy_core::ModelManager;
use common::customer;

#[test]
fn test_not_found_verifiable_by_kind() {
    let mut model = ModelManager::default();
    let err = model.delete_customer(&customer("Ghost")).unwrap_err();

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.entity_kind(), Some(EntityKind::Customer));
    assert_eq!(ex_err.entity_id(), Some("Ghost"));
}

#[test]
fn test_selection_errors_have_their_own_codes() {
    let no_customer: ExError = ModelError::NoActiveCustomer.into();
    let no_commission: ExError = ModelError::NoActiveCommission.into();

    assert_eq!(no_customer.code(), "ERR_NO_ACTIVE_CUSTOMER");
    assert_eq!(no_commission.code(), "ERR_NO_ACTIVE_COMMISSION");
    assert_ne!(no_customer.kind(), no_commission.kind());
}

#[test]
fn test_invalid_value_structured_fields() {
    let err = Name::new("  ").unwrap_err();

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(ex_err.op(), Some("parse_name"));
    assert!(ex_err.message().contains("Invalid name"));
}

#[test]
fn test_fee_rejects_negative() {
    let err = Fee::new(-1.0).unwrap_err();
    assert!(matches!(err, ModelError::InvalidValue { field: "fee", .. }));
}

#[test]
fn test_duplicate_and_duplicates_share_a_kind() {
    let single: ExError = ModelError::duplicate(EntityKind::Customer, "Alice").into();
    let bulk: ExError = ModelError::DuplicateEntities {
        kind: EntityKind::Customer,
        key: "Alice".to_string(),
    }
    .into();

    assert_eq!(single.kind(), bulk.kind());
    assert_eq!(single.code(), "ERR_DUPLICATE_ENTITY");
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::DuplicateEntity, "ERR_DUPLICATE_ENTITY"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::NoActiveCustomer, "ERR_NO_ACTIVE_CUSTOMER"),
        (ExErrorKind::NoActiveCommission, "ERR_NO_ACTIVE_COMMISSION"),
        (ExErrorKind::PreconditionViolation, "ERR_PRECONDITION"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        (ExErrorKind::Concurrency, "ERR_CONCURRENCY"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_only_defects_are_unrecoverable() {
    assert!(ModelError::duplicate(EntityKind::Commission, "Portrait").is_user_recoverable());
    assert!(ModelError::NoActiveCommission.is_user_recoverable());
    assert!(!ModelError::precondition("not owned").is_user_recoverable());
    assert!(!ModelError::LockPoisoned {
        message: "poisoned".to_string()
    }
    .is_user_recoverable());
}

#[test]
fn test_serde_error_converts() {
    let err: ModelError = serde_json::from_str::<artbuddy_core::Store>("{").unwrap_err().into();
    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
}
