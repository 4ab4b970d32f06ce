#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use artbuddy_core::core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_CUSTOMER, FIELD_DURATION_MS, FIELD_ERR_CODE,
    FIELD_ERR_KIND,
};
use artbuddy_core::errors::ModelError;
use artbuddy_core::logging_facility::init_test_capture;
use artbuddy_core::{log_op_end, log_op_error, log_op_start, ModelManager};
use common::{commission, customer};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, customer = "Alice");

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[0].field(FIELD_CUSTOMER), Some("Alice"));
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    log_op_error!(op_name, ModelError::NoActiveCustomer, duration_ms = 10);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(events[0].field(FIELD_ERR_CODE), Some("ERR_NO_ACTIVE_CUSTOMER"));
    assert_eq!(events[0].field(FIELD_ERR_KIND), Some("NoActiveCustomer"));
}

#[test]
fn test_model_operations_log_start_and_end() {
    let capture = init_test_capture();
    let name = "Logged Customer Unique";

    let mut model = ModelManager::default();
    model.add_customer(customer(name)).unwrap();

    let ours = |e: &artbuddy_core::logging_facility::CapturedEvent| {
        e.op.as_deref() == Some("add_customer")
    };
    let start = capture.count_events(|e| {
        ours(e) && e.event.as_deref() == Some(EVENT_START) && e.field(FIELD_CUSTOMER) == Some(name)
    });
    assert_eq!(start, 1);
    capture.assert_event_exists("add_customer", EVENT_END);
}

#[test]
fn test_contact_details_are_redacted() {
    let capture = init_test_capture();
    let name = "Redacted Customer Unique";

    let mut model = ModelManager::default();
    model.add_customer(customer(name)).unwrap();

    let start = capture
        .events_for("add_customer")
        .into_iter()
        .find(|e| e.field(FIELD_CUSTOMER) == Some(name))
        .expect("start event captured");
    assert_eq!(start.field("email"), Some("***REDACTED***"));
}

#[test]
fn test_failed_operation_logs_end_error() {
    let capture = init_test_capture();

    let mut model = ModelManager::default();
    let _ = model.select_commission(&commission("Failure Probe Unique"));

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("select_commission")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field(FIELD_ERR_CODE) == Some("ERR_NO_ACTIVE_CUSTOMER")
    });
    assert!(errors >= 1);
}
