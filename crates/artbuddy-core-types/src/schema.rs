//! Canonical schema constants for structured logging and events
//!
//! These constants keep log field names identical across the model layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_CUSTOMER: &str = "customer";
pub const FIELD_COMMISSION: &str = "commission";
pub const FIELD_ITERATION: &str = "iteration";

// Collection sizes
pub const FIELD_CUSTOMER_COUNT: &str = "customer_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_entity_fields_are_distinct() {
        assert_ne!(FIELD_CUSTOMER, FIELD_COMMISSION);
        assert_ne!(FIELD_COMMISSION, FIELD_ITERATION);
    }
}
