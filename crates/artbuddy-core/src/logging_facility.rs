//! Structured logging for the model layer
//!
//! - One initialization point, `init(profile)`
//! - Operation macros `log_op_start!`, `log_op_end!` and `log_op_error!`
//!   that emit the canonical fields from [`crate::core_types::schema`]
//! - An in-memory capture layer for assertions in tests
//!
//! ```rust
//! use artbuddy_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! Contact details (phone, email, address) must go through
//! [`Sensitive`](crate::core_types::Sensitive) before they reach a log line.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
