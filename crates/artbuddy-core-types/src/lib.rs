//! Core types shared across ArtBuddy facilities
//!
//! This crate provides foundational types used by the model, the error
//! facility and the logging facility:
//!
//! - **Revision counters**: Revision, bumped when an observed entity changes
//! - **Sensitive data**: Sensitive<T> marker for automatic redaction
//! - **Schema constants**: Canonical field keys and event names

pub mod revision;
pub mod schema;
pub mod sensitive;

pub use revision::Revision;
pub use sensitive::Sensitive;
