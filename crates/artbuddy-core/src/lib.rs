//! ArtBuddy Core - in-memory model of customers, commissions and iterations
//!
//! This crate provides the model layer that the command and presentation
//! layers drive:
//! - Validated value types and the `Customer` > `Commission` > `Iteration` hierarchy
//! - `UniqueEntityList`, the identity-deduplicating collection behind every level
//! - `Store`, the customer graph with commission CRUD scoped to one customer
//! - `ModelManager`, active-customer/active-commission selection and filtered views
//! - User preferences, filter predicates and structural invariant checks
//!
//! Persistence, command parsing and rendering live outside this crate.

pub mod errors;
pub mod logging_facility;
pub mod manager;
pub mod model;
pub mod ops;
pub mod prefs;
pub mod queries;
pub mod rules;

pub use artbuddy_core_types as core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, ModelError, Result};
pub use manager::{FilteredView, ModelEvent, ModelListener, ModelManager, SharedModel};
pub use model::{Commission, Customer, Iteration, SameIdentity, UniqueEntityList};
pub use ops::{ReadOnlyStore, Store};
pub use prefs::{GuiSettings, UserPrefs};
pub use queries::Predicate;
