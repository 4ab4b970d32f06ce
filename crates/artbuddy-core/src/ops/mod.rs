pub mod store;

pub use store::{ReadOnlyStore, Store};
