//! Monotonic revision counters for change notification
//!
//! Observers compare a stored `Revision` against the current one to learn
//! that an entity changed in place, without relying on object identity.

use serde::{Deserialize, Serialize};

/// A monotonically increasing change counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Revision(u64);

impl Revision {
    /// The revision every counter starts at
    pub const INITIAL: Revision = Revision(0);

    /// Return the next revision
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Advance this counter in place and return the new value
    pub fn bump(&mut self) -> Self {
        *self = self.next();
        *self
    }

    /// Raw counter value
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}", self.0)
    }
}
