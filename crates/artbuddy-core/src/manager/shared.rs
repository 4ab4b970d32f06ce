use std::sync::{Arc, Mutex};

use super::ModelManager;
use crate::errors::{ModelError, Result};

/// A [`ModelManager`] behind one exclusive lock
///
/// Each closure passed to [`with`](Self::with) or [`with_mut`](Self::with_mut)
/// runs as a single atomic unit, so back-references and the selection are
/// never observed half-updated.
#[derive(Clone, Default)]
pub struct SharedModel {
    inner: Arc<Mutex<ModelManager>>,
}

impl SharedModel {
    pub fn new(model: ModelManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(model)),
        }
    }

    /// Run `f` with shared access to the model
    ///
    /// # Errors
    /// * `LockPoisoned` - if a thread panicked while holding the lock
    pub fn with<R>(&self, f: impl FnOnce(&ModelManager) -> R) -> Result<R> {
        let guard = self
            .inner
            .lock()
            .map_err(|e| ModelError::LockPoisoned {
                message: e.to_string(),
            })?;
        Ok(f(&guard))
    }

    /// Run `f` with exclusive access to the model
    ///
    /// # Errors
    /// * `LockPoisoned` - if a thread panicked while holding the lock
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut ModelManager) -> R) -> Result<R> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|e| ModelError::LockPoisoned {
                message: e.to_string(),
            })?;
        Ok(f(&mut guard))
    }
}

impl std::fmt::Debug for SharedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedModel")
            .field("strong_count", &Arc::strong_count(&self.inner))
            .finish_non_exhaustive()
    }
}
