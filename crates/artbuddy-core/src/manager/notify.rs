//! Change notification for observers of the model
//!
//! Observers do not compare object identity to detect change. Each mutation
//! bumps a [`Revision`] and emits a [`ModelEvent`] to every subscribed
//! [`ModelListener`].

use crate::core_types::Revision;

/// What changed in the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelEvent {
    /// The customer graph changed; carries the new store revision
    StoreChanged(Revision),
    CustomerFilterChanged,
    CommissionFilterChanged,
    /// The active customer slot moved, or the active customer's data changed
    ActiveCustomerChanged(Revision),
    /// The active commission slot moved, or the active commission's data changed
    ActiveCommissionChanged(Revision),
    UserPrefsChanged,
}

/// Receives every [`ModelEvent`] after the mutation that caused it completes
pub trait ModelListener: Send + Sync {
    fn on_event(&self, event: &ModelEvent);
}

impl<F> ModelListener for F
where
    F: Fn(&ModelEvent) + Send + Sync,
{
    fn on_event(&self, event: &ModelEvent) {
        self(event)
    }
}

/// Current revision of each observable part of the model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Revisions {
    pub store: Revision,
    pub active_customer: Revision,
    pub active_commission: Revision,
}

#[derive(Default)]
pub(crate) struct Listeners {
    listeners: Vec<Box<dyn ModelListener>>,
}

impl Listeners {
    pub(crate) fn push(&mut self, listener: Box<dyn ModelListener>) {
        self.listeners.push(listener);
    }

    pub(crate) fn emit(&self, event: ModelEvent) {
        tracing::trace!(?event, listeners = self.listeners.len(), "Emitting model event");
        for listener in &self.listeners {
            listener.on_event(&event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}
