//! Selection and filtering over the customer store
//!
//! [`ModelManager`] is what callers mutate through. It owns the [`Store`],
//! the user preferences, two selection slots (active customer, active
//! commission) and the predicates behind the filtered views.
//!
//! Selection slots hold identity keys, not entities, and every operation
//! keeps them pointing at something that exists:
//!
//! | State | select_customer | select_commission | delete active customer | delete active commission |
//! |---|---|---|---|---|
//! | none/none | customer set | `NoActiveCustomer` | n/a | `NoActiveCustomer` |
//! | customer/none | customer replaced | commission set | both cleared | n/a |
//! | customer/commission | customer replaced, commission cleared | commission replaced | both cleared | commission cleared |
//!
//! Mutating operations log `start` and then `end` or `end_error`, and
//! failed operations leave the model unchanged.

mod filtered;
mod notify;
mod shared;

pub use filtered::FilteredView;
pub use notify::{ModelEvent, ModelListener, Revisions};
pub use shared::SharedModel;

use std::path::{Path, PathBuf};
use std::time::Instant;

use notify::Listeners;

use crate::core_types::{Revision, Sensitive};
use crate::errors::{ModelError, Result};
use crate::model::{Commission, Customer, EntityKind, Iteration, Name, SameIdentity, Title};
use crate::ops::{ReadOnlyStore, Store};
use crate::prefs::{GuiSettings, UserPrefs};
use crate::queries::{OwnedByCustomerPredicate, Predicate, ShowAll};
use crate::{log_op_end, log_op_error, log_op_start};

/// In-memory model: the store plus selection, filters and preferences
pub struct ModelManager {
    store: Store,
    user_prefs: UserPrefs,
    customer_filter: Box<dyn Predicate<Customer>>,
    commission_filter: Box<dyn Predicate<Commission>>,
    active_customer: Option<Name>,
    active_commission: Option<Title>,
    revisions: Revisions,
    listeners: Listeners,
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(Store::new(), UserPrefs::default())
    }
}

impl ModelManager {
    /// Create a manager over `store` with nothing selected
    pub fn new(store: Store, user_prefs: UserPrefs) -> Self {
        tracing::debug!(store = %store, "Initializing model manager");
        Self {
            store,
            user_prefs,
            customer_filter: Box::new(ShowAll),
            commission_filter: no_commissions(),
            active_customer: None,
            active_commission: None,
            revisions: Revisions::default(),
            listeners: Listeners::default(),
        }
    }

    /// Create a manager holding a copy of `source`
    ///
    /// # Errors
    /// * `DuplicateEntities` - if `source` holds two customers with the same name
    pub fn from_source(source: &dyn ReadOnlyStore, user_prefs: &UserPrefs) -> Result<Self> {
        Ok(Self::new(Store::from_source(source)?, user_prefs.clone()))
    }

    // ===== User preferences =====

    pub fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    pub fn set_user_prefs(&mut self, user_prefs: &UserPrefs) {
        self.user_prefs.reset_data(user_prefs);
        self.listeners.emit(ModelEvent::UserPrefsChanged);
    }

    pub fn gui_settings(&self) -> &GuiSettings {
        self.user_prefs.gui_settings()
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.user_prefs.set_gui_settings(gui_settings);
        self.listeners.emit(ModelEvent::UserPrefsChanged);
    }

    pub fn address_book_file_path(&self) -> &Path {
        self.user_prefs.address_book_file_path()
    }

    pub fn set_address_book_file_path(&mut self, path: impl Into<PathBuf>) {
        self.user_prefs.set_address_book_file_path(path);
        self.listeners.emit(ModelEvent::UserPrefsChanged);
    }

    // ===== Store =====

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Replace the whole customer graph with a copy of `source`
    ///
    /// The selection does not survive a reset; both slots end up unset.
    ///
    /// # Errors
    /// * `DuplicateEntities` - if `source` holds two customers with the same name
    pub fn set_store(&mut self, source: &dyn ReadOnlyStore) -> Result<()> {
        log_op_start!("set_store", customer_count = source.customer_list().len());
        self.logged("set_store", |model| {
            model.store.reset_data(source)?;
            model.store_changed();
            model.clear_active_customer();
            Ok(())
        })
    }

    // ===== Customers =====

    pub fn has_customer(&self, customer: &Customer) -> bool {
        self.store.has_customer(customer)
    }

    /// Add `customer` and show every customer again
    ///
    /// # Errors
    /// * `DuplicateEntity` - if a customer with the same name exists
    pub fn add_customer(&mut self, customer: Customer) -> Result<()> {
        log_op_start!(
            "add_customer",
            customer = %customer.name(),
            email = %Sensitive::new(customer.email())
        );
        self.logged("add_customer", |model| {
            model.store.add_customer(customer)?;
            model.store_changed();
            model.install_customer_filter(Box::new(ShowAll));
            Ok(())
        })
    }

    /// Remove `target` and its commissions
    ///
    /// Deleting the active customer clears both selection slots.
    ///
    /// # Errors
    /// * `EntityNotFound` - if `target` is not stored
    pub fn delete_customer(&mut self, target: &Customer) -> Result<()> {
        log_op_start!("delete_customer", customer = %target.name());
        self.logged("delete_customer", |model| {
            let removed = model.store.remove_customer(target)?;
            model.store_changed();
            if model.active_customer.as_ref() == Some(removed.name()) {
                model.clear_active_customer();
            }
            Ok(())
        })
    }

    /// Replace `target` with `edited`
    ///
    /// If `target` is active the slot follows it to the edited name. The
    /// active commission stays selected only while the edited customer
    /// still owns it.
    ///
    /// # Errors
    /// * `EntityNotFound` - if `target` is not stored
    /// * `DuplicateEntity` - if `edited` takes the name of another customer
    pub fn set_customer(&mut self, target: &Customer, edited: Customer) -> Result<()> {
        log_op_start!("set_customer", customer = %target.name(), edited = %edited.name());
        self.logged("set_customer", |model| {
            let edited_name = edited.name().clone();
            model.store.set_customer(target, edited)?;
            model.store_changed();

            if model.active_customer.as_ref() != Some(target.name()) {
                return Ok(());
            }
            let renamed = target.name() != &edited_name;
            model.active_customer = Some(edited_name);
            model.drop_stale_commission_selection();
            model.active_customer_changed();
            if renamed {
                model.reset_commission_filter();
            }
            Ok(())
        })
    }

    // ===== Commissions of the active customer =====

    /// # Errors
    /// * `NoActiveCustomer` - if no customer is selected
    pub fn has_commission(&self, commission: &Commission) -> Result<bool> {
        Ok(self.require_active_customer()?.has_commission(commission))
    }

    /// Add `commission` to the active customer
    ///
    /// # Errors
    /// * `NoActiveCustomer` - if no customer is selected
    /// * `DuplicateEntity` - if the active customer has a commission with that title
    pub fn add_commission(&mut self, commission: Commission) -> Result<()> {
        log_op_start!("add_commission", commission = %commission.title());
        self.logged("add_commission", |model| {
            let owner = model.require_active_customer_key()?;
            model.store.add_commission(&owner, commission)?;
            model.store_changed();
            model.active_customer_changed();
            model.install_customer_filter(Box::new(ShowAll));
            Ok(())
        })
    }

    /// Remove `target` from the active customer
    ///
    /// Deleting the active commission clears the commission slot only.
    ///
    /// # Errors
    /// * `NoActiveCustomer` - if no customer is selected
    /// * `EntityNotFound` - if the active customer has no such commission
    pub fn delete_commission(&mut self, target: &Commission) -> Result<()> {
        log_op_start!("delete_commission", commission = %target.title());
        self.logged("delete_commission", |model| {
            let owner = model.require_active_customer_key()?;
            let removed = model.store.remove_commission(&owner, target)?;
            model.store_changed();
            model.active_customer_changed();
            if model.active_commission.as_ref() == Some(removed.title()) {
                model.clear_active_commission();
            }
            Ok(())
        })
    }

    /// Replace `target` with `edited` in the active customer's list
    ///
    /// If `target` is active the slot follows it to the edited title.
    ///
    /// # Errors
    /// * `NoActiveCustomer` - if no customer is selected
    /// * `EntityNotFound` - if the active customer has no such commission
    /// * `DuplicateEntity` - if `edited` takes the title of another commission
    pub fn set_commission(&mut self, target: &Commission, edited: Commission) -> Result<()> {
        log_op_start!("set_commission", commission = %target.title(), edited = %edited.title());
        self.logged("set_commission", |model| {
            let owner = model.require_active_customer_key()?;
            let edited_title = edited.title().clone();
            model.store.set_commission(&owner, target, edited)?;
            model.store_changed();
            model.active_customer_changed();
            if model.active_commission.as_ref() == Some(target.title()) {
                model.active_commission = Some(edited_title);
                model.active_commission_changed();
            }
            Ok(())
        })
    }

    // ===== Iterations of the active commission =====

    /// # Errors
    /// * `NoActiveCommission` - if no commission is selected
    pub fn has_iteration(&self, iteration: &Iteration) -> Result<bool> {
        Ok(self
            .require_active_commission()?
            .iterations()
            .contains(iteration))
    }

    /// # Errors
    /// * `NoActiveCommission` - if no commission is selected
    /// * `DuplicateEntity` - if the active commission has an iteration with the same date and description
    pub fn add_iteration(&mut self, iteration: Iteration) -> Result<()> {
        log_op_start!("add_iteration", iteration = %iteration.identity_key());
        self.logged("add_iteration", |model| {
            model.active_commission_mut()?.add_iteration(iteration)?;
            model.iterations_changed();
            Ok(())
        })
    }

    /// # Errors
    /// * `NoActiveCommission` - if no commission is selected
    /// * `EntityNotFound` - if the active commission has no such iteration
    pub fn delete_iteration(&mut self, target: &Iteration) -> Result<()> {
        log_op_start!("delete_iteration", iteration = %target.identity_key());
        self.logged("delete_iteration", |model| {
            model.active_commission_mut()?.remove_iteration(target)?;
            model.iterations_changed();
            Ok(())
        })
    }

    /// # Errors
    /// * `NoActiveCommission` - if no commission is selected
    /// * `EntityNotFound` - if the active commission has no such iteration
    /// * `DuplicateEntity` - if `edited` clashes with another iteration
    pub fn set_iteration(&mut self, target: &Iteration, edited: Iteration) -> Result<()> {
        log_op_start!("set_iteration", iteration = %target.identity_key());
        self.logged("set_iteration", |model| {
            model.active_commission_mut()?.set_iteration(target, edited)?;
            model.iterations_changed();
            Ok(())
        })
    }

    // ===== Filtered views =====

    /// Customers accepted by the current customer predicate, in store order
    pub fn filtered_customer_list(&self) -> FilteredView<'_, Customer> {
        FilteredView::new(
            self.store
                .customers()
                .iter()
                .filter(|c| self.customer_filter.test(c)),
        )
    }

    /// Replace the customer predicate; predicates do not stack
    pub fn update_filtered_customer_list(&mut self, predicate: impl Predicate<Customer> + 'static) {
        self.install_customer_filter(Box::new(predicate));
    }

    /// Commissions, across every customer, accepted by the commission predicate
    pub fn filtered_commission_list(&self) -> FilteredView<'_, Commission> {
        FilteredView::new(
            self.store
                .all_commissions()
                .filter(|c| self.commission_filter.test(c)),
        )
    }

    /// Replace the commission predicate until the active customer next changes
    pub fn update_filtered_commission_list(
        &mut self,
        predicate: impl Predicate<Commission> + 'static,
    ) {
        self.commission_filter = Box::new(predicate);
        self.listeners.emit(ModelEvent::CommissionFilterChanged);
    }

    /// Show exactly the active customer's commissions, or none if unset
    pub fn update_filtered_commission_list_to_active_customer(&mut self) {
        self.reset_commission_filter();
    }

    // ===== Selection =====

    pub fn active_customer(&self) -> Option<&Customer> {
        self.active_customer
            .as_ref()
            .and_then(|name| self.store.customer(name))
    }

    /// Name of the active customer
    pub fn active_customer_key(&self) -> Option<&Name> {
        self.active_customer.as_ref()
    }

    pub fn has_active_customer(&self) -> bool {
        self.active_customer.is_some()
    }

    pub fn active_commission(&self) -> Option<&Commission> {
        let title = self.active_commission.as_ref()?;
        self.active_customer()?.commission(title)
    }

    /// Title of the active commission
    pub fn active_commission_key(&self) -> Option<&Title> {
        self.active_commission.as_ref()
    }

    pub fn has_active_commission(&self) -> bool {
        self.active_commission.is_some()
    }

    /// Make the stored customer matching `customer` active
    ///
    /// Always clears the active commission and resets the commission
    /// predicate to that customer's commissions, even when re-selecting the
    /// customer that is already active.
    ///
    /// # Errors
    /// * `EntityNotFound` - if no stored customer has that name
    pub fn select_customer(&mut self, customer: &Customer) -> Result<()> {
        log_op_start!("select_customer", customer = %customer.name());
        self.logged("select_customer", |model| {
            let name = model
                .store
                .customers()
                .find(customer)
                .map(|c| c.name().clone())
                .ok_or_else(|| {
                    ModelError::not_found(EntityKind::Customer, customer.identity_key())
                })?;

            model.clear_active_commission();
            model.active_customer = Some(name);
            model.active_customer_changed();
            model.reset_commission_filter();
            Ok(())
        })
    }

    /// Make `commission` active; it must belong to the active customer
    ///
    /// # Errors
    /// * `NoActiveCustomer` - if no customer is selected
    /// * `PreconditionViolation` - if the active customer does not own `commission`
    pub fn select_commission(&mut self, commission: &Commission) -> Result<()> {
        log_op_start!("select_commission", commission = %commission.title());
        self.logged("select_commission", |model| {
            let customer = model.require_active_customer()?;
            let title = customer
                .commissions()
                .find(commission)
                .map(|c| c.title().clone())
                .ok_or_else(|| {
                    ModelError::precondition(format!(
                        "commission '{}' does not belong to active customer '{}'",
                        commission.title(),
                        customer.name()
                    ))
                })?;

            model.active_commission = Some(title);
            model.active_commission_changed();
            Ok(())
        })
    }

    /// Unset both selection slots
    pub fn clear_active_customer(&mut self) {
        self.clear_active_commission();
        if self.active_customer.take().is_some() {
            self.active_customer_changed();
            self.reset_commission_filter();
        }
    }

    /// Unset the commission slot, leaving the customer selected
    pub fn clear_active_commission(&mut self) {
        if self.active_commission.take().is_some() {
            self.active_commission_changed();
        }
    }

    /// Tell observers the active customer changed in place
    ///
    /// # Errors
    /// * `NoActiveCustomer` - if no customer is selected
    pub fn refresh_active_customer(&mut self) -> Result<Revision> {
        self.require_active_customer()?;
        Ok(self.active_customer_changed())
    }

    // ===== Observation =====

    pub fn revisions(&self) -> Revisions {
        self.revisions
    }

    /// Register `listener` for every subsequent [`ModelEvent`]
    pub fn subscribe(&mut self, listener: impl ModelListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // ===== Internals =====

    fn logged<T>(
        &mut self,
        op: &'static str,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let start = Instant::now();
        let result = f(self);
        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => {
                log_op_end!(op, duration_ms = duration_ms);
            }
            Err(err) => {
                log_op_error!(op, err.clone(), duration_ms = duration_ms);
            }
        }
        result
    }

    fn require_active_customer_key(&self) -> Result<Name> {
        self.active_customer
            .clone()
            .ok_or(ModelError::NoActiveCustomer)
    }

    fn require_active_customer(&self) -> Result<&Customer> {
        let name = self
            .active_customer
            .as_ref()
            .ok_or(ModelError::NoActiveCustomer)?;
        self.store
            .customer(name)
            .ok_or_else(|| out_of_sync(EntityKind::Customer, name.as_str()))
    }

    fn require_active_commission(&self) -> Result<&Commission> {
        let title = self
            .active_commission
            .as_ref()
            .ok_or(ModelError::NoActiveCommission)?;
        self.active_customer()
            .and_then(|c| c.commission(title))
            .ok_or_else(|| out_of_sync(EntityKind::Commission, title.as_str()))
    }

    fn active_commission_mut(&mut self) -> Result<&mut Commission> {
        let (Some(owner), Some(title)) = (&self.active_customer, &self.active_commission) else {
            return Err(ModelError::NoActiveCommission);
        };
        self.store
            .customer_mut(owner)
            .and_then(|c| c.commission_mut(title))
            .ok_or_else(|| out_of_sync(EntityKind::Commission, title.as_str()))
    }

    fn drop_stale_commission_selection(&mut self) {
        let still_owned = match (&self.active_commission, self.active_customer()) {
            (Some(title), Some(customer)) => customer.commission(title).is_some(),
            _ => true,
        };
        if !still_owned {
            self.clear_active_commission();
        }
    }

    fn selection_commission_filter(&self) -> Box<dyn Predicate<Commission>> {
        match &self.active_customer {
            Some(name) => Box::new(OwnedByCustomerPredicate::new(name.clone())),
            None => no_commissions(),
        }
    }

    fn reset_commission_filter(&mut self) {
        self.commission_filter = self.selection_commission_filter();
        self.listeners.emit(ModelEvent::CommissionFilterChanged);
    }

    fn install_customer_filter(&mut self, predicate: Box<dyn Predicate<Customer>>) {
        self.customer_filter = predicate;
        self.listeners.emit(ModelEvent::CustomerFilterChanged);
    }

    fn store_changed(&mut self) {
        let revision = self.revisions.store.bump();
        self.listeners.emit(ModelEvent::StoreChanged(revision));
    }

    fn active_customer_changed(&mut self) -> Revision {
        let revision = self.revisions.active_customer.bump();
        self.listeners
            .emit(ModelEvent::ActiveCustomerChanged(revision));
        revision
    }

    fn active_commission_changed(&mut self) {
        let revision = self.revisions.active_commission.bump();
        self.listeners
            .emit(ModelEvent::ActiveCommissionChanged(revision));
    }

    fn iterations_changed(&mut self) {
        self.store_changed();
        self.active_customer_changed();
        self.active_commission_changed();
    }
}

fn no_commissions() -> Box<dyn Predicate<Commission>> {
    Box::new(|_: &Commission| false)
}

fn out_of_sync(kind: EntityKind, key: &str) -> ModelError {
    ModelError::precondition(format!("active {} '{}' is missing from the store", kind, key))
}

impl PartialEq for ModelManager {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
            && self.user_prefs == other.user_prefs
            && self.active_customer == other.active_customer
            && self.active_commission == other.active_commission
            && self.filtered_customer_list() == other.filtered_customer_list()
            && self.filtered_commission_list() == other.filtered_commission_list()
    }
}

impl std::fmt::Debug for ModelManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelManager")
            .field("store", &self.store)
            .field("user_prefs", &self.user_prefs)
            .field("active_customer", &self.active_customer)
            .field("active_commission", &self.active_commission)
            .field("revisions", &self.revisions)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
