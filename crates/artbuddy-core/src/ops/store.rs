use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, Result};
use crate::model::{Commission, Customer, EntityKind, Name, UniqueEntityList};

/// Read access to a full customer graph
///
/// This is what the persistence layer reads from and what
/// [`Store::reset_data`] copies from.
pub trait ReadOnlyStore {
    /// Every customer, in insertion order, with their owned commissions
    fn customer_list(&self) -> &[Customer];
}

impl ReadOnlyStore for Vec<Customer> {
    fn customer_list(&self) -> &[Customer] {
        self
    }
}

/// In-memory store for the customer graph (the address book)
///
/// Owns the top-level customer list; commissions live inside their
/// customers, so removing a customer drops its commissions with it.
/// Customers are unique by name, commissions by title within one customer.
///
/// Not thread-safe on its own; see [`SharedModel`](crate::manager::SharedModel).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    customers: UniqueEntityList<Customer>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Store holding a copy of `source`
    ///
    /// # Errors
    /// * `DuplicateEntities` - if `source` holds two customers with the same name
    pub fn from_source(source: &dyn ReadOnlyStore) -> Result<Self> {
        let mut store = Self::new();
        store.reset_data(source)?;
        Ok(store)
    }

    /// Replace every customer with `customers`
    ///
    /// # Errors
    /// * `DuplicateEntities` - if `customers` holds two customers with the same name
    pub fn set_customers(&mut self, customers: Vec<Customer>) -> Result<()> {
        self.customers.set_all(customers)
    }

    /// Replace the whole graph with a copy of `source`
    ///
    /// Either every customer is replaced or nothing changes.
    ///
    /// # Errors
    /// * `DuplicateEntities` - if `source` holds two customers with the same name
    pub fn reset_data(&mut self, source: &dyn ReadOnlyStore) -> Result<()> {
        let customers = source.customer_list().to_vec();
        tracing::debug!(customer_count = customers.len(), "resetting store");
        self.set_customers(customers)
    }

    // ===== Customers =====

    pub fn customers(&self) -> &UniqueEntityList<Customer> {
        &self.customers
    }

    /// The customer called `name`, if any
    pub fn customer(&self, name: &Name) -> Option<&Customer> {
        self.customers.find_by(|c| c.name() == name)
    }

    pub(crate) fn customer_mut(&mut self, name: &Name) -> Option<&mut Customer> {
        self.customers.find_mut_by(|c| c.name() == name)
    }

    /// True if a customer with the same name is stored
    pub fn has_customer(&self, customer: &Customer) -> bool {
        self.customers.contains(customer)
    }

    /// # Errors
    /// * `DuplicateEntity` - if a customer with the same name is stored
    pub fn add_customer(&mut self, customer: Customer) -> Result<()> {
        self.customers.add(customer)
    }

    /// Replace `target` with `edited`
    ///
    /// `edited` may carry a new name as long as no other customer has it.
    /// Its commissions already point at the new name, so nothing in the
    /// store refers to the old one afterwards.
    ///
    /// # Errors
    /// * `EntityNotFound` - if `target` is not stored
    /// * `DuplicateEntity` - if `edited` takes the name of another customer
    pub fn set_customer(&mut self, target: &Customer, edited: Customer) -> Result<()> {
        self.customers.set_element(target, edited)
    }

    /// Remove `target` along with all of its commissions
    ///
    /// # Errors
    /// * `EntityNotFound` - if `target` is not stored
    pub fn remove_customer(&mut self, target: &Customer) -> Result<Customer> {
        self.customers.remove(target)
    }

    // ===== Commissions (scoped to one customer) =====

    fn owner(&self, owner: &Name) -> Result<&Customer> {
        self.customer(owner)
            .ok_or_else(|| ModelError::not_found(EntityKind::Customer, owner.as_str()))
    }

    fn owner_mut(&mut self, owner: &Name) -> Result<&mut Customer> {
        self.customer_mut(owner)
            .ok_or_else(|| ModelError::not_found(EntityKind::Customer, owner.as_str()))
    }

    /// Commissions of the customer called `owner`
    ///
    /// # Errors
    /// * `EntityNotFound` - if no customer is called `owner`
    pub fn commission_list(&self, owner: &Name) -> Result<&[Commission]> {
        Ok(self.owner(owner)?.commissions().as_slice())
    }

    /// True if `owner` has a commission with the same title
    ///
    /// # Errors
    /// * `EntityNotFound` - if no customer is called `owner`
    pub fn has_commission(&self, owner: &Name, commission: &Commission) -> Result<bool> {
        Ok(self.owner(owner)?.has_commission(commission))
    }

    /// # Errors
    /// * `EntityNotFound` - if no customer is called `owner`
    /// * `DuplicateEntity` - if `owner` already has a commission with that title
    pub fn add_commission(&mut self, owner: &Name, commission: Commission) -> Result<()> {
        self.owner_mut(owner)?.add_commission(commission)
    }

    /// # Errors
    /// * `EntityNotFound` - if `owner` or `target` does not exist
    /// * `DuplicateEntity` - if `edited` takes the title of another of `owner`'s commissions
    pub fn set_commission(
        &mut self,
        owner: &Name,
        target: &Commission,
        edited: Commission,
    ) -> Result<()> {
        self.owner_mut(owner)?.set_commission(target, edited)
    }

    /// # Errors
    /// * `EntityNotFound` - if `owner` or `target` does not exist
    pub fn remove_commission(&mut self, owner: &Name, target: &Commission) -> Result<Commission> {
        self.owner_mut(owner)?.remove_commission(target)
    }

    /// Every commission of every customer, customer by customer
    pub fn all_commissions(&self) -> impl Iterator<Item = &Commission> + '_ {
        self.customers.iter().flat_map(|c| c.commissions().iter())
    }
}

impl ReadOnlyStore for Store {
    fn customer_list(&self) -> &[Customer] {
        self.customers.as_slice()
    }
}

impl std::fmt::Display for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} customers", self.customers.len())
    }
}
