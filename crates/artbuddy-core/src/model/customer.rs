use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::commission::Commission;
use super::commission_fields::Title;
use super::customer_fields::{Address, Email, Name, Phone, Tag};
use super::unique_list::{EntityKind, SameIdentity, UniqueEntityList};
use crate::errors::Result;

/// A person who orders commissions
///
/// Identity is the name (exact, case-sensitive). The customer owns its
/// commissions outright: every commission in [`Customer::commissions`]
/// carries this customer's name as its owner key, and the methods that
/// change the list keep it that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CustomerRecord")]
pub struct Customer {
    name: Name,
    phone: Phone,
    email: Email,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<Address>,
    tags: BTreeSet<Tag>,
    commissions: UniqueEntityList<Commission>,
}

/// Wire shape of a customer; owner keys are re-derived on conversion
#[derive(Deserialize)]
struct CustomerRecord {
    name: Name,
    phone: Phone,
    email: Email,
    #[serde(default)]
    address: Option<Address>,
    #[serde(default)]
    tags: BTreeSet<Tag>,
    #[serde(default)]
    commissions: UniqueEntityList<Commission>,
}

impl From<CustomerRecord> for Customer {
    fn from(record: CustomerRecord) -> Self {
        let mut customer = Customer {
            name: record.name,
            phone: record.phone,
            email: record.email,
            address: record.address,
            tags: record.tags,
            commissions: record.commissions,
        };
        customer.claim_commissions();
        customer
    }
}

impl Customer {
    /// Start building a customer from its required fields
    pub fn builder(name: Name, phone: Phone, email: Email) -> CustomerBuilder {
        CustomerBuilder::new(name, phone, email)
    }

    /// A builder pre-filled with every field of `self`, commissions included
    pub fn to_builder(&self) -> CustomerBuilder {
        CustomerBuilder {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            tags: self.tags.clone(),
            commissions: self.commissions.clone(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn commissions(&self) -> &UniqueEntityList<Commission> {
        &self.commissions
    }

    /// The commission titled `title`, if this customer owns one
    pub fn commission(&self, title: &Title) -> Option<&Commission> {
        self.commissions.find_by(|c| c.title() == title)
    }

    pub(crate) fn commission_mut(&mut self, title: &Title) -> Option<&mut Commission> {
        self.commissions.find_mut_by(|c| c.title() == title)
    }

    /// True if a commission with the same title is in this customer's list
    pub fn has_commission(&self, commission: &Commission) -> bool {
        self.commissions.contains(commission)
    }

    /// Add `commission`, stamping this customer as its owner
    ///
    /// # Errors
    /// * `DuplicateEntity` - if this customer already has a commission with that title
    pub fn add_commission(&mut self, mut commission: Commission) -> Result<()> {
        commission.set_owner(self.name.clone());
        self.commissions.add(commission)
    }

    /// Replace `target` with `edited`, stamping this customer as the owner
    ///
    /// # Errors
    /// * `EntityNotFound` - if `target` is not in this customer's list
    /// * `DuplicateEntity` - if `edited` takes the title of another commission
    pub fn set_commission(&mut self, target: &Commission, mut edited: Commission) -> Result<()> {
        edited.set_owner(self.name.clone());
        self.commissions.set_element(target, edited)
    }

    /// # Errors
    /// * `EntityNotFound` - if `target` is not in this customer's list
    pub fn remove_commission(&mut self, target: &Commission) -> Result<Commission> {
        self.commissions.remove(target)
    }

    /// Re-stamp every owned commission with this customer's name
    pub(crate) fn claim_commissions(&mut self) {
        let owner = self.name.clone();
        self.commissions
            .for_each_mut(|commission| commission.set_owner(owner.clone()));
    }

    /// Total fees over all commissions
    pub fn revenue(&self) -> f64 {
        self.commissions.iter().map(|c| c.fee().amount()).sum()
    }

    pub fn commission_count(&self) -> usize {
        self.commissions.len()
    }

    pub fn completed_commission_count(&self) -> usize {
        self.commissions
            .iter()
            .filter(|c| c.status().is_completed())
            .count()
    }

    pub fn in_progress_commission_count(&self) -> usize {
        self.commission_count() - self.completed_commission_count()
    }
}

impl SameIdentity for Customer {
    const KIND: EntityKind = EntityKind::Customer;

    fn is_same(&self, other: &Self) -> bool {
        self.name == other.name
    }

    fn identity_key(&self) -> String {
        self.name.to_string()
    }
}

impl Hash for Customer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.phone.hash(state);
        self.email.hash(state);
        self.address.hash(state);
        self.tags.hash(state);
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}",
            self.name, self.phone, self.email
        )?;
        if let Some(address) = &self.address {
            write!(f, "; Address: {}", address)?;
        }
        if !self.tags.is_empty() {
            write!(f, "; Tags: ")?;
            for tag in &self.tags {
                write!(f, "[{}]", tag)?;
            }
        }
        Ok(())
    }
}

/// Builder for [`Customer`]
#[derive(Debug, Clone)]
pub struct CustomerBuilder {
    name: Name,
    phone: Phone,
    email: Email,
    address: Option<Address>,
    tags: BTreeSet<Tag>,
    commissions: UniqueEntityList<Commission>,
}

impl CustomerBuilder {
    pub fn new(name: Name, phone: Phone, email: Email) -> Self {
        Self {
            name,
            phone,
            email,
            address: None,
            tags: BTreeSet::new(),
            commissions: UniqueEntityList::new(),
        }
    }

    pub fn name(mut self, name: Name) -> Self {
        self.name = name;
        self
    }

    pub fn phone(mut self, phone: Phone) -> Self {
        self.phone = phone;
        self
    }

    pub fn email(mut self, email: Email) -> Self {
        self.email = email;
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Replace the tag set
    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn commissions(mut self, commissions: UniqueEntityList<Commission>) -> Self {
        self.commissions = commissions;
        self
    }

    /// Build the customer; every supplied commission is stamped with its name
    pub fn build(self) -> Customer {
        let mut customer = Customer {
            name: self.name,
            phone: self.phone,
            email: self.email,
            address: self.address,
            tags: self.tags,
            commissions: self.commissions,
        };
        customer.claim_commissions();
        customer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CompletionStatus, Fee};

    fn alice() -> Customer {
        Customer::builder(
            Name::new("Alice").unwrap(),
            Phone::new("91234567").unwrap(),
            Email::new("alice@example.com").unwrap(),
        )
        .build()
    }

    fn commission(title: &str, fee: f64, done: bool) -> Commission {
        Commission::builder(
            Title::new(title).unwrap(),
            Fee::new(fee).unwrap(),
            "2022-12-01".parse().unwrap(),
            CompletionStatus::new(done),
        )
        .build()
    }

    #[test]
    fn test_add_commission_stamps_owner() {
        let mut customer = alice();
        customer.add_commission(commission("Portrait", 10.0, false)).unwrap();

        let stored = customer.commission(&Title::new("Portrait").unwrap()).unwrap();
        assert!(stored.is_owned_by(customer.name()));
    }

    #[test]
    fn test_renamed_copy_reclaims_commissions() {
        let mut customer = alice();
        customer.add_commission(commission("Portrait", 10.0, false)).unwrap();

        let renamed = customer.to_builder().name(Name::new("Alicia").unwrap()).build();
        let owner = renamed.commissions().get(0).and_then(|c| c.owner());
        assert_eq!(owner.map(|n| n.as_str()), Some("Alicia"));
    }

    #[test]
    fn test_statistics() {
        let mut customer = alice();
        customer.add_commission(commission("Portrait", 10.0, true)).unwrap();
        customer.add_commission(commission("Landscape", 25.5, false)).unwrap();

        assert_eq!(customer.revenue(), 35.5);
        assert_eq!(customer.commission_count(), 2);
        assert_eq!(customer.completed_commission_count(), 1);
        assert_eq!(customer.in_progress_commission_count(), 1);
    }

    #[test]
    fn test_deserialize_restores_owner_keys() {
        let mut customer = alice();
        customer.add_commission(commission("Portrait", 10.0, false)).unwrap();

        let json = serde_json::to_string(&customer).unwrap();
        let back: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, customer);
    }
}
