use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::commission_fields::{CompletionStatus, Deadline, Description, Fee, Title};
use super::customer_fields::{Name, Tag};
use super::iteration::Iteration;
use super::unique_list::{EntityKind, SameIdentity, UniqueEntityList};
use crate::errors::Result;

/// A piece of paid work requested by one customer
///
/// A commission belongs to exactly one customer. The owner is recorded as
/// that customer's [`Name`], a lookup key rather than a pointer, and is
/// stamped by the customer whenever the commission enters its list. It is
/// never serialized; loading a customer re-derives it.
///
/// Identity is the title alone. Uniqueness is only enforced inside one
/// customer's list, so two customers may each own a "Portrait".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commission {
    title: Title,
    fee: Fee,
    deadline: Deadline,
    status: CompletionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<Description>,
    #[serde(default)]
    tags: BTreeSet<Tag>,
    #[serde(skip)]
    owner: Option<Name>,
    #[serde(default)]
    iterations: UniqueEntityList<Iteration>,
}

impl Commission {
    /// Start building a commission from its required fields
    pub fn builder(
        title: Title,
        fee: Fee,
        deadline: Deadline,
        status: CompletionStatus,
    ) -> CommissionBuilder {
        CommissionBuilder::new(title, fee, deadline, status)
    }

    /// A builder pre-filled with every field of `self`, for producing edited copies
    ///
    /// The owner is not carried over; it is stamped again when the edited
    /// copy enters a customer's list.
    pub fn to_builder(&self) -> CommissionBuilder {
        CommissionBuilder {
            title: self.title.clone(),
            fee: self.fee,
            deadline: self.deadline,
            status: self.status,
            description: self.description.clone(),
            tags: self.tags.clone(),
            iterations: self.iterations.clone(),
        }
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn fee(&self) -> Fee {
        self.fee
    }

    pub fn deadline(&self) -> Deadline {
        self.deadline
    }

    pub fn status(&self) -> CompletionStatus {
        self.status
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Name of the owning customer, once the commission has been added to one
    pub fn owner(&self) -> Option<&Name> {
        self.owner.as_ref()
    }

    /// True if the commission sits in the list of the customer called `name`
    pub fn is_owned_by(&self, name: &Name) -> bool {
        self.owner.as_ref() == Some(name)
    }

    pub(crate) fn set_owner(&mut self, owner: Name) {
        self.owner = Some(owner);
    }

    pub fn iterations(&self) -> &UniqueEntityList<Iteration> {
        &self.iterations
    }

    /// # Errors
    /// * `DuplicateEntity` - if an iteration with the same date and description exists
    pub fn add_iteration(&mut self, iteration: Iteration) -> Result<()> {
        self.iterations.add(iteration)
    }

    /// # Errors
    /// * `EntityNotFound` - if `target` is not one of this commission's iterations
    /// * `DuplicateEntity` - if `edited` clashes with another iteration
    pub fn set_iteration(&mut self, target: &Iteration, edited: Iteration) -> Result<()> {
        self.iterations.set_element(target, edited)
    }

    /// # Errors
    /// * `EntityNotFound` - if `target` is not one of this commission's iterations
    pub fn remove_iteration(&mut self, target: &Iteration) -> Result<Iteration> {
        self.iterations.remove(target)
    }
}

impl SameIdentity for Commission {
    const KIND: EntityKind = EntityKind::Commission;

    fn is_same(&self, other: &Self) -> bool {
        self.title == other.title
    }

    fn identity_key(&self) -> String {
        self.title.to_string()
    }
}

impl Hash for Commission {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.fee.hash(state);
        self.deadline.hash(state);
        self.tags.hash(state);
    }
}

impl std::fmt::Display for Commission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Fee: {}; Deadline: {}; Status: {}",
            self.title, self.fee, self.deadline, self.status
        )?;
        if let Some(description) = &self.description {
            write!(f, "; Description: {}", description)?;
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

/// Builder for [`Commission`]
///
/// Required fields go through [`CommissionBuilder::new`]; everything else is
/// optional.
#[derive(Debug, Clone)]
pub struct CommissionBuilder {
    title: Title,
    fee: Fee,
    deadline: Deadline,
    status: CompletionStatus,
    description: Option<Description>,
    tags: BTreeSet<Tag>,
    iterations: UniqueEntityList<Iteration>,
}

impl CommissionBuilder {
    pub fn new(title: Title, fee: Fee, deadline: Deadline, status: CompletionStatus) -> Self {
        Self {
            title,
            fee,
            deadline,
            status,
            description: None,
            tags: BTreeSet::new(),
            iterations: UniqueEntityList::new(),
        }
    }

    pub fn title(mut self, title: Title) -> Self {
        self.title = title;
        self
    }

    pub fn fee(mut self, fee: Fee) -> Self {
        self.fee = fee;
        self
    }

    pub fn deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn status(mut self, status: CompletionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn description(mut self, description: Description) -> Self {
        self.description = Some(description);
        self
    }

    /// Replace the tag set
    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn iterations(mut self, iterations: UniqueEntityList<Iteration>) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn build(self) -> Commission {
        Commission {
            title: self.title,
            fee: self.fee,
            deadline: self.deadline,
            status: self.status,
            description: self.description,
            tags: self.tags,
            owner: None,
            iterations: self.iterations,
        }
    }
}
