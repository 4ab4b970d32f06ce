use std::collections::BTreeSet;

use super::{contains_word_ignore_case, Predicate};
use crate::model::{Commission, CompletionStatus, Name, Tag};

/// Matches commissions owned by the customer called `owner`
///
/// This is the default commission filter once a customer is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedByCustomerPredicate {
    owner: Name,
}

impl OwnedByCustomerPredicate {
    pub fn new(owner: Name) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> &Name {
        &self.owner
    }
}

impl Predicate<Commission> for OwnedByCustomerPredicate {
    fn test(&self, commission: &Commission) -> bool {
        commission.is_owned_by(&self.owner)
    }
}

/// Matches commissions whose title contains any of the keywords as a whole word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleContainsKeywordsPredicate {
    keywords: Vec<String>,
}

impl TitleContainsKeywordsPredicate {
    pub fn new(keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

impl Predicate<Commission> for TitleContainsKeywordsPredicate {
    fn test(&self, commission: &Commission) -> bool {
        self.keywords
            .iter()
            .any(|keyword| contains_word_ignore_case(commission.title().as_str(), keyword))
    }
}

/// Matches commissions in the given completion status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionStatusPredicate {
    status: CompletionStatus,
}

impl CompletionStatusPredicate {
    pub fn new(status: CompletionStatus) -> Self {
        Self { status }
    }
}

impl Predicate<Commission> for CompletionStatusPredicate {
    fn test(&self, commission: &Commission) -> bool {
        commission.status() == self.status
    }
}

/// Matches commissions carrying at least one of the tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommissionContainsAnyTagPredicate {
    tags: BTreeSet<Tag>,
}

impl CommissionContainsAnyTagPredicate {
    pub fn new(tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
        }
    }
}

impl Predicate<Commission> for CommissionContainsAnyTagPredicate {
    fn test(&self, commission: &Commission) -> bool {
        !self.tags.is_disjoint(commission.tags())
    }
}
