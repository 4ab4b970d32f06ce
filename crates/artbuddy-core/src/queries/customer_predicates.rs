use std::collections::BTreeSet;

use super::{contains_word_ignore_case, Predicate};
use crate::model::{Customer, Tag};

/// Matches customers whose name contains any of the keywords as a whole word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywordsPredicate {
    keywords: Vec<String>,
}

impl NameContainsKeywordsPredicate {
    pub fn new(keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Predicate<Customer> for NameContainsKeywordsPredicate {
    fn test(&self, customer: &Customer) -> bool {
        self.keywords
            .iter()
            .any(|keyword| contains_word_ignore_case(customer.name().as_str(), keyword))
    }
}

/// Matches customers carrying at least one of the tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerContainsAnyTagPredicate {
    tags: BTreeSet<Tag>,
}

impl CustomerContainsAnyTagPredicate {
    pub fn new(tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
        }
    }
}

impl Predicate<Customer> for CustomerContainsAnyTagPredicate {
    fn test(&self, customer: &Customer) -> bool {
        !self.tags.is_disjoint(customer.tags())
    }
}

/// Matches customers carrying every one of the tags
///
/// An empty tag set matches every customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerContainsAllTagsPredicate {
    tags: BTreeSet<Tag>,
}

impl CustomerContainsAllTagsPredicate {
    pub fn new(tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
        }
    }
}

impl Predicate<Customer> for CustomerContainsAllTagsPredicate {
    fn test(&self, customer: &Customer) -> bool {
        self.tags.is_subset(customer.tags())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Email, Name, Phone};

    fn customer(name: &str, tags: &[&str]) -> Customer {
        Customer::builder(
            Name::new(name).unwrap(),
            Phone::new("94351253").unwrap(),
            Email::new("customer@example.com").unwrap(),
        )
        .tags(tags.iter().map(|t| Tag::new(*t).unwrap()))
        .build()
    }

    fn tags(raw: &[&str]) -> Vec<Tag> {
        raw.iter().map(|t| Tag::new(*t).unwrap()).collect()
    }

    #[test]
    fn test_name_keywords() {
        let predicate = NameContainsKeywordsPredicate::new(["carl", "Bob"]);
        assert!(predicate.test(&customer("Carl Kurz", &[])));
        assert!(predicate.test(&customer("Alice Bob", &[])));
        assert!(!predicate.test(&customer("Alice Pauline", &[])));
    }

    #[test]
    fn test_name_keywords_empty_matches_nothing() {
        let predicate = NameContainsKeywordsPredicate::new(Vec::<String>::new());
        assert!(!predicate.test(&customer("Alice", &[])));
    }

    #[test]
    fn test_any_tag() {
        let predicate = CustomerContainsAnyTagPredicate::new(tags(&["friends", "tag 2"]));
        assert!(predicate.test(&customer("Alice", &["friends"])));
        assert!(predicate.test(&customer("Benson", &["tag 2", "owesMoney"])));
        assert!(!predicate.test(&customer("Carl", &["owesMoney"])));
    }

    #[test]
    fn test_all_tags() {
        let predicate = CustomerContainsAllTagsPredicate::new(tags(&["friends", "vip"]));
        assert!(predicate.test(&customer("Alice", &["friends", "vip", "new"])));
        assert!(!predicate.test(&customer("Benson", &["friends"])));
    }

    #[test]
    fn test_predicate_equality() {
        assert_eq!(
            CustomerContainsAnyTagPredicate::new(tags(&["a", "b"])),
            CustomerContainsAnyTagPredicate::new(tags(&["b", "a"]))
        );
    }
}
