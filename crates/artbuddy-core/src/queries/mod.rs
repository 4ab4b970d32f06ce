//! Filter predicates for the model's filtered views
//!
//! A [`Predicate`] decides whether an entity is visible in a filtered view.
//! Plain closures are predicates, and the structs in this module cover the
//! filters the command layer offers (keyword search, tag search, status).
//! Predicates are read-only: they never mutate what they inspect.

pub mod commission_predicates;
pub mod customer_predicates;

pub use commission_predicates::{
    CommissionContainsAnyTagPredicate, CompletionStatusPredicate, OwnedByCustomerPredicate,
    TitleContainsKeywordsPredicate,
};
pub use customer_predicates::{
    CustomerContainsAllTagsPredicate, CustomerContainsAnyTagPredicate,
    NameContainsKeywordsPredicate,
};

/// Visibility test for one entity in a filtered view
pub trait Predicate<T>: Send + Sync {
    fn test(&self, item: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn test(&self, item: &T) -> bool {
        self(item)
    }
}

/// Predicate that accepts everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowAll;

impl<T> Predicate<T> for ShowAll {
    fn test(&self, _item: &T) -> bool {
        true
    }
}

/// True if `sentence` contains `word` as a whole word, ignoring case
///
/// `word` must be a single non-empty word; anything else matches nothing.
pub fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    let word = word.trim();
    if word.is_empty() || word.contains(char::is_whitespace) {
        return false;
    }
    let word = word.to_lowercase();
    sentence
        .split_whitespace()
        .any(|candidate| candidate.to_lowercase() == word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_predicate() {
        let even = |n: &u32| n % 2 == 0;
        assert!(Predicate::test(&even, &4));
        assert!(!Predicate::test(&even, &3));
    }

    #[test]
    fn test_show_all() {
        assert!(Predicate::<u32>::test(&ShowAll, &7));
    }

    #[test]
    fn test_contains_word_ignore_case() {
        assert!(contains_word_ignore_case("Alice Pauline", "alice"));
        assert!(contains_word_ignore_case("Alice Pauline", "PAULINE"));
        assert!(!contains_word_ignore_case("Alice Pauline", "Ali"));
        assert!(!contains_word_ignore_case("Alice Pauline", "Alice Pauline"));
        assert!(!contains_word_ignore_case("Alice Pauline", ""));
    }
}
