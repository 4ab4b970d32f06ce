/// Read-only projection of a collection through a predicate
///
/// Borrowing the model means a view can never outlive the data it was
/// computed from, and nothing can be mutated through it. Take a fresh view
/// after each mutation.
#[derive(Debug)]
pub struct FilteredView<'a, T> {
    items: Vec<&'a T>,
}

impl<'a, T> FilteredView<'a, T> {
    pub(crate) fn new(items: impl Iterator<Item = &'a T>) -> Self {
        Self {
            items: items.collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.items.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.items.iter().copied()
    }

    /// Owned copies of the visible elements
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().map(|item| (*item).clone()).collect()
    }
}

impl<'a, T> IntoIterator for FilteredView<'a, T> {
    type Item = &'a T;
    type IntoIter = std::vec::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> Clone for FilteredView<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for FilteredView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_preserves_order() {
        let backing = vec![1, 2, 3, 4];
        let view = FilteredView::new(backing.iter().filter(|n| *n % 2 == 0));
        assert_eq!(view.len(), 2);
        assert_eq!(view.get(0), Some(&2));
        assert_eq!(view.to_vec(), vec![2, 4]);
    }

    #[test]
    fn test_equality_is_by_value() {
        let a = vec![String::from("x")];
        let b = vec![String::from("x")];
        assert_eq!(FilteredView::new(a.iter()), FilteredView::new(b.iter()));
    }
}
