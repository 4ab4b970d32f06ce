use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{ModelError, Result};

/// The three levels of the entity hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Customer,
    Commission,
    Iteration,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EntityKind::Customer => "customer",
            EntityKind::Commission => "commission",
            EntityKind::Iteration => "iteration",
        };
        f.write_str(s)
    }
}

/// Identity comparison, deliberately weaker than `PartialEq`
///
/// Two values that are `is_same` denote the same real-world entity even when
/// their other fields differ. `PartialEq` stays the full field-by-field
/// comparison.
pub trait SameIdentity {
    /// Which level of the hierarchy this entity lives at
    const KIND: EntityKind;

    /// True if `other` denotes the same entity as `self`
    fn is_same(&self, other: &Self) -> bool;

    /// Human-readable rendering of the identity fields, used in errors and logs
    fn identity_key(&self) -> String;
}

/// Ordered collection in which no two elements are the same entity
///
/// Insertion order is preserved. The read-only view returned by
/// [`UniqueEntityList::as_slice`] borrows the backing storage, so it always
/// reflects the latest mutation and cannot itself be mutated.
///
/// Equality and hashing are structural over the ordered contents and use
/// full equality of the elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniqueEntityList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueEntityList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: SameIdentity> UniqueEntityList<T> {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from `items`, rejecting same-identity collisions
    ///
    /// # Errors
    /// * `DuplicateEntities` - if two elements of `items` are the same entity
    pub fn from_vec(items: Vec<T>) -> Result<Self> {
        let mut list = Self::new();
        list.set_all(items)?;
        Ok(list)
    }

    /// True if some stored element is the same entity as `entity`
    pub fn contains(&self, entity: &T) -> bool {
        self.position(entity).is_some()
    }

    /// Index of the stored element that is the same entity as `entity`
    pub fn position(&self, entity: &T) -> Option<usize> {
        self.items.iter().position(|e| e.is_same(entity))
    }

    /// The stored element that is the same entity as `entity`
    pub fn find(&self, entity: &T) -> Option<&T> {
        self.items.iter().find(|e| e.is_same(entity))
    }

    /// Append `entity`
    ///
    /// # Errors
    /// * `DuplicateEntity` - if an element with the same identity is already stored
    pub fn add(&mut self, entity: T) -> Result<()> {
        if self.contains(&entity) {
            return Err(ModelError::duplicate(T::KIND, entity.identity_key()));
        }
        self.items.push(entity);
        Ok(())
    }

    /// Replace `target` with `replacement`, keeping its index
    ///
    /// # Errors
    /// * `EntityNotFound` - if no stored element is the same entity as `target`
    /// * `DuplicateEntity` - if `replacement` is the same entity as a different stored element
    pub fn set_element(&mut self, target: &T, replacement: T) -> Result<()> {
        let index = self
            .position(target)
            .ok_or_else(|| ModelError::not_found(T::KIND, target.identity_key()))?;

        let clashes = self
            .items
            .iter()
            .enumerate()
            .any(|(i, e)| i != index && e.is_same(&replacement));
        if clashes {
            return Err(ModelError::duplicate(T::KIND, replacement.identity_key()));
        }

        self.items[index] = replacement;
        Ok(())
    }

    /// Remove and return the stored element that is the same entity as `target`
    ///
    /// # Errors
    /// * `EntityNotFound` - if no such element is stored
    pub fn remove(&mut self, target: &T) -> Result<T> {
        let index = self
            .position(target)
            .ok_or_else(|| ModelError::not_found(T::KIND, target.identity_key()))?;
        Ok(self.items.remove(index))
    }

    /// Replace the whole contents with `items`
    ///
    /// Nothing changes if validation fails.
    ///
    /// # Errors
    /// * `DuplicateEntities` - if two elements of `items` are the same entity
    pub fn set_all(&mut self, items: Vec<T>) -> Result<()> {
        if let Some(dup) = first_duplicate(&items) {
            return Err(ModelError::DuplicateEntities {
                kind: T::KIND,
                key: dup.identity_key(),
            });
        }
        self.items = items;
        Ok(())
    }
}

impl<T> UniqueEntityList<T> {
    /// Read-only view of the elements in insertion order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over the elements in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Element at `index`, if any
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the list holds no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First element matching `predicate`
    pub fn find_by(&self, predicate: impl FnMut(&&T) -> bool) -> Option<&T> {
        self.items.iter().find(predicate)
    }

    /// Mutable variant of [`find_by`](Self::find_by); callers must not touch identity fields
    pub(crate) fn find_mut_by(&mut self, mut predicate: impl FnMut(&T) -> bool) -> Option<&mut T> {
        self.items.iter_mut().find(|e| predicate(e))
    }

    /// Apply `f` to every element; callers must not touch identity fields
    pub(crate) fn for_each_mut(&mut self, f: impl FnMut(&mut T)) {
        self.items.iter_mut().for_each(f);
    }
}

impl<'a, T> IntoIterator for &'a UniqueEntityList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for UniqueEntityList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for UniqueEntityList<T>
where
    T: SameIdentity + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::from_vec(items).map_err(serde::de::Error::custom)
    }
}

fn first_duplicate<T: SameIdentity>(items: &[T]) -> Option<&T> {
    items
        .iter()
        .enumerate()
        .find(|(i, a)| items[i + 1..].iter().any(|b| a.is_same(b)))
        .map(|(_, a)| a)
}
