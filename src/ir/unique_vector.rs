use std::{collections::HashSet, hash::Hash};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UniqueVector<T: Clone + Eq + Hash> {
    elements: Vec<T>,
    set: HashSet<T>,
}

impl<T: Clone + Eq + Hash> UniqueVector<T> {
    pub fn new() -> Self {
        Self {
            elements: vec![],
            set: HashSet::new(),
        }
    }

    /// Returns whether the element was newly added.
    pub fn push(&mut self, element: T) -> bool {
        if self.set.contains(&element) {
            return false;
        }

        self.set.insert(element.clone());
        self.elements.push(element);

        true
    }

    pub fn extend(&mut self, elements: impl IntoIterator<Item = T>) {
        for element in elements {
            self.push(element);
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }
}

impl<T: Clone + Eq + Hash> Default for UniqueVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> FromIterator<T> for UniqueVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        let mut vector = Self::new();
        vector.extend(iterator);
        vector
    }
}
