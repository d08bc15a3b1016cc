//! The set of conditions asserted true for a single inference request.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::rule::Condition;

/// Conditions the user currently reports as true.
///
/// Built fresh for every request. Iteration follows insertion order and
/// repeated conditions collapse into one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactSet {
    conditions: IndexSet<Condition>,
}

impl FactSet {
    /// Creates an empty fact set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Asserts a condition. Returns `false` if it was already present.
    pub fn insert(&mut self, condition: impl Into<Condition>) -> bool {
        self.conditions.insert(condition.into())
    }

    /// Checks whether a condition is asserted.
    pub fn contains(&self, condition: &Condition) -> bool {
        self.conditions.contains(condition)
    }

    /// Checks whether every condition yielded by `conditions` is asserted.
    pub fn contains_all<'a, I>(&self, conditions: I) -> bool
    where
        I: IntoIterator<Item = &'a Condition>,
    {
        conditions.into_iter().all(|c| self.contains(c))
    }

    /// Iterates the asserted conditions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.conditions.iter()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl<C: Into<Condition>> FromIterator<C> for FactSet {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            conditions: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<C: Into<Condition>> Extend<C> for FactSet {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        self.conditions.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a FactSet {
    type Item = &'a Condition;
    type IntoIter = indexmap::set::Iter<'a, Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.conditions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse() {
        let mut facts = FactSet::new();
        assert!(facts.insert("A"));
        assert!(!facts.insert("A"));
        assert_eq!(facts.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let facts: FactSet = ["C", "A", "B"].into_iter().collect();
        let labels: Vec<_> = facts.iter().map(Condition::as_str).collect();
        assert_eq!(labels, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_contains_all() {
        let facts: FactSet = ["A", "B"].into_iter().collect();
        let pair = [Condition::new("A"), Condition::new("B")];
        assert!(facts.contains_all(&pair));
        assert!(!facts.contains_all(&[Condition::new("A"), Condition::new("C")]));
    }
}
