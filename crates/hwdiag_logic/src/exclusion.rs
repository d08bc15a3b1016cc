//! Mutually-exclusive condition sets.
//!
//! Some conditions can never be true of the same machine at once (a power
//! indicator cannot be both lit and dark). When every member of such a set is
//! asserted, the facts are inconsistent and no rule is scored.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::facts::FactSet;
use crate::rule::Condition;

/// Label of the condition reporting a dark power indicator.
pub const POWER_INDICATOR_OFF: &str = "The power indicator isn't working";

/// Label of the condition reporting a lit power indicator.
pub const POWER_INDICATOR_ON: &str = "The power indicator is working";

/// A set of conditions that cannot all hold together.
///
/// Holds at least two distinct conditions, kept in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Condition>", into = "Vec<Condition>")]
pub struct ExclusiveSet {
    members: Vec<Condition>,
}

impl ExclusiveSet {
    /// Creates a set from its members. Repeated members are dropped; fewer
    /// than two distinct members is an error.
    pub fn new<I, C>(members: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Condition>,
    {
        let mut distinct: Vec<Condition> = Vec::new();
        for member in members {
            let member = member.into();
            if !distinct.contains(&member) {
                distinct.push(member);
            }
        }
        if distinct.len() < 2 {
            return Err(Error::InvalidExclusion(format!(
                "needs at least two distinct conditions, got {:?}",
                distinct
            )));
        }
        Ok(Self { members: distinct })
    }

    /// Creates a two-member set.
    pub fn pair(a: impl Into<Condition>, b: impl Into<Condition>) -> Result<Self> {
        Self::new([a.into(), b.into()])
    }

    pub fn members(&self) -> &[Condition] {
        &self.members
    }

    /// True when every member is asserted in `facts`.
    pub fn is_violated_by(&self, facts: &FactSet) -> bool {
        facts.contains_all(&self.members)
    }
}

impl TryFrom<Vec<Condition>> for ExclusiveSet {
    type Error = Error;

    fn try_from(members: Vec<Condition>) -> Result<Self> {
        Self::new(members)
    }
}

impl From<ExclusiveSet> for Vec<Condition> {
    fn from(set: ExclusiveSet) -> Self {
        set.members
    }
}

/// An ordered list of [`ExclusiveSet`]s consulted by the contradiction check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionTable {
    sets: Vec<ExclusiveSet>,
}

impl ExclusionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the diagnosis system: the power indicator
    /// cannot be both working and not working.
    pub fn builtin() -> Self {
        Self {
            sets: vec![ExclusiveSet {
                members: vec![
                    Condition::new(POWER_INDICATOR_OFF),
                    Condition::new(POWER_INDICATOR_ON),
                ],
            }],
        }
    }

    /// Appends a set; it is checked after every set already present.
    pub fn add(&mut self, set: ExclusiveSet) {
        self.sets.push(set);
    }

    /// Appends a two-member set.
    pub fn add_pair(&mut self, a: impl Into<Condition>, b: impl Into<Condition>) -> Result<()> {
        self.add(ExclusiveSet::pair(a, b)?);
        Ok(())
    }

    /// Returns the first set whose members are all asserted in `facts`.
    pub fn find_violation(&self, facts: &FactSet) -> Option<&ExclusiveSet> {
        self.sets.iter().find(|set| set.is_violated_by(facts))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExclusiveSet> {
        self.sets.iter()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl FromIterator<ExclusiveSet> for ExclusionTable {
    fn from_iter<I: IntoIterator<Item = ExclusiveSet>>(iter: I) -> Self {
        Self {
            sets: iter.into_iter().collect(),
        }
    }
}
