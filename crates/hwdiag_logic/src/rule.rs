//! Rule definitions for the hwdiag matcher.
//!
//! A rule pairs an antecedent (a conjunctive list of conditions) with the
//! conclusion it supports. Rules are immutable once built and always carry
//! at least one antecedent condition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::facts::FactSet;

/// An observable symptom, identified by its exact label.
///
/// Labels are compared byte-for-byte: no trimming or case-folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Condition(String);

impl Condition {
    /// Creates a condition from its label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the condition's label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Condition {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Condition {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// The named conclusion a rule supports (e.g. a failing component).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conclusion(String);

impl Conclusion {
    /// Creates a conclusion from its label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the conclusion's label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Conclusion {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Conclusion {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// A condition→conclusion rule.
///
/// Serialized as `{"if": [...], "then": "..."}`. Deserializing a rule with an
/// empty `if` list fails; see [`crate::KnowledgeBase`] for how whole documents
/// treat such rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RuleDocument")]
pub struct Rule {
    #[serde(rename = "if")]
    conditions: Vec<Condition>,
    #[serde(rename = "then")]
    conclusion: Conclusion,
}

impl Rule {
    /// Creates a rule, rejecting an empty antecedent.
    pub fn new<I, C>(conditions: I, conclusion: impl Into<Conclusion>) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Condition>,
    {
        let conditions: Vec<Condition> = conditions.into_iter().map(Into::into).collect();
        let conclusion = conclusion.into();
        if conditions.is_empty() {
            return Err(Error::InvalidRule(format!(
                "rule concluding '{}' has no conditions",
                conclusion
            )));
        }
        Ok(Self {
            conditions,
            conclusion,
        })
    }

    /// Starts a [`RuleBuilder`] for a rule concluding `conclusion`.
    pub fn concluding(conclusion: impl Into<Conclusion>) -> RuleBuilder {
        RuleBuilder::new(conclusion)
    }

    /// The antecedent conditions, in declaration order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// The conclusion this rule supports.
    pub fn conclusion(&self) -> &Conclusion {
        &self.conclusion
    }

    /// Number of antecedent positions present in `facts`.
    ///
    /// Duplicated antecedent conditions are counted once per position.
    pub fn matched_count(&self, facts: &FactSet) -> usize {
        self.conditions
            .iter()
            .filter(|c| facts.contains(c))
            .count()
    }
}

/// A builder for creating `Rule`s using a fluent API.
#[derive(Debug, Clone)]
pub struct RuleBuilder {
    conditions: Vec<Condition>,
    conclusion: Conclusion,
}

impl RuleBuilder {
    /// Creates a builder for a rule concluding `conclusion`.
    pub fn new(conclusion: impl Into<Conclusion>) -> Self {
        Self {
            conditions: Vec::new(),
            conclusion: conclusion.into(),
        }
    }

    /// Appends an antecedent condition.
    pub fn when(mut self, condition: impl Into<Condition>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    /// Builds the rule; fails if no condition was added.
    pub fn build(self) -> Result<Rule> {
        Rule::new(self.conditions, self.conclusion)
    }
}

/// Wire form of a rule, before the antecedent is checked.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RuleDocument {
    #[serde(rename = "if", default)]
    pub(crate) conditions: Vec<Condition>,
    #[serde(rename = "then")]
    pub(crate) conclusion: Conclusion,
}

impl TryFrom<RuleDocument> for Rule {
    type Error = Error;

    fn try_from(doc: RuleDocument) -> Result<Self> {
        Rule::new(doc.conditions, doc.conclusion)
    }
}
