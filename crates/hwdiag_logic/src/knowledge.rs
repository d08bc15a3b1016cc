//! The knowledge base: known conditions, diagnosis rules and exclusion sets.
//!
//! The JSON document looks like:
//!
//! ```json
//! {
//!   "conditions": ["The computer won't turn on", "..."],
//!   "rules": [{"if": ["The computer won't turn on"], "then": "Power supply failure"}],
//!   "exclusions": [["The fan is spinning", "The fan is silent"]]
//! }
//! ```
//!
//! Every key is optional. Malformed rules (an empty or non-string `if` list, a
//! missing `then`) and exclusion sets with fewer than two distinct members are
//! skipped with a warning, so a loaded knowledge base only ever holds rules the
//! matcher can score.

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::exclusion::{ExclusionTable, ExclusiveSet};
use crate::rule::{Condition, Rule};

/// Conditions, rules and exclusion sets loaded once per process.
///
/// Read-only after construction; share it freely between inference calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "KnowledgeBaseDocument")]
pub struct KnowledgeBase {
    conditions: Vec<Condition>,
    rules: Vec<Rule>,
    #[serde(skip_serializing_if = "ExclusionTable::is_empty")]
    exclusions: ExclusionTable,
}

impl KnowledgeBase {
    /// Creates an empty knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a knowledge base holding `rules` and no listed conditions.
    pub fn with_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Lists a condition for the front end to offer.
    pub fn add_condition(&mut self, condition: impl Into<Condition>) {
        self.conditions.push(condition.into());
    }

    /// Appends a rule; rule order is the tie-break order when ranking.
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Declares a set of conditions that cannot all hold together.
    pub fn add_exclusion(&mut self, set: ExclusiveSet) {
        self.exclusions.add(set);
    }

    /// Conditions offered for selection, in document order. Not used for scoring.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Rules in document order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Exclusion sets declared by the document.
    pub fn exclusions(&self) -> &ExclusionTable {
        &self.exclusions
    }

    /// True when there is nothing to offer and nothing to match.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.rules.is_empty() && self.exclusions.is_empty()
    }
}

/// Wire form of the document, before rules and exclusion sets are checked.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct KnowledgeBaseDocument {
    conditions: Vec<Condition>,
    rules: Vec<Value>,
    exclusions: Vec<Value>,
}

impl From<KnowledgeBaseDocument> for KnowledgeBase {
    fn from(doc: KnowledgeBaseDocument) -> Self {
        let mut rules = Vec::with_capacity(doc.rules.len());
        for (index, raw) in doc.rules.into_iter().enumerate() {
            let conclusion = raw
                .get("then")
                .and_then(Value::as_str)
                .unwrap_or("?")
                .to_string();
            match serde_json::from_value::<Rule>(raw) {
                Ok(rule) => rules.push(rule),
                Err(e) => warn!("Skipping rule #{} ('{}'): {}", index, conclusion, e),
            }
        }

        let mut exclusions = ExclusionTable::new();
        for (index, raw) in doc.exclusions.into_iter().enumerate() {
            match serde_json::from_value::<ExclusiveSet>(raw) {
                Ok(set) => exclusions.add(set),
                Err(e) => warn!("Skipping exclusion set #{}: {}", index, e),
            }
        }

        Self {
            conditions: doc.conditions,
            rules,
            exclusions,
        }
    }
}
