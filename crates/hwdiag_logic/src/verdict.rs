//! Inference outcomes and their text rendering.

use std::cmp::Ordering;
use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::rule::{Conclusion, Condition};

/// Text shown when no rule shares a condition with the facts.
pub const NO_MATCH_TEXT: &str = "Infer Failed";

/// How well one rule's antecedent is covered by the facts.
///
/// The score is the exact ratio `matched / total`; `total` counts repeated
/// antecedent conditions once per position and is never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    conclusion: Conclusion,
    matched: usize,
    total: usize,
}

impl MatchResult {
    pub(crate) fn new(conclusion: Conclusion, matched: usize, total: usize) -> Self {
        debug_assert!(total > 0 && matched <= total);
        Self {
            conclusion,
            matched,
            total,
        }
    }

    pub fn conclusion(&self) -> &Conclusion {
        &self.conclusion
    }

    /// Antecedent positions present in the facts.
    pub fn matched(&self) -> usize {
        self.matched
    }

    /// Antecedent length.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The match degree in `[0, 1]`.
    pub fn score(&self) -> f64 {
        self.matched as f64 / self.total as f64
    }

    /// True when every antecedent position matched.
    pub fn is_perfect(&self) -> bool {
        self.matched == self.total
    }

    /// `score * 100` rounded to the nearest integer, ties to even.
    pub fn percentage(&self) -> u32 {
        (self.score() * 100.0).round_ties_even() as u32
    }

    /// Compares two scores exactly by cross-multiplying the ratios.
    pub fn cmp_score(&self, other: &Self) -> Ordering {
        (self.matched * other.total).cmp(&(other.matched * self.total))
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Possibility: {} (Match-degree: {}%)",
            self.conclusion,
            self.percentage()
        )
    }
}

impl Serialize for MatchResult {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("MatchResult", 5)?;
        state.serialize_field("conclusion", &self.conclusion)?;
        state.serialize_field("matched", &self.matched)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("score", &self.score())?;
        state.serialize_field("percentage", &self.percentage())?;
        state.end()
    }
}

/// The outcome of one inference call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// The facts assert every member of a mutually-exclusive set.
    Contradiction {
        /// The conflicting conditions, in the set's declaration order.
        conflicting: Vec<Condition>,
    },
    /// No rule shares a condition with the facts.
    NoMatch,
    /// At least one rule matched completely; only the first such rule is kept.
    SingleMatch { result: MatchResult },
    /// No rule matched completely; every partial match, best first.
    RankedList { results: Vec<MatchResult> },
}

impl Verdict {
    /// The reported results, best first. Empty for contradictions and no-match.
    pub fn results(&self) -> &[MatchResult] {
        match self {
            Verdict::SingleMatch { result } => std::slice::from_ref(result),
            Verdict::RankedList { results } => results,
            Verdict::Contradiction { .. } | Verdict::NoMatch => &[],
        }
    }

    pub fn is_contradiction(&self) -> bool {
        matches!(self, Verdict::Contradiction { .. })
    }

    /// Short name of the variant, used in log records.
    pub fn kind(&self) -> &'static str {
        match self {
            Verdict::Contradiction { .. } => "contradiction",
            Verdict::NoMatch => "no_match",
            Verdict::SingleMatch { .. } => "single_match",
            Verdict::RankedList { .. } => "ranked_list",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Contradiction { conflicting } => {
                let quoted: Vec<String> =
                    conflicting.iter().map(|c| format!("'{}'", c)).collect();
                write!(f, "Error：{}\ncannot show together！", quoted.join("\n&\n"))
            }
            Verdict::NoMatch => f.write_str(NO_MATCH_TEXT),
            Verdict::SingleMatch { result } => write!(
                f,
                "Possibility: {} (Match-degree: 100%)",
                result.conclusion()
            ),
            Verdict::RankedList { results } => {
                for (i, result) in results.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{}", result)?;
                }
                Ok(())
            }
        }
    }
}
