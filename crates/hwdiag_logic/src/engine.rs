//! Forward-chaining rule matcher
//!
//! The matcher scores every rule of a knowledge base against a fact set and
//! reports the best-supported conclusion(s):
//!
//! 1. Contradiction check: if the facts assert every member of a
//!    mutually-exclusive set, nothing is scored.
//! 2. Scoring: each rule's score is the share of its antecedent positions
//!    present in the facts. Rules scoring zero are dropped.
//! 3. Ranking: results are stably sorted best first. A complete match wins
//!    alone; otherwise every partial match is reported.

use log::{debug, trace};

use crate::exclusion::ExclusionTable;
use crate::facts::FactSet;
use crate::knowledge::KnowledgeBase;
use crate::verdict::{MatchResult, Verdict};

/// Scores rules against facts.
///
/// Holds only its exclusion table, so a single matcher can serve any number of
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct Matcher {
    exclusions: ExclusionTable,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher {
    /// Creates a matcher using [`ExclusionTable::builtin`].
    pub fn new() -> Self {
        Self::with_exclusions(ExclusionTable::builtin())
    }

    /// Creates a matcher with a custom exclusion table.
    pub fn with_exclusions(exclusions: ExclusionTable) -> Self {
        Self { exclusions }
    }

    /// The matcher's own exclusion table.
    pub fn exclusions(&self) -> &ExclusionTable {
        &self.exclusions
    }

    /// Runs one inference.
    ///
    /// Exclusion sets declared by the knowledge base are checked after the
    /// matcher's own table.
    pub fn infer(&self, kb: &KnowledgeBase, facts: &FactSet) -> Verdict {
        if let Some(set) = self
            .exclusions
            .iter()
            .chain(kb.exclusions().iter())
            .find(|set| set.is_violated_by(facts))
        {
            debug!("Contradiction among facts: {:?}", set.members());
            return Verdict::Contradiction {
                conflicting: set.members().to_vec(),
            };
        }

        let mut results = score_rules(kb, facts);
        if results.is_empty() {
            debug!("No rule matched {} fact(s)", facts.len());
            return Verdict::NoMatch;
        }

        // `sort_by` is stable: equal scores keep knowledge-base order.
        results.sort_by(|a, b| b.cmp_score(a));

        let verdict = match results.iter().position(MatchResult::is_perfect) {
            Some(index) => Verdict::SingleMatch {
                result: results.swap_remove(index),
            },
            None => Verdict::RankedList { results },
        };
        debug!("Inference verdict: {}", verdict.kind());
        verdict
    }
}

/// Scores every rule in knowledge-base order, keeping those with a non-zero
/// score. The returned list is not ranked.
pub fn score_rules(kb: &KnowledgeBase, facts: &FactSet) -> Vec<MatchResult> {
    kb.rules()
        .iter()
        .filter_map(|rule| {
            let matched = rule.matched_count(facts);
            let total = rule.conditions().len();
            trace!(
                "Rule '{}' matched {}/{}",
                rule.conclusion(),
                matched,
                total
            );
            (matched > 0).then(|| MatchResult::new(rule.conclusion().clone(), matched, total))
        })
        .collect()
}

/// Runs one inference with the built-in exclusion table.
pub fn infer(kb: &KnowledgeBase, facts: &FactSet) -> Verdict {
    Matcher::new().infer(kb, facts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exclusion::{ExclusiveSet, POWER_INDICATOR_OFF, POWER_INDICATOR_ON};
    use crate::rule::Rule;

    fn kb(rules: &[(&[&str], &str)]) -> KnowledgeBase {
        KnowledgeBase::with_rules(
            rules
                .iter()
                .map(|(conditions, conclusion)| {
                    Rule::new(conditions.iter().copied(), *conclusion).unwrap()
                }),
        )
    }

    fn facts(labels: &[&str]) -> FactSet {
        labels.iter().copied().collect()
    }

    #[test]
    fn test_score_rules_drops_zero_scores() {
        let kb = kb(&[(&["A", "B"], "X"), (&["C"], "Y"), (&["B"], "Z")]);
        let results = score_rules(&kb, &facts(&["B"]));

        let conclusions: Vec<_> = results.iter().map(|r| r.conclusion().as_str()).collect();
        assert_eq!(conclusions, vec!["X", "Z"]);
        assert!(results.iter().all(|r| r.score() > 0.0 && r.score() <= 1.0));
    }

    #[test]
    fn test_perfect_match_wins_alone() {
        let kb = kb(&[(&["A", "B"], "X"), (&["A"], "Y")]);
        let verdict = infer(&kb, &facts(&["A", "B"]));
        assert_eq!(verdict.to_string(), "Possibility: X (Match-degree: 100%)");
    }

    #[test]
    fn test_first_perfect_match_in_rule_order() {
        let kb = kb(&[(&["A", "B"], "Partial"), (&["A"], "First"), (&["A"], "Second")]);
        let verdict = infer(&kb, &facts(&["A"]));
        match verdict {
            Verdict::SingleMatch { result } => assert_eq!(result.conclusion().as_str(), "First"),
            other => panic!("expected single match, got {:?}", other),
        }
    }

    #[test]
    fn test_ranked_list_is_stable() {
        let kb = kb(&[
            (&["A", "B", "C"], "Third"),
            (&["A", "B"], "Early"),
            (&["A", "C"], "Late"),
        ]);
        let verdict = infer(&kb, &facts(&["A"]));
        assert_eq!(
            verdict.to_string(),
            "Possibility: Early (Match-degree: 50%)\n\
             Possibility: Late (Match-degree: 50%)\n\
             Possibility: Third (Match-degree: 33%)"
        );
    }

    #[test]
    fn test_empty_facts_no_match() {
        let kb = kb(&[(&["A"], "X")]);
        assert_eq!(infer(&kb, &FactSet::new()), Verdict::NoMatch);
    }

    #[test]
    fn test_contradiction_short_circuits() {
        let kb = kb(&[(&[POWER_INDICATOR_OFF], "Power supply failure")]);
        let verdict = infer(&kb, &facts(&[POWER_INDICATOR_OFF, POWER_INDICATOR_ON]));
        assert!(verdict.is_contradiction());
        assert!(verdict.results().is_empty());
    }

    #[test]
    fn test_knowledge_base_exclusions_checked() {
        let mut kb = kb(&[(&["Fan spinning"], "X")]);
        kb.add_exclusion(ExclusiveSet::pair("Fan spinning", "Fan silent").unwrap());

        let verdict = infer(&kb, &facts(&["Fan spinning", "Fan silent"]));
        assert_eq!(
            verdict,
            Verdict::Contradiction {
                conflicting: vec!["Fan spinning".into(), "Fan silent".into()],
            }
        );
    }

    #[test]
    fn test_matcher_without_exclusions() {
        let kb = kb(&[(&[POWER_INDICATOR_ON], "X")]);
        let matcher = Matcher::with_exclusions(ExclusionTable::new());
        let verdict = matcher.infer(&kb, &facts(&[POWER_INDICATOR_OFF, POWER_INDICATOR_ON]));
        assert_eq!(verdict.to_string(), "Possibility: X (Match-degree: 100%)");
    }

    #[test]
    fn test_matcher_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Matcher>();
        assert_send_sync::<KnowledgeBase>();
        assert_send_sync::<FactSet>();
    }
}
