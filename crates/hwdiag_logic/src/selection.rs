//! Turning user selections into facts and presenting the result.

use crate::error::{Error, Result};
use crate::facts::FactSet;
use crate::knowledge::KnowledgeBase;
use crate::verdict::Verdict;

/// Label printed above every inference result.
pub const RESULT_LABEL: &str = "Inference Result:";

/// Builds the fact set for one request from the user's selections.
///
/// A selection is either the exact label of one of the knowledge base's
/// conditions or its 1-based position in that list. Labels take precedence,
/// so a condition literally named `"2"` is still selectable by name.
///
/// An empty selection is rejected before any inference runs.
pub fn select_facts<I, S>(kb: &KnowledgeBase, selections: I) -> Result<FactSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut facts = FactSet::new();
    for selection in selections {
        let selection = selection.as_ref();
        let condition = kb
            .conditions()
            .iter()
            .find(|c| c.as_str() == selection)
            .or_else(|| {
                selection
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| kb.conditions().get(i))
            })
            .ok_or_else(|| Error::UnknownCondition(selection.to_string()))?;
        facts.insert(condition.clone());
    }

    if facts.is_empty() {
        return Err(Error::EmptySelection);
    }
    Ok(facts)
}

/// Formats a verdict the way the front end displays it.
pub fn render_result(verdict: &Verdict) -> String {
    format!("{}\n{}", RESULT_LABEL, verdict)
}

/// Numbered listing of the selectable conditions, one per line.
pub fn render_conditions(kb: &KnowledgeBase) -> String {
    kb.conditions()
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:>3}. {}", i + 1, c))
        .collect::<Vec<_>>()
        .join("\n")
}
