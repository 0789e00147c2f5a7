//! "What comes next? a, b, c, ..." questions.

mod rules;

use once_cell::sync::Lazy;

use super::Outcome;
use crate::error::{Result, SolveError};

pub use rules::fallback_next;

pub const FALLBACK: &str = "0";

/// Name reported when no rule matched and the last-two-sum guess was used.
pub const FALLBACK_RULE: &str = "fallback";

static RULES: Lazy<Vec<SequenceRule>> = Lazy::new(rules::get);

/// A candidate generative rule. `matches` sees the whole sequence; `next`
/// is only called when `matches` returned true.
#[derive(Clone, Copy)]
pub struct SequenceRule {
    pub name: &'static str,
    pub matches: fn(&[i64]) -> bool,
    pub next: fn(&[i64]) -> i128,
}

impl std::fmt::Debug for SequenceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceRule").field("name", &self.name).finish_non_exhaustive()
    }
}

/// A predicted term together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub value: i128,
    pub rule: &'static str,
}

/// Solve a next-in-sequence question. Any failure answers [`FALLBACK`].
pub fn solve_sequence(question: &str) -> String {
    solve_sequence_traced(question).answer
}

pub(crate) fn solve_sequence_traced(question: &str) -> Outcome {
    let Some(terms) = extract(question) else {
        return Outcome::fallback(FALLBACK, None, SolveError::NoMatch { solver: "sequence" });
    };
    let shown = format_terms(&terms);

    match predict_next(&terms) {
        Ok(prediction) => {
            tracing::debug!(terms = %shown, rule = prediction.rule, next = %prediction.value, "sequence solved");
            Outcome::solved(prediction.value.to_string(), Some(shown), Some(prediction.rule))
        }
        Err(err) => Outcome::fallback(FALLBACK, Some(shown), err),
    }
}

/// Read the comma separated terms after the prompt. Pieces that are not plain
/// digit runs (including a trailing `?`) are dropped.
pub fn extract(question: &str) -> Option<Vec<i64>> {
    let caps = crate::regex!(r"(?i)what\s+comes\s+next\?\s*([\d,\s?]+)").captures(question)?;
    let raw = caps.get(1)?.as_str().trim();

    Some(
        raw.split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty() && piece.bytes().all(|b| b.is_ascii_digit()))
            .filter_map(|piece| piece.parse::<i64>().ok())
            .collect(),
    )
}

/// Predict the term after `terms` using the first matching rule.
pub fn predict_next(terms: &[i64]) -> Result<Prediction> {
    if terms.len() < 3 {
        return Err(SolveError::TooFewTerms { found: terms.len() });
    }

    let prediction = RULES
        .iter()
        .find(|rule| (rule.matches)(terms))
        .map(|rule| Prediction { value: (rule.next)(terms), rule: rule.name })
        .unwrap_or_else(|| Prediction { value: fallback_next(terms), rule: FALLBACK_RULE });

    Ok(prediction)
}

fn format_terms(terms: &[i64]) -> String {
    terms.iter().map(i64::to_string).collect::<Vec<_>>().join(", ")
}
