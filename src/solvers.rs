//! The four puzzle solvers.
//!
//! Each solver exposes a plain `solve_*` function returning the answer string
//! and a crate-private `*_traced` variant returning an [`Outcome`] that the
//! dispatcher turns into verbose details. Solvers never fail: every path ends
//! in either a computed answer or the solver's fixed fallback literal.

pub mod anagram;
pub mod dictionary;
pub mod expression;
pub mod selection;
pub mod sequence;

#[cfg(test)]
mod tests;

use crate::error::SolveError;

/// What a solver produced and how.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Outcome {
    pub answer: String,
    /// The solver's view of its input (expression text, term list, ...).
    pub extracted: Option<String>,
    /// Rule that made the prediction, for rule-based solvers.
    pub rule: Option<&'static str>,
    /// Why the fallback was used, when it was caused by a failure.
    pub reason: Option<SolveError>,
    fallback: bool,
}

impl Outcome {
    pub fn solved(answer: impl Into<String>, extracted: Option<String>, rule: Option<&'static str>) -> Self {
        Outcome { answer: answer.into(), extracted, rule, reason: None, fallback: false }
    }

    /// Fallback answer caused by `reason`.
    pub fn fallback(answer: &str, extracted: Option<String>, reason: SolveError) -> Self {
        tracing::debug!(%reason, answer, "using fallback answer");
        Outcome { answer: answer.to_string(), extracted, rule: None, reason: Some(reason), fallback: true }
    }

    /// Fallback answer with nothing wrong: the input simply had no answer
    /// (no dictionary word, no options).
    pub fn unmatched(answer: &str, extracted: Option<String>) -> Self {
        Outcome { answer: answer.to_string(), extracted, rule: None, reason: None, fallback: true }
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}
