//! Category routing.

use super::metrics::{RunMetrics, RunResult};
use crate::api::Context;
use crate::puzzle::{Category, Puzzle};
use crate::solvers::{Outcome, anagram, expression, selection, sequence};
use std::fmt;
use std::time::Instant;

/// Answer for categories no solver handles.
pub const UNKNOWN_CATEGORY_FALLBACK: &str = "42";

/// Which solver handled a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverKind {
    Expression,
    Sequence,
    Anagram,
    Selection,
    /// The category had no solver; the fixed fallback was returned.
    Unhandled,
}

impl SolverKind {
    pub fn name(self) -> &'static str {
        match self {
            SolverKind::Expression => "expression",
            SolverKind::Sequence => "sequence",
            SolverKind::Anagram => "anagram",
            SolverKind::Selection => "selection",
            SolverKind::Unhandled => "unhandled",
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Route `puzzle` to exactly one solver.
pub(crate) fn dispatch(puzzle: &Puzzle, context: &Context) -> (SolverKind, Outcome) {
    tracing::trace!(category = %puzzle.category, id = ?puzzle.id, "dispatching puzzle");

    match &puzzle.category {
        Category::Math => (SolverKind::Expression, expression::solve_expression_traced(&puzzle.question)),
        Category::Logic => (SolverKind::Sequence, sequence::solve_sequence_traced(&puzzle.question)),
        Category::Word => (SolverKind::Anagram, anagram::solve_anagram_traced(&puzzle.question, context.dictionary)),
        Category::Trivia => (SolverKind::Selection, selection::solve_selection_traced(&puzzle.options)),
        Category::Other(name) => {
            tracing::debug!(category = %name, "no solver for category");
            (SolverKind::Unhandled, Outcome::unmatched(UNKNOWN_CATEGORY_FALLBACK, None))
        }
    }
}

/// Answer only.
pub(crate) fn run(puzzle: &Puzzle, context: &Context) -> String {
    dispatch(puzzle, context).1.answer
}

pub(crate) fn run_with_metrics(puzzle: &Puzzle, context: &Context) -> RunResult {
    let start = Instant::now();
    let (solver, outcome) = dispatch(puzzle, context);
    RunResult { solver, outcome, metrics: RunMetrics { total: start.elapsed() } }
}
