use crate::engine::{self, SolverKind};
use crate::error::SolveError;
use crate::puzzle::Puzzle;
use crate::solvers::dictionary::Dictionary;
use std::time::Duration;

/// Solving context.
///
/// Holds the read-only resources solvers consult. The default uses the
/// built-in word list.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Word list for the anagram solver. Enumeration order decides ties.
    pub dictionary: &'a Dictionary,
}

impl Default for Context<'static> {
    fn default() -> Self {
        Self { dictionary: Dictionary::builtin() }
    }
}

/// Result from [`solve_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    pub answer: String,
    /// Total elapsed time spent solving.
    pub elapsed: Duration,
}

/// How an answer was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveDetails {
    pub solver: SolverKind,
    /// What the solver pulled out of the puzzle: the expression text, the
    /// term list, the scrambled letters or the chosen option value.
    pub extracted: Option<String>,
    /// Sequence rule that made the prediction (`"fallback"` when none did).
    pub rule: Option<&'static str>,
    /// True when the answer is a fixed fallback literal.
    pub fallback: bool,
    /// Failure behind the fallback, if there was one.
    pub reason: Option<SolveError>,
    pub total: Duration,
}

/// Result from [`solve_verbose_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResultVerbose {
    pub answer: String,
    pub elapsed: Duration,
    pub details: SolveDetails,
}

/// Solve `puzzle` with the default [`Context`].
///
/// # Example
/// ```
/// use enigmata::{Puzzle, solve};
///
/// assert_eq!(solve(&Puzzle::new("math", "What is 2 + 3 * 4?")), "14");
/// assert_eq!(solve(&Puzzle::new("geography", "Capital of Peru?")), "42");
/// ```
pub fn solve(puzzle: &Puzzle) -> String {
    engine::run(puzzle, &Context::default())
}

/// Solve `puzzle` using `context`, with timing.
pub fn solve_with(puzzle: &Puzzle, context: &Context) -> SolveResult {
    let run = engine::run_with_metrics(puzzle, context);
    SolveResult { answer: run.outcome.answer, elapsed: run.metrics.total }
}

/// Solve `puzzle` and report which solver ran, what it extracted and whether
/// a fallback was used.
pub fn solve_verbose_with(puzzle: &Puzzle, context: &Context) -> SolveResultVerbose {
    let run = engine::run_with_metrics(puzzle, context);
    let fallback = run.outcome.is_fallback();
    let outcome = run.outcome;

    let details = SolveDetails {
        solver: run.solver,
        extracted: outcome.extracted,
        rule: outcome.rule,
        fallback,
        reason: outcome.reason,
        total: run.metrics.total,
    };

    SolveResultVerbose { answer: outcome.answer, elapsed: run.metrics.total, details }
}
