//! Deterministic puzzle solving.
//!
//! A [`Puzzle`] names a category and carries a question (and, for trivia,
//! options). [`solve`] routes it to one of four solvers and always returns an
//! answer string:
//!
//! | category | solver                                  | fallback    |
//! |----------|-----------------------------------------|-------------|
//! | `math`   | "What is <expr>?" arithmetic            | `"0"`       |
//! | `logic`  | "What comes next? a, b, c" sequences    | `"0"`       |
//! | `word`   | "Unscramble ...: <letters>" anagrams    | `"UNKNOWN"` |
//! | `trivia` | first multiple-choice option            | `"A"`       |
//! | other    |                                         | `"42"`      |
//!
//! Nothing here does I/O or keeps state between calls; the word list and the
//! compiled extraction patterns are built once and shared read-only.

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod puzzle;
mod solvers;

pub use api::{Context, SolveDetails, SolveResult, SolveResultVerbose, solve, solve_verbose_with, solve_with};
pub use engine::{SolverKind, UNKNOWN_CATEGORY_FALLBACK};
pub use error::SolveError;
pub use puzzle::{Category, Puzzle, PuzzleOption};
pub use solvers::anagram::{solve_anagram, unscramble};
pub use solvers::dictionary::Dictionary;
pub use solvers::expression::{Token, evaluate, evaluate_text, format_number, solve_expression, tokenize};
pub use solvers::selection::solve_selection;
pub use solvers::sequence::{Prediction, predict_next, solve_sequence};
