//! Internal failure taxonomy.
//!
//! Solvers never surface these to callers: each solver entry point logs the
//! error and answers with its fixed fallback instead. Keeping them as values
//! (rather than ad-hoc `Option`s) lets the kernels use `?` and lets the
//! verbose API report *why* a fallback was produced.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("no {solver} prompt found in question")]
    NoMatch { solver: &'static str },

    #[error("expression contains disallowed character {ch:?}")]
    DisallowedCharacter { ch: char },

    #[error("expression is empty")]
    EmptyExpression,

    #[error("malformed number literal '{text}'")]
    MalformedNumber { text: String },

    #[error("expression ended where an operand was expected")]
    UnexpectedEnd,

    #[error("parentheses nested deeper than {} levels", crate::solvers::expression::MAX_DEPTH)]
    NestingTooDeep,

    #[error("result is not a finite number")]
    NonFinite,

    #[error("need at least 3 terms to infer a pattern, found {found}")]
    TooFewTerms { found: usize },
}

pub type Result<T> = std::result::Result<T, SolveError>;
