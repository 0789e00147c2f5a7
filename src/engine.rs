//! Puzzle dispatch engine.
//!
//! ## How the parts work together
//!
//! ```text
//! Puzzle ── category ──┐
//!                      │  dispatch            (dispatch.rs)
//!                      │   math   -> expression
//!                      │   logic  -> sequence
//!                      │   word   -> anagram (Context::dictionary)
//!                      │   trivia -> selection
//!                      │   other  -> "42"
//!                      v
//!                   Outcome ── timed by run_with_metrics (metrics.rs)
//!                      │
//!                      v
//!                  RunResult
//! ```
//!
//! Dispatch is a single `match` on [`Category`](crate::Category): one solver
//! per puzzle, no retries, no chaining. Every solver answers something, so
//! the engine has no error path of its own.
//!
//! ## Debugging
//!
//! Set `RUST_LOG=enigmata=debug` (CLI) to see which solver ran, what it
//! extracted and why a fallback was chosen.

#[path = "engine/dispatch.rs"]
mod dispatch;
#[path = "engine/metrics.rs"]
mod metrics;

pub use dispatch::{SolverKind, UNKNOWN_CATEGORY_FALLBACK};
pub(crate) use dispatch::{run, run_with_metrics};
