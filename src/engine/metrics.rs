//! Timing for a single solve.
//!
//! Solvers are fast enough that only the total is worth measuring; the split
//! between extraction and evaluation never showed up as interesting.

use super::dispatch::SolverKind;
use crate::solvers::Outcome;
use std::time::Duration;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RunMetrics {
    /// Wall time from dispatch to answer.
    pub total: Duration,
}

/// Engine output bundled with timing information.
#[derive(Debug, Clone)]
pub(crate) struct RunResult {
    pub solver: SolverKind,
    pub outcome: Outcome,
    pub metrics: RunMetrics,
}
