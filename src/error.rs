//! Simulation errors.

use thiserror::Error;

/// Errors reported by path generation, scoring, and the simulation runner.
///
/// All variants are immediate precondition violations returned to the
/// caller; nothing is retried or swallowed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Grid bounds must both be positive
    #[error("invalid grid bounds m = {m}, n = {n} (both must be positive)")]
    InvalidBounds { m: u32, n: u32 },

    /// At least one trial is required
    #[error("invalid trial count {0} (at least 1 trial required)")]
    InvalidTrialCount(u32),

    /// No sample exceeded the loose threshold, leaving the conditional
    /// probability with an empty denominator
    #[error("conditional probability undefined: no samples exceed {threshold}")]
    UndefinedConditionalProbability { threshold: f64 },
}
