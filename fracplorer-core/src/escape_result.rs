// fracplorer-core/src/escape_result.rs

use serde::{Deserialize, Serialize};

/// Numeric value the host boundary uses for every in-set outcome.
pub const IN_SET_SENTINEL: f64 = -1.0;

/// Why a point was reported as belonging to the set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InSetReason {
    /// Inside the main cardioid, proven without iterating.
    MainCardioid,
    /// Inside the period-2 bulb, proven without iterating.
    Period2Bulb,
    /// The orbit returned to a stored history point.
    PeriodicOrbit,
    /// Still bounded when the iteration cap was reached. A heuristic, not a proof.
    IterationCap,
}

/// Outcome of evaluating a single point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum EscapeResult {
    InSet {
        reason: InSetReason,
        /// Loop iterations consumed before the verdict (0 for the gates).
        iterations: u32,
    },
    Escaped {
        /// Smoothed iteration count. Non-finite only when the caller broke a
        /// configuration precondition.
        mu: f64,
        /// Raw iteration at which the bailout test failed.
        iterations: u32,
    },
}

impl EscapeResult {
    pub fn is_in_set(&self) -> bool {
        matches!(self, EscapeResult::InSet { .. })
    }

    pub fn mu(&self) -> Option<f64> {
        match self {
            EscapeResult::Escaped { mu, .. } => Some(*mu),
            EscapeResult::InSet { .. } => None,
        }
    }

    pub fn in_set_reason(&self) -> Option<InSetReason> {
        match self {
            EscapeResult::InSet { reason, .. } => Some(*reason),
            EscapeResult::Escaped { .. } => None,
        }
    }

    pub fn iterations(&self) -> u32 {
        match self {
            EscapeResult::InSet { iterations, .. } | EscapeResult::Escaped { iterations, .. } => {
                *iterations
            }
        }
    }

    /// Collapse to the host's numeric contract: `-1.0` for any in-set
    /// outcome, `mu` otherwise.
    pub fn to_sentinel(&self) -> f64 {
        match self {
            EscapeResult::InSet { .. } => IN_SET_SENTINEL,
            EscapeResult::Escaped { mu, .. } => *mu,
        }
    }
}
