//! Kernel configuration and the pure helpers hosts use to derive per-pass
//! constants.
//!
//! Everything here is computed once per rendering pass and then shared
//! read-only across every per-point evaluation.

use crate::ConfigError;
use serde::{Deserialize, Serialize};

/// Degree of the iterated polynomial `z² + c`.
pub const QUADRATIC_DEGREE: f64 = 2.0;

/// Iteration cap used at the default magnification.
pub const DEFAULT_MAX_ITERATIONS: i32 = 128;

/// Squared-magnitude escape threshold.
pub const DEFAULT_BAILOUT: f64 = 128.0;

/// Per-pass configuration handed to the escape-time kernel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Iteration ceiling. A point still bounded after this many steps is
    /// reported as in the set.
    pub max_iterations: i32,
    /// Squared-magnitude escape threshold. Must exceed 1 for the smoothing
    /// logarithms to be defined.
    pub bailout: f64,
    /// Per-axis distance under which the current iterate is considered equal
    /// to the stored history point. The comparison is strict, so the default
    /// of 0.0 never matches.
    pub periodicity_threshold: f64,
}

/// Canonical kernel configuration.
pub static KERNEL_CONFIG: KernelConfig = KernelConfig {
    max_iterations: DEFAULT_MAX_ITERATIONS,
    bailout: DEFAULT_BAILOUT,
    periodicity_threshold: 0.0,
};

impl Default for KernelConfig {
    fn default() -> Self {
        KERNEL_CONFIG
    }
}

impl KernelConfig {
    pub fn with_max_iterations(self, max_iterations: i32) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    pub fn with_bailout(self, bailout: f64) -> Self {
        Self { bailout, ..self }
    }

    pub fn with_periodicity_threshold(self, periodicity_threshold: f64) -> Self {
        Self {
            periodicity_threshold,
            ..self
        }
    }

    /// Check the preconditions the kernel relies on but never re-validates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations <= 0 {
            return Err(ConfigError::NonPositiveIterations(self.max_iterations));
        }
        if !(self.bailout.is_finite() && self.bailout > 1.0) {
            return Err(ConfigError::BailoutTooSmall(self.bailout));
        }
        if !(self.periodicity_threshold.is_finite() && self.periodicity_threshold >= 0.0) {
            return Err(ConfigError::InvalidThreshold(self.periodicity_threshold));
        }
        Ok(())
    }

    /// Smoothing coefficients matching this config's bailout.
    pub fn smoothing(&self) -> SmoothingCoefficients {
        SmoothingCoefficients::for_bailout(self.bailout)
    }

    /// Parse a JSON config. Missing fields take their defaults; the result is
    /// validated before it is returned.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: KernelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Logarithms shared by every pixel of a pass, precomputed so the kernel
/// does not evaluate them per point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SmoothingCoefficients {
    /// `1 / ln(degree)`
    pub il: f64,
    /// `ln(ln(bailout))`
    pub lp: f64,
}

impl SmoothingCoefficients {
    /// Coefficients for the quadratic map at the given squared-magnitude
    /// bailout. A bailout of 1 or less yields a non-finite `lp`.
    pub fn for_bailout(bailout: f64) -> Self {
        Self {
            il: 1.0 / QUADRATIC_DEGREE.ln(),
            lp: bailout.ln().ln(),
        }
    }
}

/// Zoom-linked iteration cap.
///
/// Each zoom-in step doubles the cap, each zoom-out step halves it, clamped
/// to `[LOWER_LIMIT, UPPER_LIMIT]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationBudget {
    current: i32,
}

impl IterationBudget {
    pub const LOWER_LIMIT: i32 = DEFAULT_MAX_ITERATIONS;
    pub const UPPER_LIMIT: i32 = 4096;

    pub fn new() -> Self {
        Self {
            current: Self::LOWER_LIMIT,
        }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn zoom_in(&mut self) -> i32 {
        self.current = (self.current << 1).min(Self::UPPER_LIMIT);
        self.current
    }

    pub fn zoom_out(&mut self) -> i32 {
        self.current = (self.current >> 1).max(Self::LOWER_LIMIT);
        self.current
    }

    /// Apply this budget to a config.
    pub fn apply(&self, config: KernelConfig) -> KernelConfig {
        config.with_max_iterations(self.current)
    }
}

impl Default for IterationBudget {
    fn default() -> Self {
        Self::new()
    }
}
