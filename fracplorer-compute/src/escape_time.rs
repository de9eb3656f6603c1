use crate::interior::{inside_cardioid, inside_period2_bulb};
use crate::periodicity::{PeriodicityTracker, PERIODICITY_THRESHOLD};
use fracplorer_core::{ConfigError, EscapeResult, InSetReason, KernelConfig, SmoothingCoefficients};

/// Escape-time evaluator for the quadratic map `z ← z² + c` with f64 arithmetic.
///
/// Holds only the read-only per-pass constants, so one value can be shared
/// by any number of worker threads. Every call to [`evaluate`](Self::evaluate)
/// keeps its iteration state on its own stack.
///
/// The evaluator does not re-validate its parameters. A bailout of 1 or less,
/// or a negative iteration cap, shows up as a non-finite `mu`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EscapeTimeEvaluator {
    max_iterations: i32,
    bailout: f64,
    smoothing: SmoothingCoefficients,
    periodicity_threshold: f64,
}

impl EscapeTimeEvaluator {
    /// Build from raw per-pass constants. `il` and `lp` are the caller's
    /// precomputed smoothing coefficients.
    pub fn new(max_iterations: i32, bailout: f64, il: f64, lp: f64) -> Self {
        Self {
            max_iterations,
            bailout,
            smoothing: SmoothingCoefficients { il, lp },
            periodicity_threshold: PERIODICITY_THRESHOLD,
        }
    }

    /// Build from a validated config, deriving the smoothing coefficients from
    /// its bailout.
    pub fn from_config(config: &KernelConfig) -> Result<Self, ConfigError> {
        if let Err(e) = config.validate() {
            log::warn!("Rejected kernel config: {e}");
            return Err(e);
        }

        let smoothing = config.smoothing();
        log::debug!(
            "Escape-time kernel: max_iterations={}, bailout={}, il={:.6}, lp={:.6}, periodicity_threshold={:e}",
            config.max_iterations,
            config.bailout,
            smoothing.il,
            smoothing.lp,
            config.periodicity_threshold
        );

        Ok(Self {
            max_iterations: config.max_iterations,
            bailout: config.bailout,
            smoothing,
            periodicity_threshold: config.periodicity_threshold,
        })
    }

    pub fn with_periodicity_threshold(self, periodicity_threshold: f64) -> Self {
        Self {
            periodicity_threshold,
            ..self
        }
    }

    pub fn max_iterations(&self) -> i32 {
        self.max_iterations
    }

    pub fn smoothing(&self) -> SmoothingCoefficients {
        self.smoothing
    }

    /// Evaluate the point `c = x0 + i·y0`.
    pub fn evaluate(&self, x0: f64, y0: f64) -> EscapeResult {
        if inside_cardioid(x0, y0) {
            return EscapeResult::InSet {
                reason: InSetReason::MainCardioid,
                iterations: 0,
            };
        }
        if inside_period2_bulb(x0, y0) {
            return EscapeResult::InSet {
                reason: InSetReason::Period2Bulb,
                iterations: 0,
            };
        }

        let mut x = 0.0_f64;
        let mut y = 0.0_f64;
        let mut iteration: i32 = 0;
        let mut periodicity = PeriodicityTracker::new(self.periodicity_threshold);

        while x * x + y * y < self.bailout && iteration < self.max_iterations {
            let x_next = x * x - y * y + x0;
            y = 2.0 * x * y + y0;
            x = x_next;
            iteration += 1;

            if periodicity.observe(x, y) {
                return EscapeResult::InSet {
                    reason: InSetReason::PeriodicOrbit,
                    iterations: iteration as u32,
                };
            }
        }

        if iteration == self.max_iterations {
            return EscapeResult::InSet {
                reason: InSetReason::IterationCap,
                iterations: iteration as u32,
            };
        }

        EscapeResult::Escaped {
            mu: smooth_iteration_count(iteration, x, y, self.smoothing),
            iterations: iteration as u32,
        }
    }

    /// Evaluate and collapse to the numeric host contract (`-1.0` = in set).
    #[inline]
    pub fn evaluate_sentinel(&self, x0: f64, y0: f64) -> f64 {
        self.evaluate(x0, y0).to_sentinel()
    }
}

/// Continuous iteration count for an orbit that escaped at `iteration` with
/// final iterate `(x, y)`: `iteration + il·lp − il·ln(ln|z|)`.
///
/// Defined only for `|z| > 1`; smaller moduli give NaN or infinity.
/// Reference: http://www.fractalforums.com/programming/what-rangeprecision-for-fractional-escape-counts-for-mandelbrotjulia-sets/
#[inline]
pub fn smooth_iteration_count(iteration: i32, x: f64, y: f64, smoothing: SmoothingCoefficients) -> f64 {
    let SmoothingCoefficients { il, lp } = smoothing;
    let modulus = (x * x + y * y).sqrt();
    f64::from(iteration) + il * lp - il * modulus.ln().ln()
}

/// Evaluate one point with the default (exact) periodicity threshold.
pub fn escape_time(
    x0: f64,
    y0: f64,
    max_iterations: i32,
    bailout: f64,
    il: f64,
    lp: f64,
) -> EscapeResult {
    EscapeTimeEvaluator::new(max_iterations, bailout, il, lp).evaluate(x0, y0)
}

/// Host-facing kernel: returns `-1.0` when the point is in the set and the
/// smoothed iteration count otherwise. A non-finite return means the caller
/// broke a configuration precondition.
pub fn mandelbrot(x0: f64, y0: f64, max_iterations: i32, bailout: f64, il: f64, lp: f64) -> f64 {
    escape_time(x0, y0, max_iterations, bailout, il, lp).to_sentinel()
}
