//! Per-point Mandelbrot escape-time kernel.
//!
//! Hosts map each sample to a complex parameter, call [`mandelbrot`] (or an
//! [`EscapeTimeEvaluator`] built once per pass) and map the returned value to
//! a color. Calls share no mutable state and can run on any number of threads.

pub mod escape_time;
pub mod interior;
pub mod periodicity;

pub use escape_time::{escape_time, mandelbrot, smooth_iteration_count, EscapeTimeEvaluator};
pub use interior::{inside_cardioid, inside_period2_bulb};
pub use periodicity::{
    PeriodicityTracker, INITIAL_CHECK_INTERVAL, PERIODICITY_THRESHOLD, REFRESHES_PER_DOUBLING,
};

// Re-export core types for convenience
pub use fracplorer_core::*;
