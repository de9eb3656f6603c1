pub mod config;
pub mod error;
pub mod escape_result;

pub use config::{
    IterationBudget, KernelConfig, SmoothingCoefficients, DEFAULT_BAILOUT,
    DEFAULT_MAX_ITERATIONS, KERNEL_CONFIG, QUADRATIC_DEGREE,
};
pub use error::ConfigError;
pub use escape_result::{EscapeResult, InSetReason, IN_SET_SENTINEL};
