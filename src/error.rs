use thiserror::Error;

/// Custom error type for ivp-problem
///
/// This error type is used to wrap all possible errors that can occur when configuring or driving a problem
#[derive(Error, Debug)]
pub enum IvpError {
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] ConfigurationError),
    #[error("Solver error: {0}")]
    SolverError(#[from] SolverError),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Error: {0}")]
    Other(String),
}

/// Possible errors when a [crate::ProblemConfig] violates one of its invariants
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Initial state must have at least one component")]
    EmptyState,
    #[error("Missing initial state")]
    MissingInitialState,
    #[error("Relative tolerance must be strictly positive")]
    NonPositiveRelativeTolerance,
    #[error("Absolute tolerance for component {index} must be strictly positive")]
    NonPositiveAbsoluteTolerance { index: usize },
    #[error("Invalid number of absolute tolerances. Expected {expected}, got {found}")]
    AbsoluteToleranceLength { expected: usize, found: usize },
    #[error("Output time multiplier must be strictly positive")]
    NonPositiveMultiplier,
    #[error("Number of output times must be at least 1")]
    ZeroOutputCount,
    #[error("Field {field} must be finite")]
    NonFinite { field: &'static str },
    #[error("Invalid number of model parameters. Expected {expected}, got {found}")]
    ParameterLength { expected: usize, found: usize },
}

/// Possible errors that can occur while driving an integrator over the output schedule
#[derive(Error, Debug)]
pub enum SolverError {
    #[error(
        "Output time = {} is not after previous time = {}",
        output_time,
        previous_time
    )]
    OutputTimeBeforeStart { output_time: f64, previous_time: f64 },
    #[error("Integrator returned a state of the wrong length: expected {expected}, got {found}")]
    WrongStateLength { expected: usize, found: usize },
    #[error("Integrator failed at time = {time}: {reason}")]
    IntegratorFailed { time: f64, reason: String },
}

#[macro_export]
macro_rules! config_error {
    ($variant:ident) => {
        IvpError::from(ConfigurationError::$variant)
    };
    ($variant:ident, $($arg:tt)*) => {
        IvpError::from(ConfigurationError::$variant { $($arg)* })
    };
}

#[macro_export]
macro_rules! solver_error {
    ($variant:ident) => {
        IvpError::from(SolverError::$variant)
    };
    ($variant:ident, $($arg:tt)*) => {
        IvpError::from(SolverError::$variant { $($arg)* })
    };
}

#[macro_export]
macro_rules! other_error {
    ($msg:expr) => {
        IvpError::Other($msg.to_string())
    };
}
