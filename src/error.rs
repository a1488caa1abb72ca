// src/error.rs
use std::fmt;

/// Custom error types for the angular-mc library
#[derive(Debug, Clone)]
pub enum ExperimentError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },

    /// Statistic could not be evaluated on the collected data
    NumericalInstability { method: String, reason: String },

    /// Report file could not be written
    Io { path: String, reason: String },

    /// Chart rendering failed
    Plot { reason: String },
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperimentError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            ExperimentError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            ExperimentError::NumericalInstability { method, reason } => {
                write!(f, "Numerical instability in {}: {}", method, reason)
            }
            ExperimentError::Io { path, reason } => {
                write!(f, "I/O error on '{}': {}", path, reason)
            }
            ExperimentError::Plot { reason } => {
                write!(f, "Plot rendering failed: {}", reason)
            }
        }
    }
}

impl std::error::Error for ExperimentError {}

/// Result type alias for angular-mc operations
pub type ExperimentResult<T> = Result<T, ExperimentError>;

/// Validation utilities
pub mod validation {
    use super::{ExperimentError, ExperimentResult};

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> ExperimentResult<()> {
        if !value.is_finite() {
            Err(ExperimentError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> ExperimentResult<()> {
        if value <= 0.0 {
            Err(ExperimentError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate iteration count
    pub fn validate_iterations(iterations: u64) -> ExperimentResult<()> {
        if iterations == 0 {
            Err(ExperimentError::InvalidConfiguration {
                field: "iterations".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if iterations > 10_000_000_000 {
            Err(ExperimentError::InvalidConfiguration {
                field: "iterations".to_string(),
                reason: "exceeds maximum allowed (10 billion)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate bucket count
    pub fn validate_buckets(buckets: usize) -> ExperimentResult<()> {
        if buckets == 0 {
            Err(ExperimentError::InvalidConfiguration {
                field: "buckets".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if buckets > 10_000_000 {
            Err(ExperimentError::InvalidConfiguration {
                field: "buckets".to_string(),
                reason: "exceeds maximum allowed (10 million)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Upper bound on workers per sampler; every worker holds a full histogram
    pub const MAX_WORKERS_PER_SAMPLER: usize = 1_024;

    /// Validate the number of workers sharing one sampler
    pub fn validate_workers(workers: usize, iterations: u64) -> ExperimentResult<()> {
        if workers == 0 {
            Err(ExperimentError::InvalidConfiguration {
                field: "workers_per_sampler".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if workers > MAX_WORKERS_PER_SAMPLER {
            Err(ExperimentError::InvalidConfiguration {
                field: "workers_per_sampler".to_string(),
                reason: format!("exceeds maximum allowed ({})", MAX_WORKERS_PER_SAMPLER),
            })
        } else if workers as u64 > iterations {
            Err(ExperimentError::InvalidConfiguration {
                field: "workers_per_sampler".to_string(),
                reason: format!("cannot exceed the iteration count ({})", iterations),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("norm", 0.2).is_ok());
        assert!(validate_positive("norm", 0.0).is_err());
        assert!(validate_positive("norm", -0.1).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("value", 1.0).is_ok());
        assert!(validate_finite("value", f64::NAN).is_err());
        assert!(validate_finite("value", f64::INFINITY).is_err());
        assert!(validate_finite("value", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_counts() {
        assert!(validate_iterations(1).is_ok());
        assert!(validate_iterations(0).is_err());
        assert!(validate_buckets(1_000).is_ok());
        assert!(validate_buckets(0).is_err());
        assert!(validate_workers(4, 100).is_ok());
        assert!(validate_workers(0, 100).is_err());
        assert!(validate_workers(101, 100).is_err());
        assert!(validate_workers(MAX_WORKERS_PER_SAMPLER, 1_000_000).is_ok());
        assert!(validate_workers(1_000_000, 1_000_000).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = ExperimentError::InvalidConfiguration {
            field: "buckets".to_string(),
            reason: "must be greater than 0".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("buckets"));
        assert!(display.contains("greater than 0"));

        let error = ExperimentError::InvalidParameters {
            parameter: "axis".to_string(),
            value: 0.0,
            constraint: "must be positive".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("axis"));
        assert!(display.contains("positive"));
    }
}
