//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while setting up a vessel simulation.
///
/// A run that starts never fails; every variant here is raised by
/// configuration validation before the first step.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value out of range for {what}: {value} (expected {expected})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        expected: &'static str,
    },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<sv_core::CoreError> for SimError {
    fn from(e: sv_core::CoreError) -> Self {
        match e {
            sv_core::CoreError::NonFinite { what, value } => SimError::NonFinite { what, value },
            sv_core::CoreError::OutOfRange {
                what,
                value,
                expected,
            } => SimError::OutOfRange {
                what,
                value,
                expected,
            },
        }
    }
}
