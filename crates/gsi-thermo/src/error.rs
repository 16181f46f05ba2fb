//! Thermodynamics provider errors.

use gsi_core::CoreError;
use thiserror::Error;

/// Result type for thermodynamics operations.
pub type ThermoResult<T> = Result<T, ThermoError>;

/// Errors raised while building a gas mixture or converting its state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermoError {
    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Species key not found in the catalog.
    #[error("Unknown gas species '{key}'")]
    UnknownSpecies { key: String },

    /// Species listed twice in one mixture.
    #[error("Gas species '{key}' listed more than once")]
    DuplicateSpecies { key: String },

    /// Caller buffer does not match the number of species.
    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ThermoError::UnknownSpecies { key: "Xe".into() };
        assert!(err.to_string().contains("Xe"));

        let err = ThermoError::LengthMismatch {
            what: "species densities",
            expected: 5,
            actual: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("species densities"));
        assert!(msg.contains("expected 5"));
    }

    #[test]
    fn core_error_is_transparent() {
        let err: ThermoError = CoreError::NonFinite {
            what: "x",
            value: f64::NAN,
        }
        .into();
        assert_eq!(err.to_string(), "Non-finite numeric value for x: NaN");
    }
}
