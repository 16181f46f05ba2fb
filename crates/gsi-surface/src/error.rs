//! Surface-properties errors.

use gsi_core::CoreError;
use thiserror::Error;

pub type SurfaceResult<T> = Result<T, SurfaceError>;

#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Site category '{label}' has fraction {fraction} but no species")]
    EmptyCategory { label: String, fraction: f64 },

    #[error("Site fractions sum to {sum}, expected 1")]
    FractionSum { sum: f64 },

    #[error("Surface species '{name}' listed more than once")]
    DuplicateSpecies { name: String },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
