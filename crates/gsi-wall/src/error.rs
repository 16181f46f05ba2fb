//! Error types for wall-state operations.

use gsi_core::CoreError;
use gsi_surface::SurfaceError;
use gsi_thermo::ThermoError;
use thiserror::Error;

/// Errors raised by the wall state and its configuration layer.
#[derive(Error, Debug)]
pub enum WallError {
    #[error(
        "Variable-set {id} is not implemented in set_wall_state. Possible variable-sets are:\n  \
         0: (pressure, temperature)\n  \
         1: (species densities, temperature)"
    )]
    UnsupportedVariableSet { id: i32 },

    #[error(
        "Variable-get {id} is not implemented in get_wall_state. Possible variable-sets are:\n  \
         1: (species densities, temperature)"
    )]
    UnsupportedVariableGet { id: i32 },

    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The wall was last set from pressure; species densities are stale.
    #[error("Species densities are not available: wall state was set from pressure")]
    DensitiesUnavailable,

    #[error("Site category {category} has fraction {fraction} but hosts no species")]
    DegenerateSiteCategory { category: usize, fraction: f64 },

    #[error("Site categories enumerate {actual} surface species, provider reports {expected}")]
    SiteCountMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Thermodynamics error: {0}")]
    Thermo(#[from] ThermoError),

    #[error("Surface properties error: {0}")]
    Surface(#[from] SurfaceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type WallResult<T> = Result<T, WallError>;
