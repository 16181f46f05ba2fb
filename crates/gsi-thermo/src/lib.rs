//! gsi-thermo: gas-phase thermodynamics seen from a gas-surface interface.
//!
//! Provides:
//! - Gas species catalog (air and carbon ablation products) with molar masses
//! - `ThermodynamicsProvider` trait consumed by the wall state
//! - `GasMixture`, an ideal-mixture provider with a fixed species ordering
//!
//! # Example
//!
//! ```
//! use gsi_thermo::{GasMixture, Species, ThermodynamicsProvider};
//!
//! let mix = GasMixture::new(vec![Species::N2, Species::O2], 1).unwrap();
//! let mut conc = [0.0; 2];
//! mix.convert_rho_to_conc(&[0.028_013_4, 0.031_998_8], &mut conc).unwrap();
//! assert!((conc[0] - 1.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod mixture;
pub mod model;
pub mod species;

// Re-exports for ergonomics
pub use error::{ThermoError, ThermoResult};
pub use mixture::{GasMixture, MixtureDef};
pub use model::ThermodynamicsProvider;
pub use species::Species;
