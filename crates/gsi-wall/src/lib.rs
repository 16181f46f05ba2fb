//! gsi-wall: wall state for gas-surface interaction models.
//!
//! `WallState` stores the minimal thermochemical state at a wall (species
//! densities, temperatures, optionally a pressure) and derives what surface
//! chemistry and energy balance models consume from it: the combined vector
//! of gas number densities and surface site densities.
//!
//! # Example
//!
//! ```
//! use gsi_surface::{SiteCategoryDef, SurfaceProperties, SurfacePropertiesDef};
//! use gsi_thermo::{GasMixture, Species};
//! use gsi_wall::WallState;
//!
//! let mix = GasMixture::new(vec![Species::N2, Species::O2], 1).unwrap();
//! let surf = SurfaceProperties::from_def(&SurfacePropertiesDef {
//!     n_total_sites: 9.0e18,
//!     sites: vec![SiteCategoryDef {
//!         label: "active".into(),
//!         fraction: 1.0,
//!         species: vec!["O-s".into(), "N-s".into(), "s".into()],
//!     }],
//! })
//! .unwrap();
//!
//! let mut wall = WallState::new(&mix, &surf).unwrap();
//! wall.set_wall_state(&[0.02, 0.005], &[1500.0], 1).unwrap();
//!
//! let nd = wall.nd_state_gas_surf().unwrap();
//! assert_eq!(nd.len(), 5);
//! assert_eq!(&nd[2..], &[3.0e18, 3.0e18, 3.0e18]);
//! ```

pub mod config;
pub mod error;
pub mod variable_set;
pub mod wall_state;

pub use config::{WallConfig, WallContext};
pub use error::{WallError, WallResult};
pub use variable_set::{GasSource, VariableSet};
pub use wall_state::WallState;
