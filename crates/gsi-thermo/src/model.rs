//! Thermodynamics provider trait.

use crate::error::ThermoResult;
use gsi_core::Real;

/// Read-only thermodynamic collaborator of the wall state.
///
/// Implementations are configured once and then shared between every wall
/// state of a simulation, so they must be safe for concurrent reads
/// (`Send + Sync`) and must not rely on interior mutation.
pub trait ThermodynamicsProvider: Send + Sync {
    /// Model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Number of gas-phase species.
    fn n_species(&self) -> usize;

    /// Number of energy equations, i.e. how many temperatures describe the gas.
    fn n_energy_eqns(&self) -> usize;

    /// Convert species mass densities [kg/m³] into molar concentrations [mol/m³].
    ///
    /// Both slices hold `n_species()` values. Implementations write every
    /// entry of `conc` on success and report a length mismatch otherwise.
    fn convert_rho_to_conc(&self, rhoi: &[Real], conc: &mut [Real]) -> ThermoResult<()>;
}
