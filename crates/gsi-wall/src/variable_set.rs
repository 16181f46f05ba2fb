//! Variable-set protocol shared by the wall-state setters and getters.

use std::fmt;

/// Which primitive variables a caller supplies or requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableSet {
    /// One pressure [Pa] and `n_energy_eqns` temperatures [K].
    PressureTemperature,
    /// `n_species` partial densities [kg/m³] and `n_energy_eqns` temperatures [K].
    DensitiesTemperature,
}

impl VariableSet {
    /// Integer id used by the untyped set/get entry points.
    pub fn id(self) -> i32 {
        match self {
            VariableSet::PressureTemperature => 0,
            VariableSet::DensitiesTemperature => 1,
        }
    }

    /// Variable-set for an integer id, if one exists.
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(VariableSet::PressureTemperature),
            1 => Some(VariableSet::DensitiesTemperature),
            _ => None,
        }
    }
}

impl fmt::Display for VariableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableSet::PressureTemperature => write!(f, "(pressure, temperature)"),
            VariableSet::DensitiesTemperature => write!(f, "(species densities, temperature)"),
        }
    }
}

/// Which representation of the gas phase is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasSource {
    Densities,
    Pressure,
}
