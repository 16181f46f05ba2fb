//! Mock providers for integration tests.
//!
//! The identity thermodynamics makes gas number densities a plain
//! `rho * N_A`, so expected outputs can be written down by hand.

#![allow(dead_code)]

use gsi_core::Real;
use gsi_surface::SurfacePropertiesProvider;
use gsi_thermo::{ThermoError, ThermoResult, ThermodynamicsProvider};

/// Thermodynamics whose density to concentration conversion is the identity.
pub struct IdentityThermo {
    pub ns: usize,
    pub n_t: usize,
}

impl IdentityThermo {
    pub fn new(ns: usize, n_t: usize) -> Self {
        Self { ns, n_t }
    }
}

impl ThermodynamicsProvider for IdentityThermo {
    fn name(&self) -> &str {
        "IdentityThermo"
    }

    fn n_species(&self) -> usize {
        self.ns
    }

    fn n_energy_eqns(&self) -> usize {
        self.n_t
    }

    fn convert_rho_to_conc(&self, rhoi: &[Real], conc: &mut [Real]) -> ThermoResult<()> {
        if rhoi.len() != self.ns || conc.len() != self.ns {
            return Err(ThermoError::LengthMismatch {
                what: "species densities",
                expected: self.ns,
                actual: rhoi.len(),
            });
        }
        conc.copy_from_slice(rhoi);
        Ok(())
    }
}

/// Site model given directly as (fraction, species count) per category.
pub struct SiteTable {
    pub n_total_sites: Real,
    pub categories: Vec<(Real, usize)>,
}

impl SiteTable {
    pub fn new(n_total_sites: Real, categories: Vec<(Real, usize)>) -> Self {
        Self {
            n_total_sites,
            categories,
        }
    }
}

impl SurfacePropertiesProvider for SiteTable {
    fn n_wall_species(&self) -> usize {
        self.categories.iter().map(|(_, m)| m).sum()
    }

    fn n_site_categories(&self) -> usize {
        self.categories.len()
    }

    fn n_total_sites(&self) -> Real {
        self.n_total_sites
    }

    fn frac_site(&self, i_site: usize) -> Real {
        self.categories[i_site].0
    }

    fn n_species_in_site(&self, i_site: usize) -> usize {
        self.categories[i_site].1
    }
}

/// Surface model that claims more species than its categories enumerate.
pub struct MiscountedSites;

impl SurfacePropertiesProvider for MiscountedSites {
    fn n_wall_species(&self) -> usize {
        4
    }

    fn n_site_categories(&self) -> usize {
        1
    }

    fn n_total_sites(&self) -> Real {
        1.0
    }

    fn frac_site(&self, _i_site: usize) -> Real {
        1.0
    }

    fn n_species_in_site(&self, _i_site: usize) -> usize {
        3
    }
}
