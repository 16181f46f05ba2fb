//! Thermochemical state of a gas-surface interface.

use crate::error::{WallError, WallResult};
use crate::variable_set::{GasSource, VariableSet};
use gsi_core::constants::AVOGADRO;
use gsi_core::units::{Pressure, pa};
use gsi_core::{Real, ensure_finite};
use gsi_surface::SurfacePropertiesProvider;
use gsi_thermo::ThermodynamicsProvider;
use std::fmt;

/// State of the wall: gas species densities, temperatures, optionally a
/// pressure, and the site occupation densities of the surface species.
///
/// The two providers are borrowed, never owned: many wall states (one per
/// boundary face) share the same configured providers, which must outlive them.
///
/// Array units: densities kg/m³, temperatures K, site densities 1/m².
pub struct WallState<'a> {
    thermo: &'a dyn ThermodynamicsProvider,
    surf_props: &'a dyn SurfacePropertiesProvider,

    ns: usize,
    n_t: usize,
    ns_surf: usize,

    rhoi: Vec<Real>,
    temperatures: Vec<Real>,
    pressure: Option<Pressure>,
    gas_source: GasSource,

    /// Site densities per surface species, fixed at construction.
    surf_state: Vec<Real>,

    is_set: bool,
}

impl<'a> WallState<'a> {
    /// Create a zeroed wall state and distribute the surface sites.
    ///
    /// Fails if the surface model is inconsistent: a category with a nonzero
    /// fraction but no species, categories that do not enumerate exactly
    /// `n_wall_species()` species, or a non-finite site density or fraction.
    pub fn new(
        thermo: &'a dyn ThermodynamicsProvider,
        surf_props: &'a dyn SurfacePropertiesProvider,
    ) -> WallResult<Self> {
        let ns = thermo.n_species();
        let n_t = thermo.n_energy_eqns();
        let ns_surf = surf_props.n_wall_species();

        let surf_state = initialize_surf_state(surf_props)?;

        tracing::debug!(
            thermo = thermo.name(),
            ns,
            n_t,
            ns_surf,
            n_sites = surf_props.n_site_categories(),
            "wall state created"
        );

        Ok(Self {
            thermo,
            surf_props,
            ns,
            n_t,
            ns_surf,
            rhoi: vec![0.0; ns],
            temperatures: vec![0.0; n_t],
            pressure: None,
            gas_source: GasSource::Densities,
            surf_state,
            is_set: false,
        })
    }

    /// Set the wall state from raw buffers using an integer variable-set id.
    ///
    /// - `0`: `p_mass = [p]`, `p_energy` = temperatures
    /// - `1`: `p_mass` = species densities, `p_energy` = temperatures
    ///
    /// Nothing is modified when the id or a buffer length is rejected.
    pub fn set_wall_state(
        &mut self,
        p_mass: &[Real],
        p_energy: &[Real],
        state_var: i32,
    ) -> WallResult<()> {
        let var_set = VariableSet::from_id(state_var)
            .ok_or(WallError::UnsupportedVariableSet { id: state_var })?;
        self.set_wall_state_as(var_set, p_mass, p_energy)
    }

    /// Typed counterpart of [`set_wall_state`](Self::set_wall_state).
    pub fn set_wall_state_as(
        &mut self,
        var_set: VariableSet,
        p_mass: &[Real],
        p_energy: &[Real],
    ) -> WallResult<()> {
        let n_mass = match var_set {
            VariableSet::PressureTemperature => 1,
            VariableSet::DensitiesTemperature => self.ns,
        };
        check_len("mass variables", n_mass, p_mass.len())?;
        check_len("temperatures", self.n_t, p_energy.len())?;

        match var_set {
            VariableSet::PressureTemperature => self.set_wall_p(pa(p_mass[0])),
            VariableSet::DensitiesTemperature => self.set_wall_rhoi(p_mass)?,
        }
        self.set_wall_t(p_energy)?;
        self.is_set = true;

        tracing::trace!(%var_set, "wall state set");
        Ok(())
    }

    /// Copy the state out of the wall. Only variable-set `1` is supported.
    ///
    /// Output buffers are untouched on failure.
    pub fn get_wall_state(
        &self,
        p_rhoi: &mut [Real],
        p_t: &mut [Real],
        state_var: i32,
    ) -> WallResult<()> {
        if VariableSet::from_id(state_var) != Some(VariableSet::DensitiesTemperature) {
            return Err(WallError::UnsupportedVariableGet { id: state_var });
        }
        check_len("species densities", self.ns, p_rhoi.len())?;
        check_len("temperatures", self.n_t, p_t.len())?;
        self.require_densities()?;

        p_rhoi.copy_from_slice(&self.rhoi);
        p_t.copy_from_slice(&self.temperatures);
        Ok(())
    }

    /// Overwrite the species densities [kg/m³] and make them authoritative.
    pub fn set_wall_rhoi(&mut self, rhoi: &[Real]) -> WallResult<()> {
        check_len("species densities", self.ns, rhoi.len())?;
        self.rhoi.copy_from_slice(rhoi);
        self.gas_source = GasSource::Densities;
        Ok(())
    }

    /// Overwrite the temperatures [K].
    pub fn set_wall_t(&mut self, temperatures: &[Real]) -> WallResult<()> {
        check_len("temperatures", self.n_t, temperatures.len())?;
        self.temperatures.copy_from_slice(temperatures);
        Ok(())
    }

    /// Store a wall pressure. Species densities become stale until set again.
    pub fn set_wall_p(&mut self, p: Pressure) {
        self.pressure = Some(p);
        self.gas_source = GasSource::Pressure;
    }

    /// Gas number densities [1/m³] followed by surface site densities [1/m²].
    ///
    /// `v_wall_state` must hold `n_species() + n_wall_species()` values.
    /// The buffer is untouched on failure.
    pub fn get_nd_state_gas_surf(&self, v_wall_state: &mut [Real]) -> WallResult<()> {
        check_len(
            "gas and surface number densities",
            self.ns + self.ns_surf,
            v_wall_state.len(),
        )?;
        self.require_densities()?;

        let mut conc = vec![0.0; self.ns];
        self.thermo.convert_rho_to_conc(&self.rhoi, &mut conc)?;

        let (gas, surf) = v_wall_state.split_at_mut(self.ns);
        for (nd, c) in gas.iter_mut().zip(&conc) {
            *nd = c * AVOGADRO;
        }
        surf.copy_from_slice(&self.surf_state);
        Ok(())
    }

    /// Allocating variant of [`get_nd_state_gas_surf`](Self::get_nd_state_gas_surf).
    pub fn nd_state_gas_surf(&self) -> WallResult<Vec<Real>> {
        let mut out = vec![0.0; self.ns + self.ns_surf];
        self.get_nd_state_gas_surf(&mut out)?;
        Ok(out)
    }

    pub fn n_species(&self) -> usize {
        self.ns
    }

    pub fn n_energy_eqns(&self) -> usize {
        self.n_t
    }

    pub fn n_wall_species(&self) -> usize {
        self.ns_surf
    }

    /// Raw species densities [kg/m³], possibly stale (see [`gas_source`](Self::gas_source)).
    pub fn wall_rhoi(&self) -> &[Real] {
        &self.rhoi
    }

    pub fn wall_t(&self) -> &[Real] {
        &self.temperatures
    }

    /// Last pressure set through variable-set `0` or [`set_wall_p`](Self::set_wall_p).
    pub fn wall_p(&self) -> Option<Pressure> {
        self.pressure
    }

    pub fn surface_site_densities(&self) -> &[Real] {
        &self.surf_state
    }

    pub fn gas_source(&self) -> GasSource {
        self.gas_source
    }

    /// True once `set_wall_state` has succeeded at least once.
    pub fn is_wall_state_set(&self) -> bool {
        self.is_set
    }

    pub fn thermo(&self) -> &'a dyn ThermodynamicsProvider {
        self.thermo
    }

    pub fn surface_properties(&self) -> &'a dyn SurfacePropertiesProvider {
        self.surf_props
    }

    fn require_densities(&self) -> WallResult<()> {
        match self.gas_source {
            GasSource::Densities => Ok(()),
            GasSource::Pressure => Err(WallError::DensitiesUnavailable),
        }
    }
}

impl fmt::Debug for WallState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WallState")
            .field("thermo", &self.thermo.name())
            .field("rhoi", &self.rhoi)
            .field("temperatures", &self.temperatures)
            .field("pressure", &self.pressure.map(|p| p.value))
            .field("gas_source", &self.gas_source)
            .field("surf_state", &self.surf_state)
            .field("is_set", &self.is_set)
            .finish()
    }
}

fn check_len(what: &'static str, expected: usize, actual: usize) -> WallResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(WallError::LengthMismatch {
            what,
            expected,
            actual,
        })
    }
}

/// Spread each category's share of the total sites evenly over its species.
///
/// Category `c` contributes `n_total * frac[c] / m[c]` to each of its `m[c]`
/// species, written in provider order.
fn initialize_surf_state(surf_props: &dyn SurfacePropertiesProvider) -> WallResult<Vec<Real>> {
    let ns_surf = surf_props.n_wall_species();
    let n_sites = surf_props.n_site_categories();
    let n_total_sites = ensure_finite(surf_props.n_total_sites(), "total site density")?;

    let mut n_enumerated = 0;
    for i_site in 0..n_sites {
        let frac = ensure_finite(surf_props.frac_site(i_site), "site fraction")?;
        let n_sp = surf_props.n_species_in_site(i_site);
        if n_sp == 0 && frac != 0.0 {
            return Err(WallError::DegenerateSiteCategory {
                category: i_site,
                fraction: frac,
            });
        }
        n_enumerated += n_sp;
    }
    if n_enumerated != ns_surf {
        return Err(WallError::SiteCountMismatch {
            expected: ns_surf,
            actual: n_enumerated,
        });
    }

    let mut surf_state = Vec::with_capacity(ns_surf);
    for i_site in 0..n_sites {
        let n_sp = surf_props.n_species_in_site(i_site);
        if n_sp == 0 {
            continue;
        }
        let n_sites_dens = n_total_sites * surf_props.frac_site(i_site) / n_sp as Real;
        surf_state.extend(std::iter::repeat_n(n_sites_dens, n_sp));
    }
    Ok(surf_state)
}
