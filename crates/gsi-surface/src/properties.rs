//! Site-category surface model.

use crate::error::SurfaceResult;
use crate::model::SurfacePropertiesProvider;
use crate::schema::{SiteCategoryDef, SurfacePropertiesDef};
use crate::validate::validate_surface_def;
use gsi_core::Real;

/// One category of active sites.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteCategory {
    label: String,
    fraction: Real,
    species: Vec<String>,
}

impl SiteCategory {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn fraction(&self) -> Real {
        self.fraction
    }

    pub fn species(&self) -> &[String] {
        &self.species
    }
}

/// Validated surface model: site categories and the species that occupy them.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceProperties {
    n_total_sites: Real,
    sites: Vec<SiteCategory>,
    /// Surface species names, category after category.
    wall_species: Vec<String>,
}

impl SurfaceProperties {
    pub fn from_def(def: &SurfacePropertiesDef) -> SurfaceResult<Self> {
        validate_surface_def(def)?;

        let sites: Vec<SiteCategory> = def
            .sites
            .iter()
            .map(|s| SiteCategory {
                label: s.label.clone(),
                fraction: s.fraction,
                species: s.species.clone(),
            })
            .collect();
        let wall_species = sites
            .iter()
            .flat_map(|s| s.species.iter().cloned())
            .collect::<Vec<_>>();

        tracing::debug!(
            n_sites = sites.len(),
            n_wall_species = wall_species.len(),
            n_total_sites = def.n_total_sites,
            "surface properties configured"
        );

        Ok(Self {
            n_total_sites: def.n_total_sites,
            sites,
            wall_species,
        })
    }

    pub fn to_def(&self) -> SurfacePropertiesDef {
        SurfacePropertiesDef {
            n_total_sites: self.n_total_sites,
            sites: self
                .sites
                .iter()
                .map(|s| SiteCategoryDef {
                    label: s.label.clone(),
                    fraction: s.fraction,
                    species: s.species.clone(),
                })
                .collect(),
        }
    }

    pub fn sites(&self) -> &[SiteCategory] {
        &self.sites
    }

    pub fn site_label(&self, i_site: usize) -> Option<&str> {
        self.sites.get(i_site).map(|s| s.label.as_str())
    }

    /// Surface species names in state-vector order.
    pub fn wall_species(&self) -> &[String] {
        &self.wall_species
    }

    pub fn wall_species_index(&self, name: &str) -> Option<usize> {
        self.wall_species.iter().position(|s| s == name)
    }

    /// Category hosting the surface species at `i_sp`.
    pub fn site_of_species(&self, i_sp: usize) -> Option<usize> {
        let mut end = 0;
        for (i_site, site) in self.sites.iter().enumerate() {
            end += site.species.len();
            if i_sp < end {
                return Some(i_site);
            }
        }
        None
    }
}

impl SurfacePropertiesProvider for SurfaceProperties {
    fn n_wall_species(&self) -> usize {
        self.wall_species.len()
    }

    fn n_site_categories(&self) -> usize {
        self.sites.len()
    }

    fn n_total_sites(&self) -> Real {
        self.n_total_sites
    }

    /// Out-of-range categories hold no sites.
    fn frac_site(&self, i_site: usize) -> Real {
        self.sites.get(i_site).map_or(0.0, |s| s.fraction)
    }

    fn n_species_in_site(&self, i_site: usize) -> usize {
        self.sites.get(i_site).map_or(0, |s| s.species.len())
    }
}
