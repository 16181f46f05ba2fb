//! Surface-properties validation logic.

use crate::error::{SurfaceError, SurfaceResult};
use crate::schema::SurfacePropertiesDef;
use gsi_core::{Tolerances, ensure_finite, nearly_equal};
use std::collections::HashSet;

/// Tolerance on the sum of site fractions.
pub const FRACTION_SUM_TOL: Tolerances = Tolerances {
    abs: 1e-9,
    rel: 1e-9,
};

pub fn validate_surface_def(def: &SurfacePropertiesDef) -> SurfaceResult<()> {
    let total = ensure_finite(def.n_total_sites, "total site density")?;
    if total <= 0.0 {
        return Err(SurfaceError::NonPhysical {
            what: "total site density must be positive",
        });
    }

    if def.sites.is_empty() {
        return Err(SurfaceError::InvalidArg {
            what: "at least one site category is required",
        });
    }

    let mut names = HashSet::new();
    let mut sum = 0.0;
    for site in &def.sites {
        let frac = ensure_finite(site.fraction, "site fraction")?;
        if !(0.0..=1.0).contains(&frac) {
            return Err(SurfaceError::NonPhysical {
                what: "site fraction must lie in [0, 1]",
            });
        }
        if site.species.is_empty() && frac > 0.0 {
            return Err(SurfaceError::EmptyCategory {
                label: site.label.clone(),
                fraction: frac,
            });
        }
        for name in &site.species {
            if !names.insert(name.as_str()) {
                return Err(SurfaceError::DuplicateSpecies { name: name.clone() });
            }
        }
        sum += frac;
    }

    if !nearly_equal(sum, 1.0, FRACTION_SUM_TOL) {
        return Err(SurfaceError::FractionSum { sum });
    }

    Ok(())
}
