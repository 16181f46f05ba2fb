//! Ideal gas mixture provider built from the species catalog.

use crate::error::{ThermoError, ThermoResult};
use crate::model::ThermodynamicsProvider;
use crate::species::Species;
use gsi_core::{Real, ensure_finite};
use serde::{Deserialize, Serialize};

fn default_energy_eqns() -> usize {
    1
}

/// Serializable description of a gas mixture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MixtureDef {
    /// Species keys in the order used by every state vector.
    pub species: Vec<String>,
    /// Number of temperatures (1 = thermal equilibrium).
    #[serde(default = "default_energy_eqns")]
    pub n_energy_eqns: usize,
}

/// Gas mixture with a fixed species ordering.
///
/// Converts partial densities to concentrations species by species with
/// `c_i = rho_i / M_i`.
#[derive(Debug, Clone, PartialEq)]
pub struct GasMixture {
    species: Vec<Species>,
    molar_masses: Vec<Real>,
    n_energy_eqns: usize,
}

impl GasMixture {
    /// Create a mixture from an ordered species list.
    ///
    /// Rejects empty lists, duplicates and a zero energy-equation count.
    pub fn new(species: Vec<Species>, n_energy_eqns: usize) -> ThermoResult<Self> {
        if species.is_empty() {
            return Err(ThermoError::InvalidArg {
                what: "mixture must contain at least one species",
            });
        }
        if n_energy_eqns == 0 {
            return Err(ThermoError::InvalidArg {
                what: "n_energy_eqns must be at least 1",
            });
        }

        for (i, sp) in species.iter().enumerate() {
            if species[..i].contains(sp) {
                return Err(ThermoError::DuplicateSpecies {
                    key: sp.key().to_string(),
                });
            }
        }

        let molar_masses: Vec<Real> = species.iter().map(Species::molar_mass).collect();

        tracing::debug!(
            n_species = species.len(),
            n_energy_eqns,
            "gas mixture configured"
        );

        Ok(Self {
            species,
            molar_masses,
            n_energy_eqns,
        })
    }

    /// Build a mixture from its serializable description.
    pub fn from_def(def: &MixtureDef) -> ThermoResult<Self> {
        let species = def
            .species
            .iter()
            .map(|key| {
                key.parse::<Species>()
                    .map_err(|_| ThermoError::UnknownSpecies { key: key.clone() })
            })
            .collect::<ThermoResult<Vec<_>>>()?;
        Self::new(species, def.n_energy_eqns)
    }

    /// Serializable description of this mixture.
    pub fn to_def(&self) -> MixtureDef {
        MixtureDef {
            species: self.species.iter().map(|s| s.key().to_string()).collect(),
            n_energy_eqns: self.n_energy_eqns,
        }
    }

    pub fn species(&self) -> &[Species] {
        &self.species
    }

    /// Molar masses [kg/mol] in species order.
    pub fn molar_masses(&self) -> &[Real] {
        &self.molar_masses
    }

    /// Position of a species in the state vectors, if present.
    pub fn species_index(&self, key: &str) -> Option<usize> {
        let species = key.parse::<Species>().ok()?;
        self.species.iter().position(|s| *s == species)
    }
}

impl ThermodynamicsProvider for GasMixture {
    fn name(&self) -> &str {
        "GasMixture"
    }

    fn n_species(&self) -> usize {
        self.species.len()
    }

    fn n_energy_eqns(&self) -> usize {
        self.n_energy_eqns
    }

    fn convert_rho_to_conc(&self, rhoi: &[Real], conc: &mut [Real]) -> ThermoResult<()> {
        let ns = self.species.len();
        if rhoi.len() != ns {
            return Err(ThermoError::LengthMismatch {
                what: "species densities",
                expected: ns,
                actual: rhoi.len(),
            });
        }
        if conc.len() != ns {
            return Err(ThermoError::LengthMismatch {
                what: "species concentrations",
                expected: ns,
                actual: conc.len(),
            });
        }

        for ((c, rho), mw) in conc.iter_mut().zip(rhoi).zip(&self.molar_masses) {
            *c = ensure_finite(rho / mw, "species concentration")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsi_core::{Tolerances, nearly_equal};

    fn air5() -> GasMixture {
        GasMixture::new(
            vec![Species::N, Species::O, Species::NO, Species::N2, Species::O2],
            1,
        )
        .unwrap()
    }

    #[test]
    fn counts_match_configuration() {
        let mix = GasMixture::new(vec![Species::N2, Species::O2], 2).unwrap();
        assert_eq!(mix.n_species(), 2);
        assert_eq!(mix.n_energy_eqns(), 2);
        assert_eq!(mix.name(), "GasMixture");
    }

    #[test]
    fn reject_empty_and_zero_temperatures() {
        assert!(GasMixture::new(vec![], 1).is_err());
        assert!(GasMixture::new(vec![Species::N2], 0).is_err());
    }

    #[test]
    fn reject_duplicate_species() {
        let err = GasMixture::new(vec![Species::N2, Species::O2, Species::N2], 1).unwrap_err();
        assert_eq!(err, ThermoError::DuplicateSpecies { key: "N2".into() });
    }

    #[test]
    fn conversion_divides_by_molar_mass() {
        let mix = air5();
        let rhoi = [0.014_006_7, 0.0, 0.0, 0.028_013_4, 0.031_998_8];
        let mut conc = [0.0; 5];
        mix.convert_rho_to_conc(&rhoi, &mut conc).unwrap();

        let tol = Tolerances::default();
        assert!(nearly_equal(conc[0], 1.0, tol));
        assert_eq!(conc[1], 0.0);
        assert!(nearly_equal(conc[3], 1.0, tol));
        assert!(nearly_equal(conc[4], 1.0, tol));
    }

    #[test]
    fn conversion_checks_lengths() {
        let mix = air5();
        let mut conc = [0.0; 5];
        let err = mix.convert_rho_to_conc(&[1.0; 4], &mut conc).unwrap_err();
        assert!(matches!(
            err,
            ThermoError::LengthMismatch {
                expected: 5,
                actual: 4,
                ..
            }
        ));

        let mut short = [0.0; 3];
        assert!(mix.convert_rho_to_conc(&[1.0; 5], &mut short).is_err());
    }

    #[test]
    fn conversion_rejects_non_finite() {
        let mix = air5();
        let mut conc = [0.0; 5];
        let rhoi = [f64::NAN, 0.0, 0.0, 0.0, 0.0];
        assert!(matches!(
            mix.convert_rho_to_conc(&rhoi, &mut conc),
            Err(ThermoError::Core(_))
        ));
    }

    #[test]
    fn def_roundtrip_and_lookup() {
        let def = MixtureDef {
            species: vec!["CO".into(), "CO2".into(), "e-".into()],
            n_energy_eqns: 1,
        };
        let mix = GasMixture::from_def(&def).unwrap();
        assert_eq!(mix.to_def(), def);
        assert_eq!(mix.species_index("CO2"), Some(1));
        assert_eq!(mix.species_index("e-"), Some(2));
        assert_eq!(mix.species_index("N2"), None);
    }

    #[test]
    fn def_unknown_species() {
        let def = MixtureDef {
            species: vec!["N2".into(), "H2".into()],
            n_energy_eqns: 1,
        };
        assert_eq!(
            GasMixture::from_def(&def).unwrap_err(),
            ThermoError::UnknownSpecies { key: "H2".into() }
        );
    }

    #[test]
    fn def_energy_eqns_defaults_to_one() {
        let def: MixtureDef = serde_yaml::from_str("species: [N2, O2]\n").unwrap();
        assert_eq!(def.n_energy_eqns, 1);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use gsi_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn mass_is_recovered_from_concentration(rhoi in prop::collection::vec(0.0_f64..10.0, 5)) {
            let mix = GasMixture::new(
                vec![Species::N, Species::O, Species::NO, Species::N2, Species::O2],
                1,
            ).unwrap();
            let mut conc = vec![0.0; 5];
            mix.convert_rho_to_conc(&rhoi, &mut conc).unwrap();

            let tol = Tolerances { abs: 1e-12, rel: 1e-12 };
            for i in 0..5 {
                prop_assert!(nearly_equal(conc[i] * mix.molar_masses()[i], rhoi[i], tol));
            }
        }
    }
}
