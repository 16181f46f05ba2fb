use gsi_core::constants::AVOGADRO;
use gsi_core::{Tolerances, nearly_equal};
use gsi_surface::SurfacePropertiesProvider;
use gsi_thermo::ThermodynamicsProvider;
use gsi_wall::{WallConfig, WallContext, WallError};

const CO2_ON_CARBON: &str = r#"
mixture:
  species: [CO, CO2, O, O2, C]
  n_energy_eqns: 2
surface:
  n_total_sites: 7.5e18
  sites:
    - label: active
      fraction: 1.0
      species: [O-s, s]
"#;

#[test]
fn yaml_context_drives_wall_states() {
    let path = std::env::temp_dir().join("gsi_wall_co2_on_carbon.yaml");
    std::fs::write(&path, CO2_ON_CARBON).unwrap();

    let ctx = WallContext::load_yaml(&path).unwrap();
    assert_eq!(ctx.thermo().n_species(), 5);
    assert_eq!(ctx.thermo().n_energy_eqns(), 2);
    assert_eq!(ctx.surface().n_wall_species(), 2);

    let mut wall = ctx.wall_state().unwrap();
    let rhoi = [0.0, 0.044_009_5, 0.0, 0.0, 0.0];
    wall.set_wall_state(&rhoi, &[2000.0, 2100.0], 1).unwrap();

    let nd = wall.nd_state_gas_surf().unwrap();
    let tol = Tolerances::default();
    assert!(nearly_equal(nd[1], AVOGADRO, tol));
    assert_eq!(nd[0], 0.0);
    assert_eq!(nd[5..], [3.75e18, 3.75e18]);
}

#[test]
fn config_roundtrip_yaml_and_json() {
    let config: WallConfig = serde_yaml::from_str(CO2_ON_CARBON).unwrap();

    let yaml_path = std::env::temp_dir().join("gsi_wall_roundtrip.yaml");
    config.save_yaml(&yaml_path).unwrap();
    assert_eq!(WallConfig::load_yaml(&yaml_path).unwrap(), config);

    let json_path = std::env::temp_dir().join("gsi_wall_roundtrip.json");
    config.save_json(&json_path).unwrap();
    assert_eq!(WallConfig::load_json(&json_path).unwrap(), config);

    let ctx = WallContext::load_json(&json_path).unwrap();
    assert_eq!(ctx.to_config(), config);
}

#[test]
fn malformed_yaml_is_reported() {
    let path = std::env::temp_dir().join("gsi_wall_malformed.yaml");
    std::fs::write(&path, "mixture: [not, a, mixture]\n").unwrap();
    assert!(matches!(
        WallContext::load_yaml(&path),
        Err(WallError::Yaml(_))
    ));
}

#[test]
fn invalid_config_file_is_rejected_on_load() {
    let yaml = r#"
mixture:
  species: [N2, N2, Kr]
  n_energy_eqns: 0
surface:
  n_total_sites: -1.0
  sites:
    - label: empty
      fraction: 0.3
      species: []
"#;
    let path = std::env::temp_dir().join("gsi_wall_invalid_on_load.yaml");
    std::fs::write(&path, yaml).unwrap();
    assert!(matches!(
        WallConfig::load_yaml(&path),
        Err(WallError::Thermo(_))
    ));

    // Valid mixture, broken site model.
    let mut config: WallConfig = serde_yaml::from_str(CO2_ON_CARBON).unwrap();
    config.surface.sites[0].fraction = 0.4;
    let json_path = std::env::temp_dir().join("gsi_wall_invalid_on_load.json");
    std::fs::write(&json_path, serde_json::to_string(&config).unwrap()).unwrap();
    assert!(matches!(
        WallConfig::load_json(&json_path),
        Err(WallError::Surface(_))
    ));
}
