//! Wall configuration file and the context that owns the providers.

use crate::error::WallResult;
use crate::wall_state::WallState;
use gsi_surface::{SurfaceProperties, SurfacePropertiesDef};
use gsi_thermo::{GasMixture, MixtureDef};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Gas mixture plus wall-material site model, as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WallConfig {
    pub mixture: MixtureDef,
    pub surface: SurfacePropertiesDef,
}

impl WallConfig {
    /// Load and validate a YAML config.
    pub fn load_yaml(path: &Path) -> WallResult<Self> {
        let config = read_yaml(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_json(path: &Path) -> WallResult<Self> {
        let config = read_json(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config by building both providers from it.
    pub fn validate(&self) -> WallResult<()> {
        WallContext::from_config(self).map(|_| ())
    }

    /// Validates before anything is written.
    pub fn save_yaml(&self, path: &Path) -> WallResult<()> {
        self.validate()?;
        std::fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn save_json(&self, path: &Path) -> WallResult<()> {
        self.validate()?;
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Owner of the configured providers.
///
/// Wall states borrow from the context, so they cannot outlive it.
#[derive(Debug, Clone)]
pub struct WallContext {
    thermo: GasMixture,
    surface: SurfaceProperties,
}

impl WallContext {
    pub fn new(thermo: GasMixture, surface: SurfaceProperties) -> Self {
        Self { thermo, surface }
    }

    pub fn from_config(config: &WallConfig) -> WallResult<Self> {
        let thermo = GasMixture::from_def(&config.mixture)?;
        let surface = SurfaceProperties::from_def(&config.surface)?;
        Ok(Self::new(thermo, surface))
    }

    pub fn load_yaml(path: &Path) -> WallResult<Self> {
        Self::from_config(&read_yaml(path)?)
    }

    pub fn load_json(path: &Path) -> WallResult<Self> {
        Self::from_config(&read_json(path)?)
    }

    pub fn to_config(&self) -> WallConfig {
        WallConfig {
            mixture: self.thermo.to_def(),
            surface: self.surface.to_def(),
        }
    }

    pub fn thermo(&self) -> &GasMixture {
        &self.thermo
    }

    pub fn surface(&self) -> &SurfaceProperties {
        &self.surface
    }

    /// New wall state bound to this context's providers.
    pub fn wall_state(&self) -> WallResult<WallState<'_>> {
        WallState::new(&self.thermo, &self.surface)
    }
}

fn read_yaml(path: &Path) -> WallResult<WallConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = serde_yaml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded wall config");
    Ok(config)
}

fn read_json(path: &Path) -> WallResult<WallConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded wall config");
    Ok(config)
}
