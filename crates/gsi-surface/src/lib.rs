//! gsi-surface: active-site description of a wall material.
//!
//! The wall state only needs the `SurfacePropertiesProvider` trait.
//! `SurfaceProperties` is the stock implementation, built from a
//! `SurfacePropertiesDef` read from YAML or JSON.

pub mod error;
pub mod model;
pub mod properties;
pub mod schema;
pub mod validate;

pub use error::{SurfaceError, SurfaceResult};
pub use model::SurfacePropertiesProvider;
pub use properties::{SiteCategory, SurfaceProperties};
pub use schema::*;
pub use validate::validate_surface_def;

pub fn load_yaml(path: &std::path::Path) -> SurfaceResult<SurfaceProperties> {
    let content = std::fs::read_to_string(path)?;
    let def: SurfacePropertiesDef = serde_yaml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded surface properties");
    SurfaceProperties::from_def(&def)
}

pub fn save_yaml(path: &std::path::Path, surface: &SurfaceProperties) -> SurfaceResult<()> {
    let content = serde_yaml::to_string(&surface.to_def())?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> SurfaceResult<SurfaceProperties> {
    let content = std::fs::read_to_string(path)?;
    let def: SurfacePropertiesDef = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded surface properties");
    SurfaceProperties::from_def(&def)
}

pub fn save_json(path: &std::path::Path, surface: &SurfaceProperties) -> SurfaceResult<()> {
    let content = serde_json::to_string_pretty(&surface.to_def())?;
    std::fs::write(path, content)?;
    Ok(())
}
