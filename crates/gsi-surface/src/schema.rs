//! Surface-properties file format.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurfacePropertiesDef {
    /// Total site density [1/m²].
    pub n_total_sites: f64,
    #[serde(default)]
    pub sites: Vec<SiteCategoryDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteCategoryDef {
    pub label: String,
    /// Share of the total sites held by this category.
    pub fraction: f64,
    /// Surface species occupying this category, e.g. `["O-s", "N-s", "s"]`.
    #[serde(default)]
    pub species: Vec<String>,
}
