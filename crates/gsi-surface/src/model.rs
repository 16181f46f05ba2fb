//! Surface-properties provider trait.

use gsi_core::Real;

/// Read-only description of the active sites on a wall material.
///
/// Sites are grouped in categories. Category `i` holds a fraction
/// `frac_site(i)` of the `n_total_sites()` sites and is shared by
/// `n_species_in_site(i)` surface species. Surface species are enumerated
/// category after category, so the categories partition the
/// `n_wall_species()` species in order.
pub trait SurfacePropertiesProvider: Send + Sync {
    /// Number of surface species over all categories.
    fn n_wall_species(&self) -> usize;

    /// Number of site categories.
    fn n_site_categories(&self) -> usize;

    /// Total site density [1/m²].
    fn n_total_sites(&self) -> Real;

    /// Fraction of the total sites belonging to category `i_site`.
    fn frac_site(&self, i_site: usize) -> Real;

    /// Number of surface species sharing category `i_site`.
    fn n_species_in_site(&self, i_site: usize) -> usize;
}
