//! CatalogState - Immutable Catalog Handle

use std::sync::Arc;

use crate::catalog::Catalog;

/// State wrapper around the catalog.
///
/// The catalog itself never changes after startup; this exists so views can
/// read it through the same entity mechanism as the rest of the app state.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    /// Wrap a constructed catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// The catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
