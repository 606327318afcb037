//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency: the catalog never changes after
//! startup, the filter changes on every chip click.

use gpui::{App, AppContext, Entity, Global};

use crate::catalog::Catalog;
use crate::state::{
    catalog_state::CatalogState,
    config_state::{AppSettings, ConfigState},
    filter_state::FilterState,
    i18n_state::I18nState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// The immutable supplement catalog
    pub catalog: Entity<CatalogState>,
    /// Current filter selection
    pub filter: Entity<FilterState>,
    /// Application settings state
    pub config: Entity<ConfigState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the startup catalog and loaded settings
    pub fn init(cx: &mut App, catalog: Catalog, settings: AppSettings) -> Self {
        let dimension = settings.filter_dimension;
        let locale = settings.locale;

        Self {
            catalog: cx.new(|_| CatalogState::new(catalog)),
            filter: cx.new(|_| FilterState::new(dimension)),
            config: cx.new(|_| ConfigState { settings }),
            i18n: cx.new(|_| I18nState { locale }),
        }
    }
}
