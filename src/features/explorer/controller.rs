//! Explorer Controller
//!
//! Handles filter toggling, dimension switching, and settings persistence.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::catalog::FilterDimension;
use crate::utils::config_store;

/// Settings file under the app data dir
pub const SETTINGS_FILE: &str = "settings.json";

/// Explorer page controller
#[derive(Clone)]
pub struct ExplorerController {
    entities: AppEntities,
}

impl ExplorerController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Toggle a filter value: select it, or clear it if already selected
    pub fn toggle_value(&self, value: &str, cx: &mut App) {
        self.entities.filter.update(cx, |filter, cx| {
            filter.toggle(value);
            tracing::debug!(selection = ?filter.current(), "filter toggled");
            cx.notify();
        });
    }

    /// Clear the current selection
    pub fn clear_filter(&self, cx: &mut App) {
        self.entities.filter.update(cx, |filter, cx| {
            filter.clear();
            cx.notify();
        });
    }

    /// Switch the filter dimension and persist the choice
    pub fn set_dimension(&self, dimension: FilterDimension, cx: &mut App) {
        self.entities.filter.update(cx, |filter, cx| {
            filter.set_dimension(dimension);
            cx.notify();
        });

        let settings = self.entities.config.update(cx, |config, cx| {
            config.settings.filter_dimension = dimension;
            cx.notify();
            config.settings.clone()
        });
        if let Err(error) = config_store::save_settings(SETTINGS_FILE, &settings) {
            tracing::warn!("Failed to save settings: {error}");
        }
    }
}
