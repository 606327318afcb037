//! ConfigState - Application Settings State

use serde::{Deserialize, Serialize};

use crate::catalog::FilterDimension;
use crate::i18n::Locale;

/// Persisted application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppSettings {
    /// Which dimension the filter chips operate on
    pub filter_dimension: FilterDimension,
    /// UI language
    pub locale: Locale,
}

/// State for application settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current settings
    pub settings: AppSettings,
}
