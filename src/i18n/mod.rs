//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.
//! Catalog data itself (names, descriptions, brands) is source-language
//! text and is not translated; only UI chrome goes through here.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Supplement Explorer", "补剂浏览器"));
    map.insert(
        "app-subtitle",
        (
            "Explore the most trusted longevity supplements used by leading health experts. Click a tag or an expert to filter the catalog.",
            "浏览健康专家最信赖的长寿补剂。点击标签或专家即可筛选目录。",
        ),
    );

    // Roster strip
    map.insert("roster-title", ("Experts", "专家"));

    // Filter chips
    map.insert("filter-by-tag", ("Filter by health goal", "按健康目标筛选"));
    map.insert("filter-by-expert", ("Filter by expert", "按专家筛选"));
    map.insert("action-clear-filter", ("Clear filter", "清除筛选"));

    // Cards
    map.insert("card-dosage", ("Dosage", "剂量"));
    map.insert("card-recommended-by", ("Recommended by", "推荐人"));
    map.insert("explorer-records", ("supplements", "种补剂"));

    // Empty state
    map.insert("empty-title", ("No supplements match", "没有匹配的补剂"));
    map.insert(
        "empty-hint",
        (
            "Clear the filter to see the full catalog",
            "清除筛选以查看完整目录",
        ),
    );

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key_translates() {
        assert_eq!(t(Locale::EnUS, "app-title").as_ref(), "Supplement Explorer");
        assert_eq!(t(Locale::ZhCN, "app-title").as_ref(), "补剂浏览器");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::EnUS, "no-such-key").as_ref(), "no-such-key");
    }
}
