//! Expert - Roster Entry and Display Accent

use serde::{Deserialize, Serialize};

/// An entry in the expert roster.
///
/// The roster is independent of the catalog records; endorsements reference
/// it by name to resolve a display accent and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expert {
    /// Expert name, join key for endorsements
    pub name: String,
    /// Asset path of the portrait
    pub image_path: String,
    /// Accent used when rendering this expert's endorsements
    pub accent: Accent,
}

/// A display accent token (packed 0xRRGGBB).
///
/// Kept as a plain value so the catalog stays free of UI types; the theme
/// layer converts it to a paint color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accent(pub u32);

impl Accent {
    /// Fallback accent for endorsements whose expert is not on the roster
    pub const DEFAULT: Accent = Accent(0x60a5fa);

    /// The packed RGB value
    pub fn rgb(self) -> u32 {
        self.0
    }
}

impl Default for Accent {
    fn default() -> Self {
        Self::DEFAULT
    }
}
