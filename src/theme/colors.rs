//! Colors - Explorer Theme Colors

use gpui::{rgb, Rgba};

use crate::catalog::Accent;

/// Explorer color palette - All colors are accessed via associated functions
pub struct ExplorerColors;

impl ExplorerColors {
    // Primary colors
    /// Header background - Deep teal
    pub fn header_bg() -> Rgba { rgb(0x0f766e) }
    /// Primary accent - Blue (selected chips, links)
    pub fn accent_blue() -> Rgba { rgb(0x3b82f6) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf3f4f6) }
    /// Card background
    pub fn card_bg() -> Rgba { rgb(0xffffff) }
    /// Endorsement row hover
    pub fn endorsement_hover() -> Rgba { rgb(0xeff6ff) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Header text
    pub fn text_header() -> Rgba { rgb(0xffffff) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Chip colors
    /// Tag chip background
    pub fn chip_bg() -> Rgba { rgb(0xdbeafe) }
    /// Tag chip text
    pub fn chip_text() -> Rgba { rgb(0x1e40af) }
    /// Selected chip background
    pub fn chip_selected_bg() -> Rgba { rgb(0x1d4ed8) }
    /// Selected chip text
    pub fn chip_selected_text() -> Rgba { rgb(0xffffff) }
}

impl ExplorerColors {
    /// Paint color for a roster accent token
    pub fn accent(accent: Accent) -> Rgba {
        rgb(accent.rgb())
    }
}
