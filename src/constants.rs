//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Card grid sizing
pub const CARD_MIN_WIDTH: f32 = 320.0;
pub const CARD_IMAGE_SIZE: f32 = 96.0;

/// Expert portrait size in roster chips and endorsement rows
pub const PORTRAIT_SIZE: f32 = 40.0;

/// Header height
pub const HEADER_HEIGHT: f32 = 48.0;

/// Description preview length on cards, in characters
pub const DESCRIPTION_PREVIEW_CHARS: usize = 220;
