//! Explorer Feature
//!
//! The catalog browsing page: roster strip, filter chips, and card grid.

pub mod controller;
pub mod page;
