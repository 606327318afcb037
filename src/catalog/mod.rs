//! Catalog - Pure Domain Data and View Composition
//!
//! These types don't depend on GPUI and represent the supplement catalog:
//! the records themselves, the expert roster, the builtin dataset, and the
//! pure functions that derive what the explorer page displays.

pub mod composer;
pub mod dataset;
pub mod expert;
pub mod store;
pub mod supplement;

pub use composer::FilterDimension;
pub use expert::{Accent, Expert};
pub use store::Catalog;
pub use supplement::{Endorsement, Supplement};
