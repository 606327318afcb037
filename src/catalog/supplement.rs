//! Supplement - Catalog Record Data

use serde::{Deserialize, Serialize};

/// A supplement record in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplement {
    /// Display name, unique within the catalog
    pub name: String,
    /// Asset path of the product image
    pub image_path: String,
    /// Free-text description
    pub description: String,
    /// Suggested dosage (not present for every record)
    pub dosage: Option<String>,
    /// Health benefit tags, in display order
    pub health_tags: Vec<String>,
    /// Expert endorsements, in display order
    pub endorsements: Vec<Endorsement>,
}

impl Supplement {
    /// Check whether this record carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.health_tags.iter().any(|t| t == tag)
    }

    /// Check whether any endorsement comes from the given expert
    pub fn endorsed_by(&self, expert: &str) -> bool {
        self.endorsements.iter().any(|e| e.expert == expert)
    }
}

/// An expert's endorsement of a specific supplement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endorsement {
    /// Expert name, joined against the roster for display styling.
    /// The join is not enforced; unknown names fall back to the default accent.
    pub expert: String,
    /// Asset path of the expert portrait
    pub image_path: String,
    /// Recommended brand, optionally with a discount note
    pub brand: String,
    /// Outbound product link (may be a placeholder)
    pub link: String,
    /// Provenance of the recommendation (podcast, blog post, ...)
    pub note: Option<String>,
}
