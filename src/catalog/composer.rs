//! Composer - Derived Views over the Catalog
//!
//! Pure functions that turn the catalog plus the current filter selection
//! into what the explorer page displays. Nothing here mutates the catalog;
//! filtering returns ordered subsequences of it.

use serde::{Deserialize, Serialize};

use crate::catalog::expert::{Accent, Expert};
use crate::catalog::store::Catalog;
use crate::catalog::supplement::Supplement;

/// Which dimension filtering operates on.
///
/// The two source behaviors (tag filtering and expert filtering) are one
/// parameterized component; this selects the active dimension and is chosen
/// by configuration, not at runtime per click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FilterDimension {
    /// Filter records by health tag
    #[default]
    Tag,
    /// Filter records by endorsing expert
    Expert,
}

/// The records visible under the current selection, in catalog order.
///
/// With no selection the whole catalog is visible. Otherwise a record is
/// visible when the selected value appears among its health tags (tag
/// dimension) or its endorsing experts (expert dimension).
pub fn visible_records<'a>(
    catalog: &'a Catalog,
    dimension: FilterDimension,
    selection: Option<&str>,
) -> Vec<&'a Supplement> {
    let Some(selected) = selection else {
        return catalog.supplements().iter().collect();
    };

    catalog
        .supplements()
        .iter()
        .filter(|s| match dimension {
            FilterDimension::Tag => s.has_tag(selected),
            FilterDimension::Expert => s.endorsed_by(selected),
        })
        .collect()
}

/// Resolve the display accent for an expert name.
///
/// Linear scan over the roster, first match wins. Total: unknown names get
/// the default accent rather than an error.
pub fn accent_for(expert_name: &str, roster: &[Expert]) -> Accent {
    roster
        .iter()
        .find(|e| e.name == expert_name)
        .map(|e| e.accent)
        .unwrap_or_default()
}

/// Unique health tags across all records, in first-seen order
pub fn distinct_tags(catalog: &Catalog) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for supplement in catalog.supplements() {
        for tag in &supplement.health_tags {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// Unique endorsing expert names across all records, in first-seen order
pub fn distinct_experts(catalog: &Catalog) -> Vec<String> {
    let mut experts: Vec<String> = Vec::new();
    for supplement in catalog.supplements() {
        for endorsement in &supplement.endorsements {
            if !experts.iter().any(|e| e == &endorsement.expert) {
                experts.push(endorsement.expert.clone());
            }
        }
    }
    experts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::supplement::Endorsement;

    fn endorsement(expert: &str) -> Endorsement {
        Endorsement {
            expert: expert.to_string(),
            image_path: "images/experts/test.svg".to_string(),
            brand: "Thorne".to_string(),
            link: "#".to_string(),
            note: None,
        }
    }

    fn record(name: &str, tags: &[&str], experts: &[&str]) -> Supplement {
        Supplement {
            name: name.to_string(),
            image_path: "images/supplements/test.svg".to_string(),
            description: "test".to_string(),
            dosage: None,
            health_tags: tags.iter().map(|t| t.to_string()).collect(),
            endorsements: experts.iter().map(|e| endorsement(e)).collect(),
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec![
                record("NMN", &["Longevity", "Energy"], &["Bryan Johnson"]),
                record("Berberine", &["Metabolic Health"], &["Bryan Johnson"]),
                record("Ca-AKG", &["Longevity", "Bone Health"], &["David Sinclair"]),
            ],
            vec![Expert {
                name: "Bryan Johnson".to_string(),
                image_path: "images/experts/johnson.svg".to_string(),
                accent: Accent(0x2cb3b8),
            }],
        )
        .expect("sample catalog is well formed")
    }

    fn names(records: &[&Supplement]) -> Vec<String> {
        records.iter().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn test_no_selection_is_identity() {
        let catalog = sample_catalog();
        let visible = visible_records(&catalog, FilterDimension::Tag, None);
        assert_eq!(names(&visible), vec!["NMN", "Berberine", "Ca-AKG"]);
    }

    #[test]
    fn test_tag_filter_keeps_order() {
        let catalog = sample_catalog();
        let visible = visible_records(&catalog, FilterDimension::Tag, Some("Longevity"));
        assert_eq!(names(&visible), vec!["NMN", "Ca-AKG"]);
        assert!(visible.iter().all(|s| s.has_tag("Longevity")));
    }

    #[test]
    fn test_expert_filter() {
        let catalog = sample_catalog();
        let visible = visible_records(&catalog, FilterDimension::Expert, Some("Bryan Johnson"));
        assert_eq!(names(&visible), vec!["NMN", "Berberine"]);
    }

    #[test]
    fn test_unmatched_selection_is_empty() {
        let catalog = sample_catalog();
        let visible = visible_records(&catalog, FilterDimension::Tag, Some("Sleep"));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_distinct_tags_dedup_first_seen_order() {
        let catalog = sample_catalog();
        assert_eq!(
            distinct_tags(&catalog),
            vec!["Longevity", "Energy", "Metabolic Health", "Bone Health"]
        );
    }

    #[test]
    fn test_distinct_experts_dedup() {
        let catalog = sample_catalog();
        assert_eq!(
            distinct_experts(&catalog),
            vec!["Bryan Johnson", "David Sinclair"]
        );
    }

    #[test]
    fn test_accent_for_roster_match() {
        let catalog = sample_catalog();
        assert_eq!(
            accent_for("Bryan Johnson", catalog.roster()),
            Accent(0x2cb3b8)
        );
    }

    #[test]
    fn test_accent_for_is_total() {
        let catalog = sample_catalog();
        // David Sinclair endorses a record but is not on this roster
        assert_eq!(accent_for("David Sinclair", catalog.roster()), Accent::DEFAULT);
        assert_eq!(accent_for("", catalog.roster()), Accent::DEFAULT);
    }
}
