//! Catalog - Immutable Record Store
//!
//! The catalog is built once at startup and never mutated afterwards.
//! Validation happens here, at construction time; every later lookup is
//! total, so individual renders cannot fail on bad data.

use std::collections::HashSet;

use crate::catalog::expert::Expert;
use crate::catalog::supplement::Supplement;
use crate::error::{Error, Result};

/// The ordered, immutable supplement catalog plus the expert roster
#[derive(Debug, Clone)]
pub struct Catalog {
    supplements: Vec<Supplement>,
    roster: Vec<Expert>,
}

impl Catalog {
    /// Build a catalog, rejecting malformed records.
    ///
    /// A record must have a non-empty name and at least one health tag, and
    /// names must be unique. Optional fields may be absent; endorsements may
    /// reference experts missing from the roster.
    pub fn new(supplements: Vec<Supplement>, roster: Vec<Expert>) -> Result<Self> {
        let mut seen = HashSet::new();
        for supplement in &supplements {
            if supplement.name.trim().is_empty() {
                return Err(Error::Invalid {
                    message: "supplement record with empty name".to_string(),
                });
            }
            if supplement.health_tags.is_empty() {
                return Err(Error::Invalid {
                    message: format!("supplement '{}' has no health tags", supplement.name),
                });
            }
            if !seen.insert(supplement.name.clone()) {
                return Err(Error::Invalid {
                    message: format!("duplicate supplement name '{}'", supplement.name),
                });
            }
        }

        Ok(Self { supplements, roster })
    }

    /// All records in catalog order
    pub fn supplements(&self) -> &[Supplement] {
        &self.supplements
    }

    /// The expert roster in display order
    pub fn roster(&self) -> &[Expert] {
        &self.roster
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.supplements.len()
    }

    /// Check if the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.supplements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, tags: &[&str]) -> Supplement {
        Supplement {
            name: name.to_string(),
            image_path: "images/supplements/test.svg".to_string(),
            description: "test".to_string(),
            dosage: None,
            health_tags: tags.iter().map(|t| t.to_string()).collect(),
            endorsements: Vec::new(),
        }
    }

    #[test]
    fn test_valid_catalog() {
        let catalog = Catalog::new(vec![record("NMN", &["Longevity"])], Vec::new());
        assert!(catalog.is_ok());
    }

    #[test]
    fn test_rejects_empty_name() {
        let result = Catalog::new(vec![record("  ", &["Longevity"])], Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_missing_tags() {
        let result = Catalog::new(vec![record("NMN", &[])], Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let result = Catalog::new(
            vec![record("NMN", &["Longevity"]), record("NMN", &["Energy"])],
            Vec::new(),
        );
        assert!(result.is_err());
    }
}
