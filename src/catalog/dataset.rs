//! Dataset - Builtin Catalog
//!
//! The literal catalog the explorer ships with. Built once at startup via
//! [`builtin`]; the rest of the app only ever sees the validated
//! [`Catalog`](crate::catalog::Catalog) value.

use crate::catalog::expert::{Accent, Expert};
use crate::catalog::store::Catalog;
use crate::catalog::supplement::{Endorsement, Supplement};
use crate::error::Result;

fn supplement(
    name: &str,
    image_path: &str,
    description: &str,
    dosage: Option<&str>,
    health_tags: &[&str],
    endorsements: Vec<Endorsement>,
) -> Supplement {
    Supplement {
        name: name.to_string(),
        image_path: image_path.to_string(),
        description: description.to_string(),
        dosage: dosage.map(|d| d.to_string()),
        health_tags: health_tags.iter().map(|t| t.to_string()).collect(),
        endorsements,
    }
}

fn endorsement(expert: &str, image_path: &str, brand: &str, link: &str, note: Option<&str>) -> Endorsement {
    Endorsement {
        expert: expert.to_string(),
        image_path: image_path.to_string(),
        brand: brand.to_string(),
        link: link.to_string(),
        note: note.map(|n| n.to_string()),
    }
}

/// Build the builtin catalog.
///
/// Fails only if the literal data violates catalog invariants, which a
/// dataset test guards against.
pub fn builtin() -> Result<Catalog> {
    let supplements = vec![
        supplement(
            "NMN (Nicotinamide Mononucleotide)",
            "images/supplements/nmn.svg",
            "NMN is a precursor to NAD+, a molecule crucial for cellular energy \
             production and DNA repair. Supplementation with NMN may support \
             longevity, metabolic health, and cognitive performance by enhancing \
             NAD+ levels, which decline with age.",
            Some("500 mg per day"),
            &["Longevity", "Energy", "Cognitive Support"],
            vec![
                endorsement(
                    "Bryan Johnson",
                    "images/experts/johnson.svg",
                    "Jinfinty",
                    "#",
                    Some("Part of the Blueprint protocol stack"),
                ),
                endorsement(
                    "David Sinclair",
                    "images/experts/sinclair.svg",
                    "Thorne",
                    "#",
                    Some("Discussed in Lifespan, ch. 7"),
                ),
            ],
        ),
        supplement(
            "Ca-AKG (Calcium Alpha-Ketoglutarate)",
            "images/supplements/ca-akg.svg",
            "Ca-AKG is a form of alpha-ketoglutarate combined with calcium. It \
             plays a vital role in the Krebs cycle and has been studied for its \
             ability to extend lifespan in mice by supporting mitochondrial and \
             bone health.",
            Some("1,000 mg per day"),
            &["Longevity", "Bone Health", "Mitochondrial Function"],
            vec![endorsement(
                "David Sinclair",
                "images/experts/sinclair.svg",
                "Renue by Science",
                "#",
                None,
            )],
        ),
        supplement(
            "Berberine",
            "images/supplements/berberine.svg",
            "Berberine is a natural plant alkaloid shown to support healthy blood \
             sugar levels, improve insulin sensitivity, and act as a powerful \
             AMPK activator, often compared to metformin in its metabolic \
             effects.",
            Some("500 mg twice daily"),
            &["Blood Sugar Control", "Metabolic Health", "Longevity"],
            vec![endorsement(
                "Bryan Johnson",
                "images/experts/johnson.svg",
                "DoNotAge (code BLUEPRINT for 10% off)",
                "#",
                None,
            )],
        ),
        supplement(
            "Omega-3 (EPA/DHA)",
            "images/supplements/omega3.svg",
            "High-purity fish oil delivering EPA and DHA, long-chain fatty acids \
             associated with cardiovascular health, lipid regulation, and brain \
             function. One of the few supplements with broad clinical support.",
            Some("2 g combined EPA/DHA per day"),
            &["Heart Health", "Cognitive Support", "Longevity"],
            vec![
                endorsement(
                    "Peter Attia",
                    "images/experts/attia.svg",
                    "Carlson Labs",
                    "#",
                    Some("The Drive, episode #204"),
                ),
                endorsement(
                    "Andrew Huberman",
                    "images/experts/huberman.svg",
                    "Momentous",
                    "#",
                    None,
                ),
            ],
        ),
        supplement(
            "Creatine Monohydrate",
            "images/supplements/creatine.svg",
            "Creatine is among the most studied supplements in existence. Beyond \
             strength and lean mass, recent work points to cognitive benefits, \
             particularly under sleep deprivation.",
            Some("5 g per day"),
            &["Strength", "Cognitive Support", "Energy"],
            vec![
                endorsement(
                    "Andrew Huberman",
                    "images/experts/huberman.svg",
                    "Momentous",
                    "#",
                    Some("Huberman Lab foundational supplements episode"),
                ),
                endorsement(
                    "Peter Attia",
                    "images/experts/attia.svg",
                    "Thorne",
                    "#",
                    None,
                ),
            ],
        ),
        supplement(
            "Magnesium L-Threonate",
            "images/supplements/magnesium.svg",
            "A magnesium form able to cross the blood-brain barrier, studied for \
             sleep quality, relaxation, and cognitive support. Commonly taken in \
             the evening.",
            Some("145 mg elemental magnesium before bed"),
            &["Sleep", "Cognitive Support"],
            vec![endorsement(
                "Andrew Huberman",
                "images/experts/huberman.svg",
                "Momentous",
                "#",
                Some("Part of the Huberman sleep stack"),
            )],
        ),
        supplement(
            "Vitamin D3 + K2",
            "images/supplements/vitamin-d3.svg",
            "Vitamin D3 supports immune function, mood, and calcium absorption; \
             K2 directs that calcium toward bone. Deficiency is widespread at \
             northern latitudes.",
            None,
            &["Immune Support", "Bone Health", "Mood"],
            vec![
                endorsement(
                    "Bene",
                    "images/experts/bene.svg",
                    "Sunday Natural",
                    "#",
                    None,
                ),
                endorsement(
                    "Bryan Johnson",
                    "images/experts/johnson.svg",
                    "Blueprint",
                    "#",
                    None,
                ),
            ],
        ),
        supplement(
            "Resveratrol",
            "images/supplements/resveratrol.svg",
            "A polyphenol found in grape skin, investigated as a sirtuin \
             activator. Typically taken with a fat source to improve absorption.",
            Some("1 g per day, with yogurt or olive oil"),
            &["Longevity", "Heart Health"],
            vec![endorsement(
                "David Sinclair",
                "images/experts/sinclair.svg",
                "Thorne",
                "#",
                Some("Discussed in Lifespan, ch. 7"),
            )],
        ),
    ];

    let roster = vec![
        Expert {
            name: "Bryan Johnson".to_string(),
            image_path: "images/experts/johnson.svg".to_string(),
            accent: Accent(0x2cb3b8),
        },
        Expert {
            name: "David Sinclair".to_string(),
            image_path: "images/experts/sinclair.svg".to_string(),
            accent: Accent(0x8b5cf6),
        },
        Expert {
            name: "Peter Attia".to_string(),
            image_path: "images/experts/attia.svg".to_string(),
            accent: Accent(0xf59e0b),
        },
        Expert {
            name: "Andrew Huberman".to_string(),
            image_path: "images/experts/huberman.svg".to_string(),
            accent: Accent(0x22c55e),
        },
        Expert {
            name: "Bene".to_string(),
            image_path: "images/experts/bene.svg".to_string(),
            accent: Accent(0xec4899),
        },
    ];

    Catalog::new(supplements, roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::composer::{distinct_experts, distinct_tags};

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = builtin().expect("builtin dataset must satisfy catalog invariants");
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_every_roster_expert_endorses_something() {
        let catalog = builtin().expect("builtin dataset must satisfy catalog invariants");
        let endorsing = distinct_experts(&catalog);
        for expert in catalog.roster() {
            assert!(
                endorsing.contains(&expert.name),
                "roster expert '{}' endorses nothing",
                expert.name
            );
        }
    }

    #[test]
    fn test_every_record_has_an_endorsement() {
        let catalog = builtin().expect("builtin dataset must satisfy catalog invariants");
        for supplement in catalog.supplements() {
            assert!(
                !supplement.endorsements.is_empty(),
                "'{}' has no endorsements",
                supplement.name
            );
        }
    }

    #[test]
    fn test_tags_are_shared_across_records() {
        let catalog = builtin().expect("builtin dataset must satisfy catalog invariants");
        // Filtering is only interesting if at least one tag spans records
        let tags = distinct_tags(&catalog);
        let total: usize = catalog
            .supplements()
            .iter()
            .map(|s| s.health_tags.len())
            .sum();
        assert!(tags.len() < total);
    }
}
