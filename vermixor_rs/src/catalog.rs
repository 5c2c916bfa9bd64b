//! The content catalog.
//!
//! All site copy ships as one JSON document compiled into the binary. It is
//! parsed and validated once, on first access, and handed out as a shared
//! `&'static Catalog`. Nothing mutates it afterwards.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::aggregate::RatingSummary;
use crate::filters::{self, ReviewFilter};
use crate::types::{
    AddOn, CompanyValue, ContactOptions, Faq, Highlight, Mission, OfficeHours, PricingTier,
    ProcessStep, Project, Review, Service, ServiceDetail, Stat, TeamMember, TechStack,
};

const EMBEDDED: &str = include_str!("../content/catalog.json");

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| match Catalog::from_json(EMBEDDED) {
    Ok(catalog) => catalog,
    // Content error: the embedded catalog is checked by the test suite.
    Err(e) => panic!("embedded content catalog is invalid: {e}"),
});

/// The embedded catalog, parsed on first call.
pub fn embedded() -> &'static Catalog {
    &CATALOG
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate {kind} id {id:?}")]
    DuplicateId { kind: &'static str, id: String },
    #[error("{kind} {owner:?} references unknown service {service:?}")]
    UnknownService {
        kind: &'static str,
        owner: String,
        service: String,
    },
    #[error("process step {found} out of sequence, expected {expected}")]
    ProcessSequence { expected: u32, found: u32 },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub version: String,
    pub services: Vec<Service>,
    #[serde(default)]
    pub service_details: Vec<ServiceDetail>,
    pub pricing: Vec<PricingTier>,
    #[serde(default)]
    pub add_ons: Vec<AddOn>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    pub reviews: Vec<Review>,
    pub process: Vec<ProcessStep>,
    pub stats: Vec<Stat>,
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub mission: Mission,
    #[serde(default)]
    pub values: Vec<CompanyValue>,
    #[serde(default)]
    pub process_benefits: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<TechStack>,
    #[serde(default)]
    pub office_hours: Vec<OfficeHours>,
    #[serde(default)]
    pub contact_options: ContactOptions,
}

impl Catalog {
    /// Parse and validate catalog JSON.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(content)?;
        catalog.validate()?;
        tracing::debug!(
            version = %catalog.version,
            services = catalog.services.len(),
            projects = catalog.projects.len(),
            reviews = catalog.reviews.len(),
            "content catalog loaded"
        );
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        unique_ids("service", self.services.iter().map(|s| s.id.as_str()))?;
        unique_ids("project", self.projects.iter().map(|p| p.id.as_str()))?;
        unique_ids("review", self.reviews.iter().map(|r| r.id.as_str()))?;
        unique_ids(
            "service detail",
            self.service_details.iter().map(|d| d.service.as_str()),
        )?;

        let known: HashSet<&str> = self.services.iter().map(|s| s.id.as_str()).collect();
        for detail in &self.service_details {
            if !known.contains(detail.service.as_str()) {
                return Err(CatalogError::UnknownService {
                    kind: "service detail",
                    owner: detail.headline.clone(),
                    service: detail.service.clone(),
                });
            }
        }
        for review in &self.reviews {
            if !known.contains(review.service.as_str()) {
                return Err(CatalogError::UnknownService {
                    kind: "review",
                    owner: review.id.clone(),
                    service: review.service.clone(),
                });
            }
        }

        check_sequence(&self.process)?;
        for detail in &self.service_details {
            check_sequence(&detail.process)?;
        }

        let popular = self.pricing.iter().filter(|t| t.popular).count();
        if popular > 1 {
            tracing::warn!("{popular} pricing tiers are marked popular");
        }
        Ok(())
    }

    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn service_detail(&self, id: &str) -> Option<&ServiceDetail> {
        self.service_details.iter().find(|d| d.service == id)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn visible_reviews(&self) -> Vec<&Review> {
        filters::visible_reviews(&self.reviews)
    }

    pub fn featured_reviews(&self) -> Vec<&Review> {
        filters::featured_reviews(&self.reviews)
    }

    pub fn featured_projects(&self) -> Vec<&Project> {
        filters::featured_projects(&self.projects)
    }

    pub fn filter_reviews(&self, filter: &ReviewFilter) -> Vec<&Review> {
        filters::filter_reviews(&self.reviews, filter)
    }

    pub fn rating_summary(&self) -> RatingSummary {
        RatingSummary::from_reviews(&self.reviews)
    }

    /// Service ids in catalog order, used as review tags.
    pub fn service_tags(&self) -> Vec<&str> {
        self.services.iter().map(|s| s.id.as_str()).collect()
    }
}

fn unique_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Steps must read 1, 2, 3, ... in order.
fn check_sequence(steps: &[ProcessStep]) -> Result<(), CatalogError> {
    for (expected, step) in (1u32..).zip(steps) {
        if step.step != expected {
            return Err(CatalogError::ProcessSequence {
                expected,
                found: step.step,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MINIMAL: &str = r#"{
        "version": "test",
        "services": [
            {"id": "websites", "title": "Websites", "description": "d", "icon": "globe", "features": []},
            {"id": "apps", "title": "Apps", "description": "d", "icon": "device-phone-mobile", "features": []}
        ],
        "pricing": [],
        "projects": [],
        "reviews": [
            {"id": "r1", "name": "A", "role": "CEO", "company": "X", "rating": 5, "text": "t", "service": "websites"},
            {"id": "r2", "name": "B", "role": "CTO", "company": "Y", "rating": 3, "text": "t", "service": "apps", "status": "pending", "featured": true}
        ],
        "process": [
            {"step": 1, "title": "Discover", "description": "d"},
            {"step": 2, "title": "Build", "description": "d"}
        ],
        "stats": [],
        "team": []
    }"#;

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = Catalog::from_json(EMBEDDED).expect("embedded catalog");
        assert!(!catalog.services.is_empty());
        assert!(!catalog.reviews.is_empty());
    }

    #[test]
    fn minimal_catalog_parses() {
        let catalog = Catalog::from_json(MINIMAL).expect("minimal catalog");
        assert_eq!(catalog.version, "test");
        assert_eq!(catalog.service_tags(), vec!["websites", "apps"]);
        assert_eq!(catalog.visible_reviews().len(), 1);
        assert!(catalog.featured_reviews().is_empty());
        assert_eq!(catalog.rating_summary().total, 1);
    }

    #[test]
    fn duplicate_service_id_is_rejected() {
        let json = MINIMAL.replace(r#""id": "apps""#, r#""id": "websites""#);
        let err = Catalog::from_json(&json).expect_err("duplicate id");
        assert!(matches!(err, CatalogError::DuplicateId { kind: "service", .. }));
    }

    #[test]
    fn review_with_unknown_service_is_rejected() {
        let json = MINIMAL.replace(r#""service": "apps""#, r#""service": "blockchain""#);
        let err = Catalog::from_json(&json).expect_err("unknown service");
        assert!(matches!(err, CatalogError::UnknownService { kind: "review", .. }));
    }

    #[test]
    fn rating_out_of_range_is_a_parse_error() {
        let json = MINIMAL.replace(r#""rating": 3"#, r#""rating": 6"#);
        let err = Catalog::from_json(&json).expect_err("bad rating");
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn broken_process_sequence_is_rejected() {
        let json = MINIMAL.replace(r#""step": 2"#, r#""step": 3"#);
        let err = Catalog::from_json(&json).expect_err("gap in steps");
        assert!(matches!(
            err,
            CatalogError::ProcessSequence {
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn lookups_by_id() {
        let catalog = Catalog::from_json(MINIMAL).expect("minimal catalog");
        assert_eq!(catalog.service("apps").map(|s| s.title.as_str()), Some("Apps"));
        assert!(catalog.service("nope").is_none());
        assert!(catalog.project("nope").is_none());
        assert!(catalog.service_detail("apps").is_none());
    }
}
