//! Catalog record types.
//!
//! Every record is read-only content authored ahead of time. They're designed to be:
//!
//! - **Serializable** - The catalog ships as JSON and round-trips through serde
//! - **Clone-friendly** - Views can take owned copies without borrowing issues
//! - **Default-able** - Tests build partial records with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use vermixor::types::{Rating, Review, ReviewStatus};
//!
//! let review = Review {
//!     id: "r-1".into(),
//!     name: "Aisha Khan".into(),
//!     rating: Rating::new(5).unwrap(),
//!     service: "websites".into(),
//!     status: ReviewStatus::Approved,
//!     ..Default::default()
//! };
//! assert!(review.is_visible());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::icons::IconKey;

/// Star rating in `1..=5`.
///
/// Out-of-range values are rejected while deserializing, so a loaded catalog
/// never carries an invalid rating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

/// A rating value outside `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rating {0} is outside {min}..={max}", min = Rating::MIN, max = Rating::MAX)]
pub struct RatingOutOfRange(pub u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(RatingOutOfRange(value))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// Moderation state of a review. Pending reviews never reach public listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    #[default]
    Approved,
    Pending,
}

/// An agency service offering.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Unique slug, also used in `/services/{id}`
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: IconKey,
    pub features: Vec<String>,
}

/// Long-form copy for one service detail page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDetail {
    /// Must reference a [`Service::id`]
    pub service: String,
    pub headline: String,
    /// Highlighted tail of the headline ("Websites", "Machine Learning")
    pub accent: String,
    pub tagline: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub capabilities_title: String,
    pub capabilities: Vec<Capability>,
    pub process_title: String,
    pub process: Vec<ProcessStep>,
    pub closing_title: String,
    pub closing_text: String,
    pub closing_cta: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    pub title: String,
    pub description: String,
}

/// Price of a pricing tier: a fixed amount in whole dollars or the
/// `"Custom"` sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPrice", into = "RawPrice")]
pub enum Price {
    Fixed(u32),
    Custom,
}

const CUSTOM_PRICE: &str = "Custom";

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Amount(u32),
    Label(String),
}

impl TryFrom<RawPrice> for Price {
    type Error = String;

    fn try_from(raw: RawPrice) -> Result<Self, Self::Error> {
        match raw {
            RawPrice::Amount(amount) => Ok(Price::Fixed(amount)),
            RawPrice::Label(label) if label == CUSTOM_PRICE => Ok(Price::Custom),
            RawPrice::Label(label) => Err(format!(
                "price must be a number or \"{CUSTOM_PRICE}\", got \"{label}\""
            )),
        }
    }
}

impl From<Price> for RawPrice {
    fn from(price: Price) -> Self {
        match price {
            Price::Fixed(amount) => RawPrice::Amount(amount),
            Price::Custom => RawPrice::Label(CUSTOM_PRICE.to_string()),
        }
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::Custom
    }
}

impl Price {
    /// `$2,500` for fixed prices, `Custom` otherwise.
    pub fn display(&self) -> String {
        match self {
            Price::Fixed(amount) => format!("${}", group_thousands(*amount)),
            Price::Custom => CUSTOM_PRICE.to_string(),
        }
    }

    pub fn cta_label(&self) -> &'static str {
        match self {
            Price::Fixed(_) => "Get Started",
            Price::Custom => "Contact Us",
        }
    }
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub tier: String,
    pub description: String,
    pub price: Price,
    pub duration: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

/// Optional extra sold on top of any tier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    pub title: String,
    /// Free-form label ("+$800", "$100–$200/month")
    pub price: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// One metric on a case study ("Conversion" → "+42%").
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectResult {
    pub metric: String,
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique slug, also used in `/projects/{id}`
    pub id: String,
    pub client: String,
    pub category: String,
    pub title: String,
    pub description: String,
    /// Ordered metric-name to displayed-value pairs
    pub results: Vec<ProjectResult>,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// First `limit` technologies plus how many were left out.
    pub fn technology_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = limit.min(self.technologies.len());
        (&self.technologies[..shown], self.technologies.len() - shown)
    }
}

/// Portfolio-wide highlight shown under the project grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub metric: String,
    pub value: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub rating: Rating,
    pub text: String,
    /// Service tag, one of the [`Service::id`] values
    pub service: String,
    #[serde(default)]
    pub status: ReviewStatus,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub verified: bool,
}

impl Review {
    pub fn is_visible(&self) -> bool {
        self.status != ReviewStatus::Pending
    }

    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub step: u32,
    pub title: String,
    pub description: String,
}

/// Headline number animated on the home page ("150" + "+").
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u64,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
}

impl TeamMember {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// First character of every whitespace-separated part of `name`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyValue {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStack {
    pub category: String,
    pub technologies: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeHours {
    pub day: String,
    pub hours: String,
}

/// Select-box choices offered by the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactOptions {
    pub services: Vec<String>,
    pub budgets: Vec<String>,
    pub timelines: Vec<String>,
}

/// About-page copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub paragraphs: Vec<String>,
    pub commitments: Vec<String>,
}
