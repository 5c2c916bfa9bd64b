//! Derived review and project collections.
//!
//! Every function here borrows from the catalog and returns a fresh `Vec` of
//! references. Nothing is cached and nothing is mutated; views recompute on
//! every change of their filter state.

use crate::types::{Project, Rating, Review};

/// Select-box value meaning "no restriction".
pub const ALL: &str = "all";

/// Reviews whose status is not pending, in catalog order.
pub fn visible_reviews(reviews: &[Review]) -> Vec<&Review> {
    reviews.iter().filter(|review| review.is_visible()).collect()
}

/// Featured reviews that passed moderation.
pub fn featured_reviews(reviews: &[Review]) -> Vec<&Review> {
    reviews
        .iter()
        .filter(|review| review.featured && review.is_visible())
        .collect()
}

pub fn featured_projects(projects: &[Project]) -> Vec<&Project> {
    projects.iter().filter(|project| project.featured).collect()
}

/// Restriction on a review's service tag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ServiceFilter {
    #[default]
    All,
    Tag(String),
}

impl ServiceFilter {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL {
            ServiceFilter::All
        } else {
            ServiceFilter::Tag(value.to_string())
        }
    }

    pub fn matches(&self, review: &Review) -> bool {
        match self {
            ServiceFilter::All => true,
            ServiceFilter::Tag(tag) => review.service == *tag,
        }
    }

    /// Value to put back into the select box.
    pub fn as_value(&self) -> &str {
        match self {
            ServiceFilter::All => ALL,
            ServiceFilter::Tag(tag) => tag,
        }
    }
}

/// Minimum star rating a review must have.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RatingFilter {
    #[default]
    All,
    AtLeast(Rating),
}

impl RatingFilter {
    /// Parse a select-box value. Anything that is not a rating in `1..=5`
    /// means no restriction.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value == ALL {
            return RatingFilter::All;
        }
        match value.parse::<u8>().ok().and_then(Rating::new) {
            Some(rating) => RatingFilter::AtLeast(rating),
            None => {
                tracing::debug!("ignoring rating filter {value:?}");
                RatingFilter::All
            }
        }
    }

    pub fn matches(&self, review: &Review) -> bool {
        match self {
            RatingFilter::All => true,
            RatingFilter::AtLeast(threshold) => review.rating >= *threshold,
        }
    }

    pub fn as_value(&self) -> String {
        match self {
            RatingFilter::All => ALL.to_string(),
            RatingFilter::AtLeast(rating) => rating.get().to_string(),
        }
    }
}

/// Service and rating restriction applied together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    pub service: ServiceFilter,
    pub rating: RatingFilter,
}

impl ReviewFilter {
    pub fn new(service: ServiceFilter, rating: RatingFilter) -> Self {
        Self { service, rating }
    }

    pub fn matches(&self, review: &Review) -> bool {
        self.service.matches(review) && self.rating.matches(review)
    }

    /// Keep the reviews passing both predicates, preserving input order.
    pub fn apply<'a, I>(&self, reviews: I) -> Vec<&'a Review>
    where
        I: IntoIterator<Item = &'a Review>,
    {
        reviews
            .into_iter()
            .filter(|review| self.matches(review))
            .collect()
    }
}

/// Visible reviews narrowed by `filter`.
pub fn filter_reviews<'a>(reviews: &'a [Review], filter: &ReviewFilter) -> Vec<&'a Review> {
    filter.apply(reviews.iter().filter(|review| review.is_visible()))
}

/// Display label for a service tag: first `-` becomes `/`, uppercased.
pub fn service_label(tag: &str) -> String {
    tag.replacen('-', "/", 1).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReviewStatus;
    use pretty_assertions::assert_eq;

    fn review(id: &str, rating: u8, service: &str, status: ReviewStatus, featured: bool) -> Review {
        Review {
            id: id.into(),
            name: format!("Client {id}"),
            rating: Rating::new(rating).expect("test rating"),
            service: service.into(),
            status,
            featured,
            ..Default::default()
        }
    }

    fn sample() -> Vec<Review> {
        use ReviewStatus::{Approved, Pending};
        vec![
            review("a", 5, "websites", Approved, true),
            review("b", 4, "ecommerce", Approved, false),
            review("c", 3, "websites", Approved, false),
            review("d", 5, "websites", Pending, true),
            review("e", 2, "ai-ml", Approved, true),
            review("f", 1, "ecommerce", Pending, false),
        ]
    }

    fn ids(reviews: &[&Review]) -> Vec<String> {
        reviews.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn visible_reviews_drop_pending_and_keep_order() {
        let reviews = sample();
        assert_eq!(ids(&visible_reviews(&reviews)), vec!["a", "b", "c", "e"]);
    }

    #[test]
    fn featured_reviews_never_include_pending() {
        let reviews = sample();
        assert_eq!(ids(&featured_reviews(&reviews)), vec!["a", "e"]);
    }

    #[test]
    fn featured_projects_keep_flagged_only() {
        let projects = vec![
            Project { id: "p1".into(), featured: true, ..Default::default() },
            Project { id: "p2".into(), ..Default::default() },
            Project { id: "p3".into(), featured: true, ..Default::default() },
        ];
        let featured: Vec<&str> = featured_projects(&projects).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(featured, vec!["p1", "p3"]);
    }

    #[test]
    fn service_filter_all_sentinel() {
        assert_eq!(ServiceFilter::parse("all"), ServiceFilter::All);
        assert_eq!(ServiceFilter::parse(""), ServiceFilter::All);
        assert_eq!(ServiceFilter::parse("ui-ux"), ServiceFilter::Tag("ui-ux".into()));
        assert_eq!(ServiceFilter::parse("ui-ux").as_value(), "ui-ux");
    }

    #[test]
    fn rating_filter_parses_thresholds() {
        assert_eq!(RatingFilter::parse("all"), RatingFilter::All);
        assert_eq!(RatingFilter::parse("4"), RatingFilter::AtLeast(Rating::new(4).unwrap()));
        assert_eq!(RatingFilter::parse("9"), RatingFilter::All);
        assert_eq!(RatingFilter::parse("four"), RatingFilter::All);
        assert_eq!(RatingFilter::parse("3").as_value(), "3");
    }

    #[test]
    fn combined_filter_matches_brute_force_for_every_threshold() {
        let reviews = sample();
        for service in ["all", "websites", "ecommerce", "ai-ml", "apps"] {
            for threshold in 1..=5u8 {
                let filter = ReviewFilter::new(
                    ServiceFilter::parse(service),
                    RatingFilter::parse(&threshold.to_string()),
                );
                let expected: Vec<String> = reviews
                    .iter()
                    .filter(|r| r.status != ReviewStatus::Pending)
                    .filter(|r| r.rating.get() >= threshold)
                    .filter(|r| service == "all" || r.service == service)
                    .map(|r| r.id.clone())
                    .collect();
                assert_eq!(
                    ids(&filter_reviews(&reviews, &filter)),
                    expected,
                    "service={service} threshold={threshold}"
                );
            }
        }
    }

    #[test]
    fn default_filter_returns_all_visible() {
        let reviews = sample();
        let filtered = filter_reviews(&reviews, &ReviewFilter::default());
        assert_eq!(filtered.len(), visible_reviews(&reviews).len());
    }

    #[test]
    fn service_labels() {
        assert_eq!(service_label("ai-ml"), "AI/ML");
        assert_eq!(service_label("ui-ux"), "UI/UX");
        assert_eq!(service_label("websites"), "WEBSITES");
    }
}
