use std::collections::HashSet;

use vermixor::catalog::{self, Catalog};
use vermixor::filters::{RatingFilter, ReviewFilter, ServiceFilter};
use vermixor::icons::IconKey;
use vermixor::routes::{NAVIGATION, Route, ServiceSlug};
use vermixor::types::ReviewStatus;

fn catalog() -> &'static Catalog {
    catalog::embedded()
}

#[test]
fn every_service_slug_has_a_service_and_a_detail_page() {
    for slug in ServiceSlug::ALL {
        let id = slug.as_str();
        assert!(catalog().service(id).is_some(), "missing service {id}");
        let detail = catalog()
            .service_detail(id)
            .unwrap_or_else(|| panic!("missing detail page for {id}"));
        assert!(!detail.capabilities.is_empty(), "{id} has no capabilities");
        assert!(!detail.process.is_empty(), "{id} has no process");
    }
}

#[test]
fn service_ids_route_to_their_detail_page() {
    for service in &catalog().services {
        let route = Route::service_detail(&service.id);
        assert!(
            matches!(route, Route::ServiceDetail(_)),
            "{} does not route to a detail page",
            service.id
        );
        assert_eq!(Route::parse(&route.path()), route);
    }
}

#[test]
fn project_links_round_trip() {
    for project in &catalog().projects {
        let route = Route::project_detail(&project.id);
        assert_eq!(route.path(), format!("/projects/{}", project.id));
        assert_eq!(Route::parse(&route.path()), route);
    }
}

#[test]
fn navigation_points_at_real_routes() {
    for item in NAVIGATION {
        assert_ne!(Route::parse(item.href), Route::NotFound, "{}", item.href);
    }
}

#[test]
fn catalog_icons_are_all_known() {
    for service in &catalog().services {
        assert!(
            IconKey::KNOWN.contains(&service.icon),
            "{} falls back to the default icon",
            service.id
        );
    }
}

#[test]
fn pending_reviews_stay_out_of_public_views() {
    let pending: HashSet<&str> = catalog()
        .reviews
        .iter()
        .filter(|r| r.status == ReviewStatus::Pending)
        .map(|r| r.id.as_str())
        .collect();
    assert!(!pending.is_empty(), "catalog should carry a pending review");

    let public = catalog()
        .visible_reviews()
        .into_iter()
        .chain(catalog().featured_reviews())
        .chain(catalog().filter_reviews(&ReviewFilter::default()));
    for review in public {
        assert!(!pending.contains(review.id.as_str()), "{} leaked", review.id);
    }
}

#[test]
fn distribution_matches_visible_reviews() {
    let summary = catalog().rating_summary();
    assert_eq!(summary.total, catalog().visible_reviews().len());
    assert_eq!(summary.distribution.iter().sum::<usize>(), summary.total);
    let percent: f64 = summary.buckets().map(|b| b.percent).sum();
    assert!((percent - 100.0).abs() < 1e-9);
}

#[test]
fn filters_narrow_by_service_and_rating() {
    let filter = ReviewFilter::new(ServiceFilter::parse("websites"), RatingFilter::parse("5"));
    let found = catalog().filter_reviews(&filter);
    assert!(!found.is_empty());
    assert!(
        found
            .iter()
            .all(|r| r.service == "websites" && r.rating.get() == 5)
    );
}

#[test]
fn at_most_one_popular_tier() {
    let popular = catalog().pricing.iter().filter(|t| t.popular).count();
    assert!(popular <= 1);
}

#[test]
fn featured_projects_exist_for_the_home_page() {
    assert!(!catalog().featured_projects().is_empty());
    assert!(!catalog().featured_reviews().is_empty());
}

#[test]
fn catalog_serializes_back_to_equivalent_json() {
    let json = serde_json::to_string(catalog()).expect("serializes");
    let reparsed = Catalog::from_json(&json).expect("reparses");
    assert_eq!(&reparsed, catalog());
}
