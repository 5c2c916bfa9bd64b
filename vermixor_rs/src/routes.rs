//! Client-side route table.
//!
//! Paths are parsed into [`Route`] and rendered back with [`Route::path`]; the
//! two round-trip for every route. Anything unrecognised is [`Route::NotFound`].

use std::fmt;

/// The six services that have a dedicated detail page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceSlug {
    Websites,
    Ecommerce,
    Apps,
    AiMl,
    Databases,
    UiUx,
}

impl ServiceSlug {
    pub const ALL: [ServiceSlug; 6] = [
        ServiceSlug::Websites,
        ServiceSlug::Ecommerce,
        ServiceSlug::Apps,
        ServiceSlug::AiMl,
        ServiceSlug::Databases,
        ServiceSlug::UiUx,
    ];

    /// Path segment, identical to the catalog service id.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceSlug::Websites => "websites",
            ServiceSlug::Ecommerce => "ecommerce",
            ServiceSlug::Apps => "apps",
            ServiceSlug::AiMl => "ai-ml",
            ServiceSlug::Databases => "databases",
            ServiceSlug::UiUx => "ui-ux",
        }
    }

    pub fn parse(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slug| slug.as_str() == segment)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Services,
    ServiceDetail(ServiceSlug),
    Projects,
    ProjectDetail(String),
    Pricing,
    Contact,
    Reviews,
    NotFound,
}

const NOT_FOUND_PATH: &str = "/404";

impl Route {
    /// Parse a location path. Query strings, fragments and a trailing slash
    /// are ignored.
    pub fn parse(path: &str) -> Route {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["services"] => Route::Services,
            ["services", slug] => ServiceSlug::parse(slug)
                .map(Route::ServiceDetail)
                .unwrap_or(Route::NotFound),
            ["projects"] => Route::Projects,
            ["projects", id] => Route::ProjectDetail((*id).to_string()),
            ["pricing"] => Route::Pricing,
            ["contact"] => Route::Contact,
            ["reviews"] => Route::Reviews,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Services => "/services".to_string(),
            Route::ServiceDetail(slug) => format!("/services/{}", slug.as_str()),
            Route::Projects => "/projects".to_string(),
            Route::ProjectDetail(id) => format!("/projects/{id}"),
            Route::Pricing => "/pricing".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Reviews => "/reviews".to_string(),
            Route::NotFound => NOT_FOUND_PATH.to_string(),
        }
    }

    pub fn service_detail(service_id: &str) -> Route {
        ServiceSlug::parse(service_id)
            .map(Route::ServiceDetail)
            .unwrap_or(Route::NotFound)
    }

    pub fn project_detail(project_id: &str) -> Route {
        Route::ProjectDetail(project_id.to_string())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Header navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAVIGATION: [NavItem; 5] = [
    NavItem { label: "Services", href: "/services" },
    NavItem { label: "Work", href: "/projects" },
    NavItem { label: "About", href: "/about" },
    NavItem { label: "Pricing", href: "/pricing" },
    NavItem { label: "Contact", href: "/contact" },
];

/// A nav link is active only on its exact path.
pub fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn all_routes() -> Vec<Route> {
        let mut routes = vec![
            Route::Home,
            Route::About,
            Route::Services,
            Route::Projects,
            Route::ProjectDetail("bright-retail".into()),
            Route::Pricing,
            Route::Contact,
            Route::Reviews,
            Route::NotFound,
        ];
        routes.extend(ServiceSlug::ALL.into_iter().map(Route::ServiceDetail));
        routes
    }

    #[test]
    fn parse_and_path_round_trip() {
        for route in all_routes() {
            assert_eq!(Route::parse(&route.path()), route, "path {}", route.path());
        }
    }

    #[test]
    fn service_detail_paths() {
        assert_eq!(Route::parse("/services/ai-ml"), Route::ServiceDetail(ServiceSlug::AiMl));
        assert_eq!(Route::parse("/services/ui-ux/"), Route::ServiceDetail(ServiceSlug::UiUx));
        assert_eq!(Route::parse("/services/blockchain"), Route::NotFound);
        assert_eq!(Route::service_detail("apps").path(), "/services/apps");
    }

    #[test]
    fn ignores_query_and_fragment() {
        assert_eq!(Route::parse("/reviews?service=apps"), Route::Reviews);
        assert_eq!(Route::parse("/pricing#faq"), Route::Pricing);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/careers"), Route::NotFound);
        assert_eq!(Route::parse("/projects/a/b"), Route::NotFound);
        assert_eq!(Route::parse("/about/team"), Route::NotFound);
    }

    #[test]
    fn nav_active_is_exact_match() {
        assert!(is_active("/services", "/services"));
        assert!(!is_active("/services/apps", "/services"));
        assert_eq!(NAVIGATION.iter().map(|n| n.label).collect::<Vec<_>>(), vec![
            "Services", "Work", "About", "Pricing", "Contact"
        ]);
    }
}
