//! # vermixor
//!
//! **Content and interaction core of the Vermixor agency site** - everything
//! the landing renders, without the rendering.
//!
//! The site is a set of views over one static, pre-authored content catalog.
//! This crate owns that catalog and every piece of logic that can be tested
//! without a browser, so the Leptos front end stays a thin view layer.
//!
//! ## Features
//!
//! - **Content Catalog** - Typed, validated records embedded at build time
//! - **Filter/Aggregate Layer** - Visible and featured subsets, review filters, rating summaries
//! - **Carousel & Counters** - Wrap-around indices and count-up animation frames
//! - **Theme State** - Five palettes persisted under one storage key
//! - **Forms** - Contact and review validation plus a retrying submission contract
//! - **Routes** - Typed route table with round-tripping paths
//!
//! ## Quick Start
//!
//! ```rust
//! use vermixor::catalog;
//! use vermixor::filters::{RatingFilter, ReviewFilter, ServiceFilter};
//!
//! let catalog = catalog::embedded();
//! let summary = catalog.rating_summary();
//! println!("{} reviews, average {:?}", summary.total, summary.display_average());
//!
//! let filter = ReviewFilter::new(ServiceFilter::parse("websites"), RatingFilter::parse("4"));
//! for review in catalog.filter_reviews(&filter) {
//!     println!("{} ({}★)", review.name, review.rating.get());
//! }
//! ```
//!
//! ## Submitting a Form
//!
//! Forms go through [`submit::submit`], which validates before anything is
//! sent. See the [`submit`] module for a runnable example.

// ============================================================================
// Content
// ============================================================================

/// Embedded content catalog and its validation.
pub mod catalog;

/// Record types stored in the catalog.
pub mod types;

/// Closed icon registry with a fallback key.
pub mod icons;

// ============================================================================
// Derived Views
// ============================================================================

/// Visible/featured subsets and review filters.
pub mod filters;

/// Average rating and star distribution.
pub mod aggregate;

/// Wrap-around carousel index.
pub mod carousel;

/// Count-up animation frames for headline stats.
pub mod counter;

// ============================================================================
// Interaction
// ============================================================================

/// Display themes and their persistence.
pub mod theme;

/// Route table and header navigation.
pub mod routes;

/// Contact and review form validation.
pub mod forms;

/// Submission contract: transport, timeouts and retries.
pub mod submit;

/// Site configuration loaded from TOML.
pub mod config;

// ============================================================================
// Re-exports
// ============================================================================

pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, SiteConfig};
pub use forms::{ContactForm, Form, FormKind, FormRules, ReviewForm, Submission};
pub use routes::Route;
pub use submit::{RetryPolicy, SubmitOutcome, Timer, Transport};
pub use theme::{Theme, ThemeState, ThemeStore};
