//! # homepage-leptos
//!
//! Leptos SSR renderer for the `llama-cpp-agent` developer platform home page.
//!
//! The page is a header plus three sections of feature cards. All of it is
//! derived from one ordered catalog of [`types::FeatureRecord`]s:
//!
//! - records `[0, 2)` become large primary cards under "Start with the basics"
//! - records `[2, 4)` become compact cards under "Build an agent"
//! - everything from index 4 on becomes compact cards under "Explore features"
//!
//! ## Quick Start
//!
//! ```rust
//! use homepage_leptos::{catalog::FEATURES, render_document};
//!
//! let html = render_document(FEATURES, "llama-cpp-agent");
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Quickstart Tutorial"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Feature record data model
//! - [`catalog`] - The built-in catalog
//! - [`layout`] - Positional tier partition and its serializable summary
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//! - [`config`] / [`export`] - Render options and writing output
//!
//! Rendering is pure: the same catalog always gives the same HTML, and no
//! reactive runtime or hydration is involved.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod layout;
pub mod styles;
pub mod types;

use components::{HomeDocument, HomePage};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::debug;
use types::FeatureRecord;

pub use config::{OutputFormat, RenderOptions};
pub use error::ExportError;
pub use export::{export, ExportSummary};

/// Render the page body (header and three sections) as an HTML fragment.
///
/// Short catalogs are fine: tiers without records render their heading over
/// an empty grid.
///
/// ```rust
/// use homepage_leptos::render_home;
///
/// let html = render_home(&[]);
/// assert!(html.contains("Start with the basics"));
/// assert!(html.contains("Explore features"));
/// ```
pub fn render_home(catalog: &[FeatureRecord]) -> String {
    debug!(records = catalog.len(), "rendering home fragment");
    let page = view! { <HomePage catalog=catalog.to_vec() /> };
    page.to_html()
}

/// Render a standalone HTML document with inline styles.
pub fn render_document(catalog: &[FeatureRecord], title: &str) -> String {
    debug!(records = catalog.len(), title, "rendering home document");
    let doc = view! { <HomeDocument catalog=catalog.to_vec() title=title /> };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}
