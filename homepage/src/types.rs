//! Feature data types for the home page.
//!
//! Records are plain literal data: every field borrows `'static` strings,
//! so a record is `Copy` and can be handed to components without cloning
//! any heap data.
//!
//! # Example
//!
//! ```rust
//! use homepage_leptos::types::{FeatureRecord, Inline};
//!
//! const MEMORY: FeatureRecord = FeatureRecord::new(
//!     "Memory",
//!     &[
//!         Inline::Text("Learn techniques for storing and retrieving "),
//!         Inline::Strong("memory"),
//!         Inline::Text("."),
//!     ],
//! );
//!
//! assert_eq!(MEMORY.description_text(), "Learn techniques for storing and retrieving memory.");
//! ```

use serde::Serialize;

/// One span of a rich description.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Inline {
    /// Plain text
    Text(&'static str),
    /// Inline code (`<code>`)
    Code(&'static str),
    /// Emphasized text (`<strong>`)
    Strong(&'static str),
    /// Hyperlink with a visible label
    Link {
        /// Visible link text
        label: &'static str,
        /// Link target
        href: &'static str,
    },
}

impl Inline {
    /// The visible text of this span, without markup.
    pub fn text(&self) -> &'static str {
        match *self {
            Inline::Text(text) | Inline::Code(text) | Inline::Strong(text) => text,
            Inline::Link { label, .. } => label,
        }
    }
}

/// A single feature card: a short title plus a rich description.
///
/// Titles are expected to be non-empty and unique within a catalog, but
/// neither is enforced. An empty title or description renders as blank text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureRecord {
    /// Short label shown as the card heading
    pub title: &'static str,
    /// Supporting content shown under the title
    pub description: &'static [Inline],
}

impl FeatureRecord {
    /// Build a record from literal parts.
    pub const fn new(title: &'static str, description: &'static [Inline]) -> Self {
        Self { title, description }
    }

    /// Concatenated visible text of the description.
    pub fn description_text(&self) -> String {
        self.description.iter().map(Inline::text).collect()
    }
}
