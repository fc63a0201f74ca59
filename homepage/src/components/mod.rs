//! Leptos UI components for the home page.
//!
//! Every component is a plain `#[component]` function rendered once on the
//! server; none of them hold signals or event handlers.
//!
//! # Component Hierarchy
//!
//! ```text
//! HomeDocument
//! └── HomePage
//!     ├── header (headline)
//!     ├── TierSection: Start with the basics
//!     │   └── PrimaryCard (x2)
//!     ├── TierSection: Build an agent
//!     │   └── SecondaryCard (x2)
//!     └── TierSection: Explore features
//!         └── SecondaryCard (rest of the catalog)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use homepage_leptos::catalog::FEATURES;
//! use homepage_leptos::components::HomePage;
//!
//! view! { <HomePage catalog=FEATURES.to_vec() /> }
//! ```

mod cards;
mod document;
mod icons;
mod page;

pub use cards::{render_card, PrimaryCard, RichText, SecondaryCard};
pub use document::HomeDocument;
pub use icons::*;
pub use page::{HomePage, TierSection};
