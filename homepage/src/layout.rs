//! Positional tier layout.
//!
//! The catalog is cut into three contiguous, gap-free slices:
//!
//! ```text
//! [0, 2)    Basics      -> primary cards
//! [2, 4)    BuildAgent  -> secondary cards
//! [4, end)  Explore     -> secondary cards
//! ```
//!
//! Bounds are clamped to the catalog length, so a short catalog yields empty
//! tiers instead of a panic.

use serde::Serialize;

use crate::types::FeatureRecord;

/// Headline shown in the page header.
pub const HEADLINE: &str = "Welcome to the `llama-cpp-agent` developer platform.";

/// End of the primary tier (exclusive).
pub const PRIMARY_END: usize = 2;

/// End of the second tier (exclusive).
pub const SECONDARY_END: usize = 4;

/// Visual treatment used for every card of a tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardVariant {
    /// Large gradient block with the text at the bottom
    Primary,
    /// Compact icon + title + description row
    Secondary,
}

/// The three page sections, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TierKind {
    /// "Start with the basics"
    Basics,
    /// "Build an agent"
    BuildAgent,
    /// "Explore features"
    Explore,
}

impl TierKind {
    /// All tiers in page order.
    pub const ALL: [TierKind; 3] = [TierKind::Basics, TierKind::BuildAgent, TierKind::Explore];

    /// Fixed section heading.
    pub fn heading(self) -> &'static str {
        match self {
            TierKind::Basics => "Start with the basics",
            TierKind::BuildAgent => "Build an agent",
            TierKind::Explore => "Explore features",
        }
    }

    /// Card variant used for this tier.
    pub fn variant(self) -> CardVariant {
        match self {
            TierKind::Basics => CardVariant::Primary,
            TierKind::BuildAgent | TierKind::Explore => CardVariant::Secondary,
        }
    }

    /// Stable identifier used for element ids.
    pub fn slug(self) -> &'static str {
        match self {
            TierKind::Basics => "basics",
            TierKind::BuildAgent => "build-an-agent",
            TierKind::Explore => "explore-features",
        }
    }

    /// Catalog positions covered by this tier; `None` means "to the end".
    fn bounds(self) -> (usize, Option<usize>) {
        match self {
            TierKind::Basics => (0, Some(PRIMARY_END)),
            TierKind::BuildAgent => (PRIMARY_END, Some(SECONDARY_END)),
            TierKind::Explore => (SECONDARY_END, None),
        }
    }
}

/// A contiguous slice of the catalog assigned to one section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tier<'a> {
    /// Which section this is
    pub kind: TierKind,
    /// Catalog index of the first record (clamped to the catalog length)
    pub start: usize,
    /// Records shown in this section, in catalog order
    pub records: &'a [FeatureRecord],
}

impl Tier<'_> {
    /// Section heading.
    pub fn heading(&self) -> &'static str {
        self.kind.heading()
    }

    /// Card variant for every record of the tier.
    pub fn variant(&self) -> CardVariant {
        self.kind.variant()
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the section renders no cards.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Split a catalog into the three page tiers.
///
/// The tiers partition the catalog exactly: concatenating their records
/// gives back the input, in order.
///
/// ```rust
/// use homepage_leptos::catalog::FEATURES;
/// use homepage_leptos::layout::{partition, TierKind};
///
/// let [basics, build, explore] = partition(FEATURES);
/// assert_eq!(basics.kind, TierKind::Basics);
/// assert_eq!(basics.len() + build.len() + explore.len(), FEATURES.len());
/// ```
pub fn partition(catalog: &[FeatureRecord]) -> [Tier<'_>; 3] {
    TierKind::ALL.map(|kind| {
        let (start, end) = kind.bounds();
        let len = catalog.len();
        let start = start.min(len);
        let end = end.map_or(len, |end| end.min(len));
        Tier {
            kind,
            start,
            records: &catalog[start..end],
        }
    })
}

/// Serializable summary of one tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TierLayout {
    /// Which section this is
    pub kind: TierKind,
    /// Section heading
    pub heading: &'static str,
    /// Card variant
    pub variant: CardVariant,
    /// Catalog index of the first record
    pub start: usize,
    /// Titles of the records, in display order
    pub titles: Vec<&'static str>,
}

impl From<Tier<'_>> for TierLayout {
    fn from(tier: Tier<'_>) -> Self {
        Self {
            kind: tier.kind,
            heading: tier.heading(),
            variant: tier.variant(),
            start: tier.start,
            titles: tier.records.iter().map(|r| r.title).collect(),
        }
    }
}

/// Serializable summary of the whole page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageLayout {
    /// Header headline
    pub headline: &'static str,
    /// Sections in page order
    pub tiers: Vec<TierLayout>,
}

impl PageLayout {
    /// Total number of cards across all tiers.
    pub fn card_count(&self) -> usize {
        self.tiers.iter().map(|t| t.titles.len()).sum()
    }
}

/// Describe how a catalog will be laid out, without rendering it.
pub fn page_layout(catalog: &[FeatureRecord]) -> PageLayout {
    PageLayout {
        headline: HEADLINE,
        tiers: partition(catalog).into_iter().map(TierLayout::from).collect(),
    }
}
