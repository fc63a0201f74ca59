//! Page composer - header plus the three feature tiers.

use leptos::prelude::*;

use super::render_card;
use crate::layout::{partition, CardVariant, TierKind, HEADLINE};
use crate::types::FeatureRecord;

/// One labeled section with its grid of cards.
///
/// An empty `records` list still renders the heading and an empty grid.
#[component]
pub fn TierSection(kind: TierKind, records: Vec<FeatureRecord>) -> impl IntoView {
    let variant = kind.variant();
    let slug = kind.slug();
    let grid_class = match variant {
        CardVariant::Primary => "tier-grid tier-grid-primary",
        CardVariant::Secondary => "tier-grid tier-grid-secondary",
    };

    view! {
        <section class="tier-section" id=slug data-tier=slug>
            <h2 class="tier-heading">{kind.heading()}</h2>
            <div class=grid_class>
                {records
                    .into_iter()
                    .map(|record| render_card(variant, record))
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// The whole home page body: headline, then Basics, Build an agent, Explore.
#[component]
pub fn HomePage(catalog: Vec<FeatureRecord>) -> impl IntoView {
    let sections = partition(&catalog)
        .into_iter()
        .map(|tier| view! { <TierSection kind=tier.kind records=tier.records.to_vec() /> })
        .collect::<Vec<_>>();

    view! {
        <header class="home-header">
            <h1 class="home-headline">{HEADLINE}</h1>
        </header>
        {sections}
    }
}
