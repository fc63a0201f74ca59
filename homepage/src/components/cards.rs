//! Feature card components.
//!
//! Both cards take the same [`FeatureRecord`]; they differ only in layout.
//! Which one a record gets is decided by its tier, see [`render_card`].

use leptos::prelude::*;

use super::{Icon, ICON_SQUARES_FOUR};
use crate::layout::CardVariant;
use crate::types::{FeatureRecord, Inline};

/// Rich description content.
#[component]
pub fn RichText(spans: &'static [Inline]) -> impl IntoView {
    spans
        .iter()
        .map(|span| match *span {
            Inline::Text(text) => text.into_any(),
            Inline::Code(code) => view! { <code>{code}</code> }.into_any(),
            Inline::Strong(text) => view! { <strong>{text}</strong> }.into_any(),
            Inline::Link { label, href } => view! { <a href=href>{label}</a> }.into_any(),
        })
        .collect::<Vec<_>>()
}

/// Large emphasized card: gradient backdrop, title and description at the bottom.
///
/// The title link is cosmetic; its overlay span stretches over the whole card.
#[component]
pub fn PrimaryCard(record: FeatureRecord) -> impl IntoView {
    view! {
        <article class="primary-card">
            <div class="primary-card-backdrop"></div>
            <div class="primary-card-ring"></div>
            <h3 class="primary-card-title">
                <a href="#">
                    <span class="card-overlay"></span>
                    {record.title}
                </a>
            </h3>
            <div class="primary-card-description">
                <RichText spans=record.description />
            </div>
        </article>
    }
}

/// Compact card: icon placeholder, title as term, description as definition.
#[component]
pub fn SecondaryCard(record: FeatureRecord) -> impl IntoView {
    view! {
        <div class="secondary-card">
            <dt class="secondary-card-title">
                <div class="secondary-card-icon">
                    <Icon path=ICON_SQUARES_FOUR size="24" color="#ffffff" />
                </div>
                {record.title}
            </dt>
            <dd class="secondary-card-description">
                <RichText spans=record.description />
            </dd>
        </div>
    }
}

/// Render one record with the given card variant.
pub fn render_card(variant: CardVariant, record: FeatureRecord) -> AnyView {
    match variant {
        CardVariant::Primary => view! { <PrimaryCard record=record /> }.into_any(),
        CardVariant::Secondary => view! { <SecondaryCard record=record /> }.into_any(),
    }
}
