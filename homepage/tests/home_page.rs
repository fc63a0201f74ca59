//! End-to-end checks of tier assignment through the public API.

use homepage_leptos::catalog::FEATURES;
use homepage_leptos::layout::{page_layout, partition, CardVariant, TierKind};
use homepage_leptos::types::{FeatureRecord, Inline};
use homepage_leptos::{render_home, RenderOptions};
use pretty_assertions::assert_eq;

const TUTORIAL: &[Inline] = &[Inline::Text("tutorial")];

fn scenario_catalog() -> Vec<FeatureRecord> {
    [
        "Quickstart Tutorial",
        "Prompt examples",
        "Introduction",
        "Agent deep dive",
        "Providers endpoints",
    ]
    .into_iter()
    .map(|title| FeatureRecord::new(title, TUTORIAL))
    .collect()
}

/// Extract the HTML of one `<section>` by its tier slug.
fn section<'a>(html: &'a str, kind: TierKind) -> &'a str {
    let marker = format!(r#"id="{}""#, kind.slug());
    let start = html.find(&marker).expect("section rendered");
    let end = html[start..]
        .find("</section>")
        .map(|offset| start + offset)
        .expect("section closed");
    &html[start..end]
}

#[test]
fn five_record_scenario() {
    let layout = page_layout(&scenario_catalog());
    let titles: Vec<Vec<&str>> = layout.tiers.iter().map(|t| t.titles.clone()).collect();

    assert_eq!(
        titles,
        vec![
            vec!["Quickstart Tutorial", "Prompt examples"],
            vec!["Introduction", "Agent deep dive"],
            vec!["Providers endpoints"],
        ]
    );
}

#[test]
fn rendered_sections_hold_their_records() {
    let html = render_home(&scenario_catalog());

    let basics = section(&html, TierKind::Basics);
    assert!(basics.contains("Start with the basics"));
    assert!(basics.contains("Quickstart Tutorial"));
    assert!(basics.contains("Prompt examples"));
    assert!(!basics.contains("Introduction"));

    let build = section(&html, TierKind::BuildAgent);
    assert!(build.contains("Introduction"));
    assert!(build.contains("Agent deep dive"));
    assert!(!build.contains("Providers endpoints"));

    let explore = section(&html, TierKind::Explore);
    assert!(explore.contains("Providers endpoints"));
    assert_eq!(explore.matches(r#"class="secondary-card""#).count(), 1);
}

#[test]
fn three_records_fill_two_tiers() {
    let catalog: Vec<_> = scenario_catalog().into_iter().take(3).collect();
    let html = render_home(&catalog);

    assert_eq!(partition(&catalog).map(|t| t.len()), [2, 1, 0]);
    assert!(section(&html, TierKind::Explore).contains("Explore features"));
    assert!(!section(&html, TierKind::Explore).contains("secondary-card"));
}

#[test]
fn builtin_catalog_layout() {
    let layout = page_layout(FEATURES);

    assert_eq!(layout.card_count(), FEATURES.len());
    assert_eq!(layout.tiers[0].variant, CardVariant::Primary);
    assert_eq!(layout.tiers[2].titles.first(), Some(&"Providers endpoints"));
    assert_eq!(layout.tiers[2].titles.last(), Some(&"RAG"));
}

#[test]
fn export_json_matches_layout() {
    let options = RenderOptions {
        format: homepage_leptos::OutputFormat::Json,
        ..Default::default()
    };
    let json = homepage_leptos::export::render(FEATURES, &options).expect("render json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["tiers"][0]["heading"], "Start with the basics");
    assert_eq!(value["tiers"][1]["titles"][1], "Agent geep dive");
}
