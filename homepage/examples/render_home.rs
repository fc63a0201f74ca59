//! Render the built-in home page to a file.
//!
//! Run with: `cargo run --example render_home`

use homepage_leptos::{catalog::FEATURES, layout::page_layout, render_document};

fn main() {
    let html = render_document(FEATURES, "llama-cpp-agent developer platform");

    let output_path = "home.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    for tier in page_layout(FEATURES).tiers {
        println!("{:<24} {} card(s)", tier.heading, tier.titles.len());
    }
    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
