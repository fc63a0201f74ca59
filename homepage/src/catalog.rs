//! The built-in feature catalog.
//!
//! Order matters: position decides which tier a record lands in (see
//! [`crate::layout::partition`]). Text is content data and is kept exactly
//! as the docs team wrote it.

use crate::types::{FeatureRecord, Inline};

/// Every feature shown on the home page, in display order.
pub static FEATURES: &[FeatureRecord] = &[
    FeatureRecord::new(
        "Quickstart Tutorial",
        &[Inline::Text(
            "Make you first Chat Completions API request with diferent providers.",
        )],
    ),
    FeatureRecord::new(
        "Prompt examples",
        &[Inline::Text(
            "Explore what Agents and Chains can do with prompts.",
        )],
    ),
    FeatureRecord::new(
        "Introduction",
        &[Inline::Text("Learn the basics of building agent.")],
    ),
    FeatureRecord::new(
        "Agent geep dive",
        &[Inline::Text(
            "Explore how agent work and important concepts.",
        )],
    ),
    FeatureRecord::new(
        "Providers endpoints",
        &[Inline::Text("We support llama.cpp and more endpoints")],
    ),
    FeatureRecord::new(
        "Prompt engineering",
        &[Inline::Text(
            "Learn best practices for prompt engineering.",
        )],
    ),
    FeatureRecord::new(
        "Structured Output",
        &[Inline::Text(
            "Learn techniques for well-formatted output.",
        )],
    ),
    FeatureRecord::new(
        "Function Calls",
        &[Inline::Text(
            "Discover how to execute structured function calls.",
        )],
    ),
    FeatureRecord::new(
        "Memory",
        &[Inline::Text(
            "Learn techniques for storing and retrieving memory.",
        )],
    ),
    FeatureRecord::new(
        "Chain",
        &[Inline::Text(
            "Learn how to generate using diferent chain protocols.",
        )],
    ),
    FeatureRecord::new(
        "Agents",
        &[Inline::Text(
            "Provide guidelines on designing and implementing agents.",
        )],
    ),
    FeatureRecord::new(
        "RAG",
        &[Inline::Text(
            "Learn how to process of integrating a retrieval component.",
        )],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keeps_display_order() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            [
                "Quickstart Tutorial",
                "Prompt examples",
                "Introduction",
                "Agent geep dive",
                "Providers endpoints",
                "Prompt engineering",
                "Structured Output",
                "Function Calls",
                "Memory",
                "Chain",
                "Agents",
                "RAG",
            ]
        );
    }

    #[test]
    fn catalog_fills_every_tier() {
        assert!(FEATURES.len() >= 4);
        assert!(
            FEATURES
                .iter()
                .all(|f| !f.title.is_empty() && !f.description.is_empty())
        );
    }
}
