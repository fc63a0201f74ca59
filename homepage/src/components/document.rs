//! Root document component - the complete HTML page

use super::HomePage;
use crate::styles::{CSP, HOME_CSS};
use crate::types::FeatureRecord;
use leptos::prelude::*;

/// The complete HTML document for the home page
#[component]
pub fn HomeDocument(
    catalog: Vec<FeatureRecord>,
    /// Text of the `<title>` element
    #[prop(into)]
    title: String,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                <style>{HOME_CSS}</style>
            </head>
            <body>
                <main class="home-main">
                    <HomePage catalog=catalog />
                </main>
            </body>
        </html>
    }
}
