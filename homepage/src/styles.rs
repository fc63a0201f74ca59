//! CSS styles for the home page.
//!
//! Class names are semantic (`primary-card`, `tier-grid`, ...) so the markup
//! does not depend on a utility-class framework. Hosts that ship their own
//! stylesheet can drop [`HOME_CSS`] and target the same classes.
//!
//! # Customization
//!
//! ```rust
//! use homepage_leptos::styles::HOME_CSS;
//!
//! let my_css = ".tier-heading { color: rebeccapurple; }";
//! let combined = format!("{}\n{}", HOME_CSS, my_css);
//! assert!(combined.ends_with("}"));
//! ```

/// Complete stylesheet for the standalone document.
///
/// Grids are single-column by default and switch to two columns at 1024px.
pub const HOME_CSS: &str = r#"
:root {
    --gray-900: #111827;
    --gray-300: #d1d5db;
    --indigo-600: #4f46e5;
    --purple-600: #9333ea;
    --blue-500: #3b82f6;
    --font-sans: system-ui, -apple-system, Segoe UI, Roboto, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    line-height: 1.5;
}

.home-main {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.home-header {
    position: relative;
    overflow: hidden;
    padding: 2rem 0;
}

.home-headline {
    margin: 0;
    text-align: left;
    font-size: 2.25rem;
    line-height: 2.5rem;
    font-weight: 700;
}

.tier-section {
    margin: 0 auto;
    padding: 2rem 0;
}

.tier-heading {
    margin: 0 0 1.5rem;
    font-size: 1.5rem;
    line-height: 2rem;
    font-weight: 600;
}

.tier-grid {
    display: grid;
    grid-template-columns: repeat(1, minmax(0, 1fr));
}

.tier-grid-primary {
    max-width: 42rem;
    margin: 0 auto;
    grid-auto-rows: 1fr;
    gap: 2rem;
}

.tier-grid-secondary {
    max-width: 36rem;
    column-gap: 1rem;
    row-gap: 2.5rem;
}

@media (min-width: 1024px) {
    .tier-grid {
        grid-template-columns: repeat(2, minmax(0, 1fr));
    }

    .tier-grid-primary {
        max-width: none;
        margin: 0;
    }

    .tier-grid-secondary {
        max-width: none;
        row-gap: 2rem;
    }
}

.primary-card {
    position: relative;
    isolation: isolate;
    display: flex;
    flex-direction: column;
    justify-content: flex-end;
    overflow: hidden;
    border-radius: 1rem;
    background: var(--gray-900);
    padding: 8rem 2rem 2rem;
}

.primary-card-backdrop,
.primary-card-ring {
    position: absolute;
    inset: 0;
    z-index: -10;
}

.primary-card-backdrop {
    background-image: linear-gradient(to bottom right, var(--purple-600), var(--blue-500));
}

.primary-card:hover .primary-card-backdrop {
    background-image: linear-gradient(to bottom left, var(--purple-600), var(--blue-500));
}

.primary-card-ring {
    border-radius: 1rem;
    box-shadow: inset 0 0 0 1px rgba(17, 24, 39, 0.1);
}

.primary-card-title {
    margin: 0.75rem 0 0;
    font-size: 1.125rem;
    line-height: 1.5rem;
    font-weight: 600;
    color: #ffffff;
}

.primary-card-title a {
    color: inherit;
    text-decoration: none;
}

.card-overlay {
    position: absolute;
    inset: 0;
}

.primary-card-description {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    row-gap: 0.25rem;
    overflow: hidden;
    font-size: 0.875rem;
    line-height: 1.5rem;
    color: var(--gray-300);
}

.secondary-card {
    position: relative;
    margin: 1rem 0;
    padding-left: 4rem;
}

.secondary-card-title {
    font-size: 1rem;
    font-weight: 600;
}

.secondary-card-icon {
    position: absolute;
    left: 0;
    top: 0;
    display: flex;
    width: 3rem;
    height: 3rem;
    align-items: center;
    justify-content: center;
    border-radius: 0.5rem;
    background: var(--indigo-600);
}

.secondary-card-description {
    margin: 0;
    font-size: 0.875rem;
}

code {
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
    font-size: 0.85em;
}
"#;

/// Content Security Policy for the standalone document: inline styles only,
/// no scripts, no network access.
pub const CSP: &str = "default-src 'none'; img-src 'self' data:; style-src 'unsafe-inline'; script-src 'none'; connect-src 'none'; font-src 'self' data:;";
