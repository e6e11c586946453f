//! Dashboard module - host page for the WASM dashboard
//!
//! Provides the static page the module renders into.
//! Separated into HTML, CSS, and JS submodules for maintainability.
//!
//! # Architecture
//! - `html.rs`: Page structure, every container the module writes into
//! - `css.rs`: Styling with CSS custom properties
//! - `js.rs`: Bootstrap script loading the wasm bindings
//!
//! The `render_page` binary writes `dashboard_html()` out as `index.html`.
//! If a page only includes the bootstrap script, the web layer mounts
//! [`body_html`] and [`STYLES`] itself.

mod css;
mod html;
mod js;

pub use css::STYLES;

/// Generate the complete dashboard HTML page
pub fn dashboard_html() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Australian Stock Portfolio Dashboard</title>
    <style>
{css}
    </style>
</head>
<body>
{html}
    <script type="module">
{js}
    </script>
</body>
</html>"#,
        css = css::STYLES,
        html = html::TEMPLATE,
        js = js::SCRIPT
    )
}

/// Body markup without the bootstrap script
pub fn body_html() -> &'static str {
    html::TEMPLATE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::ids;
    use crate::navigation::{FeatureAction, PlotKind, COMBINED_TRENDS, COMPANIES};

    #[test]
    fn test_page_has_every_container() {
        let page = dashboard_html();
        let required = [
            "company-tiles",
            COMBINED_TRENDS,
            COMPANIES,
            ids::MODAL,
            ids::CLOSE,
            ids::TITLE,
            ids::PLOT,
            ids::LATEST,
            ids::MEAN,
            ids::MIN,
            ids::MAX,
            ids::SD,
            ids::PERFORMANCE,
            "plot-cycle",
        ];
        for id in required {
            assert!(page.contains(&format!(r#"id="{id}""#)), "missing #{id}");
        }
    }

    #[test]
    fn test_plot_controls_match_plot_kinds() {
        let body = body_html();
        for kind in PlotKind::ALL {
            assert!(body.contains(&format!(r#"id="{}""#, kind.element_id())));
            assert!(body.contains(&format!(r#"data-plot="{}""#, kind.key())));
            assert!(body.contains(kind.file_name()));
            assert!(body.contains(kind.button_label()));
        }
        // Exactly one plot and one button start active
        assert_eq!(body.matches("plot-image active").count(), 1);
        assert_eq!(body.matches("plot-btn active").count(), 1);
    }

    #[test]
    fn test_feature_cards_use_known_actions() {
        let body = body_html();
        for action in [
            FeatureAction::Trends,
            FeatureAction::Performance,
            FeatureAction::Companies,
            FeatureAction::Sectors,
        ] {
            assert!(body.contains(&format!(r#"data-action="{}""#, action.key())));
        }
    }

    #[test]
    fn test_page_loads_bindings() {
        let page = dashboard_html();
        assert!(page.contains("./pkg/asx_dashboard.js"));
        assert!(page.contains(".image-overlay"));
    }
}
