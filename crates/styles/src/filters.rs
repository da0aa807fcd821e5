//! Built-in contrast and colour filters.
//!
//! Only one of these may be active at a time. Each filter's config id is the
//! filter name prefixed with `filter-`, so its marker class never collides
//! with a regular tool.

use crate::registry::FilterRegistry;
use crate::tool::ToolConfig;

/// Names of the built-in filters, in registry order.
pub const FILTER_NAMES: [&str; 6] = [
    "dark-contrast",
    "high-contrast",
    "high-saturation",
    "light-contrast",
    "low-saturation",
    "monochrome",
];

// Elements recoloured by the light/dark contrast modes.
const CONTRAST_TARGETS: &[&str] = &[
    "", "body", "h1", "h2", "h3", "h4", "h5", "h6", "img", "p", "i", "svg", "a", "button",
    "label", "li", "ol",
];

fn filter(name: &str, prefix: &str) -> ToolConfig {
    ToolConfig::new(format!("filter-{name}")).scoped_to_marker(prefix)
}

fn recolour(name: &str, prefix: &str, foreground: &str, background: &str) -> ToolConfig {
    filter(name, prefix)
        .with_children(CONTRAST_TARGETS.iter().copied())
        .with_style("color", foreground)
        .with_style("fill", foreground)
        .with_style("background-color", background)
}

/// Build the built-in filter registry for the given marker prefix.
pub fn builtin_filters(prefix: &str) -> FilterRegistry {
    let configs = [
        ("dark-contrast", recolour("dark-contrast", prefix, "#FFF", "#000")),
        ("light-contrast", recolour("light-contrast", prefix, "#000", "#FFF")),
        (
            "high-contrast",
            filter("high-contrast", prefix).with_style("filter", "contrast(125%)"),
        ),
        (
            "high-saturation",
            filter("high-saturation", prefix).with_style("filter", "saturate(200%)"),
        ),
        (
            "low-saturation",
            filter("low-saturation", prefix).with_style("filter", "saturate(50%)"),
        ),
        (
            "monochrome",
            filter("monochrome", prefix).with_style("filter", "grayscale(100%)"),
        ),
    ];

    configs
        .into_iter()
        .map(|(name, config)| (name.to_string(), config))
        .collect()
}
