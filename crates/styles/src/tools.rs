//! Built-in toggleable tools.

use crate::registry::ToolRegistry;
use crate::tool::ToolConfig;

/// Id of the readable-font tool.
pub const READABLE_FONT: &str = "readable-font";

/// Classes used by common icon fonts. Elements carrying one are never
/// treated as text.
pub const ICON_CLASSES: &[&str] = &[
    "material-icons",
    "material-icons-outlined",
    "material-symbols-outlined",
    "fa",
    "fas",
    "far",
    "fab",
    "glyphicon",
    "dashicons",
    "icon",
];

const READABLE_FONT_FAMILY: &str = "OpenDyslexic3, \"Comic Sans MS\", Arial, Helvetica, sans-serif";

const READABLE_FONT_FACE: &str = "@font-face { font-family: OpenDyslexic3; \
    src: local(\"OpenDyslexic3\"), url(\"fonts/OpenDyslexic3-Regular.woff2\") format(\"woff2\"); \
    font-display: swap; }";

const HEADINGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

const TEXT_BLOCKS: &[&str] = &["", "*"];

/// `*:not(.a, .b)` selector matching everything except icon glyphs.
pub fn icon_exclusion() -> String {
    let classes: Vec<String> = ICON_CLASSES.iter().map(|c| format!(".{c}")).collect();
    format!("*:not({})", classes.join(", "))
}

/// Build the built-in tool registry for the given marker prefix.
pub fn builtin_tools(prefix: &str) -> ToolRegistry {
    ToolRegistry::from_tools([
        ToolConfig::new(READABLE_FONT)
            .scoped_to_marker(prefix)
            .with_children([String::new(), icon_exclusion()])
            .with_style("font-family", READABLE_FONT_FAMILY)
            .with_css(READABLE_FONT_FACE),
        ToolConfig::new("highlight-links")
            .scoped_to_marker(prefix)
            .with_children(["a[href]"])
            .with_style("outline", "2px solid #ff0000")
            .with_style("outline-offset", "2px"),
        ToolConfig::new("highlight-title")
            .scoped_to_marker(prefix)
            .with_children(HEADINGS.iter().copied())
            .with_style("outline", "2px solid #0076ff")
            .with_style("outline-offset", "2px"),
        ToolConfig::new("stop-animations")
            .scoped_to_marker(prefix)
            .with_children(["*", "*::before", "*::after"])
            .with_style("transition", "none")
            .with_style("animation-duration", "0.01s")
            .with_style("animation-iteration-count", "1")
            .with_style("animation-fill-mode", "forwards")
            .with_style("scroll-behavior", "auto"),
        ToolConfig::new("hide-images")
            .scoped_to_marker(prefix)
            .with_children(["img", "picture", "video", "[role=\"img\"]"])
            .with_style("visibility", "hidden"),
        ToolConfig::new("letter-spacing")
            .scoped_to_marker(prefix)
            .with_children(TEXT_BLOCKS.iter().copied())
            .with_style("letter-spacing", "0.12em")
            .with_style("word-spacing", "0.16em"),
        ToolConfig::new("line-height")
            .scoped_to_marker(prefix)
            .with_children(TEXT_BLOCKS.iter().copied())
            .with_style("line-height", "1.8"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compile_css, DEFAULT_PREFIX};

    #[test]
    fn test_every_builtin_compiles_to_something() {
        let registry = builtin_tools(DEFAULT_PREFIX);
        assert_eq!(registry.len(), 7);
        for (id, config) in registry.iter() {
            assert_eq!(id, config.id);
            assert!(!compile_css(config).is_empty(), "{id} compiled to nothing");
        }
    }

    #[test]
    fn test_readable_font_skips_icons_and_carries_font_face() {
        let registry = builtin_tools(DEFAULT_PREFIX);
        let css = compile_css(registry.get(READABLE_FONT).unwrap());

        assert!(css.starts_with("html.a11y-readable-font { font-family:"));
        assert!(css.contains("html.a11y-readable-font *:not(.material-icons, "));
        assert!(css.ends_with("font-display: swap; }"));
    }

    #[test]
    fn test_icon_exclusion() {
        let selector = icon_exclusion();
        assert!(selector.starts_with("*:not(.material-icons, .material-icons-outlined"));
        assert!(selector.ends_with(".icon)"));
    }
}
