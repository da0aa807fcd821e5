//! CSS compiler: turns a `ToolConfig` into stylesheet text.
//!
//! Every function here is pure. The same config always yields byte-identical
//! output, which the injector relies on for idempotent re-injection.

use crate::tool::ToolConfig;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Prefixes emitted, in order, for properties in [`PREFIXED_PROPERTIES`].
pub const VENDOR_PREFIXES: [&str; 5] = ["-o-", "-ms-", "-moz-", "-webkit-", ""];

/// Properties that still need vendor-prefixed copies.
pub const PREFIXED_PROPERTIES: &[&str] = &["filter"];

/// Render a declaration block, one `!important` declaration per property
/// (per prefix for prefixed properties), separated by single spaces.
pub fn render_declarations(styles: &BTreeMap<String, String>) -> String {
    let mut block = String::new();

    for (property, value) in styles {
        if PREFIXED_PROPERTIES.contains(&property.as_str()) {
            for prefix in VENDOR_PREFIXES {
                push_declaration(&mut block, prefix, property, value);
            }
        } else {
            push_declaration(&mut block, "", property, value);
        }
    }

    block.trim().to_string()
}

fn push_declaration(block: &mut String, prefix: &str, property: &str, value: &str) {
    if !block.is_empty() {
        block.push(' ');
    }
    // Writing into a String cannot fail.
    let _ = write!(block, "{prefix}{property}:{value} !important;");
}

/// Wrap a declaration block in one rule per child selector.
///
/// An empty `children` list, or an empty entry, targets `selector` itself.
pub fn scope_declarations(selector: &str, children: &[String], block: &str) -> String {
    let mut rules = String::new();

    if children.is_empty() {
        push_rule(&mut rules, selector, block);
        return rules;
    }

    for child in children {
        if child.is_empty() {
            push_rule(&mut rules, selector, block);
        } else {
            push_rule(&mut rules, &format!("{selector} {child}"), block);
        }
    }

    rules
}

fn push_rule(rules: &mut String, selector: &str, block: &str) {
    let _ = write!(rules, "{selector} {{ {block} }} ");
}

/// Compile a tool config into its final stylesheet text.
///
/// Returns an empty string when there is nothing to inject.
pub fn compile_css(config: &ToolConfig) -> String {
    let mut css = String::new();

    if !config.styles.is_empty() {
        let block = render_declarations(&config.styles);
        match config.selector.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(selector) => css.push_str(&scope_declarations(
                selector,
                &config.children_selector,
                &block,
            )),
            None => css.push_str(&block),
        }
    }

    if let Some(raw) = config.css.as_deref() {
        // Rules end in a separator already; keep exactly one space before the raw CSS.
        css.truncate(css.trim_end().len());
        css.push(' ');
        css.push_str(raw);
    }

    css.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn styles(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_filter_is_vendor_prefixed() {
        let block = render_declarations(&styles(&[("filter", "grayscale(100%)")]));
        assert_eq!(
            block,
            "-o-filter:grayscale(100%) !important; \
             -ms-filter:grayscale(100%) !important; \
             -moz-filter:grayscale(100%) !important; \
             -webkit-filter:grayscale(100%) !important; \
             filter:grayscale(100%) !important;"
        );
    }

    #[test]
    fn test_plain_property_single_declaration() {
        let block = render_declarations(&styles(&[("color", "#fff")]));
        assert_eq!(block, "color:#fff !important;");
    }

    #[test]
    fn test_declarations_are_sorted() {
        let block = render_declarations(&styles(&[("fill", "#FFF"), ("color", "#FFF")]));
        assert_eq!(block, "color:#FFF !important; fill:#FFF !important;");
    }

    #[test]
    fn test_unknown_property_passes_through() {
        let block = render_declarations(&styles(&[("not-a-real-prop", "whatever")]));
        assert_eq!(block, "not-a-real-prop:whatever !important;");
    }

    #[test]
    fn test_scope_without_children() {
        let rules = scope_declarations("html.x", &[], "color:red !important;");
        assert_eq!(rules, "html.x { color:red !important; } ");
    }

    #[test]
    fn test_scope_with_children() {
        let children = vec![String::new(), "p".to_string(), "a".to_string()];
        let rules = scope_declarations("html.x", &children, "b");
        assert_eq!(rules, "html.x { b } html.x p { b } html.x a { b } ");
    }

    #[test]
    fn test_compile_scoped() {
        let config = ToolConfig::new("highlight-title")
            .with_selector("html.a11y-highlight-title")
            .with_children(["h1", "h2"])
            .with_style("outline", "2px solid #0076ff");

        assert_eq!(
            compile_css(&config),
            "html.a11y-highlight-title h1 { outline:2px solid #0076ff !important; } \
             html.a11y-highlight-title h2 { outline:2px solid #0076ff !important; }"
        );
    }

    #[test]
    fn test_compile_without_selector_emits_bare_block() {
        let config = ToolConfig::new("bare").with_style("color", "#000");
        assert_eq!(compile_css(&config), "color:#000 !important;");
    }

    #[test]
    fn test_compile_appends_raw_css() {
        let config = ToolConfig::new("font")
            .with_selector("html.f")
            .with_style("font-family", "OpenDyslexic")
            .with_css("@font-face { font-family: OpenDyslexic; }");

        assert_eq!(
            compile_css(&config),
            "html.f { font-family:OpenDyslexic !important; } @font-face { font-family: OpenDyslexic; }"
        );
    }

    #[test]
    fn test_compile_raw_css_after_children() {
        let config = ToolConfig::new("font")
            .with_selector("html.f")
            .with_children(["", "p"])
            .with_style("font-family", "OpenDyslexic")
            .with_css("@font-face { font-family: OpenDyslexic; }");

        let css = compile_css(&config);
        assert!(css.ends_with("html.f p { font-family:OpenDyslexic !important; } @font-face { font-family: OpenDyslexic; }"));
        assert!(!css.contains("  "));
    }

    #[test]
    fn test_compile_css_only() {
        let config = ToolConfig::new("raw").with_css(":root { --a11y: 1; }");
        assert_eq!(compile_css(&config), ":root { --a11y: 1; }");
    }

    #[test]
    fn test_compile_empty_config() {
        assert_eq!(compile_css(&ToolConfig::new("nothing")), "");
        assert_eq!(compile_css(&ToolConfig::new("blank").with_css("   ")), "");
    }

    proptest! {
        #[test]
        fn compile_is_deterministic(
            entries in proptest::collection::vec(("[a-z-]{1,12}", "[a-z0-9#()% ]{1,16}"), 0..8),
            children in proptest::collection::vec("[a-z0-9*]{0,6}", 0..4),
            selector in proptest::option::of("html\\.[a-z-]{1,10}"),
        ) {
            let mut config = ToolConfig::new("prop").with_children(children);
            config.selector = selector;
            for (property, value) in entries {
                config = config.with_style(property, value);
            }

            let first = compile_css(&config);
            let second = compile_css(&config.clone());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prefixed_property_emits_five_declarations(value in "[a-z0-9()%]{1,16}") {
            let mut map = BTreeMap::new();
            map.insert("filter".to_string(), value);
            let block = render_declarations(&map);
            prop_assert_eq!(block.matches("!important;").count(), VENDOR_PREFIXES.len());
        }
    }
}
