//! The declarative description of one accessibility tool.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Prefix used to derive resource ids and root marker classes.
pub const DEFAULT_PREFIX: &str = "a11y-";

/// Name shared by a tool's injected style resource and its root marker class.
///
/// ```
/// assert_eq!(a11y_styles::marker_class("a11y-", "readable-font"), "a11y-readable-font");
/// ```
pub fn marker_class(prefix: &str, id: &str) -> String {
    format!("{prefix}{id}")
}

/// Activation configuration for a single tool.
///
/// Configs are immutable once registered. Whether a tool is enabled is
/// passed at injection time and never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Stable identifier
    pub id: String,

    /// Selector the declarations are scoped to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    /// Descendant selectors, each producing one rule under `selector`
    #[serde(default, alias = "childrenSelector", skip_serializing_if = "Vec::is_empty")]
    pub children_selector: Vec<String>,

    /// Property to value map; sorted so output is stable
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: BTreeMap<String, String>,

    /// Literal CSS appended after the generated rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
}

impl ToolConfig {
    /// Create an empty config with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the scoping selector
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Scope to the tool's own marker class on the document root
    pub fn scoped_to_marker(self, prefix: &str) -> Self {
        let selector = format!("html.{}", marker_class(prefix, &self.id));
        self.with_selector(selector)
    }

    /// Set the descendant selectors
    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children_selector = children.into_iter().map(Into::into).collect();
        self
    }

    /// Add one declaration
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }

    /// Set the raw CSS suffix
    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }

    /// Name of the injected resource and root marker class
    pub fn marker(&self, prefix: &str) -> String {
        marker_class(prefix, &self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ToolConfig::new("highlight-links")
            .scoped_to_marker(DEFAULT_PREFIX)
            .with_children(["a[href]"])
            .with_style("outline", "2px solid #ff0000");

        assert_eq!(config.selector.as_deref(), Some("html.a11y-highlight-links"));
        assert_eq!(config.children_selector, vec!["a[href]".to_string()]);
        assert_eq!(config.styles.len(), 1);
        assert!(config.css.is_none());
    }

    #[test]
    fn test_deserialize_js_field_name() {
        let json = r##"{"id":"x","selector":"html.x","childrenSelector":["p"],"styles":{"color":"#000"}}"##;
        let config: ToolConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.children_selector, vec!["p".to_string()]);
        assert_eq!(config.styles.get("color").map(String::as_str), Some("#000"));
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: ToolConfig = serde_json::from_str(r#"{"id":"bare"}"#).unwrap();
        assert_eq!(config, ToolConfig::new("bare"));
    }
}
