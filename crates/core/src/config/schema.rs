//! Configuration schema definitions

use crate::validation::{ValidationResult, Validator};
use a11y_styles::{
    builtin_filters, builtin_tools, FilterRegistry, ToolConfig, ToolRegistry, DEFAULT_PREFIX,
    ICON_CLASSES,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Prefix and widget location
    #[serde(default)]
    pub general: GeneralConfig,

    /// Font-size adjustment bounds and targets
    #[serde(default)]
    pub font_size: FontSizeConfig,

    /// Extra tools; an entry with a built-in id replaces the built-in
    #[serde(default)]
    pub tools: Vec<ToolConfig>,

    /// Extra filters keyed by filter name
    #[serde(default)]
    pub filters: BTreeMap<String, ToolConfig>,
}

/// General widget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Prefix for injected resource ids and root marker classes
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Selector matching the widget's own UI root
    #[serde(default = "default_widget_selector")]
    pub widget_selector: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            widget_selector: default_widget_selector(),
        }
    }
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_widget_selector() -> String {
    ".a11y-widget".to_string()
}

/// Font-size adjustment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontSizeConfig {
    /// Smallest size a scaled element may get, in pixels
    #[serde(default = "default_min_px")]
    pub min_px: f64,

    /// Largest size a scaled element may get, in pixels
    #[serde(default = "default_max_px")]
    pub max_px: f64,

    /// Text-bearing elements considered for scaling
    #[serde(default = "default_text_selectors")]
    pub text_selectors: Vec<String>,

    /// Elements carrying any of these classes are never scaled
    #[serde(default = "default_icon_classes")]
    pub icon_classes: Vec<String>,
}

impl Default for FontSizeConfig {
    fn default() -> Self {
        Self {
            min_px: default_min_px(),
            max_px: default_max_px(),
            text_selectors: default_text_selectors(),
            icon_classes: default_icon_classes(),
        }
    }
}

fn default_min_px() -> f64 {
    8.0
}

fn default_max_px() -> f64 {
    72.0
}

fn default_text_selectors() -> Vec<String> {
    vec![
        "h1", "h2", "h3", "h4", "h5", "h6", "p", "a", "dl", "dt", "dd", "li", "ol", "ul", "th",
        "td", "span", "blockquote", "label", "button", "strong", "em", "small", "figcaption",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_icon_classes() -> Vec<String> {
    ICON_CLASSES.iter().map(|c| c.to_string()).collect()
}

impl ConfigSchema {
    /// Built-in tools for the configured prefix, with configured tools layered on top
    pub fn tool_registry(&self) -> ToolRegistry {
        let mut registry = builtin_tools(&self.general.prefix);
        registry.extend(ToolRegistry::from_tools(self.tools.iter().cloned()));
        registry
    }

    /// Built-in filters for the configured prefix, with configured filters layered on top
    pub fn filter_registry(&self) -> FilterRegistry {
        let mut registry = builtin_filters(&self.general.prefix);
        registry.extend(
            self.filters
                .iter()
                .map(|(name, config)| (name.clone(), config.clone()))
                .collect(),
        );
        registry
    }

    /// Check the schema for problems
    pub fn validate(&self) -> ValidationResult {
        let builtin = builtin_tools(&self.general.prefix);
        let font = &self.font_size;

        let mut validator = Validator::new()
            .identifier("general.prefix", self.general.prefix.trim_end_matches(['-', '_']))
            .required("general.widget_selector", &self.general.widget_selector)
            .range("font_size.min_px", font.min_px, 1.0, 400.0)
            .range("font_size.max_px", font.max_px, 1.0, 400.0)
            .custom("font_size", || {
                (font.min_px > font.max_px).then(|| {
                    format!("min_px ({}) is larger than max_px ({})", font.min_px, font.max_px)
                })
            })
            .warn_if(
                "font_size.text_selectors",
                font.text_selectors.is_empty(),
                "No text selectors; font-size adjustment will do nothing",
            );

        for (i, tool) in self.tools.iter().enumerate() {
            let field = format!("tools[{}].id", i);
            validator = validator
                .identifier(&field, &tool.id)
                .unique(&field, &tool.id)
                .warn_if(&field, builtin.contains(&tool.id), "Replaces a built-in tool");
        }

        for (name, filter) in &self.filters {
            let field = format!("filters.{}", name);
            validator = validator
                .identifier(&field, name)
                .identifier(&format!("{}.id", field), &filter.id);
        }

        // Filters and tools share one resource-id and marker-class namespace.
        let tools = self.tool_registry();
        let mut filter_ids = HashSet::new();
        for (name, filter) in self.filter_registry().iter() {
            let field = format!("filters.{}.id", name);
            validator = validator
                .custom(&field, || {
                    tools.contains(&filter.id).then(|| {
                        format!("Filter id '{}' is already used by a tool", filter.id)
                    })
                })
                .custom(&field, || {
                    (!filter_ids.insert(filter.id.clone())).then(|| {
                        format!("Filter id '{}' is already used by another filter", filter.id)
                    })
                });
        }

        validator.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let schema = ConfigSchema::default();
        assert!(schema.validate().is_valid());
        assert_eq!(schema.general.prefix, "a11y-");
        assert_eq!(schema.font_size.min_px, 8.0);
        assert_eq!(schema.font_size.max_px, 72.0);
    }

    #[test]
    fn test_registries_layer_overrides() {
        let mut schema = ConfigSchema::default();
        schema
            .tools
            .push(ToolConfig::new("highlight-links").with_style("outline", "4px dashed #000"));
        schema.filters.insert(
            "sepia".to_string(),
            ToolConfig::new("filter-sepia").with_style("filter", "sepia(100%)"),
        );

        let tools = schema.tool_registry();
        let outline = tools.get("highlight-links").unwrap().styles.get("outline");
        assert_eq!(outline.map(String::as_str), Some("4px dashed #000"));

        let filters = schema.filter_registry();
        assert_eq!(filters.len(), 7);
        assert!(filters.contains("sepia"));
    }

    #[test]
    fn test_invalid_bounds() {
        let mut schema = ConfigSchema::default();
        schema.font_size.min_px = 80.0;
        let result = schema.validate();
        assert!(!result.is_valid());
        assert!(result.errors().iter().any(|e| e.field == "font_size"));
    }

    #[test]
    fn test_duplicate_tool_ids() {
        let mut schema = ConfigSchema::default();
        schema.tools.push(ToolConfig::new("zoom"));
        schema.tools.push(ToolConfig::new("zoom"));
        let result = schema.validate();
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].code, "DUPLICATE");
    }

    #[test]
    fn test_filter_id_colliding_with_tool() {
        let mut schema = ConfigSchema::default();
        schema.filters.insert(
            "sepia".to_string(),
            ToolConfig::new("readable-font").with_style("filter", "sepia(100%)"),
        );
        let result = schema.validate();
        assert!(!result.is_valid());
        assert!(result.errors().iter().any(|e| e.field == "filters.sepia.id"));
    }

    #[test]
    fn test_tool_id_colliding_with_builtin_filter() {
        let mut schema = ConfigSchema::default();
        schema.tools.push(ToolConfig::new("filter-monochrome"));
        let result = schema.validate();
        assert!(!result.is_valid());
        assert!(result.errors().iter().any(|e| e.field == "filters.monochrome.id"));
    }

    #[test]
    fn test_filters_sharing_an_id() {
        let mut schema = ConfigSchema::default();
        schema.filters.insert(
            "sepia".to_string(),
            ToolConfig::new("filter-monochrome").with_style("filter", "sepia(100%)"),
        );
        let result = schema.validate();
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].message.contains("another filter"));
    }

    #[test]
    fn test_override_warns() {
        let mut schema = ConfigSchema::default();
        schema.tools.push(ToolConfig::new("line-height"));
        let result = schema.validate();
        assert!(result.is_valid());
        assert_eq!(result.warnings().len(), 1);
    }
}
