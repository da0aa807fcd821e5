//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::Path;

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    /// Parsed settings
    pub schema: ConfigSchema,
    /// File the settings came from; `None` when running on defaults
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path, a standard location, or defaults
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config = Self::load_unchecked(path)?;
        let result = config.schema.validate();

        for warning in result.warnings() {
            tracing::warn!(field = %warning.field, "{}", warning.message);
        }
        result
            .to_result()
            .context(config.path.clone().unwrap_or_else(|| "<defaults>".to_string()))?;

        Ok(config)
    }

    /// Locate and parse configuration without validating it.
    ///
    /// Missing or unparsable files are still errors.
    pub fn load_unchecked(path: Option<&str>) -> Result<Self> {
        let config_path = path.map(String::from).or_else(find_config_file);

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let schema: ConfigSchema = toml::from_str(content)?;
        schema.validate().to_result()?;
        Ok(Self { schema, path: None })
    }

    /// Load with defaults only (no file)
    pub fn default() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [
        ".a11y-widget.toml",
        "a11y-widget.toml",
        ".config/a11y-widget.toml",
    ];

    for candidate in candidates {
        if Path::new(candidate).exists() {
            return Some(candidate.to_string());
        }
    }

    None
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    if !Path::new(path).exists() {
        return Err(Error::config_not_found(path));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read config file {}: {}", path, e)).with_source(e))?;

    toml::from_str(&content)
        .map_err(|e| Error::from(e).with_context(format!("Failed to parse config file {}", path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::Write;

    const SAMPLE: &str = r##"
[general]
prefix = "acc-"

[font_size]
max_px = 64.0

[[tools]]
id = "underline-links"
selector = "html.acc-underline-links"
children_selector = ["a"]
styles = { text-decoration = "underline" }

[filters.sepia]
id = "filter-sepia"
selector = "html.acc-filter-sepia"
styles = { filter = "sepia(100%)" }
"##;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.font_size.max_px, 72.0);
    }

    #[test]
    fn test_from_toml_str() {
        let config = Config::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.schema.general.prefix, "acc-");
        assert_eq!(config.schema.font_size.max_px, 64.0);
        assert_eq!(config.schema.font_size.min_px, 8.0);

        let tools = config.schema.tool_registry();
        assert!(tools.contains("underline-links"));
        assert_eq!(
            tools.get("readable-font").unwrap().selector.as_deref(),
            Some("html.acc-readable-font")
        );
        assert!(config.schema.filter_registry().contains("sepia"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let path = file.path().to_str().unwrap();
        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.path.as_deref(), Some(path));
        assert_eq!(config.schema.tools.len(), 1);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Config::load(Some("/definitely/not/here.toml")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_load_unchecked_keeps_invalid_schema() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[font_size]\nmin_px = 50.0\nmax_px = 10.0\n").unwrap();
        let path = file.path().to_str().unwrap();

        let err = Config::load(Some(path)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigValidationError);

        let config = Config::load_unchecked(Some(path)).unwrap();
        assert_eq!(config.schema.font_size.min_px, 50.0);
        assert!(!config.schema.validate().is_valid());
    }

    #[test]
    fn test_parse_error() {
        let err = Config::from_toml_str("[font_size]\nmin_px = \"small\"").unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = Config::from_toml_str("[font_size]\nmin_px = 90.0").unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigValidationError);
    }
}
