//! Configuration validation
//!
//! Collects every problem in one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```
//! use a11y_core::validation::Validator;
//!
//! let result = Validator::new()
//!     .required("general.prefix", "a11y-")
//!     .identifier("tools[0].id", "readable-font")
//!     .range("font_size.min_px", 8.0, 1.0, 200.0)
//!     .validate();
//!
//! assert!(result.is_valid());
//! ```

use crate::error::{Error, ErrorCode, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tool ids end up inside class names and element ids.
static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("identifier regex is valid"));

/// Validation error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
    /// Actual value (if applicable)
    pub actual: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get all errors
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Get all warnings
    pub fn warnings(&self) -> &[ValidationError] {
        &self.warnings
    }

    /// Add an error
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: ValidationError) {
        self.warnings.push(warning);
    }

    /// Convert to Result type
    pub fn to_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
            Err(Error::new(
                ErrorCode::ConfigValidationError,
                format!("Validation failed: {}", messages.join("; ")),
            ))
        }
    }
}

/// Fluent validator builder
pub struct Validator {
    result: ValidationResult,
    seen: HashSet<String>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self {
            result: ValidationResult::new(),
            seen: HashSet::new(),
        }
    }

    fn error(mut self, field: &str, message: String, code: &str, actual: Option<String>) -> Self {
        self.result.add_error(ValidationError {
            field: field.to_string(),
            message,
            code: code.to_string(),
            actual,
        });
        self
    }

    /// Validate that a field is not empty
    pub fn required(self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            return self.error(field, "Field is required".to_string(), "REQUIRED", None);
        }
        self
    }

    /// Validate that a value is usable as a class name fragment
    pub fn identifier(self, field: &str, value: &str) -> Self {
        if !IDENTIFIER.is_match(value) {
            return self.error(
                field,
                "Must start with a letter or digit and contain only letters, digits, '-' or '_'"
                    .to_string(),
                "IDENTIFIER",
                Some(value.to_string()),
            );
        }
        self
    }

    /// Validate that a value has not been seen before in this validator
    pub fn unique(mut self, field: &str, value: &str) -> Self {
        if !self.seen.insert(value.to_string()) {
            return self.error(
                field,
                format!("Duplicate value '{}'", value),
                "DUPLICATE",
                Some(value.to_string()),
            );
        }
        self
    }

    /// Validate a numeric range
    pub fn range<T: PartialOrd + std::fmt::Display>(
        self,
        field: &str,
        value: T,
        min: T,
        max: T,
    ) -> Self {
        if value < min || value > max {
            let actual = value.to_string();
            return self.error(
                field,
                format!("Must be between {} and {}", min, max),
                "RANGE",
                Some(actual),
            );
        }
        self
    }

    /// Add a custom validation
    pub fn custom<F>(self, field: &str, f: F) -> Self
    where
        F: FnOnce() -> Option<String>,
    {
        match f() {
            Some(message) => self.error(field, message, "CUSTOM", None),
            None => self,
        }
    }

    /// Add a warning (non-blocking)
    pub fn warn_if(mut self, field: &str, condition: bool, message: &str) -> Self {
        if condition {
            self.result.add_warning(ValidationError {
                field: field.to_string(),
                message: message.to_string(),
                code: "WARNING".to_string(),
                actual: None,
            });
        }
        self
    }

    /// Complete validation and return result
    pub fn validate(self) -> ValidationResult {
        self.result
    }
}
