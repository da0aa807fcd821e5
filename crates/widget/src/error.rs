//! Error types for the widget crate.

use a11y_core::{Error, ErrorCode};
use thiserror::Error;

/// Result type alias for widget operations.
pub type Result<T> = std::result::Result<T, WidgetError>;

/// Errors that can occur while driving tools against a document.
///
/// Unknown filters, missing resources and empty stylesheets are not errors;
/// they resolve to no-ops.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// No page to inject into
    #[error("No document context available")]
    NoDocumentContext,

    /// Tool id not present in the registry
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Multiplier that is not a positive finite number
    #[error("Invalid font-size multiplier: {0}")]
    InvalidMultiplier(f64),

    /// The host document rejected an operation
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<WidgetError> for Error {
    fn from(err: WidgetError) -> Self {
        match &err {
            WidgetError::NoDocumentContext => Error::no_document_context(),
            WidgetError::UnknownTool(id) => Error::unknown_tool(id),
            WidgetError::InvalidMultiplier(_) => {
                Error::new(ErrorCode::InvalidInput, err.to_string())
                    .with_suggestion("Use a positive multiplier; 1.0 restores the original size")
            }
            WidgetError::Dom(_) => Error::new(ErrorCode::DocumentError, err.to_string()),
        }
    }
}
