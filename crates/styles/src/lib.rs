//! Accessibility tool configurations and their CSS compiler.
//!
//! This crate provides:
//! - `ToolConfig`, the declarative description of one accessibility tool
//! - A pure, deterministic CSS compiler with vendor-prefix expansion
//! - Built-in tool and contrast-filter registries
//! - WASM bindings for compiling configs from JavaScript
//!
//! # Example
//!
//! ```
//! use a11y_styles::{compile_css, ToolConfig};
//!
//! let config = ToolConfig::new("monochrome")
//!     .with_selector("html.a11y-monochrome")
//!     .with_style("filter", "grayscale(100%)");
//!
//! let css = compile_css(&config);
//! assert!(css.starts_with("html.a11y-monochrome { -o-filter:grayscale(100%) !important;"));
//! ```

#![warn(missing_docs)]

mod css;
mod filters;
mod registry;
mod tool;
mod tools;

#[cfg(feature = "wasm")]
mod wasm;

pub use css::{
    compile_css, render_declarations, scope_declarations, PREFIXED_PROPERTIES, VENDOR_PREFIXES,
};
pub use filters::{builtin_filters, FILTER_NAMES};
pub use registry::{FilterRegistry, Registry, ToolRegistry};
pub use tool::{marker_class, ToolConfig, DEFAULT_PREFIX};
pub use tools::{builtin_tools, icon_exclusion, ICON_CLASSES, READABLE_FONT};
