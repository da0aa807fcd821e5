//! Accessibility tools that restyle the page they run in.
//!
//! This crate provides:
//! - A [`Document`] abstraction over the host page
//! - The style injector: one stylesheet and one root marker class per tool
//! - Mutually exclusive contrast filters
//! - Non-compounding font-size scaling
//! - The readable-font switch
//! - A [`Widget`] facade tying them to configured registries
//! - WASM bindings backed by `web-sys` (feature `wasm`)
//!
//! # Example
//!
//! ```
//! use a11y_core::config::ConfigSchema;
//! use a11y_widget::{Document, MemoryDocument, NewElement, Widget};
//!
//! let mut doc = MemoryDocument::new();
//! let body = doc.body();
//! let para = doc.append(body, NewElement::new("p").font_size(16.0).text("Hello"));
//!
//! let mut widget = Widget::new(doc, &ConfigSchema::default());
//! widget.apply_filter(Some("monochrome")).unwrap();
//! widget.adjust_font_size(2.0).unwrap();
//!
//! let doc = widget.document();
//! assert!(doc.has_root_class("a11y-filter-monochrome").unwrap());
//! assert_eq!(doc.inline_font_size(para), Some(32.0));
//! ```

#![warn(missing_docs)]

mod document;
mod error;
mod filter;
mod font_size;
mod injector;
mod memory;
mod readable_font;
mod widget;

#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
mod web;

pub use a11y_styles::compile_css;
pub use document::Document;
pub use error::{Result, WidgetError};
pub use filter::{active_filter, apply_filter};
pub use font_size::{FontSizeTool, MULTIPLIER_KEY, ORIGINAL_SIZE_KEY};
pub use injector::StyleInjector;
pub use memory::{MemoryDocument, NewElement, NodeId, StyleResource, DEFAULT_ROOT_FONT_SIZE};
pub use readable_font::set_readable_font;
pub use widget::Widget;

#[cfg(feature = "wasm")]
pub use web::WebDocument;
