//! The page, as seen by the tools.
//!
//! Everything the engine does to a page goes through [`Document`]. The
//! browser implementation lives in `web` (feature `wasm`); [`MemoryDocument`]
//! backs tests and non-browser hosts.
//!
//! [`MemoryDocument`]: crate::MemoryDocument

use crate::error::Result;

/// Operations the engine needs from a document.
///
/// All methods are synchronous; implementations are driven from a single
/// UI thread.
pub trait Document {
    /// Handle to an element. Two handles to the same element must refer to
    /// the same element-scoped data.
    type Element;

    /// Append a new style resource named `id` containing `css`.
    ///
    /// Callers remove any previous resource with the same id first.
    fn insert_style(&mut self, id: &str, css: &str) -> Result<()>;

    /// Remove the style resource named `id`. Returns whether one existed.
    fn remove_style(&mut self, id: &str) -> Result<bool>;

    /// Whether a style resource named `id` exists.
    fn has_style(&self, id: &str) -> Result<bool>;

    /// Add or remove a class on the document root.
    fn set_root_class(&mut self, class: &str, present: bool) -> Result<()>;

    /// Whether the document root carries `class`.
    fn has_root_class(&self, class: &str) -> Result<bool>;

    /// Read string data attached to the document root.
    fn root_data(&self, key: &str) -> Result<Option<String>>;

    /// Attach string data to the document root.
    fn set_root_data(&mut self, key: &str, value: &str) -> Result<()>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>>;

    /// Whether `element` or one of its ancestors matches `selector`.
    fn is_within(&self, element: &Self::Element, selector: &str) -> Result<bool>;

    /// Classes on `element`.
    fn class_list(&self, element: &Self::Element) -> Vec<String>;

    /// Whether `element` produces a layout box.
    fn has_layout_box(&self, element: &Self::Element) -> bool;

    /// Whether `element` contains non-whitespace text.
    fn has_visible_text(&self, element: &Self::Element) -> bool;

    /// Computed font size of `element` in pixels.
    fn computed_font_size(&self, element: &Self::Element) -> Result<Option<f64>>;

    /// Set an inline `font-size` in pixels with `!important` priority.
    ///
    /// Returns `false` when the element takes no inline style and was left
    /// untouched.
    fn set_font_size(&mut self, element: &Self::Element, px: f64) -> Result<bool>;

    /// Read string data attached to `element`.
    fn element_data(&self, element: &Self::Element, key: &str) -> Option<String>;

    /// Attach string data to `element`.
    fn set_element_data(&mut self, element: &Self::Element, key: &str, value: &str) -> Result<()>;
}
