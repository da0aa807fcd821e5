//! Proportional text scaling that does not compound across calls.
//!
//! The first time an element is scaled, its computed font size is stored as
//! element data under [`ORIGINAL_SIZE_KEY`]. Every later call scales from that
//! stored value, so applying `2.0` twice still yields twice the original.

use crate::document::Document;
use crate::error::{Result, WidgetError};
use a11y_core::config::FontSizeConfig;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Element data key holding the unscaled font size in pixels.
pub const ORIGINAL_SIZE_KEY: &str = "orgFontSize";

/// Root data key holding the last multiplier applied.
pub const MULTIPLIER_KEY: &str = "fontSizeMultiplier";

/// Scales text-bearing elements by a multiplier.
#[derive(Debug, Clone)]
pub struct FontSizeTool {
    min_px: f64,
    max_px: f64,
    text_selector: String,
    widget_selector: String,
    icon_classes: HashSet<String>,
}

impl FontSizeTool {
    /// Build the tool from configuration
    pub fn new(config: &FontSizeConfig, widget_selector: &str) -> Self {
        let (min_px, max_px) = if config.min_px <= config.max_px {
            (config.min_px, config.max_px)
        } else {
            (config.max_px, config.min_px)
        };

        Self {
            min_px,
            max_px,
            text_selector: config.text_selectors.join(", "),
            widget_selector: widget_selector.to_string(),
            icon_classes: config.icon_classes.iter().cloned().collect(),
        }
    }

    /// Size an element with the given original size ends up at
    pub fn scaled_size(&self, original_px: f64, multiply: f64) -> f64 {
        (original_px * multiply).clamp(self.min_px, self.max_px)
    }

    /// Scale every eligible element to `original * multiply`, clamped.
    ///
    /// `1.0` restores original sizes. Returns the number of elements sized.
    pub fn adjust<D: Document>(&self, doc: &mut D, multiply: f64) -> Result<usize> {
        if !multiply.is_finite() || multiply <= 0.0 {
            return Err(WidgetError::InvalidMultiplier(multiply));
        }

        // Cache every original before resizing anything; descendants that
        // inherit their size would otherwise see an already-scaled parent.
        let mut targets = Vec::new();
        if !self.text_selector.is_empty() {
            for element in doc.query_all(&self.text_selector)? {
                if self.is_excluded(doc, &element)? {
                    continue;
                }
                if let Some(original) = self.original_size(doc, &element)? {
                    targets.push((element, original));
                }
            }
        }

        let mut adjusted = 0;
        for (element, original) in targets {
            let size = self.scaled_size(original, multiply);
            if doc.set_font_size(&element, size)? {
                trace!(original, size, "Element resized");
                adjusted += 1;
            }
        }

        doc.set_root_data(MULTIPLIER_KEY, &multiply.to_string())?;
        debug!(multiply, adjusted, "Font size adjusted");
        Ok(adjusted)
    }

    /// Last multiplier applied to the document, if any
    pub fn current_multiplier<D: Document>(&self, doc: &D) -> Result<Option<f64>> {
        Ok(doc
            .root_data(MULTIPLIER_KEY)?
            .and_then(|value| value.parse().ok()))
    }

    fn is_excluded<D: Document>(&self, doc: &D, element: &D::Element) -> Result<bool> {
        if !doc.has_layout_box(element) || !doc.has_visible_text(element) {
            return Ok(true);
        }
        if doc
            .class_list(element)
            .iter()
            .any(|class| self.icon_classes.contains(class))
        {
            return Ok(true);
        }
        doc.is_within(element, &self.widget_selector)
    }

    fn original_size<D: Document>(&self, doc: &mut D, element: &D::Element) -> Result<Option<f64>> {
        let cached = doc
            .element_data(element, ORIGINAL_SIZE_KEY)
            .and_then(|value| value.parse::<f64>().ok());
        if cached.is_some() {
            return Ok(cached);
        }

        let Some(computed) = doc.computed_font_size(element)? else {
            return Ok(None);
        };
        doc.set_element_data(element, ORIGINAL_SIZE_KEY, &computed.to_string())?;
        Ok(Some(computed))
    }
}

impl Default for FontSizeTool {
    fn default() -> Self {
        Self::new(&FontSizeConfig::default(), ".a11y-widget")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryDocument, NewElement, NodeId};
    use proptest::prelude::*;

    fn page() -> (MemoryDocument, NodeId) {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let para = doc.append(body, NewElement::new("p").font_size(16.0).text("Body copy"));
        (doc, para)
    }

    #[test]
    fn test_scaling_does_not_compound() {
        let (mut doc, para) = page();
        let tool = FontSizeTool::default();

        tool.adjust(&mut doc, 2.0).unwrap();
        assert_eq!(doc.inline_font_size(para), Some(32.0));

        tool.adjust(&mut doc, 2.0).unwrap();
        assert_eq!(doc.inline_font_size(para), Some(32.0));
        assert_eq!(doc.element_data(&para, ORIGINAL_SIZE_KEY).as_deref(), Some("16"));
    }

    #[test]
    fn test_inherited_size_is_cached_before_scaling() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let para = doc.append(body, NewElement::new("p").font_size(16.0).text("Read "));
        let link = doc.append(para, NewElement::new("a").text("more"));
        let tool = FontSizeTool::default();

        assert_eq!(tool.adjust(&mut doc, 2.0).unwrap(), 2);
        assert_eq!(doc.inline_font_size(para), Some(32.0));
        assert_eq!(doc.inline_font_size(link), Some(32.0));
        assert_eq!(doc.element_data(&link, ORIGINAL_SIZE_KEY).as_deref(), Some("16"));

        tool.adjust(&mut doc, 1.0).unwrap();
        assert_eq!(doc.inline_font_size(para), Some(16.0));
        assert_eq!(doc.inline_font_size(link), Some(16.0));
    }

    #[test]
    fn test_restore_with_one() {
        let (mut doc, para) = page();
        let tool = FontSizeTool::default();

        tool.adjust(&mut doc, 1.5).unwrap();
        tool.adjust(&mut doc, 1.0).unwrap();
        assert_eq!(doc.inline_font_size(para), Some(16.0));
    }

    #[test]
    fn test_clamping() {
        let (mut doc, para) = page();
        let tool = FontSizeTool::default();

        tool.adjust(&mut doc, 10.0).unwrap();
        assert_eq!(doc.inline_font_size(para), Some(72.0));

        tool.adjust(&mut doc, 0.1).unwrap();
        assert_eq!(doc.inline_font_size(para), Some(8.0));
    }

    #[test]
    fn test_icons_and_widget_are_left_alone() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let icon = doc.append(
            body,
            NewElement::new("span").class("fa").font_size(16.0).text("\u{f007}"),
        );
        let widget = doc.append(body, NewElement::new("div").class("a11y-widget"));
        let label = doc.append(widget, NewElement::new("label").font_size(14.0).text("Contrast"));
        let para = doc.append(body, NewElement::new("p").font_size(16.0).text("Text"));

        let adjusted = FontSizeTool::default().adjust(&mut doc, 3.0).unwrap();

        assert_eq!(adjusted, 1);
        assert_eq!(doc.inline_font_size(icon), None);
        assert_eq!(doc.inline_font_size(label), None);
        assert_eq!(doc.computed_font_size(&label).unwrap(), Some(14.0));
        assert_eq!(doc.inline_font_size(para), Some(48.0));
    }

    #[test]
    fn test_svg_text_is_not_counted() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let svg = doc.append(body, NewElement::new("svg"));
        let label = doc.append(svg, NewElement::new("a").text("Chart legend"));
        let para = doc.append(body, NewElement::new("p").font_size(16.0).text("Text"));

        let adjusted = FontSizeTool::default().adjust(&mut doc, 2.0).unwrap();

        assert_eq!(adjusted, 1);
        assert_eq!(doc.inline_font_size(label), None);
        assert_eq!(doc.inline_font_size(para), Some(32.0));
    }

    #[test]
    fn test_hidden_and_empty_are_skipped() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let hidden = doc.append(body, NewElement::new("p").hidden().text("Hidden"));
        let empty = doc.append(body, NewElement::new("p").text("  "));

        let adjusted = FontSizeTool::default().adjust(&mut doc, 2.0).unwrap();

        assert_eq!(adjusted, 0);
        assert_eq!(doc.inline_font_size(hidden), None);
        assert_eq!(doc.inline_font_size(empty), None);
        assert_eq!(doc.element_data(&hidden, ORIGINAL_SIZE_KEY), None);
    }

    #[test]
    fn test_multiplier_is_recorded() {
        let (mut doc, _) = page();
        let tool = FontSizeTool::default();

        assert_eq!(tool.current_multiplier(&doc).unwrap(), None);
        tool.adjust(&mut doc, 1.25).unwrap();
        assert_eq!(tool.current_multiplier(&doc).unwrap(), Some(1.25));
    }

    #[test]
    fn test_invalid_multiplier() {
        let (mut doc, para) = page();
        let tool = FontSizeTool::default();

        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                tool.adjust(&mut doc, bad),
                Err(WidgetError::InvalidMultiplier(_))
            ));
        }
        assert_eq!(doc.inline_font_size(para), None);
    }

    #[test]
    fn test_custom_bounds() {
        let config = FontSizeConfig {
            min_px: 12.0,
            max_px: 24.0,
            ..FontSizeConfig::default()
        };
        let tool = FontSizeTool::new(&config, ".widget");
        assert_eq!(tool.scaled_size(16.0, 3.0), 24.0);
        assert_eq!(tool.scaled_size(16.0, 0.5), 12.0);
    }

    proptest! {
        #[test]
        fn scaled_size_stays_in_bounds(original in 1.0f64..200.0, multiply in 0.01f64..20.0) {
            let size = FontSizeTool::default().scaled_size(original, multiply);
            prop_assert!((8.0..=72.0).contains(&size));
        }

        #[test]
        fn repeated_adjustments_match_a_single_one(steps in proptest::collection::vec(0.1f64..5.0, 1..6)) {
            let (mut doc, para) = page();
            let tool = FontSizeTool::default();
            for step in &steps {
                tool.adjust(&mut doc, *step).unwrap();
            }
            let last = *steps.last().unwrap();
            prop_assert_eq!(doc.inline_font_size(para), Some(tool.scaled_size(16.0, last)));
        }
    }
}
