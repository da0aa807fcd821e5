//! Dyslexia-friendly font switch.

use crate::document::Document;
use crate::error::{Result, WidgetError};
use crate::injector::StyleInjector;
use a11y_styles::{ToolRegistry, READABLE_FONT};

/// Turn the readable font on or off.
///
/// Besides the stylesheet, this toggles the `readable-font` marker class on
/// the root, which other scripts check to see whether the font is active.
pub fn set_readable_font<D: Document>(
    doc: &mut D,
    injector: &StyleInjector,
    tools: &ToolRegistry,
    enable: bool,
) -> Result<()> {
    let config = tools
        .get(READABLE_FONT)
        .ok_or_else(|| WidgetError::UnknownTool(READABLE_FONT.to_string()))?;
    injector.set_tool_active(doc, config, enable)
}
