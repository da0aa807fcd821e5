//! WASM bindings for driving the widget from the page.
//!
//! The widget binds lazily to the current document with default settings;
//! call `initWidget` first to supply a configuration.

use crate::{WebDocument, Widget, WidgetError};
use a11y_core::config::ConfigSchema;
use a11y_styles::ToolConfig;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static WIDGET: RefCell<Option<Widget<WebDocument>>> = const { RefCell::new(None) };
}

fn to_js(err: WidgetError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn with_widget<T>(
    f: impl FnOnce(&mut Widget<WebDocument>) -> crate::Result<T>,
) -> Result<T, JsValue> {
    WIDGET.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            let document = WebDocument::from_window().map_err(to_js)?;
            *slot = Some(Widget::new(document, &ConfigSchema::default()));
        }
        let widget = slot
            .as_mut()
            .ok_or_else(|| to_js(WidgetError::NoDocumentContext))?;
        f(widget).map_err(to_js)
    })
}

/// Bind the widget to the current document.
///
/// # Arguments
/// * `config_json` - Optional JSON configuration (same shape as the TOML file)
#[wasm_bindgen(js_name = initWidget)]
pub fn init_widget(config_json: Option<String>) -> Result<(), JsValue> {
    let schema: ConfigSchema = match config_json {
        Some(json) => serde_json::from_str(&json)
            .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?,
        None => ConfigSchema::default(),
    };
    schema
        .validate()
        .to_result()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let document = WebDocument::from_window().map_err(to_js)?;
    WIDGET.with(|cell| *cell.borrow_mut() = Some(Widget::new(document, &schema)));
    Ok(())
}

/// Activate or deactivate a tool described by a JSON config.
#[wasm_bindgen(js_name = setToolActive)]
pub fn set_tool_active(config_json: &str, enable: bool) -> Result<(), JsValue> {
    let config: ToolConfig = serde_json::from_str(config_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;
    with_widget(|widget| widget.set_tool_active(&config, enable))
}

/// Activate or deactivate a registered tool by id.
#[wasm_bindgen(js_name = toggleTool)]
pub fn toggle_tool(id: &str, enable: bool) -> Result<(), JsValue> {
    with_widget(|widget| widget.toggle_tool(id, enable))
}

/// Switch contrast filter. `null`, `""` or an unknown name clears filters.
///
/// # Returns
/// true if a filter is now active
#[wasm_bindgen(js_name = applyFilter)]
pub fn apply_filter(name: Option<String>) -> Result<bool, JsValue> {
    with_widget(|widget| widget.apply_filter(name.as_deref()))
}

/// Scale page text by `multiplier`; `1` restores original sizes.
///
/// # Returns
/// Number of elements resized
#[wasm_bindgen(js_name = adjustFontSize)]
pub fn adjust_font_size(multiplier: f64) -> Result<u32, JsValue> {
    with_widget(|widget| widget.adjust_font_size(multiplier))
        .map(|count| u32::try_from(count).unwrap_or(u32::MAX))
}

/// Turn the readable font on or off.
#[wasm_bindgen(js_name = setReadableFont)]
pub fn set_readable_font(enable: bool) -> Result<(), JsValue> {
    with_widget(|widget| widget.set_readable_font(enable))
}

/// Active tool ids as a JSON array.
#[wasm_bindgen(js_name = activeTools)]
pub fn active_tools() -> Result<String, JsValue> {
    let tools = with_widget(|widget| widget.active_tools())?;
    serde_json::to_string(&tools)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Turn every tool off, clear filters and restore font sizes.
#[wasm_bindgen(js_name = resetWidget)]
pub fn reset_widget() -> Result<(), JsValue> {
    with_widget(|widget| widget.reset())
}
