//! WASM bindings for the CSS compiler.

use crate::{builtin_filters, builtin_tools, ToolConfig};
use wasm_bindgen::prelude::*;

/// Compile a tool config given as JSON into CSS text.
///
/// Accepts both `children_selector` and the JavaScript-style
/// `childrenSelector` field name.
///
/// # Returns
/// The compiled CSS, empty when the config has nothing to inject
#[wasm_bindgen(js_name = compileCss)]
pub fn compile_css(config_json: &str) -> Result<String, JsValue> {
    let config: ToolConfig = serde_json::from_str(config_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    Ok(crate::compile_css(&config))
}

/// Built-in tool registry for `prefix` as JSON.
#[wasm_bindgen(js_name = builtinToolsJson)]
pub fn builtin_tools_json(prefix: &str) -> Result<String, JsValue> {
    serde_json::to_string(&builtin_tools(prefix))
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Built-in filter registry for `prefix` as JSON.
#[wasm_bindgen(js_name = builtinFiltersJson)]
pub fn builtin_filters_json(prefix: &str) -> Result<String, JsValue> {
    serde_json::to_string(&builtin_filters(prefix))
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}
