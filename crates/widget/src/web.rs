//! Browser document backed by `web-sys`.

use crate::document::Document;
use crate::error::{Result, WidgetError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

fn js_err(err: JsValue) -> WidgetError {
    WidgetError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

fn is_widget_style(tag_name: &str, element_id: &str, id: &str) -> bool {
    tag_name.eq_ignore_ascii_case("style") && element_id == id
}

fn parse_px(value: &str) -> Option<f64> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}

/// The page the script runs in.
#[derive(Debug, Clone)]
pub struct WebDocument {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl WebDocument {
    /// Bind to the current window's document
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window().ok_or(WidgetError::NoDocumentContext)?;
        let document = window.document().ok_or(WidgetError::NoDocumentContext)?;
        Ok(Self { window, document })
    }

    /// The widget's `<style>` element with this id; other elements sharing
    /// the id belong to the page.
    fn style_element(&self, id: &str) -> Option<Element> {
        let styles = self.document.query_selector_all("style").ok()?;
        (0..styles.length())
            .filter_map(|i| styles.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .find(|element| is_widget_style(&element.tag_name(), &element.id(), id))
    }

    fn root(&self) -> Result<HtmlElement> {
        self.document
            .document_element()
            .ok_or(WidgetError::NoDocumentContext)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| WidgetError::Dom("document root is not an HTML element".to_string()))
    }
}

impl Document for WebDocument {
    type Element = Element;

    fn insert_style(&mut self, id: &str, css: &str) -> Result<()> {
        let style = self.document.create_element("style").map_err(js_err)?;
        style.set_id(id);
        style.set_text_content(Some(css));

        let appended = match self.document.head() {
            Some(head) => head.append_child(&style),
            None => self.root()?.append_child(&style),
        };
        appended.map_err(js_err)?;
        Ok(())
    }

    fn remove_style(&mut self, id: &str) -> Result<bool> {
        match self.style_element(id) {
            Some(existing) => {
                existing.remove();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn has_style(&self, id: &str) -> Result<bool> {
        Ok(self.style_element(id).is_some())
    }

    fn set_root_class(&mut self, class: &str, present: bool) -> Result<()> {
        let classes = self.root()?.class_list();
        let toggled = if present {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        toggled.map_err(js_err)
    }

    fn has_root_class(&self, class: &str) -> Result<bool> {
        Ok(self.root()?.class_list().contains(class))
    }

    fn root_data(&self, key: &str) -> Result<Option<String>> {
        Ok(self.root()?.dataset().get(key))
    }

    fn set_root_data(&mut self, key: &str, value: &str) -> Result<()> {
        self.root()?.dataset().set(key, value).map_err(js_err)
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>> {
        let nodes = self.document.query_selector_all(selector).map_err(js_err)?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn is_within(&self, element: &Element, selector: &str) -> Result<bool> {
        Ok(element.closest(selector).map_err(js_err)?.is_some())
    }

    fn class_list(&self, element: &Element) -> Vec<String> {
        let classes = element.class_list();
        (0..classes.length()).filter_map(|i| classes.item(i)).collect()
    }

    fn has_layout_box(&self, element: &Element) -> bool {
        element.get_client_rects().length() > 0
    }

    fn has_visible_text(&self, element: &Element) -> bool {
        element
            .text_content()
            .is_some_and(|text| !text.trim().is_empty())
    }

    fn computed_font_size(&self, element: &Element) -> Result<Option<f64>> {
        let style = self.window.get_computed_style(element).map_err(js_err)?;
        Ok(style
            .and_then(|s| s.get_property_value("font-size").ok())
            .and_then(|value| parse_px(&value)))
    }

    fn set_font_size(&mut self, element: &Element, px: f64) -> Result<bool> {
        let Some(html) = element.dyn_ref::<HtmlElement>() else {
            return Ok(false);
        };
        html.style()
            .set_property_with_priority("font-size", &format!("{}px", px), "important")
            .map_err(js_err)?;
        Ok(true)
    }

    fn element_data(&self, element: &Element, key: &str) -> Option<String> {
        element.dyn_ref::<HtmlElement>()?.dataset().get(key)
    }

    fn set_element_data(&mut self, element: &Element, key: &str, value: &str) -> Result<()> {
        match element.dyn_ref::<HtmlElement>() {
            Some(html) => html.dataset().set(key, value).map_err(js_err),
            None => Ok(()),
        }
    }
}
