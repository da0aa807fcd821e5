//! In-memory document.
//!
//! A small element tree with enough behaviour for the tools: style resources,
//! root classes, inherited font sizes, element data, and a selector matcher
//! covering `*`, `tag`, `.class`, `#id`, compound selectors, descendant
//! combinators and comma lists. As in a browser, SVG content takes no inline
//! font size.

use crate::document::Document;
use crate::error::{Result, WidgetError};
use std::collections::HashMap;

/// Font size of the root element when nothing else is set.
pub const DEFAULT_ROOT_FONT_SIZE: f64 = 16.0;

/// Handle to an element in a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// An injected stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleResource {
    /// Resource id
    pub id: String,
    /// Stylesheet text
    pub css: String,
}

/// Description of an element to append.
#[derive(Debug, Clone)]
pub struct NewElement {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    font_size: Option<f64>,
    rendered: bool,
}

impl NewElement {
    /// Element with the given tag name
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            text: String::new(),
            font_size: None,
            rendered: true,
        }
    }

    /// Set the element id
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Add a class
    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Set the element's own text
    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Give the element its own font size, as if from a stylesheet
    pub fn font_size(mut self, px: f64) -> Self {
        self.font_size = Some(px);
        self
    }

    /// Render without a layout box (`display: none`)
    pub fn hidden(mut self) -> Self {
        self.rendered = false;
        self
    }
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    text: String,
    font_size: Option<f64>,
    inline_font_size: Option<f64>,
    rendered: bool,
    data: HashMap<String, String>,
}

impl Node {
    fn from_spec(spec: NewElement, parent: Option<NodeId>) -> Self {
        Self {
            tag: spec.tag,
            id: spec.id,
            classes: spec.classes,
            parent,
            children: Vec::new(),
            text: spec.text,
            font_size: spec.font_size,
            inline_font_size: None,
            rendered: spec.rendered,
            data: HashMap::new(),
        }
    }
}

/// In-memory document rooted at an `html` element with a `body` child.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    styles: Vec<StyleResource>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Create a document containing `html` and `body`
    pub fn new() -> Self {
        let root = Node::from_spec(NewElement::new("html").font_size(DEFAULT_ROOT_FONT_SIZE), None);
        let mut doc = Self {
            nodes: vec![root],
            styles: Vec::new(),
        };
        doc.append(doc.root(), NewElement::new("body"));
        doc
    }

    /// The `html` element
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// The `body` element
    pub fn body(&self) -> NodeId {
        NodeId(1)
    }

    /// Append a new element under `parent`
    pub fn append(&mut self, parent: NodeId, spec: NewElement) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::from_spec(spec, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Injected style resources in insertion order
    pub fn styles(&self) -> &[StyleResource] {
        &self.styles
    }

    /// Stylesheet text of resource `id`
    pub fn style(&self, id: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.css.as_str())
    }

    /// Classes on the root element
    pub fn root_classes(&self) -> &[String] {
        &self.nodes[0].classes
    }

    /// Inline font size set on `node`, if any
    pub fn inline_font_size(&self, node: NodeId) -> Option<f64> {
        self.nodes[node.0].inline_font_size
    }

    fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| WidgetError::Dom(format!("no element with handle {}", id.0)))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| WidgetError::Dom(format!("no element with handle {}", id.0)))
    }

    fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.nodes[id.0].parent, move |p| self.nodes[p.0].parent)
    }

    fn text_content(&self, id: NodeId) -> String {
        let node = &self.nodes[id.0];
        let mut text = node.text.clone();
        for child in &node.children {
            text.push_str(&self.text_content(*child));
        }
        text
    }

    fn matches(&self, id: NodeId, selector: &str) -> bool {
        selector
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .any(|complex| self.matches_complex(id, complex))
    }

    fn matches_complex(&self, id: NodeId, complex: &str) -> bool {
        let mut parts: Vec<Compound> = complex.split_whitespace().map(Compound::parse).collect();
        let Some(last) = parts.pop() else {
            return false;
        };
        if !last.matches(&self.nodes[id.0]) {
            return false;
        }

        // Remaining compounds must match ancestors, right to left.
        let mut ancestors = self.ancestors(id);
        while let Some(compound) = parts.pop() {
            if !ancestors.any(|a| compound.matches(&self.nodes[a.0])) {
                return false;
            }
        }
        true
    }

    /// SVG content has no HTML inline style to write to.
    fn in_svg(&self, id: NodeId) -> Result<bool> {
        Ok(self.node(id)?.tag == "svg" || self.ancestors(id).any(|a| self.nodes[a.0].tag == "svg"))
    }

    fn computed(&self, id: NodeId) -> f64 {
        let node = &self.nodes[id.0];
        node.inline_font_size
            .or(node.font_size)
            .or_else(|| node.parent.map(|p| self.computed(p)))
            .unwrap_or(DEFAULT_ROOT_FONT_SIZE)
    }
}

#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(input: &str) -> Self {
        let mut compound = Compound::default();

        let end = input.find(['.', '#']).unwrap_or(input.len());
        let tag = &input[..end];
        if !tag.is_empty() && tag != "*" {
            compound.tag = Some(tag.to_ascii_lowercase());
        }

        let mut rest = &input[end..];
        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['.', '#']).unwrap_or(body.len());
            let name = body[..end].to_string();
            if marker == '.' {
                compound.classes.push(name);
            } else {
                compound.id = Some(name);
            }
            rest = &body[end..];
        }

        compound
    }

    fn matches(&self, node: &Node) -> bool {
        self.tag.as_ref().is_none_or(|t| *t == node.tag)
            && self.id.as_ref().is_none_or(|id| node.id.as_ref() == Some(id))
            && self.classes.iter().all(|c| node.classes.contains(c))
    }
}

impl Document for MemoryDocument {
    type Element = NodeId;

    fn insert_style(&mut self, id: &str, css: &str) -> Result<()> {
        self.styles.push(StyleResource {
            id: id.to_string(),
            css: css.to_string(),
        });
        Ok(())
    }

    fn remove_style(&mut self, id: &str) -> Result<bool> {
        let before = self.styles.len();
        self.styles.retain(|s| s.id != id);
        Ok(self.styles.len() != before)
    }

    fn has_style(&self, id: &str) -> Result<bool> {
        Ok(self.styles.iter().any(|s| s.id == id))
    }

    fn set_root_class(&mut self, class: &str, present: bool) -> Result<()> {
        let classes = &mut self.node_mut(NodeId(0))?.classes;
        let existing = classes.iter().position(|c| c == class);
        match (present, existing) {
            (true, None) => classes.push(class.to_string()),
            (false, Some(index)) => {
                classes.remove(index);
            }
            _ => {}
        }
        Ok(())
    }

    fn has_root_class(&self, class: &str) -> Result<bool> {
        Ok(self.node(NodeId(0))?.classes.iter().any(|c| c == class))
    }

    fn root_data(&self, key: &str) -> Result<Option<String>> {
        Ok(self.node(NodeId(0))?.data.get(key).cloned())
    }

    fn set_root_data(&mut self, key: &str, value: &str) -> Result<()> {
        self.set_element_data(&NodeId(0), key, value)
    }

    fn query_all(&self, selector: &str) -> Result<Vec<NodeId>> {
        Ok((0..self.nodes.len())
            .map(NodeId)
            .filter(|id| self.matches(*id, selector))
            .collect())
    }

    fn is_within(&self, element: &NodeId, selector: &str) -> Result<bool> {
        self.node(*element)?;
        Ok(self.matches(*element, selector)
            || self.ancestors(*element).any(|a| self.matches(a, selector)))
    }

    fn class_list(&self, element: &NodeId) -> Vec<String> {
        self.nodes
            .get(element.0)
            .map(|n| n.classes.clone())
            .unwrap_or_default()
    }

    fn has_layout_box(&self, element: &NodeId) -> bool {
        self.nodes.get(element.0).is_some_and(|n| n.rendered)
            && self.ancestors(*element).all(|a| self.nodes[a.0].rendered)
    }

    fn has_visible_text(&self, element: &NodeId) -> bool {
        element.0 < self.nodes.len() && !self.text_content(*element).trim().is_empty()
    }

    fn computed_font_size(&self, element: &NodeId) -> Result<Option<f64>> {
        self.node(*element)?;
        Ok(Some(self.computed(*element)))
    }

    fn set_font_size(&mut self, element: &NodeId, px: f64) -> Result<bool> {
        if self.in_svg(*element)? {
            return Ok(false);
        }
        self.node_mut(*element)?.inline_font_size = Some(px);
        Ok(true)
    }

    fn element_data(&self, element: &NodeId, key: &str) -> Option<String> {
        self.nodes.get(element.0)?.data.get(key).cloned()
    }

    fn set_element_data(&mut self, element: &NodeId, key: &str, value: &str) -> Result<()> {
        self.node_mut(*element)?
            .data
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (MemoryDocument, NodeId, NodeId, NodeId) {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let main = doc.append(body, NewElement::new("main").id("content"));
        let para = doc.append(main, NewElement::new("p").class("lead").text("Hello"));
        let span = doc.append(para, NewElement::new("span").font_size(12.0).text("small"));
        (doc, main, para, span)
    }

    #[test]
    fn test_selector_matching() {
        let (doc, main, para, span) = sample();

        assert_eq!(doc.query_all("p").unwrap(), vec![para]);
        assert_eq!(doc.query_all("p.lead").unwrap(), vec![para]);
        assert_eq!(doc.query_all(".lead, span").unwrap(), vec![para, span]);
        assert_eq!(doc.query_all("#content").unwrap(), vec![main]);
        assert_eq!(doc.query_all("main span").unwrap(), vec![span]);
        assert!(doc.query_all("p.other").unwrap().is_empty());
        assert!(doc.query_all("aside span").unwrap().is_empty());
        assert_eq!(doc.query_all("*").unwrap().len(), 5);
    }

    #[test]
    fn test_is_within() {
        let (doc, main, _, span) = sample();
        assert!(doc.is_within(&span, "#content").unwrap());
        assert!(doc.is_within(&main, "main").unwrap());
        assert!(!doc.is_within(&main, ".lead").unwrap());
    }

    #[test]
    fn test_font_size_inheritance() {
        let (mut doc, main, para, span) = sample();
        assert_eq!(doc.computed_font_size(&main).unwrap(), Some(16.0));
        assert_eq!(doc.computed_font_size(&span).unwrap(), Some(12.0));

        doc.set_font_size(&para, 20.0).unwrap();
        assert_eq!(doc.computed_font_size(&para).unwrap(), Some(20.0));
        assert_eq!(doc.inline_font_size(para), Some(20.0));
        assert_eq!(doc.computed_font_size(&span).unwrap(), Some(12.0));
    }

    #[test]
    fn test_visibility_and_text() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let hidden = doc.append(body, NewElement::new("div").hidden());
        let inner = doc.append(hidden, NewElement::new("p").text("secret"));
        let empty = doc.append(body, NewElement::new("p").text("   "));

        assert!(!doc.has_layout_box(&hidden));
        assert!(!doc.has_layout_box(&inner));
        assert!(doc.has_visible_text(&hidden));
        assert!(!doc.has_visible_text(&empty));
    }

    #[test]
    fn test_style_resources() {
        let mut doc = MemoryDocument::new();
        doc.insert_style("a", "x").unwrap();
        assert!(doc.has_style("a").unwrap());
        assert!(doc.remove_style("a").unwrap());
        assert!(!doc.remove_style("a").unwrap());
        assert!(doc.styles().is_empty());
    }

    #[test]
    fn test_root_class_added_once() {
        let mut doc = MemoryDocument::new();
        doc.set_root_class("a11y-x", true).unwrap();
        doc.set_root_class("a11y-x", true).unwrap();
        assert_eq!(doc.root_classes(), ["a11y-x".to_string()]);

        doc.set_root_class("a11y-x", false).unwrap();
        doc.set_root_class("a11y-x", false).unwrap();
        assert!(doc.root_classes().is_empty());
    }

    #[test]
    fn test_unknown_handle() {
        let doc = MemoryDocument::new();
        assert!(matches!(
            doc.computed_font_size(&NodeId(99)),
            Err(WidgetError::Dom(_))
        ));
    }
}
