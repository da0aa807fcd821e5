//! The widget facade: one document, its registries, and every tool.

use crate::document::Document;
use crate::error::{Result, WidgetError};
use crate::filter;
use crate::font_size::FontSizeTool;
use crate::injector::StyleInjector;
use crate::readable_font;
use a11y_core::config::ConfigSchema;
use a11y_styles::{compile_css, FilterRegistry, ToolConfig, ToolRegistry};
use tracing::info;

/// Accessibility tools bound to a document.
#[derive(Debug)]
pub struct Widget<D: Document> {
    document: D,
    injector: StyleInjector,
    tools: ToolRegistry,
    filters: FilterRegistry,
    font_size: FontSizeTool,
}

impl<D: Document> Widget<D> {
    /// Build a widget from a validated configuration
    pub fn new(document: D, schema: &ConfigSchema) -> Self {
        Self::with_parts(
            document,
            StyleInjector::new(schema.general.prefix.clone()),
            schema.tool_registry(),
            schema.filter_registry(),
            FontSizeTool::new(&schema.font_size, &schema.general.widget_selector),
        )
    }

    /// Build a widget from explicit parts
    pub fn with_parts(
        document: D,
        injector: StyleInjector,
        tools: ToolRegistry,
        filters: FilterRegistry,
        font_size: FontSizeTool,
    ) -> Self {
        info!(
            prefix = injector.prefix(),
            tools = tools.len(),
            filters = filters.len(),
            "Widget initialized"
        );
        Self {
            document,
            injector,
            tools,
            filters,
            font_size,
        }
    }

    /// The document the tools act on
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Mutable access to the document
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// Give the document back, dropping the widget
    pub fn into_document(self) -> D {
        self.document
    }

    /// Registered tools
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Registered contrast filters
    pub fn filters(&self) -> &FilterRegistry {
        &self.filters
    }

    /// Compiled stylesheet of a registered tool or filter
    pub fn stylesheet(&self, name: &str) -> Option<String> {
        self.tools
            .get(name)
            .or_else(|| self.filters.get(name))
            .map(compile_css)
    }

    /// Activate or deactivate an arbitrary config
    pub fn set_tool_active(&mut self, config: &ToolConfig, enable: bool) -> Result<()> {
        self.injector
            .set_tool_active(&mut self.document, config, enable)
    }

    /// Activate or deactivate a registered tool by id
    pub fn toggle_tool(&mut self, id: &str, enable: bool) -> Result<()> {
        let config = self
            .tools
            .get(id)
            .ok_or_else(|| WidgetError::UnknownTool(id.to_string()))?;
        self.injector
            .set_tool_active(&mut self.document, config, enable)
    }

    /// Registered tool ids currently active
    pub fn active_tools(&self) -> Result<Vec<String>> {
        let mut active = Vec::new();
        for (id, config) in self.tools.iter() {
            if self.injector.is_active(&self.document, config)? {
                active.push(id.to_string());
            }
        }
        Ok(active)
    }

    /// Switch contrast filter; `None` or an unknown name clears filters
    pub fn apply_filter(&mut self, name: Option<&str>) -> Result<bool> {
        filter::apply_filter(&mut self.document, &self.injector, &self.filters, name)
    }

    /// Currently active filter
    pub fn active_filter(&self) -> Result<Option<String>> {
        filter::active_filter(&self.document, &self.injector, &self.filters)
    }

    /// Scale page text; `1.0` restores original sizes
    pub fn adjust_font_size(&mut self, multiply: f64) -> Result<usize> {
        self.font_size.adjust(&mut self.document, multiply)
    }

    /// Last font-size multiplier applied
    pub fn font_size_multiplier(&self) -> Result<Option<f64>> {
        self.font_size.current_multiplier(&self.document)
    }

    /// Turn the readable font on or off
    pub fn set_readable_font(&mut self, enable: bool) -> Result<()> {
        readable_font::set_readable_font(&mut self.document, &self.injector, &self.tools, enable)
    }

    /// Turn every tool off, clear filters, and restore font sizes
    pub fn reset(&mut self) -> Result<()> {
        for (_, config) in self.tools.iter() {
            self.injector
                .set_tool_active(&mut self.document, config, false)?;
        }
        self.apply_filter(None)?;
        if self.font_size_multiplier()?.is_some() {
            self.adjust_font_size(1.0)?;
        }
        info!("Widget reset");
        Ok(())
    }
}
