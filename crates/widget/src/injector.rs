//! One style resource and one root marker class per tool id.

use crate::document::Document;
use crate::error::Result;
use a11y_styles::{compile_css, marker_class, ToolConfig};
use tracing::debug;

/// Activates and deactivates tool stylesheets.
#[derive(Debug, Clone)]
pub struct StyleInjector {
    prefix: String,
}

impl StyleInjector {
    /// Injector deriving resource ids as `prefix + tool id`
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Prefix in use
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Resource id, and root marker class, for a tool id
    pub fn resource_id(&self, tool_id: &str) -> String {
        marker_class(&self.prefix, tool_id)
    }

    /// Whether the tool's marker class is on the document root
    pub fn is_active<D: Document>(&self, doc: &D, config: &ToolConfig) -> Result<bool> {
        doc.has_root_class(&self.resource_id(&config.id))
    }

    /// Activate or deactivate a tool.
    ///
    /// Enabling replaces any stylesheet previously injected under the same
    /// id; the old resource is gone before the new one is inserted. A config
    /// that compiles to nothing leaves no resource behind. The root marker
    /// class follows `enable` in every case.
    pub fn set_tool_active<D: Document>(
        &self,
        doc: &mut D,
        config: &ToolConfig,
        enable: bool,
    ) -> Result<()> {
        let id = self.resource_id(&config.id);
        let removed = doc.remove_style(&id)?;

        if enable {
            let css = compile_css(config);
            if css.is_empty() {
                debug!(tool = %config.id, "Nothing to inject");
            } else {
                doc.insert_style(&id, &css)?;
                debug!(tool = %config.id, bytes = css.len(), replaced = removed, "Stylesheet injected");
            }
        } else if removed {
            debug!(tool = %config.id, "Stylesheet removed");
        }

        doc.set_root_class(&id, enable)
    }
}

impl Default for StyleInjector {
    fn default() -> Self {
        Self::new(a11y_styles::DEFAULT_PREFIX)
    }
}
