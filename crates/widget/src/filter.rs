//! Contrast filters. At most one is active at a time.

use crate::document::Document;
use crate::error::Result;
use crate::injector::StyleInjector;
use a11y_styles::FilterRegistry;
use tracing::debug;

/// Switch to the named filter, clearing every other one first.
///
/// Every registered filter is deactivated unconditionally, by its own id,
/// before anything is activated. `None`, an empty name or an unregistered
/// name leaves the page with no filter at all.
///
/// Returns whether a filter was activated.
pub fn apply_filter<D: Document>(
    doc: &mut D,
    injector: &StyleInjector,
    filters: &FilterRegistry,
    name: Option<&str>,
) -> Result<bool> {
    for (_, config) in filters.iter() {
        injector.set_tool_active(doc, config, false)?;
    }

    let Some(config) = name.filter(|n| !n.is_empty()).and_then(|n| filters.get(n)) else {
        debug!(filter = ?name, "Filters cleared");
        return Ok(false);
    };

    injector.set_tool_active(doc, config, true)?;
    debug!(filter = ?name, "Filter applied");
    Ok(true)
}

/// Name of the filter whose marker class is on the root, if any.
pub fn active_filter<D: Document>(
    doc: &D,
    injector: &StyleInjector,
    filters: &FilterRegistry,
) -> Result<Option<String>> {
    for (name, config) in filters.iter() {
        if injector.is_active(doc, config)? {
            return Ok(Some(name.to_string()));
        }
    }
    Ok(None)
}
