//! releve-templates: institution templates and the selection registry.

use anyhow::{Result, bail};
use releve_core::Template;

pub mod sg_pro;

pub use sg_pro::SgPro;

/// All supported templates, in registration order.
///
/// Construction compiles every template's boundary patterns, so a bad
/// pattern fails here instead of mid-parse.
pub fn registry() -> Result<Vec<Box<dyn Template>>> {
    Ok(vec![Box::new(SgPro::new()?)])
}

/// Look up a template by its configuration id.
pub fn by_id(id: &str) -> Result<Box<dyn Template>> {
    for template in registry()? {
        if template.configuration().id == id {
            return Ok(template);
        }
    }
    bail!(
        "unknown template '{id}' (available: {})",
        available_ids()?.join(", ")
    )
}

/// Ids of every registered template.
pub fn available_ids() -> Result<Vec<String>> {
    Ok(registry()?
        .iter()
        .map(|t| t.configuration().id.clone())
        .collect())
}
