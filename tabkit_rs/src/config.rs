//! Tabs document loading.
//!
//! Reads a [`TabsDocument`] from TOML and applies command-line overrides.
//! Unlike the widget itself, which degrades silently, loading reports
//! suspicious input (repeated values, a default that names no tab) as
//! warnings so authors notice.

use std::path::Path;

use anyhow::{Context, Result};
use tabkit_core::{ActivationMode, TabId};
use tabkit_leptos::types::TabsDocument;
use tracing::{debug, warn};

/// Overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub mode: Option<ActivationMode>,
    pub active: Option<TabId>,
}

/// Parse a document from TOML text.
pub fn parse_document(content: &str) -> Result<TabsDocument> {
    let document: TabsDocument = toml::from_str(content).context("invalid tabs document")?;
    report_issues(&document);
    Ok(document)
}

/// Load a document from a TOML file.
pub fn load_document(path: &Path) -> Result<TabsDocument> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let document =
        parse_document(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    debug!(
        path = %path.display(),
        tabs = document.tabs.len(),
        mode = %document.activation_mode,
        "loaded tabs document"
    );
    Ok(document)
}

/// Apply overrides, returning the adjusted document.
pub fn apply_overrides(mut document: TabsDocument, overrides: &Overrides) -> TabsDocument {
    if let Some(mode) = overrides.mode {
        document.activation_mode = mode;
    }
    if let Some(active) = &overrides.active {
        if !document.contains(active) {
            warn!(tab = %active, "--active names no tab; nothing will be selected");
        }
        document.default_value = Some(active.clone());
    }
    document
}

fn report_issues(document: &TabsDocument) {
    for value in document.duplicate_values() {
        warn!(tab = %value, "duplicate tab value; later occurrences are dropped");
    }
    if let Some(default) = &document.default_value {
        if !document.contains(default) {
            warn!(tab = %default, "default_value names no tab; nothing will be selected");
        }
    }
    if document.tabs.is_empty() {
        warn!("tabs document has no [[tab]] entries");
    }
}
