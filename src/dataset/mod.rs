//! Dataset provider: produces the entry records a `Glossary` indexes.
//!
//! The canonical glossary is a YAML list maintained upstream. It is fetched,
//! converted to a JSON list of flat records, and that JSON is compiled into
//! the crate as the default dataset.

mod fetch;
mod validator;

pub use fetch::{fetch_yaml, DEFAULT_SOURCE_URL};
pub use validator::{validate, ValidationReport};

use crate::glossary::Entry;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{error, info, warn};

/// Default JSON glossary, converted from the upstream YAML.
const BUNDLED_JSON: &str = include_str!("../../data/glossary.json");

/// Bundled dataset (parsed lazily, once per process)
static BUNDLED: OnceLock<Vec<Entry>> = OnceLock::new();

/// Get the bundled default dataset.
///
/// A bundle that fails to parse yields an empty dataset (and an error log),
/// so constructing a `Glossary` from it still succeeds.
pub fn bundled() -> &'static [Entry] {
    BUNDLED.get_or_init(|| match parse_json(BUNDLED_JSON) {
        Ok(entries) => entries,
        Err(e) => {
            error!("Bundled glossary is unreadable: {:#}", e);
            Vec::new()
        }
    })
}

/// Convert loosely-typed records, skipping those without a usable slug.
pub fn from_records(records: &[Value]) -> Vec<Entry> {
    let entries: Vec<Entry> = records.iter().filter_map(Entry::from_value).collect();

    let skipped = records.len() - entries.len();
    if skipped > 0 {
        warn!("Skipped {} glossary records without a string slug", skipped);
    }

    entries
}

/// Parse a JSON list of glossary records.
pub fn parse_json(text: &str) -> Result<Vec<Entry>> {
    let records: Vec<Value> =
        serde_json::from_str(text).context("Glossary JSON is not a list of records")?;
    Ok(from_records(&records))
}

/// Parse a YAML list of glossary records (the upstream format).
pub fn parse_yaml(text: &str) -> Result<Vec<Entry>> {
    let records: Vec<Value> =
        serde_yaml::from_str(text).context("Glossary YAML is not a list of records")?;
    Ok(from_records(&records))
}

/// Load a glossary file; `.yml`/`.yaml` is read as YAML, anything else as JSON.
pub fn load_file(path: &Path) -> Result<Vec<Entry>> {
    let text = fs::read_to_string(path)
        .context(format!("Failed to read glossary file {}", path.display()))?;

    let entries = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yml") | Some("yaml") => parse_yaml(&text),
        _ => parse_json(&text),
    }
    .context(format!("Failed to parse glossary file {}", path.display()))?;

    info!("Loaded {} glossary entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Render entries as the pretty-printed JSON list `parse_json` reads.
pub fn to_json(entries: &[Entry]) -> Result<String> {
    serde_json::to_string_pretty(entries).context("Failed to serialize glossary")
}

/// Write entries as JSON, creating parent directories as needed.
pub fn write_json(path: &Path, entries: &[Entry]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .context(format!("Failed to create directory {}", parent.display()))?;
    }

    let json = to_json(entries)?;
    fs::write(path, json).context(format!("Failed to write glossary to {}", path.display()))?;
    Ok(())
}
