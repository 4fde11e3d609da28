use crate::dataset::{self, DEFAULT_SOURCE_URL};
use crate::glossary::{GlossaryOptions, DEFAULT_LANGUAGE};
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Lookup
    pub language: String,
    pub strict: bool,

    // Dataset
    pub source_url: String,
    pub output_path: PathBuf,
    pub dataset_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Lookup
            language: std::env::var("GLOSSARY_LANGUAGE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            strict: std::env::var("GLOSSARY_STRICT")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),

            // Dataset
            source_url: std::env::var("GLOSSARY_SOURCE_URL")
                .unwrap_or_else(|_| DEFAULT_SOURCE_URL.to_string()),
            output_path: std::env::var("GLOSSARY_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/glossary.json")),
            dataset_path: std::env::var("GLOSSARY_DATASET").ok().map(PathBuf::from),
        })
    }

    /// Glossary options for this configuration, loading `dataset_path` if set.
    pub fn glossary_options(&self) -> Result<GlossaryOptions> {
        let options = GlossaryOptions::new()
            .with_language(self.language.clone())
            .with_strict(self.strict);

        match &self.dataset_path {
            Some(path) => Ok(options.with_entries(dataset::load_file(path)?)),
            None => Ok(options),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
