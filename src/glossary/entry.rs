//! Entry records: one per concept, with zero or more language blocks.
//!
//! On disk an entry is a flat object whose non-reserved keys are language
//! codes. In memory the language blocks live in an explicit map, and only
//! `Entry::from_value` decides which keys count as languages.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Top-level keys of an entry record that are never language codes.
pub const RESERVED_KEYS: [&str; 2] = ["slug", "ref"];

fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Term, definition and optional acronym of a concept in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageBlock {
    /// Human-readable name of the concept
    pub term: String,

    /// Definition text
    pub def: String,

    /// Acronym, if the term has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,
}

impl LanguageBlock {
    pub fn new(term: impl Into<String>, def: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            def: def.into(),
            acronym: None,
        }
    }

    pub fn with_acronym(mut self, acronym: impl Into<String>) -> Self {
        self.acronym = Some(acronym.into());
        self
    }

    /// Read a block from an object carrying string `term` and `def`.
    ///
    /// Returns `None` for anything else. A non-string acronym is dropped
    /// rather than invalidating the block.
    fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;
        let term = fields.get("term")?.as_str()?;
        let def = fields.get("def")?.as_str()?;
        let acronym = fields
            .get("acronym")
            .and_then(Value::as_str)
            .map(str::to_string);

        Some(Self {
            term: term.to_string(),
            def: def.to_string(),
            acronym,
        })
    }
}

/// A glossary concept identified by its slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    slug: String,

    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    reference: Option<String>,

    #[serde(flatten)]
    languages: BTreeMap<String, LanguageBlock>,
}

impl Entry {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            reference: None,
            languages: BTreeMap::new(),
        }
    }

    pub fn with_ref(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Add (or replace) the block for a language.
    ///
    /// Reserved keys are not language codes; a block offered under one is ignored.
    pub fn with_language(mut self, code: impl Into<String>, block: LanguageBlock) -> Self {
        let code = code.into();
        if is_reserved(&code) {
            debug!("Ignoring language block under reserved key '{}'", code);
            return self;
        }
        self.languages.insert(code, block);
        self
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Block for a language code, if this entry has one.
    pub fn block(&self, code: &str) -> Option<&LanguageBlock> {
        self.languages.get(code)
    }

    /// All language blocks, ordered by language code.
    pub fn languages(&self) -> impl Iterator<Item = (&str, &LanguageBlock)> {
        self.languages
            .iter()
            .map(|(code, block)| (code.as_str(), block))
    }

    /// Build an entry from a loosely-typed record.
    ///
    /// Returns `None` only when the record is not an object or has no string
    /// `slug`. Every other shape problem is absorbed: keys whose values are not
    /// valid language blocks are skipped, and a `ref` that is neither a string
    /// nor a list of strings is dropped. A list of references is joined with
    /// `", "`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;
        let slug = fields.get("slug")?.as_str()?;
        let reference = fields.get("ref").and_then(reference_from_value);

        let mut languages = BTreeMap::new();
        for (code, raw) in fields.iter().filter(|(key, _)| !is_reserved(key)) {
            match LanguageBlock::from_value(raw) {
                Some(block) => {
                    languages.insert(code.clone(), block);
                }
                None => debug!(
                    "Entry '{}': key '{}' is not a language block, ignoring",
                    slug, code
                ),
            }
        }

        Some(Self {
            slug: slug.to_string(),
            reference,
            languages,
        })
    }
}

fn reference_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(reference) => Some(reference.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        _ => None,
    }
}
