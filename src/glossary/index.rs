//! The glossary index: entries keyed by slug, built once and read many times.

use super::{Entry, Lookup, NotFoundError};
use crate::dataset;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use tracing::{debug, warn};

/// Language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Construction options for a `Glossary`.
#[derive(Debug, Clone)]
pub struct GlossaryOptions {
    /// Default language for queries (2-letter code, not validated)
    pub language: String,

    /// Whether `by_slug` fails on unknown slugs instead of returning an empty result
    pub strict: bool,

    /// Entries to index; `None` means the bundled dataset
    pub entries: Option<Vec<Entry>>,
}

impl GlossaryOptions {
    pub fn new() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            strict: true,
            entries: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Index these entries instead of the bundled dataset.
    pub fn with_entries(mut self, entries: Vec<Entry>) -> Self {
        self.entries = Some(entries);
        self
    }
}

impl Default for GlossaryOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only glossary index.
///
/// Construction never fails. When the supplied entries repeat a slug, the
/// last occurrence replaces the earlier ones.
#[derive(Debug, Clone)]
pub struct Glossary {
    language: String,
    strict: bool,
    entries: HashMap<String, Entry>,
}

impl Glossary {
    pub fn new(options: GlossaryOptions) -> Self {
        let GlossaryOptions {
            language,
            strict,
            entries,
        } = options;
        let entries = entries.unwrap_or_else(|| dataset::bundled().to_vec());

        let supplied = entries.len();
        let mut by_slug = HashMap::with_capacity(supplied);
        for entry in entries {
            if let Some(replaced) = by_slug.insert(entry.slug().to_string(), entry) {
                warn!(
                    "Duplicate slug '{}': later entry replaces earlier one",
                    replaced.slug()
                );
            }
        }

        debug!(
            "Indexed {} slugs from {} entries (language: {}, strict: {})",
            by_slug.len(),
            supplied,
            language,
            strict
        );

        Self {
            language,
            strict,
            entries: by_slug,
        }
    }

    /// Configured default language.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Number of distinct slugs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// An explicit, non-empty language wins; otherwise the configured one.
    fn resolve<'a>(&'a self, language: Option<&'a str>) -> &'a str {
        match language {
            Some(code) if !code.is_empty() => code,
            _ => &self.language,
        }
    }

    /// True iff the slug is indexed and has a block in the resolved language.
    pub fn has_slug(&self, slug: &str, language: Option<&str>) -> bool {
        let language = self.resolve(language);
        self.entries
            .get(slug)
            .is_some_and(|entry| entry.block(language).is_some())
    }

    /// Look up a slug in the resolved language.
    ///
    /// # Returns
    /// * `Err(NotFoundError)` only in strict mode, for a slug that is not indexed
    /// * `Ok` with every field but `lang` empty for an unknown slug in lenient mode
    /// * `Ok` with only `ref` (if any) set when the slug has no block in that language
    /// * `Ok` with term, definition, reference and acronym otherwise
    pub fn by_slug(&self, slug: &str, language: Option<&str>) -> Result<Lookup, NotFoundError> {
        let language = self.resolve(language);
        let mut lookup = Lookup::empty(language);

        let Some(entry) = self.entries.get(slug) else {
            if self.strict {
                return Err(NotFoundError {
                    slug: slug.to_string(),
                });
            }
            return Ok(lookup);
        };

        lookup.reference = entry.reference().map(str::to_string);
        if let Some(block) = entry.block(language) {
            lookup.term = Some(block.term.clone());
            lookup.def = Some(block.def.clone());
            lookup.acronym = block.acronym.clone();
        }
        Ok(lookup)
    }

    /// Every indexed slug, whether or not it has any translation.
    pub fn all_slugs(&self) -> HashSet<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Distinct terms defined in the configured language.
    pub fn all_terms(&self) -> HashSet<&str> {
        self.entries
            .values()
            .filter_map(|entry| entry.block(&self.language))
            .map(|block| block.term.as_str())
            .collect()
    }

    /// Every language code that has at least one block.
    pub fn languages(&self) -> BTreeSet<&str> {
        self.entries
            .values()
            .flat_map(|entry| entry.languages().map(|(code, _)| code))
            .collect()
    }

    /// Number of entries with a block in each language.
    pub fn term_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for (code, _) in self.entries.values().flat_map(|entry| entry.languages()) {
            *counts.entry(code).or_insert(0) += 1;
        }
        counts
    }
}

impl Default for Glossary {
    fn default() -> Self {
        Self::new(GlossaryOptions::default())
    }
}
