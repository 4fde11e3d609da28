use serde::Serialize;

/// Result of looking up a slug in one language.
///
/// Every field except `lang` may be `None`. Serialized, absent values appear
/// as explicit `null`s so the shape is the same for every outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lookup {
    /// Language the lookup was resolved in
    pub lang: String,

    /// Term in that language
    pub term: Option<String>,

    /// Definition in that language
    pub def: Option<String>,

    /// Cross-reference held by the entry, independent of language
    #[serde(rename = "ref")]
    pub reference: Option<String>,

    /// Acronym in that language
    pub acronym: Option<String>,
}

impl Lookup {
    /// Null-filled result for the given language.
    pub(crate) fn empty(lang: &str) -> Self {
        Self {
            lang: lang.to_string(),
            term: None,
            def: None,
            reference: None,
            acronym: None,
        }
    }

    /// True when both a term and a definition were found.
    pub fn is_translated(&self) -> bool {
        self.term.is_some() && self.def.is_some()
    }
}
