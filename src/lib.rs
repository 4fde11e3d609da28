//! Multilingual glossary of programming and data science terms.
//!
//! Look up a concept by its slug and get back its term, definition,
//! cross-reference and acronym in the language you ask for.

pub mod config;
pub mod dataset;
pub mod glossary;
pub mod retry;

pub use glossary::{
    Entry, Glossary, GlossaryOptions, LanguageBlock, Lookup, NotFoundError, DEFAULT_LANGUAGE,
};
