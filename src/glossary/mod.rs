//! Glossary lookup: the slug-keyed index and its query contract.
//!
//! Entries are indexed once at construction and never mutated afterwards, so a
//! `Glossary` can be shared across threads without locking.
//!
//! # Architecture
//!
//! - `entry`: Entry records and language blocks, and their conversion from loose data
//! - `index`: The `Glossary` index and its construction options
//! - `lookup`: The fixed-shape result returned by `Glossary::by_slug`
//! - `error`: `NotFoundError`, the only error a query can produce
//!
//! # Example
//!
//! ```rust,ignore
//! use glosario::{Glossary, GlossaryOptions};
//!
//! let glossary = Glossary::new(GlossaryOptions::default().with_language("fr"));
//! let found = glossary.by_slug("absolute_path", None)?;
//! ```

mod entry;
mod error;
mod index;
mod lookup;

pub use entry::{Entry, LanguageBlock, RESERVED_KEYS};
pub use error::NotFoundError;
pub use index::{Glossary, GlossaryOptions, DEFAULT_LANGUAGE};
pub use lookup::Lookup;
