use thiserror::Error;

/// Returned by a strict `Glossary::by_slug` when the slug is not indexed.
///
/// A slug that exists without a translation is not an error; only a slug the
/// index has never seen is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No entry for slug {slug}")]
pub struct NotFoundError {
    /// The slug that was looked up
    pub slug: String,
}
