//! Dataset validation.
//!
//! Lookups tolerate any dataset, but a published glossary should not repeat
//! slugs or point at slugs that do not exist. The build tool runs these checks
//! before writing its output.

use crate::glossary::Entry;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the dataset unfit to publish
    pub errors: Vec<String>,

    /// Suspicious but tolerated content
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// No errors and no warnings.
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

static LANGUAGE_CODE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Check a dataset for duplicate slugs, odd language codes and dangling references.
///
/// Errors:
/// - a slug that occurs more than once
///
/// Warnings:
/// - a language code that is not two lowercase ASCII letters
/// - a `ref` part naming a slug absent from the dataset (URLs are not checked)
/// - an entry with neither language blocks nor a `ref`
pub fn validate(entries: &[Entry]) -> ValidationReport {
    let mut report = ValidationReport::new();

    let mut occurrences: BTreeMap<&str, usize> = BTreeMap::new();
    for entry in entries {
        *occurrences.entry(entry.slug()).or_insert(0) += 1;
    }
    for (slug, count) in occurrences.iter().filter(|(_, count)| **count > 1) {
        report
            .errors
            .push(format!("Duplicate slug '{}' appears {} times", slug, count));
    }

    let code_regex = LANGUAGE_CODE_REGEX.get_or_init(|| Regex::new(r"^[a-z]{2}$").unwrap());

    for entry in entries {
        let slug = entry.slug();

        for (code, _) in entry.languages() {
            if !code_regex.is_match(code) {
                report.warnings.push(format!(
                    "Entry '{}' has unusual language code '{}'",
                    slug, code
                ));
            }
        }

        if let Some(reference) = entry.reference() {
            let targets = reference
                .split(',')
                .map(str::trim)
                .filter(|target| !target.is_empty() && !target.contains("://"));
            for target in targets {
                if !occurrences.contains_key(target) {
                    report.warnings.push(format!(
                        "Entry '{}' refers to unknown slug '{}'",
                        slug, target
                    ));
                }
            }
        }

        if entry.languages().next().is_none() && entry.reference().is_none() {
            report.warnings.push(format!(
                "Entry '{}' has no definitions and no cross-reference",
                slug
            ));
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;
    use crate::glossary::LanguageBlock;

    fn defined(slug: &str) -> Entry {
        Entry::new(slug).with_language("en", LanguageBlock::new(slug, "defined"))
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_new_report_is_clean() {
        let report = ValidationReport::default();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    // ==================== validate Tests ====================

    #[test]
    fn test_clean_dataset() {
        let entries = vec![defined("path"), defined("absolute_path").with_ref("path")];
        let report = validate(&entries);
        assert!(report.is_clean(), "Unexpected findings: {:?}", report);
    }

    #[test]
    fn test_duplicate_slug_is_error() {
        let entries = vec![defined("dup"), defined("other"), defined("dup")];
        let report = validate(&entries);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("'dup'"));
        assert!(report.errors[0].contains("2 times"));
    }

    #[test]
    fn test_unusual_language_code_is_warning() {
        let entries = vec![Entry::new("x").with_language("EN_us", LanguageBlock::new("x", "y"))];
        let report = validate(&entries);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("EN_us"));
    }

    #[test]
    fn test_dangling_reference_is_warning() {
        let entries = vec![defined("a").with_ref("b, a")];
        let report = validate(&entries);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("unknown slug 'b'"));
    }

    #[test]
    fn test_url_reference_is_not_checked() {
        let entries = vec![defined("a").with_ref("https://example.org/glossary#a")];
        assert!(validate(&entries).is_clean());
    }

    #[test]
    fn test_empty_entry_is_warning() {
        let entries = vec![Entry::new("hollow")];
        let report = validate(&entries);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("hollow"));
    }

    #[test]
    fn test_bundled_dataset_has_no_errors() {
        let report = validate(dataset::bundled());
        assert!(!report.has_errors(), "Errors: {:?}", report.errors);
    }
}
