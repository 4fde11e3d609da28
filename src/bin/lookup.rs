//! Lookup binary - queries the glossary from the command line
//!
//! Usage:
//!   glosario-lookup <slug> [lang]   # Print the lookup as JSON
//!   glosario-lookup --slugs         # List every slug
//!   glosario-lookup --terms         # List terms in the configured language
//!   glosario-lookup --languages     # Entries per language code
//!
//! Optional environment variables:
//! - GLOSSARY_LANGUAGE (defaults to en)
//! - GLOSSARY_STRICT (defaults to true)
//! - GLOSSARY_DATASET (defaults to the bundled glossary)

use anyhow::{bail, Result};
use glosario::{config::Config, Glossary};
use std::collections::HashSet;
use tracing::debug;

const USAGE: &str = "Usage: glosario-lookup <slug> [lang] | --slugs | --terms | --languages";

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("glosario=warn".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let glossary = Glossary::new(config.glossary_options()?);
    debug!(
        "Loaded {} slugs (language: {}, strict: {})",
        glossary.len(),
        glossary.language(),
        glossary.is_strict()
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [flag] if flag == "--slugs" => print_sorted(glossary.all_slugs()),
        [flag] if flag == "--terms" => print_sorted(glossary.all_terms()),
        [flag] if flag == "--languages" => {
            for (code, count) in glossary.term_counts() {
                println!("{}\t{}", code, count);
            }
        }
        [flag, ..] if flag.starts_with("--") => bail!(USAGE),
        [slug] => print_lookup(&glossary, slug, None)?,
        [slug, language] => print_lookup(&glossary, slug, Some(language.as_str()))?,
        _ => bail!(USAGE),
    }

    Ok(())
}

fn print_lookup(glossary: &Glossary, slug: &str, language: Option<&str>) -> Result<()> {
    let lookup = glossary.by_slug(slug, language)?;
    println!("{}", serde_json::to_string_pretty(&lookup)?);
    Ok(())
}

fn print_sorted(values: HashSet<&str>) {
    let mut values: Vec<&str> = values.into_iter().collect();
    values.sort_unstable();
    for value in values {
        println!("{}", value);
    }
}
