//! Rebuild the bundled glossary from its upstream YAML source.
//!
//! Optional environment variables:
//! - GLOSSARY_SOURCE_URL (defaults to the Carpentries glosario YAML)
//! - GLOSSARY_OUTPUT (defaults to data/glossary.json)

use anyhow::{bail, Result};
use glosario::{config::Config, dataset, retry::RetryConfig};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("glosario=info".parse()?)
                .add_directive("glosario_build=info".parse()?),
        )
        .init();

    info!("Starting glossary build");

    let config = Config::from_env()?;

    // Step 1: Fetch and convert the upstream YAML
    let entries = dataset::fetch_yaml(&config.source_url, &RetryConfig::dataset_fetch()).await?;

    // Step 2: Validate before publishing
    let report = dataset::validate(&entries);
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    if report.has_errors() {
        for problem in &report.errors {
            error!("{}", problem);
        }
        bail!(
            "Glossary has {} validation error(s); not writing {}",
            report.errors.len(),
            config.output_path.display()
        );
    }

    // Step 3: Write the loadable JSON
    dataset::write_json(&config.output_path, &entries)?;

    info!(
        "✓ Wrote {} entries to {} ({} warnings)",
        entries.len(),
        config.output_path.display(),
        report.warnings.len()
    );
    Ok(())
}
