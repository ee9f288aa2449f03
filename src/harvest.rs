//! Run orchestration: choose a slug source, sweep details, write the dataset
//!
//! This is the main entry point for a run. It will:
//! 1. Resolve the slug list (cache, configured seeds, or a fresh crawl)
//! 2. Fetch and normalize every commander
//! 3. Write the sorted dataset
//! 4. Log the run summary

use crate::config::Config;
use crate::crawler::{crawl_slugs, CatalogClient, CrawlOptions, SlugSet};
use crate::deck::ExtractOptions;
use crate::output::{aggregate, load_slugs, log_summary, save_slugs, summarize, HarvestOutcome};
use crate::HarvestError;
use std::path::{Path, PathBuf};

/// Where the slug list of a run comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugSource {
    /// Read from the slug cache file
    Cache(PathBuf),

    /// Fixed list from the configuration
    Seed(Vec<String>),

    /// Walk the commander list, then refresh the cache file
    Crawl,
}

impl SlugSource {
    /// Picks the slug source for a run
    ///
    /// A cache is only used when reuse is requested and the file exists;
    /// configured seeds come next; otherwise the catalog is crawled.
    pub fn resolve(config: &Config, reuse_cache: bool) -> Self {
        let cache_path = PathBuf::from(&config.output.slugs_path);

        if reuse_cache {
            if cache_path.exists() {
                return Self::Cache(cache_path);
            }
            tracing::warn!(
                "Slug cache {} not found, falling back",
                cache_path.display()
            );
        }

        if !config.source.seed_slugs.is_empty() {
            return Self::Seed(config.source.seed_slugs.clone());
        }

        Self::Crawl
    }
}

/// Resolves the slug list for a run
pub async fn collect_slugs(
    client: &CatalogClient,
    config: &Config,
    source: SlugSource,
) -> Result<Vec<String>, HarvestError> {
    let slugs = match source {
        SlugSource::Cache(path) => {
            tracing::info!("Loading cached slugs from {}", path.display());
            dedupe(load_slugs(&path)?)
        }
        SlugSource::Seed(seeds) => {
            tracing::info!("Using {} configured seed slugs", seeds.len());
            dedupe(seeds)
        }
        SlugSource::Crawl => {
            tracing::info!("Fetching all commander slugs");
            let slugs = crawl_slugs(client, &CrawlOptions::from_config(config)).await;

            let cache_path = Path::new(&config.output.slugs_path);
            match save_slugs(cache_path, &slugs) {
                Ok(()) => tracing::info!(
                    "Cached {} slugs to {}",
                    slugs.len(),
                    cache_path.display()
                ),
                Err(e) => tracing::warn!("Could not write slug cache: {}", e),
            }
            slugs
        }
    };

    tracing::info!("Total commanders to fetch: {}", slugs.len());
    Ok(slugs)
}

fn dedupe(slugs: Vec<String>) -> Vec<String> {
    let mut set = SlugSet::new();
    for slug in &slugs {
        set.insert(slug);
    }
    set.into_vec()
}

/// Runs a complete harvest and writes the dataset
///
/// # Arguments
///
/// * `config` - The validated configuration
/// * `reuse_cache` - Read slugs from the cache file instead of crawling
///
/// # Returns
///
/// * `Ok(HarvestOutcome)` - The written document and success/failure counts
/// * `Err(HarvestError)` - Client setup, cache, or output failure
pub async fn run_harvest(config: &Config, reuse_cache: bool) -> Result<HarvestOutcome, HarvestError> {
    let client = CatalogClient::from_config(config)?;

    let source = SlugSource::resolve(config, reuse_cache);
    let slugs = collect_slugs(&client, config, source).await?;

    let options = ExtractOptions {
        exclude_commander: config.crawler.exclude_commander,
    };
    let outcome = aggregate(&client, &slugs, config.crawler.delay(), options).await;

    let output_path = Path::new(&config.output.output_path);
    outcome.document.write_to(output_path)?;
    tracing::info!(
        "✓ Saved {} commanders to {}",
        outcome.succeeded,
        output_path.display()
    );

    log_summary(&outcome, &summarize(&outcome.document));

    Ok(outcome)
}
