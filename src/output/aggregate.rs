//! Aggregation of commander records into the final dataset

use crate::crawler::CatalogClient;
use crate::deck::{fetch_commander, ExtractOptions};
use crate::output::document::OutputDocument;
use chrono::Local;
use std::time::Duration;

/// Result of sweeping the detail endpoint over every slug
#[derive(Debug, Clone)]
pub struct HarvestOutcome {
    /// The sorted, date-stamped dataset
    pub document: OutputDocument,

    /// Commanders that made it into the document
    pub succeeded: usize,

    /// Commanders that could not be fetched or extracted
    pub failed: usize,
}

/// Fetches every commander in order and builds the dataset
///
/// Requests are made one at a time with `delay` between consecutive
/// fetches. A failed commander is logged, counted, and left out; it never
/// stops the sweep.
///
/// # Arguments
///
/// * `client` - Catalog client used for detail requests
/// * `slugs` - Distinct slugs in fetch order
/// * `delay` - Pause between consecutive detail requests
/// * `options` - Extraction options applied to every commander
pub async fn aggregate(
    client: &CatalogClient,
    slugs: &[String],
    delay: Duration,
    options: ExtractOptions,
) -> HarvestOutcome {
    let total = slugs.len();
    let mut commanders = Vec::with_capacity(total);
    let mut failed = 0;

    for (i, slug) in slugs.iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        tracing::info!("[{}/{}] Fetching {}", i + 1, total, slug);

        match fetch_commander(client, slug, options).await {
            Ok(commander) => {
                tracing::info!(
                    "  ✓ {} ({} cards)",
                    commander.name,
                    commander.total_cards()
                );
                commanders.push(commander);
            }
            Err(e) => {
                tracing::warn!("  ✗ {}", e);
                failed += 1;
            }
        }
    }

    let succeeded = commanders.len();
    tracing::info!("Fetched {} commanders ({} failed)", succeeded, failed);

    HarvestOutcome {
        document: OutputDocument::new(commanders, Local::now().date_naive()),
        succeeded,
        failed,
    }
}
