//! Slug crawler: walks the paginated commander list
//!
//! The crawl is strictly sequential. Each page is fetched, decoded into a
//! [`CatalogPage`], and its slugs are appended to an ordered, deduplicated
//! list. The crawl ends when a page has no next reference, when a page cannot
//! be fetched, or when the optional page cap is reached. Ending on a failed
//! page is not an error: whatever was collected so far is returned.

use crate::config::Config;
use crate::crawler::fetcher::CatalogClient;
use crate::crawler::page::CatalogPage;
use std::collections::HashSet;
use std::time::Duration;

/// Ordered set of slugs, first occurrence wins
#[derive(Debug, Clone, Default)]
pub struct SlugSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl SlugSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a slug, returning false for empty or already seen slugs
    pub fn insert(&mut self, slug: &str) -> bool {
        if slug.is_empty() || self.seen.contains(slug) {
            return false;
        }
        self.seen.insert(slug.to_string());
        self.order.push(slug.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

/// Options for one crawl of the commander list
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Page reference the crawl starts from
    pub start_page: String,

    /// Pause between successive page fetches
    pub delay: Duration,

    /// Maximum number of pages to fetch, 0 for no limit
    pub max_pages: u32,
}

impl CrawlOptions {
    /// Builds crawl options from the configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            start_page: config.source.start_page.clone(),
            delay: config.crawler.delay(),
            max_pages: config.crawler.max_pages,
        }
    }
}

/// Crawls the commander list and returns every distinct slug
///
/// # Arguments
///
/// * `client` - Catalog client used for every page request
/// * `options` - Start page, delay, and page cap
///
/// # Returns
///
/// Slugs in order of first appearance. Never fails; a failed page fetch
/// truncates the result instead.
pub async fn crawl_slugs(client: &CatalogClient, options: &CrawlOptions) -> Vec<String> {
    let mut slugs = SlugSet::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut next_page = Some(options.start_page.clone());
    let mut page_num: u32 = 0;

    while let Some(page_ref) = next_page.take() {
        if options.max_pages > 0 && page_num >= options.max_pages {
            tracing::info!("Reached page limit of {}, stopping crawl", options.max_pages);
            break;
        }

        if !visited.insert(page_ref.clone()) {
            tracing::warn!("Page {} already visited, stopping crawl", page_ref);
            break;
        }

        if page_num > 0 && !options.delay.is_zero() {
            tokio::time::sleep(options.delay).await;
        }

        page_num += 1;
        tracing::info!("[Page {}] Fetching {}", page_num, page_ref);

        let body = match client.fetch_page(&page_ref).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Stopping crawl at page {}: {}", page_num, e);
                break;
            }
        };

        let page = CatalogPage::from_json(&body);
        let new_slugs = page.slugs().filter(|slug| slugs.insert(slug)).count();

        tracing::info!(
            "  Found {} new commanders (total: {})",
            new_slugs,
            slugs.len()
        );

        next_page = page.next_page().map(str::to_string);
    }

    slugs.into_vec()
}
