//! Crawler module for walking the remote catalog
//!
//! This module contains the network-facing half of the pipeline:
//! - HTTP fetching with failure classification
//! - Decoding of the two list-page shapes
//! - The sequential, rate-limited slug crawl

mod fetcher;
mod page;
mod slugs;

pub use fetcher::{build_http_client, fetch_json, CatalogClient};
pub use page::{CatalogPage, StubList};
pub use slugs::{crawl_slugs, CrawlOptions, SlugSet};

