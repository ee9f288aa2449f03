//! Commander-Harvest: a catalog crawler for commander deck data
//!
//! This crate walks the paginated commander catalog, resolves every commander
//! to its average deck, normalizes the differing payload shapes, and writes a
//! single popularity-sorted dataset file.

pub mod config;
pub mod crawler;
pub mod deck;
pub mod harvest;
pub mod output;

use thiserror::Error;

/// Main error type for Commander-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Slug cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// A single remote request that could not produce JSON
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("malformed JSON from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    #[error("cannot build a URL from '{reference}': {source}")]
    Url {
        reference: String,
        source: ::url::ParseError,
    },
}

/// Why a single commander did not make it into the dataset
#[derive(Debug, Error)]
pub enum DetailError {
    #[error("could not fetch {slug}: {source}")]
    Fetch { slug: String, source: FetchError },

    #[error("could not extract {slug}: {reason}")]
    Extract { slug: String, reason: String },
}

/// Errors reading or writing the cached slug list
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed slug cache {path}: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },
}

/// Result type alias for Commander-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for single remote fetches
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl_slugs, CatalogClient};
pub use deck::{canonical_colors, fetch_commander, parse_deck_entry, Color, Commander, DeckCard};
pub use harvest::run_harvest;
pub use output::{aggregate, summarize, HarvestOutcome, OutputDocument};
