use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Commander-Harvest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the catalog and detail pages live
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL every page reference is resolved against
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// First page of the commander list
    #[serde(rename = "start-page")]
    pub start_page: String,

    /// Path prefix of the per-commander detail pages
    #[serde(rename = "detail-prefix")]
    pub detail_prefix: String,

    /// Fixed slug list used instead of crawling when non-empty
    #[serde(rename = "seed-slugs")]
    pub seed_slugs: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://json.edhrec.com/pages/".to_string(),
            start_page: "commanders/year.json".to_string(),
            detail_prefix: "average-decks/".to_string(),
            seed_slugs: Vec::new(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Pause between consecutive requests (milliseconds)
    #[serde(rename = "delay-ms")]
    pub delay_ms: u64,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Maximum number of list pages to walk, 0 for no limit
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// Drop the commander's own card from its deck list
    #[serde(rename = "exclude-commander")]
    pub exclude_commander: bool,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            delay_ms: 300,
            timeout_secs: 30,
            max_pages: 0,
            exclude_commander: false,
        }
    }
}

impl CrawlerConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// Free-form comment shown in parentheses
    pub comment: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "MTGDeckBuilder".to_string(),
            crawler_version: "1.0".to_string(),
            comment: "Educational Project".to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Format: CrawlerName/Version (Comment)
    pub fn header_value(&self) -> String {
        if self.comment.is_empty() {
            format!("{}/{}", self.crawler_name, self.crawler_version)
        } else {
            format!(
                "{}/{} ({})",
                self.crawler_name, self.crawler_version, self.comment
            )
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the generated dataset
    #[serde(rename = "output-path")]
    pub output_path: String,

    /// Path of the cached slug list
    #[serde(rename = "slugs-path")]
    pub slugs_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_path: "src/assets/data/commanders.json".to_string(),
            slugs_path: "scripts/commander-slugs.json".to_string(),
        }
    }
}
