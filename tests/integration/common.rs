use commander_harvest::config::Config;
use commander_harvest::CatalogClient;
use serde_json::{json, Value};
use wiremock::MockServer;

/// Creates a test configuration pointing at the mock server
pub fn create_test_config(mock_server: &MockServer) -> Config {
    let mut config = Config::default();
    config.source.base_url = format!("{}/pages/", mock_server.uri());
    config.crawler.delay_ms = 0; // No pauses in tests
    config.crawler.timeout_secs = 1;
    config
}

pub fn create_test_client(config: &Config) -> CatalogClient {
    CatalogClient::from_config(config).expect("Failed to build catalog client")
}

/// A list page in the follow-up shape
pub fn paginated_page(slugs: &[&str], more: Option<&str>) -> Value {
    json!({
        "cardviews": slugs.iter().map(|s| json!({"sanitized": s})).collect::<Vec<_>>(),
        "more": more,
    })
}

/// A detail payload with a flat deck list
pub fn detail_page(name: &str, colors: &[&str], num_decks: u64, deck: &[&str]) -> Value {
    json!({
        "container": {"json_dict": {"card": {
            "name": name,
            "color_identity": colors,
            "num_decks": num_decks,
        }}},
        "deck": deck,
    })
}
