use crate::common::{create_test_client, create_test_config, paginated_page};
use commander_harvest::crawler::{crawl_slugs, CrawlOptions};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_crawl_follows_both_page_shapes() {
    let mock_server = MockServer::start().await;

    // Landing page: two nested lists sharing a commander
    Mock::given(method("GET"))
        .and(path("/pages/commanders/year.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "container": {"json_dict": {"cardlists": [
                {"cardviews": [{"sanitized": "atraxa"}, {"sanitized": "krenko"}], "more": null},
                {"cardviews": [{"sanitized": "krenko"}, {"sanitized": "edgar"}],
                 "more": "commanders/year-1.json"}
            ]}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pages/commanders/year-1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated_page(
            &["edgar", "yuriko", "atraxa"],
            Some("commanders/year-2.json"),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pages/commanders/year-2.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(paginated_page(&["muldrotha"], None)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server);
    let client = create_test_client(&config);
    let slugs = crawl_slugs(&client, &CrawlOptions::from_config(&config)).await;

    assert_eq!(
        slugs,
        vec!["atraxa", "krenko", "edgar", "yuriko", "muldrotha"]
    );
}

#[tokio::test]
async fn test_crawl_dedupes_within_a_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pages/commanders/year.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated_page(&["a", "b", "a"], None)))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server);
    let client = create_test_client(&config);
    let slugs = crawl_slugs(&client, &CrawlOptions::from_config(&config)).await;

    assert_eq!(slugs, vec!["a", "b"]);
}

#[tokio::test]
async fn test_page_without_new_slugs_still_continues() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pages/commanders/year.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated_page(&["a"], Some("p2.json"))))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pages/p2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated_page(&["a"], Some("p3.json"))))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pages/p3.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated_page(&["b"], None)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server);
    let client = create_test_client(&config);
    let slugs = crawl_slugs(&client, &CrawlOptions::from_config(&config)).await;

    assert_eq!(slugs, vec!["a", "b"]);
}

#[tokio::test]
async fn test_failed_page_keeps_partial_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pages/commanders/year.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated_page(&["a", "b"], Some("p2.json"))))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pages/p2.json"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1) // No retry
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server);
    let client = create_test_client(&config);
    let slugs = crawl_slugs(&client, &CrawlOptions::from_config(&config)).await;

    assert_eq!(slugs, vec!["a", "b"]);
}

#[tokio::test]
async fn test_malformed_page_stops_crawl() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pages/commanders/year.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated_page(&["a"], Some("p2.json"))))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pages/p2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server);
    let client = create_test_client(&config);
    let slugs = crawl_slugs(&client, &CrawlOptions::from_config(&config)).await;

    assert_eq!(slugs, vec!["a"]);
}

#[tokio::test]
async fn test_first_page_failure_yields_nothing() {
    let mock_server = MockServer::start().await;

    let config = create_test_config(&mock_server);
    let client = create_test_client(&config);
    let slugs = crawl_slugs(&client, &CrawlOptions::from_config(&config)).await;

    assert!(slugs.is_empty());
}

#[tokio::test]
async fn test_cyclic_more_reference_terminates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pages/commanders/year.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated_page(&["a"], Some("p2.json"))))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pages/p2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated_page(
            &["b"],
            Some("commanders/year.json"),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server);
    let client = create_test_client(&config);
    let slugs = crawl_slugs(&client, &CrawlOptions::from_config(&config)).await;

    assert_eq!(slugs, vec!["a", "b"]);
}

#[tokio::test]
async fn test_page_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pages/commanders/year.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated_page(&["a"], Some("p2.json"))))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pages/p2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated_page(&["b"], None)))
        .expect(0) // Beyond the page limit
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(&mock_server);
    config.crawler.max_pages = 1;
    let client = create_test_client(&config);
    let slugs = crawl_slugs(&client, &CrawlOptions::from_config(&config)).await;

    assert_eq!(slugs, vec!["a"]);
}

#[tokio::test]
async fn test_delay_only_between_page_fetches() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pages/commanders/year.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated_page(&["a"], Some("p2.json"))))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pages/p2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated_page(&["b"], Some("p3.json"))))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pages/p3.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated_page(&["c"], None)))
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(&mock_server);
    config.crawler.delay_ms = 300;
    let client = create_test_client(&config);

    let started = std::time::Instant::now();
    let slugs = crawl_slugs(&client, &CrawlOptions::from_config(&config)).await;
    let elapsed = started.elapsed();

    assert_eq!(slugs, vec!["a", "b", "c"]);
    // Three pages, two pauses
    assert!(
        elapsed >= Duration::from_millis(600),
        "Expected at least 600ms, took {:?}",
        elapsed
    );
    assert!(
        elapsed < Duration::from_millis(900),
        "Expected less than 900ms, took {:?}",
        elapsed
    );
}
