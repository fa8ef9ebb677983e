//! End-to-end tests of the scraper against a local mock of novelupdates.com.

use novelupdates_core::{
    ClientConfig, NovelUpdatesError, NovelUpdatesScraper, ScraperConfig, SearchResult,
    SeriesDetail,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_TENSEI: &str = include_str!("fixtures/search_tensei.html");
const SEARCH_EMPTY: &str = include_str!("fixtures/search_empty.html");
const SERIES_MUSHOKU: &str = include_str!("fixtures/series_mushoku.html");

fn scraper_for(server: &MockServer) -> NovelUpdatesScraper {
    NovelUpdatesScraper::with_config(ScraperConfig {
        client: ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        },
        ..ScraperConfig::default()
    })
    .unwrap()
}

async fn serve(server: &MockServer, url_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_search_returns_cards() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("s", "tensei"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_TENSEI))
        .expect(1)
        .mount(&server)
        .await;

    let results = scraper_for(&server).search("tensei").await.unwrap();
    assert_eq!(results.len(), 10);
    assert_eq!(results[2].id, "mushoku-tensei-ln");
}

#[tokio::test]
async fn test_search_query_is_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("s", "re:zero & friends #1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_EMPTY))
        .expect(1)
        .mount(&server)
        .await;

    let results = scraper_for(&server).search("re:zero & friends #1").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_query_is_trimmed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("s", "mushoku tensei"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_EMPTY))
        .expect(1)
        .mount(&server)
        .await;

    let results = scraper_for(&server).search("  mushoku tensei \n").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_json_round_trip() {
    let server = MockServer::start().await;
    serve(&server, "/", SEARCH_TENSEI).await;
    let scraper = scraper_for(&server);

    let records = scraper.search("tensei").await.unwrap();
    let json = scraper.search_json("tensei").await.unwrap();
    let decoded: Vec<SearchResult> = serde_json::from_slice(&json).unwrap();
    assert_eq!(decoded, records);

    let text = String::from_utf8(json).unwrap();
    assert!(text.starts_with("[\n  {\n    \"title\""));
}

#[tokio::test]
async fn test_fetch_series() {
    let server = MockServer::start().await;
    serve(&server, "/series/mushoku-tensei-ln/", SERIES_MUSHOKU).await;

    let detail = scraper_for(&server)
        .fetch_series("mushoku-tensei-ln")
        .await
        .unwrap();
    assert_eq!(detail.title, "Mushoku Tensei (LN)");
    assert_eq!(detail.series_type.name, "Light Novel JP");
    assert_eq!(detail.rating.len(), 6);
}

#[tokio::test]
async fn test_fetch_series_json_round_trip() {
    let server = MockServer::start().await;
    serve(&server, "/series/mushoku-tensei-ln/", SERIES_MUSHOKU).await;
    let scraper = scraper_for(&server);

    let detail = scraper.fetch_series("mushoku-tensei-ln").await.unwrap();
    let json = scraper.fetch_series_json("mushoku-tensei-ln").await.unwrap();
    let decoded: SeriesDetail = serde_json::from_slice(&json).unwrap();
    assert_eq!(decoded, detail);

    let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
    assert_eq!(value["type"]["name"], "Light Novel JP");

    let wide = String::from_utf8(detail.to_json(Some(6)).unwrap()).unwrap();
    assert!(wide.starts_with("{\n      \"title\""));
}

#[tokio::test]
async fn test_fetch_series_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = scraper_for(&server).fetch_series("no-such-series").await.unwrap_err();
    assert!(err.is_transport());
    match err {
        NovelUpdatesError::NotFound(url) => assert!(url.ends_with("/series/no-such-series/")),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_is_transport_not_parse() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string(SEARCH_TENSEI))
        .expect(1)
        .mount(&server)
        .await;

    match scraper_for(&server).search("tensei").await {
        Err(NovelUpdatesError::HttpStatus { status, .. }) => assert_eq!(status, 502),
        other => panic!("Expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_input_never_hits_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let scraper = scraper_for(&server);

    assert!(matches!(
        scraper.search("").await,
        Err(NovelUpdatesError::InvalidQuery(_))
    ));
    assert!(matches!(
        scraper.search(" \t\n").await,
        Err(NovelUpdatesError::InvalidQuery(_))
    ));
    assert!(matches!(
        scraper.fetch_series("../wp-admin").await,
        Err(NovelUpdatesError::InvalidId(_))
    ));
}
