//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end against real HTTP.

use site_path_crawler::config::{Config, HttpSettings};
use site_path_crawler::crawler::{run_crawl, FetchError, Fetcher, HttpFetcher};
use site_path_crawler::{ConfigError, CrawlerError};
use std::time::Duration;
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointed at the given seed and output directory
fn create_test_config(seed: &str, output_dir: &TempDir, max_pages: usize) -> Config {
    let mut config = Config::default();
    config.crawl.seed_url = Some(seed.to_string());
    config.crawl.output_dir = output_dir.path().to_string_lossy().into_owned();
    config.crawl.max_pages = max_pages;
    config.crawl.delay_ms = 0;
    config.crawl.status_indicator = false;
    config.http.user_agent = "TestBot/1.0".to_string();
    config.http.timeout_secs = 5;
    config
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html")
}

async fn mount_html(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html(body))
        .mount(server)
        .await;
}

fn saved_file_names(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir.path())
        .expect("Failed to read output directory")
        .map(|entry| {
            entry
                .expect("Failed to read directory entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_full_crawl_single_site() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_html(
        &mock_server,
        "/",
        format!(
            r#"<html><head><title>Home</title></head><body>
            <a href="{}/page1">Page 1</a>
            <a href="/page2#top">Page 2</a>
            <a href="/data.json">Data</a>
            <a href="/missing">Missing</a>
            <a href="mailto:admin@example.com">Mail</a>
            </body></html>"#,
            base_url
        ),
    )
    .await;
    mount_html(
        &mock_server,
        "/page1",
        r#"<html><body><a href="/">Home</a><a href="page2">Page 2</a></body></html>"#.to_string(),
    )
    .await;
    mount_html(
        &mock_server,
        "/page2",
        r#"<html><body>Content 2</body></html>"#.to_string(),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .mount(&mock_server)
        .await;

    let output = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&format!("{}/", base_url), &output, 100);

    let summary = run_crawl(config).await.expect("Crawl failed");

    let visited: Vec<String> = summary
        .visited
        .iter()
        .map(|url| url.path().to_string())
        .collect();
    assert_eq!(
        visited,
        vec!["/", "/page1", "/page2", "/data.json", "/missing"]
    );
    assert_eq!(summary.saved_count(), 3);
    assert_eq!(summary.rejected_fetches, 2);
    assert_eq!(
        saved_file_names(&output),
        vec!["page1.html", "page2.html", "root.html"]
    );

    let saved_page = std::fs::read_to_string(output.path().join("page2.html"))
        .expect("Failed to read saved page");
    assert_eq!(saved_page, r#"<html><body>Content 2</body></html>"#);
}

#[tokio::test]
async fn test_budget_stops_crawl() {
    let mock_server = MockServer::start().await;

    let links: String = (0..5)
        .map(|i| format!(r#"<a href="/p{}">p{}</a>"#, i, i))
        .collect();
    mount_html(&mock_server, "/", format!("<html><body>{}</body></html>", links)).await;
    for i in 0..5 {
        mount_html(&mock_server, &format!("/p{}", i), "<p>leaf</p>".to_string()).await;
    }

    let output = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&mock_server.uri(), &output, 3);

    let summary = run_crawl(config).await.expect("Crawl failed");

    assert_eq!(summary.saved_count(), 3);
    assert!(summary.budget_reached());
    assert_eq!(saved_file_names(&output), vec!["p0.html", "p1.html", "root.html"]);
}

#[tokio::test]
async fn test_other_origin_never_requested() {
    let site = MockServer::start().await;
    let other = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html("<p>elsewhere</p>".to_string()))
        .expect(0)
        .mount(&other)
        .await;

    mount_html(
        &site,
        "/",
        format!(
            r#"<a href="{}/c">Other</a><a href="/local">Local</a>"#,
            other.uri()
        ),
    )
    .await;
    mount_html(&site, "/local", "<p>local</p>".to_string()).await;

    let output = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&site.uri(), &output, 10);

    let summary = run_crawl(config).await.expect("Crawl failed");

    assert_eq!(summary.saved_count(), 2);
    assert!(summary
        .visited
        .iter()
        .all(|url| url.as_str().starts_with(&site.uri())));
}

#[tokio::test]
async fn test_query_variants_do_not_overwrite() {
    let mock_server = MockServer::start().await;

    mount_html(
        &mock_server,
        "/",
        r#"<a href="/x?v=1">one</a><a href="/x?v=2">two</a>"#.to_string(),
    )
    .await;
    mount_html(&mock_server, "/x", "<p>variant</p>".to_string()).await;

    let output = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&mock_server.uri(), &output, 10);

    let summary = run_crawl(config).await.expect("Crawl failed");

    assert_eq!(summary.saved_count(), 3);
    assert_eq!(
        saved_file_names(&output),
        vec!["root.html", "x.html", "x_1.html"]
    );
}

#[tokio::test]
async fn test_missing_seed_fails_before_crawling() {
    let output = TempDir::new().expect("Failed to create temp dir");
    let mut config = create_test_config("unused", &output, 10);
    config.crawl.seed_url = None;

    let result = run_crawl(config).await;

    assert!(matches!(
        result,
        Err(CrawlerError::Config(ConfigError::MissingSeed))
    ));
}

#[tokio::test]
async fn test_fetcher_accepts_html() {
    let mock_server = MockServer::start().await;
    mount_html(&mock_server, "/page", "<p>hello</p>".to_string()).await;

    let fetcher = HttpFetcher::new(&HttpSettings::default()).expect("Failed to build fetcher");
    let url = Url::parse(&format!("{}/page", mock_server.uri())).unwrap();

    let page = fetcher.fetch(&url).await.expect("Fetch failed");

    assert_eq!(page.status_code, 200);
    assert_eq!(page.body, "<p>hello</p>");
    assert!(page.content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_fetcher_follows_redirects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/start"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/final"))
        .mount(&mock_server)
        .await;
    mount_html(&mock_server, "/final", "<p>landed</p>".to_string()).await;

    let fetcher = HttpFetcher::new(&HttpSettings::default()).expect("Failed to build fetcher");
    let url = Url::parse(&format!("{}/start", mock_server.uri())).unwrap();

    let page = fetcher.fetch(&url).await.expect("Fetch failed");

    assert_eq!(page.final_url.path(), "/final");
    assert_eq!(page.body, "<p>landed</p>");
}

#[tokio::test]
async fn test_fetcher_rejects_error_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(410).set_body_raw("<p>gone</p>", "text/html"))
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::new(&HttpSettings::default()).expect("Failed to build fetcher");
    let url = Url::parse(&format!("{}/gone", mock_server.uri())).unwrap();

    let error = fetcher.fetch(&url).await.unwrap_err();

    assert!(matches!(error, FetchError::Status { status_code: 410 }));
    assert_eq!(error.status_code(), Some(410));
}

#[tokio::test]
async fn test_fetcher_rejects_non_html() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/image.png"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![0u8, 1, 2], "image/png"))
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::new(&HttpSettings::default()).expect("Failed to build fetcher");
    let url = Url::parse(&format!("{}/image.png", mock_server.uri())).unwrap();

    let error = fetcher.fetch(&url).await.unwrap_err();

    assert!(matches!(
        error,
        FetchError::ContentType {
            status_code: 200,
            ..
        }
    ));
}

#[tokio::test]
async fn test_fetcher_times_out() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(html("<p>late</p>".to_string()).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let settings = HttpSettings {
        timeout_secs: 1,
        ..HttpSettings::default()
    };
    let fetcher = HttpFetcher::new(&settings).expect("Failed to build fetcher");
    let url = Url::parse(&format!("{}/slow", mock_server.uri())).unwrap();

    let error = fetcher.fetch(&url).await.unwrap_err();

    assert!(matches!(error, FetchError::Timeout));
    assert_eq!(error.status_code(), None);
}

#[tokio::test]
async fn test_fetcher_network_failure() {
    let fetcher = HttpFetcher::new(&HttpSettings::default()).expect("Failed to build fetcher");
    // Nothing listens on port 1
    let url = Url::parse("http://127.0.0.1:1/").unwrap();

    let error = fetcher.fetch(&url).await.unwrap_err();

    assert!(matches!(error, FetchError::Network(_)));
}
