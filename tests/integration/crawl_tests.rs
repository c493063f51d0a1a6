//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full fetch/extract/persist cycle end-to-end.

use site_grab::config::{Config, UserAgentConfig};
use site_grab::crawler::{build_http_client, crawl, Coordinator, NoDelay, Throttle};
use site_grab::state::{PageState, VisitedSet};
use site_grab::storage::FsStore;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration crawling `start_url` into `root_dir`
fn create_test_config(start_url: &str, max_depth: u32, root_dir: &Path) -> Config {
    let mut config = Config::default();
    config.crawler.start_url = start_url.to_string();
    config.crawler.max_depth = max_depth;
    config.crawler.request_delay_ms = 0;
    config.output.root_dir = root_dir.to_path_buf();
    config
}

async fn mount_page(server: &MockServer, route: &str, body: String, expected_hits: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(expected_hits)
        .mount(server)
        .await;
}

fn read(folder: &Path, file: &str) -> String {
    std::fs::read_to_string(folder.join(file))
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", folder.join(file).display(), e))
}

fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[tokio::test]
async fn test_full_crawl_last_page_wins() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Root links to itself and to /about
    mount_page(
        &mock_server,
        "/",
        r#"<html><head>
            <title>example.com</title>
            <meta name="description" content="Home page">
        </head><body>
            <a href="/">Home</a>
            <a href="/about">About</a>
        </body></html>"#
            .to_string(),
        1,
    )
    .await;

    // /about links one level deeper than allowed
    mount_page(
        &mock_server,
        "/about",
        r#"<html><head>
            <title>About</title>
            <meta name="description" content="About us">
            <link rel="stylesheet" href="/about.css">
        </head><body>
            <a href="/deeper">Deeper</a>
        </body></html>"#
            .to_string(),
        1,
    )
    .await;

    mount_page(&mock_server, "/deeper", String::new(), 0).await;

    Mock::given(method("GET"))
        .and(path("/about.css"))
        .respond_with(ResponseTemplate::new(200).set_body_string("h1{color:red}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let root = TempDir::new().unwrap();
    let config = create_test_config(&base_url, 1, root.path());
    let folder = config.output_folder().unwrap();

    let report = crawl(config).await.expect("Crawl failed");

    assert_eq!(report.output_folder, folder);
    assert_eq!(report.pages_saved(), 2);
    assert_eq!(report.count(PageState::AlreadyVisited), 1);
    assert_eq!(report.count(PageState::DepthExceeded), 1);
    assert_eq!(report.fetch_failures(), 0);
    assert_eq!(report.visited_urls, 2);

    // One HTML file per visited page, named from the title
    assert!(folder.join("example_com.html").is_file());
    assert!(folder.join("About.html").is_file());
    assert!(read(&folder, "example_com.html").contains("Home page"));

    // Shared files reflect only the last processed page
    assert_eq!(read(&folder, "metadata.txt"), "description: About us\n");
    assert_eq!(read(&folder, "links.txt"), format!("{}/deeper\n", base_url));
    assert_eq!(read(&folder, "css_files.txt"), format!("{}/about.css\n", base_url));
    assert_eq!(read(&folder.join("css"), "about_css"), "h1{color:red}");
}

#[tokio::test]
async fn test_long_title_does_not_abort_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body>
            <a href="/long">Long</a>
            <a href="/after">After</a>
        </body></html>"#
            .to_string(),
        1,
    )
    .await;

    let long_title = "a".repeat(300);
    mount_page(
        &mock_server,
        "/long",
        format!("<html><head><title>{}</title></head></html>", long_title),
        1,
    )
    .await;

    mount_page(
        &mock_server,
        "/after",
        "<html><head><title>After</title></head></html>".to_string(),
        1,
    )
    .await;

    let root = TempDir::new().unwrap();
    let config = create_test_config(&base_url, 1, root.path());
    let folder = config.output_folder().unwrap();

    let report = crawl(config).await.expect("Crawl failed");

    assert_eq!(report.pages_saved(), 3);
    let truncated = format!("{}.html", "a".repeat(site_grab::url::MAX_NAME_LEN));
    assert!(folder.join(&truncated).is_file());
    assert!(folder.join("After.html").is_file());
}

#[tokio::test]
async fn test_failed_fetch_is_not_retried() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body>
            <a href="/broken">Broken</a>
            <a href="/broken">Broken again</a>
            <a href="/ok">Ok</a>
        </body></html>"#
            .to_string(),
        1,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_page(
        &mock_server,
        "/ok",
        "<html><head><title>Ok</title></head></html>".to_string(),
        1,
    )
    .await;

    let root = TempDir::new().unwrap();
    let config = create_test_config(&base_url, 2, root.path());
    let folder = config.output_folder().unwrap();

    let report = crawl(config).await.expect("Crawl failed");

    assert_eq!(report.fetch_failures(), 1);
    assert_eq!(report.count(PageState::AlreadyVisited), 1);
    assert_eq!(report.pages_saved(), 2);
    assert_eq!(report.pages_requested, 3);

    // The failure skipped only that page
    assert_eq!(
        file_names(&report.saved_pages),
        vec!["Home.html".to_string(), "Ok.html".to_string()]
    );
    assert_eq!(read(&folder, "links.txt"), "");
}

#[tokio::test]
async fn test_depth_zero_fetches_only_root() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Root</title></head><body><a href="/child">Child</a></body></html>"#
            .to_string(),
        1,
    )
    .await;
    mount_page(&mock_server, "/child", String::new(), 0).await;

    let root = TempDir::new().unwrap();
    let config = create_test_config(&base_url, 0, root.path());
    let folder = config.output_folder().unwrap();

    let report = crawl(config).await.expect("Crawl failed");

    assert_eq!(report.pages_saved(), 1);
    assert_eq!(report.count(PageState::DepthExceeded), 1);
    assert_eq!(report.pages_requested, 1);

    // The child was discovered but never fetched
    assert_eq!(read(&folder, "links.txt"), format!("{}/child\n", base_url));
    assert!(folder.join("css").is_dir());
}

#[tokio::test]
async fn test_depth_first_discovery_order() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<title>Root</title><a href="/a">A</a><a href="/b">B</a>"#.to_string(),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/a",
        r#"<title>A</title><a href="/a/c">C</a>"#.to_string(),
        1,
    )
    .await;
    mount_page(&mock_server, "/a/c", "<title>C</title>".to_string(), 1).await;
    mount_page(&mock_server, "/b", "<title>B</title>".to_string(), 1).await;

    let root = TempDir::new().unwrap();
    let config = create_test_config(&base_url, 2, root.path());

    let report = crawl(config).await.expect("Crawl failed");

    // /a's subtree is finished before /b is touched
    assert_eq!(
        file_names(&report.saved_pages),
        vec!["Root.html", "A.html", "C.html", "B.html"]
    );
}

#[tokio::test]
async fn test_revisit_with_same_visited_set_has_no_effect() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        "<html><head><title>Once</title></head></html>".to_string(),
        1,
    )
    .await;

    let root = TempDir::new().unwrap();
    let folder = root.path().join("site");
    let mut coordinator = Coordinator::with_parts(
        build_http_client(&UserAgentConfig::default()).unwrap(),
        Box::new(FsStore::new(&folder)),
        Box::new(NoDelay),
        2,
    );
    let mut visited = VisitedSet::new();

    let first = coordinator
        .crawl_from(&base_url, &mut visited)
        .await
        .expect("First crawl failed");
    assert_eq!(first.pages_saved(), 1);

    std::fs::remove_file(folder.join("Once.html")).unwrap();

    let second = coordinator
        .crawl_from(&format!("{}/", base_url), &mut visited)
        .await
        .expect("Second crawl failed");

    assert_eq!(second.pages_requested, 0);
    assert_eq!(second.count(PageState::AlreadyVisited), 1);
    assert!(!folder.join("Once.html").exists());
    assert_eq!(visited.len(), 1);
}

#[tokio::test]
async fn test_fresh_run_does_not_inherit_visited_urls() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        "<html><head><title>Twice</title></head></html>".to_string(),
        2,
    )
    .await;

    let root = TempDir::new().unwrap();
    let mut coordinator = Coordinator::with_parts(
        build_http_client(&UserAgentConfig::default()).unwrap(),
        Box::new(FsStore::new(root.path())),
        Box::new(NoDelay),
        2,
    );

    let first = coordinator.run(&base_url).await.expect("First run failed");
    let second = coordinator.run(&base_url).await.expect("Second run failed");

    assert_eq!(first.pages_saved(), 1);
    assert_eq!(second.pages_saved(), 1);
}

#[tokio::test]
async fn test_stylesheet_failure_does_not_block_others() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Styled</title>
            <link rel="stylesheet" href="/css/one.css">
            <link rel="stylesheet" href="/css/missing.css">
            <link rel="stylesheet" href="/css/three.css?v=2">
        </head></html>"#
            .to_string(),
        1,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/css/one.css"))
        .respond_with(ResponseTemplate::new(200).set_body_string("one{}"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/css/missing.css"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/css/three.css"))
        .respond_with(ResponseTemplate::new(200).set_body_string("three{}"))
        .mount(&mock_server)
        .await;

    let root = TempDir::new().unwrap();
    let config = create_test_config(&base_url, 0, root.path());
    let folder = config.output_folder().unwrap();

    let report = crawl(config).await.expect("Crawl failed");

    assert_eq!(report.stylesheets_saved, 2);
    assert_eq!(report.stylesheets_failed, 1);

    let css_dir = folder.join("css");
    assert_eq!(read(&css_dir, "one_css"), "one{}");
    assert_eq!(read(&css_dir, "three_css_v_2"), "three{}");
    assert!(!css_dir.join("missing_css").exists());

    // The list file still names all three
    assert_eq!(read(&folder, "css_files.txt").lines().count(), 3);
}

#[tokio::test]
async fn test_root_fetch_failure_writes_nothing() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let root = TempDir::new().unwrap();
    let config = create_test_config(&base_url, 2, root.path());
    let folder = config.output_folder().unwrap();

    let report = crawl(config).await.expect("Fetch failures must not fail the run");

    assert_eq!(report.fetch_failures(), 1);
    assert_eq!(report.pages_saved(), 0);
    assert!(!folder.exists());
}

/// Throttle that counts how often it is consulted
struct CountingThrottle {
    calls: Arc<AtomicUsize>,
}

impl Throttle for CountingThrottle {
    fn delay_before(&mut self, _url: &str) -> Duration {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Duration::ZERO
    }
}

#[tokio::test]
async fn test_throttle_consulted_between_page_requests() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<title>Root</title><a href="/a">A</a><a href="/b">B</a><a href="/">Self</a>"#
            .to_string(),
        1,
    )
    .await;
    mount_page(&mock_server, "/a", "<title>A</title>".to_string(), 1).await;
    mount_page(&mock_server, "/b", "<title>B</title>".to_string(), 1).await;

    let calls = Arc::new(AtomicUsize::new(0));
    let root = TempDir::new().unwrap();
    let mut coordinator = Coordinator::with_parts(
        build_http_client(&UserAgentConfig::default()).unwrap(),
        Box::new(FsStore::new(root.path())),
        Box::new(CountingThrottle {
            calls: Arc::clone(&calls),
        }),
        1,
    );

    let report = coordinator.run(&base_url).await.expect("Crawl failed");

    // Three requests, no pause before the first, none for the skipped self link
    assert_eq!(report.pages_requested, 3);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
