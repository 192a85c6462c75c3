//! Integration tests for the crawl engine
//!
//! These tests use wiremock to stand in for the target site and exercise the
//! full crawl cycle: seed fetch, link discovery, neighbor fetches, extraction,
//! and aggregation.

use contact_sweep::config::CrawlerConfig;
use contact_sweep::crawler::run_crawl;
use contact_sweep::Platform;
use std::collections::HashSet;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(max_links: usize) -> CrawlerConfig {
    CrawlerConfig {
        max_links,
        request_timeout_secs: 5,
        user_agent: "contact-sweep-test/1.0".to_string(),
    }
}

fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

#[tokio::test]
async fn test_full_crawl_aggregates_across_pages() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            r#"<a href="mailto:a@b.com">Email us</a>
               <p>Call +1 (555) 123-4567</p>
               <a href="https://facebook.com/acme">Facebook</a>
               <a href="/contact">Contact</a>
               <a href="/about">About</a>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(html_page(
            r#"<p>sales@acme.test</p>
               <a href="https://instagram.com/acme">Instagram</a>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(html_page("<p>Just a history page.</p>"))
        .mount(&mock_server)
        .await;

    let result = run_crawl(&base_url, &test_config(5)).await.expect("crawl failed");

    assert_eq!(result.url, base_url);
    assert_eq!(
        result.emails,
        HashSet::from(["a@b.com".to_string(), "sales@acme.test".to_string()])
    );
    assert_eq!(
        result.phone_numbers,
        HashSet::from(["+15551234567".to_string()])
    );
    assert_eq!(
        result.socials[&Platform::Facebook],
        HashSet::from(["https://facebook.com/acme".to_string()])
    );
    assert_eq!(
        result.socials[&Platform::Instagram],
        HashSet::from(["https://instagram.com/acme".to_string()])
    );
    assert!(result.socials[&Platform::Twitter].is_empty());
}

#[tokio::test]
async fn test_failed_internal_link_does_not_abort_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            r#"<p>owner@acme.test</p><a href="/broken">Broken</a>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let result = run_crawl(&base_url, &test_config(5)).await.expect("crawl failed");

    // Seed facts survive even though the neighbor fetch failed
    assert_eq!(result.emails, HashSet::from(["owner@acme.test".to_string()]));
}

#[tokio::test]
async fn test_link_bound_limits_fetches() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            r#"<a href="/a">A</a><a href="/b">B</a><a href="/c">C</a>"#,
        ))
        .mount(&mock_server)
        .await;

    for page in ["/a", "/b"] {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(html_page("<p>nothing</p>"))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    // Beyond the bound, never fetched
    Mock::given(method("GET"))
        .and(path("/c"))
        .respond_with(html_page("<p>late@acme.test</p>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = run_crawl(&base_url, &test_config(2)).await.expect("crawl failed");
    assert!(result.emails.is_empty());
}

#[tokio::test]
async fn test_only_seed_page_is_expanded() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(r#"<a href="/level1">L1</a>"#))
        .mount(&mock_server)
        .await;

    // The neighbor links further down, but its links are never followed
    Mock::given(method("GET"))
        .and(path("/level1"))
        .respond_with(html_page(r#"<a href="/level2">L2</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/level2"))
        .respond_with(html_page("<p>deep@acme.test</p>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = run_crawl(&base_url, &test_config(5)).await.expect("crawl failed");
    assert!(result.emails.is_empty());
}

#[tokio::test]
async fn test_duplicate_and_self_links_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    // Seed links to itself and to the same page twice
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(&format!(
            r#"<a href="{base}">Home</a><a href="/a">A</a><a href="/a">A again</a>"#,
            base = base_url
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(html_page("<p>a@acme.test</p>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = run_crawl(&base_url, &test_config(5)).await.expect("crawl failed");
    assert_eq!(result.emails, HashSet::from(["a@acme.test".to_string()]));
}

#[tokio::test]
async fn test_cross_host_links_never_followed() {
    let mock_server = MockServer::start().await;
    let other_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(&format!(
            r#"<a href="{}/elsewhere">External</a>"#,
            other_server.uri()
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/elsewhere"))
        .respond_with(html_page("<p>external@other.test</p>"))
        .expect(0)
        .mount(&other_server)
        .await;

    let result = run_crawl(&base_url, &test_config(5)).await.expect("crawl failed");
    assert!(result.emails.is_empty());
}

#[tokio::test]
async fn test_unreachable_seed_yields_empty_record() {
    // Nothing listens on the discard port; the crawl still completes
    let result = run_crawl("http://127.0.0.1:9/", &test_config(5))
        .await
        .expect("crawl should not error on an unreachable page");

    assert_eq!(result.url, "http://127.0.0.1:9/");
    assert!(result.emails.is_empty());
    assert!(result.phone_numbers.is_empty());
}
