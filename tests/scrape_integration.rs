//! Integration tests for the scrape client and search orchestrator
//! against a mocked scraping backend

mod common;

use common::{sample_job, sample_params, UNREACHABLE_URL};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jobscout::history::HistoryStore;
use jobscout::scrape::ScrapeClient;
use jobscout::search::{SearchOrchestrator, SearchOutcome, CODE_INVALID_COUNTRIES};
use jobscout::types::SearchParams;

fn orchestrator_for(uri: &str) -> SearchOrchestrator {
    SearchOrchestrator::new(
        ScrapeClient::new(uri).unwrap(),
        HistoryStore::in_memory(),
    )
}

#[tokio::test]
async fn successful_scrape_commits_one_history_entry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "timestamp": "2025-01-01T12:00:00Z",
            "total_jobs": 1,
            "jobs": [sample_job("https://jobs.example/1")],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let orchestrator = orchestrator_for(&server.uri());
    let outcome = orchestrator.run_search(&sample_params()).await;

    match outcome {
        SearchOutcome::Success {
            jobs,
            total_jobs,
            entry,
        } => {
            assert_eq!(jobs.len(), 1);
            assert_eq!(total_jobs, 1);
            assert_eq!(entry.total_jobs, 1);
            assert_eq!(entry.timestamp, "2025-01-01T12:00:00Z");
        }
        SearchOutcome::Error { message, .. } => panic!("unexpected error: {}", message),
    }

    let history = orchestrator.history().get_history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].jobs[0].job_url, "https://jobs.example/1");
}

#[tokio::test]
async fn total_jobs_falls_back_to_list_length() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "timestamp": "2025-01-01T12:00:00Z",
            "jobs": [
                sample_job("https://jobs.example/1"),
                sample_job("https://jobs.example/2"),
            ],
        })))
        .mount(&server)
        .await;

    let orchestrator = orchestrator_for(&server.uri());
    match orchestrator.run_search(&sample_params()).await {
        SearchOutcome::Success { total_jobs, .. } => assert_eq!(total_jobs, 2),
        SearchOutcome::Error { message, .. } => panic!("unexpected error: {}", message),
    }
}

#[tokio::test]
async fn defaults_are_applied_to_outbound_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scrape"))
        .and(body_partial_json(json!({
            "job_keyword": "junior developer",
            "date_posted": "24h",
            "experience_levels": [],
            "workplace_types": [],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "timestamp": "2025-01-01T12:00:00Z",
            "total_jobs": 0,
            "jobs": [],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = SearchParams {
        countries: vec!["Norway".to_string()],
        ..Default::default()
    };
    let outcome = orchestrator_for(&server.uri()).run_search(&params).await;
    assert!(outcome.is_success());
}

#[tokio::test]
async fn empty_countries_never_reaches_the_backend() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let orchestrator = orchestrator_for(&server.uri());
    let outcome = orchestrator
        .run_search(&SearchParams::default())
        .await;

    match outcome {
        SearchOutcome::Error { code, .. } => assert_eq!(code, CODE_INVALID_COUNTRIES),
        SearchOutcome::Success { .. } => panic!("expected validation error"),
    }
    assert!(orchestrator.history().get_history().is_empty());
}

#[tokio::test]
async fn backend_error_body_is_surfaced_and_history_untouched() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "scraper crashed",
            "code": "BACKEND_ERROR",
        })))
        .mount(&server)
        .await;

    let orchestrator = orchestrator_for(&server.uri());
    match orchestrator.run_search(&sample_params()).await {
        SearchOutcome::Error { message, code } => {
            assert_eq!(message, "scraper crashed");
            assert_eq!(code, "BACKEND_ERROR");
        }
        SearchOutcome::Success { .. } => panic!("expected backend error"),
    }
    assert!(orchestrator.history().get_history().is_empty());
}

#[tokio::test]
async fn backend_error_without_body_uses_fallbacks() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    match orchestrator_for(&server.uri())
        .run_search(&sample_params())
        .await
    {
        SearchOutcome::Error { message, code } => {
            assert_eq!(message, "Failed to scrape jobs");
            assert_eq!(code, "SCRAPING_ERROR");
        }
        SearchOutcome::Success { .. } => panic!("expected backend error"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_client_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    match orchestrator_for(&server.uri())
        .run_search(&sample_params())
        .await
    {
        SearchOutcome::Error { code, .. } => assert_eq!(code, "CLIENT_ERROR"),
        SearchOutcome::Success { .. } => panic!("expected parse error"),
    }
}

#[tokio::test]
async fn unreachable_backend_is_a_client_error() {
    let orchestrator = orchestrator_for(UNREACHABLE_URL);
    match orchestrator.run_search(&sample_params()).await {
        SearchOutcome::Error { code, .. } => assert_eq!(code, "CLIENT_ERROR"),
        SearchOutcome::Success { .. } => panic!("expected transport error"),
    }
    assert!(orchestrator.history().get_history().is_empty());
}

#[tokio::test]
async fn health_check_reflects_backend_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = ScrapeClient::new(server.uri()).unwrap();
    assert!(client.check_health().await);

    let unreachable = ScrapeClient::new(UNREACHABLE_URL).unwrap();
    assert!(!unreachable.check_health().await);
}

#[tokio::test]
async fn unhealthy_backend_reports_false() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = ScrapeClient::new(server.uri()).unwrap();
    assert!(!client.check_health().await);
}
