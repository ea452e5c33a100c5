//! End-to-end orchestrator behaviour against a mocked narrative service.

use std::time::Duration;

use adinsight_core::{MetricsSummary, PlatformStats, Provenance};
use adinsight_narrative::{
    FallbackNarrator, GeminiClient, InsightOrchestrator, NarrativeClient, NarrativeService,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn summary() -> MetricsSummary {
    MetricsSummary {
        date_range: Some((
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
        )),
        total_impressions: 1500,
        total_clicks: 60,
        total_spend: Decimal::from(45),
        average_ctr: 4.0,
        average_cpc: Decimal::new(75, 2),
        per_platform: vec![
            PlatformStats {
                platform: "Google".to_owned(),
                impressions: 1000,
                clicks: 50,
                spend: Decimal::from(25),
            },
            PlatformStats {
                platform: "Facebook".to_owned(),
                impressions: 500,
                clicks: 10,
                spend: Decimal::from(20),
            },
        ],
    }
}

fn orchestrator_against(base_url: &str, attempts: u32, deadline: Option<Duration>) -> InsightOrchestrator {
    let service = GeminiClient::with_base_url("test-key", "gemini-pro", 5, base_url)
        .expect("client construction should not fail");
    let client = NarrativeClient::new(NarrativeService::Gemini(service), attempts, 0);
    InsightOrchestrator::new(Some(client), FallbackNarrator::new(2.0), deadline)
}

fn gemini_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    })
}

#[tokio::test]
async fn unconfigured_service_goes_straight_to_fallback() {
    let orchestrator = InsightOrchestrator::new(None, FallbackNarrator::new(2.0), None);
    let result = orchestrator.produce_insights(&summary(), None).await;

    assert_eq!(result.provenance, Provenance::Fallback);
    assert!(result.bullets.iter().all(|b| !b.trim().is_empty()));
    assert!(result.bullets[1].contains("Google"));
}

#[tokio::test]
async fn successful_service_yields_llm_provenance() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-pro:generateContent"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(gemini_body("- trend up\n- Google leads\n- CPC fine")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let orchestrator = orchestrator_against(&server.uri(), 3, None);
    let result = orchestrator.produce_insights(&summary(), None).await;

    assert_eq!(result.provenance, Provenance::Llm);
    assert_eq!(result.bullets[0], "trend up");
    assert_eq!(result.bullets[1], "Google leads");
    assert_eq!(result.bullets[2], "CPC fine");
}

#[tokio::test]
async fn unreachable_service_retries_to_the_bound_then_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-pro:generateContent"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(3)
        .mount(&server)
        .await;

    let orchestrator = orchestrator_against(&server.uri(), 3, None);
    let result = orchestrator.produce_insights(&summary(), None).await;

    assert_eq!(result.provenance, Provenance::Fallback);
    let requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(
        requests.len(),
        3,
        "attempts made must equal the configured retry bound"
    );
}

#[tokio::test]
async fn malformed_body_falls_back_without_retrying() {
    let server = MockServer::start().await;

    // Two bullets instead of three: a contract violation, not a transient fault.
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-pro:generateContent"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_body("- only one\n- and two")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let orchestrator = orchestrator_against(&server.uri(), 3, None);
    let result = orchestrator.produce_insights(&summary(), None).await;

    assert_eq!(result.provenance, Provenance::Fallback);
    let requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 1, "malformed responses must not be retried");
}

#[tokio::test]
async fn overall_deadline_exceeded_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-pro:generateContent"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(gemini_body("- a\n- b\n- c"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let orchestrator =
        orchestrator_against(&server.uri(), 1, Some(Duration::from_millis(50)));
    let result = orchestrator.produce_insights(&summary(), None).await;

    assert_eq!(result.provenance, Provenance::Fallback);
}

#[tokio::test]
async fn context_reaches_fallback_bullets_when_service_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-pro:generateContent"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let orchestrator = orchestrator_against(&server.uri(), 1, None);
    let context = "Client is worried about rising CPC. Ignore the rest.";
    let result = orchestrator.produce_insights(&summary(), Some(context)).await;

    assert_eq!(result.provenance, Provenance::Fallback);
    assert!(result.bullets[2].contains("Client is worried about rising CPC."));
}
