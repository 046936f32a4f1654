// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use jobboard_core::application::ports::{ClockPort, SlugGeneratorPort, SuffixSourcePort};
use jobboard_core::application::services::{ApplicationServices, NormalizationPolicy};
use jobboard_core::infrastructure::util::DefaultSlugGenerator;
use jobboard_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks::{DummyClock, InMemoryStore, ScriptedSuffixes};

pub fn build_services(
    store: Arc<InMemoryStore>,
    suffixes: Arc<ScriptedSuffixes>,
    policy: NormalizationPolicy,
) -> ApplicationServices {
    let clock: Arc<ClockPort> = Arc::new(DummyClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);
    let suffixes: Arc<SuffixSourcePort> = suffixes;

    ApplicationServices::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store,
        clock,
        slugger,
        suffixes,
        policy,
    )
}

pub fn make_test_router(store: Arc<InMemoryStore>, suffixes: &[u16]) -> axum::Router {
    let services = build_services(
        store,
        Arc::new(ScriptedSuffixes::new(suffixes)),
        NormalizationPolicy::default(),
    );
    let state = HttpState {
        services: Arc::new(services),
    };
    build_router(state, &["http://localhost:3000".to_string()])
}

pub async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    payload: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match payload {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let json = serde_json::from_slice(&bytes).expect("expected valid json body");
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub fn assert_error_body(status: StatusCode, json: &Value, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(status, expected_status, "unexpected status, body: {json}");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
