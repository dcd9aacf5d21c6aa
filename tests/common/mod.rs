//! Shared test helpers for HTTP integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tower::ServiceExt;

use ticket_registry_server::clock::{Clock, SystemClock};
use ticket_registry_server::config::Limits;
use ticket_registry_server::registry::{seed, Registry};
use ticket_registry_server::routes::create_routes;
use ticket_registry_server::state::AppState;

fn registry() -> Registry {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    Registry::with_rng(clock, StdRng::seed_from_u64(42))
}

/// App over an empty registry.
pub fn build_test_app() -> Router {
    build_test_app_with_limits(Limits::default())
}

pub fn build_test_app_with_limits(limits: Limits) -> Router {
    create_routes(AppState::new(registry(), limits))
}

/// App over a registry holding the ten demo tickets.
pub fn build_seeded_app() -> Router {
    let mut registry = registry();
    let seeded_at = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
    registry.seed(seed::demo_tickets(seeded_at));
    create_routes(AppState::new(registry, Limits::default()))
}

/// Send a request with an optional JSON body and return status and JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, "GET", uri, None).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(app, "POST", uri, Some(body)).await
}

pub async fn patch_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(app, "PATCH", uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, "DELETE", uri, None).await
}

/// Ids of a JSON ticket array, in order.
pub fn ids(tickets: &serde_json::Value) -> Vec<String> {
    tickets
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap().to_string())
        .collect()
}
