//! Runs the real router and upstream client against a fake translator service.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use assert_json_diff::assert_json_eq;
use axum::{extract::Query, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;

use translation_gateway::{build_router, GatewayConfig, MicrosoftTranslator, TranslationGateway};

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Fake upstream that echoes a canned translation per target language
fn fake_translator(hits: Arc<AtomicUsize>) -> Router {
    let rejected = hits.clone();
    Router::new()
        .route(
            "/translate",
            post(
                move |Query(query): Query<HashMap<String, String>>, Json(body): Json<Value>| {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        let text = body[0]["text"].as_str().unwrap_or_default();
                        let translated = match (query["to"].as_str(), text) {
                            ("fr", "Hello") => "Bonjour".to_string(),
                            (to, text) => format!("[{}] {}", to, text),
                        };
                        Json(json!([{"translations": [{"text": translated, "to": query["to"]}]}]))
                    }
                },
            ),
        )
        .route(
            "/unauthorized",
            post(move || {
                rejected.fetch_add(1, Ordering::SeqCst);
                async {
                    (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({"error": {"code": 401000, "message": "invalid subscription key"}})),
                    )
                }
            }),
        )
}

async fn spawn_gateway(upstream_endpoint: String) -> String {
    let config = GatewayConfig {
        api_key: "integration-key".to_string(),
        api_endpoint: upstream_endpoint,
        timeout_ms: 2000,
        ..Default::default()
    };
    let translator = MicrosoftTranslator::new(&config).unwrap();
    let gateway = Arc::new(TranslationGateway::new(Arc::new(translator)));
    spawn(build_router(gateway)).await
}

#[tokio::test]
async fn test_translate_round_trip() {
    let hits = Arc::new(AtomicUsize::new(0));
    let upstream = spawn(fake_translator(hits.clone())).await;
    let gateway = spawn_gateway(format!("{}/translate", upstream)).await;

    let response = reqwest::Client::new()
        .post(format!("{}/translate", gateway))
        .json(&json!({"source_lang": "en", "target_lang": "fr", "text": "Hello"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_json_eq!(body, json!({"translated_text": "Bonjour"}));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_missing_target_lang_never_reaches_upstream() {
    let hits = Arc::new(AtomicUsize::new(0));
    let upstream = spawn(fake_translator(hits.clone())).await;
    let gateway = spawn_gateway(format!("{}/translate", upstream)).await;

    let response = reqwest::Client::new()
        .post(format!("{}/translate", gateway))
        .json(&json!({"source_lang": "en", "text": "Hello"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_json_eq!(body, json!({"error": "Missing required fields"}));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_upstream_rejection_becomes_generic_failure() {
    let hits = Arc::new(AtomicUsize::new(0));
    let upstream = spawn(fake_translator(hits.clone())).await;
    let gateway = spawn_gateway(format!("{}/unauthorized", upstream)).await;

    let response = reqwest::Client::new()
        .post(format!("{}/translate", gateway))
        .json(&json!({"source_lang": "en", "target_lang": "fr", "text": "Hello"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_json_eq!(body, json!({"error": "Translation failed"}));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_ping_without_upstream() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = listener.local_addr().unwrap();
    drop(listener);
    let gateway = spawn_gateway(format!("http://{}/translate", dead)).await;

    let response = reqwest::get(format!("{}/ping", gateway)).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_json_eq!(body, json!({"message": "Flask backend is working!"}));

    let response = reqwest::Client::new()
        .post(format!("{}/translate", gateway))
        .json(&json!({"source_lang": "en", "target_lang": "de", "text": "Hello"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
}
