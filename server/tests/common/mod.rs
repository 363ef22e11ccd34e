//! 集成测试共用工具
//!
//! 每个测试拿到一套独立的 ServerState, 数据库落在临时目录里,
//! 请求通过 oneshot 直接打到完整的中间件栈上。

use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;

use soko_server::core::{Config, ServerState};
use soko_server::routes::{OneshotRouter, build_app};

/// Fresh server state backed by a throwaway work directory
///
/// The TempDir must stay alive for as long as the state is used.
pub async fn test_state() -> (ServerState, TempDir) {
    let tmp = TempDir::new().expect("temp dir");
    let config = Config::with_overrides(tmp.path().to_string_lossy(), 0);
    let state = ServerState::initialize(&config).await;
    (state, tmp)
}

/// Run one request through the full app (middleware included)
pub async fn call(
    state: &ServerState,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let mut app = build_app(state);
    let response = app.oneshot(state, request).await.expect("oneshot call");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("response body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Register a customer account, returning (token, user_id)
pub async fn register_customer(state: &ServerState, email: &str, name: &str) -> (String, String) {
    let (status, body) = call(
        state,
        Method::POST,
        "/api/register",
        None,
        Some(json!({
            "email": email,
            "password": "correct horse battery",
            "full_name": name,
            "role": "customer",
            "location": "Nairobi"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "customer register failed: {body}");
    extract_auth(&body)
}

/// Register a seller account, returning (token, user_id)
pub async fn register_seller(state: &ServerState, email: &str, business: &str) -> (String, String) {
    let (status, body) = call(
        state,
        Method::POST,
        "/api/register",
        None,
        Some(json!({
            "email": email,
            "password": "correct horse battery",
            "full_name": "Seller Person",
            "role": "seller",
            "business_name": business,
            "location": "Mombasa"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "seller register failed: {body}");
    extract_auth(&body)
}

fn extract_auth(body: &Value) -> (String, String) {
    let token = body["access_token"].as_str().expect("access_token").to_string();
    let user_id = body["user"]["id"].as_str().expect("user id").to_string();
    (token, user_id)
}

/// Post a buy request as the given customer, returning its id
pub async fn post_request(state: &ServerState, token: &str, title: &str) -> String {
    let (status, body) = call(
        state,
        Method::POST,
        "/api/requests",
        Some(token),
        Some(json!({
            "title": title,
            "description": "Need this sourced locally",
            "budget_min": 1000.0,
            "budget_max": 2000.0,
            "categories": ["Custom Items"],
            "location": "Nairobi"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "request create failed: {body}");
    body["id"].as_str().expect("request id").to_string()
}

/// Submit an offer as the given seller, returning its id
pub async fn post_offer(state: &ServerState, token: &str, request_id: &str, price: f64) -> String {
    let (status, body) = call(
        state,
        Method::POST,
        "/api/offers",
        Some(token),
        Some(json!({
            "request_id": request_id,
            "price": price,
            "description": "Can source within the week",
            "delivery_details": "Door delivery, 5 days"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "offer create failed: {body}");
    body["id"].as_str().expect("offer id").to_string()
}
