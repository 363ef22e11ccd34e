//! 认证链路集成测试: 注册 -> 登录 -> 资料, 以及公开/受保护路由边界

mod common;

use common::{call, register_customer, test_state};
use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn register_login_profile_roundtrip() {
    let (state, _tmp) = test_state().await;

    let (status, body) = call(
        &state,
        Method::POST,
        "/api/register",
        None,
        Some(json!({
            "email": "wanjiru@soko.co.ke",
            "password": "correct horse battery",
            "full_name": "Wanjiru Kamau",
            "role": "customer",
            "phone": "+254700000001"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {body}");
    assert_eq!(body["token_type"], "bearer");
    assert!(
        body["user"]["id"].as_str().unwrap().starts_with("user:"),
        "wire id should be table:key, got {}",
        body["user"]["id"]
    );
    assert_eq!(body["user"]["role"], "customer");
    assert_eq!(body["user"]["subscription_status"], "trial");
    assert!(body["user"].get("hash_pass").is_none());

    // 登录拿到新令牌
    let (status, body) = call(
        &state,
        Method::POST,
        "/api/login",
        None,
        Some(json!({
            "email": "wanjiru@soko.co.ke",
            "password": "correct horse battery"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    let token = body["access_token"].as_str().unwrap().to_string();

    // 用令牌读取资料
    let (status, profile) = call(&state, Method::GET, "/api/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK, "profile failed: {profile}");
    assert_eq!(profile["email"], "wanjiru@soko.co.ke");
    assert_eq!(profile["full_name"], "Wanjiru Kamau");
    assert!(profile["trial_expires_at"].as_i64().unwrap() > profile["created_at"].as_i64().unwrap());
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let (state, _tmp) = test_state().await;
    register_customer(&state, "dup@soko.co.ke", "First").await;

    let (status, body) = call(
        &state,
        Method::POST,
        "/api/register",
        None,
        Some(json!({
            "email": "dup@soko.co.ke",
            "password": "another password 9",
            "full_name": "Second",
            "role": "seller"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "E0004");
}

#[tokio::test]
async fn login_rejects_bad_credentials_uniformly() {
    let (state, _tmp) = test_state().await;
    register_customer(&state, "victim@soko.co.ke", "Victim").await;

    // 密码错误与账号不存在必须是同一种响应, 防止账号枚举
    let (status, body) = call(
        &state,
        Method::POST,
        "/api/login",
        None,
        Some(json!({"email": "victim@soko.co.ke", "password": "wrong password"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0006");
    assert_eq!(body["message"], "Incorrect email or password");

    let (status, body) = call(
        &state,
        Method::POST,
        "/api/login",
        None,
        Some(json!({"email": "nobody@soko.co.ke", "password": "wrong password"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Incorrect email or password");
}

#[tokio::test]
async fn protected_routes_require_bearer_token() {
    let (state, _tmp) = test_state().await;

    let (status, body) = call(&state, Method::GET, "/api/profile", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "E3001");

    let (status, body) = call(
        &state,
        Method::GET,
        "/api/dashboard/stats",
        Some("not-a-real-token"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "E3002");
}

#[tokio::test]
async fn categories_and_health_are_public() {
    let (state, _tmp) = test_state().await;

    let (status, body) = call(&state, Method::GET, "/api/categories", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let categories = body.as_array().expect("category array");
    assert_eq!(categories.len(), 10);
    assert_eq!(categories[0], "Apparel & Fashion");

    let (status, body) = call(&state, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = call(&state, Method::GET, "/health/detailed", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn register_rejects_unknown_role_and_short_password() {
    let (state, _tmp) = test_state().await;

    // 角色是闭合枚举, 反序列化阶段就会拒绝
    let (status, _body) = call(
        &state,
        Method::POST,
        "/api/register",
        None,
        Some(json!({
            "email": "admin@soko.co.ke",
            "password": "long enough password",
            "full_name": "Admin",
            "role": "admin"
        })),
    )
    .await;
    assert!(status.is_client_error(), "unexpected status {status}");

    let (status, body) = call(
        &state,
        Method::POST,
        "/api/register",
        None,
        Some(json!({
            "email": "short@soko.co.ke",
            "password": "short",
            "full_name": "Short",
            "role": "customer"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
}
