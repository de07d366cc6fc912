// Contract tests for /api/auth

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{http::StatusCode, test, App};
use serde_json::json;

use helpers::*;

#[actix_web::test]
async fn test_register_response_schema() {
    let state = memory_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(register_payload("Clerk@Example.com", "secret1"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert!(body["accessToken"].is_string(), "accessToken is required");
    assert_eq!(body["tokenType"], "Bearer");
    assert_eq!(body["expiresInSeconds"], 3600);
    assert!(body["user"]["id"].is_i64());
    assert_eq!(body["user"]["email"], "clerk@example.com");
    assert_eq!(body["user"]["role"], "VIEWER");
    assert!(body["user"]["createdAt"].is_string());
    assert!(body["user"].get("passwordHash").is_none(), "hash must never be exposed");
}

#[actix_web::test]
async fn test_register_with_role_then_login() {
    let state = memory_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let mut payload = register_payload("manager@example.com", "secret1");
    payload["role"] = json!("MANAGER");
    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/api/auth/register").set_json(payload).to_request(),
    )
    .await;
    assert_eq!(json_body(resp).await["user"]["role"], "MANAGER");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "manager@example.com", "password": "secret1" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["user"]["email"], "manager@example.com");
    assert_eq!(body["tokenType"], "Bearer");
}

#[actix_web::test]
async fn test_duplicate_email_returns_409() {
    let state = memory_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let mut statuses = Vec::new();
    for email in ["ops@example.com", "OPS@example.com"] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/auth/register")
                .set_json(register_payload(email, "secret1"))
                .to_request(),
        )
        .await;
        statuses.push(resp.status());
    }
    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::CONFLICT]);
}

#[actix_web::test]
async fn test_register_validation_errors() {
    let state = memory_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    for payload in [
        register_payload("not-an-email", "secret1"),
        register_payload("ops@example.com", "abc"),
        register_payload("ops@example.com", "this-password-is-way-too-long"),
        json!({ "email": "ops@example.com", "password": "secret1", "name": "  " }),
        json!({ "email": "ops@example.com", "password": "secret1", "name": "Ops", "role": "ROOT" }),
    ] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post().uri("/api/auth/register").set_json(&payload).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "payload {payload} should be rejected");
    }
}

#[actix_web::test]
async fn test_bad_credentials_return_401() {
    let state = memory_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(register_payload("ops@example.com", "secret1"))
            .to_request(),
    )
    .await;

    for (email, password) in [("ops@example.com", "wrong1"), ("ghost@example.com", "secret1")] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/auth/login")
                .set_json(json!({ "email": email, "password": password }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(resp).await;
        assert_error_body(&body, 401, "UNAUTHORIZED");
        assert_eq!(body["error"]["message"], "Unauthorized: Invalid email or password");
    }
}
