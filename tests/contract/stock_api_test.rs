// Contract tests for /api/stock and POST /api/stock/import

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{http::StatusCode, test, App};
use serde_json::json;

use helpers::*;

#[actix_web::test]
async fn test_stock_level_response_schema() {
    let state = memory_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/stock")
        .set_json(stock_payload("Tools", 3, 5, 20))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        json_body(resp).await,
        json!({
            "category": "Tools",
            "currentStock": 3,
            "minStock": 5,
            "optimalStock": 20,
            "status": "critical"
        })
    );
}

#[actix_web::test]
async fn test_stock_crud_flow() {
    let state = memory_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/stock")
            .set_json(stock_payload("Tools", 10, 2, 20))
            .to_request(),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/stock/Tools").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["status"], "low_stock");

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/stock/Tools")
            .set_json(json!({ "currentStock": 25, "minStock": 2, "optimalStock": 20 }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["status"], "ok");

    let resp = test::call_service(&app, test::TestRequest::delete().uri("/api/stock/Tools").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/stock").to_request()).await;
    assert_eq!(json_body(resp).await, json!([]));
}

#[actix_web::test]
async fn test_duplicate_category_returns_409() {
    let state = memory_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let mut statuses = Vec::new();
    for _ in 0..2 {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/stock")
                .set_json(stock_payload("Tools", 1, 1, 1))
                .to_request(),
        )
        .await;
        statuses.push(resp.status());
    }
    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::CONFLICT]);
}

#[actix_web::test]
async fn test_negative_counter_is_rejected() {
    let state = memory_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/stock")
            .set_json(json!({ "category": "Tools", "currentStock": -1, "minStock": 0, "optimalStock": 0 }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_import_response_schema() {
    let state = memory_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/stock/import")
        .insert_header(("Content-Type", "text/csv"))
        .insert_header(("X-Filename", "inventory.csv"))
        .set_payload(csv_file(&["Tools,10,2,20", "Parts,1,2,5"]))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        json_body(resp).await,
        json!({ "status": "completed", "acceptedCount": 2, "rejectedRowNumbers": [] })
    );

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/stock/Parts").to_request()).await;
    assert_eq!(json_body(resp).await["status"], "critical");
}

#[actix_web::test]
async fn test_import_malformed_row_returns_422_with_line() {
    let state = memory_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/stock/import?filename=inventory.csv")
        .insert_header(("Content-Type", "text/csv"))
        .set_payload(csv_file(&["Tools,10,2,20", "Parts,many,2,5"]))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(resp).await;
    assert_error_body(&body, 422, "MALFORMED_ROW");
    assert_eq!(body["error"]["line"], 3);

    // nothing from the rejected file was stored
    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/stock").to_request()).await;
    assert_eq!(json_body(resp).await, json!([]));
}

#[actix_web::test]
async fn test_import_bad_header_returns_422() {
    let state = memory_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/stock/import")
        .insert_header(("Content-Type", "text/csv"))
        .set_payload("name,qty\nTools,1\n")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_error_body(&json_body(resp).await, 422, "MALFORMED_HEADER");
}

#[actix_web::test]
async fn test_import_rejects_non_csv_upload() {
    let state = memory_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/stock/import")
        .insert_header(("Content-Type", "application/json"))
        .set_payload(csv_file(&["Tools,10,2,20"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/stock/import")
        .insert_header(("X-Filename", "inventory.xlsx"))
        .set_payload(csv_file(&["Tools,10,2,20"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_import_over_size_limit_returns_400() {
    let state = memory_state_with_import(warehouse::config::ImportConfig {
        max_upload_bytes: 32,
        ..Default::default()
    });
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/stock/import")
        .insert_header(("Content-Type", "text/csv"))
        .set_payload(csv_file(&["Tools,10,2,20"]))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_error_body(&json_body(resp).await, 400, "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_lenient_import_reports_rejected_rows() {
    let state = memory_state_with_import(lenient_import());
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/stock/import")
        .insert_header(("Content-Type", "text/csv"))
        .set_payload(csv_file(&["Tools,10,2,20", "Broken", "Parts,1,2,5"]))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        json_body(resp).await,
        json!({ "status": "completed_with_rejections", "acceptedCount": 2, "rejectedRowNumbers": [3] })
    );
}
