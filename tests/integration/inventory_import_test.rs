// Integration tests for CSV inventory import
//
// Drives the import service and the stock endpoints together over the
// in-memory store, the way an operator would: upload, correct, re-upload.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{http::StatusCode, test, App};
use serde_json::json;

use helpers::*;
use warehouse::config::ImportConfig;
use warehouse::core::AppError;
use warehouse::inventory::{ImportStatus, UploadHint};
use warehouse::middleware::RequestId;

#[tokio::test]
async fn test_reimport_overwrites_existing_categories() {
    let state = memory_state();
    let hint = UploadHint::new(Some("inventory.csv".into()), Some("text/csv".into()));

    let first = state
        .inventory
        .import_upload(csv_file(&["Tools,10,2,20", "Parts,4,1,8"]).as_bytes(), &hint)
        .await
        .unwrap();
    assert_eq!(first.accepted_count, 2);

    let second = state
        .inventory
        .import_upload(csv_file(&["Tools,30,2,20", "Paint,0,1,3"]).as_bytes(), &hint)
        .await
        .unwrap();
    assert_eq!(second.status, ImportStatus::Completed);

    let levels = state.stock.list().await.unwrap();
    let summary: Vec<(String, u32)> = levels
        .into_iter()
        .map(|level| (level.category, level.current_stock))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Paint".to_string(), 0),
            ("Parts".to_string(), 4),
            ("Tools".to_string(), 30),
        ]
    );
}

#[tokio::test]
async fn test_import_updates_levels_created_through_api() {
    let state = memory_state();
    state
        .stock
        .create(serde_json::from_value(stock_payload("Tools", 1, 2, 20)).unwrap())
        .await
        .unwrap();

    state
        .inventory
        .import_upload(csv_file(&["Tools,50,2,20"]).as_bytes(), &UploadHint::default())
        .await
        .unwrap();

    assert_eq!(state.stock.get("Tools".to_string()).await.unwrap().current_stock, 50);
}

#[tokio::test]
async fn test_semicolon_files_with_configured_delimiter() {
    let state = memory_state_with_import(ImportConfig {
        delimiter: b';',
        ..ImportConfig::default()
    });

    let file = "category;currentStock;minStock;optimalStock\nTools;5;1;9\n";
    let result = state
        .inventory
        .import_upload(file.as_bytes(), &UploadHint::default())
        .await
        .unwrap();
    assert_eq!(result.accepted_count, 1);

    // a comma file no longer has the expected header
    let err = state
        .inventory
        .import_upload(csv_file(&["Tools,5,1,9"]).as_bytes(), &UploadHint::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::MalformedHeader(_)));
}

#[tokio::test]
async fn test_empty_file_is_malformed_header() {
    let state = memory_state();
    let err = state
        .inventory
        .import_upload(b"", &UploadHint::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::MalformedHeader(_)));
}

#[actix_web::test]
async fn test_upload_then_query_through_http() {
    let state = memory_state();
    let app = test::init_service(
        App::new()
            .wrap(RequestId)
            .configure(|cfg| state.configure(cfg)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/stock/import")
        .insert_header(("Content-Type", "text/csv; charset=utf-8"))
        .insert_header(("X-Request-ID", "import-1"))
        .set_payload("\u{feff}Category,CurrentStock,MinStock,OptimalStock\r\nTools, 3 ,5,20\r\n\r\nParts,9,1,5\r\n")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "import-1");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/stock").to_request()).await;
    assert_eq!(
        json_body(resp).await,
        json!([
            { "category": "Parts", "currentStock": 9, "minStock": 1, "optimalStock": 5, "status": "ok" },
            { "category": "Tools", "currentStock": 3, "minStock": 5, "optimalStock": 20, "status": "critical" }
        ])
    );
}
