use std::sync::Arc;

use actix_web::{http::header, web, HttpRequest, HttpResponse};
use futures_util::StreamExt;
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::inventory::services::{InventoryImportService, UploadHint};

pub const FILENAME_HEADER: &str = "X-Filename";

#[derive(Debug, Default, Deserialize)]
pub struct ImportQuery {
    pub filename: Option<String>,
}

/// Import a raw CSV body of stock levels
/// POST /api/stock/import
///
/// The body is streamed so oversized uploads are cut off at the configured
/// limit instead of being buffered whole.
pub async fn import_inventory_csv(
    req: HttpRequest,
    service: web::Data<Arc<InventoryImportService>>,
    query: web::Query<ImportQuery>,
    mut payload: web::Payload,
) -> Result<HttpResponse, AppError> {
    let filename = req
        .headers()
        .get(FILENAME_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .or_else(|| query.into_inner().filename);
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let hint = UploadHint::new(filename, content_type);
    hint.validate()?;

    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| AppError::validation(format!("Failed to read upload: {}", e)))?;
        service.check_upload_size(body.len() + chunk.len())?;
        body.extend_from_slice(&chunk);
    }

    let result = service.import_upload(&body, &hint).await?;

    Ok(HttpResponse::Created().json(result))
}
