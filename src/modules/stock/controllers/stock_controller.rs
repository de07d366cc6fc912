use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::inventory::controllers::import_inventory_csv;
use crate::modules::stock::models::{StockLevelCreateRequest, StockLevelUpdateRequest};
use crate::modules::stock::services::StockService;

/// POST /api/stock
pub async fn create_stock_level(
    service: web::Data<Arc<StockService>>,
    request: web::Json<StockLevelCreateRequest>,
) -> Result<HttpResponse, AppError> {
    let level = service.create(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(level))
}

/// GET /api/stock
pub async fn list_stock_levels(
    service: web::Data<Arc<StockService>>,
) -> Result<HttpResponse, AppError> {
    let levels = service.list().await?;

    Ok(HttpResponse::Ok().json(levels))
}

/// GET /api/stock/{category}
pub async fn get_stock_level(
    service: web::Data<Arc<StockService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let level = service.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(level))
}

/// Replace the counters of an existing category
/// PUT /api/stock/{category}
pub async fn update_stock_level(
    service: web::Data<Arc<StockService>>,
    path: web::Path<String>,
    request: web::Json<StockLevelUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let level = service
        .update(path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(level))
}

/// DELETE /api/stock/{category}
pub async fn delete_stock_level(
    service: web::Data<Arc<StockService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure stock routes, including the CSV import endpoint
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/stock")
            .route("", web::post().to(create_stock_level))
            .route("", web::get().to(list_stock_levels))
            .route("/import", web::post().to(import_inventory_csv))
            .route("/{category}", web::get().to(get_stock_level))
            .route("/{category}", web::put().to(update_stock_level))
            .route("/{category}", web::delete().to(delete_stock_level)),
    );
}
