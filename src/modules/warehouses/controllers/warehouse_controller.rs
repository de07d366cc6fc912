use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::warehouses::models::{WarehouseCreateRequest, WarehouseUpdateRequest};
use crate::modules::warehouses::services::WarehouseService;

/// Create a new warehouse
/// POST /api/warehouses
pub async fn create_warehouse(
    service: web::Data<Arc<WarehouseService>>,
    request: web::Json<WarehouseCreateRequest>,
) -> Result<HttpResponse, AppError> {
    let warehouse = service.create(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(warehouse))
}

/// List all warehouses
/// GET /api/warehouses
pub async fn list_warehouses(
    service: web::Data<Arc<WarehouseService>>,
) -> Result<HttpResponse, AppError> {
    let warehouses = service.list().await?;

    Ok(HttpResponse::Ok().json(warehouses))
}

/// GET /api/warehouses/{id}
pub async fn get_warehouse(
    service: web::Data<Arc<WarehouseService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let warehouse = service.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(warehouse))
}

/// GET /api/warehouses/code/{code}
pub async fn get_warehouse_by_code(
    service: web::Data<Arc<WarehouseService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let warehouse = service.get_by_code(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(warehouse))
}

/// Update a warehouse; omitted fields keep their value
/// PUT /api/warehouses/{id}
pub async fn update_warehouse(
    service: web::Data<Arc<WarehouseService>>,
    path: web::Path<i64>,
    request: web::Json<WarehouseUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let warehouse = service
        .update(path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(warehouse))
}

/// DELETE /api/warehouses/{id}
pub async fn delete_warehouse(
    service: web::Data<Arc<WarehouseService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure warehouse routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/warehouses")
            .route("", web::post().to(create_warehouse))
            .route("", web::get().to(list_warehouses))
            .route("/code/{code}", web::get().to(get_warehouse_by_code))
            .route("/{id}", web::get().to(get_warehouse))
            .route("/{id}", web::put().to(update_warehouse))
            .route("/{id}", web::delete().to(delete_warehouse)),
    );
}
