pub mod auth;
pub mod health;
pub mod inventory;
pub mod stock;
pub mod users;
pub mod warehouses;

use actix_web::web;

/// Mount every route group
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure)
        .configure(auth::configure)
        .configure(warehouses::configure)
        .configure(stock::configure);
}
