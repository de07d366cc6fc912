pub mod stock_controller;

pub use stock_controller::configure;
