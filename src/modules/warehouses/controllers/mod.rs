pub mod warehouse_controller;

pub use warehouse_controller::configure;
