pub mod inventory_import_controller;

pub use inventory_import_controller::{import_inventory_csv, ImportQuery, FILENAME_HEADER};
