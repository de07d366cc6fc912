// Shared test helpers
//
// Included by each test target with:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//
// Contract and import tests run against the in-memory record stores; only
// mysql_repository_test needs a live database (TEST_DATABASE_URL).

#![allow(dead_code, unused_imports)]


pub use test_app::*;
pub use test_data::*;
pub use test_database::*;
