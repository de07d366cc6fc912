// Property-based tests for the derived stock status
//
// critical  <=> current <= min
// low_stock <=> min < current < optimal
// ok        <=> current >= optimal and current > min

use proptest::prelude::*;

use warehouse::stock::{StockLevel, StockLevelResponse, StockStatus};

proptest! {
    #[test]
    fn test_status_matches_thresholds(current in 0u32..10_000, min in 0u32..10_000, optimal in 0u32..10_000) {
        let status = StockStatus::evaluate(current, min, optimal);

        let expected = if current <= min {
            StockStatus::Critical
        } else if current < optimal {
            StockStatus::LowStock
        } else {
            StockStatus::Ok
        };
        prop_assert_eq!(status, expected);
    }

    #[test]
    fn test_restocking_never_worsens_status(current in 0u32..10_000, extra in 0u32..10_000, min in 0u32..10_000, optimal in 0u32..10_000) {
        let rank = |status: StockStatus| match status {
            StockStatus::Critical => 0,
            StockStatus::LowStock => 1,
            StockStatus::Ok => 2,
        };

        let before = StockStatus::evaluate(current, min, optimal);
        let after = StockStatus::evaluate(current + extra, min, optimal);

        prop_assert!(rank(after) >= rank(before), "{:?} -> {:?}", before, after);
    }

    #[test]
    fn test_response_carries_evaluated_status(current in any::<u32>(), min in any::<u32>(), optimal in any::<u32>()) {
        let level = StockLevel {
            category: "Tools".to_string(),
            current_stock: current,
            min_stock: min,
            optimal_stock: optimal,
        };

        let response = StockLevelResponse::from(level.clone());

        prop_assert_eq!(response.status, level.status());
        prop_assert_eq!(response.current_stock, current);
    }
}

#[test]
fn test_boundaries() {
    assert_eq!(StockStatus::evaluate(0, 0, 0), StockStatus::Critical);
    assert_eq!(StockStatus::evaluate(5, 5, 10), StockStatus::Critical);
    assert_eq!(StockStatus::evaluate(6, 5, 10), StockStatus::LowStock);
    assert_eq!(StockStatus::evaluate(10, 5, 10), StockStatus::Ok);
    // optimal below min: anything above min is ok
    assert_eq!(StockStatus::evaluate(4, 3, 1), StockStatus::Ok);
}

#[test]
fn test_status_wire_names() {
    assert_eq!(serde_json::to_value(StockStatus::LowStock).unwrap(), "low_stock");
    assert_eq!(StockStatus::Critical.to_string(), "critical");
}
