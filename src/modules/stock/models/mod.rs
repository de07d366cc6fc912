pub mod stock_level;

pub use stock_level::{
    StockLevel, StockLevelCreateRequest, StockLevelResponse, StockLevelUpdateRequest, StockStatus,
};
