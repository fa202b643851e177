//! Produce catalog, scan history, shopping list and tips

pub mod catalog;
pub mod history;
pub mod shopping;
pub mod tips;

pub use catalog::{
    find_produce, produce_catalog, seasonal_produce, ExploreFilter, NutritionalInfo, ProduceCategory,
    ProduceItem,
};
pub use history::{search_scans, Freshness, HistoryStats, ScanRecord, TimeWindow};
pub use shopping::{ShoppingItem, ShoppingList, ShoppingProgress};
pub use tips::{random_tip, DAILY_TIPS};
