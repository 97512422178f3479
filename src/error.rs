// src/error.rs

use thiserror::Error;

/// Everything that can abort a market run. Nothing here is recovered internally:
/// the first error halts the simulation and is handed back to the caller.
#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid price rule: {0}")]
    InvalidPriceRule(String),

    #[error("Malformed trade report key: {0:?}")]
    MalformedReportKey(String),

    #[error("Invalid signal for {item}: {value}")]
    InvalidSignal { item: String, value: f64 },

    #[error("Price overflow for {item}")]
    PriceOverflow { item: String },

    #[error("Inventory overflow for {0}")]
    InventoryOverflow(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MarketError>;
