// src/types/mod.rs

pub mod trade;

pub use trade::{Side, TradeRecord, TradeReport, WireReport};
