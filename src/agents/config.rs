// src/agents/config.rs

//! A centralized place for tuning agent behavior parameters.

// --- GrinderAgent ---
// Sells whatever it farmed this round. Lot size is base plus a random bump.
pub const GRINDER_ITEM: &str = "ore";
pub const GRINDER_BASE_QTY: u64 = 5;
pub const GRINDER_EXTRA_QTY_MAX: u64 = 3;

// --- CasualAgent ---
pub const CASUAL_ITEM: &str = "potion";
pub const CASUAL_BUY_QTY: u64 = 1;
pub const CASUAL_PRICE_CEILING: f64 = 35.0; // Won't pay this much or more

// --- SpeculatorAgent ---
pub const SPECULATOR_ITEM: &str = "potion";
pub const SPECULATOR_BUY_QTY: u64 = 2;
pub const SPECULATOR_BUY_BELOW: f64 = 22.0;
pub const SPECULATOR_SELL_ABOVE: f64 = 30.0;
