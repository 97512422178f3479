// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod agents;
pub mod config;
pub mod error;
pub mod items;
pub mod market;
pub mod simulators;
pub mod types;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `agents` ---
pub use agents::agent_trait::Agent;
pub use agents::agent_type::AgentType;
pub use agents::casual_agent::CasualAgent;
pub use agents::grinder_agent::GrinderAgent;
pub use agents::speculator_agent::SpeculatorAgent;

// --- From our `market` state ---
pub use market::{Inventory, Market, PriceRule, Prices, Signal};

// --- From `items` ---
pub use items::{Catalog, Item, catalog_from_items, catalog_from_json, default_item_catalog};

// --- From `simulators` ---
pub use simulators::accumulator::DemandSupply;
pub use simulators::market_trait::Marketable;
pub use simulators::simulation::{Simulation, run_simulation};

// --- From `types` ---
pub use types::trade::{Side, TradeRecord, TradeReport, WireReport};

// --- Ambient ---
pub use config::SimulationConfig;
pub use error::{MarketError, Result};
