// src/agents/agent_trait.rs

use crate::error::Result;
use crate::market::Market;
use crate::types::trade::TradeReport;

/// The capability every participant strategy implements.
///
/// Agents act one at a time against the shared market. Any `buy`/`sell` an
/// agent performs is visible to the agents after it in the same round.
pub trait Agent {
    // === Core Decision-Making ===
    /// Observe the market, trade against it, and report what was done.
    /// An empty report means the agent sat the round out.
    fn act(&mut self, market: &mut Market) -> Result<TradeReport>;

    // === Getters & Housekeeping ===
    fn get_id(&self) -> usize;
    /// A fresh copy of this agent in its initial state, used when a
    /// simulation is reset.
    fn clone_agent(&self) -> Box<dyn Agent>;
}
