// src/agents/speculator_agent.rs

use super::agent_trait::Agent;
use super::config::{
    SPECULATOR_BUY_BELOW, SPECULATOR_BUY_QTY, SPECULATOR_ITEM, SPECULATOR_SELL_ABOVE,
};
use crate::error::Result;
use crate::market::Market;
use crate::types::trade::{Side, TradeReport};

/// Buys cheap, holds, and dumps the whole stash once the price runs up.
///
/// The stash is private to the agent; the market only sees the inventory
/// deltas from each buy/sell.
pub struct SpeculatorAgent {
    pub id: usize,
    stock: u64,
}

impl SpeculatorAgent {
    pub fn new(id: usize) -> Self {
        Self { id, stock: 0 }
    }

    /// Units currently held.
    pub fn stock(&self) -> u64 {
        self.stock
    }
}

impl Agent for SpeculatorAgent {
    fn act(&mut self, market: &mut Market) -> Result<TradeReport> {
        let price = market.price(SPECULATOR_ITEM)?;

        if price < SPECULATOR_BUY_BELOW {
            market.buy(SPECULATOR_ITEM, SPECULATOR_BUY_QTY)?;
            self.stock += SPECULATOR_BUY_QTY;
            return Ok(TradeReport::single(Side::Buy, SPECULATOR_ITEM, SPECULATOR_BUY_QTY));
        }

        if price > SPECULATOR_SELL_ABOVE && self.stock > 0 {
            let sold = self.stock;
            market.sell(SPECULATOR_ITEM, sold)?;
            self.stock = 0;
            return Ok(TradeReport::single(Side::Sell, SPECULATOR_ITEM, sold));
        }

        Ok(TradeReport::new())
    }

    fn get_id(&self) -> usize {
        self.id
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(SpeculatorAgent::new(self.id))
    }
}
