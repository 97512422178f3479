// src/agents/casual_agent.rs

use super::agent_trait::Agent;
use super::config::{CASUAL_BUY_QTY, CASUAL_ITEM, CASUAL_PRICE_CEILING};
use crate::error::Result;
use crate::market::Market;
use crate::types::trade::{Side, TradeReport};

/// Picks up a single potion whenever the price is not crazy.
pub struct CasualAgent {
    pub id: usize,
}

impl CasualAgent {
    pub fn new(id: usize) -> Self {
        Self { id }
    }
}

impl Agent for CasualAgent {
    fn act(&mut self, market: &mut Market) -> Result<TradeReport> {
        if market.price(CASUAL_ITEM)? < CASUAL_PRICE_CEILING {
            market.buy(CASUAL_ITEM, CASUAL_BUY_QTY)?;
            return Ok(TradeReport::single(Side::Buy, CASUAL_ITEM, CASUAL_BUY_QTY));
        }
        Ok(TradeReport::new())
    }

    fn get_id(&self) -> usize {
        self.id
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(CasualAgent::new(self.id))
    }
}
