// src/agents/grinder_agent.rs

use super::agent_trait::Agent;
use super::config::{GRINDER_BASE_QTY, GRINDER_EXTRA_QTY_MAX, GRINDER_ITEM};
use crate::error::Result;
use crate::market::Market;
use crate::types::trade::{Side, TradeReport};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Farms a raw material off-screen and sells the whole haul every round.
/// Never buys.
pub struct GrinderAgent {
    pub id: usize,
    item: String,
    seed: u64,
    rng: StdRng,
}

impl GrinderAgent {
    /// The haul size is random, so the generator is seeded explicitly to keep
    /// runs reproducible.
    pub fn new(id: usize, seed: u64) -> Self {
        Self::with_item(id, GRINDER_ITEM, seed)
    }

    pub fn with_item<T: Into<String>>(id: usize, item: T, seed: u64) -> Self {
        Self {
            id,
            item: item.into(),
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for GrinderAgent {
    fn act(&mut self, market: &mut Market) -> Result<TradeReport> {
        let qty = GRINDER_BASE_QTY + self.rng.gen_range(0..=GRINDER_EXTRA_QTY_MAX);
        market.sell(&self.item, qty)?;
        Ok(TradeReport::single(Side::Sell, self.item.as_str(), qty))
    }

    fn get_id(&self) -> usize {
        self.id
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(GrinderAgent::with_item(self.id, self.item.clone(), self.seed))
    }
}
