// src/config.rs

//! Run-level knobs: how many rounds, which price rule, which RNG seed.

use crate::error::Result;
use crate::market::PriceRule;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ROUNDS: usize = 20;
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of rounds `Simulation::run` drives.
    pub rounds: usize,
    pub price_rule: PriceRule,
    /// Base seed handed to agents that need randomness. Each agent derives
    /// its own stream from this and its roster id.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            price_rule: PriceRule::default(),
            seed: DEFAULT_SEED,
        }
    }
}

impl SimulationConfig {
    /// Missing fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        self.price_rule.validate()
    }
}
