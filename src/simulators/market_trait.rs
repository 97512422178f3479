// src/simulators/market_trait.rs

use crate::error::Result;
use crate::market::Prices;

/// A trait for any object that can drive a market forward in discrete rounds.
/// This allows for a pluggable simulation engine.
pub trait Marketable {
    /// Advances the simulation by one round and returns the new prices.
    fn step(&mut self) -> Result<Prices>;

    /// Returns the current prices without advancing the simulation.
    fn current_prices(&self) -> &Prices;

    /// Resets the simulation to its initial state.
    fn reset(&mut self);
}
