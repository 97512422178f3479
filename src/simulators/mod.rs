// src/simulators/mod.rs

pub mod accumulator;
pub mod market_trait;
pub mod simulation;
