// src/simulators/simulation.rs

use super::accumulator::DemandSupply;
use super::market_trait::Marketable;
use crate::agents::agent_trait::Agent;
use crate::agents::agent_type::AgentType;
use crate::agents::casual_agent::CasualAgent;
use crate::agents::grinder_agent::GrinderAgent;
use crate::agents::speculator_agent::SpeculatorAgent;
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::items::Catalog;
use crate::market::{Market, Prices};
use log::{debug, info};

/// This is the main simulation engine. It owns the shared market and the
/// participants (the agents), and runs the round loop.
pub struct Simulation {
    market: Market,
    agents: Vec<Box<dyn Agent>>,
    config: SimulationConfig,
    round: usize,
    // Snapshot of the freshly built market, used for resetting.
    initial_market: Market,
}

impl Simulation {
    /// Builds the market from `catalog` with the configured price rule. Agents
    /// act in the order given here, every round.
    pub fn new(
        catalog: Catalog,
        agents: Vec<Box<dyn Agent>>,
        config: SimulationConfig,
    ) -> Result<Self> {
        config.validate()?;
        let market = Market::with_rule(catalog, config.price_rule)?;
        Ok(Self {
            initial_market: market.clone(),
            market,
            agents,
            config,
            round: 0,
        })
    }

    /// Builds one agent per requested type, ids assigned in roster order.
    pub fn from_types(
        catalog: Catalog,
        participant_types: &[AgentType],
        config: SimulationConfig,
    ) -> Result<Self> {
        let agents = participant_types
            .iter()
            .enumerate()
            .map(|(id, agent_type)| Self::create_agent_from_type(*agent_type, id, config.seed))
            .collect();
        Self::new(catalog, agents, config)
    }

    // Private helper to create an agent from an enum variant.
    fn create_agent_from_type(agent_type: AgentType, id: usize, seed: u64) -> Box<dyn Agent> {
        match agent_type {
            AgentType::Grinder => Box::new(GrinderAgent::new(id, seed.wrapping_add(id as u64))),
            AgentType::Casual => Box::new(CasualAgent::new(id)),
            AgentType::Speculator => Box::new(SpeculatorAgent::new(id)),
        }
    }

    /// Drives `config.rounds` rounds from the current state and returns the
    /// final prices. The first failing round aborts the run.
    pub fn run(&mut self) -> Result<Prices> {
        for _ in 0..self.config.rounds {
            self.step()?;
        }
        info!(
            "run finished after {} rounds with {} agents: {:?}",
            self.round,
            self.agents.len(),
            self.market.prices()
        );
        Ok(self.market.prices().clone())
    }

    pub fn market(&self) -> &Market {
        &self.market
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Rounds completed so far.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }
}

impl Marketable for Simulation {
    /// One round: every agent acts once in roster order, their reports are
    /// folded into demand/supply, and the market ticks.
    fn step(&mut self) -> Result<Prices> {
        let mut signal = DemandSupply::new();
        for agent in self.agents.iter_mut() {
            let report = agent.act(&mut self.market)?;
            signal.fold(&report, &self.market)?;
        }
        debug!(
            "round {}: demand {:?} supply {:?}",
            self.round, signal.demand, signal.supply
        );

        self.market.tick(&signal.demand, &signal.supply)?;
        self.round += 1;
        Ok(self.market.prices().clone())
    }

    fn current_prices(&self) -> &Prices {
        self.market.prices()
    }

    /// Restores the opening market and swaps every agent for a fresh copy.
    fn reset(&mut self) {
        self.market = self.initial_market.clone();
        self.agents = self.agents.iter().map(|a| a.clone_agent()).collect();
        self.round = 0;
    }
}

/// Convenience wrapper: build a simulation and run it to completion.
pub fn run_simulation(
    catalog: Catalog,
    agents: Vec<Box<dyn Agent>>,
    config: SimulationConfig,
) -> Result<Prices> {
    Simulation::new(catalog, agents, config)?.run()
}
