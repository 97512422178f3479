// src/agents/mod.rs

pub mod agent_trait;
pub mod agent_type;
pub mod casual_agent;
pub mod config;
pub mod grinder_agent;
pub mod speculator_agent;
