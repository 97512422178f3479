// src/agents/agent_type.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentType {
    /// Farms ore and dumps it on the market every round.
    Grinder,
    /// Buys a potion now and then when it is not too pricey.
    Casual,
    /// Buys potions cheap, sells the whole stash once the price runs up.
    Speculator,
}
