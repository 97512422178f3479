// src/market.rs

use crate::error::{MarketError, Result};
use crate::items::{Catalog, Item, ItemName};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current price per item.
pub type Prices = BTreeMap<ItemName, f64>;
/// Net position per item. Negative is allowed.
pub type Inventory = BTreeMap<ItemName, i64>;
/// Aggregate buy or sell pressure per item for one round.
pub type Signal = BTreeMap<ItemName, f64>;

pub const DEFAULT_PRICE_COEFFICIENT: f64 = 0.01;
pub const DEFAULT_PRICE_FLOOR: f64 = 0.01;

/// The proportional-control price rule. Fixed for the lifetime of a market.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceRule {
    /// Sensitivity of price to the demand/supply imbalance.
    pub k: f64,
    /// Hard lower bound on every price after a tick.
    pub floor: f64,
}

impl Default for PriceRule {
    fn default() -> Self {
        Self {
            k: DEFAULT_PRICE_COEFFICIENT,
            floor: DEFAULT_PRICE_FLOOR,
        }
    }
}

impl PriceRule {
    pub fn validate(&self) -> Result<()> {
        if !self.k.is_finite() || self.k < 0.0 {
            return Err(MarketError::InvalidPriceRule(format!(
                "coefficient must be finite and non-negative, got {}",
                self.k
            )));
        }
        if !self.floor.is_finite() || self.floor <= 0.0 {
            return Err(MarketError::InvalidPriceRule(format!(
                "floor must be finite and positive, got {}",
                self.floor
            )));
        }
        Ok(())
    }

    /// `max(floor, price * (1 + k * (demand - supply)))`
    #[inline]
    pub fn apply(&self, price: f64, demand: f64, supply: f64) -> f64 {
        let delta = self.k * (demand - supply);
        (price * (1.0 + delta)).max(self.floor)
    }
}

/// Single source of truth for prices and inventory.
///
/// `prices` and `inventory` always carry exactly the catalog's keys; every
/// lookup for a name outside the catalog is an `UnknownItem` error.
#[derive(Debug, Clone)]
pub struct Market {
    items: Catalog,
    prices: Prices,
    inventory: Inventory,
    rule: PriceRule,
}

impl Market {
    /// Builds a market with the default price rule.
    pub fn new(items: Catalog) -> Result<Self> {
        Self::with_rule(items, PriceRule::default())
    }

    pub fn with_rule(items: Catalog, rule: PriceRule) -> Result<Self> {
        rule.validate()?;
        if items.is_empty() {
            return Err(MarketError::InvalidCatalog("catalog is empty".to_string()));
        }
        for (name, item) in &items {
            Self::check_item(name, item, &rule)?;
        }

        let prices = items
            .iter()
            .map(|(name, item)| (name.clone(), item.base_price))
            .collect();
        let inventory = items.keys().map(|name| (name.clone(), 0)).collect();

        Ok(Self {
            items,
            prices,
            inventory,
            rule,
        })
    }

    fn check_item(name: &str, item: &Item, rule: &PriceRule) -> Result<()> {
        if name != item.name {
            return Err(MarketError::InvalidCatalog(format!(
                "key {:?} does not match item name {:?}",
                name, item.name
            )));
        }
        if !item.base_price.is_finite() || item.base_price <= 0.0 {
            return Err(MarketError::InvalidCatalog(format!(
                "base price of {} must be a finite positive number, got {}",
                name, item.base_price
            )));
        }
        // Opening prices have to respect the floor like every later price.
        if item.base_price < rule.floor {
            return Err(MarketError::InvalidCatalog(format!(
                "base price of {} ({}) is below the price floor ({})",
                name, item.base_price, rule.floor
            )));
        }
        Ok(())
    }

    // === Mutators ===

    /// Takes `qty` units out of the market's inventory.
    pub fn buy(&mut self, item: &str, qty: u64) -> Result<()> {
        let slot = self.inventory_slot(item)?;
        *slot = slot
            .checked_sub_unsigned(qty)
            .ok_or_else(|| MarketError::InventoryOverflow(item.to_string()))?;
        debug!("buy {} x{} -> inventory {}", item, qty, slot);
        Ok(())
    }

    /// Puts `qty` units into the market's inventory.
    pub fn sell(&mut self, item: &str, qty: u64) -> Result<()> {
        let slot = self.inventory_slot(item)?;
        *slot = slot
            .checked_add_unsigned(qty)
            .ok_or_else(|| MarketError::InventoryOverflow(item.to_string()))?;
        debug!("sell {} x{} -> inventory {}", item, qty, slot);
        Ok(())
    }

    /// Applies the price rule to every catalog item. Items missing from both
    /// maps see zero imbalance. Inputs and every resulting price are checked
    /// before any price moves, so a rejected tick leaves the market untouched.
    pub fn tick(&mut self, demand: &Signal, supply: &Signal) -> Result<()> {
        for signal in [demand, supply] {
            for (name, &value) in signal {
                if !self.items.contains_key(name) {
                    warn!("ignoring signal for item outside the catalog: {}", name);
                    continue;
                }
                if !value.is_finite() || value < 0.0 {
                    return Err(MarketError::InvalidSignal {
                        item: name.clone(),
                        value,
                    });
                }
            }
        }

        let mut next_prices = Vec::with_capacity(self.prices.len());
        for (name, &price) in &self.prices {
            let d = demand.get(name).copied().unwrap_or(0.0);
            let s = supply.get(name).copied().unwrap_or(0.0);
            let next = self.rule.apply(price, d, s);
            if !next.is_finite() {
                return Err(MarketError::PriceOverflow { item: name.clone() });
            }
            trace!("tick {}: {:.4} -> {:.4} (demand {}, supply {})", name, price, next, d, s);
            next_prices.push(next);
        }

        for (price, next) in self.prices.values_mut().zip(next_prices) {
            *price = next;
        }
        Ok(())
    }

    // === Getters ===

    pub fn items(&self) -> &Catalog {
        &self.items
    }

    pub fn prices(&self) -> &Prices {
        &self.prices
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn rule(&self) -> PriceRule {
        self.rule
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    pub fn price(&self, item: &str) -> Result<f64> {
        self.prices
            .get(item)
            .copied()
            .ok_or_else(|| MarketError::UnknownItem(item.to_string()))
    }

    pub fn inventory_of(&self, item: &str) -> Result<i64> {
        self.inventory
            .get(item)
            .copied()
            .ok_or_else(|| MarketError::UnknownItem(item.to_string()))
    }

    fn inventory_slot(&mut self, item: &str) -> Result<&mut i64> {
        self.inventory
            .get_mut(item)
            .ok_or_else(|| MarketError::UnknownItem(item.to_string()))
    }
}
