// src/items/definitions.rs
//! Static description of the tradeable goods.
//
//! The catalog is fixed for the lifetime of a market. Extend
//! `default_item_catalog()` when the bootstrap set of goods grows.

use crate::error::{MarketError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type ItemName = String;

/// The fixed set of goods a market trades, keyed by item name.
pub type Catalog = BTreeMap<ItemName, Item>;

/// Immutable facts about one good.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier within a catalog (e.g. "potion").
    pub name: ItemName,
    /// Opening price at time-zero of the simulation.
    pub base_price: f64,
}

impl Item {
    #[inline]
    pub fn new<T: Into<String>>(name: T, base_price: f64) -> Self {
        Self {
            name: name.into(),
            base_price,
        }
    }
}

/// Keys a list of items by name. Two items sharing a name is an error; the
/// map would otherwise silently keep only the last one.
pub fn catalog_from_items(items: Vec<Item>) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    for item in items {
        if catalog.contains_key(&item.name) {
            return Err(MarketError::InvalidCatalog(format!(
                "duplicate item name {:?}",
                item.name
            )));
        }
        catalog.insert(item.name.clone(), item);
    }
    Ok(catalog)
}

/// Parses a JSON array of `{ "name": ..., "base_price": ... }` objects.
pub fn catalog_from_json(json: &str) -> Result<Catalog> {
    let items: Vec<Item> = serde_json::from_str(json)?;
    catalog_from_items(items)
}

/// The goods available when the bazaar boots.
#[inline]
pub fn default_item_catalog() -> Catalog {
    [
        Item::new("gold", 1.0),
        Item::new("ore", 10.0),
        Item::new("potion", 25.0),
    ]
    .into_iter()
    .map(|item| (item.name.clone(), item))
    .collect()
}
