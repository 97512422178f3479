// src/items/mod.rs
// ----------------
pub mod definitions;

// Re-export the most useful items so callers don’t have to dive
// another level down the path.
pub use definitions::{
    Catalog, Item, ItemName, catalog_from_items, catalog_from_json, default_item_catalog,
};
