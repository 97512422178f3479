// src/simulators/accumulator.rs

use crate::error::{MarketError, Result};
use crate::market::{Market, Signal};
use crate::types::trade::{Side, TradeReport, WireReport};

/// One round's aggregate buy and sell pressure, per item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemandSupply {
    pub demand: Signal,
    pub supply: Signal,
}

impl DemandSupply {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one agent's report. Buys count toward demand, sells toward supply.
    /// Every item must exist in the market's catalog; the report is checked
    /// in full before anything is added.
    pub fn fold(&mut self, report: &TradeReport, market: &Market) -> Result<()> {
        if let Some(unknown) = report.records().iter().find(|r| !market.contains(&r.item)) {
            return Err(MarketError::UnknownItem(unknown.item.clone()));
        }
        for record in report {
            let bucket = match record.side {
                Side::Buy => &mut self.demand,
                Side::Sell => &mut self.supply,
            };
            *bucket.entry(record.item.clone()).or_insert(0.0) += record.quantity as f64;
        }
        Ok(())
    }

    /// Adds a report in its string-keyed form.
    pub fn fold_wire(&mut self, wire: &WireReport, market: &Market) -> Result<()> {
        let report = TradeReport::from_wire(wire)?;
        self.fold(&report, market)
    }

    pub fn is_empty(&self) -> bool {
        self.demand.is_empty() && self.supply.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::default_item_catalog;
    use crate::types::trade::TradeRecord;

    fn market() -> Market {
        Market::new(default_item_catalog()).unwrap()
    }

    fn wire(entries: &[(&str, u64)]) -> WireReport {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_folds_reports_from_several_agents() {
        // Arrange
        let market = market();
        let mut acc = DemandSupply::new();

        // Act
        acc.fold_wire(&wire(&[("sell_ore", 6)]), &market).unwrap();
        acc.fold_wire(&wire(&[("buy_potion", 1)]), &market).unwrap();
        acc.fold_wire(&wire(&[("buy_potion", 2)]), &market).unwrap();
        acc.fold_wire(&wire(&[("sell_potion", 4), ("buy_ore", 1)]), &market)
            .unwrap();

        // Assert
        assert_eq!(acc.demand.get("potion"), Some(&3.0));
        assert_eq!(acc.demand.get("ore"), Some(&1.0));
        assert_eq!(acc.supply.get("ore"), Some(&6.0));
        assert_eq!(acc.supply.get("potion"), Some(&4.0));
        assert!(!acc.demand.contains_key("gold"));
    }

    #[test]
    fn test_empty_reports_contribute_nothing() {
        let market = market();
        let mut acc = DemandSupply::new();
        acc.fold(&TradeReport::new(), &market).unwrap();
        acc.fold_wire(&WireReport::new(), &market).unwrap();
        assert!(acc.is_empty());
    }

    #[test]
    fn test_malformed_keys_fail_fast() {
        let market = market();
        let mut acc = DemandSupply::new();
        let err = acc
            .fold_wire(&wire(&[("buy_potion", 1), ("steal_potion", 9)]), &market)
            .unwrap_err();
        assert!(matches!(err, MarketError::MalformedReportKey(ref k) if k == "steal_potion"));
        assert!(acc.is_empty());
    }

    #[test]
    fn test_wire_key_naming_an_unknown_item_is_rejected() {
        // Arrange
        let market = market();
        let mut acc = DemandSupply::new();

        // Act
        let err = acc
            .fold_wire(&wire(&[("buy_dragon", 3), ("buy_potion", 1)]), &market)
            .unwrap_err();

        // Assert
        assert!(matches!(err, MarketError::UnknownItem(ref name) if name == "dragon"));
        assert!(acc.is_empty());
    }

    #[test]
    fn test_unknown_items_fail_without_partial_fold() {
        let market = market();
        let mut acc = DemandSupply::new();
        let report: TradeReport = vec![
            TradeRecord::new(Side::Buy, "potion", 1),
            TradeRecord::new(Side::Sell, "dragon", 1),
        ]
        .into_iter()
        .collect();

        assert!(matches!(
            acc.fold(&report, &market),
            Err(MarketError::UnknownItem(ref name)) if name == "dragon"
        ));
        assert!(acc.is_empty());
    }
}
