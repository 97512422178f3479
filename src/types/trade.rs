// src/types/trade.rs

use crate::error::{MarketError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The string-keyed form of a trade report, e.g. `"buy_potion" -> 2`.
/// Pluggable agents written against the old format exchange these.
pub type WireReport = BTreeMap<String, u64>;

const WIRE_DELIMITER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(MarketError::MalformedReportKey(other.to_string())),
        }
    }
}

/// One trade an agent executed against the market during its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRecord {
    pub side: Side,
    pub item: String,
    pub quantity: u64,
}

impl TradeRecord {
    pub fn new<T: Into<String>>(side: Side, item: T, quantity: u64) -> Self {
        Self {
            side,
            item: item.into(),
            quantity,
        }
    }

    /// `"<buy|sell>_<item>"`
    pub fn wire_key(&self) -> String {
        format!("{}{}{}", self.side, WIRE_DELIMITER, self.item)
    }

    /// Splits a wire key on its first underscore. The action must be exactly
    /// `buy` or `sell` and the item a single non-empty word.
    pub fn parse_wire_key(key: &str) -> Result<(Side, String)> {
        let malformed = || MarketError::MalformedReportKey(key.to_string());
        let (action, item) = key.split_once(WIRE_DELIMITER).ok_or_else(malformed)?;
        if item.is_empty() || item.contains(WIRE_DELIMITER) {
            return Err(malformed());
        }
        let side = action.parse::<Side>().map_err(|_| malformed())?;
        Ok((side, item.to_string()))
    }
}

/// Everything one agent did in one round. Empty means "no action".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeReport {
    records: Vec<TradeRecord>,
}

impl TradeReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single<T: Into<String>>(side: Side, item: T, quantity: u64) -> Self {
        let mut report = Self::new();
        report.push(TradeRecord::new(side, item, quantity));
        report
    }

    pub fn push(&mut self, record: TradeRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Renders the report in the string-keyed format. Records sharing a key
    /// are summed.
    pub fn to_wire(&self) -> WireReport {
        let mut wire = WireReport::new();
        for record in &self.records {
            let slot = wire.entry(record.wire_key()).or_insert(0);
            *slot = slot.saturating_add(record.quantity);
        }
        wire
    }

    /// Parses a string-keyed report. A key that does not match the
    /// `action_item` shape fails the whole report rather than being dropped.
    pub fn from_wire(wire: &WireReport) -> Result<Self> {
        let mut report = Self::new();
        for (key, &quantity) in wire {
            let (side, item) = TradeRecord::parse_wire_key(key)?;
            report.push(TradeRecord::new(side, item, quantity));
        }
        Ok(report)
    }
}

impl<'a> IntoIterator for &'a TradeReport {
    type Item = &'a TradeRecord;
    type IntoIter = std::slice::Iter<'a, TradeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<TradeRecord> for TradeReport {
    fn from_iter<I: IntoIterator<Item = TradeRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
