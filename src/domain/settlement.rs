use super::participant::Participant;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A proposed transfer from a net debtor to a net creditor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: Participant,
    pub to: Participant,
    pub amount: Decimal,
}

impl Settlement {
    pub fn new(from: impl Into<Participant>, to: impl Into<Participant>, amount: Decimal) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount: amount.normalize(),
        }
    }

    /// The `from|to|amount` identity used to remember paid debts.
    ///
    /// Identity is the triple, not a generated id: a later debt that happens to
    /// have the same parties and amount is indistinguishable from a paid one.
    pub fn key(&self) -> SettlementKey {
        SettlementKey(format!(
            "{}|{}|{}",
            self.from,
            self.to,
            self.amount.normalize()
        ))
    }

    pub fn involves(&self, who: &str) -> bool {
        self.from == who || self.to == who
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.from, self.to, self.amount.normalize())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettlementKey(String);

impl SettlementKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SettlementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keys of settlements already marked as paid within one context.
///
/// Append-only: there is no way to unmark a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettledSet {
    keys: Vec<SettlementKey>,
}

impl SettledSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `key`. Returns `false` if it was already present.
    pub fn insert(&mut self, key: SettlementKey) -> bool {
        if self.contains(&key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    pub fn contains(&self, key: &SettlementKey) -> bool {
        self.keys.contains(key)
    }

    pub fn is_paid(&self, settlement: &Settlement) -> bool {
        self.contains(&settlement.key())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SettlementKey> {
        self.keys.iter()
    }
}
