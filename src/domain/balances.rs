use super::money::Balance;
use super::participant::Participant;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Net positions keyed by participant, in insertion order.
///
/// The insertion index doubles as the tie-break key when two balances are
/// equal, so iteration order is part of the contract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetBalances {
    entries: Vec<(Participant, Balance)>,
    index: HashMap<Participant, usize>,
}

impl NetBalances {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts every roster member at zero. Repeated names are kept once.
    pub fn with_roster(roster: &[Participant]) -> Self {
        let mut balances = Self::new();
        for participant in roster {
            balances.entry_mut(participant);
        }
        balances
    }

    fn entry_mut(&mut self, participant: &Participant) -> &mut Balance {
        let idx = match self.index.get(participant) {
            Some(&idx) => idx,
            None => {
                self.entries.push((participant.clone(), Balance::ZERO));
                self.index.insert(participant.clone(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    pub fn credit(&mut self, participant: &Participant, amount: Decimal) {
        *self.entry_mut(participant) += amount;
    }

    pub fn debit(&mut self, participant: &Participant, amount: Decimal) {
        *self.entry_mut(participant) -= amount;
    }

    pub fn contains(&self, participant: &str) -> bool {
        self.index.contains_key(participant)
    }

    pub fn get(&self, participant: &str) -> Option<Balance> {
        self.index.get(participant).map(|&idx| self.entries[idx].1)
    }

    /// Position of the participant in insertion order.
    pub fn rank(&self, participant: &str) -> Option<usize> {
        self.index.get(participant).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Participant, Balance)> {
        self.entries.iter().map(|(p, b)| (p, *b))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every balance. Zero within [`super::money::EPSILON`] for any
    /// balanced set of expenses.
    pub fn total(&self) -> Balance {
        self.entries
            .iter()
            .fold(Balance::ZERO, |acc, (_, balance)| acc + *balance)
    }

    /// Books a transfer: the debtor pays, the creditor is paid.
    pub fn apply_transfer(&mut self, from: &Participant, to: &Participant, amount: Decimal) {
        self.credit(from, amount);
        self.debit(to, amount);
    }
}
