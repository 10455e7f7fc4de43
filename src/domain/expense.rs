use super::participant::Participant;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A bill paid by one participant and split evenly across `involved`.
///
/// `amount` is not validated here. A negative amount simply inverts the
/// direction of the debt it produces; rejecting it belongs to whoever builds
/// the expense (see [`crate::interfaces::csv::expense_reader`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedExpense {
    pub id: String,
    pub amount: Decimal,
    pub payer: Participant,
    /// The payer does not have to be listed here.
    pub involved: Vec<Participant>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl SharedExpense {
    pub fn new(
        id: impl Into<String>,
        amount: Decimal,
        payer: impl Into<Participant>,
        involved: impl IntoIterator<Item = impl Into<Participant>>,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            payer: payer.into(),
            involved: involved.into_iter().map(Into::into).collect(),
            category: None,
            description: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether `involved` is a non-empty set (no participant listed twice).
    pub fn is_splittable(&self) -> bool {
        if self.involved.is_empty() {
            return false;
        }
        let mut seen = HashSet::with_capacity(self.involved.len());
        self.involved.iter().all(|p| seen.insert(p))
    }

    /// Each involved participant's portion, or `None` if the expense cannot be split.
    pub fn share(&self) -> Option<Decimal> {
        if self.is_splittable() {
            Some(self.amount / Decimal::from(self.involved.len()))
        } else {
            None
        }
    }

    pub fn involves(&self, who: &str) -> bool {
        self.involved.iter().any(|p| p == who)
    }
}
