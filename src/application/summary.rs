use crate::domain::expense::SharedExpense;
use crate::domain::settlement::Settlement;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::HashMap;

pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
    /// Share of the grand total, rounded to a whole percent.
    pub percent: u32,
}

/// Sums amounts per category, largest first.
///
/// Categories whose total is not positive are left out. Equal totals keep the
/// order in which the category first appeared.
pub fn category_totals(expenses: &[SharedExpense]) -> Vec<CategoryTotal> {
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, Decimal> = HashMap::new();
    for expense in expenses {
        let category = expense
            .category
            .clone()
            .unwrap_or_else(|| UNCATEGORIZED.to_string());
        if !sums.contains_key(&category) {
            order.push(category.clone());
        }
        *sums.entry(category).or_insert(Decimal::ZERO) += expense.amount;
    }

    let mut entries: Vec<(String, Decimal)> = order
        .into_iter()
        .filter_map(|c| {
            let total = sums.get(&c).copied().unwrap_or_default();
            (total > Decimal::ZERO).then_some((c, total))
        })
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    let grand: Decimal = entries.iter().map(|(_, t)| *t).sum();
    entries
        .into_iter()
        .map(|(category, total)| {
            let percent = if grand > Decimal::ZERO {
                (total / grand * Decimal::ONE_HUNDRED)
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                    .to_u32()
                    .unwrap_or(0)
            } else {
                0
            };
            CategoryTotal {
                category,
                total: total.normalize(),
                percent,
            }
        })
        .collect()
}

/// What one participant put in and what they consumed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ParticipantShare {
    pub paid: Decimal,
    pub share: Decimal,
    pub net: Decimal,
}

pub fn participant_share(expenses: &[SharedExpense], who: &str) -> ParticipantShare {
    let mut summary = ParticipantShare::default();
    for expense in expenses {
        if expense.payer == who {
            summary.paid += expense.amount;
        }
        if expense.involves(who)
            && let Some(share) = expense.share()
        {
            summary.share += share;
        }
    }
    summary.net = summary.paid - summary.share;
    summary
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupDebt {
    pub group: String,
    pub settlement: Settlement,
}

/// One participant's view across groups: what they owe and what is owed to them.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DebtSummary {
    pub owe: Vec<GroupDebt>,
    pub owed_to_you: Vec<GroupDebt>,
    pub total_owe: Decimal,
    pub total_owed_to_you: Decimal,
}

impl DebtSummary {
    /// Adds the settlements of one group that concern `who`.
    pub fn record(&mut self, who: &str, group: &str, settlements: &[Settlement]) {
        for settlement in settlements {
            if settlement.from == who {
                self.total_owe += settlement.amount;
                self.owe.push(GroupDebt {
                    group: group.to_string(),
                    settlement: settlement.clone(),
                });
            }
            if settlement.to == who {
                self.total_owed_to_you += settlement.amount;
                self.owed_to_you.push(GroupDebt {
                    group: group.to_string(),
                    settlement: settlement.clone(),
                });
            }
        }
    }

    pub fn is_settled(&self) -> bool {
        self.owe.is_empty() && self.owed_to_you.is_empty()
    }
}
