use crate::config::NamePolicy;
use crate::domain::expense::SharedExpense;
use crate::error::{Result, SettleError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// Separator between names in the `involved` column.
pub const INVOLVED_SEPARATOR: char = ';';

#[derive(Debug, Deserialize)]
struct ExpenseRecord {
    group: String,
    id: String,
    amount: Decimal,
    payer: String,
    #[serde(default)]
    involved: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// One row of the expenses file: the group it belongs to and the expense.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupExpense {
    pub group: String,
    pub expense: SharedExpense,
}

/// Reads shared expenses from a CSV source.
///
/// Expected header: `group,id,amount,payer,involved,category,description`,
/// with `involved` holding `;`-separated names. Fields and each involved name
/// are trimmed, then names pass through the configured [`NamePolicy`].
/// Negative amounts are rejected here, before they reach the aggregator.
pub struct ExpenseReader<R: Read> {
    reader: csv::Reader<R>,
    names: NamePolicy,
}

impl<R: Read> ExpenseReader<R> {
    pub fn new(source: R, names: NamePolicy) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader, names }
    }

    /// Lazily reads and validates each row.
    pub fn expenses(self) -> impl Iterator<Item = Result<GroupExpense>> {
        let names = self.names;
        self.reader
            .into_deserialize::<ExpenseRecord>()
            .map(move |result| {
                result
                    .map_err(SettleError::from)
                    .and_then(|record| record.into_expense(names))
            })
    }
}

impl ExpenseRecord {
    fn into_expense(self, names: NamePolicy) -> Result<GroupExpense> {
        if self.amount < Decimal::ZERO {
            return Err(SettleError::ValidationError(format!(
                "Expense {} has a negative amount",
                self.id
            )));
        }
        if self.group.is_empty() {
            return Err(SettleError::ValidationError(format!(
                "Expense {} has no group",
                self.id
            )));
        }

        let payer = names.participant(&self.payer)?;
        let involved = self
            .involved
            .as_deref()
            .unwrap_or_default()
            .split(INVOLVED_SEPARATOR)
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(|raw| names.participant(raw))
            .collect::<Result<Vec<_>>>()?;

        let mut expense = SharedExpense::new(self.id, self.amount, payer, involved);
        expense.category = self.category.filter(|c| !c.is_empty());
        expense.description = self.description.filter(|d| !d.is_empty());

        Ok(GroupExpense {
            group: self.group,
            expense,
        })
    }
}
