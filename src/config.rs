//! Runtime knobs for how names are read and how unlisted payers are treated.

use crate::domain::participant::Participant;
use crate::error::{Result, SettleError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How raw names are canonicalized before they become participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamePolicy {
    /// Names are taken verbatim.
    #[default]
    Exact,
    /// Leading and trailing whitespace is removed.
    Trim,
    /// Whitespace is removed and the name is lowercased.
    TrimLowercase,
}

impl NamePolicy {
    pub fn canonicalize(&self, raw: &str) -> String {
        match self {
            NamePolicy::Exact => raw.to_string(),
            NamePolicy::Trim => raw.trim().to_string(),
            NamePolicy::TrimLowercase => raw.trim().to_lowercase(),
        }
    }

    /// Canonicalizes `raw` and rejects names that end up empty.
    pub fn participant(&self, raw: &str) -> Result<Participant> {
        let name = self.canonicalize(raw);
        if name.trim().is_empty() {
            return Err(SettleError::ValidationError(format!(
                "Participant name {raw:?} is empty"
            )));
        }
        Ok(Participant::new(name))
    }
}

/// What to do with an expense whose payer is not on the group roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnlistedPayer {
    /// Add the payer to the balances with whatever they accrue.
    #[default]
    Extend,
    /// Skip the whole expense.
    Reject,
    /// Debit the involved shares but drop the payer's credit.
    IgnoreCredit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SettleConfig {
    pub names: NamePolicy,
    pub unlisted_payer: UnlistedPayer,
}

impl SettleConfig {
    pub fn new(names: NamePolicy, unlisted_payer: UnlistedPayer) -> Self {
        Self {
            names,
            unlisted_payer,
        }
    }
}
