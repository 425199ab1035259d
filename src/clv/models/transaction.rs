use chrono::NaiveDate;

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Debit,
    Credit,
}

impl Action {
    pub fn symbol(&self) -> &'static str {
        return match self {
            Self::Credit => "+",
            Self::Debit => "-",
        };
    }

    pub fn class_name(&self) -> &'static str {
        return match self {
            Self::Credit => "transaction__credit",
            Self::Debit => "transaction__debit",
        };
    }

    /// Applies the action's sign to an amount
    pub fn signed(&self, amount: f64) -> f64 {
        return match self {
            Self::Credit => amount,
            Self::Debit => -amount,
        };
    }
}

/// A single ledger entry. `amount` is kept as the source decimal string so it can be displayed
/// byte-for-byte.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub action: Action,
    pub category: String,
    pub reference: String,
    pub date: NaiveDate,
    pub amount: String,
    pub description: String,
}
