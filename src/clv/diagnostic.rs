use crate::amount::AmountError;
use crate::ids::CardId;

use thiserror::Error;

/// Recoverable problems found while rendering. The affected part of the view falls back to a
/// placeholder and the rest of the render carries on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderDiagnostic {
    #[error("Cannot display amount for card {0}: {1}")]
    Format(CardId, AmountError),

    #[error("Card {0} has no transactions, balance shows the credit amount only")]
    EmptyTransactions(CardId),
}
