mod card;
mod transaction;

pub use card::{Card, CardType};
pub use transaction::{Action, Transaction};
