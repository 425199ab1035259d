mod card_list;
mod transaction_list;

pub use card_list::{render_card_list, ACTIVE_CARD_CLASS, CARD_CLASS};
pub use transaction_list::{compute_balance, render_transaction_list, TransactionListView};
