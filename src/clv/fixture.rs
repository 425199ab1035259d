use crate::input::load_cards_from_str;
use crate::provider::StaticCards;
use crate::Result;

const CARDS_CSV: &str = include_str!("../../resources/fixture/cards.csv");
const TRANSACTIONS_CSV: &str = include_str!("../../resources/fixture/transactions.csv");

/// Sample cards bundled with the binary, used when no input files are given
pub fn sample_cards() -> Result<StaticCards> {
    log::debug!("Loading bundled sample cards");

    return load_cards_from_str(CARDS_CSV, TRANSACTIONS_CSV);
}
