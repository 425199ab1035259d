use crate::ids::CardId;
use crate::models::{Action, Card, CardType, Transaction};
use crate::provider::StaticCards;
use crate::Result;

use std::io;

use chrono::NaiveDate;

use csv::{Reader, ReaderBuilder, Trim};

use serde::Deserialize;

use thiserror::Error;

/// Represents a row of the cards file
#[derive(Deserialize, Debug, Clone)]
pub struct CardRecord {
    pub id: CardId,

    #[serde(rename = "type")]
    pub typ: CardType,

    pub number: u64,
    pub valid_thru: String,
    pub credit_amount: Option<f64>,
}

/// Represents a row of the transactions file
#[derive(Deserialize, Debug, Clone)]
pub struct TransactionRecord {
    pub card: CardId,
    pub action: Action,
    pub category: Option<String>,
    pub reference: String,
    pub date: NaiveDate,
    pub amount: String,
    pub description: String,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Duplicate card id {0}, keeping the first card with that id")]
    DuplicateCard(CardId),

    #[error("Transaction references unknown card {0}: {1:?}")]
    UnknownCard(CardId, TransactionRecord),
}

impl From<CardRecord> for Card {
    fn from(record: CardRecord) -> Self {
        let mut card = Card::new(record.id, record.typ, record.number, record.valid_thru);
        card.credit_amount = record.credit_amount;

        return card;
    }
}

impl From<TransactionRecord> for Transaction {
    fn from(record: TransactionRecord) -> Self {
        return Self {
            action: record.action,
            category: record.category.unwrap_or_default(),
            reference: record.reference,
            date: record.date,
            amount: record.amount,
            description: record.description,
        };
    }
}

pub fn csv_reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.trim(Trim::All);

    return builder;
}

/// Builds the card list from a cards file and a transactions file.
///
/// Rows that fail to parse, or that reference a card that doesn't exist, are logged and skipped.
/// Transactions keep the order they appear in the file.
pub fn load_cards<C: io::Read, T: io::Read>(
    cards_rdr: &mut Reader<C>,
    transactions_rdr: &mut Reader<T>,
) -> Result<StaticCards> {
    let mut cards: Vec<Card> = vec![];

    log::debug!("Deserializing cards...");
    for record in cards_rdr.deserialize::<CardRecord>() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        if cards.iter().any(|card| card.id == record.id) {
            log::warn!("{}", InputParseError::DuplicateCard(record.id));
            continue;
        }

        log::debug!("Adding card: {record:?}");
        cards.push(record.into());
    }

    log::debug!("Deserializing transactions...");
    for record in transactions_rdr.deserialize::<TransactionRecord>() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        let card = match cards.iter_mut().find(|card| card.id == record.card) {
            Some(card) => card,
            None => {
                log::warn!("{}", InputParseError::UnknownCard(record.card, record));
                continue;
            }
        };

        log::debug!("Adding transaction to card {}: {record:?}", card.id);
        card.transactions.push(record.into());
    }

    log::debug!("Loaded {} cards", cards.len());

    return Ok(StaticCards::new(cards));
}

/// Same as [`load_cards`], reading from in-memory CSV text
pub fn load_cards_from_str(cards: &str, transactions: &str) -> Result<StaticCards> {
    let mut cards_rdr = csv_reader_builder().from_reader(cards.as_bytes());
    let mut transactions_rdr = csv_reader_builder().from_reader(transactions.as_bytes());

    return load_cards(&mut cards_rdr, &mut transactions_rdr);
}
