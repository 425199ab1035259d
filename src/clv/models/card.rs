use super::Transaction;

use crate::ids::CardId;

use serde::Deserialize;

/// Payment network a card belongs to
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Visa,
    Mastercard,
    Amex,
}

impl CardType {
    /// Number of trailing digits left visible when the card number is masked
    pub fn visible_digits(&self) -> usize {
        return match self {
            Self::Amex => 5,
            Self::Visa | Self::Mastercard => 4,
        };
    }

    pub fn image_src(&self) -> &'static str {
        return match self {
            Self::Visa => "img/visa.jpg",
            Self::Mastercard => "img/mastercard.jpg",
            Self::Amex => "img/amex.jpg",
        };
    }

    pub fn image_alt(&self) -> &'static str {
        return match self {
            Self::Visa => "visa card",
            Self::Mastercard => "mastercard",
            Self::Amex => "american express card",
        };
    }
}

/// A payment card and its transaction history, in display order
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub card_type: CardType,
    pub number: u64,
    pub valid_thru: String,
    pub credit_amount: Option<f64>,
    pub transactions: Vec<Transaction>,
}

impl Card {
    pub fn new(id: CardId, card_type: CardType, number: u64, valid_thru: impl Into<String>) -> Self {
        return Self {
            id,
            card_type,
            number,
            valid_thru: valid_thru.into(),
            credit_amount: None,
            transactions: vec![],
        };
    }

    /// Credit-limit adjustment added on top of the transaction total
    pub fn credit_adjustment(&self) -> f64 {
        return self.credit_amount.unwrap_or(0.0);
    }
}
