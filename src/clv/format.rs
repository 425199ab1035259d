use crate::models::{CardType, Transaction};

/// Masks all but the trailing digits of a card number, grouped the way the network prints them.
///
/// Numbers shorter than the visible suffix are shown whole.
pub fn mask_card_number(card_type: CardType, number: u64) -> String {
    let digits = number.to_string();
    let start = digits.len().saturating_sub(card_type.visible_digits());
    let visible = &digits[start..];

    return match card_type {
        CardType::Amex => format!("**** ****** {visible}"),
        CardType::Visa | CardType::Mastercard => format!("**** **** **** {visible}"),
    };
}

/// Secondary text under a transaction's description.
///
/// The category only appears when it is empty, which leaves a leading space. Kept as is until
/// product confirms which way round it should be.
pub fn info_line(transaction: &Transaction) -> String {
    let date = transaction.date.format("%-d %B %Y");

    if transaction.category.is_empty() {
        return format!("{} {} - {date}", transaction.category, transaction.reference);
    }

    return format!("{} - {date}", transaction.reference);
}

/// Raw numeric-to-string conversion: no separators, no fixed decimals
pub fn format_balance(total: f64) -> String {
    return format!("${total}");
}
