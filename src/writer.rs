use clv::renderers::ACTIVE_CARD_CLASS;
use clv::view::{Node, RetainedSurface};
use clv::Result;

use std::fmt::Write;

/// Formats the rendered view as plain text, one line per card and per transaction
pub fn write_to_string(surface: &RetainedSurface) -> Result<String> {
    let mut output = String::new();

    if surface.loading {
        writeln!(output, "Loading...")?;
        return Ok(output);
    }

    writeln!(output, "Cards")?;
    for card in surface.cards.iter() {
        let marker = if card.class == ACTIVE_CARD_CLASS { "[x]" } else { "[ ]" };

        let alt = card
            .find_by_class("card__img")
            .and_then(|img| img.attribute("alt"))
            .unwrap_or_default();

        writeln!(
            output,
            "  {marker} {} | {} | {alt}",
            text_of(card, "card__number"),
            text_of(card, "card__valid"),
        )?;
    }

    writeln!(output, "Transactions")?;
    for row in surface.transactions.iter() {
        writeln!(
            output,
            "  {} {} | {} | {}",
            text_of(row, "transaction__symbol"),
            text_of(row, "transaction__description"),
            text_of(row, "transaction__info-text"),
            text_of(row, "transaction__amount"),
        )?;
    }

    writeln!(output, "Balance: {}", surface.balance)?;

    return Ok(output);
}

fn text_of(node: &Node, class: &str) -> String {
    return node
        .find_by_class(class)
        .map(|node| node.text_content())
        .unwrap_or_default();
}
