use crate::format::mask_card_number;
use crate::ids::CardId;
use crate::models::Card;
use crate::view::{Node, Tag};
use crate::Command;

pub const CARD_CLASS: &str = "app__card";
pub const ACTIVE_CARD_CLASS: &str = "app__card--active";

/// Builds one clickable entry per card, in order, marking the active one
pub fn render_card_list(cards: &[Card], active_card_id: CardId) -> Vec<Node> {
    return cards
        .iter()
        .map(|card| render_card(card, card.id == active_card_id))
        .collect();
}

fn render_card(card: &Card, active: bool) -> Node {
    let class = if active { ACTIVE_CARD_CLASS } else { CARD_CLASS };

    let image = Node::new(Tag::Image, "card__img")
        .with_attribute("src", card.card_type.image_src())
        .with_attribute("alt", card.card_type.image_alt());

    let number = Node::new(Tag::Paragraph, "card__number")
        .with_text(mask_card_number(card.card_type, card.number));

    let valid = Node::new(Tag::Paragraph, "card__valid")
        .with_text(format!("Valid Thru: {}", card.valid_thru));

    return Node::new(Tag::ListItem, class)
        .with_attribute("id", card.id.to_string())
        .on_click(Command::Select(card.id))
        .with_children(vec![image, number, valid]);
}

#[cfg(test)]
mod tests {
    use crate::models::CardType;

    use super::*;

    fn build_cards() -> Vec<Card> {
        vec![
            Card::new(CardId(0), CardType::Visa, 1234567825622562, "12/17"),
            Card::new(CardId(1), CardType::Amex, 123456789121001, "07/19"),
            Card::new(CardId(2), CardType::Mastercard, 1234567883358335, "09/17"),
        ]
    }

    #[test]
    fn one_entry_per_card_with_one_active() {
        let cards = build_cards();

        for card in cards.iter() {
            let nodes = render_card_list(&cards, card.id);

            assert_eq!(nodes.len(), cards.len());

            let active: Vec<&Node> = nodes
                .iter()
                .filter(|node| node.class == ACTIVE_CARD_CLASS)
                .collect();

            assert_eq!(active.len(), 1);
            assert_eq!(active[0].on_click, Some(Command::Select(card.id)));
        }
    }

    #[test]
    fn entries_keep_card_order_and_commands() {
        let cards = build_cards();
        let nodes = render_card_list(&cards, CardId(0));

        let commands: Vec<Option<Command>> = nodes.iter().map(|node| node.on_click).collect();

        assert_eq!(
            commands,
            vec![
                Some(Command::Select(CardId(0))),
                Some(Command::Select(CardId(1))),
                Some(Command::Select(CardId(2))),
            ]
        );
    }

    #[test]
    fn card_contents() {
        let cards = build_cards();
        let nodes = render_card_list(&cards, CardId(0));
        let amex = &nodes[1];

        assert_eq!(amex.class, CARD_CLASS);
        assert_eq!(amex.attribute("id"), Some("1"));

        let image = amex.find_by_class("card__img").unwrap();
        assert_eq!(image.attribute("src"), Some("img/amex.jpg"));
        assert_eq!(image.attribute("alt"), Some("american express card"));

        let number = amex.find_by_class("card__number").unwrap();
        assert_eq!(number.text_content(), "**** ****** 21001");

        let valid = amex.find_by_class("card__valid").unwrap();
        assert_eq!(valid.text_content(), "Valid Thru: 07/19");
    }

    #[test]
    fn empty_card_list() {
        assert!(render_card_list(&[], CardId(0)).is_empty());
    }
}
