use crate::ids::CardId;
use crate::models::Card;

/// Read-only source of the cards to display, in display order
pub trait CardProvider {
    fn cards(&self) -> &[Card];

    /// Linear scan, card lists are expected to be small
    fn find(&self, id: CardId) -> Option<&Card> {
        return self.cards().iter().find(|card| card.id == id);
    }
}

/// Cards held in memory, loaded once
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticCards {
    cards: Vec<Card>,
}

impl StaticCards {
    pub fn new(cards: Vec<Card>) -> Self {
        return Self { cards };
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CardProvider for StaticCards {
    fn cards(&self) -> &[Card] {
        return &self.cards;
    }
}
