mod card_id;

pub use card_id::CardId;
