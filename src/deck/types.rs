use crate::deck::color::Color;
use serde::{Deserialize, Serialize};

/// One card line of an average deck
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckCard {
    pub name: String,
    pub quantity: u32,
}

impl DeckCard {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// A commander with its average deck, as written to the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commander {
    /// Display name
    pub name: String,

    /// Catalog identifier, unique within a run
    pub slug: String,

    /// Color identity in `W, U, B, R, G` order
    pub color_identity: Vec<Color>,

    /// Number of decks built around this commander
    pub num_decks: u64,

    /// Average deck list
    pub cards: Vec<DeckCard>,
}

impl Commander {
    /// Number of card slots in the deck, quantities summed
    pub fn total_cards(&self) -> u64 {
        self.cards.iter().map(|card| u64::from(card.quantity)).sum()
    }
}
