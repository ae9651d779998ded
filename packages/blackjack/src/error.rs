use thiserror::Error;

use crate::Card;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlackjackError {
    #[error("Deck exhausted: no cards left to draw")]
    DeckExhausted,
    #[error("Duplicate card in stacked deck: {0}")]
    DuplicateCard(Card),
    #[error("Invalid card index: {0}")]
    InvalidCardIndex(usize),
}

pub type Result<T> = std::result::Result<T, BlackjackError>;
