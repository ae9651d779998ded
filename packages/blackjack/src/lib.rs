mod card;
mod deck;
mod error;
mod hand;
mod participant;
mod round;
mod rules;
mod session;
mod strategy;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, NoShuffle, RngShuffler, Shuffler, DECK_SIZE};
pub use error::{BlackjackError, Result};
pub use hand::{
    calculate_hand_value, is_blackjack, is_busted, is_soft_hand, Hand, HandOutcome, BLACKJACK,
    HIDDEN_CARD,
};
pub use participant::{
    AskPlayer, DealerPolicy, Decider, DrawPolicy, Participant, ParticipantState,
    ScriptedDecider, Snapshot, TurnContext, HIT_PROMPT,
};
pub use round::{play_round, RoundResult, SilentView, TableView, INITIAL_DEAL};
pub use rules::{DeckPolicy, TableRules};
pub use session::{simulate, SessionStats};
pub use strategy::{optimal_move, BasicStrategy, OptimalMove};
