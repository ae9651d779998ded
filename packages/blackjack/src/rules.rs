use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What happens to the deck between rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeckPolicy {
    /// Every round starts from a full, freshly shuffled 52-card deck.
    #[default]
    Fresh,
    /// Dealt cards stay out for the whole session; the deck can run dry.
    Persistent,
}

impl FromStr for DeckPolicy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fresh" => Ok(DeckPolicy::Fresh),
            "persistent" => Ok(DeckPolicy::Persistent),
            _ => Err("Deck policy must be 'fresh' or 'persistent'"),
        }
    }
}

impl fmt::Display for DeckPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckPolicy::Fresh => write!(f, "fresh"),
            DeckPolicy::Persistent => write!(f, "persistent"),
        }
    }
}

/// Table configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRules {
    /// Dealer stops drawing once the score reaches this value
    pub stay_threshold: u16,

    pub deck_policy: DeckPolicy,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            stay_threshold: 17,
            deck_policy: DeckPolicy::Fresh,
        }
    }
}

impl TableRules {
    /// Single deck carried through the whole session
    pub fn persistent() -> Self {
        Self {
            deck_policy: DeckPolicy::Persistent,
            ..Self::default()
        }
    }
}
