use crate::participant::{DrawPolicy, TurnContext};
use crate::{is_soft_hand, Card, TableRules};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimalMove {
    Hit,
    Stand,
}

/// Get the optimal hit/stand move based on basic strategy
pub fn optimal_move(player_cards: &[Card], dealer_up_card: &Card) -> OptimalMove {
    let player_value = crate::calculate_hand_value(player_cards);
    // Ace up plays like 11
    let dealer_value = if dealer_up_card.is_ace() {
        11
    } else {
        u16::from(dealer_up_card.value())
    };

    if is_soft_hand(player_cards) {
        if player_value >= 19 {
            OptimalMove::Stand
        } else if player_value == 18 {
            if dealer_value >= 9 {
                OptimalMove::Hit
            } else {
                OptimalMove::Stand
            }
        } else {
            OptimalMove::Hit
        }
    } else if player_value >= 17 {
        OptimalMove::Stand
    } else if (13..=16).contains(&player_value) {
        if (2..=6).contains(&dealer_value) {
            OptimalMove::Stand
        } else {
            OptimalMove::Hit
        }
    } else if player_value == 12 {
        if (4..=6).contains(&dealer_value) {
            OptimalMove::Stand
        } else {
            OptimalMove::Hit
        }
    } else {
        OptimalMove::Hit
    }
}

/// Hit/stand chart play for the player seat, used by auto-play and simulation.
///
/// Without a visible dealer card it plays like the dealer at this table.
#[derive(Debug, Clone, Copy)]
pub struct BasicStrategy {
    stay_threshold: u16,
}

impl BasicStrategy {
    pub fn new(rules: &TableRules) -> Self {
        Self {
            stay_threshold: rules.stay_threshold,
        }
    }
}

impl Default for BasicStrategy {
    fn default() -> Self {
        Self::new(&TableRules::default())
    }
}

impl DrawPolicy for BasicStrategy {
    fn should_draw(&mut self, ctx: &TurnContext<'_>) -> bool {
        match ctx.dealer_up {
            Some(up) => optimal_move(&ctx.hand.cards, &up) == OptimalMove::Hit,
            None => ctx.score < self.stay_threshold,
        }
    }
}
