use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::Card;

pub const BLACKJACK: u16 = 21;

/// Placeholder shown in place of a concealed card.
pub const HIDDEN_CARD: &str = "***";

/// Round outcome from the player's side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOutcome {
    Win,
    Loss,
    Push,
}

impl HandOutcome {
    /// A bust loses regardless of the other score; the player's bust is checked first.
    pub fn decide(player_score: u16, dealer_score: u16) -> Self {
        if player_score > BLACKJACK {
            return HandOutcome::Loss;
        }
        if dealer_score > BLACKJACK {
            return HandOutcome::Win;
        }
        match player_score.cmp(&dealer_score) {
            Ordering::Greater => HandOutcome::Win,
            Ordering::Less => HandOutcome::Loss,
            Ordering::Equal => HandOutcome::Push,
        }
    }
}

/// Calculate the value of a blackjack hand
///
/// Aces start at 1. Each ace, in hand order, is promoted to 11 when the
/// extra 10 keeps the total at or under 21.
pub fn calculate_hand_value(cards: &[Card]) -> u16 {
    let mut total = hard_total(cards);
    let aces = cards.iter().filter(|c| c.is_ace()).count();

    for _ in 0..aces {
        if total + 10 <= BLACKJACK {
            total += 10;
        }
    }

    total
}

// Every ace at 1. Wide enough for any number of cards.
fn hard_total(cards: &[Card]) -> u16 {
    cards.iter().map(|card| u16::from(card.value())).sum()
}

/// Check if a hand is soft (has an ace counted as 11)
pub fn is_soft_hand(cards: &[Card]) -> bool {
    cards.iter().any(Card::is_ace) && calculate_hand_value(cards) == hard_total(cards) + 10
}

pub fn is_busted(cards: &[Card]) -> bool {
    calculate_hand_value(cards) > BLACKJACK
}

/// Check if a hand is blackjack (21 with 2 cards)
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && calculate_hand_value(cards) == BLACKJACK
}

/// Cards held by one participant, in draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u16 {
        calculate_hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft_hand(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Comma-separated cards; with `conceal_hole` the second card is masked.
    pub fn to_display(&self, conceal_hole: bool) -> String {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                if conceal_hole && i == 1 {
                    HIDDEN_CARD.to_string()
                } else {
                    card.to_display()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn c(rank: Rank) -> Card {
        Card::new(rank, Suit::Spades)
    }

    #[test]
    fn test_calculate_hand_value_simple() {
        assert_eq!(calculate_hand_value(&[c(Rank::Two), c(Rank::Three)]), 5);
    }

    #[test]
    fn test_calculate_hand_value_with_face_cards() {
        assert_eq!(calculate_hand_value(&[c(Rank::King), c(Rank::Queen)]), 20);
    }

    #[test]
    fn test_no_aces_is_plain_sum() {
        let cards = [c(Rank::Nine), c(Rank::Eight), c(Rank::Seven)];
        assert_eq!(calculate_hand_value(&cards), 24);
    }

    #[test]
    fn test_single_ace_promoted_when_rest_at_most_ten() {
        assert_eq!(calculate_hand_value(&[c(Rank::Ace), c(Rank::Six)]), 17);
        assert_eq!(calculate_hand_value(&[c(Rank::Ace), c(Rank::King)]), 21);
        assert_eq!(
            calculate_hand_value(&[c(Rank::Four), c(Rank::Ace), c(Rank::Six)]),
            21
        );
    }

    #[test]
    fn test_single_ace_stays_one_when_rest_over_ten() {
        let cards = [c(Rank::Ace), c(Rank::Six), c(Rank::Nine)];
        assert_eq!(calculate_hand_value(&cards), 16);

        let busted = [c(Rank::Ace), c(Rank::King), c(Rank::Queen), c(Rank::Five)];
        assert_eq!(calculate_hand_value(&busted), 26);
        assert!(is_busted(&busted));
    }

    #[test]
    fn test_two_aces_only_one_promoted() {
        let aces = [Card::new(Rank::Ace, Suit::Hearts), c(Rank::Ace)];
        assert_eq!(calculate_hand_value(&aces), 12);
    }

    #[test]
    fn test_multiple_aces_with_nine() {
        let cards = [Card::new(Rank::Ace, Suit::Hearts), c(Rank::Ace), c(Rank::Nine)];
        assert_eq!(calculate_hand_value(&cards), 21);
    }

    #[test]
    fn test_full_deck_scores_without_overflow() {
        let cards: Vec<Card> = (0..52).map(|i| Card::from_index(i).unwrap()).collect();
        assert_eq!(calculate_hand_value(&cards), 340);
        assert!(is_busted(&cards));
        assert!(!is_soft_hand(&cards));
    }

    #[test]
    fn test_empty_hand_scores_zero() {
        assert_eq!(calculate_hand_value(&[]), 0);
    }

    #[test]
    fn test_is_soft_hand() {
        assert!(is_soft_hand(&[c(Rank::Ace), c(Rank::Six)]));
        assert!(!is_soft_hand(&[c(Rank::Ace), c(Rank::Six), c(Rank::Nine)]));
        assert!(!is_soft_hand(&[c(Rank::King), c(Rank::Queen)]));
    }

    #[test]
    fn test_is_blackjack() {
        assert!(is_blackjack(&[c(Rank::Ace), c(Rank::King)]));
        assert!(!is_blackjack(&[c(Rank::Seven), c(Rank::Seven), c(Rank::Seven)]));
    }

    #[test]
    fn test_outcome_table() {
        assert_eq!(HandOutcome::decide(20, 19), HandOutcome::Win);
        assert_eq!(HandOutcome::decide(22, 18), HandOutcome::Loss);
        assert_eq!(HandOutcome::decide(21, 21), HandOutcome::Push);
        assert_eq!(HandOutcome::decide(17, 17), HandOutcome::Push);
        assert_eq!(HandOutcome::decide(18, 23), HandOutcome::Win);
        assert_eq!(HandOutcome::decide(24, 25), HandOutcome::Loss);
        assert_eq!(HandOutcome::decide(16, 20), HandOutcome::Loss);
    }

    #[test]
    fn test_hand_display_masks_second_card() {
        let mut hand = Hand::new();
        hand.add_card(Card::new(Rank::Nine, Suit::Clubs));
        hand.add_card(Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(hand.to_display(false), "9♣, A♥");
        assert_eq!(hand.to_display(true), "9♣, ***");
    }

    #[test]
    fn test_hand_struct_value() {
        let mut hand = Hand::new();
        hand.add_card(c(Rank::King));
        hand.add_card(c(Rank::Seven));
        assert_eq!(hand.value(), 17);
        hand.clear();
        assert!(hand.is_empty());
        assert_eq!(hand.value(), 0);
    }
}
