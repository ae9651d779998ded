use serde::{Deserialize, Serialize};

use crate::participant::Participant;
use crate::round::{play_round, RoundResult, SilentView};
use crate::strategy::BasicStrategy;
use crate::{BlackjackError, Deck, HandOutcome, Result, TableRules};

/// Running tally of settled rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
    pub player_busts: u32,
    pub dealer_busts: u32,
    pub player_blackjacks: u32,
}

impl SessionStats {
    pub fn record(&mut self, result: &RoundResult) {
        self.rounds += 1;
        match result.outcome {
            HandOutcome::Win => self.wins += 1,
            HandOutcome::Loss => self.losses += 1,
            HandOutcome::Push => self.pushes += 1,
        }
        if result.player_busted() {
            self.player_busts += 1;
        }
        if result.dealer_busted() {
            self.dealer_busts += 1;
        }
        if result.player_blackjack() {
            self.player_blackjacks += 1;
        }
    }

    /// Share of rounds won by the player, 0.0 for an empty session.
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.wins as f64 / self.rounds as f64
    }
}

/// Play `rounds` seeded rounds with basic strategy in the player seat.
///
/// A persistent deck stops the run early once it can no longer deal; the
/// stats cover the rounds that completed.
pub fn simulate(seed: u64, rounds: u32, rules: &TableRules) -> Result<SessionStats> {
    let mut deck = Deck::seeded(seed);
    let mut player = Participant::new("Player", BasicStrategy::new(rules));
    let mut dealer = Participant::dealer(rules);
    let mut stats = SessionStats::default();

    for _ in 0..rounds {
        match play_round(&mut deck, rules, &mut player, &mut dealer, &mut SilentView) {
            Ok(result) => stats.record(&result),
            Err(BlackjackError::DeckExhausted) => {
                log::info!("Deck exhausted after {} rounds", stats.rounds);
                break;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, Rank, Suit};

    fn result(player: &[Rank], dealer: &[Rank]) -> RoundResult {
        let player_cards: Vec<Card> = player.iter().map(|r| Card::new(*r, Suit::Spades)).collect();
        let dealer_cards: Vec<Card> = dealer.iter().map(|r| Card::new(*r, Suit::Hearts)).collect();
        let player_score = crate::calculate_hand_value(&player_cards);
        let dealer_score = crate::calculate_hand_value(&dealer_cards);
        RoundResult {
            player_cards,
            dealer_cards,
            player_score,
            dealer_score,
            outcome: HandOutcome::decide(player_score, dealer_score),
        }
    }

    #[test]
    fn test_record_tallies() {
        let mut stats = SessionStats::default();
        stats.record(&result(&[Rank::Ace, Rank::King], &[Rank::Ten, Rank::Nine]));
        stats.record(&result(&[Rank::Ten, Rank::Six, Rank::Nine], &[Rank::Ten, Rank::Eight]));
        stats.record(&result(&[Rank::Ten, Rank::Seven], &[Rank::Ten, Rank::Seven]));
        stats.record(&result(&[Rank::Ten, Rank::Two], &[Rank::Ten, Rank::Six, Rank::King]));

        assert_eq!(stats.rounds, 4);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.pushes, 1);
        assert_eq!(stats.player_busts, 1);
        assert_eq!(stats.dealer_busts, 1);
        assert_eq!(stats.player_blackjacks, 1);
        assert!((stats.win_rate() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_win_rate() {
        assert_eq!(SessionStats::default().win_rate(), 0.0);
    }

    #[test]
    fn test_simulate_is_deterministic() {
        let rules = TableRules::default();
        let a = simulate(2024, 200, &rules).unwrap();
        let b = simulate(2024, 200, &rules).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.rounds, 200);
        assert_eq!(a.wins + a.losses + a.pushes, 200);
    }

    #[test]
    fn test_simulate_persistent_stops_early() {
        let stats = simulate(1, 100, &TableRules::persistent()).unwrap();
        assert!(stats.rounds > 0);
        assert!(stats.rounds < 100);
    }
}
