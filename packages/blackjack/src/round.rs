use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::deck::{Deck, Shuffler};
use crate::participant::{DrawPolicy, Participant, Snapshot};
use crate::{BlackjackError, Card, DeckPolicy, HandOutcome, Result, TableRules};

/// Cards needed for the opening deal
pub const INITIAL_DEAL: usize = 4;

/// Output side of the table: told about every visible change.
pub trait TableView {
    fn render(&mut self, snapshot: &Snapshot);
    fn outcome(&mut self, result: &RoundResult);
}

/// Discards everything. For simulations and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentView;

impl TableView for SilentView {
    fn render(&mut self, _snapshot: &Snapshot) {}
    fn outcome(&mut self, _result: &RoundResult) {}
}

/// Final, immutable record of one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub player_score: u16,
    pub dealer_score: u16,
    pub outcome: HandOutcome,
}

impl RoundResult {
    /// # Panics
    /// If either participant is still able to draw.
    pub fn settle<P: DrawPolicy, Q: DrawPolicy>(
        player: &Participant<P>,
        dealer: &Participant<Q>,
    ) -> Self {
        assert!(
            player.is_done() && dealer.is_done(),
            "cannot settle a round before both participants are done"
        );
        let player_score = player.score();
        let dealer_score = dealer.score();
        Self {
            player_cards: player.hand().cards.clone(),
            dealer_cards: dealer.hand().cards.clone(),
            player_score,
            dealer_score,
            outcome: HandOutcome::decide(player_score, dealer_score),
        }
    }

    pub fn player_busted(&self) -> bool {
        crate::is_busted(&self.player_cards)
    }

    pub fn dealer_busted(&self) -> bool {
        crate::is_busted(&self.dealer_cards)
    }

    pub fn player_blackjack(&self) -> bool {
        crate::is_blackjack(&self.player_cards)
    }
}

/// Play one full round: shuffle, deal, player turn, dealer turn, settle.
///
/// Under [`DeckPolicy::Fresh`] the deck is restored to 52 cards first, so
/// running out is impossible and a short deck is a bug. Under
/// [`DeckPolicy::Persistent`] a short deck ends the round with
/// [`BlackjackError::DeckExhausted`].
pub fn play_round<S, P, Q>(
    deck: &mut Deck<S>,
    rules: &TableRules,
    player: &mut Participant<P>,
    dealer: &mut Participant<Q>,
    view: &mut dyn TableView,
) -> Result<RoundResult>
where
    S: Shuffler,
    P: DrawPolicy,
    Q: DrawPolicy,
{
    if rules.deck_policy == DeckPolicy::Fresh {
        deck.reset();
    }
    deck.shuffle();

    player.reset();
    dealer.reset();

    if deck.remaining() < INITIAL_DEAL {
        match rules.deck_policy {
            DeckPolicy::Fresh => panic!(
                "fresh deck holds {} cards, need {INITIAL_DEAL} to deal",
                deck.remaining()
            ),
            DeckPolicy::Persistent => {
                warn!("Deck down to {} cards, cannot deal", deck.remaining());
                return Err(BlackjackError::DeckExhausted);
            }
        }
    }

    for _ in 0..2 {
        player.receive(deck.draw()?);
        dealer.receive(deck.draw()?);
    }
    dealer.conceal();
    view.render(&player.snapshot());
    view.render(&dealer.snapshot());

    let dealer_up = dealer.hand().cards.first().copied();
    player.play_turn(deck, dealer_up, view).map_err(|e| {
        warn!("{} turn stopped with {} cards left: {e}", player.label(), deck.remaining());
        e
    })?;

    dealer.reveal();
    view.render(&dealer.snapshot());
    dealer.play_turn(deck, None, view).map_err(|e| {
        warn!("{} turn stopped with {} cards left: {e}", dealer.label(), deck.remaining());
        e
    })?;

    let result = RoundResult::settle(player, dealer);
    info!(
        "Round settled: player {} vs dealer {} -> {:?}",
        result.player_score, result.dealer_score, result.outcome
    );
    view.outcome(&result);
    Ok(result)
}
