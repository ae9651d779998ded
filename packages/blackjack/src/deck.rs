use std::collections::HashSet;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{BlackjackError, Card, Result};

pub const DECK_SIZE: usize = 52;

/// Source of card permutations for [`Deck::shuffle`].
pub trait Shuffler {
    fn shuffle(&mut self, cards: &mut [Card]);
}

/// Uniform shuffle driven by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngShuffler<R> {
    rng: R,
}

impl<R: Rng> RngShuffler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngShuffler<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> Shuffler for RngShuffler<R> {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

/// Leaves the order untouched. Pairs with [`Deck::stacked`] for scripted play.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShuffle;

impl Shuffler for NoShuffle {
    fn shuffle(&mut self, _cards: &mut [Card]) {}
}

/// A single 52-card deck.
///
/// Cards leave the deck only through [`Deck::draw`]; [`Deck::reset`] is the
/// one way to put them back, restoring the full complement the deck was
/// built with.
#[derive(Debug, Clone)]
pub struct Deck<S = RngShuffler<ChaCha8Rng>> {
    // Bottom first, so the top card is the last element.
    cards: Vec<Card>,
    full: Vec<Card>,
    shuffler: S,
}

impl Deck {
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngShuffler::seeded(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(RngShuffler::from_entropy())
    }
}

impl<S: Shuffler> Deck<S> {
    /// All 52 rank x suit combinations in canonical order, ace of spades on top.
    pub fn new(shuffler: S) -> Self {
        let full: Vec<Card> = (0..DECK_SIZE)
            .rev()
            .filter_map(|index| Card::from_index(index).ok())
            .collect();
        Self {
            cards: full.clone(),
            full,
            shuffler,
        }
    }

    /// A full deck whose first draws are `top`, in order. The remaining cards
    /// follow in canonical order.
    pub fn stacked(top: &[Card], shuffler: S) -> Result<Self> {
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for card in top {
            if !seen.insert(*card) {
                return Err(BlackjackError::DuplicateCard(*card));
            }
        }

        let rest = (0..DECK_SIZE)
            .filter_map(|index| Card::from_index(index).ok())
            .filter(|card| !seen.contains(card));
        let mut full: Vec<Card> = top.iter().copied().chain(rest).collect();
        full.reverse();

        Ok(Self {
            cards: full.clone(),
            full,
            shuffler,
        })
    }

    pub fn shuffle(&mut self) {
        self.shuffler.shuffle(&mut self.cards);
        debug!("Shuffled deck ({} cards)", self.cards.len());
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card> {
        let card = self.cards.pop().ok_or(BlackjackError::DeckExhausted)?;
        debug!("Drew {card} ({} left)", self.cards.len());
        Ok(card)
    }

    pub fn reset(&mut self) {
        self.cards.clone_from(&self.full);
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Undealt cards, top first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }
}
