use std::collections::VecDeque;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::deck::{Deck, Shuffler};
use crate::hand::BLACKJACK;
use crate::round::TableView;
use crate::{Card, Hand, Result, TableRules};

pub const HIT_PROMPT: &str = "Hit one more card?";

/// Where a participant stands within the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipantState {
    /// No cards yet this round
    Empty,
    /// Holding cards, may still draw
    Holding,
    /// Will draw no more this round
    Done,
}

/// What a draw policy gets to look at before answering.
#[derive(Debug, Clone, Copy)]
pub struct TurnContext<'a> {
    pub hand: &'a Hand,
    pub score: u16,
    /// The dealer's face-up card, when deciding for the player.
    pub dealer_up: Option<Card>,
}

/// The only behavior that differs between the player and the dealer.
pub trait DrawPolicy {
    fn should_draw(&mut self, ctx: &TurnContext<'_>) -> bool;
}

/// Synchronous yes/no question to whoever controls the player.
///
/// Implementations own input validation; the engine only ever sees a bool.
pub trait Decider {
    fn ask_yes_no(&mut self, prompt: &str) -> bool;
}

impl<D: Decider + ?Sized> Decider for &mut D {
    fn ask_yes_no(&mut self, prompt: &str) -> bool {
        (**self).ask_yes_no(prompt)
    }
}

/// Answers from a fixed script, then "no" once the script runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDecider {
    answers: VecDeque<bool>,
    asked: usize,
}

impl ScriptedDecider {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: 0,
        }
    }

    /// How many questions have been asked so far
    pub fn asked(&self) -> usize {
        self.asked
    }
}

impl Decider for ScriptedDecider {
    fn ask_yes_no(&mut self, _prompt: &str) -> bool {
        self.asked += 1;
        self.answers.pop_front().unwrap_or(false)
    }
}

/// Player policy: ask the controller every time.
#[derive(Debug)]
pub struct AskPlayer<D> {
    decider: D,
}

impl<D: Decider> AskPlayer<D> {
    pub fn new(decider: D) -> Self {
        Self { decider }
    }

    pub fn decider(&self) -> &D {
        &self.decider
    }
}

impl<D: Decider> DrawPolicy for AskPlayer<D> {
    fn should_draw(&mut self, _ctx: &TurnContext<'_>) -> bool {
        self.decider.ask_yes_no(HIT_PROMPT)
    }
}

/// Dealer policy: draw below the stay threshold, never above it.
#[derive(Debug, Clone, Copy)]
pub struct DealerPolicy {
    stay_threshold: u16,
}

impl DealerPolicy {
    pub fn new(stay_threshold: u16) -> Self {
        Self { stay_threshold }
    }
}

impl DrawPolicy for DealerPolicy {
    fn should_draw(&mut self, ctx: &TurnContext<'_>) -> bool {
        ctx.score < self.stay_threshold
    }
}

/// Display-ready view of a participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub label: String,
    /// `None` while a card is concealed
    pub score: Option<u16>,
    pub hand_display: String,
}

/// One seat at the table: a hand plus the policy deciding whether to draw.
#[derive(Debug)]
pub struct Participant<P> {
    label: String,
    hand: Hand,
    state: ParticipantState,
    concealed: bool,
    policy: P,
}

impl<D: Decider> Participant<AskPlayer<D>> {
    pub fn player(decider: D) -> Self {
        Self::new("Player", AskPlayer::new(decider))
    }
}

impl Participant<DealerPolicy> {
    pub fn dealer(rules: &TableRules) -> Self {
        Self::new("Dealer", DealerPolicy::new(rules.stay_threshold))
    }
}

impl<P: DrawPolicy> Participant<P> {
    pub fn new(label: impl Into<String>, policy: P) -> Self {
        Self {
            label: label.into(),
            hand: Hand::new(),
            state: ParticipantState::Empty,
            concealed: false,
            policy,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Always derived from the hand.
    pub fn score(&self) -> u16 {
        self.hand.value()
    }

    pub fn state(&self) -> ParticipantState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == ParticipantState::Done
    }

    pub fn is_busted(&self) -> bool {
        self.hand.is_busted()
    }

    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    /// Back to `Empty` for a new round.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.state = ParticipantState::Empty;
        self.concealed = false;
    }

    /// Take a dealt or drawn card.
    ///
    /// # Panics
    /// If the participant is already `Done` for this round.
    pub fn receive(&mut self, card: Card) {
        assert!(
            self.state != ParticipantState::Done,
            "{} is done and cannot take {card}",
            self.label
        );
        self.hand.add_card(card);
        self.state = ParticipantState::Holding;
    }

    pub fn conceal(&mut self) {
        self.concealed = true;
    }

    pub fn reveal(&mut self) {
        self.concealed = false;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            label: self.label.clone(),
            score: (!self.concealed).then(|| self.score()),
            hand_display: self.hand.to_display(self.concealed),
        }
    }

    /// Draw until the policy declines or the score reaches 21, rendering
    /// after every card.
    pub fn play_turn<S: Shuffler>(
        &mut self,
        deck: &mut Deck<S>,
        dealer_up: Option<Card>,
        view: &mut dyn TableView,
    ) -> Result<()> {
        while !self.is_done() {
            let score = self.hand.value();
            if score >= BLACKJACK {
                self.state = ParticipantState::Done;
                break;
            }

            let ctx = TurnContext {
                hand: &self.hand,
                score,
                dealer_up,
            };
            if !self.policy.should_draw(&ctx) {
                debug!("{} stays on {score}", self.label);
                self.state = ParticipantState::Done;
                break;
            }

            let card = deck.draw()?;
            self.receive(card);
            view.render(&self.snapshot());
        }
        Ok(())
    }
}
