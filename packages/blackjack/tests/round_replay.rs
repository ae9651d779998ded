use blackjack::{
    play_round, Deck, HandOutcome, Participant, RoundResult, ScriptedDecider, SilentView,
    Snapshot, TableRules, TableView, BLACKJACK, DECK_SIZE,
};

#[derive(Default)]
struct Transcript {
    lines: Vec<String>,
}

impl TableView for Transcript {
    fn render(&mut self, snapshot: &Snapshot) {
        let score = snapshot
            .score
            .map(|s| format!("{s:2}"))
            .unwrap_or_else(|| "--".to_string());
        self.lines
            .push(format!("{}({score}) : {}", snapshot.label, snapshot.hand_display));
    }

    fn outcome(&mut self, result: &RoundResult) {
        self.lines.push(format!("{:?}", result.outcome));
    }
}

fn replay(seed: u64) -> (RoundResult, Vec<String>, usize) {
    let rules = TableRules::default();
    let mut deck = Deck::seeded(seed);
    let mut decider = ScriptedDecider::new([true, true, false]);
    let mut transcript = Transcript::default();

    let result = {
        let mut player = Participant::player(&mut decider);
        let mut dealer = Participant::dealer(&rules);
        play_round(&mut deck, &rules, &mut player, &mut dealer, &mut transcript).unwrap()
    };

    (result, transcript.lines, decider.asked())
}

#[test]
fn seeded_round_with_scripted_decisions_replays_identically() {
    for seed in [0, 7, 42, 1337] {
        let first = replay(seed);
        let second = replay(seed);
        assert_eq!(first, second, "seed {seed} diverged");
    }
}

#[test]
fn scripted_player_draws_at_most_twice() {
    for seed in 0..50 {
        let (result, _, asked) = replay(seed);
        let draws = result.player_cards.len() - 2;
        assert!(draws <= 2);
        assert!(asked <= 3);
        // Every "yes" that was asked produced a card
        assert_eq!(draws, asked.min(2));
        if draws < 2 {
            assert!(result.player_score >= BLACKJACK);
        }
    }
}

#[test]
fn dealer_finishes_at_or_above_threshold() {
    for seed in 0..100 {
        let (result, _, _) = replay(seed);
        assert!(result.dealer_score >= 17);
        let before_last: Vec<_> = result.dealer_cards[..result.dealer_cards.len() - 1].to_vec();
        if result.dealer_cards.len() > 2 {
            assert!(blackjack::calculate_hand_value(&before_last) < 17);
        }
    }
}

#[test]
fn outcome_matches_scores() {
    for seed in 0..100 {
        let (result, lines, _) = replay(seed);
        assert_eq!(
            result.outcome,
            HandOutcome::decide(result.player_score, result.dealer_score)
        );
        assert!(lines[1].starts_with("Dealer(--) : "));
        assert!(lines[1].ends_with(", ***"));
        assert_eq!(lines.last().unwrap(), &format!("{:?}", result.outcome));
    }
}

#[test]
fn long_session_on_fresh_deck_never_runs_dry() {
    let rules = TableRules::default();
    let mut deck = Deck::seeded(99);
    let mut player = Participant::player(ScriptedDecider::new(std::iter::repeat(true).take(5000)));
    let mut dealer = Participant::dealer(&rules);

    for _ in 0..1000 {
        let result =
            play_round(&mut deck, &rules, &mut player, &mut dealer, &mut SilentView).unwrap();
        let dealt = result.player_cards.len() + result.dealer_cards.len();
        assert_eq!(deck.remaining(), DECK_SIZE - dealt);
    }
}
