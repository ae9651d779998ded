mod console;

use std::io;

use blackjack::{
    play_round, BasicStrategy, BlackjackError, Decider, Deck, DeckPolicy, Participant,
    SessionStats, TableRules,
};
use clap::Parser;

use crate::console::{ConsoleDecider, ConsoleView};

type BoxErr = Box<dyn std::error::Error + Send + Sync>;

const PLAY_AGAIN_PROMPT: &str = "Play again?";
const AUTO_ROUNDS: u32 = 10;

#[derive(Parser)]
#[command(name = "blackjack-cli", about = "Play blackjack against the dealer in the terminal")]
struct Cli {
    /// Seed for the deck shuffle; random when omitted
    #[arg(long, env = "BLACKJACK_SEED")]
    seed: Option<u64>,

    /// Deck policy: fresh, persistent
    #[arg(long, env = "BLACKJACK_DECK_POLICY", default_value = "fresh")]
    deck_policy: String,

    /// Dealer stops drawing at this score
    #[arg(long, env = "BLACKJACK_STAY_THRESHOLD", default_value = "17")]
    stay_threshold: u16,

    /// Let basic strategy play the player seat
    #[arg(long, env = "BLACKJACK_AUTO", action = clap::ArgAction::SetTrue)]
    auto: bool,

    /// Stop after this many rounds (auto play defaults to 10)
    #[arg(long, env = "BLACKJACK_ROUNDS")]
    rounds: Option<u32>,
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::error!("Session failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), BoxErr> {
    let deck_policy: DeckPolicy = cli.deck_policy.parse()?;
    let rules = TableRules {
        stay_threshold: cli.stay_threshold,
        deck_policy,
    };

    let mut deck = match cli.seed {
        Some(seed) => {
            log::info!("Using seeded deck (seed={seed})");
            Deck::seeded(seed)
        }
        None => Deck::from_entropy(),
    };
    log::info!(
        "Table rules: stay at {}, {} deck",
        rules.stay_threshold,
        rules.deck_policy
    );

    let mut decider = ConsoleDecider::new(io::stdin().lock(), io::stdout());
    let mut view = ConsoleView::new(io::stdout());
    let mut stats = SessionStats::default();
    let limit = cli.rounds.or(cli.auto.then_some(AUTO_ROUNDS));

    loop {
        let mut dealer = Participant::dealer(&rules);
        let round = if cli.auto {
            let mut player = Participant::new("Player", BasicStrategy::new(&rules));
            play_round(&mut deck, &rules, &mut player, &mut dealer, &mut view)
        } else {
            let mut player = Participant::player(&mut decider);
            play_round(&mut deck, &rules, &mut player, &mut dealer, &mut view)
        };

        match round {
            Ok(result) => stats.record(&result),
            Err(BlackjackError::DeckExhausted) => {
                view.line(">> The deck is exhausted. Game over.");
                break;
            }
            Err(e) => return Err(e.into()),
        }

        if limit.is_some_and(|n| stats.rounds >= n) {
            break;
        }
        if !cli.auto && !decider.ask_yes_no(PLAY_AGAIN_PROMPT) {
            break;
        }
        view.line("");
    }

    view.summary(&stats);
    Ok(())
}
