use blackjack::{simulate, DeckPolicy, TableRules};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "blackjack-sim",
    about = "Play seeded blackjack rounds with basic strategy and report the tally"
)]
struct Args {
    /// Seed for the deck shuffle
    #[arg(long, default_value = "1")]
    seed: u64,

    /// Number of rounds to play
    #[arg(long, default_value = "10000")]
    rounds: u32,

    /// Dealer stops drawing at this score
    #[arg(long, default_value = "17")]
    stay_threshold: u16,

    /// Deck policy: fresh, persistent
    #[arg(long, default_value = "fresh")]
    deck_policy: String,
}

fn main() {
    let args = Args::parse();

    let deck_policy: DeckPolicy = args.deck_policy.parse().unwrap_or_else(|e| {
        eprintln!("Invalid deck policy '{}': {e}", args.deck_policy);
        std::process::exit(1);
    });
    let rules = TableRules {
        stay_threshold: args.stay_threshold,
        deck_policy,
    };

    eprintln!("Configuration:");
    eprintln!("  Seed:           {}", args.seed);
    eprintln!("  Rounds:         {}", args.rounds);
    eprintln!("  Stay threshold: {}", rules.stay_threshold);
    eprintln!("  Deck policy:    {}", rules.deck_policy);

    let stats = match simulate(args.seed, args.rounds, &rules) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("Simulation failed: {e}");
            std::process::exit(1);
        }
    };

    println!("Rounds played:  {}", stats.rounds);
    println!("Player wins:    {}", stats.wins);
    println!("Dealer wins:    {}", stats.losses);
    println!("Pushes:         {}", stats.pushes);
    println!("Player busts:   {}", stats.player_busts);
    println!("Dealer busts:   {}", stats.dealer_busts);
    println!("Blackjacks:     {}", stats.player_blackjacks);
    println!("Win rate:       {:.2}%", stats.win_rate() * 100.0);
}
