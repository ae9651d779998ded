//! Terminal collaborators for the engine: a line-based yes/no prompt and a
//! plain-text table renderer.

use std::io::{BufRead, Write};

use blackjack::{Decider, HandOutcome, RoundResult, SessionStats, Snapshot, TableView};

/// Accepts y/yes/n/no in any case.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// `Player(20) : K♠, Q♥`, or `Dealer(--) : 9♣, ***` while concealed.
pub fn format_snapshot(snapshot: &Snapshot) -> String {
    let score = match snapshot.score {
        Some(score) => format!("{score:2}"),
        None => "--".to_string(),
    };
    format!("{}({score}) : {}", snapshot.label, snapshot.hand_display)
}

pub fn format_outcome(result: &RoundResult) -> &'static str {
    match result.outcome {
        HandOutcome::Win if result.dealer_busted() => ">> Dealer busts. Player wins!",
        HandOutcome::Win => ">> Player wins!",
        HandOutcome::Loss if result.player_busted() => ">> Player busts. Dealer wins!",
        HandOutcome::Loss => ">> Dealer wins!",
        HandOutcome::Push => ">> Push.",
    }
}

/// Prompts on `output` and reads answers from `input`, re-asking until the
/// answer parses. Closed input counts as "no".
pub struct ConsoleDecider<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleDecider<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Decider for ConsoleDecider<R, W> {
    fn ask_yes_no(&mut self, prompt: &str) -> bool {
        loop {
            let shown = write!(self.output, ">> {prompt} [y/n] : ")
                .and_then(|_| self.output.flush());
            if let Err(e) = shown {
                log::warn!("Failed to write prompt: {e}");
            }

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    log::warn!("Input closed, answering no");
                    return false;
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("Failed to read answer: {e}");
                    return false;
                }
            }

            match parse_yes_no(&line) {
                Some(answer) => return answer,
                None => {
                    log::debug!("Rejected answer {:?}", line.trim());
                    if let Err(e) = writeln!(self.output, ">> Please input [y/n]") {
                        log::warn!("Failed to write retry hint: {e}");
                    }
                }
            }
        }
    }
}

pub struct ConsoleView<W> {
    output: W,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{text}") {
            log::warn!("Failed to write output: {e}");
        }
    }

    pub fn summary(&mut self, stats: &SessionStats) {
        self.line(&format!(
            ">> Rounds: {}  Wins: {}  Losses: {}  Pushes: {}",
            stats.rounds, stats.wins, stats.losses, stats.pushes
        ));
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> TableView for ConsoleView<W> {
    fn render(&mut self, snapshot: &Snapshot) {
        self.line(&format_snapshot(snapshot));
    }

    fn outcome(&mut self, result: &RoundResult) {
        self.line(format_outcome(result));
    }
}
