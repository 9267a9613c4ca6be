use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use formula4::{
    Digit, DigitInput, GameConfig, GameState, Hint, HistoryOrder, SecretStrategy, CODE_LENGTH,
};

#[derive(Parser)]
#[command(name = "formula4")]
#[command(about = "Guess the 4-digit secret: unique digits 1-9")]
struct Cli {
    /// Seed for reproducible secrets
    #[arg(long)]
    seed: Option<u64>,

    /// Order of the history table
    #[arg(long, value_enum, default_value_t = HistoryOrder::NewestFirst)]
    history_order: HistoryOrder,

    /// How secrets are drawn
    #[arg(long, value_enum, default_value_t = SecretStrategy::Shuffle)]
    strategy: SecretStrategy,

    /// Keep accepting input after the secret is cracked
    #[arg(long)]
    keep_input_on_win: bool,
}

impl Cli {
    fn config(&self) -> GameConfig {
        let config = GameConfig::default()
            .with_history_order(self.history_order)
            .with_secret_strategy(self.strategy)
            .with_lock_on_win(!self.keep_input_on_win);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// Initialize tracing on stderr so stdout stays clean for the game
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "formula4=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

enum Command<'a> {
    Guess(&'a str),
    Reset,
    History,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Command<'_> {
    match line.to_ascii_lowercase().as_str() {
        "reset" | "r" => Command::Reset,
        "history" | "h" => Command::History,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Guess(line),
    }
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Type 4 unique digits (1-9) and press Enter.")?;
    writeln!(out, "Commands: reset, history, help, quit")
}

fn print_history(out: &mut impl Write, game: &GameState) -> io::Result<()> {
    writeln!(out, "{:<8}{:>8}{:>11}", "Guess", "Digits", "Positions")?;
    for entry in game.history().iter() {
        writeln!(
            out,
            "{:<8}{:>8}{:>11}",
            entry.guess, entry.digits_correct, entry.positions_correct
        )?;
    }
    Ok(())
}

/// Type the line into the segmented input slot by slot, then submit.
///
/// Lines the slots can't hold (wrong length, or a symbol other than 1-9)
/// skip the input and go straight to validation, so the player sees why the
/// line was rejected instead of an emptied slot.
fn play_line(game: &mut GameState, input: &mut DigitInput, line: &str) -> Hint {
    if input.is_locked() {
        return Hint::AlreadyWon;
    }

    let fits_slots = line.chars().count() == CODE_LENGTH
        && line.chars().all(|symbol| Digit::from_char(symbol).is_some());
    if !fits_slots {
        return match game.submit_guess(line) {
            Ok(entry) => Hint::for_score(entry.score()),
            Err(error) => error.into(),
        };
    }

    input.clear();
    for (index, symbol) in line.chars().enumerate() {
        if let Some(hint) = input.enter(index, symbol).hint() {
            input.clear();
            return hint;
        }
    }

    let hint = match input.to_guess() {
        Ok(guess) => match game.submit(guess) {
            Ok(entry) => Hint::for_score(entry.score()),
            Err(error) => error.into(),
        },
        Err(error) => Hint::Rejected(error),
    };

    input.clear();
    if game.is_won() && game.config().lock_on_win {
        input.lock();
    }
    hint
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut game = GameState::new_game(cli.config());
    let mut input = DigitInput::new(game.config().backspace);
    tracing::info!(seed = game.rng_state().seed, "Formula 4 started");

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    print_help(&mut out)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Command::Guess(raw) => {
                let hint = play_line(&mut game, &mut input, raw);
                if hint.is_error() {
                    writeln!(out, "! {hint}")?;
                } else {
                    writeln!(out, "{hint}")?;
                }
            }
            Command::Reset => {
                game.reset();
                input.clear();
                input.unlock();
                writeln!(out, "{}", Hint::NewRound)?;
            }
            Command::History => print_history(&mut out, &game)?,
            Command::Help => print_help(&mut out)?,
            Command::Quit => break,
        }
        out.flush()?;
    }

    tracing::info!(attempts = game.attempts(), won = game.is_won(), "Formula 4 finished");
    Ok(())
}
