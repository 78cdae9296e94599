//! Pyotr terminal binary
//!
//! Play the card-guessing game against the adaptive opponent.
//!
//! Options: --variant, --epochs, --depth, --threshold, --seed, --timeout, --rounds

use clap::Parser;
use colored::Colorize;
use dialoguer::Select;
use pyotr::game::*;
use pyotr::moves::*;
use pyotr::*;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 3, help = "Number of cards to choose between (2 or 3)")]
    variant: usize,
    #[arg(long, default_value_t = TRAINING_EPOCHS, help = "Training passes per round")]
    epochs: usize,
    #[arg(long, default_value_t = MEMORY_DEPTH, help = "Rounds remembered per side")]
    depth: usize,
    #[arg(long, default_value_t = CONFIDENCE_THRESHOLD, help = "Top-two gap below which Pyotr guesses at random")]
    threshold: Probability,
    #[arg(long, help = "Seed for the exploration RNG")]
    seed: Option<u64>,
    #[arg(long, help = "Give up on a round's training after this many seconds")]
    timeout: Option<u64>,
    #[arg(long, help = "Stop after this many rounds")]
    rounds: Option<usize>,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            depth: args.depth,
            threshold: args.threshold,
            epochs: args.epochs,
            seed: args.seed,
            timeout: args.timeout.map(Duration::from_secs),
            ..Self::default()
        }
    }
}

/// Prints events as plain terminal lines.
struct Terminal;

impl Observer for Terminal {
    fn notify(&self, event: &Event) {
        match event {
            Event::Setup(variant) => println!("\n{}", format!("PYOTR · {} CARDS", variant).bold()),
            Event::Thinking => {}
            Event::Reveal(card) => println!("Pyotr flips over {}", card.to_string().bold()),
            Event::Round { actual, predicted } => println!("you {} · pyotr {}", actual, predicted),
            Event::Verdict(true) => println!("{}", "caught you".red()),
            Event::Verdict(false) => println!("{}", "missed".green()),
            Event::Score { delta, total } => println!("score {:+} → {}", delta, total),
            Event::Confidence { predicted, .. } => {
                println!("{}", format!("confidence {:.1}%", predicted * 100.).dimmed())
            }
            Event::Ready => println!("{}", "pyotr is ready".dimmed()),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    log()?;
    let ref args = Args::parse();
    let game = Orchestrator::new(Config::from(args), Terminal)?;
    game.setup_game(args.variant).await?;
    let variant = Variant::try_from(args.variant)?;
    let cards = variant.cards().collect::<Vec<Card>>();
    let items = cards
        .iter()
        .map(Card::to_string)
        .chain(std::iter::once("quit".to_string()))
        .collect::<Vec<String>>();
    let mut played = 0;
    while args.rounds.is_none_or(|n| played < n) {
        let selection = Select::new()
            .with_prompt("\npick a card")
            .report(false)
            .items(&items)
            .default(0)
            .interact()?;
        let Some(card) = cards.get(selection).copied() else {
            break;
        };
        match game.choose(card).await {
            Ok(Some(_)) => played += 1,
            Ok(None) => continue,
            Err(Error::TrainingTimeout(limit)) => {
                eprintln!("pyotr gave up thinking after {:?}", limit)
            }
            Err(e) => return Err(e.into()),
        }
    }
    if let Some(tally) = game.tally().await {
        println!("\n{}", tally);
        if let Some(accuracy) = tally.accuracy() {
            println!("pyotr guessed {:.1}% of your cards", accuracy * 100.);
        }
    }
    Ok(())
}
