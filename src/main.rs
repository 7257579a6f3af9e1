//! Yaku Up! - Riichi Mahjong flashcards in the terminal
//!
//! Single-session, in-memory study tool for the 34 tiles and the yaku.
//! Answer cards correct to clear them, incorrect to see them again later.

mod catalog;
mod cli;
mod config;
mod error;
mod session;

use catalog::{CardFace, Catalog};
use clap::Parser;
use cli::{Action, Display, InputHandler};
use config::Settings;
use error::Result;
use session::{Engine, Event};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "Yaku Up")]
#[command(about = "Learn Riichi Mahjong tiles and yaku through interactive flashcards")]
struct Args {
    /// Path to a TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to a JSON card catalog (defaults to the built-in one)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Delay before an answered card leaves the screen, in milliseconds
    #[arg(long)]
    settle_ms: Option<u64>,

    /// Seed for reproducible shuffles
    #[arg(long)]
    seed: Option<u64>,

    /// Categories enabled at startup, e.g. "man,pin,yaku"
    #[arg(long)]
    categories: Option<String>,

    /// Print the catalog in natural order and exit
    #[arg(long)]
    list: bool,

    /// Draw in the main screen instead of the alternate screen
    #[arg(long)]
    plain: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Write logs to this file (discarded during a session otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    /// Settings file first, flags on top
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        if let Some(path) = &self.catalog {
            settings.catalog = Some(path.clone());
        }
        if let Some(ms) = self.settle_ms {
            settings.settle_ms = ms;
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(list) = &self.categories {
            settings.categories = config::parse_categories(list)?;
        }

        Ok(settings)
    }

    /// Log sink that stays off the screen while the session is drawn
    fn log_writer(&self) -> Result<BoxMakeWriter> {
        let writer = match &self.log_file {
            Some(path) => BoxMakeWriter::new(Mutex::new(File::create(path)?)),
            None if self.list => BoxMakeWriter::new(std::io::stderr),
            None => BoxMakeWriter::new(std::io::sink),
        };
        Ok(writer)
    }
}

/// Destructive action waiting for a y/n answer
fn confirmation_prompt(event: Event) -> Option<&'static str> {
    match event {
        Event::Reset => Some("Reset progress? (y/n)"),
        Event::ToggleCategory(_) => Some("Changing sets resets your progress. Continue? (y/n)"),
        _ => None,
    }
}

fn print_catalog(catalog: &Catalog) {
    let mut current = None;
    for card in catalog.iter_natural() {
        if current != Some(card.category) {
            current = Some(card.category);
            println!(
                "\n[{}] {} cards",
                card.category.label(),
                catalog.count_in(card.category)
            );
        }
        match &card.face {
            CardFace::Tile { kanji, romaji } => {
                println!("  {:<8} {:<16} {} \"{}\"", card.id, card.name, kanji, romaji)
            }
            CardFace::Combination {
                kanji,
                romaji,
                score,
                ..
            } => println!(
                "  {:<16} {:<28} {} \"{}\" - {}",
                card.id, card.name, kanji, romaji, score
            ),
        }
    }
}

fn run(engine: &mut Engine, display: &Display) -> Result<()> {
    let input = InputHandler::new();
    let mut awaiting: Option<Event> = None;

    loop {
        engine.handle(Event::Tick, Instant::now());
        display.render(engine, awaiting.and_then(confirmation_prompt))?;

        let wait = engine.time_to_deadline(Instant::now());
        let Some(key) = input.read_key(wait)? else {
            continue;
        };
        let Some(action) = InputHandler::action(&key) else {
            continue;
        };

        if let Some(event) = awaiting.take() {
            match action {
                Action::Confirm => {
                    engine.handle(event, Instant::now());
                }
                Action::Quit => break,
                _ => tracing::debug!(?event, "confirmation declined"),
            }
            continue;
        }

        let event = match action {
            Action::Quit => break,
            Action::Flip => Event::Flip,
            Action::Answer(outcome) => Event::Advance(outcome),
            Action::Shuffle => Event::ToggleShuffle,
            Action::Reset => Event::Reset,
            Action::Toggle(category) => Event::ToggleCategory(category),
            Action::Confirm | Action::Decline => continue,
        };

        if confirmation_prompt(event).is_some() {
            awaiting = Some(event);
        } else {
            engine.handle(event, Instant::now());
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.debug { "yaku_up=debug" } else { "yaku_up=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(args.log_writer()?)
        .with_ansi(args.log_file.is_none())
        .init();

    let settings = args.settings()?;
    let catalog = match &settings.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::riichi(),
    };

    if catalog.is_empty() {
        tracing::warn!("catalog has no cards; the session starts complete");
    }

    if args.list {
        print_catalog(&catalog);
        return Ok(());
    }

    tracing::info!(
        cards = catalog.len(),
        settle_ms = settings.settle_ms,
        "starting session"
    );

    let mut engine = Engine::new(
        catalog,
        settings.enabled(),
        settings.settle(),
        settings.seed,
    );

    // Dropping the display restores the terminal if raw mode fails
    let display = if args.plain {
        Display::simple()
    } else {
        Display::alternate()?
    };
    InputHandler::enable_raw_mode()?;

    let result = run(&mut engine, &display);

    // Cleanup
    display.shutdown()?;
    result?;

    // Summary
    let state = engine.state();
    println!("\n🀄 Session over!");
    println!(
        "📊 Mastered {} / {} cards | {} still in the deck",
        state.correct_count(),
        state.total_enabled(),
        state.remaining()
    );
    if state.is_complete() && state.total_enabled() > 0 {
        println!("✅ Every enabled card cleared!");
    }

    Ok(())
}
