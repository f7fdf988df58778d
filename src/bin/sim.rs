use battleship_solo::{
    init_logging, AiPlayer, Event, GameEngine, Grid, OutputSink, Session, SessionSummary,
};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Let the computer play one seeded game and print a JSON summary.
#[derive(Parser)]
struct Args {
    seed: u64,
    #[arg(long, default_value = "6")]
    size: String,
}

/// Sink that only counts what happened.
#[derive(Default)]
struct Tally {
    hits: usize,
    misses: usize,
    repeats: usize,
}

impl OutputSink for Tally {
    fn render(&mut self, _grid: &Grid) -> anyhow::Result<()> {
        Ok(())
    }

    fn notify(&mut self, event: Event) -> anyhow::Result<()> {
        match event {
            Event::Hit(_) => self.hits += 1,
            Event::Miss => self.misses += 1,
            Event::AlreadyGuessed => self.repeats += 1,
            _ => log::debug!("{:?}", event),
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let fleet = GameEngine::configure(&args.size)?;

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let ai = AiPlayer::new(SmallRng::seed_from_u64(args.seed.wrapping_add(1)), fleet.size);
    let mut session = Session::new(ai, Tally::default());
    let summary: SessionSummary = session.run(&mut rng)?;
    let (_, tally) = session.into_parts();

    let result = json!({
        "seed": args.seed,
        "summary": summary,
        "ship_cells": fleet.total_ship_cells(),
        "hits": tally.hits,
        "misses": tally.misses,
        "repeats": tally.repeats,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
