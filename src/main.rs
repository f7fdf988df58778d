#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_solo::{
    init_logging, AiPlayer, CliPlayer, GameEngine, Session, SessionEnd, TerminalView,
    SUPPORTED_SIZES,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Hunt the hidden ships yourself.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_parser = parse_size, help = "Board size (4, 5 or 6); prompts when omitted")]
        size: Option<usize>,
        #[arg(long, hide = true)]
        reveal: bool,
    },
    /// Watch the computer play a game.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_parser = parse_size, default_value_t = 6)]
        size: usize,
    },
}

#[cfg(feature = "std")]
fn parse_size(raw: &str) -> Result<usize, String> {
    GameEngine::configure(raw)
        .map(|fleet| fleet.size)
        .map_err(|_| format!("board size must be one of {:?}", SUPPORTED_SIZES))
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play {
        seed: None,
        size: None,
        reveal: false,
    });

    match command {
        Commands::Play { seed, size, reveal } => {
            println!("Welcome to Battleship 🚢");
            let mut rng = seeded_rng(seed);
            let player = CliPlayer::stdio().with_size(size);
            let mut session = Session::new(player, TerminalView::stdout()).reveal_all(reveal);
            let summary = session.run(&mut rng)?;
            if summary.end == SessionEnd::Abandoned {
                println!("Goodbye!");
            }
        }
        Commands::Auto { seed, size } => {
            let mut rng = seeded_rng(seed);
            let ai = AiPlayer::new(SmallRng::seed_from_u64(rng.random()), size);
            let mut session = Session::new(ai, TerminalView::stdout());
            session.run(&mut rng)?;
        }
    }
    Ok(())
}
