use clap::Parser;
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sliding_penguins::{Game, GameError, config, logging, setup};
use std::io;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of turns each penguin gets.
    #[arg(long, default_value_t = config::MAX_TURNS)]
    turns: u32,

    /// Seed for the terrain and computer moves; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Let the computer drive every penguin, including yours.
    #[arg(long)]
    auto: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Debug filter to specify log topics (e.g., "slide,collision")
    /// Available topics: slide, collision, ability, ai
    #[arg(long)]
    debug_filter: Option<String>,
}

fn play(args: Args) -> Result<(), GameError> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("Welcome to Sliding Penguins Puzzle Game App. An {0}x{0} icy terrain grid is being generated.", config::GRID_SIZE);
    println!("Penguins, hazards, and food items are also being generated.");
    let terrain = setup::generate_terrain(&mut rng)?;
    let player = if args.auto {
        None
    } else {
        setup::player_penguin(&terrain)
    };

    let mut game = Game::new(terrain, player, args.turns, rng);
    let stdin = io::stdin();
    let stdout = io::stdout();
    game.run(&mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    let level = logging::parse_level(&args.log_level);
    if let Err(e) = logging::init_logger(level, args.debug_filter.clone()) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    info!("Sliding penguins starting with {:?}", args);

    if let Err(e) = play(args) {
        error!("Game aborted: {}", e);
        eprintln!("Game aborted: {}", e);
        std::process::exit(1);
    }
}
