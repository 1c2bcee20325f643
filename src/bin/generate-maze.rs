//! CLI for maze generation

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use maze_escape::{level_dimensions, GeneratorConfig, MazeGenerator, StartRange, PLAYER_START};

/// Seeded maze generator with a single exit
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated field width
    #[arg(long, default_value_t = 10)]
    width: usize,

    /// Generated field height
    #[arg(long, default_value_t = 10)]
    height: usize,

    /// Level, added to both width and height
    #[arg(long, default_value_t = 0)]
    level: usize,

    /// Random seed, defaults to current time in milliseconds
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<i64>,

    /// Extra openings are `width / divisor`
    #[arg(long, default_value_t = GeneratorConfig::DEFAULT_PERTURBATION_DIVISOR)]
    divisor: usize,

    /// Range of the carving start cell
    #[arg(long, value_enum, default_value_t = StartArg::Inset)]
    start_range: StartArg,

    /// Print seed, exit and distance from the player start to stderr
    #[arg(short, long)]
    report: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StartArg {
    /// Start in `[1, dim-3]`
    Inset,
    /// Start anywhere in the interior
    FullInterior,
}

impl From<StartArg> for StartRange {
    fn from(arg: StartArg) -> Self {
        match arg {
            StartArg::Inset => StartRange::Inset,
            StartArg::FullInterior => StartRange::FullInterior,
        }
    }
}

fn time_seed() -> anyhow::Result<i64> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("System clock is before UNIX epoch")?;
    Ok(now.as_millis() as i64)
}

/// Generate maze, print it
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = match args.seed {
        Some(seed) => seed,
        None => time_seed()?,
    };
    let (width, height) = level_dimensions(args.width, args.height, args.level);
    let config = GeneratorConfig::default()
        .with_start_range(args.start_range.into())
        .with_perturbation_divisor(args.divisor);

    let gen = MazeGenerator::new(config);
    let maze = gen.generate(width, height, seed)?;
    println!("{}", maze);

    if args.report {
        eprintln!("Seed: {}", seed);
        eprintln!("Extra openings: {}", gen.config().extra_openings(width));
        eprintln!("Exit: {},{}", maze.exit().x, maze.exit().y);
        match maze.distance_to_exit(PLAYER_START) {
            Some(steps) => eprintln!("Shortest path from start: {} steps", steps),
            None => eprintln!("Exit is not reachable from start"),
        }
    }
    Ok(())
}
