//! CLI for measuring the way out of a maze

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{bail, Context};
use clap::Parser;
use maze_escape::{Coordinate, Maze, PLAYER_START};

/// The shortest way from the start to the exit of a maze
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Starting cell as `X,Y`, defaults to the player start `1,1`
    #[arg(long, value_parser = parse_coordinate)]
    from: Option<Coordinate>,

    /// File, where to read the maze. Use `-` for stdin.
    file: PathBuf,
}

fn parse_coordinate(s: &str) -> anyhow::Result<Coordinate> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("Expected `X,Y`, got `{}`", s))?;
    Ok(Coordinate {
        x: x.trim().parse().context("Invalid x coordinate")?,
        y: y.trim().parse().context("Invalid y coordinate")?,
    })
}

/// Read maze from file, print output
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let emojis = if args.file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&args.file)
            .with_context(|| format!("Could not read {}", args.file.display()))?
    };
    let maze = Maze::parse_emojis(emojis.trim())?;
    let from = args.from.unwrap_or(PLAYER_START);
    log::debug!("Searching path from {:?} to {:?}", from, maze.exit());

    if !maze.grid().contains(from) {
        bail!("Start {:?} lies outside the maze", from);
    }
    match maze.distance_to_exit(from) {
        Some(steps) => println!("The shortest path is {} steps.", steps),
        None => println!("The exit cannot be reached from {},{}.", from.x, from.y),
    }
    Ok(())
}
