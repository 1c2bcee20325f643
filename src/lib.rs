//! Seeded maze generator with a single exit
//!
//! A maze is a lattice of walls with an impassable border. Passages are
//! carved with randomized depth-first backtracking, a few extra cells are
//! opened to create loops, and one interior cell is opened as the exit.
//! The same `(width, height, seed)` always produces the same maze.
//!
//! # Examples
//! ```
//! use maze_escape::{generate, Coordinate, Direction};
//!
//! let maze = generate(11, 9, 42).unwrap();
//! assert!(maze.grid().is_wall(Coordinate { x: 0, y: 0 }));
//! assert!(maze.grid().is_open(maze.exit()));
//!
//! // Moving into a wall is not allowed
//! let blocked = maze.step(Coordinate { x: 1, y: 0 }, Direction::Up);
//! assert_eq!(blocked, None);
//! ```
//!
//! ## Text form
//! ```
//! use maze_escape::Maze;
//!
//! let maze_emojis = "
//! 🟫🟫🟫🟫🟫
//! 🟫🟩🟩🟩🟫
//! 🟫🟫🟫🟩🟫
//! 🟫❎🟩🟩🟫
//! 🟫🟫🟫🟫🟫";
//! let maze = Maze::parse_emojis(maze_emojis.trim()).unwrap();
//! assert_eq!(maze.distance_to_exit(maze_escape::PLAYER_START), Some(6));
//! assert_eq!(maze.to_string(), maze_emojis.trim());
//! ```

use std::collections::VecDeque;
use std::fmt;

use anyhow::{anyhow, bail};
use itertools::Itertools;

pub mod carver;
pub mod config;
mod error;
pub mod grid;
pub mod maze_generator;
pub mod random;

pub use config::{GeneratorConfig, StartRange};
pub use error::GenerationError;
pub use grid::Grid;
pub use maze_generator::{generate, MazeGenerator, MIN_DIMENSION};
pub use random::{RandomStream, SeededStream};

/// Where the player conventionally starts
pub const PLAYER_START: Coordinate = Coordinate { x: 1, y: 1 };

/// Location in the maze
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    /// Move `distance` cells towards `direction`, `None` if that leaves the
    /// non-negative quadrant.
    pub fn step(self, direction: Direction, distance: usize) -> Option<Coordinate> {
        let (dx, dy) = direction.delta();
        Some(Coordinate {
            x: self.x.checked_add_signed(dx * distance as isize)?,
            y: self.y.checked_add_signed(dy * distance as isize)?,
        })
    }
}

/// Axis-aligned unit step
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order they are shuffled from
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// `(dx, dy)`, with `y` growing downwards
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// Grid dimensions for a level: the base size grows by one per level
pub fn level_dimensions(base_width: usize, base_height: usize, level: usize) -> (usize, usize) {
    (base_width + level, base_height + level)
}

/// Generated maze: the wall lattice and its exit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    exit: Coordinate,
}

impl Maze {
    const S_EXIT: char = '❎';
    const S_OPEN: char = '🟩';
    const S_WALL: char = '🟫';

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn exit(&self) -> Coordinate {
        self.exit
    }

    pub fn is_exit(&self, c: Coordinate) -> bool {
        c == self.exit
    }

    /// Neighbouring cell, if it can be entered from `from`
    pub fn step(&self, from: Coordinate, direction: Direction) -> Option<Coordinate> {
        from.step(direction, 1)
            .filter(|target| self.grid.is_open(*target))
    }

    /// Length of the shortest path over open cells from `from` to the exit.
    ///
    /// Breadth-first search; `None` if the exit cannot be reached or `from`
    /// is a wall.
    pub fn distance_to_exit(&self, from: Coordinate) -> Option<usize> {
        if self.grid.is_wall(from) {
            return None;
        }
        let mut dist: Vec<Vec<Option<usize>>> = (0..self.grid.height())
            .map(|_| (0..self.grid.width()).map(|_| None).collect())
            .collect();
        dist[from.y][from.x] = Some(0);
        let mut queue = VecDeque::from([from]);

        while let Some(current) = queue.pop_front() {
            let d = dist[current.y][current.x]?;
            if current == self.exit {
                return Some(d);
            }
            for direction in Direction::ALL {
                if let Some(next) = self.step(current, direction) {
                    if dist[next.y][next.x].is_none() {
                        dist[next.y][next.x] = Some(d + 1);
                        queue.push_back(next);
                    }
                }
            }
        }
        None
    }

    /// Parse maze representation from string
    ///
    /// - `emojis`: one row per line, `🟫` for walls, `🟩` for open cells and
    ///   `❎` for the exit.
    ///
    /// Returns error on unknown characters, rows of unequal length, a maze
    /// smaller than 3x3, or if there is not exactly one exit. Open cells on
    /// the border are closed.
    pub fn parse_emojis(emojis: &str) -> anyhow::Result<Self> {
        let mut exit = None;
        let mut cells: Vec<Vec<bool>> = vec![];

        for (y, line) in emojis.split('\n').enumerate() {
            let mut row = vec![];
            for (x, c) in line.chars().enumerate() {
                match c {
                    Self::S_WALL => row.push(true),
                    Self::S_OPEN => row.push(false),
                    Self::S_EXIT => {
                        if exit.is_some() {
                            bail!("Second exit at y={}, x={}", y, x);
                        }
                        exit = Some(Coordinate { x, y });
                        row.push(false);
                    }
                    val => bail!("Unexpected character `{}` at y={}, x={}", val, y, x),
                }
            }
            if let Some(first) = cells.first() {
                if first.len() != row.len() {
                    bail!(
                        "Row {} has {} cells, expected {}",
                        y,
                        row.len(),
                        first.len()
                    );
                }
            }
            cells.push(row);
        }

        let mut grid = Grid::from_rows(cells);
        if grid.width() < MIN_DIMENSION || grid.height() < MIN_DIMENSION {
            bail!(GenerationError::InvalidDimensions {
                width: grid.width(),
                height: grid.height(),
            });
        }
        let exit = exit.ok_or_else(|| anyhow!("Exit not found in maze"))?;
        if !grid.is_interior(exit) {
            bail!("Exit {:?} lies on the border", exit);
        }
        grid.seal_border();

        Ok(Maze { grid, exit })
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = (0..self.grid.height())
            .map(|y| {
                (0..self.grid.width())
                    .map(|x| {
                        let c = Coordinate { x, y };
                        if self.is_exit(c) {
                            Self::S_EXIT
                        } else if self.grid.is_wall(c) {
                            Self::S_WALL
                        } else {
                            Self::S_OPEN
                        }
                    })
                    .join("")
            })
            .join("\n");
        write!(f, "{}", text)
    }
}
