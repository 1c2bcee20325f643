//! Maze generation

use crate::{
    carver, config::GeneratorConfig, grid::Grid, Coordinate, GenerationError, Maze, RandomStream,
    SeededStream,
};

/// Smallest width or height that leaves one interior cell
pub const MIN_DIMENSION: usize = 3;

/// Maze generator with a single exit.
///
/// Each call owns a fresh random stream, so the same `(width, height, seed)`
/// always gives the same maze.
#[derive(Debug, Clone, Copy, Default)]
pub struct MazeGenerator {
    config: GeneratorConfig,
}

impl MazeGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a maze from a seed
    pub fn generate(
        &self,
        width: usize,
        height: usize,
        seed: i64,
    ) -> Result<Maze, GenerationError> {
        log::debug!("Generating {}x{} maze with seed {}", width, height, seed);
        self.generate_with(width, height, &mut SeededStream::new(seed))
    }

    /// Generate a maze, drawing from the given stream.
    ///
    /// Steps run in order: walled grid with sealed border, carving from a
    /// random start, extra openings, exit placement.
    pub fn generate_with<R: RandomStream>(
        &self,
        width: usize,
        height: usize,
        random: &mut R,
    ) -> Result<Maze, GenerationError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(GenerationError::InvalidDimensions { width, height });
        }
        self.config.validate()?;

        let mut grid = Grid::walled(width, height);

        let start = Coordinate {
            x: self.config.start_range.draw(random, width),
            y: self.config.start_range.draw(random, height),
        };
        log::debug!("Carving from {:?}", start);
        carver::carve(&mut grid, start, random);

        self.perturb(&mut grid, random);
        let exit = Self::place_exit(&mut grid, random);
        log::debug!("Exit placed at {:?}", exit);

        Ok(Maze { grid, exit })
    }

    /// Open `width / divisor` random interior cells, whatever their state
    fn perturb<R: RandomStream>(&self, grid: &mut Grid, random: &mut R) {
        for _ in 0..self.config.extra_openings(grid.width()) {
            let cell = Self::interior_cell(grid, random);
            log::trace!("Extra opening at {:?}", cell);
            grid.open(cell);
        }
    }

    fn place_exit<R: RandomStream>(grid: &mut Grid, random: &mut R) -> Coordinate {
        let exit = Self::interior_cell(grid, random);
        grid.open(exit);
        exit
    }

    /// Uniform cell in `[1, width-2] x [1, height-2]`, `x` drawn first
    fn interior_cell<R: RandomStream>(grid: &Grid, random: &mut R) -> Coordinate {
        let x = random.next_in_range(1, grid.width() - 1);
        let y = random.next_in_range(1, grid.height() - 1);
        Coordinate { x, y }
    }
}

/// Generate a maze with the default configuration
///
/// # Examples
/// ```
/// let maze = maze_escape::generate(10, 10, 42).unwrap();
/// assert_eq!(maze, maze_escape::generate(10, 10, 42).unwrap());
/// assert!(maze.grid().is_open(maze.exit()));
/// ```
pub fn generate(width: usize, height: usize, seed: i64) -> Result<Maze, GenerationError> {
    MazeGenerator::default().generate(width, height, seed)
}
