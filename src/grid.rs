//! Wall lattice

use crate::Coordinate;

/// Fixed-size lattice of walls, indexed `[y][x]`. `true` is a wall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<bool>>,
}

impl Grid {
    /// Lattice where every cell is a wall, with the border sealed.
    ///
    /// Dimensions are expected to be validated by the caller.
    pub(crate) fn walled(width: usize, height: usize) -> Self {
        let cells = (0..height)
            .map(|_| (0..width).map(|_| true).collect())
            .collect();
        let mut grid = Grid {
            width,
            height,
            cells,
        };
        grid.seal_border();
        grid
    }

    /// Build from rows of wall flags. Rows must be of equal length.
    pub(crate) fn from_rows(cells: Vec<Vec<bool>>) -> Self {
        let height = cells.len();
        let width = cells.first().map_or(0, |row| row.len());
        Grid {
            width,
            height,
            cells,
        }
    }

    /// Turn the outer ring into walls. Idempotent.
    pub(crate) fn seal_border(&mut self) {
        for x in 0..self.width {
            self.cells[0][x] = true;
            self.cells[self.height - 1][x] = true;
        }
        for row in self.cells.iter_mut() {
            row[0] = true;
            row[self.width - 1] = true;
        }
    }

    /// Open a cell. The caller keeps coordinates off the border.
    pub(crate) fn open(&mut self, c: Coordinate) {
        debug_assert!(!self.is_border(c), "attempt to open border cell {:?}", c);
        self.cells[c.y][c.x] = false;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        c.x < self.width && c.y < self.height
    }

    /// Wall flag of a cell, `None` outside the grid
    pub fn get(&self, c: Coordinate) -> Option<bool> {
        self.cells.get(c.y).and_then(|row| row.get(c.x)).copied()
    }

    /// Cells outside the grid count as walls
    pub fn is_wall(&self, c: Coordinate) -> bool {
        self.get(c).unwrap_or(true)
    }

    pub fn is_open(&self, c: Coordinate) -> bool {
        !self.is_wall(c)
    }

    /// Whether the cell lies on the outer ring
    pub fn is_border(&self, c: Coordinate) -> bool {
        c.x == 0 || c.y == 0 || c.x == self.width - 1 || c.y == self.height - 1
    }

    /// Whether the cell lies strictly inside the border
    pub fn is_interior(&self, c: Coordinate) -> bool {
        self.contains(c) && !self.is_border(c)
    }

    /// Rows of wall flags, top to bottom
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.cells
    }

    /// All open cells in row-major order
    pub fn open_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, wall)| !**wall)
                .map(move |(x, _)| Coordinate { x, y })
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{grid::Grid, Coordinate};

    #[test]
    fn walled_grid_is_all_walls() {
        let grid = Grid::walled(5, 4);
        assert_eq!((grid.width(), grid.height()), (5, 4));
        assert!(grid.rows().iter().flatten().all(|wall| *wall));
        assert_eq!(grid.open_cells().count(), 0);
    }

    #[test]
    fn sealing_border_is_idempotent() {
        let mut grid = Grid::walled(4, 4);
        grid.open(Coordinate { x: 1, y: 2 });
        let before = grid.clone();
        grid.seal_border();
        grid.seal_border();
        assert_eq!(grid, before);
    }

    #[test]
    fn sealing_border_closes_outer_ring_only() {
        let mut grid = Grid::from_rows(vec![vec![false; 4]; 3]);
        grid.seal_border();
        for y in 0..3 {
            for x in 0..4 {
                let c = Coordinate { x, y };
                assert_eq!(grid.is_wall(c), grid.is_border(c), "at {:?}", c);
            }
        }
    }

    #[test]
    fn outside_cells_are_walls() {
        let grid = Grid::walled(3, 3);
        assert_eq!(grid.get(Coordinate { x: 3, y: 0 }), None);
        assert!(grid.is_wall(Coordinate { x: 7, y: 7 }));
        assert!(!grid.is_interior(Coordinate { x: 7, y: 1 }));
        assert!(grid.is_interior(Coordinate { x: 1, y: 1 }));
    }

    #[test]
    fn open_cells_in_row_major_order() {
        let mut grid = Grid::walled(5, 5);
        grid.open(Coordinate { x: 3, y: 1 });
        grid.open(Coordinate { x: 1, y: 2 });
        grid.open(Coordinate { x: 1, y: 1 });
        let open: Vec<_> = grid.open_cells().collect();
        assert_eq!(
            open,
            vec![
                Coordinate { x: 1, y: 1 },
                Coordinate { x: 3, y: 1 },
                Coordinate { x: 1, y: 2 }
            ]
        );
    }
}
