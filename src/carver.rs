//! Randomized depth-first carving on the stride-2 lattice

use crate::{grid::Grid, Coordinate, Direction, RandomStream};

/// One cell on the carving path, with its shuffled directions and the
/// index of the next direction to try.
struct Frame {
    cell: Coordinate,
    directions: [Direction; 4],
    next: usize,
}

impl Frame {
    /// Enter a cell: open it and shuffle the directions
    fn enter(grid: &mut Grid, cell: Coordinate, random: &mut impl RandomStream) -> Self {
        grid.open(cell);
        Frame {
            cell,
            directions: shuffled_directions(random),
            next: 0,
        }
    }
}

/// [Direction::ALL] in Fisher-Yates order: for each `i`, swap with a
/// uniform index from `[i, 4)`.
pub(crate) fn shuffled_directions(random: &mut impl RandomStream) -> [Direction; 4] {
    let mut directions = Direction::ALL;
    for i in 0..directions.len() {
        let r = random.next_in_range(i, directions.len());
        directions.swap(i, r);
    }
    directions
}

/// Carve passages starting from `start`.
///
/// From each cell, try the directions in shuffled order. If the cell two
/// steps away is interior and still a wall, open the wall in between and
/// continue from there. Returns visited cells in visit order.
///
/// The walk keeps its own stack of frames, so grid size is not limited by
/// the call stack; visiting and draw order are those of the plain
/// recursive walk.
pub fn carve(
    grid: &mut Grid,
    start: Coordinate,
    random: &mut impl RandomStream,
) -> Vec<Coordinate> {
    let mut visited = vec![start];
    let mut stack = vec![Frame::enter(grid, start, random)];

    while let Some(frame) = stack.last_mut() {
        let Some(&direction) = frame.directions.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;
        let cell = frame.cell;

        let Some(target) = cell.step(direction, 2) else {
            continue;
        };
        if grid.is_interior(target) && grid.is_wall(target) {
            if let Some(between) = cell.step(direction, 1) {
                grid.open(between);
            }
            visited.push(target);
            stack.push(Frame::enter(grid, target, random));
        }
    }

    log::trace!(
        "Carved {} cells on the stride-2 lattice from {:?}",
        visited.len(),
        start
    );
    visited
}
