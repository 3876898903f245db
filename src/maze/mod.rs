pub mod cell;
pub mod grid;
pub mod room;

pub use cell::Tile;
pub use grid::Grid;
pub use room::{Room, Side, WallPoint};

/// Grid coordinate `(x, y)`. Signed so that points one step outside a wall can be
/// represented before they are clamped back into the grid.
pub type Coord = (i32, i32);

/// The finished layout: the tile grid and the rooms in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    rooms: Vec<Room>,
}

impl Maze {
    pub fn new(grid: Grid, rooms: Vec<Room>) -> Self {
        Maze { grid, rooms }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    /// Number of room and hallway cells.
    pub fn filled_count(&self) -> usize {
        self.grid.filled_count()
    }

    /// Fraction of the grid that is filled, `0.0` for an empty grid.
    pub fn coverage(&self) -> f64 {
        match self.grid.area() {
            0 => 0.0,
            area => self.filled_count() as f64 / area as f64,
        }
    }
}

/// Get neighbors of a cell.
/// A neighbor is considered a cell that is one step away in the cardinal directions
/// (right, left, down, up) and inside the grid.
pub fn get_neighbors(coord: Coord, grid: &Grid) -> impl Iterator<Item = Coord> + '_ {
    let (x, y) = coord;
    [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
        .into_iter()
        .filter(move |&c| grid.is_in_bounds(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_neighbors() {
        let grid = Grid::new(7, 7);
        let neighbors = get_neighbors((3, 3), &grid).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(4, 3), (2, 3), (3, 4), (3, 2)]);
        let corner = get_neighbors((0, 0), &grid).collect::<Vec<_>>();
        assert_eq!(corner, vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn test_coverage() {
        let mut grid = Grid::new(4, 5);
        grid.fill_rect(0, 0, 2, 2, Tile::Room);
        grid.fill_line((2, 0), (3, 0), 1);
        let maze = Maze::new(grid, vec![Room::new(0, 0, 2, 2)]);
        assert_eq!(maze.filled_count(), 6);
        assert!((maze.coverage() - 0.3).abs() < 1e-9);
        assert_eq!(Maze::new(Grid::new(0, 0), vec![]).coverage(), 0.0);
    }
}
