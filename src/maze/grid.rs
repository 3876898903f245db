use super::cell::Tile;
use super::{Coord, get_neighbors};

/// Row-major tile buffer with a fixed size for the lifetime of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Tile]>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Creates a grid with every cell set to [`Tile::Empty`].
    pub fn new(width: u16, height: u16) -> Self {
        let data = vec![Tile::Empty; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Number of cells in the grid.
    pub fn area(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checks if the given coordinate is within the bounds of the grid.
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        let (x, y) = coord;
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    fn ravel_index(&self, x: i32, y: i32) -> usize {
        // Callers check bounds, so both coordinates are non-negative here
        y as usize * self.width as usize + x as usize
    }

    /// Returns the tile at `coord`, or `None` when it lies outside the grid.
    pub fn get(&self, coord: Coord) -> Option<Tile> {
        self.is_in_bounds(coord)
            .then(|| self.data[self.ravel_index(coord.0, coord.1)])
    }

    /// Row `y` as a slice, left to right.
    pub fn row(&self, y: u16) -> &[Tile] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.data
    }

    /// Iterates over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Number of non-empty cells.
    pub fn filled_count(&self) -> usize {
        self.data.iter().filter(|tile| tile.is_filled()).count()
    }

    /// Whether every cell of the rectangle is inside the grid and empty.
    pub fn is_area_empty(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        (y..y + height).all(|yy| {
            (x..x + width).all(|xx| self.get((xx, yy)) == Some(Tile::Empty))
        })
    }

    /// Overwrites every in-bounds cell of the rectangle with `tile`.
    /// Returns how many of those cells were empty before.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, tile: Tile) -> usize {
        let mut filled = 0;
        for yy in y..y + height {
            for xx in x..x + width {
                if !self.is_in_bounds((xx, yy)) {
                    continue;
                }
                if self[(xx, yy)] == Tile::Empty {
                    filled += 1;
                }
                self[(xx, yy)] = tile;
            }
        }
        filled
    }

    /// Carves an axis-aligned hallway segment from `from` to `to` (both inclusive),
    /// widened to `width` cells across its direction starting at `start - width / 2`.
    ///
    /// A diagonal request is split into a horizontal leg along `from.1` followed by a
    /// vertical leg along `to.0`. Cells outside the grid are ignored, room cells are
    /// never touched, and only cells that were empty are counted in the return value.
    pub fn fill_line(&mut self, from: Coord, to: Coord, width: u16) -> usize {
        let (x0, y0) = from;
        let (x1, y1) = to;
        let span = width as i32;

        if x0 == x1 {
            let xs = x0 - span / 2;
            (y0.min(y1)..=y0.max(y1))
                .flat_map(|y| (xs..xs + span).map(move |x| (x, y)))
                .map(|coord| self.carve_hallway(coord) as usize)
                .sum()
        } else if y0 == y1 {
            let ys = y0 - span / 2;
            (ys..ys + span)
                .flat_map(|y| (x0.min(x1)..=x0.max(x1)).map(move |x| (x, y)))
                .map(|coord| self.carve_hallway(coord) as usize)
                .sum()
        } else {
            self.fill_line(from, (x1, y0), width) + self.fill_line((x1, y0), to, width)
        }
    }

    /// Turns an empty cell into a hallway. Returns `true` if the cell was newly filled.
    fn carve_hallway(&mut self, coord: Coord) -> bool {
        match self.get(coord) {
            Some(Tile::Empty) => {
                self[coord] = Tile::Hallway;
                true
            }
            _ => false,
        }
    }

    /// Number of hallway cells among the 4-neighbours of `coord`.
    pub fn hallway_neighbors(&self, coord: Coord) -> usize {
        get_neighbors(coord, self)
            .filter(|&n| self[n] == Tile::Hallway)
            .count()
    }

    /// Whether any 4-neighbour of `coord` is a room cell.
    pub fn touches_room(&self, coord: Coord) -> bool {
        get_neighbors(coord, self).any(|n| self[n] == Tile::Room)
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Tile;

    fn index(&self, index: Coord) -> &Self::Output {
        assert!(self.is_in_bounds(index), "coordinate {:?} is out of bounds", index);
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        assert!(self.is_in_bounds(index), "coordinate {:?} is out of bounds", index);
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}
