use rand::{Rng, rngs::StdRng};

use crate::config::MazeConfig;
use crate::generators::{ConnectivityStrategy, spanning::grow_spanning_tree};
use crate::maze::{Coord, Grid, Room, room::manhattan};

/// Joins rooms along a greedy spanning tree over their centers, carving an
/// L-shaped corridor between the exit points of each pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySpanningConnector;

impl ConnectivityStrategy for GreedySpanningConnector {
    fn connect(
        &self,
        grid: &mut Grid,
        rooms: &[Room],
        config: &MazeConfig,
        rng: &mut StdRng,
        filled: usize,
    ) -> usize {
        if rooms.len() < 2 {
            return filled;
        }

        let root = rng.random_range(0..rooms.len());
        let edges = grow_spanning_tree(rooms.len(), root, |i, j| {
            manhattan(rooms[i].center(), rooms[j].center())
        });

        let (width, height) = (grid.width(), grid.height());
        let mut filled = filled;
        for &(a, b) in &edges {
            let (room_a, room_b) = (&rooms[a], &rooms[b]);
            let start = room_a.exit_point(room_b.center(), width, height);
            let end = room_b.exit_point(room_a.center(), width, height);
            let horizontal_first = rng.random_bool(0.5);
            filled += carve_l_corridor(grid, start, end, config.hallway_width, horizontal_first);
        }
        tracing::debug!(
            "[rooms_and_corridors] carved {} corridors from root room {}",
            edges.len(),
            root
        );
        filled
    }
}

/// Carves two straight legs from `start` to `end`, turning at
/// `(end.x, start.y)` when `horizontal_first` and at `(start.x, end.y)` otherwise.
/// Returns the number of newly filled cells.
pub fn carve_l_corridor(
    grid: &mut Grid,
    start: Coord,
    end: Coord,
    width: u16,
    horizontal_first: bool,
) -> usize {
    let (sx, sy) = start;
    let (ex, ey) = end;
    let corner = if horizontal_first { (ex, sy) } else { (sx, ey) };
    grid.fill_line(start, corner, width) + grid.fill_line(corner, end, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;
    use crate::maze::Tile;

    fn two_room_grid() -> (Grid, Vec<Room>) {
        let mut grid = Grid::new(10, 6);
        let rooms = vec![Room::new(0, 0, 3, 3), Room::new(6, 0, 3, 3)];
        for room in &rooms {
            grid.fill_rect(room.x, room.y, room.width, room.height, Tile::Room);
        }
        (grid, rooms)
    }

    fn hallways(grid: &Grid) -> Vec<Coord> {
        grid.coords().filter(|&c| grid[c] == Tile::Hallway).collect()
    }

    #[test]
    fn test_aligned_rooms_get_straight_corridor() {
        let (mut grid, rooms) = two_room_grid();
        let start = rooms[0].exit_point(rooms[1].center(), 10, 6);
        let end = rooms[1].exit_point(rooms[0].center(), 10, 6);
        let filled = carve_l_corridor(&mut grid, start, end, 1, true);
        assert_eq!(filled, 3);
        // The vertical leg has no length, so only the row between the rooms is carved
        assert_eq!(hallways(&grid), vec![(3, 1), (4, 1), (5, 1)]);
    }

    #[test]
    fn test_l_corridor_orientation() {
        let mut horizontal = Grid::new(6, 6);
        carve_l_corridor(&mut horizontal, (0, 0), (3, 3), 1, true);
        assert_eq!(horizontal[(3, 0)], Tile::Hallway);
        assert_eq!(horizontal[(0, 3)], Tile::Empty);

        let mut vertical = Grid::new(6, 6);
        let filled = carve_l_corridor(&mut vertical, (0, 0), (3, 3), 1, false);
        assert_eq!(filled, 7);
        assert_eq!(vertical[(0, 3)], Tile::Hallway);
        assert_eq!(vertical[(3, 0)], Tile::Empty);
    }

    #[test]
    fn test_connect_links_two_rooms() {
        let (mut grid, rooms) = two_room_grid();
        let config = MazeConfig {
            width: 10,
            height: 6,
            ..MazeConfig::default()
        };
        let filled = GreedySpanningConnector.connect(
            &mut grid,
            &rooms,
            &config,
            &mut get_rng(Some(3)),
            18,
        );
        // Either coin flip yields the same straight run for aligned rooms
        assert_eq!(filled, 21);
        assert_eq!(hallways(&grid), vec![(3, 1), (4, 1), (5, 1)]);
    }

    #[test]
    fn test_single_room_is_noop() {
        let mut grid = Grid::new(5, 5);
        grid.fill_rect(1, 1, 2, 2, Tile::Room);
        let rooms = vec![Room::new(1, 1, 2, 2)];
        let before = grid.clone();
        let filled = GreedySpanningConnector.connect(
            &mut grid,
            &rooms,
            &MazeConfig::default(),
            &mut get_rng(Some(1)),
            4,
        );
        assert_eq!(filled, 4);
        assert_eq!(grid, before);
    }
}
