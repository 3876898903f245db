use crate::maze::{Coord, Grid, Room, Tile, get_neighbors};

/// Marks every cell that is a 4-neighbour of some room cell.
fn room_adjacency(grid: &Grid, rooms: &[Room]) -> Vec<bool> {
    let width = grid.width() as usize;
    let mut adjacent = vec![false; grid.area()];
    for room in rooms {
        for y in room.y..=room.bottom() {
            for x in room.x..=room.right() {
                for (nx, ny) in get_neighbors((x, y), grid) {
                    adjacent[ny as usize * width + nx as usize] = true;
                }
            }
        }
    }
    adjacent
}

/// A hallway cell with at most one hallway neighbour that is not next to a room.
fn is_dead_end(grid: &Grid, room_adjacent: &[bool], coord: Coord) -> bool {
    let (x, y) = coord;
    grid[coord] == Tile::Hallway
        && !room_adjacent[y as usize * grid.width() as usize + x as usize]
        && grid.hallway_neighbors(coord) <= 1
}

/// Removes hallway dead ends: hallway cells with at most one hallway neighbour that
/// do not touch a room, repeated until no such cell is left.
///
/// Afterwards every hallway cell either has at least two hallway neighbours or is
/// next to a room, and running the pass again changes nothing. Returns the number
/// of non-empty cells left in the grid.
pub fn prune_dead_ends(grid: &mut Grid, rooms: &[Room]) -> usize {
    if grid.is_empty() {
        return 0;
    }

    let room_adjacent = room_adjacency(grid, rooms);

    // The stack keeps candidates only; each is checked again when popped
    let mut stack = grid
        .coords()
        .filter(|&coord| is_dead_end(grid, &room_adjacent, coord))
        .collect::<Vec<_>>();

    let mut pruned = 0;
    while let Some(coord) = stack.pop() {
        if !is_dead_end(grid, &room_adjacent, coord) {
            continue;
        }
        grid[coord] = Tile::Empty;
        pruned += 1;
        let grid: &Grid = grid;
        stack.extend(get_neighbors(coord, grid).filter(|&n| is_dead_end(grid, &room_adjacent, n)));
    }

    let filled = grid.filled_count();
    tracing::debug!("[prune] removed {} dead-end cells, {} cells remain filled", pruned, filled);
    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_room(grid: &mut Grid, room: Room) -> Room {
        grid.fill_rect(room.x, room.y, room.width, room.height, Tile::Room);
        room
    }

    fn hallways(grid: &Grid) -> Vec<Coord> {
        grid.coords().filter(|&c| grid[c] == Tile::Hallway).collect()
    }

    #[test]
    fn test_isolated_stub_is_removed() {
        let mut grid = Grid::new(8, 5);
        grid.fill_line((2, 2), (4, 2), 1);
        assert_eq!(prune_dead_ends(&mut grid, &[]), 0);
        assert!(hallways(&grid).is_empty());
    }

    #[test]
    fn test_room_adjacent_dead_end_is_kept() {
        let mut grid = Grid::new(8, 5);
        let room = with_room(&mut grid, Room::new(0, 0, 2, 2));
        grid[(2, 1)] = Tile::Hallway;
        assert_eq!(prune_dead_ends(&mut grid, &[room]), 5);
        assert_eq!(hallways(&grid), vec![(2, 1)]);
    }

    #[test]
    fn test_branch_is_eroded_back_to_corridor() {
        let mut grid = Grid::new(12, 7);
        let a = with_room(&mut grid, Room::new(0, 2, 2, 2));
        let b = with_room(&mut grid, Room::new(9, 2, 2, 2));
        grid.fill_line((2, 2), (8, 2), 1);
        // Spur hanging off the corridor
        grid.fill_line((5, 3), (5, 6), 1);
        let filled = prune_dead_ends(&mut grid, &[a, b]);
        assert_eq!(filled, 8 + 7);
        assert_eq!(
            hallways(&grid),
            (2..=8).map(|x| (x, 2)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_loop_survives() {
        let mut grid = Grid::new(6, 6);
        grid.fill_line((1, 1), (4, 1), 1);
        grid.fill_line((4, 1), (4, 4), 1);
        grid.fill_line((4, 4), (1, 4), 1);
        grid.fill_line((1, 4), (1, 1), 1);
        let before = grid.clone();
        assert_eq!(prune_dead_ends(&mut grid, &[]), 12);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_pruning_is_idempotent() {
        let mut grid = Grid::new(12, 7);
        let a = with_room(&mut grid, Room::new(0, 0, 3, 3));
        grid.fill_line((3, 1), (10, 1), 1);
        grid.fill_line((10, 1), (10, 5), 1);
        grid.fill_line((6, 1), (6, 5), 2);
        let first = prune_dead_ends(&mut grid, &[a]);
        let snapshot = grid.clone();
        let second = prune_dead_ends(&mut grid, &[a]);
        assert_eq!(first, second);
        assert_eq!(grid, snapshot);
        // The two-wide block has no leaves; everything past it erodes away
        assert_eq!(hallways(&grid).len(), 2 + 10);
        assert_eq!(grid[(3, 1)], Tile::Hallway);
        assert_eq!(grid[(7, 1)], Tile::Empty);
        assert_eq!(grid[(10, 5)], Tile::Empty);
    }

    #[test]
    fn test_empty_grid() {
        let mut grid = Grid::new(0, 0);
        assert_eq!(prune_dead_ends(&mut grid, &[]), 0);
    }
}
