use rand::{Rng, rngs::StdRng};

use crate::config::MazeConfig;
use crate::generators::ConnectivityStrategy;
use crate::generators::spanning::{DistanceMatrix, grow_spanning_tree};
use crate::maze::{Grid, Room, WallPoint, room::manhattan};

/// Grows the same greedy spanning tree as [`super::GreedySpanningConnector`] but
/// carves each corridor between the walls that face each other most directly:
/// a straight run where the rooms' spans overlap, otherwise a straight or
/// Z-shaped run between the closest pair of wall midpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosestWallConnector;

impl ConnectivityStrategy for ClosestWallConnector {
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

        let distances = DistanceMatrix::new(rooms.len(), |i, j| {
            manhattan(rooms[i].center(), rooms[j].center())
        });
        let root = rng.random_range(0..rooms.len());
        let edges = grow_spanning_tree(rooms.len(), root, |i, j| distances.get(i, j));

        let mut filled = filled;
        for &(a, b) in &edges {
            filled += carve_between(grid, &rooms[a], &rooms[b], config.hallway_width);
        }
        tracing::debug!(
            "[closest_wall] carved {} corridors from root room {}",
            edges.len(),
            root
        );
        filled
    }
}

/// Carves one corridor between `a` and `b`, returning the number of newly filled cells.
fn carve_between(grid: &mut Grid, a: &Room, b: &Room, width: u16) -> usize {
    if let Some(filled) = carve_straight_overlap(grid, a, b, width) {
        return filled;
    }

    let (grid_width, grid_height) = (grid.width(), grid.height());
    let (start, end) = closest_wall_midpoints(
        &a.wall_midpoints(grid_width, grid_height),
        &b.wall_midpoints(grid_width, grid_height),
    );
    if start.coord.0 == end.coord.0 || start.coord.1 == end.coord.1 {
        return grid.fill_line(start.coord, end.coord, width);
    }
    carve_z_path(grid, start, end, width)
}

/// Carves a single straight corridor when the rooms share rows (checked first) or
/// columns and are separated along the other axis. The corridor runs along the
/// middle of the shared span, from the wall of `a` to the facing wall of `b`.
///
/// Returns `None` when neither span overlaps.
pub fn carve_straight_overlap(grid: &mut Grid, a: &Room, b: &Room, width: u16) -> Option<usize> {
    let overlap_top = a.y.max(b.y);
    let overlap_bottom = a.bottom().min(b.bottom());
    if overlap_top <= overlap_bottom {
        let y = ((overlap_top + overlap_bottom) / 2).clamp(overlap_top, overlap_bottom);
        if a.right() < b.x {
            return Some(grid.fill_line((a.right() + 1, y), (b.x - 1, y), width));
        } else if b.right() < a.x {
            return Some(grid.fill_line((a.x - 1, y), (b.right() + 1, y), width));
        }
    }

    let overlap_left = a.x.max(b.x);
    let overlap_right = a.right().min(b.right());
    if overlap_left <= overlap_right {
        let x = ((overlap_left + overlap_right) / 2).clamp(overlap_left, overlap_right);
        if a.bottom() < b.y {
            return Some(grid.fill_line((x, a.bottom() + 1), (x, b.y - 1), width));
        } else if b.bottom() < a.y {
            return Some(grid.fill_line((x, a.y - 1), (x, b.bottom() + 1), width));
        }
    }
    None
}

/// The pair of wall midpoints with the smallest Manhattan distance, first pair wins ties.
fn closest_wall_midpoints(from: &[WallPoint; 4], to: &[WallPoint; 4]) -> (WallPoint, WallPoint) {
    let mut best = (from[0], to[0]);
    let mut best_dist = manhattan(from[0].coord, to[0].coord);
    for &start in from {
        for &end in to {
            let dist = manhattan(start.coord, end.coord);
            if dist < best_dist {
                best_dist = dist;
                best = (start, end);
            }
        }
    }
    best
}

/// Three-leg corridor: out of the start wall, along the midline between the two
/// points, then into the end point. Left and right walls exit horizontally, top and
/// bottom walls exit vertically.
fn carve_z_path(grid: &mut Grid, start: WallPoint, end: WallPoint, width: u16) -> usize {
    let (sx, sy) = start.coord;
    let (ex, ey) = end.coord;
    if start.side.is_horizontal() {
        let mid_x = ((sx + ex) / 2).clamp(0, grid.width() as i32 - 1);
        grid.fill_line((sx, sy), (mid_x, sy), width)
            + grid.fill_line((mid_x, sy), (mid_x, ey), width)
            + grid.fill_line((mid_x, ey), (ex, ey), width)
    } else {
        let mid_y = ((sy + ey) / 2).clamp(0, grid.height() as i32 - 1);
        grid.fill_line((sx, sy), (sx, mid_y), width)
            + grid.fill_line((sx, mid_y), (ex, mid_y), width)
            + grid.fill_line((ex, mid_y), (ex, ey), width)
    }
}
