use rand::{Rng, rngs::StdRng};

use crate::config::MazeConfig;
use crate::maze::{Grid, Room, Tile};

/// Upper bound on sampled room candidates per run.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Inclusive random integer in `[min, max]`, or `min` when the range is inverted.
fn rand_in_range(rng: &mut StdRng, min: u16, max: u16) -> u16 {
    if max < min {
        return min;
    }
    rng.random_range(min..=max)
}

/// Outcome of [`place_rooms`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Rooms in placement order.
    pub rooms: Vec<Room>,
    /// Number of cells the rooms cover.
    pub filled: usize,
    /// Candidates sampled, never more than [`MAX_PLACEMENT_ATTEMPTS`].
    pub attempts: usize,
}

/// Rejection-samples non-overlapping rooms into `grid`.
///
/// Each attempt draws a size, then a position that keeps the rectangle inside the
/// grid, and keeps the room only if every cell under it is empty. Stops once the
/// filled count reaches [`MazeConfig::target_filled`] or after
/// [`MAX_PLACEMENT_ATTEMPTS`] attempts. A candidate whose area would push the
/// filled count past the target is rejected before a position is drawn, so the
/// returned count never exceeds the target.
///
pub fn place_rooms(grid: &mut Grid, config: &MazeConfig, rng: &mut StdRng) -> Placement {
    let target = config.target_filled();
    let (grid_width, grid_height) = (grid.width(), grid.height());
    let mut rooms = Vec::new();
    let mut filled = 0;
    let mut attempts = 0;

    while filled < target && attempts < MAX_PLACEMENT_ATTEMPTS {
        attempts += 1;
        let w = rand_in_range(rng, config.min_room_width, config.max_room_width.min(grid_width));
        let h = rand_in_range(
            rng,
            config.min_room_height,
            config.max_room_height.min(grid_height),
        );
        if w == 0 || h == 0 || w > grid_width || h > grid_height {
            continue;
        }
        if filled + w as usize * h as usize > target {
            continue;
        }

        let x = rng.random_range(0..=grid_width - w) as i32;
        let y = rng.random_range(0..=grid_height - h) as i32;
        let (w, h) = (w as i32, h as i32);
        if !grid.is_area_empty(x, y, w, h) {
            continue;
        }

        filled += grid.fill_rect(x, y, w, h, Tile::Room);
        rooms.push(Room::new(x, y, w, h));
    }

    if filled < target {
        tracing::debug!(
            "[placement] stopped short of target after {} attempts: {}/{} cells",
            attempts,
            filled,
            target
        );
    }
    Placement {
        rooms,
        filled,
        attempts,
    }
}
