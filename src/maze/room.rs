use super::Coord;

/// One of the four walls of a room, listed in tie-break precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// All sides, earliest wins when distances tie.
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    pub fn is_horizontal(self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }
}

/// A point just outside a room wall, tagged with the wall it faces out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallPoint {
    pub coord: Coord,
    pub side: Side,
}

/// Axis-aligned rectangle of room tiles. `x` and `y` are the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Room {
            x,
            y,
            width,
            height,
        }
    }

    /// Inclusive right-most column.
    pub fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Inclusive bottom-most row.
    pub fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    pub fn center(&self) -> Coord {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn area(&self) -> usize {
        (self.width * self.height) as usize
    }

    pub fn contains(&self, coord: Coord) -> bool {
        let (x, y) = coord;
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Whether the two rectangles share at least one cell.
    pub fn overlaps(&self, other: &Room) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }

    /// Manhattan distance from `target` to the closest cell of the given wall.
    fn side_distance(&self, side: Side, target: Coord) -> u32 {
        let (tx, ty) = target;
        match side {
            Side::Left => tx.abs_diff(self.x) + ty.abs_diff(ty.clamp(self.y, self.bottom())),
            Side::Right => tx.abs_diff(self.right()) + ty.abs_diff(ty.clamp(self.y, self.bottom())),
            Side::Top => ty.abs_diff(self.y) + tx.abs_diff(tx.clamp(self.x, self.right())),
            Side::Bottom => {
                ty.abs_diff(self.bottom()) + tx.abs_diff(tx.clamp(self.x, self.right()))
            }
        }
    }

    /// The wall that faces `target` most directly.
    pub fn facing_side(&self, target: Coord) -> Side {
        // Keying on the side as well keeps the earliest side on equal distances
        Side::ALL
            .into_iter()
            .min_by_key(|&side| (self.side_distance(side, target), side))
            .unwrap_or(Side::Left)
    }

    /// The exit point towards `target`: the cell one step outside the facing wall,
    /// aligned with `target` where the wall allows it, clamped into a
    /// `grid_width` x `grid_height` grid.
    pub fn exit_point(&self, target: Coord, grid_width: u16, grid_height: u16) -> Coord {
        let (tx, ty) = target;
        let mut cx = tx.clamp(self.x, self.right());
        let mut cy = ty.clamp(self.y, self.bottom());
        match self.facing_side(target) {
            Side::Left => cx = self.x - 1,
            Side::Right => cx = self.right() + 1,
            Side::Top => cy = self.y - 1,
            Side::Bottom => cy = self.bottom() + 1,
        }
        clamp_to_grid((cx, cy), grid_width, grid_height)
    }

    /// Midpoints of the four walls, one cell outside the room and clamped into the grid.
    pub fn wall_midpoints(&self, grid_width: u16, grid_height: u16) -> [WallPoint; 4] {
        let (mid_x, mid_y) = self.center();
        Side::ALL.map(|side| {
            let coord = match side {
                Side::Left => (self.x - 1, mid_y),
                Side::Right => (self.x + self.width, mid_y),
                Side::Top => (mid_x, self.y - 1),
                Side::Bottom => (mid_x, self.y + self.height),
            };
            WallPoint {
                coord: clamp_to_grid(coord, grid_width, grid_height),
                side,
            }
        })
    }
}

/// Clamps a coordinate into `[0, width) x [0, height)`.
pub fn clamp_to_grid(coord: Coord, width: u16, height: u16) -> Coord {
    (
        coord.0.clamp(0, (width as i32 - 1).max(0)),
        coord.1.clamp(0, (height as i32 - 1).max(0)),
    )
}

/// Manhattan distance between two coordinates.
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}
