use crossterm::style::{Color, Stylize};

use std::fmt;

/// Classification of a single grid cell.
///
/// `Room` cells are written once during placement and never change afterwards.
/// `Hallway` only ever replaces `Empty`, and pruning is the only phase that turns
/// a `Hallway` back into `Empty`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    #[default]
    Empty,
    Room,
    Hallway,
}

impl Tile {
    /// The width of each tile when previewed in a terminal, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    /// Whether the tile counts towards coverage.
    pub fn is_filled(self) -> bool {
        self != Tile::Empty
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Empty => "  ".with(Color::Reset),
            Tile::Room => "⬜".with(Color::Grey),
            Tile::Hallway => "⬛".with(Color::DarkGrey),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::CELL_WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
