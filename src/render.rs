use std::io::Write;
use std::path::Path;

use crossterm::{queue, style};
use image::{Rgb, RgbImage};

use crate::error::Error;
use crate::maze::{Grid, Tile};

const EMPTY_COLOR: Rgb<u8> = Rgb([245, 245, 245]);
const ROOM_COLOR: Rgb<u8> = Rgb([180, 180, 180]);
const HALLWAY_COLOR: Rgb<u8> = Rgb([10, 10, 10]);

fn color_for(tile: Tile) -> Rgb<u8> {
    match tile {
        Tile::Empty => EMPTY_COLOR,
        Tile::Room => ROOM_COLOR,
        Tile::Hallway => HALLWAY_COLOR,
    }
}

/// One pixel per cell.
pub fn to_image(grid: &Grid) -> RgbImage {
    RgbImage::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        color_for(grid[(x as i32, y as i32)])
    })
}

/// Saves the grid as a PNG image at `path`.
pub fn save_png(grid: &Grid, path: impl AsRef<Path>) -> Result<(), Error> {
    if grid.is_empty() {
        return Err(Error::EmptyGrid);
    }
    to_image(grid).save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Prints the grid as coloured blocks, one row per line.
pub fn preview(grid: &Grid, out: &mut impl Write) -> std::io::Result<()> {
    for y in 0..grid.height() {
        for &tile in grid.row(y) {
            queue!(out, style::Print(tile))?;
        }
        queue!(out, style::Print("\n"))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_maps_tiles_to_colors() {
        let mut grid = Grid::new(4, 2);
        grid.fill_rect(0, 0, 2, 2, Tile::Room);
        grid.fill_line((2, 1), (3, 1), 1);
        let image = to_image(&grid);
        assert_eq!(image.dimensions(), (4, 2));
        assert_eq!(*image.get_pixel(0, 0), ROOM_COLOR);
        assert_eq!(*image.get_pixel(3, 1), HALLWAY_COLOR);
        assert_eq!(*image.get_pixel(3, 0), EMPTY_COLOR);
    }

    #[test]
    fn test_colors_are_distinct() {
        assert_ne!(EMPTY_COLOR, ROOM_COLOR);
        assert_ne!(ROOM_COLOR, HALLWAY_COLOR);
        assert_ne!(EMPTY_COLOR, HALLWAY_COLOR);
    }

    #[test]
    fn test_empty_grid_is_rejected() {
        let path = std::env::temp_dir().join("roomgen-empty-grid.png");
        assert!(matches!(
            save_png(&Grid::new(0, 3), &path),
            Err(Error::EmptyGrid)
        ));
    }

    #[test]
    fn test_preview_writes_one_line_per_row() {
        let mut grid = Grid::new(3, 2);
        grid[(1, 1)] = Tile::Room;
        let mut out = Vec::new();
        preview(&grid, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains('⬜'));
    }
}
