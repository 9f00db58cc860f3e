// Character matrix -> list of pixels, centred on the surface.
// Visual: "0" cells stay empty, every other character becomes a square
// painted in the palette colour for that character.

use std::collections::HashMap;

use crate::color;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::pixel::{Pixel, PixelParams};

/// The cell character that never produces a pixel.
pub const EMPTY_CELL: char = '0';

/// Character -> packed 0x00RRGGBB colour.
pub type Palette = HashMap<char, u32>;

/// Size of the surface the grid is centred on.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub surface_width: f64,
    pub surface_height: f64,
}

/// Matrix dimensions in cells, after checking it is a proper rectangle.
pub fn grid_size<S: AsRef<str>>(matrix: &[S]) -> Result<(usize, usize)> {
    let first = matrix
        .first()
        .ok_or_else(|| Error::InvalidGrid("matrix has no rows".into()))?;
    let cols = first.as_ref().chars().count();
    if cols == 0 {
        return Err(Error::InvalidGrid("row 0 is empty".into()));
    }
    for (y, row) in matrix.iter().enumerate() {
        let len = row.as_ref().chars().count();
        if len != cols {
            return Err(Error::InvalidGrid(format!(
                "row {y} has {len} cells, expected {cols}"
            )));
        }
    }
    Ok((cols, matrix.len()))
}

/// Build every non-empty cell, row-major, with its rest position resolved.
///
/// Rest position per axis:
/// `surface/2 - cells*size/2 + index*size + floor(size/2)`.
pub fn build_pixels<S: AsRef<str>>(
    matrix: &[S],
    palette: &Palette,
    layout: &Layout,
    params: &PixelParams,
) -> Result<Vec<Pixel>> {
    let (cols, rows) = grid_size(matrix)?;
    let size = params.size;
    let origin = Point::new(
        layout.surface_width / 2.0 - cols as f64 * size / 2.0 + (size / 2.0).floor(),
        layout.surface_height / 2.0 - rows as f64 * size / 2.0 + (size / 2.0).floor(),
    );
    let fallback = color::pack(color::FALLBACK);

    let mut pixels = Vec::new();
    for (y, row) in matrix.iter().enumerate() {
        for (x, key) in row.as_ref().chars().enumerate() {
            if key == EMPTY_CELL {
                continue;
            }
            let rest = origin + Point::new(x as f64 * size, y as f64 * size);
            let c = palette.get(&key).copied().unwrap_or(fallback);
            pixels.push(Pixel::new(rest, c, params));
        }
    }
    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(size: f64) -> PixelParams {
        PixelParams { size, size_max: size * 3.0, ..PixelParams::default() }
    }

    #[test]
    fn centred_grid_with_palette() {
        let palette: Palette = [('1', 0x00_FF_FF_FF), ('2', 0x00_AA_BB_CC)].into_iter().collect();
        let layout = Layout { surface_width: 20.0, surface_height: 20.0 };
        let pixels = build_pixels(&["12", "21"], &palette, &layout, &params(10.0)).unwrap();

        let got: Vec<_> = pixels.iter().map(|p| (p.rest_position(), p.color())).collect();
        assert_eq!(
            got,
            vec![
                (Point::new(5.0, 5.0), 0x00_FF_FF_FF),
                (Point::new(15.0, 5.0), 0x00_AA_BB_CC),
                (Point::new(5.0, 15.0), 0x00_AA_BB_CC),
                (Point::new(15.0, 15.0), 0x00_FF_FF_FF),
            ]
        );
        for p in &pixels {
            assert_eq!(p.position(), p.rest_position());
            assert!(!p.is_moving());
            assert_eq!(p.size(), 10.0);
        }
    }

    #[test]
    fn zeros_are_holes_and_unknown_keys_are_black() {
        let palette: Palette = [('1', 0x00_FF_FF_FF)].into_iter().collect();
        let layout = Layout { surface_width: 20.0, surface_height: 20.0 };
        let pixels = build_pixels(&["10", "07"], &palette, &layout, &params(10.0)).unwrap();

        assert_eq!(pixels.len(), 2);
        assert_eq!(pixels[0].rest_position(), Point::new(5.0, 5.0));
        assert_eq!(pixels[0].color(), 0x00_FF_FF_FF);
        assert_eq!(pixels[1].rest_position(), Point::new(15.0, 15.0));
        assert_eq!(pixels[1].color(), 0x00_00_00_00);
    }

    #[test]
    fn odd_pixel_size_floors_the_half_cell() {
        // 320/2 - 3*5/2 + 2 = 154.5 for the first column.
        let layout = Layout { surface_width: 320.0, surface_height: 320.0 };
        let pixels = build_pixels(&["111"], &Palette::new(), &layout, &params(5.0)).unwrap();
        let xs: Vec<f64> = pixels.iter().map(|p| p.rest_position().x).collect();
        assert_eq!(xs, vec![154.5, 159.5, 164.5]);
        assert_eq!(pixels[0].rest_position().y, 160.0 - 2.5 + 2.0);
    }

    #[test]
    fn all_zero_matrix_is_valid_but_empty() {
        let layout = Layout { surface_width: 10.0, surface_height: 10.0 };
        let pixels = build_pixels(&["000"], &Palette::new(), &layout, &params(5.0)).unwrap();
        assert!(pixels.is_empty());
    }

    #[test]
    fn bad_shapes_are_rejected() {
        let layout = Layout { surface_width: 10.0, surface_height: 10.0 };
        let empty: [&str; 0] = [];
        for m in [&empty[..], &[""][..], &["11", "1"][..], &["1", ""][..]] {
            let err = build_pixels(m, &Palette::new(), &layout, &params(5.0)).unwrap_err();
            assert!(matches!(err, Error::InvalidGrid(_)), "{m:?}");
        }
    }
}
