// One drawing surface: a cursor, its pixels and the motion settings.
// Visual: each frame the surface is wiped, every square takes one step and
// is painted again at its new place and size.

use crate::config::SurfaceConfig;
use crate::draw::Canvas;
use crate::error::Result;
use crate::geometry::Point;
use crate::grid::{self, Layout};
use crate::pixel::{Pixel, PixelParams};
use crate::pointer::Pointer;

pub struct Surface {
    label: String,
    width: usize,
    height: usize,
    background: u32,
    params: PixelParams,
    pointer: Pointer,
    pixels: Vec<Pixel>,
}

impl Surface {
    /// Validate `config` and lay its matrix out as resting pixels.
    pub fn new(config: &SurfaceConfig, label: String) -> Result<Self> {
        config.validate()?;
        let params = config.pixel_params();
        let layout = Layout {
            surface_width: config.width as f64,
            surface_height: config.height as f64,
        };
        let pixels = grid::build_pixels(&config.matrix, &config.palette()?, &layout, &params)?;
        log::debug!(
            "{label}: {}x{} surface, {} pixel(s) from a {}-row matrix",
            config.width,
            config.height,
            pixels.len(),
            config.matrix.len()
        );

        Ok(Self {
            label,
            width: config.width,
            height: config.height,
            background: config.background_color()?,
            params,
            pointer: Pointer::new(config.cursor_radius),
            pixels,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn background(&self) -> u32 {
        self.background
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// The cursor moved over this surface (surface-local coordinates).
    pub fn handle_pointer_move(&mut self, local: Point) {
        self.pointer.set_position(local);
    }

    /// Clear, then step and paint every pixel in creation order.
    pub fn render_frame(&mut self, canvas: &mut impl Canvas) {
        canvas.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);

        for pixel in &mut self.pixels {
            pixel.advance(&self.pointer, &self.params);

            // Square of side `size` centred on the position.
            let half = pixel.size() / 2.0;
            let p = pixel.position();
            canvas.fill_rect(p.x - half, p.y - half, pixel.size(), pixel.size(), pixel.color());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::FrameBuffer;
    use std::collections::BTreeMap;

    /// Records draw calls instead of rasterising them.
    #[derive(Default)]
    struct Recorder {
        clears: usize,
        squares: Vec<(f64, f64, f64, u32)>, // centre x, centre y, side, colour
    }

    impl Canvas for Recorder {
        fn clear_rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64) {
            self.clears += 1;
            self.squares.clear();
        }

        fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: u32) {
            assert_eq!(w, h);
            self.squares.push((x + w / 2.0, y + h / 2.0, w, color));
        }
    }

    fn two_by_two() -> SurfaceConfig {
        SurfaceConfig {
            width: 20,
            height: 20,
            pixel_size: 10.0,
            pixel_size_max: 20.0,
            colors: BTreeMap::from([
                ("1".to_string(), "#fff".to_string()),
                ("2".to_string(), "#abc".to_string()),
            ]),
            matrix: vec!["12".into(), "21".into()],
            background: "#000".into(),
            ..SurfaceConfig::default()
        }
    }

    #[test]
    fn builds_pixels_from_config() {
        let s = Surface::new(&two_by_two(), "t".into()).unwrap();
        let colors: Vec<u32> = s.pixels().iter().map(|p| p.color()).collect();
        assert_eq!(colors, vec![0x00_FF_FF_FF, 0x00_AA_BB_CC, 0x00_AA_BB_CC, 0x00_FF_FF_FF]);
        assert!(!s.pointer().is_active());
        assert_eq!(s.size(), (20, 20));
    }

    #[test]
    fn idle_frame_paints_every_pixel_at_rest() {
        let mut s = Surface::new(&two_by_two(), "t".into()).unwrap();
        let mut rec = Recorder::default();
        for _ in 0..3 {
            s.render_frame(&mut rec);
        }
        assert_eq!(rec.clears, 3);
        assert_eq!(
            rec.squares,
            vec![
                (5.0, 5.0, 10.0, 0x00_FF_FF_FF),
                (15.0, 5.0, 10.0, 0x00_AA_BB_CC),
                (5.0, 15.0, 10.0, 0x00_AA_BB_CC),
                (15.0, 15.0, 10.0, 0x00_FF_FF_FF),
            ]
        );
    }

    #[test]
    fn pointer_move_scatters_nearby_pixels() {
        let config = SurfaceConfig { cursor_radius: 8.0, ..two_by_two() };
        let mut s = Surface::new(&config, "t".into()).unwrap();
        let mut fb = FrameBuffer::new(20, 20, s.background());

        // Right on top of the first pixel; the others are > 8 away.
        s.handle_pointer_move(Point::new(5.0, 5.0));
        s.render_frame(&mut fb);

        assert!(s.pointer().is_active());
        assert!(s.pixels()[0].is_moving());
        assert!(s.pixels()[0].position().y < 5.0);
        assert!(s.pixels()[1..].iter().all(|p| !p.is_moving()));
        // The untouched bottom-right square is still painted in place.
        assert_eq!(fb.get(15, 15), Some(0x00_FF_FF_FF));
    }

    #[test]
    fn sizes_stay_bounded_while_stirred() {
        let config = SurfaceConfig { cursor_radius: 25.0, pixel_size_ratio: 1.0, ..two_by_two() };
        let mut s = Surface::new(&config, "t".into()).unwrap();
        let mut rec = Recorder::default();
        for frame in 0..600 {
            let t = frame as f64 * 0.1;
            s.handle_pointer_move(Point::new(10.0 + 9.0 * t.cos(), 10.0 + 9.0 * t.sin()));
            s.render_frame(&mut rec);
            for p in s.pixels() {
                assert!(p.size() >= 10.0 && p.size() <= 20.0);
            }
        }
    }

    #[test]
    fn invalid_settings_fail_at_construction() {
        let bad_rubbing = SurfaceConfig { pixel_rubbing: 0.0, ..two_by_two() };
        assert!(matches!(Surface::new(&bad_rubbing, "t".into()), Err(Error::InvalidConfig(_))));

        let ragged = SurfaceConfig { matrix: vec!["12".into(), "1".into()], ..two_by_two() };
        assert!(matches!(Surface::new(&ragged, "t".into()), Err(Error::InvalidGrid(_))));

        let empty = SurfaceConfig { matrix: vec![], ..two_by_two() };
        assert!(matches!(Surface::new(&empty, "t".into()), Err(Error::InvalidGrid(_))));
    }
}
