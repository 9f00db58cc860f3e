// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows every surface side by side.
// 2) Filled squares (the pixels) and cleared rectangles on a framebuffer.
// 3) The mouse position, so the squares can run away from it.

use crate::error::Error;
use crate::geometry::Point;
use crate::scheduler::FrameHost;
use crate::types::FrameBuffer;
use minifb::{Key, MouseMode, Window, WindowOptions};

/// What a surface needs from whatever it paints on.
/// Coordinates are real-valued and local to the surface.
pub trait Canvas {
    /// Reset a rectangle to the background.
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    /// Paint an axis-aligned rectangle in `color` (0x00RRGGBB).
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: u32);
}

/// Convert a real-valued span to the covered cell range, clipped to `0..limit`.
/// A cell is covered when its centre lies inside the span.
#[inline]
fn span(start: f64, len: f64, limit: usize) -> (usize, usize) {
    let lo = (start - 0.5).ceil().max(0.0);
    let hi = (start + len - 0.5).ceil().max(0.0);
    let lo = (lo as usize).min(limit);
    let hi = (hi as usize).min(limit);
    (lo, hi.max(lo))
}

impl FrameBuffer {
    fn fill(&mut self, x: f64, y: f64, w: f64, h: f64, color: u32) {
        if !(w > 0.0 && h > 0.0) {
            return;
        }
        let (x0, x1) = span(x, w, self.width);
        let (y0, y1) = span(y, h, self.height);
        for row in y0..y1 {
            let base = row * self.width;
            self.pixels[base + x0..base + x1].fill(color);
        }
    }
}

impl Canvas for FrameBuffer {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let bg = self.background;
        self.fill(x, y, w, h, bg);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: u32) {
        self.fill(x, y, w, h, color);
    }
}

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window big enough for all surfaces, refreshing at `fps`.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // update_with_buffer sleeps to hold this rate: our "next refresh".
        window.set_target_fps(fps);
        log::info!("Opened {width}x{height} window at {fps} fps");
        Ok(Self { window })
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Mouse position in window pixel coordinates, `None` outside the window.
    pub fn mouse_pos(&self) -> Option<Point> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| Point::new(x as f64, y as f64))
    }
}

impl FrameHost for Drawer {
    fn is_running(&self) -> bool {
        self.is_open() && !self.esc_pressed()
    }

    fn pointer(&self) -> Option<Point> {
        self.mouse_pos()
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image.
    fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: u32 = 0x00_FF_00_00;

    fn painted(fb: &FrameBuffer) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for y in 0..fb.height {
            for x in 0..fb.width {
                if fb.get(x, y) == Some(RED) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn square_centred_on_a_cell_centre() {
        // A 3x3 square centred at (5.5, 5.5) covers cells 4..=6.
        let mut fb = FrameBuffer::new(10, 10, 0);
        fb.fill_rect(4.0, 4.0, 3.0, 3.0, RED);
        let cells = painted(&fb);
        assert_eq!(cells.len(), 9);
        assert_eq!(cells.first(), Some(&(4, 4)));
        assert_eq!(cells.last(), Some(&(6, 6)));
    }

    #[test]
    fn fill_is_clipped_at_every_edge() {
        let mut fb = FrameBuffer::new(4, 4, 0);
        fb.fill_rect(-10.0, -10.0, 12.0, 100.0, RED);
        assert_eq!(painted(&fb), vec![(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3)]);

        let mut fb = FrameBuffer::new(4, 4, 0);
        fb.fill_rect(50.0, 50.0, 5.0, 5.0, RED);
        fb.fill_rect(1.0, 1.0, 0.0, 3.0, RED);
        fb.fill_rect(1.0, 1.0, f64::NAN, 3.0, RED);
        assert!(painted(&fb).is_empty());
    }

    #[test]
    fn clear_restores_background() {
        let mut fb = FrameBuffer::new(5, 5, 0x00_11_22_33);
        fb.fill_rect(0.0, 0.0, 5.0, 5.0, RED);
        fb.clear_rect(0.0, 0.0, 5.0, 5.0);
        assert!(fb.pixels.iter().all(|&p| p == 0x00_11_22_33));
    }
}
