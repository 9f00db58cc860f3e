// Drives every surface, one frame at a time.
// Visual: surfaces sit next to each other in one window, left to right;
// each frame all of them step and repaint before the window refreshes.

use std::time::{Duration, Instant};

use crate::error::Result;
use crate::geometry::Point;
use crate::surface::Surface;
use crate::types::FrameBuffer;

/// Whatever shows the frames and hands out "next refresh" slots.
pub trait FrameHost {
    /// False once the host wants the loop to end.
    fn is_running(&self) -> bool;
    /// Pointer position in window coordinates, if it is over the window.
    fn pointer(&self) -> Option<Point>;
    /// Show the finished frame; returns when the next one may start.
    fn present(&mut self, screen: &FrameBuffer) -> Result<()>;
}

struct Slot {
    surface: Surface,
    layer: FrameBuffer,
    origin_x: usize, // left edge inside the window
}

#[derive(Default)]
pub struct Scheduler {
    slots: Vec<Slot>,
    last_pointer: Option<Point>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a surface to the right of the existing ones.
    pub fn add_surface(&mut self, surface: Surface) -> &mut Surface {
        let (w, h) = surface.size();
        let origin_x = self.window_size().0;
        let layer = FrameBuffer::new(w, h, surface.background());
        log::debug!("{} placed at x={origin_x}", surface.label());
        self.slots.push(Slot { surface, layer, origin_x });
        let last = self.slots.len() - 1;
        &mut self.slots[last].surface
    }

    pub fn surfaces(&self) -> impl Iterator<Item = &Surface> {
        self.slots.iter().map(|s| &s.surface)
    }

    /// (sum of widths, tallest height).
    pub fn window_size(&self) -> (usize, usize) {
        self.slots.iter().fold((0, 0), |(w, h), s| {
            let (sw, sh) = s.surface.size();
            (w + sw, h.max(sh))
        })
    }

    /// A screen buffer of the right size for `render_frame`.
    pub fn new_screen(&self) -> FrameBuffer {
        let (w, h) = self.window_size();
        FrameBuffer::new(w, h, 0)
    }

    /// Route a window-space pointer move to the surface under it.
    /// Surfaces the pointer is not over keep their last pointer state.
    pub fn pointer_moved(&mut self, at: Point) {
        for slot in &mut self.slots {
            let (w, h) = slot.surface.size();
            let local = Point::new(at.x - slot.origin_x as f64, at.y);
            if local.x >= 0.0 && local.x < w as f64 && local.y >= 0.0 && local.y < h as f64 {
                slot.surface.handle_pointer_move(local);
                return;
            }
        }
    }

    /// Step and paint every surface, then compose them into `screen`.
    pub fn render_frame(&mut self, screen: &mut FrameBuffer) {
        for slot in &mut self.slots {
            slot.surface.render_frame(&mut slot.layer);
            screen.blit(&slot.layer, slot.origin_x, 0);
        }
    }

    /// Frame loop: pointer event (if it moved), render, present, repeat.
    /// The host ends the loop: `is_running` is checked before every frame,
    /// so a host that stops itself in `present` finishes after that frame.
    /// Returns the number of frames shown. Surfaces keep their state, so a
    /// later `run` picks up where this one ended.
    pub fn run(&mut self, host: &mut impl FrameHost) -> Result<u64> {
        let mut screen = self.new_screen();
        let mut frames: u64 = 0;

        let mut last_fps_time = Instant::now();
        let mut frames_this_second: u32 = 0;

        while host.is_running() {
            // Only a changed position counts as a move event.
            let pointer = host.pointer();
            if let Some(at) = pointer {
                if self.last_pointer != Some(at) {
                    self.pointer_moved(at);
                }
            }
            self.last_pointer = pointer;

            self.render_frame(&mut screen);
            host.present(&screen)?;
            frames += 1;

            // FPS once per second.
            frames_this_second += 1;
            let now = Instant::now();
            if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
                let secs = now.duration_since(last_fps_time).as_secs_f32();
                log::info!("FPS: {:.1}", frames_this_second as f32 / secs);
                frames_this_second = 0;
                last_fps_time = now;
            }
        }

        log::info!("Frame loop ended after {frames} frame(s)");
        Ok(frames)
    }
}
