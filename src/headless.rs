// A host without a window: runs a fixed number of frames as fast as possible
// and keeps the last one, so it can be written out as a PNG.

use std::path::Path;

use image::RgbImage;

use crate::color;
use crate::error::Result;
use crate::geometry::Point;
use crate::scheduler::FrameHost;
use crate::types::FrameBuffer;

pub struct HeadlessHost {
    frames_left: u64,
    frame: usize,
    path: Vec<Point>,
    last: Option<FrameBuffer>,
}

impl HeadlessHost {
    pub fn new(frames: u64) -> Self {
        Self { frames_left: frames, frame: 0, path: Vec::new(), last: None }
    }

    /// Pointer position per frame (window coordinates). Once the path runs
    /// out the pointer stays where it ended.
    pub fn with_pointer_path(mut self, path: Vec<Point>) -> Self {
        self.path = path;
        self
    }

    /// The most recently presented frame.
    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.last.as_ref()
    }

    /// Write the last frame as a PNG. Does nothing if no frame was shown.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let Some(fb) = &self.last else {
            log::warn!("No frame rendered, skipping snapshot {}", path.display());
            return Ok(());
        };
        to_image(fb).save(path)?;
        log::info!("Saved {}x{} snapshot to {}", fb.width, fb.height, path.display());
        Ok(())
    }
}

/// 0x00RRGGBB framebuffer -> RGB image.
pub fn to_image(fb: &FrameBuffer) -> RgbImage {
    RgbImage::from_fn(fb.width as u32, fb.height as u32, |x, y| {
        color::unpack(fb.pixels[y as usize * fb.width + x as usize])
    })
}

impl FrameHost for HeadlessHost {
    fn is_running(&self) -> bool {
        self.frames_left > 0
    }

    fn pointer(&self) -> Option<Point> {
        self.path.get(self.frame).or(self.path.last()).copied()
    }

    fn present(&mut self, screen: &FrameBuffer) -> Result<()> {
        match &mut self.last {
            Some(fb) if (fb.width, fb.height) == (screen.width, screen.height) => {
                fb.pixels.copy_from_slice(&screen.pixels)
            }
            // First frame, or the scheduler behind it changed size.
            _ => self.last = Some(screen.clone()),
        }
        self.frames_left -= 1;
        self.frame += 1;
        Ok(())
    }
}
