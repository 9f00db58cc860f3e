// The software framebuffer every surface paints into.

#[derive(Clone, Debug)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
    pub background: u32,   // what `clear_rect` paints
}

impl FrameBuffer {
    /// A buffer already filled with `background`.
    pub fn new(width: usize, height: usize, background: u32) -> Self {
        Self { width, height, pixels: vec![background; width * height], background }
    }

    /// Colour at (x,y), `None` outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Copy `src` so its top-left corner lands on (ox,oy); clipped.
    /// Visual: a surface's picture appears at its slot in the window.
    pub fn blit(&mut self, src: &FrameBuffer, ox: usize, oy: usize) {
        if ox >= self.width || oy >= self.height {
            return;
        }
        let w = src.width.min(self.width - ox);
        let h = src.height.min(self.height - oy);
        for y in 0..h {
            let from = y * src.width;
            let to = (oy + y) * self.width + ox;
            self.pixels[to..to + w].copy_from_slice(&src.pixels[from..from + w]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blit_copies_and_clips() {
        let mut screen = FrameBuffer::new(4, 3, 0);
        let layer = FrameBuffer::new(3, 3, 7);
        screen.blit(&layer, 2, 1);

        assert_eq!(screen.get(1, 1), Some(0));
        assert_eq!(screen.get(2, 1), Some(7));
        assert_eq!(screen.get(3, 2), Some(7));
        assert_eq!(screen.get(2, 0), Some(0));
        assert_eq!(screen.get(4, 0), None);
        assert_eq!(screen.pixels.iter().filter(|&&p| p == 7).count(), 4);
    }
}
