//! Pixel sink contract and the standard frame buffer view.

/// Destination for rasterized pixels.
///
/// The rasterizers and line drawer perform no bounds validation of their own;
/// implementations must clip writes outside the output surface silently
/// rather than erroring or panicking. Implementations are also assumed
/// non-reentrant: a draw call runs to completion on the calling thread
/// before the sink is touched again.
pub trait PixelSink {
    /// Write one ARGB8888 pixel at (x, y).
    fn write_pixel(&mut self, x: i32, y: i32, color: u32);
}

/// A borrowed view into a color buffer.
///
/// Wraps a 1D slice with width/height metadata to enable safe 2D pixel
/// access. This is a view, not an owning type - create it temporarily when a
/// buffer and its dimensions need to travel together, e.g. into a
/// rasterizer.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from a buffer slice and dimensions.
    pub fn new(color_buffer: &'a mut [u32], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            (width * height) as usize,
            "Color buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }
}

impl PixelSink for FrameBuffer<'_> {
    /// Set a pixel, silently ignoring out-of-bounds coordinates.
    #[inline]
    fn write_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.color_buffer[(y as u32 * self.width + x as u32) as usize] = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_are_readable() {
        let mut buffer = vec![0u32; 4 * 4];
        let mut fb = FrameBuffer::new(&mut buffer, 4, 4);
        fb.write_pixel(1, 2, 0xFFABCDEF);
        assert_eq!(fb.get_pixel(1, 2), Some(0xFFABCDEF));
        assert_eq!(fb.get_pixel(0, 0), Some(0));
    }

    #[test]
    fn out_of_bounds_writes_are_clipped() {
        let mut buffer = vec![0u32; 4 * 4];
        let mut fb = FrameBuffer::new(&mut buffer, 4, 4);
        fb.write_pixel(-1, 0, 0xFFFFFFFF);
        fb.write_pixel(4, 0, 0xFFFFFFFF);
        fb.write_pixel(0, 4, 0xFFFFFFFF);
        drop(fb);
        assert!(buffer.iter().all(|&c| c == 0));
    }

    #[test]
    fn out_of_bounds_reads_are_none() {
        let mut buffer = vec![0u32; 4 * 4];
        let fb = FrameBuffer::new(&mut buffer, 4, 4);
        assert_eq!(fb.get_pixel(-1, 0), None);
        assert_eq!(fb.get_pixel(0, 4), None);
    }
}
