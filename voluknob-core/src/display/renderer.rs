//! Bitmap renderer
//!
//! Owns the frame buffer and the panel. Every render clears the whole
//! buffer, plots, then commits once so the panel never shows a partial
//! frame.

use super::bitmap::Bitmap;
use super::framebuffer::{FrameBuffer, HEIGHT, WIDTH};
use crate::traits::PanelDriver;

/// Frame buffer plus the panel it is committed to
pub struct Renderer<P> {
    panel: P,
    frame: FrameBuffer,
}

impl<P: PanelDriver> Renderer<P> {
    /// Create a renderer with a blank buffer
    pub fn new(panel: P) -> Self {
        Self {
            panel,
            frame: FrameBuffer::new(),
        }
    }

    /// Clear the buffer, draw `bitmap` at the given offset and commit
    ///
    /// Bit `width - 1 - x` of row `y` lights pixel
    /// (`x + x_offset`, `y + y_offset`). Pixels outside the panel are
    /// dropped.
    pub async fn display_bitmap(
        &mut self,
        bitmap: &Bitmap,
        x_offset: i32,
        y_offset: i32,
    ) -> Result<(), P::Error> {
        self.frame.clear();
        self.frame.draw_bitmap(bitmap, x_offset, y_offset);
        self.commit().await
    }

    /// [`Renderer::display_bitmap`] centred on the panel
    pub async fn display_centered(&mut self, bitmap: &Bitmap) -> Result<(), P::Error> {
        let (x, y) = bitmap.centered_in(WIDTH as u32, HEIGHT as u32);
        self.display_bitmap(bitmap, x, y).await
    }

    /// Push the current buffer to the panel
    pub async fn commit(&mut self) -> Result<(), P::Error> {
        self.panel.flush(&self.frame).await
    }

    /// Current buffer contents
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Mutable access for callers that draw their own frames
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    /// The panel
    pub fn panel(&self) -> &P {
        &self.panel
    }
}
