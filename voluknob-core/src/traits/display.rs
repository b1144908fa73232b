//! Panel driver trait

use crate::display::FrameBuffer;

/// Monochrome panel that can show a full [`FrameBuffer`]
///
/// Implementations push the buffer to the hardware in one go. The core
/// never asks for partial updates.
#[allow(async_fn_in_trait)]
pub trait PanelDriver {
    /// Bus or panel error
    type Error;

    /// Send the frame buffer to the panel
    async fn flush(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error>;
}

impl<T: PanelDriver + ?Sized> PanelDriver for &mut T {
    type Error = T::Error;

    async fn flush(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error> {
        (**self).flush(frame).await
    }
}
