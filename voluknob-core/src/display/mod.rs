//! Display rendering
//!
//! The panel is a 128x64 monochrome OLED. All drawing happens in a
//! [`FrameBuffer`] owned by the [`Renderer`], which pushes the whole
//! buffer to the panel in a single commit.

pub mod bitmap;
pub mod framebuffer;
pub mod renderer;

pub use bitmap::{Bitmap, DOWN_ARROW, MUTE_ICON, UNMUTE_ICON, UP_ARROW};
pub use framebuffer::{FrameBuffer, HEIGHT, PAGES, WIDTH};
pub use renderer::Renderer;
