//! Embassy async tasks
//!
//! The control loop itself runs in `main`; these keep the hardware
//! serviced underneath it.

pub mod encoder;
pub mod usb;

pub use encoder::encoder_task;
pub use usb::usb_task;
