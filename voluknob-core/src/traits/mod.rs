//! Hardware abstraction traits owned by the core
//!
//! Input, HID and time traits live in `voluknob-hal`. The panel trait
//! lives here because it is defined in terms of the core's frame buffer.

pub mod display;

pub use display::PanelDriver;
