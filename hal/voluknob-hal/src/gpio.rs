//! GPIO button abstraction
//!
//! The knob's push-button is wired to a pulled-up input and shorts to
//! ground when pressed, so "pressed" means the pin reads low.

use embedded_hal::digital::InputPin;

/// Momentary push-button
pub trait Button {
    /// Error type for reading the button level
    type Error;

    /// Check if the button is currently held down
    fn is_pressed(&mut self) -> Result<bool, Self::Error>;

    /// Check if the button is currently released
    fn is_released(&mut self) -> Result<bool, Self::Error> {
        self.is_pressed().map(|pressed| !pressed)
    }
}

/// Active-low button on top of any `embedded-hal` input pin
///
/// Pressed = pin low. Requires the pull-up to be enabled on the pin
/// (internal or external).
pub struct ActiveLow<P> {
    pin: P,
}

impl<P: InputPin> ActiveLow<P> {
    /// Wrap an input pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Release the underlying pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> Button for ActiveLow<P> {
    type Error = P::Error;

    fn is_pressed(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_low()
    }
}
