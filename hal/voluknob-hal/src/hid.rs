//! USB HID consumer control
//!
//! Consumer page (0x0C) usages understood by every desktop OS without a
//! driver. Only relative volume keys are sent; the host owns the real
//! volume level.

/// Consumer control usages sent by the knob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum ConsumerCode {
    /// Toggle host mute
    Mute = 0x00E2,
    /// One volume step up
    VolumeIncrement = 0x00E9,
    /// One volume step down
    VolumeDecrement = 0x00EA,
}

impl ConsumerCode {
    /// HID usage ID on the consumer page
    pub const fn usage_id(self) -> u16 {
        self as u16
    }
}

/// Sink for consumer control key events
///
/// One `send` is a full key click: press report followed by release.
/// There is no acknowledgement from the host.
#[allow(async_fn_in_trait)]
pub trait ConsumerControl {
    /// Transport error
    type Error;

    /// Send one consumer key click
    async fn send(&mut self, code: ConsumerCode) -> Result<(), Self::Error>;
}

/// Raw consumer report endpoint
///
/// Writes one report carrying a single usage ID; 0 means no key held.
#[allow(async_fn_in_trait)]
pub trait ReportWriter {
    /// Transport error
    type Error;

    /// Write one report
    async fn write_usage(&mut self, usage_id: u16) -> Result<(), Self::Error>;
}

/// Key clicks on top of a [`ReportWriter`]
///
/// Each click is a press report followed by a release report. The release
/// goes out even when the press fails so the host never sees a stuck key.
pub struct HidClick<W> {
    writer: W,
}

impl<W: ReportWriter> HidClick<W> {
    /// Wrap a report writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: ReportWriter> ConsumerControl for HidClick<W> {
    type Error = W::Error;

    async fn send(&mut self, code: ConsumerCode) -> Result<(), Self::Error> {
        let pressed = self.writer.write_usage(code.usage_id()).await;
        let released = self.writer.write_usage(0).await;
        pressed.and(released)
    }
}
