//! Encoder sampling task
//!
//! Polls both encoder phases every millisecond, decodes detents and
//! accumulates them into the shared position the control loop reads.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Ticker};
use voluknob_drivers::encoder::QuadratureDecoder;
use voluknob_hal::SharedPosition;

/// Sample interval in milliseconds
pub const SAMPLE_INTERVAL_MS: u64 = 1;

/// Encoder task - turns phase edges into position steps
#[embassy_executor::task]
pub async fn encoder_task(a: Input<'static>, b: Input<'static>, position: &'static SharedPosition) {
    info!("Encoder task started");

    let mut decoder = QuadratureDecoder::new(a.is_high(), b.is_high());
    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));

    loop {
        ticker.next().await;

        if let Some(step) = decoder.update(a.is_high(), b.is_high()) {
            trace!("Encoder step {}", step);
            position.step(step.delta());
        }
    }
}
