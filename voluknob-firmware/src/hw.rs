//! Board glue between embassy-rp and the knob traits

use embassy_time::Instant;
use voluknob_hal::Clock;

/// Clock backed by the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
