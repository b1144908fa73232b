//! Knob control loop
//!
//! One flat polling loop. Each iteration:
//!
//! 1. Encoder moved: update the volume mirror, show an arrow, send one
//!    volume key.
//! 2. Button held (checked independently): toggle mute, show the mute or
//!    unmute icon, send the mute key, sleep for the debounce time.
//! 3. Idle too long: run the rain animation until the knob is touched.
//!
//! Hardware errors are logged and counted; the loop always keeps going.

use embassy_futures::yield_now;
use embedded_hal_async::delay::DelayNs;
use rand::RngCore;
use voluknob_hal::{Button, Clock, ConsumerCode, ConsumerControl, PositionSource};

use crate::animation::Rain;
use crate::config::KnobConfig;
use crate::display::{Bitmap, Renderer, MUTE_ICON, UNMUTE_ICON};
use crate::fault::{FaultLog, HardwareFault};
use crate::state::{Direction, KnobState};
use crate::traits::PanelDriver;

/// Hardware the loop runs on
pub struct KnobIo<P, E, B, H, C, D, R> {
    /// Display panel
    pub panel: P,
    /// Encoder count
    pub encoder: E,
    /// Push-button
    pub button: B,
    /// USB consumer control
    pub hid: H,
    /// Monotonic clock
    pub clock: C,
    /// Sleep provider
    pub delay: D,
    /// Randomness for the idle animation
    pub rng: R,
}

/// What one loop iteration did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Iteration {
    /// Set if the encoder moved
    pub rotated: Option<Direction>,
    /// New mute state if the button was pressed
    pub mute: Option<bool>,
    /// Frames shown if the idle animation ran
    pub idle_frames: Option<u32>,
}

/// The knob controller
pub struct Knob<P, E, B, H, C, D, R> {
    config: KnobConfig,
    state: KnobState,
    faults: FaultLog,
    renderer: Renderer<P>,
    encoder: E,
    button: B,
    hid: H,
    clock: C,
    delay: D,
    rng: R,
}

impl<P, E, B, H, C, D, R> Knob<P, E, B, H, C, D, R>
where
    P: PanelDriver,
    E: PositionSource,
    B: Button,
    H: ConsumerControl,
    C: Clock,
    D: DelayNs,
    R: RngCore,
{
    /// Create the controller, taking the current encoder count as the
    /// starting position
    pub fn new(config: KnobConfig, io: KnobIo<P, E, B, H, C, D, R>) -> Self {
        let state = KnobState::new(
            config.initial_volume,
            io.encoder.position(),
            io.clock.now_ms(),
        );

        Self {
            config,
            state,
            faults: FaultLog::new(),
            renderer: Renderer::new(io.panel),
            encoder: io.encoder,
            button: io.button,
            hid: io.hid,
            clock: io.clock,
            delay: io.delay,
            rng: io.rng,
        }
    }

    /// Current state
    pub fn state(&self) -> &KnobState {
        &self.state
    }

    /// Faults seen so far
    pub fn faults(&self) -> &FaultLog {
        &self.faults
    }

    /// Renderer (frame buffer and panel)
    pub fn renderer(&self) -> &Renderer<P> {
        &self.renderer
    }

    /// Run forever
    pub async fn run(mut self) -> ! {
        loop {
            let _iteration = self.poll_once().await;

            #[cfg(feature = "defmt")]
            if _iteration != Iteration::default() {
                defmt::debug!(
                    "{} volume={} muted={}",
                    _iteration,
                    self.state.volume(),
                    self.state.is_muted()
                );
            }

            // Let the encoder sampler and USB stack run
            yield_now().await;
        }
    }

    /// One pass of the control loop
    pub async fn poll_once(&mut self) -> Iteration {
        let now = self.clock.now_ms();
        let mut iteration = Iteration::default();

        if let Some(delta) = self.state.track_position(self.encoder.position()) {
            if let Some(direction) = self.state.apply_delta(delta) {
                self.state.touch(now);
                self.show(direction.arrow()).await;
                // One key per iteration, whatever the delta
                self.send(direction.code()).await;
                iteration.rotated = Some(direction);
            }
        }

        if self.button_pressed() {
            let muted = self.state.toggle_mute();
            self.show(if muted { &MUTE_ICON } else { &UNMUTE_ICON }).await;
            self.send(ConsumerCode::Mute).await;
            self.delay.delay_ms(self.config.mute_debounce_ms).await;
            self.state.touch(now);
            iteration.mute = Some(muted);
        }

        if self.state.is_idle(now, self.config.idle_timeout_ms) {
            let frames = self.run_idle_animation().await;
            self.state.touch(self.clock.now_ms());
            iteration.idle_frames = Some(frames);
        }

        iteration
    }

    /// Rain until the encoder moves away from the last recorded position
    /// or the button is pressed
    ///
    /// Each frame stays on the panel for the full frame interval before
    /// the buffer is cleared. Nothing is redrawn on exit; the next
    /// iteration owns the display.
    async fn run_idle_animation(&mut self) -> u32 {
        #[cfg(feature = "defmt")]
        defmt::debug!("idle for {} ms, starting rain", self.state.idle_for(self.clock.now_ms()));

        let entry_position = self.state.last_position();
        let mut rain = Rain::new(self.config.drop_reset_probability);
        let mut frames: u32 = 0;

        self.renderer.frame_mut().clear();

        loop {
            rain.draw_frame(self.renderer.frame_mut(), &mut self.rng);
            if self.renderer.commit().await.is_err() {
                self.fault(HardwareFault::Display);
            }
            frames = frames.wrapping_add(1);

            self.delay.delay_ms(self.config.frame_interval_ms).await;
            self.renderer.frame_mut().clear();

            if self.encoder.position() != entry_position || self.button_pressed() {
                #[cfg(feature = "defmt")]
                defmt::debug!("rain interrupted after {} frames", frames);
                return frames;
            }
        }
    }

    async fn show(&mut self, bitmap: &Bitmap) {
        if self.renderer.display_centered(bitmap).await.is_err() {
            self.fault(HardwareFault::Display);
        }
    }

    async fn send(&mut self, code: ConsumerCode) {
        if self.hid.send(code).await.is_err() {
            self.fault(HardwareFault::Hid);
        }
    }

    /// A failed read counts as released
    fn button_pressed(&mut self) -> bool {
        match self.button.is_pressed() {
            Ok(pressed) => pressed,
            Err(_) => {
                self.fault(HardwareFault::Button);
                false
            }
        }
    }

    fn fault(&mut self, fault: HardwareFault) {
        self.faults.record(fault);

        #[cfg(feature = "defmt")]
        defmt::warn!("hardware fault: {} (total {})", fault, self.faults.count());
    }
}
