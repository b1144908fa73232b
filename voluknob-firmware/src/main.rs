//! Voluknob - USB Volume Knob Firmware
//!
//! Main firmware binary for RP2040-based volume knobs: a rotary encoder
//! with push-button, a 128x64 SSD1306 OLED, and USB HID consumer control
//! towards the host.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::clocks::RoscRng;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C0, USB};
use embassy_rp::usb::{self as rp_usb, Driver};
use embassy_time::Delay;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use {defmt_rtt as _, panic_probe as _};

use voluknob_core::{Knob, KnobIo};
use voluknob_drivers::display::Ssd1306;
use voluknob_hal::{ActiveLow, SharedPosition};

use crate::config::KNOB_CONFIG;
use crate::hw::EmbassyClock;

mod config;
mod hw;
mod tasks;
mod usb;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
    USBCTRL_IRQ => rp_usb::InterruptHandler<USB>;
});

/// OLED bus speed
const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Encoder count, written by the sampling task, read by the control loop
static POSITION: SharedPosition = SharedPosition::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Voluknob firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    info!(
        "Config: volume={} idle={}ms frame={}ms debounce={}ms",
        KNOB_CONFIG.initial_volume,
        KNOB_CONFIG.idle_timeout_ms,
        KNOB_CONFIG.frame_interval_ms,
        KNOB_CONFIG.mute_debounce_ms
    );

    // USB HID
    let (device, hid) = usb::init(Driver::new(p.USB, Irqs));
    spawner.spawn(tasks::usb_task(device)).unwrap();

    // OLED on I2C0 (SDA = GPIO4, SCL = GPIO5)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let bus = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c_config);

    let mut panel = Ssd1306::new(bus);
    match panel.init().await {
        Ok(()) => info!("SSD1306 initialized"),
        // Keep going; the knob still works blind
        Err(e) => error!("SSD1306 init failed: {}", e),
    }

    // Encoder phases and push-button, all pulled up
    let enc_a = Input::new(p.PIN_27, Pull::Up);
    let enc_b = Input::new(p.PIN_28, Pull::Up);
    let button = ActiveLow::new(Input::new(p.PIN_26, Pull::Up));
    spawner.spawn(tasks::encoder_task(enc_a, enc_b, &POSITION)).unwrap();

    let rng = SmallRng::seed_from_u64(RoscRng.next_u64());

    let knob = Knob::new(
        KNOB_CONFIG,
        KnobIo {
            panel,
            encoder: &POSITION,
            button,
            hid,
            clock: EmbassyClock,
            delay: Delay,
            rng,
        },
    );

    info!("Knob ready");
    knob.run().await
}
