//! USB HID consumer control device
//!
//! Enumerates as a media keyboard with a single 8-byte IN endpoint and
//! sends one consumer usage per key click.

use defmt::*;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_time::{with_timeout, Duration};
use embassy_usb::class::hid::{self, HidBootProtocol, HidSubclass, HidWriter, State};
use embassy_usb::driver::EndpointError;
use embassy_usb::{Builder, UsbDevice};
use static_cell::StaticCell;
use usbd_hid::descriptor::{MediaKeyboardReport, SerializedDescriptor};
use voluknob_hal::{HidClick, ReportWriter};

/// pid.codes test VID
const USB_VID: u16 = 0x1209;
/// Test PID
const USB_PID: u16 = 0x0001;

/// Report writer size (MediaKeyboardReport is 2 bytes)
const REPORT_SIZE: usize = 8;

/// Interrupt endpoint poll interval
const POLL_MS: u8 = 10;

/// Longest a single report may wait for the host
const SEND_TIMEOUT_MS: u64 = 100;

// Descriptor and class buffers (must live forever)
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static HID_STATE: StaticCell<State<'static>> = StaticCell::new();

/// USB send failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum HidError {
    /// Endpoint refused the report (not configured or disabled)
    Endpoint(EndpointError),
    /// Host did not poll the endpoint in time
    Timeout,
}

/// Build the USB device and the consumer control interface
pub fn init(driver: Driver<'static, USB>) -> (UsbDevice<'static, Driver<'static, USB>>, UsbConsumer) {
    let mut config = embassy_usb::Config::new(USB_VID, USB_PID);
    config.manufacturer = Some("Voluknob");
    config.product = Some("Volume Knob");
    config.serial_number = Some("00000001");
    config.max_power = 100;
    config.max_packet_size_0 = 64;

    let mut builder = Builder::new(
        driver,
        config,
        CONFIG_DESCRIPTOR.init([0; 256]),
        BOS_DESCRIPTOR.init([0; 256]),
        MSOS_DESCRIPTOR.init([0; 256]),
        CONTROL_BUF.init([0; 64]),
    );

    let hid_config = hid::Config {
        report_descriptor: MediaKeyboardReport::desc(),
        request_handler: None,
        poll_ms: POLL_MS,
        max_packet_size: REPORT_SIZE as u16,
        hid_subclass: HidSubclass::No,
        hid_boot_protocol: HidBootProtocol::None,
    };
    let writer = HidWriter::<_, REPORT_SIZE>::new(&mut builder, HID_STATE.init(State::new()), hid_config);

    info!("USB HID consumer control {:04x}:{:04x}", USB_VID, USB_PID);

    (builder.build(), HidClick::new(UsbReports { writer }))
}

/// Consumer control over the HID interrupt endpoint
pub type UsbConsumer = HidClick<UsbReports>;

/// Media keyboard reports on the HID IN endpoint
pub struct UsbReports {
    writer: HidWriter<'static, Driver<'static, USB>, REPORT_SIZE>,
}

impl ReportWriter for UsbReports {
    type Error = HidError;

    async fn write_usage(&mut self, usage_id: u16) -> Result<(), Self::Error> {
        let report = MediaKeyboardReport { usage_id };
        let result = match with_timeout(
            Duration::from_millis(SEND_TIMEOUT_MS),
            self.writer.write_serialize(&report),
        )
        .await
        {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(HidError::Endpoint(e)),
            Err(_) => Err(HidError::Timeout),
        };

        if let Err(e) = result {
            warn!("HID report {:04x} failed: {}", usage_id, e);
        }
        result
    }
}
