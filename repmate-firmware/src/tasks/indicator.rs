//! Status LED task
//!
//! Owns the RGB LED pins and applies whatever color was last signalled.

use esp_hal::gpio::{GpioPin, Level, Output};
use log::{info, warn};

use repmate_core::traits::StatusLed;
use repmate_drivers::led::{GpioRgbLed, RgbLedConfig};

use crate::channels::LED_COLOR;

/// Status LED task
#[embassy_executor::task]
pub async fn indicator_task(red: GpioPin<38>, green: GpioPin<39>, blue: GpioPin<40>) {
    info!("Indicator task started");

    let mut led = GpioRgbLed::new(
        Output::new(red, Level::Low),
        Output::new(green, Level::Low),
        Output::new(blue, Level::Low),
        RgbLedConfig::default(),
    );

    loop {
        let color = LED_COLOR.wait().await;
        if led.set_color(color).is_err() {
            warn!("LED write failed");
        }
    }
}
