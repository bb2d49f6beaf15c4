//! GPIO RGB status LED
//!
//! Drives a three-line RGB LED. Each line is on/off only, so a color
//! component lights its channel when nonzero. Intermediate intensities
//! quantize to full on.

use embedded_hal::digital::OutputPin;

use repmate_core::status::Rgb;
use repmate_core::traits::{IndicatorError, StatusLed};

/// RGB LED wiring configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbLedConfig {
    /// If true, a channel is ON when its pin is LOW (common-anode parts)
    pub active_low: bool,
}

/// Three-pin RGB LED
pub struct GpioRgbLed<R, G, B> {
    red: R,
    green: G,
    blue: B,
    config: RgbLedConfig,
}

impl<R, G, B> GpioRgbLed<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    /// Create an LED from its three channel pins
    pub fn new(red: R, green: G, blue: B, config: RgbLedConfig) -> Self {
        Self {
            red,
            green,
            blue,
            config,
        }
    }

    fn drive<P: OutputPin>(pin: &mut P, on: bool, active_low: bool) -> Result<(), IndicatorError> {
        if on != active_low {
            pin.set_high().map_err(|_| IndicatorError::Io)
        } else {
            pin.set_low().map_err(|_| IndicatorError::Io)
        }
    }
}

impl<R, G, B> StatusLed for GpioRgbLed<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    fn set_color(&mut self, color: Rgb) -> Result<(), IndicatorError> {
        let active_low = self.config.active_low;
        Self::drive(&mut self.red, color.r != 0, active_low)?;
        Self::drive(&mut self.green, color.g != 0, active_low)?;
        Self::drive(&mut self.blue, color.b != 0, active_low)?;
        Ok(())
    }
}
