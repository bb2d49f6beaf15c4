//! Digital motion line input
//!
//! The K10's detection module runs on its own core and raises a digital
//! line while it currently sees motion. This driver polls that line.

use embedded_hal::digital::InputPin;

use repmate_core::traits::{DetectorError, MotionDetector};

/// Motion line polarity configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineDetectorConfig {
    /// If true, motion = line HIGH
    pub active_high: bool,
}

impl Default for LineDetectorConfig {
    fn default() -> Self {
        Self { active_high: true }
    }
}

/// Digital-line motion detector
///
/// Wraps the detection module's output line. The line can be configured
/// as active-high (default) or active-low.
pub struct LineMotionDetector<P> {
    pin: P,
    config: LineDetectorConfig,
}

impl<P: InputPin> LineMotionDetector<P> {
    /// Create a detector with the given polarity config
    pub fn new(pin: P, config: LineDetectorConfig) -> Self {
        Self { pin, config }
    }
}

impl<P: InputPin> MotionDetector for LineMotionDetector<P> {
    fn sample(&mut self) -> Result<bool, DetectorError> {
        let high = self.pin.is_high().map_err(|_| DetectorError::Io)?;
        Ok(high == self.config.active_high)
    }
}
