//! Motion detector and status LED traits

use crate::status::Rgb;

/// Errors that can occur when sampling the motion source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DetectorError {
    /// Detector module has not produced a reading yet
    NotReady,
    /// Bus or pin fault while reading
    Io,
}

/// Errors that can occur when driving the status indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorError {
    /// Bus or pin fault while writing
    Io,
}

/// Trait for motion sources
///
/// Implementations wrap whatever the board provides: a digital line from
/// a camera-based detection module, a PIR sensor, an IMU threshold. The
/// counter only ever sees the boolean.
pub trait MotionDetector {
    /// Take one motion reading
    ///
    /// Returns `true` while the source currently sees motion. Takes
    /// `&mut self` because sampling typically requires mutable access to
    /// the underlying pin or bus.
    fn sample(&mut self) -> Result<bool, DetectorError>;
}

/// Trait for the RGB status indicator
pub trait StatusLed {
    /// Set the indicator to the given color
    fn set_color(&mut self, color: Rgb) -> Result<(), IndicatorError>;
}
