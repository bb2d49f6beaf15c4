//! Activity status and indicator colors
//!
//! Downstream consumers (screen, status LED) see the counter through the
//! types here: an activity level and the color it maps to.

/// User-visible activity status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activity {
    /// No active phase, waiting for motion
    #[default]
    Idle,
    /// An active phase is in progress
    Moving,
}

impl Activity {
    /// Derive the status from the counter's active-phase flag
    pub fn from_active(active: bool) -> Self {
        if active {
            Activity::Moving
        } else {
            Activity::Idle
        }
    }

    /// Check if this is the moving state
    pub fn is_moving(&self) -> bool {
        matches!(self, Activity::Moving)
    }

    /// Status line label
    pub fn label(&self) -> &'static str {
        match self {
            Activity::Idle => "READY",
            Activity::Moving => "MOVING",
        }
    }

    /// Status LED color for this activity
    pub fn color(&self) -> Rgb {
        match self {
            Activity::Idle => Rgb::BLUE,
            Activity::Moving => Rgb::GREEN,
        }
    }
}

/// 24-bit RGB color for the status LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Shown while an active phase is in progress
    pub const GREEN: Rgb = Rgb::from_hex(0x00FF00);
    /// Shown at boot and while ready
    pub const BLUE: Rgb = Rgb::from_hex(0x0000FF);

    /// Create a color from components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a 0xRRGGBB value
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
        }
    }
}
