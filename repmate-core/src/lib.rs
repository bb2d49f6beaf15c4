//! Board-agnostic core logic for the Repmate rep counter
//!
//! This crate contains all counting logic that does not depend on
//! specific hardware implementations:
//!
//! - Temporal debounce state machine for rep validation
//! - Activity status and indicator color types
//! - Hardware abstraction traits (motion detector, status LED)
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod counter;
pub mod status;
pub mod traits;

pub use config::{DebounceConfig, DEFAULT_MAX_REP_MS, DEFAULT_MIN_REP_MS};
pub use counter::{Observation, RejectReason, RepCounter, Transition};
pub use status::{Activity, Rgb};
pub use traits::{DetectorError, IndicatorError, MotionDetector, StatusLed};
