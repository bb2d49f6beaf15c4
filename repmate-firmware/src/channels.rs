//! Inter-task communication channels
//!
//! Defines the static signals used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use repmate_core::counter::Observation;
use repmate_core::status::Rgb;

/// Latest counter snapshot for the screen (updated by the sampler task)
pub static SNAPSHOT: Signal<CriticalSectionRawMutex, Observation> = Signal::new();

/// Status LED color (updated by the sampler task; boot color from main)
pub static LED_COLOR: Signal<CriticalSectionRawMutex, Rgb> = Signal::new();
