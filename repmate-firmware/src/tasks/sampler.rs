//! Motion sampling task
//!
//! Polls the detection module's line at a fixed cadence and feeds the
//! readings through the rep counter. Publishes a snapshot whenever the
//! activity status changes, which covers every counted rep as well (a
//! count always lands on a falling edge).

use embassy_time::{Duration, Instant, Ticker};
use esp_hal::gpio::{GpioPin, Input, Pull};
use log::{debug, info, warn};

use repmate_core::config::DebounceConfig;
use repmate_core::counter::RepCounter;
use repmate_core::status::Activity;
use repmate_core::traits::MotionDetector;
use repmate_drivers::motion::{LineDetectorConfig, LineMotionDetector};

use crate::channels::{LED_COLOR, SNAPSHOT};

/// Poll interval in milliseconds (about 20Hz)
pub const SAMPLE_INTERVAL_MS: u64 = 50;

/// Motion sampling task
///
/// Owns the detector pin and the counter for the life of the process.
#[embassy_executor::task]
pub async fn sampler_task(motion_pin: GpioPin<42>) {
    info!("Sampler task started");

    let pin = Input::new(motion_pin, Pull::Down);
    let mut detector = LineMotionDetector::new(pin, LineDetectorConfig::default());
    let mut counter = RepCounter::new(DebounceConfig::default());

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));
    let start = Instant::now();
    let mut last_reading = false;
    let mut last_activity = Activity::Idle;

    loop {
        ticker.next().await;
        let now_ms = start.elapsed().as_millis();

        // A detector fault must not fabricate an edge; hold the last reading
        let motion = match detector.sample() {
            Ok(reading) => reading,
            Err(e) => {
                warn!("Motion detector fault: {:?}", e);
                last_reading
            }
        };
        last_reading = motion;

        let observation = counter.observe(motion, now_ms);

        if observation.counted {
            info!("Rep {} counted", observation.count);
        }
        if let Some(reason) = observation.rejected {
            debug!("Phase rejected: {:?}", reason);
        }

        let activity = observation.activity();
        if activity != last_activity {
            SNAPSHOT.signal(observation);
            LED_COLOR.signal(activity.color());
            last_activity = activity;
        }
    }
}
