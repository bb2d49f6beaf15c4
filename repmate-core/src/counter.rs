//! Temporal debounce state machine for rep counting
//!
//! The motion detector reports a raw boolean once per poll tick. A rep is
//! counted on the falling edge of that signal, but only when the time the
//! signal spent high lies strictly inside the configured bounds. Phases
//! ending at or under the minimum are treated as noise or twitches; phases
//! ending at or over the maximum are sustained motion with no rep boundary
//! (someone walking past the detector, a held position).
//!
//! Every transition moves the measurement baseline, including rejected
//! ones: a rejected phase cannot lend its start point to the next one.

use crate::config::DebounceConfig;
use crate::status::Activity;

/// Level change between two consecutive observations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Motion appeared, starts an active phase
    Rise,
    /// Motion ceased, ends the phase and may count a rep
    Fall,
    /// No change, signal still high
    SteadyOn,
    /// No change, signal still low
    SteadyOff,
}

impl Transition {
    /// Classify the change from the previous level to the current one
    pub fn classify(was: bool, now: bool) -> Self {
        match (was, now) {
            (false, true) => Transition::Rise,
            (true, false) => Transition::Fall,
            (true, true) => Transition::SteadyOn,
            (false, false) => Transition::SteadyOff,
        }
    }

    /// Check if this transition is a level change
    pub fn is_edge(&self) -> bool {
        matches!(self, Transition::Rise | Transition::Fall)
    }
}

/// Why a completed phase was not counted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RejectReason {
    /// Phase duration at or under the minimum bound
    TooShort,
    /// Phase duration at or over the maximum bound
    TooLong,
}

/// Result of feeding one poll sample into the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Observation {
    /// Total validated reps so far
    pub count: u32,
    /// Whether an active phase is in progress after this sample
    pub active: bool,
    /// True only on the tick whose falling edge counted a rep
    pub counted: bool,
    /// Set only on the tick whose falling edge was rejected
    pub rejected: Option<RejectReason>,
}

impl Observation {
    /// Activity status for this observation
    pub fn activity(&self) -> Activity {
        Activity::from_active(self.active)
    }
}

/// Rep counter state machine
///
/// One instance lives for the whole process; there is no reset. `observe`
/// is total: every input, including a non-monotonic timestamp, produces a
/// well-defined result.
#[derive(Debug, Clone)]
pub struct RepCounter {
    config: DebounceConfig,
    /// Validated rep total, never decreases
    count: u32,
    /// Level seen on the previous observation
    last_motion: bool,
    /// Timestamp of the most recent transition in either direction (ms)
    last_transition_ms: u64,
    /// True between a rising edge and the next falling edge
    active: bool,
}

impl Default for RepCounter {
    fn default() -> Self {
        Self::new(DebounceConfig::default())
    }
}

impl RepCounter {
    /// Create a counter with the given bounds
    pub fn new(config: DebounceConfig) -> Self {
        Self {
            config,
            count: 0,
            last_motion: false,
            last_transition_ms: 0,
            active: false,
        }
    }

    /// Feed one poll sample into the counter
    ///
    /// `now_ms` is the sample timestamp in milliseconds from any fixed
    /// origin. Re-observing an unchanged level is a no-op apart from the
    /// returned snapshot; an edge updates the baseline timestamp whether
    /// or not it counts.
    pub fn observe(&mut self, motion: bool, now_ms: u64) -> Observation {
        let mut counted = false;
        let mut rejected = None;

        match Transition::classify(self.last_motion, motion) {
            Transition::Rise => {
                self.active = true;
                self.last_transition_ms = now_ms;
            }
            Transition::Fall => {
                let held_ms = now_ms.saturating_sub(self.last_transition_ms);
                match self.validate(held_ms) {
                    Ok(()) => {
                        self.count = self.count.saturating_add(1);
                        counted = true;
                    }
                    Err(reason) => rejected = Some(reason),
                }
                self.active = false;
                self.last_transition_ms = now_ms;
            }
            Transition::SteadyOn | Transition::SteadyOff => {}
        }

        self.last_motion = motion;

        Observation {
            count: self.count,
            active: self.active,
            counted,
            rejected,
        }
    }

    /// Check a completed phase duration against the configured bounds
    ///
    /// Both bounds are strictly exclusive: a phase exactly at a bound is
    /// rejected.
    fn validate(&self, held_ms: u64) -> Result<(), RejectReason> {
        if held_ms <= u64::from(self.config.min_rep_ms) {
            Err(RejectReason::TooShort)
        } else if held_ms >= u64::from(self.config.max_rep_ms) {
            Err(RejectReason::TooLong)
        } else {
            Ok(())
        }
    }

    /// Total validated reps
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Whether an active phase is in progress
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Timestamp of the last observed transition (ms)
    pub fn last_transition_ms(&self) -> u64 {
        self.last_transition_ms
    }

    /// The configured bounds
    pub fn config(&self) -> &DebounceConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> RepCounter {
        RepCounter::new(DebounceConfig::default())
    }

    #[test]
    fn test_single_valid_rep() {
        let mut c = counter();

        let on = c.observe(true, 0);
        assert!(on.active);
        assert!(!on.counted);
        assert_eq!(on.count, 0);

        let off = c.observe(false, 500);
        assert!(!off.active);
        assert!(off.counted);
        assert_eq!(off.count, 1);
        assert_eq!(off.rejected, None);
    }

    #[test]
    fn test_too_short_rejected() {
        let mut c = counter();
        c.observe(true, 0);

        let off = c.observe(false, 100);
        assert_eq!(off.count, 0);
        assert!(!off.counted);
        assert_eq!(off.rejected, Some(RejectReason::TooShort));
        // The rejected edge still moves the baseline
        assert_eq!(c.last_transition_ms(), 100);
    }

    #[test]
    fn test_too_long_rejected() {
        let mut c = counter();
        c.observe(true, 0);

        let off = c.observe(false, 4000);
        assert_eq!(off.count, 0);
        assert_eq!(off.rejected, Some(RejectReason::TooLong));
    }

    #[test]
    fn test_two_consecutive_reps() {
        let mut c = counter();
        c.observe(true, 0);
        c.observe(false, 500);
        c.observe(true, 1000);
        let off = c.observe(false, 1600);

        assert_eq!(off.count, 2);
        assert!(off.counted);
    }

    #[test]
    fn test_boundary_exact_rejected() {
        // Bounds are exclusive on both ends
        let mut c = counter();
        c.observe(true, 0);
        let off = c.observe(false, 300);
        assert_eq!(off.rejected, Some(RejectReason::TooShort));
        assert_eq!(off.count, 0);

        let mut c = counter();
        c.observe(true, 0);
        let off = c.observe(false, 3000);
        assert_eq!(off.rejected, Some(RejectReason::TooLong));
        assert_eq!(off.count, 0);
    }

    #[test]
    fn test_just_inside_bounds_counted() {
        let mut c = counter();
        c.observe(true, 0);
        assert!(c.observe(false, 301).counted);

        let mut c = counter();
        c.observe(true, 0);
        assert!(c.observe(false, 2999).counted);
    }

    #[test]
    fn test_steady_off_is_idempotent() {
        let mut c = counter();
        c.observe(true, 0);
        c.observe(false, 500);
        assert_eq!(c.count(), 1);

        // Repeated low samples change nothing, whatever their timestamps
        for now_ms in [550, 600, 600, 9000] {
            let obs = c.observe(false, now_ms);
            assert_eq!(obs.count, 1);
            assert!(!obs.active);
            assert!(!obs.counted);
            assert_eq!(obs.rejected, None);
        }
        assert_eq!(c.last_transition_ms(), 500);
    }

    #[test]
    fn test_steady_on_keeps_baseline() {
        let mut c = counter();
        c.observe(true, 0);
        c.observe(true, 100);
        c.observe(true, 200);
        assert_eq!(c.last_transition_ms(), 0);

        // Phase is measured from the rising edge, not the last sample
        let off = c.observe(false, 500);
        assert!(off.counted);
        assert_eq!(off.count, 1);
    }

    #[test]
    fn test_rejection_rearms_baseline() {
        let mut c = counter();
        c.observe(true, 0);
        c.observe(false, 100); // rejected, baseline now 100

        // The next rise measures from its own timestamp
        c.observe(true, 600);
        let off = c.observe(false, 1200);
        assert!(off.counted);
        assert_eq!(off.count, 1);
    }

    #[test]
    fn test_active_follows_signal_on_rejection() {
        let mut c = counter();
        let on = c.observe(true, 0);
        assert!(on.active);

        // A rejected falling edge still ends the active phase
        let off = c.observe(false, 100);
        assert!(!off.active);
        assert_eq!(off.rejected, Some(RejectReason::TooShort));
    }

    #[test]
    fn test_rise_never_counts() {
        let mut c = counter();
        c.observe(false, 0);
        let on = c.observe(true, 1000);
        assert!(!on.counted);
        assert_eq!(on.count, 0);
        assert_eq!(on.rejected, None);
    }

    #[test]
    fn test_counted_flag_is_single_tick() {
        let mut c = counter();
        c.observe(true, 0);
        assert!(c.observe(false, 500).counted);
        assert!(!c.observe(false, 550).counted);
    }

    #[test]
    fn test_first_sample_high_starts_phase() {
        // Motion already in progress at boot reads as a rising edge
        let mut c = counter();
        let on = c.observe(true, 5000);
        assert!(on.active);
        assert_eq!(c.last_transition_ms(), 5000);

        let off = c.observe(false, 5500);
        assert!(off.counted);
    }

    #[test]
    fn test_backwards_timestamp_degrades_safely() {
        let mut c = counter();
        c.observe(true, 1000);

        // Clock went backwards: elapsed saturates to 0 and the phase rejects
        let off = c.observe(false, 500);
        assert_eq!(off.rejected, Some(RejectReason::TooShort));
        assert_eq!(off.count, 0);
        assert_eq!(c.last_transition_ms(), 500);
    }

    #[test]
    fn test_zero_length_phase_rejected() {
        let mut c = counter();
        c.observe(true, 700);
        let off = c.observe(false, 700);
        assert_eq!(off.rejected, Some(RejectReason::TooShort));
    }

    #[test]
    fn test_observation_activity_mapping() {
        let mut c = counter();
        assert_eq!(c.observe(true, 0).activity(), Activity::Moving);
        assert_eq!(c.observe(false, 500).activity(), Activity::Idle);
    }

    #[test]
    fn test_transition_classify() {
        assert_eq!(Transition::classify(false, true), Transition::Rise);
        assert_eq!(Transition::classify(true, false), Transition::Fall);
        assert_eq!(Transition::classify(true, true), Transition::SteadyOn);
        assert_eq!(Transition::classify(false, false), Transition::SteadyOff);

        assert!(Transition::Rise.is_edge());
        assert!(Transition::Fall.is_edge());
        assert!(!Transition::SteadyOn.is_edge());
        assert!(!Transition::SteadyOff.is_edge());
    }

    #[test]
    fn test_custom_bounds() {
        let mut c = RepCounter::new(DebounceConfig::new(100, 1000));
        c.observe(true, 0);
        assert!(c.observe(false, 150).counted);

        c.observe(true, 1000);
        let off = c.observe(false, 2000);
        assert_eq!(off.rejected, Some(RejectReason::TooLong));
        assert_eq!(c.count(), 1);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_count_never_decreases(
                steps in proptest::collection::vec((any::<bool>(), 0u64..4000), 0..64),
            ) {
                let mut c = counter();
                let mut now_ms = 0u64;
                let mut prev_count = 0u32;

                for (motion, dt) in steps {
                    now_ms += dt;
                    let obs = c.observe(motion, now_ms);
                    assert!(obs.count >= prev_count);
                    prev_count = obs.count;
                }
            }

            #[test]
            fn prop_count_bounded_by_falling_edges(
                steps in proptest::collection::vec((any::<bool>(), 0u64..4000), 0..64),
            ) {
                let mut c = counter();
                let mut now_ms = 0u64;
                let mut level = false;
                let mut falls = 0u32;

                for (motion, dt) in steps {
                    now_ms += dt;
                    if level && !motion {
                        falls += 1;
                    }
                    level = motion;
                    c.observe(motion, now_ms);
                }
                assert!(c.count() <= falls);
            }

            #[test]
            fn prop_active_and_baseline_track_signal(
                steps in proptest::collection::vec((any::<bool>(), 0u64..4000), 0..64),
            ) {
                let mut c = counter();
                let mut now_ms = 0u64;
                let mut level = false;
                let mut baseline = 0u64;

                for (motion, dt) in steps {
                    now_ms += dt;
                    if Transition::classify(level, motion).is_edge() {
                        baseline = now_ms;
                    }
                    level = motion;

                    let obs = c.observe(motion, now_ms);
                    // Per-tick evaluation means the phase flag mirrors the input
                    assert_eq!(obs.active, motion);
                    assert_eq!(c.last_transition_ms(), baseline);
                }
            }
        }
    }
}
