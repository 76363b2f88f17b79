use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as u32
    }

    fn gen_sample(&mut self) -> MeasurementSample {
        MeasurementSample::new(
            self.gen_range_u32(0, 2000),
            self.gen_range_u32(0, 3000),
            self.gen_range_u32(0, 2000),
            self.gen_range_u32(0, 3000),
        )
    }
}

fn detector() -> KeyboardVisibilityDetector {
    KeyboardVisibilityDetector::default()
}

#[test]
fn shrink_past_threshold_is_shown_with_reduced_height() {
    let sample = MeasurementSample::height_change(400, 1000, 700);
    assert_eq!(
        detector().evaluate(sample, 1000),
        Some(KeyboardTransition::Shown { height: 700 })
    );
}

#[test]
fn shrink_below_threshold_is_ignored() {
    let sample = MeasurementSample::height_change(400, 1000, 800);
    assert_eq!(detector().evaluate(sample, 1000), None);
}

#[test]
fn ratio_equal_to_threshold_is_ignored() {
    let sample = MeasurementSample::height_change(400, 1000, 750);
    assert_eq!(detector().evaluate(sample, 1000), None);

    let sample = MeasurementSample::height_change(400, 1000, 749);
    assert_eq!(
        detector().evaluate(sample, 1000),
        Some(KeyboardTransition::Shown { height: 749 })
    );
}

#[test]
fn growth_past_threshold_is_hidden() {
    let sample = MeasurementSample::height_change(400, 700, 1000);
    assert_eq!(
        detector().evaluate(sample, 700),
        Some(KeyboardTransition::Hidden)
    );
}

#[test]
fn zero_current_height_is_ignored() {
    let sample = MeasurementSample::height_change(400, 0, 1000);
    assert_eq!(detector().evaluate(sample, 1000), None);
    assert_eq!(KeyboardVisibilityDetector::height_ratio(sample), None);
}

#[test]
fn unchanged_height_is_ignored() {
    let sample = MeasurementSample::height_change(400, 1000, 1000);
    assert_eq!(detector().evaluate(sample, 1000), None);
}

#[test]
fn first_measurement_never_emits() {
    let d = detector();
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..2000 {
        let sample = rng.gen_sample();
        assert_eq!(d.evaluate(sample, 0), None, "sample={sample:?}");
    }
}

#[test]
fn width_change_never_emits() {
    let d = detector();
    let mut rng = Lcg::new(42);
    for _ in 0..2000 {
        let mut sample = rng.gen_sample();
        if !sample.width_changed() {
            sample.proposed_width = sample.current_width.wrapping_add(1);
        }
        let previous = rng.gen_range_u32(1, 3000);
        assert_eq!(d.evaluate(sample, previous), None, "sample={sample:?}");
    }
}

#[test]
fn evaluate_is_a_pure_function() {
    let d = detector();
    let mut rng = Lcg::new(7);
    for _ in 0..2000 {
        let sample = rng.gen_sample();
        let previous = rng.gen_range_u32(0, 3000);
        assert_eq!(d.evaluate(sample, previous), d.evaluate(sample, previous));
    }
}

#[test]
fn shown_height_always_equals_proposed_height() {
    let d = detector();
    let mut rng = Lcg::new(99);
    for _ in 0..2000 {
        let sample = rng.gen_sample();
        let previous = rng.gen_range_u32(1, 3000);
        match d.evaluate(sample, previous) {
            Some(KeyboardTransition::Shown { height }) => {
                assert_eq!(height, sample.proposed_height);
                assert!(sample.proposed_height < sample.current_height);
            }
            Some(KeyboardTransition::Hidden) => {
                assert!(sample.proposed_height > sample.current_height);
            }
            None => {}
        }
    }
}

#[test]
fn custom_threshold_changes_sensitivity() {
    let sample = MeasurementSample::height_change(400, 1000, 800);
    let d = KeyboardVisibilityDetector::new(DetectorPolicy::new().with_threshold(0.15));
    assert_eq!(
        d.evaluate(sample, 1000),
        Some(KeyboardTransition::Shown { height: 800 })
    );

    let d = KeyboardVisibilityDetector::new(DetectorPolicy::new().with_threshold(0.5));
    let sample = MeasurementSample::height_change(400, 1000, 600);
    assert_eq!(d.evaluate(sample, 1000), None);
}

#[test]
fn invalid_threshold_is_rejected() {
    let mut policy = DetectorPolicy::new();
    assert!(!policy.set_threshold(f64::NAN));
    assert!(!policy.set_threshold(-0.1));
    assert!(!policy.set_threshold(f64::INFINITY));
    assert_eq!(policy.threshold, DEFAULT_THRESHOLD);
    assert!(policy.set_threshold(0.3));
    assert_eq!(policy.threshold, 0.3);
}

#[test]
fn nan_threshold_set_directly_suppresses() {
    let policy = DetectorPolicy {
        threshold: f64::NAN,
        ..DetectorPolicy::default()
    };
    let d = KeyboardVisibilityDetector::new(policy);
    let sample = MeasurementSample::height_change(400, 1000, 100);
    assert_eq!(d.evaluate(sample, 1000), None);
}

#[test]
fn suppression_flags_can_be_turned_off() {
    let policy = DetectorPolicy::new()
        .with_suppress_first_measurement(false)
        .with_suppress_on_width_change(false);
    let d = KeyboardVisibilityDetector::new(policy);

    let sample = MeasurementSample::height_change(400, 1000, 600);
    assert_eq!(
        d.evaluate(sample, 0),
        Some(KeyboardTransition::Shown { height: 600 })
    );

    let rotated = MeasurementSample::new(400, 1000, 1000, 400);
    assert_eq!(
        d.evaluate(rotated, 1000),
        Some(KeyboardTransition::Shown { height: 400 })
    );

    // The division guard stays in place regardless of policy.
    let empty = MeasurementSample::height_change(400, 0, 600);
    assert_eq!(d.evaluate(empty, 0), None);
}

#[test]
fn tracker_walks_the_state_machine() {
    let mut t = KeyboardTracker::new(11, TrackerOptions::new());
    assert_eq!(t.state(), KeyboardState::Unknown);

    assert_eq!(t.on_measure(MeasurementSample::new(0, 0, 400, 1000), 1), None);
    assert_eq!(t.state(), KeyboardState::KeyboardHidden);
    assert_eq!(t.previous_height(), 1000);

    // Small chrome change: self-loop.
    assert_eq!(t.on_measure(MeasurementSample::height_change(400, 1000, 950), 2), None);
    assert_eq!(t.state(), KeyboardState::KeyboardHidden);

    let shown = t
        .on_measure(MeasurementSample::height_change(400, 950, 600), 3)
        .unwrap();
    assert_eq!(shown.view_id, 11);
    assert_eq!(shown.timestamp_ms, 3);
    assert_eq!(shown.transition, KeyboardTransition::Shown { height: 600 });
    assert!(t.is_keyboard_visible());

    let hidden = t
        .on_measure(MeasurementSample::height_change(400, 600, 950), 4)
        .unwrap();
    assert_eq!(hidden.transition, KeyboardTransition::Hidden);
    assert_eq!(t.state(), KeyboardState::KeyboardHidden);
    assert_eq!(t.last_event(), Some(hidden));
}

#[test]
fn tracker_ignores_rotation() {
    let mut t = KeyboardTracker::new(1, TrackerOptions::new());
    t.on_measure(MeasurementSample::new(0, 0, 400, 1000), 0);
    assert_eq!(t.on_measure(MeasurementSample::new(400, 1000, 1000, 400), 1), None);
    assert_eq!(t.state(), KeyboardState::KeyboardHidden);
    assert_eq!(t.previous_height(), 400);
}

#[test]
fn disabled_tracker_records_heights_without_emitting() {
    let mut t = KeyboardTracker::new(1, TrackerOptions::new().with_enabled(false));
    t.on_measure(MeasurementSample::new(0, 0, 400, 1000), 0);
    assert_eq!(t.on_measure(MeasurementSample::height_change(400, 1000, 500), 1), None);
    assert_eq!(t.previous_height(), 500);

    t.set_enabled(true);
    assert_eq!(
        t.on_measure(MeasurementSample::height_change(400, 500, 1000), 2)
            .map(|e| e.transition),
        Some(KeyboardTransition::Hidden)
    );
}

#[test]
fn reset_suppresses_the_next_pass() {
    let mut t = KeyboardTracker::new(1, TrackerOptions::new());
    t.on_measure(MeasurementSample::new(0, 0, 400, 1000), 0);
    t.reset();
    assert_eq!(t.state(), KeyboardState::Unknown);
    assert_eq!(t.on_measure(MeasurementSample::height_change(400, 1000, 500), 1), None);
    assert_eq!(t.state(), KeyboardState::KeyboardHidden);
}

#[test]
fn on_transition_observes_every_event() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let calls = Arc::new(AtomicUsize::new(0));
    let seen_cb = Arc::clone(&seen);
    let calls_cb = Arc::clone(&calls);
    let opts = TrackerOptions::new().with_on_transition(Some(move |e: &KeyboardTransitionEvent| {
        calls_cb.fetch_add(1, Ordering::Relaxed);
        seen_cb.lock().unwrap().push(*e);
    }));

    let mut t = KeyboardTracker::new(5, opts);
    t.on_measure(MeasurementSample::new(0, 0, 400, 1000), 0);
    t.on_measure(MeasurementSample::height_change(400, 1000, 600), 10);
    t.on_measure(MeasurementSample::height_change(400, 600, 610), 20);
    t.on_measure(MeasurementSample::height_change(400, 610, 1000), 30);

    assert_eq!(calls.load(Ordering::Relaxed), 2);
    let seen = seen.lock().unwrap();
    assert_eq!(
        seen.iter().map(|e| e.transition).collect::<Vec<_>>(),
        [
            KeyboardTransition::Shown { height: 600 },
            KeyboardTransition::Hidden
        ]
    );
    assert_eq!(seen[1].timestamp_ms, 30);
}

#[test]
fn repeated_shown_is_forwarded() {
    let mut t = KeyboardTracker::new(1, TrackerOptions::new());
    t.on_measure(MeasurementSample::new(0, 0, 400, 2000), 0);
    t.on_measure(MeasurementSample::height_change(400, 2000, 1400), 1);
    let again = t.on_measure(MeasurementSample::height_change(400, 1400, 900), 2);
    assert_eq!(
        again.map(|e| e.transition),
        Some(KeyboardTransition::Shown { height: 900 })
    );
    assert!(t.is_keyboard_visible());
}

#[test]
fn set_policy_updates_the_detector() {
    let mut t = KeyboardTracker::new(1, TrackerOptions::new());
    t.set_policy(DetectorPolicy::new().with_threshold(0.1));
    assert_eq!(t.detector().policy().threshold, 0.1);
    t.on_measure(MeasurementSample::new(0, 0, 400, 1000), 0);
    assert!(t
        .on_measure(MeasurementSample::height_change(400, 1000, 850), 1)
        .is_some());
}

#[test]
fn set_enabled_keeps_policy_and_observer() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_cb = Arc::clone(&calls);
    let opts = TrackerOptions::new()
        .with_threshold(0.1)
        .with_on_transition(Some(move |_: &KeyboardTransitionEvent| {
            calls_cb.fetch_add(1, Ordering::Relaxed);
        }));
    let mut t = KeyboardTracker::new(1, opts);

    t.set_enabled(false);
    assert!(!t.enabled());
    assert!(!t.options().enabled);
    t.set_enabled(false);
    t.set_enabled(true);
    assert!(t.options().enabled);
    assert_eq!(t.detector().policy().threshold, 0.1);

    t.on_measure(MeasurementSample::new(0, 0, 400, 1000), 0);
    assert!(t
        .on_measure(MeasurementSample::height_change(400, 1000, 850), 1)
        .is_some());
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}
