use alloc::sync::Arc;

use crate::KeyboardTransitionEvent;

/// Fraction of the current height a measurement pass must remove (or add) before it counts as a
/// keyboard transition. A single suggestion row or a toolbar stays below it.
pub const DEFAULT_THRESHOLD: f64 = 0.25;

/// A callback fired for every transition a tracker emits.
///
/// This is a side channel (logging, analytics, test probes); the event is also returned from
/// `KeyboardTracker::on_measure`.
pub type OnTransitionCallback = Arc<dyn Fn(&KeyboardTransitionEvent) + Send + Sync>;

/// The tunable knobs of the height-delta heuristic.
///
/// Calibration is device/density dependent, so none of these are baked into the detector.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DetectorPolicy {
    /// A transition fires only when `|Δheight| / current_height` is strictly greater than this.
    pub threshold: f64,
    /// Ignore passes with no recorded previous height (initial layout).
    pub suppress_first_measurement: bool,
    /// Ignore passes where the width changes too (rotation, container resize).
    pub suppress_on_width_change: bool,
}

impl Default for DetectorPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            suppress_first_measurement: true,
            suppress_on_width_change: true,
        }
    }
}

impl DetectorPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid_threshold(threshold: f64) -> bool {
        threshold.is_finite() && threshold >= 0.0
    }

    /// Sets the ratio threshold.
    ///
    /// Non-finite or negative values are rejected and the current threshold is kept.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.set_threshold(threshold);
        self
    }

    /// Returns `false` (and keeps the current value) when `threshold` is rejected.
    pub fn set_threshold(&mut self, threshold: f64) -> bool {
        if !Self::is_valid_threshold(threshold) {
            kwarn!(threshold, kept = self.threshold, "DetectorPolicy: rejected threshold");
            return false;
        }
        self.threshold = threshold;
        true
    }

    pub fn with_suppress_first_measurement(mut self, suppress: bool) -> Self {
        self.suppress_first_measurement = suppress;
        self
    }

    pub fn with_suppress_on_width_change(mut self, suppress: bool) -> Self {
        self.suppress_on_width_change = suppress;
        self
    }
}

/// Configuration for [`crate::KeyboardTracker`].
///
/// Cheap to clone: the observer lives in an `Arc`.
#[derive(Clone)]
pub struct TrackerOptions {
    pub policy: DetectorPolicy,
    /// When disabled, the tracker keeps recording heights but never emits.
    pub enabled: bool,
    pub on_transition: Option<OnTransitionCallback>,
}

impl TrackerOptions {
    pub fn new() -> Self {
        Self {
            policy: DetectorPolicy::default(),
            enabled: true,
            on_transition: None,
        }
    }

    pub fn with_policy(mut self, policy: DetectorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.policy.set_threshold(threshold);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_on_transition(
        mut self,
        on_transition: Option<impl Fn(&KeyboardTransitionEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_transition = on_transition.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for TrackerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TrackerOptions")
            .field("policy", &self.policy)
            .field("enabled", &self.enabled)
            .field("on_transition", &self.on_transition.as_ref().map(|_| ".."))
            .finish()
    }
}
