use core::cmp::Ordering;

use crate::{DetectorPolicy, KeyboardTransition, MeasurementSample};

/// The height-delta heuristic.
///
/// Stateless: every call depends only on its arguments and the policy, so it is safe to run
/// inside a layout pass. Degenerate input (zero heights, no previous measurement, rotation)
/// yields `None`; a missed transition is preferred over a spurious one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KeyboardVisibilityDetector {
    policy: DetectorPolicy,
}

impl KeyboardVisibilityDetector {
    pub fn new(policy: DetectorPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &DetectorPolicy {
        &self.policy
    }

    pub fn set_policy(&mut self, policy: DetectorPolicy) {
        self.policy = policy;
    }

    /// Decides whether `sample` is a keyboard show, a keyboard hide, or neither.
    ///
    /// `previous_height` is the last height recorded for the view; `0` means none was recorded.
    pub fn evaluate(
        &self,
        sample: MeasurementSample,
        previous_height: u32,
    ) -> Option<KeyboardTransition> {
        if self.policy.suppress_first_measurement && previous_height == 0 {
            return None;
        }
        if self.policy.suppress_on_width_change && sample.width_changed() {
            return None;
        }

        let current = sample.current_height;
        let proposed = sample.proposed_height;
        if current == proposed || current == 0 {
            return None;
        }

        let ratio = sample.height_delta() as f64 / current as f64;
        // NaN thresholds never compare greater, so they suppress instead of firing.
        if ratio.partial_cmp(&self.policy.threshold) != Some(Ordering::Greater) {
            return None;
        }

        if current > proposed {
            Some(KeyboardTransition::Shown { height: proposed })
        } else {
            Some(KeyboardTransition::Hidden)
        }
    }

    /// The fraction of the current height this sample would add or remove.
    ///
    /// Returns `None` when the current height is zero.
    pub fn height_ratio(sample: MeasurementSample) -> Option<f64> {
        if sample.current_height == 0 {
            return None;
        }
        Some(sample.height_delta() as f64 / sample.current_height as f64)
    }
}
