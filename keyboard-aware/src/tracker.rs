use crate::{
    DetectorPolicy, KeyboardState, KeyboardTransition, KeyboardTransitionEvent,
    KeyboardVisibilityDetector, MeasurementSample, TrackerOptions, ViewId,
};

/// Keyboard state for one view instance.
///
/// The tracker owns the only mutable state of the detection path: the height recorded by the
/// previous measurement pass and the resulting [`KeyboardState`]. Your adapter drives it by
/// calling [`KeyboardTracker::on_measure`] from the toolkit's measure callback.
///
/// The tracker forwards every detector result. A second `Shown` while the keyboard is already
/// visible (e.g. an emoji panel replacing the keyboard) is emitted again with the new height.
#[derive(Clone, Debug)]
pub struct KeyboardTracker {
    view_id: ViewId,
    options: TrackerOptions,
    detector: KeyboardVisibilityDetector,
    previous_height: u32,
    state: KeyboardState,
    last_event: Option<KeyboardTransitionEvent>,
}

impl KeyboardTracker {
    pub fn new(view_id: ViewId, options: TrackerOptions) -> Self {
        kdebug!(view_id, policy = ?options.policy, enabled = options.enabled, "KeyboardTracker::new");
        Self {
            view_id,
            detector: KeyboardVisibilityDetector::new(options.policy),
            options,
            previous_height: 0,
            state: KeyboardState::Unknown,
            last_event: None,
        }
    }

    pub fn view_id(&self) -> ViewId {
        self.view_id
    }

    pub fn options(&self) -> &TrackerOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: TrackerOptions) {
        self.detector.set_policy(options.policy);
        self.options = options;
        ktrace!(
            view_id = self.view_id,
            policy = ?self.options.policy,
            enabled = self.options.enabled,
            "KeyboardTracker::set_options"
        );
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut TrackerOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_policy(&mut self, policy: DetectorPolicy) {
        self.update_options(|o| o.policy = policy);
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.update_options(|o| o.enabled = enabled);
    }

    pub fn set_on_transition(
        &mut self,
        on_transition: Option<impl Fn(&KeyboardTransitionEvent) + Send + Sync + 'static>,
    ) {
        self.options = self.options.clone().with_on_transition(on_transition);
    }

    pub fn detector(&self) -> &KeyboardVisibilityDetector {
        &self.detector
    }

    pub fn state(&self) -> KeyboardState {
        self.state
    }

    pub fn is_keyboard_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Height recorded by the last measurement pass (`0` before the first one).
    pub fn previous_height(&self) -> u32 {
        self.previous_height
    }

    pub fn last_event(&self) -> Option<KeyboardTransitionEvent> {
        self.last_event
    }

    /// Forgets the recorded height and returns to [`KeyboardState::Unknown`].
    ///
    /// Use this when the toolkit recycles the view for different content.
    pub fn reset(&mut self) {
        self.previous_height = 0;
        self.state = KeyboardState::Unknown;
        self.last_event = None;
    }

    /// Feeds one measurement pass.
    ///
    /// `now_ms` must be a monotonic clock (e.g. uptime in milliseconds). Returns the event to
    /// dispatch, if any.
    pub fn on_measure(
        &mut self,
        sample: MeasurementSample,
        now_ms: u64,
    ) -> Option<KeyboardTransitionEvent> {
        ktrace!(
            view_id = self.view_id,
            current_width = sample.current_width,
            current_height = sample.current_height,
            proposed_width = sample.proposed_width,
            proposed_height = sample.proposed_height,
            "KeyboardTracker::on_measure"
        );

        let transition = if self.options.enabled {
            self.detector.evaluate(sample, self.previous_height)
        } else {
            None
        };

        if sample.proposed_height != 0 {
            self.previous_height = sample.proposed_height;
            if self.state == KeyboardState::Unknown {
                self.state = KeyboardState::KeyboardHidden;
            }
        }

        let transition = transition?;
        Some(self.emit(transition, now_ms))
    }

    fn emit(&mut self, transition: KeyboardTransition, now_ms: u64) -> KeyboardTransitionEvent {
        self.state = transition.target_state();
        let event = KeyboardTransitionEvent::new(self.view_id, now_ms, transition);
        kdebug!(
            view_id = self.view_id,
            timestamp_ms = now_ms,
            transition = ?transition,
            "KeyboardTracker: keyboard transition"
        );
        if let Some(cb) = &self.options.on_transition {
            cb(&event);
        }
        self.last_event = Some(event);
        event
    }
}
