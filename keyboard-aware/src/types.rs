/// Opaque handle the host toolkit uses to address a view instance.
pub type ViewId = i32;

/// The dimensions seen by a single layout measurement pass.
///
/// `current_*` is the size the container had after the previous layout; `proposed_*` is the size
/// the toolkit is about to give it. All values are in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementSample {
    pub current_width: u32,
    pub current_height: u32,
    pub proposed_width: u32,
    pub proposed_height: u32,
}

impl MeasurementSample {
    pub fn new(
        current_width: u32,
        current_height: u32,
        proposed_width: u32,
        proposed_height: u32,
    ) -> Self {
        Self {
            current_width,
            current_height,
            proposed_width,
            proposed_height,
        }
    }

    /// A sample where only the height changes.
    pub fn height_change(width: u32, current_height: u32, proposed_height: u32) -> Self {
        Self::new(width, current_height, width, proposed_height)
    }

    pub fn width_changed(&self) -> bool {
        self.current_width != self.proposed_width
    }

    /// Absolute height difference between the current and proposed layout.
    pub fn height_delta(&self) -> u32 {
        self.current_height.abs_diff(self.proposed_height)
    }
}

/// A keyboard visibility change inferred from a measurement pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyboardTransition {
    /// The container shrank; `height` is its reduced (post-transition) height.
    Shown { height: u32 },
    /// The container grew back.
    Hidden,
}

impl KeyboardTransition {
    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown { .. })
    }

    /// The state a view is in after this transition.
    pub fn target_state(&self) -> KeyboardState {
        match self {
            Self::Shown { .. } => KeyboardState::KeyboardVisible,
            Self::Hidden => KeyboardState::KeyboardHidden,
        }
    }
}

/// A transition tagged with the view it belongs to.
///
/// Events are plain values: a sink takes them by value and consumes them once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyboardTransitionEvent {
    pub view_id: ViewId,
    /// Monotonic timestamp (ms since boot or process start), as supplied by the adapter.
    pub timestamp_ms: u64,
    pub transition: KeyboardTransition,
}

impl KeyboardTransitionEvent {
    pub fn new(view_id: ViewId, timestamp_ms: u64, transition: KeyboardTransition) -> Self {
        Self {
            view_id,
            timestamp_ms,
            transition,
        }
    }
}

/// Per-view keyboard state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyboardState {
    /// No measurement recorded yet.
    #[default]
    Unknown,
    KeyboardHidden,
    KeyboardVisible,
}

impl KeyboardState {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::KeyboardVisible)
    }
}
