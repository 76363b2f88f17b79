use keyboard_aware::{KeyboardTransition, KeyboardTransitionEvent, ViewId};

/// Event names exposed to the application layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BridgeEventName {
    #[cfg_attr(feature = "serde", serde(rename = "keyboardVisible"))]
    KeyboardVisible,
    #[cfg_attr(feature = "serde", serde(rename = "keyboardHidden"))]
    KeyboardHidden,
}

impl BridgeEventName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::KeyboardVisible => "keyboardVisible",
            Self::KeyboardHidden => "keyboardHidden",
        }
    }
}

impl core::fmt::Display for BridgeEventName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map payload of a `keyboardVisible` event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BridgePayload {
    /// Container height with the keyboard shown, in pixels.
    pub height: u32,
}

/// A keyboard transition in the shape a host bridge dispatches it.
///
/// With `feature = "serde"`, this serializes as
/// `{"viewId":..,"timestampMs":..,"eventName":"keyboardVisible","payload":{"height":..}}`;
/// `keyboardHidden` carries `"payload":null`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BridgeEvent {
    pub view_id: ViewId,
    pub timestamp_ms: u64,
    pub event_name: BridgeEventName,
    pub payload: Option<BridgePayload>,
}

impl BridgeEvent {
    pub fn name(&self) -> &'static str {
        self.event_name.as_str()
    }

    /// Recovers the transition this event was encoded from.
    ///
    /// Returns `None` for a `keyboardVisible` event without a payload.
    pub fn transition(&self) -> Option<KeyboardTransition> {
        match (self.event_name, self.payload) {
            (BridgeEventName::KeyboardVisible, Some(p)) => {
                Some(KeyboardTransition::Shown { height: p.height })
            }
            (BridgeEventName::KeyboardVisible, None) => None,
            (BridgeEventName::KeyboardHidden, _) => Some(KeyboardTransition::Hidden),
        }
    }
}

impl From<KeyboardTransitionEvent> for BridgeEvent {
    fn from(event: KeyboardTransitionEvent) -> Self {
        let (event_name, payload) = match event.transition {
            KeyboardTransition::Shown { height } => (
                BridgeEventName::KeyboardVisible,
                Some(BridgePayload { height }),
            ),
            KeyboardTransition::Hidden => (BridgeEventName::KeyboardHidden, None),
        };
        Self {
            view_id: event.view_id,
            timestamp_ms: event.timestamp_ms,
            event_name,
            payload,
        }
    }
}
