use alloc::vec::Vec;

use keyboard_aware::{KeyboardTracker, MeasurementSample, TrackerOptions, ViewId};

use crate::BridgeEvent;

/// The receiving end of the host bridge (e.g. the toolkit's event dispatcher).
///
/// Each event is handed over by value and consumed once.
pub trait EventSink {
    fn dispatch(&mut self, event: BridgeEvent);
}

impl EventSink for Vec<BridgeEvent> {
    fn dispatch(&mut self, event: BridgeEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn dispatch(&mut self, event: BridgeEvent) {
        (**self).dispatch(event);
    }
}

/// An [`EventSink`] backed by a closure. See [`sink_fn`].
#[derive(Clone, Copy)]
pub struct FnSink<F>(pub F);

impl<F: FnMut(BridgeEvent)> EventSink for FnSink<F> {
    fn dispatch(&mut self, event: BridgeEvent) {
        (self.0)(event);
    }
}

impl<F> core::fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("FnSink(..)")
    }
}

/// Wraps a closure as an [`EventSink`].
pub fn sink_fn<F: FnMut(BridgeEvent)>(f: F) -> FnSink<F> {
    FnSink(f)
}

/// Couples a [`KeyboardTracker`] with a sink: every detected transition is encoded as a
/// [`BridgeEvent`] and dispatched.
#[derive(Clone, Debug)]
pub struct BridgeEmitter<S> {
    tracker: KeyboardTracker,
    sink: S,
}

impl<S: EventSink> BridgeEmitter<S> {
    pub fn new(view_id: ViewId, options: TrackerOptions, sink: S) -> Self {
        Self {
            tracker: KeyboardTracker::new(view_id, options),
            sink,
        }
    }

    pub fn from_tracker(tracker: KeyboardTracker, sink: S) -> Self {
        Self { tracker, sink }
    }

    pub fn tracker(&self) -> &KeyboardTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut KeyboardTracker {
        &mut self.tracker
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_parts(self) -> (KeyboardTracker, S) {
        (self.tracker, self.sink)
    }

    /// Feeds one measurement pass; dispatches and returns the encoded event, if any.
    pub fn on_measure(&mut self, sample: MeasurementSample, now_ms: u64) -> Option<BridgeEvent> {
        let event = BridgeEvent::from(self.tracker.on_measure(sample, now_ms)?);
        atrace!(
            view_id = event.view_id,
            name = event.name(),
            timestamp_ms = event.timestamp_ms,
            "BridgeEmitter: dispatch"
        );
        self.sink.dispatch(event);
        Some(event)
    }
}
