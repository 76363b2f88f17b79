use keyboard_aware::{
    KeyboardTracker, KeyboardTransition, MeasurementSample, TrackerOptions, ViewId,
};

use crate::{
    BridgeEmitter, BridgeEvent, ContentOffset, ElementLayout, EventSink, KeyboardFrame,
    ScrollCommand, ScrollControllerOptions,
};

/// What a single measurement pass produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeasureOutcome {
    /// The event dispatched to the sink, if a transition was detected.
    pub event: Option<BridgeEvent>,
    /// A scroll to apply right away (keyboard hide resets the scroll position).
    pub scroll: Option<ScrollCommand>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FocusedInputScroll {
    extra: u32,
    overlap: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingScroll {
    due_ms: u64,
    extra: u32,
}

/// A framework-neutral keyboard-aware scroll view.
///
/// Wraps a [`BridgeEmitter`] and keeps the state a scroll view needs to stay usable while the
/// keyboard is open: the bottom inset reserved for the keyboard, the last content offset, and the
/// position to restore when the keyboard hides.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_measure` from the container's measure callback
/// - `on_scroll` when the scroll view reports a content offset
/// - `set_focused_input` when text focus moves
/// - `tick(now_ms)` each frame/timer tick (delayed scroll to the focused input)
///
/// and apply the returned [`ScrollCommand`]s and [`Self::bottom_inset`] to the real view.
#[derive(Clone, Debug)]
pub struct KeyboardAwareScrollController<S> {
    emitter: BridgeEmitter<S>,
    options: ScrollControllerOptions,
    keyboard_space: u32,
    position: ContentOffset,
    default_reset_coords: Option<ContentOffset>,
    keyboard_frame: Option<KeyboardFrame>,
    focused_input: Option<ElementLayout>,
    pending: Option<PendingScroll>,
}

impl<S: EventSink> KeyboardAwareScrollController<S> {
    pub fn new(
        view_id: ViewId,
        tracker_options: TrackerOptions,
        options: ScrollControllerOptions,
        sink: S,
    ) -> Self {
        Self::from_emitter(BridgeEmitter::new(view_id, tracker_options, sink), options)
    }

    pub fn from_emitter(emitter: BridgeEmitter<S>, options: ScrollControllerOptions) -> Self {
        Self {
            emitter,
            keyboard_space: initial_keyboard_space(&options),
            options,
            position: ContentOffset::ZERO,
            default_reset_coords: None,
            keyboard_frame: None,
            focused_input: None,
            pending: None,
        }
    }

    pub fn emitter(&self) -> &BridgeEmitter<S> {
        &self.emitter
    }

    pub fn emitter_mut(&mut self) -> &mut BridgeEmitter<S> {
        &mut self.emitter
    }

    pub fn into_emitter(self) -> BridgeEmitter<S> {
        self.emitter
    }

    pub fn tracker(&self) -> &KeyboardTracker {
        self.emitter.tracker()
    }

    pub fn sink(&self) -> &S {
        self.emitter.sink()
    }

    pub fn options(&self) -> &ScrollControllerOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ScrollControllerOptions) {
        let inside = options.view_is_inside_tab_bar;
        let was_inside = self.options.view_is_inside_tab_bar;
        self.options = options;
        if inside != was_inside {
            self.keyboard_space = initial_keyboard_space(&self.options);
        }
    }

    /// Bottom inset (content inset / padding) to reserve for the keyboard.
    pub fn bottom_inset(&self) -> u32 {
        self.keyboard_space
    }

    pub fn keyboard_frame(&self) -> Option<KeyboardFrame> {
        self.keyboard_frame
    }

    pub fn position(&self) -> ContentOffset {
        self.position
    }

    /// The offset captured when the keyboard last showed, restored when it hides.
    pub fn default_reset_coords(&self) -> Option<ContentOffset> {
        self.default_reset_coords
    }

    pub fn is_scroll_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel_pending_scroll(&mut self) {
        self.pending = None;
    }

    /// Call this when the scroll view reports a content offset change.
    pub fn on_scroll(&mut self, offset: ContentOffset) {
        self.position = offset;
    }

    pub fn set_focused_input(&mut self, input: Option<ElementLayout>) {
        self.focused_input = input;
    }

    pub fn set_view_is_inside_tab_bar(&mut self, inside: bool) {
        let next = self.options.with_view_is_inside_tab_bar(inside);
        self.set_options(next);
    }

    pub fn set_reset_scroll_to_coords(&mut self, coords: Option<ContentOffset>) {
        self.options.reset_scroll_to_coords = coords;
    }

    /// Feeds one measurement pass.
    ///
    /// Detected transitions are dispatched to the sink and update the keyboard space. A hide
    /// returns the scroll reset to apply.
    pub fn on_measure(&mut self, sample: MeasurementSample, now_ms: u64) -> MeasureOutcome {
        let Some(event) = self.emitter.on_measure(sample, now_ms) else {
            return MeasureOutcome::default();
        };

        let scroll = match event.transition() {
            Some(KeyboardTransition::Shown { height }) => {
                let frame = KeyboardFrame::from_heights(sample.current_height, height);
                self.keyboard_did_show(frame, now_ms);
                None
            }
            Some(KeyboardTransition::Hidden) => self.keyboard_did_hide(),
            None => None,
        };

        MeasureOutcome {
            event: Some(event),
            scroll,
        }
    }

    fn keyboard_did_show(&mut self, frame: KeyboardFrame, now_ms: u64) {
        self.keyboard_frame = Some(frame);

        if self.options.enable_automatic_scroll {
            let mut space = frame.height.saturating_add(self.options.extra_scroll_height);
            if self.options.view_is_inside_tab_bar {
                space = space.saturating_sub(self.options.tab_bar_height);
            }
            if let Some(FocusedInputScroll { extra, overlap }) = self.focused_input_scroll() {
                // The toolkit already scrolled the input above the keyboard; the overlap it
                // consumed comes off the keyboard space.
                space = space.saturating_sub(overlap);
                self.schedule_scroll(extra, now_ms);
            }
            self.keyboard_space = space;
        }

        if self.options.reset_scroll_to_coords.is_none() && self.default_reset_coords.is_none() {
            self.default_reset_coords = Some(self.position);
        }

        adebug!(
            keyboard_height = frame.height,
            keyboard_top = frame.screen_y,
            keyboard_space = self.keyboard_space,
            "KeyboardAwareScrollController: keyboard shown"
        );
    }

    fn keyboard_did_hide(&mut self) -> Option<ScrollCommand> {
        self.keyboard_frame = None;
        self.pending = None;
        self.keyboard_space = self.options.resting_keyboard_space();

        if !self.options.enable_reset_scroll_to_coords {
            self.default_reset_coords = None;
            return None;
        }

        let target = match self.options.reset_scroll_to_coords {
            Some(coords) => coords,
            None => self.default_reset_coords.take().unwrap_or(ContentOffset::ZERO),
        };
        adebug!(
            x = target.x,
            y = target.y,
            keyboard_space = self.keyboard_space,
            "KeyboardAwareScrollController: keyboard hidden"
        );
        Some(ScrollCommand::to_offset(target, true))
    }

    /// Schedules a scroll that keeps the focused input `extra_height + extra_scroll_height` above
    /// the keyboard. The scroll is returned by [`Self::tick`] once the keyboard opening time has
    /// elapsed. The keyboard space is left alone.
    ///
    /// Returns `false` when there is no keyboard, no focused input, or the input is already
    /// clear of the keyboard.
    pub fn scroll_to_focused_input(&mut self, now_ms: u64) -> bool {
        let Some(FocusedInputScroll { extra, .. }) = self.focused_input_scroll() else {
            return false;
        };
        self.schedule_scroll(extra, now_ms);
        true
    }

    fn focused_input_scroll(&self) -> Option<FocusedInputScroll> {
        let frame = self.keyboard_frame?;
        let input = self.focused_input?;

        let input_bottom = input.bottom();
        let keyboard_top = frame.screen_y as i64;
        let total_extra = self.options.total_extra_height() as i64;

        if input_bottom > keyboard_top {
            Some(FocusedInputScroll {
                extra: clamp_u32(total_extra),
                overlap: clamp_u32(input_bottom - keyboard_top),
            })
        } else if input_bottom > keyboard_top - total_extra {
            Some(FocusedInputScroll {
                extra: clamp_u32(total_extra - (keyboard_top - input_bottom)),
                overlap: 0,
            })
        } else {
            None
        }
    }

    fn schedule_scroll(&mut self, extra: u32, now_ms: u64) {
        let due_ms = now_ms.saturating_add(self.options.keyboard_opening_time_ms);
        atrace!(extra, due_ms, "KeyboardAwareScrollController: scroll to focused input");
        self.pending = Some(PendingScroll { due_ms, extra });
    }

    /// Scrolls down by `extra` from the current offset.
    pub fn scroll_for_extra_height(&self, extra: u32) -> ScrollCommand {
        ScrollCommand {
            x: 0,
            y: clamp_u32(self.position.y as i64 + extra as i64),
            animated: true,
        }
    }

    /// Scrolls so that `child` lines up with the top of `parent`.
    pub fn scroll_into_view(&self, parent: ElementLayout, child: ElementLayout) -> ScrollCommand {
        let y = child.y as i64 - parent.y as i64 + self.position.y as i64;
        ScrollCommand {
            x: 0,
            y: clamp_u32(y),
            animated: true,
        }
    }

    /// Advances the controller; returns a scheduled scroll once it is due.
    pub fn tick(&mut self, now_ms: u64) -> Option<ScrollCommand> {
        let pending = self.pending?;
        if now_ms < pending.due_ms {
            return None;
        }
        self.pending = None;
        Some(self.scroll_for_extra_height(pending.extra))
    }
}

fn initial_keyboard_space(options: &ScrollControllerOptions) -> u32 {
    if options.view_is_inside_tab_bar {
        options.tab_bar_height
    } else {
        0
    }
}

fn clamp_u32(v: i64) -> u32 {
    v.clamp(0, u32::MAX as i64) as u32
}
