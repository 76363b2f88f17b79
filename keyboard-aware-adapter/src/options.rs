use crate::ContentOffset;

/// Height of a standard bottom tab bar, subtracted from the keyboard space when the scroll view
/// already sits above one.
pub const DEFAULT_TAB_BAR_HEIGHT: u32 = 49;
/// Distance kept between the focused input and the keyboard.
pub const DEFAULT_EXTRA_HEIGHT: u32 = 75;
/// Delay before scrolling to the focused input, matching the keyboard animation.
pub const DEFAULT_KEYBOARD_OPENING_TIME_MS: u64 = 250;

/// Configuration for [`crate::KeyboardAwareScrollController`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`; missing fields take
/// their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollControllerOptions {
    /// Extra offset kept between the focused input and the keyboard.
    pub extra_height: u32,
    /// Extra space added to the keyboard space (e.g. to keep a footer above the keyboard).
    pub extra_scroll_height: u32,
    pub keyboard_opening_time_ms: u64,
    pub view_is_inside_tab_bar: bool,
    pub tab_bar_height: u32,
    /// Scroll to the focused input when the keyboard shows.
    pub enable_automatic_scroll: bool,
    /// Restore a scroll position when the keyboard hides.
    pub enable_reset_scroll_to_coords: bool,
    /// Position restored on hide. When `None`, the offset captured on show is used instead.
    pub reset_scroll_to_coords: Option<ContentOffset>,
}

impl Default for ScrollControllerOptions {
    fn default() -> Self {
        Self {
            extra_height: DEFAULT_EXTRA_HEIGHT,
            extra_scroll_height: 0,
            keyboard_opening_time_ms: DEFAULT_KEYBOARD_OPENING_TIME_MS,
            view_is_inside_tab_bar: false,
            tab_bar_height: DEFAULT_TAB_BAR_HEIGHT,
            enable_automatic_scroll: true,
            enable_reset_scroll_to_coords: true,
            reset_scroll_to_coords: None,
        }
    }
}

impl ScrollControllerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extra_height(mut self, extra_height: u32) -> Self {
        self.extra_height = extra_height;
        self
    }

    pub fn with_extra_scroll_height(mut self, extra_scroll_height: u32) -> Self {
        self.extra_scroll_height = extra_scroll_height;
        self
    }

    pub fn with_keyboard_opening_time_ms(mut self, delay_ms: u64) -> Self {
        self.keyboard_opening_time_ms = delay_ms;
        self
    }

    pub fn with_view_is_inside_tab_bar(mut self, inside: bool) -> Self {
        self.view_is_inside_tab_bar = inside;
        self
    }

    pub fn with_tab_bar_height(mut self, tab_bar_height: u32) -> Self {
        self.tab_bar_height = tab_bar_height;
        self
    }

    pub fn with_enable_automatic_scroll(mut self, enabled: bool) -> Self {
        self.enable_automatic_scroll = enabled;
        self
    }

    pub fn with_enable_reset_scroll_to_coords(mut self, enabled: bool) -> Self {
        self.enable_reset_scroll_to_coords = enabled;
        self
    }

    pub fn with_reset_scroll_to_coords(mut self, coords: Option<ContentOffset>) -> Self {
        self.reset_scroll_to_coords = coords;
        self
    }

    /// Combined margin the focused input must keep above the keyboard.
    pub fn total_extra_height(&self) -> u32 {
        self.extra_height.saturating_add(self.extra_scroll_height)
    }

    /// Keyboard space while no keyboard is shown.
    pub(crate) fn resting_keyboard_space(&self) -> u32 {
        if self.view_is_inside_tab_bar {
            self.tab_bar_height.saturating_add(self.extra_scroll_height)
        } else {
            self.extra_scroll_height
        }
    }
}
