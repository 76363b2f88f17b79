/// A scroll view's content offset.
///
/// Signed: scroll views report negative offsets while overscrolling or bouncing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentOffset {
    pub x: i32,
    pub y: i32,
}

impl ContentOffset {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A measured element rect, in the same coordinate space as the scroll container's measurement
/// passes (`y = 0` is the container's top edge).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementLayout {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ElementLayout {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }
}

/// Where the keyboard sits, derived from a `Shown` transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyboardFrame {
    /// Height the keyboard took away from the container.
    pub height: u32,
    /// Top edge of the keyboard (the container's reduced height).
    pub screen_y: u32,
}

impl KeyboardFrame {
    /// Derives the frame from the container height before and after the keyboard opened.
    pub fn from_heights(previous_height: u32, shown_height: u32) -> Self {
        Self {
            height: previous_height.saturating_sub(shown_height),
            screen_y: shown_height,
        }
    }
}

/// A scroll request for the binding to apply to the real scroll view.
///
/// Targets are never negative; bounce offsets are clamped to the content origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCommand {
    pub x: u32,
    pub y: u32,
    pub animated: bool,
}

impl ScrollCommand {
    pub fn to_offset(offset: ContentOffset, animated: bool) -> Self {
        Self {
            x: offset.x.max(0) as u32,
            y: offset.y.max(0) as u32,
            animated,
        }
    }

    pub fn offset(&self) -> ContentOffset {
        let clamp = |v: u32| v.min(i32::MAX as u32) as i32;
        ContentOffset::new(clamp(self.x), clamp(self.y))
    }
}
