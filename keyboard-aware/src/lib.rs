//! Headless keyboard visibility detection for scrollable containers.
//!
//! For bridge encoding and the keyboard-aware scroll controller, see the
//! `keyboard-aware-adapter` crate.
//!
//! Mobile toolkits rarely tell a scroll container that the on-screen keyboard appeared. What the
//! container does see is its own layout: when the window resizes for the keyboard, the next
//! measurement pass proposes a much smaller height at the same width. This crate turns that
//! signal into `Shown`/`Hidden` transitions.
//!
//! It is UI-agnostic. A toolkit layer is expected to provide, on every measurement pass:
//! - the container's current width/height
//! - the proposed width/height
//! - a monotonic timestamp in milliseconds
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod detector;
mod options;
mod tracker;
mod types;

#[cfg(test)]
mod tests;

pub use detector::KeyboardVisibilityDetector;
pub use options::{DEFAULT_THRESHOLD, DetectorPolicy, OnTransitionCallback, TrackerOptions};
pub use tracker::KeyboardTracker;
pub use types::{
    KeyboardState, KeyboardTransition, KeyboardTransitionEvent, MeasurementSample, ViewId,
};
