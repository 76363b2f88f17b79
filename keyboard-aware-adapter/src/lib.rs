//! Adapter utilities for the `keyboard-aware` crate.
//!
//! The `keyboard-aware` crate is UI-agnostic and focuses on detecting keyboard transitions from
//! measurement passes. This crate provides small, framework-neutral helpers commonly needed by
//! toolkit bindings:
//!
//! - Bridge encoding (`"keyboardVisible"` / `"keyboardHidden"` events) and event sinks
//! - A keyboard-aware scroll controller (bottom inset bookkeeping, scroll to the focused input,
//!   scroll reset when the keyboard hides)
//!
//! This crate does not hold UI objects. Scrolling is expressed as [`ScrollCommand`] values that
//! the binding applies to the real scroll view.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod bridge;
mod controller;
mod layout;
mod options;
mod sink;


pub use bridge::{BridgeEvent, BridgeEventName, BridgePayload};
pub use controller::{KeyboardAwareScrollController, MeasureOutcome};
pub use layout::{ContentOffset, ElementLayout, KeyboardFrame, ScrollCommand};
pub use options::{
    DEFAULT_EXTRA_HEIGHT, DEFAULT_KEYBOARD_OPENING_TIME_MS, DEFAULT_TAB_BAR_HEIGHT,
    ScrollControllerOptions,
};
pub use sink::{BridgeEmitter, EventSink, FnSink, sink_fn};
