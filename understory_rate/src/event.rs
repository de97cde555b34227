// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications emitted by the widget and the key input it consumes.

/// A keyboard key as seen by the rating widget.
///
/// Bindings translate their toolkit's key events into this type. Keys the
/// widget does not act on are carried through [`Key::Other`] so they can still
/// be forwarded to host-level `keydown` observers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Enter / Return.
    Enter,
    /// Any other key, identified by a toolkit-specific code.
    Other(u32),
}

/// A notification for the host application.
///
/// Handlers return these in the order they occur. A commit always produces
/// [`RateEvent::Update`] immediately followed by [`RateEvent::Change`] with the
/// same value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RateEvent {
    /// The hover preview changed; `None` means the pointer left.
    HoverChange(Option<f64>),
    /// The committed value changed (two-way binding channel).
    Update(f64),
    /// The committed value changed (change listeners).
    Change(f64),
    /// The widget gained keyboard focus.
    Focus,
    /// The widget lost keyboard focus.
    Blur,
    /// A key went down while the widget was enabled, whether or not it was handled.
    KeyDown(Key),
}

impl RateEvent {
    /// Returns the committed value carried by a [`RateEvent::Change`].
    #[must_use]
    pub fn changed_value(&self) -> Option<f64> {
        match self {
            Self::Change(value) => Some(*value),
            _ => None,
        }
    }
}

/// Result of a root-level key press.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyResponse {
    /// The key adjusted the value; the host should suppress its default action.
    pub prevent_default: bool,
    /// Notifications produced while handling the key.
    pub events: alloc::vec::Vec<RateEvent>,
}
