// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value model: committed rating, transient hover preview, and the cleared marker.
//!
//! All mutation goes through the named methods here so that a single owner
//! (the [`Rate`](crate::Rate) controller) is the only writer. Methods that are
//! observable by the host push their notifications into a caller-provided
//! buffer.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

use crate::event::RateEvent;

/// Clamp `value` into `[0, count]` and snap it to the step grid.
///
/// Non-finite input collapses to zero.
#[must_use]
pub fn normalize(value: f64, count: usize, allow_half: bool) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let snapped = if allow_half {
        (value * 2.0).round() / 2.0
    } else {
        value.round()
    };
    snapped.clamp(0.0, count as f64)
}

/// Committed value, hover preview, and cleared marker for one widget.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueModel {
    committed: f64,
    hover: Option<f64>,
    cleared: Option<f64>,
}

impl ValueModel {
    /// Creates a model with the given committed value and no transient state.
    #[must_use]
    pub fn new(committed: f64) -> Self {
        Self {
            committed,
            hover: None,
            cleared: None,
        }
    }

    /// The externally authoritative rating.
    #[must_use]
    pub fn committed(&self) -> f64 {
        self.committed
    }

    /// The transient hover preview, if any.
    #[must_use]
    pub fn hover(&self) -> Option<f64> {
        self.hover
    }

    /// The value most recently cleared back to zero, if still armed.
    #[must_use]
    pub fn cleared(&self) -> Option<f64> {
        self.cleared
    }

    /// The value to draw: the hover preview when present, else the committed value.
    #[must_use]
    pub fn displayed(&self) -> f64 {
        self.hover.unwrap_or(self.committed)
    }

    /// Commit `value` and notify with paired `Update` and `Change` events.
    ///
    /// `value` must already lie in the widget's domain; this is checked in
    /// debug builds.
    pub fn set_committed(&mut self, value: f64, out: &mut Vec<RateEvent>) {
        debug_assert!(
            value.is_finite() && value >= 0.0,
            "committed rating must be a finite, non-negative value"
        );
        tracing::debug!(
            target: "understory_rate",
            from = self.committed,
            to = value,
            "commit rating"
        );
        self.committed = value;
        out.push(RateEvent::Update(value));
        out.push(RateEvent::Change(value));
    }

    /// Replace the committed value without notifying.
    ///
    /// Used when the owning application pushes a new value in; it already knows.
    pub fn replace_committed(&mut self, value: f64) {
        self.committed = value;
    }

    /// Set or clear the hover preview and notify with `HoverChange`.
    pub fn set_hover(&mut self, value: Option<f64>, out: &mut Vec<RateEvent>) {
        self.hover = value;
        out.push(RateEvent::HoverChange(value));
    }

    /// Drop the hover preview without notifying.
    ///
    /// Only used when a configuration change makes the preview unreachable.
    pub fn discard_hover(&mut self) {
        self.hover = None;
    }

    /// Arm the cleared marker with the value that was just reset.
    pub fn record_cleared(&mut self, value: f64) {
        self.cleared = Some(value);
    }

    /// Disarm the cleared marker.
    pub fn clear_cleared(&mut self) {
        self.cleared = None;
    }
}
