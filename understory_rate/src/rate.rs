// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction controller: turn pointer, keyboard, and focus input into rating changes.
//!
//! ## Usage
//!
//! 1) Build a [`Rate`] from a [`RateConfig`] when the widget mounts and record
//!    each star's measurable handle in [`Rate::stars_mut`].
//! 2) Forward the toolkit's events to the `on_*` handlers. Each returns the
//!    notifications to deliver, in order.
//! 3) Redraw from [`Rate::render`] (or read [`Rate::displayed_value`]) after
//!    any handler that returned events.
//!
//! Every handler is a no-op while the widget is disabled.

use alloc::string::String;
use alloc::vec::Vec;

use bitflags::bitflags;
use kurbo::Rect;

use crate::config::{Character, Direction, RateConfig};
use crate::error::ConfigError;
use crate::event::{Key, KeyResponse, RateEvent};
use crate::geometry::{Measure, StarRefs, resolve_value};
use crate::value::{ValueModel, normalize};

bitflags! {
    /// Orthogonal interaction phases. Hover and focus can be active together.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Interaction: u8 {
        /// The pointer is over the star row.
        const HOVERING = 1 << 0;
        /// The root node holds keyboard focus.
        const FOCUSED = 1 << 1;
    }
}

/// The focusable element backing the widget's root node.
///
/// Programmatic [`Rate::focus`] / [`Rate::blur`] delegate here; the toolkit
/// then reports the resulting transition through [`Rate::on_focus`] /
/// [`Rate::on_blur`].
pub trait FocusTarget {
    /// Move keyboard focus to the element.
    fn focus(&mut self);
    /// Remove keyboard focus from the element.
    fn blur(&mut self);
}

/// A star-rating input.
///
/// `H` is the measurable handle type recorded per star; plain [`Rect`]s work
/// for hosts that already know their layout.
#[derive(Clone, Debug)]
pub struct Rate<H = Rect> {
    config: RateConfig,
    value: ValueModel,
    interaction: Interaction,
    stars: StarRefs<H>,
}

impl<H> Rate<H> {
    /// Creates a widget, normalizing the initial value into the domain.
    #[must_use]
    pub fn new(config: RateConfig) -> Self {
        let initial = normalize(config.value, config.count, config.allow_half);
        Self {
            value: ValueModel::new(initial),
            config,
            interaction: Interaction::empty(),
            stars: StarRefs::new(),
        }
    }

    /// Creates a widget after validating the configuration.
    pub fn try_new(config: RateConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// The active configuration. `value` there is the initial value only.
    #[must_use]
    pub fn config(&self) -> &RateConfig {
        &self.config
    }

    /// The value model.
    #[must_use]
    pub fn value(&self) -> &ValueModel {
        &self.value
    }

    /// The committed rating.
    #[must_use]
    pub fn committed(&self) -> f64 {
        self.value.committed()
    }

    /// The rating to draw: hover preview when present, else the committed value.
    #[must_use]
    pub fn displayed_value(&self) -> f64 {
        self.value.displayed()
    }

    /// Current interaction phases.
    #[must_use]
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Returns `true` while the root node has keyboard focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.interaction.contains(Interaction::FOCUSED)
    }

    /// Returns `true` while the pointer is over the star row.
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.interaction.contains(Interaction::HOVERING)
    }

    /// Returns `true` when every interactive path is suppressed.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Per-star handles.
    #[must_use]
    pub fn stars(&self) -> &StarRefs<H> {
        &self.stars
    }

    /// Per-star handles, for the binding layer to fill during layout.
    pub fn stars_mut(&mut self) -> &mut StarRefs<H> {
        &mut self.stars
    }

    /// Accept a value pushed in by the owning application.
    ///
    /// The value is normalized into the domain. Nothing is emitted: the host
    /// is the source of the change.
    pub fn set_value(&mut self, value: f64) {
        let value = normalize(value, self.config.count, self.config.allow_half);
        self.value.replace_committed(value);
    }

    /// Enables or disables the widget. State is left as is.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    /// Changes the number of stars, clamping the committed value into the new domain.
    pub fn set_count(&mut self, count: usize) {
        self.config.count = count;
        self.stars.truncate(count);
        let committed = normalize(self.value.committed(), count, self.config.allow_half);
        self.value.replace_committed(committed);
        if self.value.hover().is_some_and(|hover| hover > count as f64) {
            self.value.discard_hover();
        }
    }

    /// Enables or disables half stars, snapping the committed value to the new step.
    pub fn set_allow_half(&mut self, allow_half: bool) {
        self.config.allow_half = allow_half;
        let committed = normalize(self.value.committed(), self.config.count, allow_half);
        self.value.replace_committed(committed);
    }

    /// Enables or disables reset-to-zero on re-click.
    pub fn set_allow_clear(&mut self, allow_clear: bool) {
        self.config.allow_clear = allow_clear;
    }

    /// Changes the layout direction.
    pub fn set_direction(&mut self, direction: Direction) {
        self.config.direction = direction;
    }

    /// Replaces the per-star tooltips.
    pub fn set_tooltips(&mut self, tooltips: Option<Vec<String>>) {
        self.config.tooltips = tooltips;
    }

    /// Replaces the star glyph.
    pub fn set_character(&mut self, character: Character) {
        self.config.character = character;
    }

    /// Changes the keyboard focus order.
    pub fn set_tab_index(&mut self, tab_index: i32) {
        self.config.tab_index = tab_index;
    }

    /// Handle pointer leaving the star row.
    pub fn on_mouse_leave(&mut self) -> Vec<RateEvent> {
        let mut out = Vec::new();
        if self.config.disabled {
            return out;
        }
        self.interaction.remove(Interaction::HOVERING);
        self.reset_transient(&mut out);
        out
    }

    /// Handle a key press on star `index` itself.
    ///
    /// Enter activates the star like a click, but without pointer geometry the
    /// whole-star value `index + 1` is always chosen. Other keys are left for
    /// the root handler, [`Rate::on_key_down`].
    pub fn on_star_key_down(&mut self, index: usize, key: Key) -> Vec<RateEvent> {
        if self.config.disabled || key != Key::Enter || index >= self.config.count {
            return Vec::new();
        }
        self.activate((index + 1) as f64)
    }

    /// Handle a key press on the root node.
    ///
    /// Arrow keys move the committed value by one step (`0.5` with half stars),
    /// mirrored in right-to-left layouts. A step that would leave `[0, count]`
    /// is not applied. Every key is echoed as [`RateEvent::KeyDown`].
    pub fn on_key_down(&mut self, key: Key) -> KeyResponse {
        let mut response = KeyResponse::default();
        if self.config.disabled {
            return response;
        }

        let committed = self.value.committed();
        let max = self.config.max_value();
        let step = self.config.step();
        let rtl = self.config.direction.is_rtl();
        let delta = match key {
            Key::ArrowRight if !rtl => (committed < max).then_some(step),
            Key::ArrowLeft if !rtl => (committed > 0.0).then_some(-step),
            Key::ArrowRight => (committed > 0.0).then_some(-step),
            Key::ArrowLeft => (committed < max).then_some(step),
            _ => None,
        };

        match delta {
            Some(delta) if (0.0..=max).contains(&(committed + delta)) => {
                self.value.set_committed(committed + delta, &mut response.events);
                response.prevent_default = true;
            }
            _ if matches!(key, Key::ArrowLeft | Key::ArrowRight) => {
                tracing::trace!(
                    target: "understory_rate",
                    value = committed,
                    ?key,
                    "keyboard step refused at domain boundary"
                );
            }
            _ => {}
        }

        response.events.push(RateEvent::KeyDown(key));
        response
    }

    /// Handle the root node gaining focus.
    pub fn on_focus(&mut self) -> Vec<RateEvent> {
        if self.config.disabled {
            return Vec::new();
        }
        self.interaction.insert(Interaction::FOCUSED);
        alloc::vec![RateEvent::Focus]
    }

    /// Handle the root node losing focus.
    pub fn on_blur(&mut self) -> Vec<RateEvent> {
        if self.config.disabled {
            return Vec::new();
        }
        self.interaction.remove(Interaction::FOCUSED);
        alloc::vec![RateEvent::Blur]
    }

    /// Programmatically focus the widget. Returns `false` (and does nothing) while disabled.
    pub fn focus<T: FocusTarget + ?Sized>(&self, target: &mut T) -> bool {
        if self.config.disabled {
            return false;
        }
        target.focus();
        true
    }

    /// Programmatically blur the widget. Returns `false` (and does nothing) while disabled.
    pub fn blur<T: FocusTarget + ?Sized>(&self, target: &mut T) -> bool {
        if self.config.disabled {
            return false;
        }
        target.blur();
        true
    }

    /// Run mount-time behavior: focus the widget if `autofocus` is set.
    pub fn mount<T: FocusTarget + ?Sized>(&self, target: &mut T) -> bool {
        self.config.autofocus && self.focus(target)
    }

    fn reset_transient(&mut self, out: &mut Vec<RateEvent>) {
        self.value.clear_cleared();
        self.value.set_hover(None, out);
    }

    fn activate(&mut self, candidate: f64) -> Vec<RateEvent> {
        let mut out = Vec::new();
        let is_reset = self.config.allow_clear && candidate == self.value.committed();
        self.reset_transient(&mut out);
        if is_reset {
            self.value.set_committed(0.0, &mut out);
            self.value.record_cleared(candidate);
        } else {
            self.value.set_committed(candidate, &mut out);
        }
        out
    }
}

impl<H: Measure> Rate<H> {
    /// Resolve the value a pointer at `pointer_x` over star `index` represents.
    ///
    /// The star's bounds are measured now.
    #[must_use]
    pub fn star_value(&self, index: usize, pointer_x: f64) -> f64 {
        resolve_value(
            index,
            pointer_x,
            self.stars.bounds(index),
            self.config.direction,
            self.config.allow_half,
        )
    }

    /// Handle the pointer moving over star `index` at absolute x `pointer_x`.
    ///
    /// When the resolved value equals the value just cleared by a reset click,
    /// the preview is suppressed once (no event) and the marker is disarmed.
    pub fn on_hover(&mut self, index: usize, pointer_x: f64) -> Vec<RateEvent> {
        let mut out = Vec::new();
        if self.config.disabled || index >= self.config.count {
            return out;
        }
        self.interaction.insert(Interaction::HOVERING);
        let candidate = self.star_value(index, pointer_x);
        if self.value.cleared() == Some(candidate) {
            tracing::trace!(
                target: "understory_rate",
                index,
                candidate,
                "hover suppressed on cleared value"
            );
            self.value.clear_cleared();
            return out;
        }
        tracing::trace!(target: "understory_rate", index, candidate, "hover");
        self.value.clear_cleared();
        self.value.set_hover(Some(candidate), &mut out);
        out
    }

    /// Handle a click on star `index` at absolute x `pointer_x`.
    ///
    /// Clicking the committed value with `allow_clear` resets to zero and arms
    /// the cleared marker so the preview does not immediately snap back.
    pub fn on_click(&mut self, index: usize, pointer_x: f64) -> Vec<RateEvent> {
        if self.config.disabled || index >= self.config.count {
            return Vec::new();
        }
        let candidate = self.star_value(index, pointer_x);
        self.activate(candidate)
    }
}
