// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget configuration: star count, half-star and clear behavior, layout direction.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

use crate::error::ConfigError;

/// Class-name prefix used when no other prefix is configured.
pub const DEFAULT_PREFIX: &str = "understory-rate";

/// Glyph drawn for the default [`Character::Star`].
pub const STAR_GLYPH: &str = "\u{2605}";

/// Horizontal layout direction of the star row.
///
/// In [`Direction::Rtl`] the first star sits on the right, the half-star split
/// of each star is mirrored, and the arrow keys swap meaning.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

impl Direction {
    /// Returns `true` for [`Direction::Rtl`].
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// The glyph drawn for each star.
///
/// Hosts that need a per-index factory implement
/// [`StarRenderer`](crate::render::StarRenderer) instead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Character {
    /// The filled star glyph ([`STAR_GLYPH`]).
    #[default]
    Star,
    /// Arbitrary text, e.g. a letter or an emoji.
    Text(String),
}

impl Character {
    /// The text drawn for this character.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Star => STAR_GLYPH,
            Self::Text(text) => text,
        }
    }
}

/// Configuration for a [`Rate`](crate::Rate) widget.
///
/// ```
/// use understory_rate::{Direction, RateConfig};
///
/// let config = RateConfig::default()
///     .with_count(10)
///     .with_allow_half(true)
///     .with_direction(Direction::Rtl);
/// assert_eq!(config.step(), 0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RateConfig {
    /// Number of stars rendered.
    pub count: usize,
    /// Initial committed rating.
    pub value: f64,
    /// Enables half-step resolution and keyboard stepping.
    pub allow_half: bool,
    /// Clicking the star matching the committed value resets it to zero.
    pub allow_clear: bool,
    /// Per-star tooltip text, one entry per star.
    pub tooltips: Option<Vec<String>>,
    /// Suppresses every interactive path.
    pub disabled: bool,
    /// Glyph drawn for each star.
    pub character: Character,
    /// Focus the widget on mount unless disabled.
    pub autofocus: bool,
    /// Keyboard focus order of the root node.
    pub tab_index: i32,
    /// Layout direction; flips half-star geometry and arrow keys.
    pub direction: Direction,
    /// Prefix for the generated class names.
    pub prefix: String,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            count: 5,
            value: 0.0,
            allow_half: false,
            allow_clear: true,
            tooltips: None,
            disabled: false,
            character: Character::Star,
            autofocus: false,
            tab_index: 0,
            direction: Direction::Ltr,
            prefix: String::from(DEFAULT_PREFIX),
        }
    }
}

impl RateConfig {
    /// Sets the number of stars.
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the initial committed value.
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Enables or disables half stars.
    #[must_use]
    pub fn with_allow_half(mut self, allow_half: bool) -> Self {
        self.allow_half = allow_half;
        self
    }

    /// Enables or disables reset-to-zero on re-click.
    #[must_use]
    pub fn with_allow_clear(mut self, allow_clear: bool) -> Self {
        self.allow_clear = allow_clear;
        self
    }

    /// Sets per-star tooltips.
    #[must_use]
    pub fn with_tooltips<I, S>(mut self, tooltips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tooltips = Some(tooltips.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the star glyph.
    #[must_use]
    pub fn with_character(mut self, character: Character) -> Self {
        self.character = character;
        self
    }

    /// Requests focus on mount.
    #[must_use]
    pub fn with_autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = autofocus;
        self
    }

    /// Sets the keyboard focus order.
    #[must_use]
    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = tab_index;
        self
    }

    /// Sets the layout direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the class-name prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// The keyboard step: `0.5` with half stars, `1.0` otherwise.
    #[must_use]
    pub fn step(&self) -> f64 {
        if self.allow_half { 0.5 } else { 1.0 }
    }

    /// The upper bound of the value domain.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.count as f64
    }

    /// Checks the configuration for values the widget cannot represent.
    ///
    /// The widget itself never calls this on interaction paths; hosts opt in
    /// through [`Rate::try_new`](crate::Rate::try_new) or by calling it directly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::ZeroCount);
        }
        if let Some(tooltips) = &self.tooltips {
            if tooltips.len() != self.count {
                return Err(ConfigError::TooltipCount {
                    expected: self.count,
                    found: tooltips.len(),
                });
            }
        }
        if !self.value.is_finite() || self.value < 0.0 || self.value > self.max_value() {
            return Err(ConfigError::ValueOutOfRange {
                value: self.value,
                count: self.count,
            });
        }
        let scaled = self.value / self.step();
        if scaled.round() != scaled {
            return Err(ConfigError::ValueOffStep {
                value: self.value,
                allow_half: self.allow_half,
            });
        }
        Ok(())
    }
}
