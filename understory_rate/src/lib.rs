// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_rate --heading-base-level=0

//! Understory Rate: headless state for a star-rating input.
//!
//! This crate models the interaction logic of a row of selectable stars:
//! hover preview, optional half-star precision, keyboard stepping,
//! clear-on-reclick, a disabled state, and right-to-left layout. It does not
//! draw, measure, or route events. A UI binding feeds it pre-computed inputs
//! (which star, where the pointer is, the star's current bounds, which key)
//! and interprets the notifications it hands back.
//!
//! The pieces:
//!
//! - [`geometry`]: map a pointer position over a star to a whole or half value.
//! - [`value`]: committed value, transient hover preview, and the cleared marker.
//! - [`Rate`]: the controller wiring pointer, keyboard, and focus input into
//!   the value model and producing [`RateEvent`]s.
//! - [`render`]: a small render tree (roles, class names, per-star fill) plus a
//!   [`StarRenderer`](render::StarRenderer) seam for glyphs and tooltips.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_rate::{Rate, RateConfig, RateEvent};
//!
//! let mut rate: Rate = Rate::new(
//!     RateConfig::default().with_allow_half(true).with_value(3.0),
//! );
//!
//! // The binding records each star's bounds as it lays them out.
//! for index in 0..5 {
//!     let x0 = index as f64 * 24.0;
//!     rate.stars_mut().set(index, Rect::new(x0, 0.0, x0 + 24.0, 24.0));
//! }
//!
//! // Hovering the left half of the fourth star previews 3.5.
//! assert_eq!(rate.on_hover(3, 74.0), vec![RateEvent::HoverChange(Some(3.5))]);
//! assert_eq!(rate.displayed_value(), 3.5);
//!
//! // Clicking there commits it.
//! let events = rate.on_click(3, 74.0);
//! assert_eq!(events.last(), Some(&RateEvent::Change(3.5)));
//! assert_eq!(rate.committed(), 3.5);
//! ```
//!
//! ## Clearing
//!
//! With `allow_clear` (the default), clicking the position that resolves to
//! the committed value resets the rating to zero. The cleared value is
//! remembered once so that the very next hover at that same position does not
//! immediately preview it again:
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_rate::{Rate, RateConfig};
//!
//! let mut rate: Rate = Rate::new(RateConfig::default().with_value(2.0));
//! rate.stars_mut().set(1, Rect::new(20.0, 0.0, 40.0, 20.0));
//!
//! let _ = rate.on_click(1, 30.0);
//! assert_eq!(rate.committed(), 0.0);
//!
//! // Still over the same star: suppressed.
//! assert!(rate.on_hover(1, 31.0).is_empty());
//! assert_eq!(rate.displayed_value(), 0.0);
//! ```
//!
//! ## Keyboard
//!
//! ```rust
//! use understory_rate::{Direction, Key, Rate, RateConfig};
//!
//! let mut rate: Rate = Rate::new(RateConfig::default().with_direction(Direction::Rtl));
//! let response = rate.on_key_down(Key::ArrowLeft);
//! assert!(response.prevent_default);
//! assert_eq!(rate.committed(), 1.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `libm`: `no_std` float support through Kurbo.
//! - `serde`: `Serialize`/`Deserialize` for [`RateConfig`] and friends.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod rate;
pub mod render;
pub mod value;

pub use config::{Character, Direction, RateConfig};
pub use error::ConfigError;
pub use event::{Key, KeyResponse, RateEvent};
pub use rate::{FocusTarget, Interaction, Rate};
