// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_rate` crate.
//!
//! These drive a mounted widget through full pointer and keyboard sequences and
//! check the value model, the emitted notifications, and the rendered fill.

use kurbo::Rect;
use understory_rate::geometry::resolve_value;
use understory_rate::render::StarFill;
use understory_rate::{Direction, Key, Rate, RateConfig, RateEvent};

const WIDTH: f64 = 32.0;
const ORIGIN: f64 = 100.0;

fn bounds(index: usize) -> Rect {
    let x0 = ORIGIN + index as f64 * WIDTH;
    Rect::new(x0, 10.0, x0 + WIDTH, 10.0 + WIDTH)
}

fn mounted(config: RateConfig) -> Rate {
    let mut rate = Rate::new(config);
    for index in 0..rate.config().count {
        rate.stars_mut().set(index, bounds(index));
    }
    rate
}

fn at(index: usize, offset: f64) -> f64 {
    bounds(index).x0 + offset
}

fn filled(rate: &Rate) -> usize {
    rate.render()
        .stars
        .iter()
        .filter(|star| star.fill == StarFill::Full)
        .count()
}

#[test]
fn half_resolution_over_every_offset() {
    for index in 0..5 {
        let rect = bounds(index);
        for step in 0..=32_u8 {
            let offset = f64::from(step);
            let x = rect.x0 + offset;
            let whole = (index + 1) as f64;
            let ltr = resolve_value(index, x, Some(rect), Direction::Ltr, true);
            let rtl = resolve_value(index, x, Some(rect), Direction::Rtl, true);
            if offset < WIDTH / 2.0 {
                assert_eq!(ltr, whole - 0.5, "ltr below midpoint at {offset}");
                assert_eq!(rtl, whole, "rtl below midpoint at {offset}");
            } else if offset > WIDTH / 2.0 {
                assert_eq!(ltr, whole, "ltr above midpoint at {offset}");
                assert_eq!(rtl, whole - 0.5, "rtl above midpoint at {offset}");
            } else {
                assert_eq!(ltr, whole, "ltr at midpoint");
                assert_eq!(rtl, whole, "rtl at midpoint");
            }
        }
    }
}

#[test]
fn every_commit_pairs_update_and_change() {
    let mut rate = mounted(RateConfig::default().with_allow_half(true));
    let mut all = Vec::new();
    let _ = rate.on_hover(1, at(1, 30.0));
    all.extend(rate.on_click(1, at(1, 30.0)));
    all.extend(rate.on_key_down(Key::ArrowRight).events);
    all.extend(rate.on_star_key_down(4, Key::Enter));

    let commits: Vec<_> = all
        .windows(2)
        .filter_map(|pair| match pair {
            [RateEvent::Update(a), RateEvent::Change(b)] => Some((*a, *b)),
            _ => None,
        })
        .collect();
    assert_eq!(commits, [(2.0, 2.0), (2.5, 2.5), (5.0, 5.0)]);
    assert_eq!(
        all.iter().filter(|e| matches!(e, RateEvent::Update(_))).count(),
        3
    );
}

#[test]
fn hover_is_cleared_before_each_pointer_commit() {
    let mut rate = mounted(RateConfig::default());
    let _ = rate.on_hover(4, at(4, 20.0));
    let events = rate.on_click(2, at(2, 20.0));
    assert_eq!(events[0], RateEvent::HoverChange(None));
    assert_eq!(rate.value().hover(), None);
    assert_eq!(rate.displayed_value(), 3.0);
}

#[test]
fn reset_then_leave_and_return_commits_normally() {
    let mut rate = mounted(RateConfig::default().with_value(4.0));
    let _ = rate.on_click(3, at(3, 20.0));
    assert_eq!(rate.committed(), 0.0);

    let _ = rate.on_hover(0, at(0, 20.0));
    let _ = rate.on_mouse_leave();
    let _ = rate.on_hover(3, at(3, 20.0));
    assert_eq!(rate.displayed_value(), 4.0);

    let events = rate.on_click(3, at(3, 20.0));
    assert_eq!(events.last(), Some(&RateEvent::Change(4.0)));
    assert_eq!(rate.committed(), 4.0);
}

#[test]
fn keyboard_boundaries_are_silent() {
    let mut rate = mounted(RateConfig::default().with_value(5.0));
    let response = rate.on_key_down(Key::ArrowRight);
    assert!(!response.prevent_default);
    assert!(response.events.iter().all(|e| e.changed_value().is_none()));

    let mut rate = mounted(RateConfig::default());
    let response = rate.on_key_down(Key::ArrowLeft);
    assert!(!response.prevent_default);
    assert!(response.events.iter().all(|e| e.changed_value().is_none()));
}

#[test]
fn disabling_after_mount_freezes_the_widget() {
    let mut rate = mounted(RateConfig::default().with_value(2.0));
    let _ = rate.on_focus();
    rate.set_disabled(true);

    let before = rate.value().clone();
    let mut events = Vec::new();
    for index in 0..5 {
        events.extend(rate.on_hover(index, at(index, 5.0)));
        events.extend(rate.on_click(index, at(index, 5.0)));
        events.extend(rate.on_star_key_down(index, Key::Enter));
    }
    events.extend(rate.on_key_down(Key::ArrowRight).events);
    events.extend(rate.on_mouse_leave());
    events.extend(rate.on_blur());

    assert!(events.is_empty());
    assert_eq!(rate.value(), &before);
}

#[test]
fn clear_then_suppressed_hover_scenario() {
    let mut rate = mounted(
        RateConfig::default()
            .with_count(5)
            .with_allow_half(true)
            .with_allow_clear(true)
            .with_value(3.0),
    );

    // Past the midpoint of the third star resolves to 3, the committed value.
    let events = rate.on_click(2, at(2, 24.0));
    assert_eq!(
        events,
        [
            RateEvent::HoverChange(None),
            RateEvent::Update(0.0),
            RateEvent::Change(0.0),
        ]
    );
    assert_eq!(rate.value().cleared(), Some(3.0));

    // Same spot: suppressed, nothing emitted, still showing zero.
    assert!(rate.on_hover(2, at(2, 24.0)).is_empty());
    assert_eq!(rate.displayed_value(), 0.0);
    assert_eq!(filled(&rate), 0);

    // Elsewhere: full fifth star previews 5.
    assert_eq!(
        rate.on_hover(4, at(4, 31.0)),
        [RateEvent::HoverChange(Some(5.0))]
    );
    assert_eq!(rate.displayed_value(), 5.0);
    assert_eq!(filled(&rate), 5);
    assert_eq!(rate.committed(), 0.0);
}

#[test]
fn rtl_pointer_and_keys_mirror() {
    let mut rate = mounted(
        RateConfig::default()
            .with_allow_half(true)
            .with_direction(Direction::Rtl),
    );
    let _ = rate.on_click(2, at(2, 28.0));
    assert_eq!(rate.committed(), 2.5);
    let _ = rate.on_key_down(Key::ArrowLeft);
    assert_eq!(rate.committed(), 3.0);
    let _ = rate.on_key_down(Key::ArrowRight);
    let _ = rate.on_key_down(Key::ArrowRight);
    assert_eq!(rate.committed(), 2.0);
}

#[test]
fn layout_changes_are_seen_on_the_next_event() {
    let mut rate = mounted(RateConfig::default().with_allow_half(true));
    assert_eq!(
        rate.on_hover(0, ORIGIN + 4.0),
        [RateEvent::HoverChange(Some(0.5))]
    );
    // The row scrolls left by a whole star width.
    for index in 0..5 {
        let moved = bounds(index) - kurbo::Vec2::new(WIDTH, 0.0);
        rate.stars_mut().set(index, moved);
    }
    assert_eq!(
        rate.on_hover(0, ORIGIN + 4.0),
        [RateEvent::HoverChange(Some(1.0))]
    );
}
