// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover, click, and clear-on-reclick on a half-star row.
//!
//! Run:
//! - `cargo run -p understory_demos --example rate_basics`

use understory_demos::{init_tracing, lay_out_row, sketch};
use understory_rate::{Rate, RateConfig, RateEvent};

const SIZE: f64 = 24.0;

fn main() {
    init_tracing();

    let mut rate: Rate = Rate::new(
        RateConfig::default()
            .with_allow_half(true)
            .with_value(3.0)
            .with_tooltips(["terrible", "bad", "normal", "good", "wonderful"]),
    );
    lay_out_row(&mut rate, 0.0, SIZE);
    println!("== Mounted ==\n  {}", sketch(&rate));

    // Right half of the third star resolves to 3, the committed value: reset.
    let x = 2.0 * SIZE + 20.0;
    let events = rate.on_click(2, x);
    println!("== Click star 3 ==\n  {:?}\n  {}", events, sketch(&rate));
    assert_eq!(events.last(), Some(&RateEvent::Change(0.0)));

    // The pointer has not moved: the cleared value is not previewed again.
    let events = rate.on_hover(2, x);
    println!("== Hover same spot ==\n  {:?}\n  {}", events, sketch(&rate));
    assert!(events.is_empty());

    // Left half of the fifth star previews 4.5.
    let events = rate.on_hover(4, 4.0 * SIZE + 3.0);
    println!("== Hover star 5 ==\n  {:?}\n  {}", events, sketch(&rate));
    assert_eq!(events, vec![RateEvent::HoverChange(Some(4.5))]);

    let events = rate.on_mouse_leave();
    println!("== Leave ==\n  {:?}\n  {}", events, sketch(&rate));
}
