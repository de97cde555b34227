// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory Rate demos.

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use understory_rate::Rate;
use understory_rate::render::{StarContent, StarFill};

/// Install a formatting subscriber that honors `RUST_LOG`, defaulting to
/// `understory_rate=trace` so every commit and hover decision is visible.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("understory_rate=trace"));
    // A second demo in the same process would already have a subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// Lay out `rate`'s stars as a horizontal row of `size`-pixel squares starting at `origin_x`.
pub fn lay_out_row(rate: &mut Rate, origin_x: f64, size: f64) {
    let count = rate.config().count;
    let stars = rate.stars_mut();
    stars.clear();
    for index in 0..count {
        let x0 = origin_x + index as f64 * size;
        stars.set(index, Rect::new(x0, 0.0, x0 + size, size));
    }
}

/// Draw the current state as text: `#` full, `+` half, `.` empty.
pub fn sketch(rate: &Rate) -> String {
    let node = rate.render();
    let mut out: String = node
        .stars
        .iter()
        .map(|star| match star.fill {
            StarFill::Full => '#',
            StarFill::Half => '+',
            StarFill::Zero => '.',
        })
        .collect();
    if let Some(StarContent::Tooltip { title, .. }) = node.stars.first().map(|star| &star.content)
    {
        out.push_str(&format!("  (first tooltip: {title})"));
    }
    out.push_str(&format!(
        "  displayed={} committed={}",
        rate.displayed_value(),
        rate.committed()
    ));
    out
}
