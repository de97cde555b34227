// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard stepping in a right-to-left layout, with configuration loaded from JSON.
//!
//! Run:
//! - `cargo run -p understory_demos --example rate_keyboard`

use understory_demos::{init_tracing, sketch};
use understory_rate::{FocusTarget, Key, Rate, RateConfig};

#[derive(Debug, Default)]
struct Root {
    focused: bool,
}

impl FocusTarget for Root {
    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }
}

fn main() {
    init_tracing();

    let settings = r#"{ "count": 4, "allow_half": true, "autofocus": true, "direction": "rtl" }"#;
    let config: RateConfig = match serde_json::from_str(settings) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("invalid rate settings: {err}");
            return;
        }
    };
    let mut rate: Rate = match Rate::try_new(config) {
        Ok(rate) => rate,
        Err(err) => {
            tracing::error!("rejected rate settings: {err}");
            return;
        }
    };

    let mut root = Root::default();
    if rate.mount(&mut root) {
        // The toolkit reports the focus change back to the widget.
        let _ = rate.on_focus();
    }
    println!("== Mounted (focused: {}) ==\n  {}", root.focused, sketch(&rate));

    for key in [Key::ArrowLeft, Key::ArrowLeft, Key::ArrowLeft, Key::ArrowRight] {
        let response = rate.on_key_down(key);
        println!(
            "== {:?} (prevent default: {}) ==\n  {}",
            key,
            response.prevent_default,
            sketch(&rate)
        );
    }
    assert_eq!(rate.committed(), 1.0);

    // Stepping past the top of the range is refused.
    rate.set_value(4.0);
    let response = rate.on_key_down(Key::ArrowLeft);
    assert!(!response.prevent_default);
    println!("== At maximum ==\n  {}", sketch(&rate));
}
