// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-tree construction for the star row.
//!
//! The widget does not draw. [`Rate::render`] and [`Rate::render_with`] build a
//! small description of the row (roles, class names, per-star fill) that a
//! binding turns into real nodes. Glyphs and tooltip wrapping are supplied
//! through a [`StarRenderer`].
//!
//! ```
//! use understory_rate::render::{StarContent, StarFill};
//! use understory_rate::{Rate, RateConfig};
//!
//! let rate: Rate = Rate::new(RateConfig::default().with_allow_half(true).with_value(2.5));
//! let node = rate.render();
//! assert_eq!(node.class, "understory-rate");
//! let fills: Vec<_> = node.stars.iter().map(|star| star.fill).collect();
//! assert_eq!(
//!     fills,
//!     [StarFill::Full, StarFill::Full, StarFill::Half, StarFill::Zero, StarFill::Zero]
//! );
//! assert!(matches!(node.stars[0].content, StarContent::Glyph(_)));
//! ```

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::config::Character;
use crate::rate::Rate;

/// Accessibility role of a rendered node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// The star row.
    RadioGroup,
    /// One star.
    Radio,
}

impl Role {
    /// The ARIA role name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RadioGroup => "radiogroup",
            Self::Radio => "radio",
        }
    }
}

/// How much of a star is filled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StarFill {
    /// Empty.
    Zero,
    /// Left half filled (right half in right-to-left layouts).
    Half,
    /// Completely filled.
    Full,
}

/// One rendered star.
#[derive(Clone, Debug, PartialEq)]
pub struct StarNode<C> {
    /// Star index, `0..count`.
    pub index: usize,
    /// Always [`Role::Radio`].
    pub role: Role,
    /// Fill level for the displayed value.
    pub fill: StarFill,
    /// This star carries the focus ring.
    pub focused: bool,
    /// `aria-checked`: the displayed value reaches into this star.
    pub checked: bool,
    /// `aria-posinset`, 1-based.
    pub pos_in_set: usize,
    /// `aria-setsize`.
    pub set_size: usize,
    /// `-1` while disabled, `0` otherwise.
    pub tab_index: i32,
    /// Space-separated class names.
    pub class: String,
    /// Glyph, possibly decorated.
    pub content: C,
}

/// The rendered star row.
#[derive(Clone, Debug, PartialEq)]
pub struct RateNode<C> {
    /// Always [`Role::RadioGroup`].
    pub role: Role,
    /// Space-separated class names, with disabled and rtl modifiers.
    pub class: String,
    /// `-1` while disabled, the configured tab index otherwise.
    pub tab_index: i32,
    /// Whether pointer, key, and focus handlers should be attached.
    pub listens_for_input: bool,
    /// The stars, in index order.
    pub stars: Vec<StarNode<C>>,
}

/// Produces the content of each star.
///
/// `glyph` builds the bare glyph; `decorate` may wrap it, for example in a
/// tooltip. The default `decorate` leaves the glyph untouched.
pub trait StarRenderer {
    /// Renderable produced per star.
    type Output;

    /// The glyph for star `index`.
    fn glyph(&self, index: usize) -> Self::Output;

    /// Wrap the glyph of star `index`. `tooltip` is that star's configured text.
    fn decorate(&self, node: Self::Output, index: usize, tooltip: Option<&str>) -> Self::Output {
        let _ = (index, tooltip);
        node
    }
}

/// Content built by [`DefaultRenderer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StarContent {
    /// A bare glyph.
    Glyph(Character),
    /// A glyph wrapped in a tooltip.
    Tooltip {
        /// Tooltip text.
        title: String,
        /// Wrapped content.
        content: Box<StarContent>,
    },
}

/// Renders the configured [`Character`] and wraps it in a tooltip when one is configured.
#[derive(Clone, Debug)]
pub struct DefaultRenderer<'a> {
    character: &'a Character,
}

impl<'a> DefaultRenderer<'a> {
    /// Creates a renderer for `character`.
    #[must_use]
    pub fn new(character: &'a Character) -> Self {
        Self { character }
    }
}

impl StarRenderer for DefaultRenderer<'_> {
    type Output = StarContent;

    fn glyph(&self, _index: usize) -> StarContent {
        StarContent::Glyph(self.character.clone())
    }

    fn decorate(&self, node: StarContent, _index: usize, tooltip: Option<&str>) -> StarContent {
        match tooltip {
            Some(title) => StarContent::Tooltip {
                title: String::from(title),
                content: Box::new(node),
            },
            None => node,
        }
    }
}

/// Fill and focus ring of star `index` for a displayed value.
#[must_use]
pub fn star_state(index: usize, displayed: f64, allow_half: bool, focused: bool) -> (StarFill, bool) {
    let star_value = (index + 1) as f64;
    if displayed == 0.0 && index == 0 && focused {
        (StarFill::Zero, true)
    } else if allow_half && displayed + 0.5 >= star_value && displayed < star_value {
        (StarFill::Half, focused)
    } else if star_value <= displayed {
        (StarFill::Full, star_value == displayed && focused)
    } else {
        (StarFill::Zero, star_value == displayed && focused)
    }
}

fn star_class(prefix: &str, index: usize, displayed: f64, fill: StarFill, focused: bool) -> String {
    let base = format!("{prefix}-star");
    let mut class = base.clone();
    // The focus ring on an empty first star replaces the fill modifier.
    let focus_only = displayed == 0.0 && index == 0 && focused;
    if !focus_only {
        match fill {
            StarFill::Half => class.push_str(&format!(" {base}-half {base}-active")),
            StarFill::Full => class.push_str(&format!(" {base}-full")),
            StarFill::Zero => class.push_str(&format!(" {base}-zero")),
        }
    }
    if focused {
        class.push_str(&format!(" {base}-focused"));
    }
    class
}

impl<H> Rate<H> {
    /// Render with the configured glyph and tooltips.
    #[must_use]
    pub fn render(&self) -> RateNode<StarContent> {
        self.render_with(&DefaultRenderer::new(&self.config().character))
    }

    /// Render with a custom glyph/decoration renderer.
    pub fn render_with<R: StarRenderer>(&self, renderer: &R) -> RateNode<R::Output> {
        let config = self.config();
        let disabled = config.disabled;
        let displayed = self.displayed_value();
        let focused = self.is_focused();
        let tooltips = config.tooltips.as_deref();

        let stars = (0..config.count)
            .map(|index| {
                let (fill, star_focused) = star_state(index, displayed, config.allow_half, focused);
                let tooltip = tooltips
                    .and_then(|tips| tips.get(index))
                    .map(String::as_str);
                let content = renderer.decorate(renderer.glyph(index), index, tooltip);
                StarNode {
                    index,
                    role: Role::Radio,
                    fill,
                    focused: star_focused,
                    checked: displayed > index as f64,
                    pos_in_set: index + 1,
                    set_size: config.count,
                    tab_index: if disabled { -1 } else { 0 },
                    class: star_class(&config.prefix, index, displayed, fill, star_focused),
                    content,
                }
            })
            .collect();

        let mut class = config.prefix.clone();
        if disabled {
            class.push_str(&format!(" {}-disabled", config.prefix));
        }
        if config.direction.is_rtl() {
            class.push_str(&format!(" {}-rtl", config.prefix));
        }

        RateNode {
            role: Role::RadioGroup,
            class,
            tab_index: if disabled { -1 } else { config.tab_index },
            listens_for_input: !disabled,
            stars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Direction, RateConfig};
    use alloc::vec;
    use kurbo::Rect;

    fn fills(node: &RateNode<StarContent>) -> Vec<StarFill> {
        node.stars.iter().map(|star| star.fill).collect()
    }

    #[test]
    fn root_node_roles_and_modifiers() {
        let rate: Rate = Rate::new(RateConfig::default().with_tab_index(3));
        let node = rate.render();
        assert_eq!(node.role, Role::RadioGroup);
        assert_eq!(node.role.as_str(), "radiogroup");
        assert_eq!(node.class, "understory-rate");
        assert_eq!(node.tab_index, 3);
        assert!(node.listens_for_input);
        assert_eq!(node.stars.len(), 5);

        let rate: Rate = Rate::new(
            RateConfig::default()
                .with_disabled(true)
                .with_direction(Direction::Rtl)
                .with_prefix("ant-rate"),
        );
        let node = rate.render();
        assert_eq!(node.class, "ant-rate ant-rate-disabled ant-rate-rtl");
        assert_eq!(node.tab_index, -1);
        assert!(!node.listens_for_input);
        assert!(node.stars.iter().all(|star| star.tab_index == -1));
    }

    #[test]
    fn star_aria_attributes() {
        let rate: Rate = Rate::new(RateConfig::default().with_value(2.0));
        let node = rate.render();
        let star = &node.stars[1];
        assert_eq!(star.role, Role::Radio);
        assert!(star.checked);
        assert_eq!(star.pos_in_set, 2);
        assert_eq!(star.set_size, 5);
        assert!(!node.stars[2].checked);
    }

    #[test]
    fn whole_and_half_fills() {
        let rate: Rate = Rate::new(RateConfig::default().with_value(3.0));
        assert_eq!(
            fills(&rate.render()),
            vec![
                StarFill::Full,
                StarFill::Full,
                StarFill::Full,
                StarFill::Zero,
                StarFill::Zero
            ]
        );
        let rate: Rate = Rate::new(RateConfig::default().with_allow_half(true).with_value(0.5));
        let node = rate.render();
        assert_eq!(node.stars[0].fill, StarFill::Half);
        assert_eq!(
            node.stars[0].class,
            "understory-rate-star understory-rate-star-half understory-rate-star-active"
        );
        assert_eq!(
            node.stars[1].class,
            "understory-rate-star understory-rate-star-zero"
        );
    }

    #[test]
    fn hover_value_drives_fill() {
        let mut rate: Rate = Rate::new(RateConfig::default().with_value(1.0));
        for index in 0..5 {
            rate.stars_mut()
                .set(index, Rect::new(index as f64 * 10.0, 0.0, index as f64 * 10.0 + 10.0, 10.0));
        }
        let _ = rate.on_hover(3, 38.0);
        assert_eq!(
            fills(&rate.render()),
            vec![
                StarFill::Full,
                StarFill::Full,
                StarFill::Full,
                StarFill::Full,
                StarFill::Zero
            ]
        );
    }

    #[test]
    fn focus_ring_placement() {
        let mut rate: Rate = Rate::new(RateConfig::default());
        let _ = rate.on_focus();
        let node = rate.render();
        assert!(node.stars[0].focused);
        assert_eq!(
            node.stars[0].class,
            "understory-rate-star understory-rate-star-focused"
        );
        assert!(!node.stars[1].focused);

        rate.set_value(2.0);
        let node = rate.render();
        assert!(!node.stars[0].focused);
        assert!(node.stars[1].focused);
        assert_eq!(
            node.stars[1].class,
            "understory-rate-star understory-rate-star-full understory-rate-star-focused"
        );
    }

    #[test]
    fn tooltips_wrap_glyphs() {
        let rate: Rate = Rate::new(
            RateConfig::default()
                .with_count(2)
                .with_tooltips(["bad", "good"])
                .with_character(Character::Text("A".into())),
        );
        let node = rate.render();
        assert_eq!(
            node.stars[1].content,
            StarContent::Tooltip {
                title: "good".into(),
                content: Box::new(StarContent::Glyph(Character::Text("A".into()))),
            }
        );
    }

    struct Numbered;

    impl StarRenderer for Numbered {
        type Output = String;

        fn glyph(&self, index: usize) -> String {
            format!("{}", index + 1)
        }
    }

    #[test]
    fn custom_renderer_is_untouched_by_default() {
        let rate: Rate = Rate::new(RateConfig::default().with_count(3).with_tooltips(["a", "b", "c"]));
        let node = rate.render_with(&Numbered);
        let glyphs: Vec<_> = node.stars.iter().map(|star| star.content.as_str()).collect();
        assert_eq!(glyphs, ["1", "2", "3"]);
    }
}
