// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry resolver: map a pointer position over a star to a rating value.
//!
//! ## Usage
//!
//! 1) During layout or mount, record one measurable handle per star in a
//!    [`StarRefs`] collection (any type implementing [`Measure`], or plain
//!    [`Rect`]s).
//! 2) On each pointer event over star `i`, call [`resolve_value`] with the
//!    pointer's absolute x coordinate and the star's *current* bounds.
//!
//! Bounds are queried fresh for every event and never cached, so the result
//! always reflects the current layout.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use understory_rate::Direction;
//! use understory_rate::geometry::resolve_value;
//!
//! // Third star, 20px wide, starting at x = 40.
//! let bounds = Rect::new(40.0, 0.0, 60.0, 20.0);
//! assert_eq!(resolve_value(2, 45.0, Some(bounds), Direction::Ltr, true), 2.5);
//! assert_eq!(resolve_value(2, 55.0, Some(bounds), Direction::Ltr, true), 3.0);
//! assert_eq!(resolve_value(2, 45.0, Some(bounds), Direction::Rtl, true), 3.0);
//! ```

use kurbo::Rect;
use smallvec::SmallVec;

use crate::config::Direction;

/// A handle whose on-screen bounds can be measured.
///
/// This is the read-only view the resolver needs of a star element. UI
/// bindings implement it for whatever reference type their toolkit hands out
/// (a DOM node wrapper, a box-tree id paired with its tree, and so on).
pub trait Measure {
    /// Returns the element's current bounding box in the same coordinate
    /// space as the pointer positions fed to the widget.
    fn bounds(&self) -> Rect;
}

impl Measure for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

impl<T: Measure + ?Sized> Measure for &T {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
}

/// Resolve the rating value a pointer at `pointer_x` represents over star `index`.
///
/// The base value is `index + 1`. Without half stars that is the result.
/// With half stars the pointer's offset into the star is compared against half
/// its width using strict inequalities, so the exact midpoint always resolves
/// to the whole-star value:
///
/// - [`Direction::Ltr`]: `offset < width / 2` yields `index + 0.5`.
/// - [`Direction::Rtl`]: `offset > width / 2` yields `index + 0.5`.
///
/// Missing bounds, zero-width or non-finite geometry is treated as an offset
/// of zero into a zero-width star, and a non-finite pointer position never
/// satisfies either comparison; both resolve to the whole-star value.
#[must_use]
pub fn resolve_value(
    index: usize,
    pointer_x: f64,
    bounds: Option<Rect>,
    direction: Direction,
    allow_half: bool,
) -> f64 {
    let base = (index + 1) as f64;
    if !allow_half {
        return base;
    }
    let (offset, width) = match bounds {
        Some(rect) if rect.width() > 0.0 && rect.width().is_finite() && rect.x0.is_finite() => {
            (pointer_x - rect.x0, rect.width())
        }
        _ => (0.0, 0.0),
    };
    let half = width / 2.0;
    let lower_half = match direction {
        Direction::Rtl => offset > half,
        Direction::Ltr => offset < half,
    };
    if lower_half { base - 0.5 } else { base }
}

/// Ordered per-star handles, one slot per star index.
///
/// Slots are filled by the host's binding layer as stars mount and emptied as
/// they unmount. The widget only reads them.
#[derive(Clone, Debug)]
pub struct StarRefs<H> {
    slots: SmallVec<[Option<H>; 8]>,
}

impl<H> Default for StarRefs<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> StarRefs<H> {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: SmallVec::new(),
        }
    }

    /// Stores the handle for star `index`, replacing any previous one.
    pub fn set(&mut self, index: usize, handle: H) {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index] = Some(handle);
    }

    /// Removes and returns the handle for star `index`.
    pub fn take(&mut self, index: usize) -> Option<H> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Returns the handle for star `index`, if one is mounted.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&H> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Drops all slots at or beyond `count`.
    pub fn truncate(&mut self, count: usize) {
        self.slots.truncate(count);
    }

    /// Number of mounted handles.
    #[must_use]
    pub fn mounted(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Removes every handle.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<H: Measure> StarRefs<H> {
    /// Measures star `index` now.
    #[must_use]
    pub fn bounds(&self, index: usize) -> Option<Rect> {
        self.get(index).map(Measure::bounds)
    }
}
