//! The rectangle constraint model.
//!
//! A [`Selection`] keeps left, top, width, and height mutually consistent
//! under independent mutation of any single field. Constraints are applied
//! inside the mutators, in a fixed order that is part of the contract:
//! edge limit, then size floor, then size ceiling, then aspect derivation,
//! then the opposite axis's edge limit. Swapping steps changes results
//! when constraints conflict, so the order here is normative.
//!
//! Known inconsistency: when an aspect-derived dimension is clamped by the
//! *other* axis's edge limit (`maximums.x` / `maximums.y`), the resulting
//! rectangle no longer satisfies the aspect ratio exactly. The clamp wins
//! and the first dimension is not re-derived.

use crate::options::{Bounds, Maximums, Minimums, Point, SelectionOptions};
use crate::scale::Scale;
use serde::{Deserialize, Serialize};

/// Min/max clamp without an ordering requirement on the range: when
/// `min > max`, `max` wins. Never rejects, never panics.
fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// A constrained, mutable selection rectangle.
///
/// Fields are private so every write flows through the cascade mutators;
/// getters return the stored, post-constraint values. Deserializing goes
/// through [`SelectionOptions`], so constraints hold for decoded values
/// too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SelectionOptions")]
pub struct Selection {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    aspect: Option<f32>,
    bounds: Option<Bounds>,
    minimums: Option<Minimums>,
    maximums: Option<Maximums>,
}

impl Selection {
    /// Build a selection from options.
    ///
    /// The initial geometry flows through the mutators in field order
    /// (left, top, width, height), so constraints hold from birth. With
    /// an aspect ratio set, the height write is last and its derived
    /// width wins over the width option.
    pub fn new(options: SelectionOptions) -> Self {
        let mut selection = Self {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            aspect: options.aspect,
            bounds: options.bounds,
            minimums: options.minimums,
            maximums: options.maximums,
        };
        selection.set_left(options.left);
        selection.set_top(options.top);
        selection.set_width(options.width);
        selection.set_height(options.height);
        selection
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// The preserved width/height ratio, when one is set.
    pub fn aspect(&self) -> Option<f32> {
        self.aspect
    }

    /// The position clamping range, when one is set.
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    // ─── Cascade mutators ────────────────────────────────────────────────

    /// Set the left edge, clamped into `[bounds.min.x, bounds.max.x]`
    /// when bounds are present. No other field changes.
    pub fn set_left(&mut self, value: f32) {
        self.left = match self.bounds {
            Some(b) => clamp(value, b.min.x, b.max.x),
            None => value,
        };
    }

    /// Set the top edge, clamped into `[bounds.min.y, bounds.max.y]`
    /// when bounds are present. No other field changes.
    pub fn set_top(&mut self, value: f32) {
        self.top = match self.bounds {
            Some(b) => clamp(value, b.min.y, b.max.y),
            None => value,
        };
    }

    /// Set the width, then run the cascade: shrink against `maximums.x`,
    /// raise to `minimums.width`, cap to `maximums.width`, and finally
    /// derive `height = width / aspect` when an aspect ratio is set
    /// (itself shrunk against `maximums.y`, see the module docs for the
    /// inconsistency this can introduce).
    pub fn set_width(&mut self, value: f32) {
        self.width = value;

        if let Some(max_x) = self.maximums.and_then(|m| m.x)
            && self.left + self.width > max_x
        {
            self.width = max_x - self.left;
        }

        if let Some(min_width) = self.minimums.and_then(|m| m.width)
            && self.width < min_width
        {
            self.width = min_width;
        }

        if let Some(max_width) = self.maximums.and_then(|m| m.width)
            && self.width > max_width
        {
            self.width = max_width;
        }

        if let Some(aspect) = self.aspect {
            self.height = self.width / aspect;
            if let Some(max_y) = self.maximums.and_then(|m| m.y)
                && self.top + self.height > max_y
            {
                // Last-applied constraint wins; width stays as stored.
                self.height = max_y - self.top;
            }
        }
    }

    /// Set the height; the mirror image of [`set_width`](Self::set_width):
    /// shrink against `maximums.y`, raise to `minimums.height`, cap to
    /// `maximums.height`, then derive `width = height * aspect` clamped
    /// against `maximums.x`.
    pub fn set_height(&mut self, value: f32) {
        self.height = value;

        if let Some(max_y) = self.maximums.and_then(|m| m.y)
            && self.top + self.height > max_y
        {
            self.height = max_y - self.top;
        }

        if let Some(min_height) = self.minimums.and_then(|m| m.height)
            && self.height < min_height
        {
            self.height = min_height;
        }

        if let Some(max_height) = self.maximums.and_then(|m| m.height)
            && self.height > max_height
        {
            self.height = max_height;
        }

        if let Some(aspect) = self.aspect {
            self.width = self.height * aspect;
            if let Some(max_x) = self.maximums.and_then(|m| m.x)
                && self.left + self.width > max_x
            {
                self.width = max_x - self.left;
            }
        }
    }

    // ─── Scaling ─────────────────────────────────────────────────────────

    /// A new selection with position, extents, and bounds multiplied by
    /// `factor`. The receiver is untouched; the copy keeps the aspect
    /// ratio but carries no size constraints — it is a read-out value,
    /// not a constraint carrier.
    #[must_use]
    pub fn scaled(&self, factor: f32) -> Selection {
        self.scaled_axes(Scale {
            x: factor,
            y: factor,
        })
    }

    /// Per-axis variant of [`scaled`](Self::scaled): x-quantities are
    /// multiplied by `scale.x`, y-quantities by `scale.y`.
    #[must_use]
    pub fn scaled_axes(&self, scale: Scale) -> Selection {
        Selection {
            left: self.left * scale.x,
            top: self.top * scale.y,
            width: self.width * scale.x,
            height: self.height * scale.y,
            aspect: self.aspect,
            bounds: self.bounds.map(|b| Bounds {
                min: Point::new(b.min.x * scale.x, b.min.y * scale.y),
                max: Point::new(b.max.x * scale.x, b.max.y * scale.y),
            }),
            minimums: None,
            maximums: None,
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(SelectionOptions::default())
    }
}

impl From<SelectionOptions> for Selection {
    fn from(options: SelectionOptions) -> Self {
        Self::new(options)
    }
}
