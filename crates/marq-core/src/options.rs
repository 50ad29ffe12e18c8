//! Option types for constructing a [`Selection`](crate::Selection).
//!
//! Every constraint is an `Option` — absence means "no constraint",
//! never a sentinel value.

use serde::{Deserialize, Serialize};

// ─── Points & Bounds ─────────────────────────────────────────────────────

/// A point in overlay-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Clamping range for the selection's position. `left` is kept within
/// `[min.x, max.x]` and `top` within `[min.y, max.y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Bounds spanning from the origin to (`width`, `height`).
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self {
            min: Point::new(0.0, 0.0),
            max: Point::new(width, height),
        }
    }
}

// ─── Size constraints ────────────────────────────────────────────────────

/// Extent floors. A `width` below `minimums.width` is raised to it,
/// likewise for `height`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Minimums {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

/// Extent ceilings and absolute edge limits.
///
/// `x` and `y` are absolute right/bottom limits: the selection's right
/// edge is kept at or left of `x`, its bottom edge at or above `y`.
/// `width` and `height` cap the extents directly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Maximums {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

// ─── Construction options ────────────────────────────────────────────────

/// Construction options for a [`Selection`](crate::Selection).
///
/// Initial geometry defaults to a zero rectangle at the origin; all
/// constraints default to absent. The constraint parameters are fixed
/// for the lifetime of the selection they construct.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionOptions {
    /// Width/height ratio to preserve across resizes.
    pub aspect: Option<f32>,
    /// Position clamping range.
    pub bounds: Option<Bounds>,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// Extent floors.
    pub minimums: Option<Minimums>,
    /// Extent ceilings and edge limits.
    pub maximums: Option<Maximums>,
}
