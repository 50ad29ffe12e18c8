//! Display ↔ natural scale detection.
//!
//! An overlay sits on a host element that may be displayed at a size
//! other than its natural one (an image rendered smaller than its pixel
//! dimensions, typically). [`Scale`] is the per-axis ratio between the
//! two spaces, detected once from [`HostMetrics`] at selector build time.

use serde::{Deserialize, Serialize};

/// Per-axis ratio between the host element's displayed size and its
/// natural (unscaled) size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
}

impl Scale {
    /// The identity scale: displayed and natural spaces coincide.
    pub const UNIT: Scale = Scale { x: 1.0, y: 1.0 };

    /// Detect the per-axis scale from host metrics.
    ///
    /// An axis whose natural dimension is unknown or not positive falls
    /// back to 1.0, so hosts without an intrinsic size (anything that is
    /// not an image) behave as if unscaled.
    pub fn detect(host: &HostMetrics) -> Scale {
        let x = match host.natural_width {
            Some(natural) if natural > 0.0 => host.display_width / natural,
            _ => 1.0,
        };
        let y = match host.natural_height {
            Some(natural) if natural > 0.0 => host.display_height / natural,
            _ => 1.0,
        };
        log::debug!("detected scale x={x} y={y}");
        Scale { x, y }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::UNIT
    }
}

/// What the host layer reports about the element under the overlay.
///
/// Natural sizes are `None` when the element has no intrinsic size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HostMetrics {
    pub display_width: f32,
    pub display_height: f32,
    pub natural_width: Option<f32>,
    pub natural_height: Option<f32>,
}
