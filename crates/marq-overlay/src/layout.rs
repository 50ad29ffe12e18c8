//! Overlay layout: handle placement and mask framing.
//!
//! Pure geometry for whatever rendering layer draws the overlay: the
//! selection area frame, the dimming mask frame around it, and the
//! center positions of the eight compass resize handles. No pointer
//! handling and no styling lives here.

use marq_core::Selection;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ─── Options ─────────────────────────────────────────────────────────────

/// Geometric parameters of the overlay chrome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayOptions {
    /// Side length of each square resize handle, in overlay pixels.
    pub handle_size: f32,
    /// Width of the border drawn around the selection area. Handle
    /// centers and the mask frame are offset outward by this amount.
    pub border_width: f32,
    /// Whether a mask frame is produced around the selection.
    pub mask: bool,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            handle_size: 4.0,
            border_width: 1.0,
            mask: true,
        }
    }
}

// ─── Frames ──────────────────────────────────────────────────────────────

/// A plain output rectangle in overlay-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }

    /// This frame grown outward by `amount` on every side.
    #[must_use]
    pub fn inflated(&self, amount: f32) -> Frame {
        Frame {
            left: self.left - amount,
            top: self.top - amount,
            width: self.width + 2.0 * amount,
            height: self.height + 2.0 * amount,
        }
    }
}

// ─── Handles ─────────────────────────────────────────────────────────────

/// Which horizontal edge a resize handle moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalEdge {
    Left,
    Right,
}

/// Which vertical edge a resize handle moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

/// The eight compass resize handles on the selection frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    NorthWest,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
}

impl Handle {
    /// All handles in paint order (clockwise from the top-left corner).
    pub const ALL: [Handle; 8] = [
        Handle::NorthWest,
        Handle::North,
        Handle::NorthEast,
        Handle::East,
        Handle::SouthEast,
        Handle::South,
        Handle::SouthWest,
        Handle::West,
    ];

    /// The edges this handle moves when dragged. Corner handles move one
    /// edge per axis, mid-edge handles move a single edge. This is the
    /// contract drag wiring needs to route pointer deltas into the
    /// selection's edge mutators.
    pub fn edges(&self) -> (Option<HorizontalEdge>, Option<VerticalEdge>) {
        match self {
            Handle::NorthWest => (Some(HorizontalEdge::Left), Some(VerticalEdge::Top)),
            Handle::North => (None, Some(VerticalEdge::Top)),
            Handle::NorthEast => (Some(HorizontalEdge::Right), Some(VerticalEdge::Top)),
            Handle::East => (Some(HorizontalEdge::Right), None),
            Handle::SouthEast => (Some(HorizontalEdge::Right), Some(VerticalEdge::Bottom)),
            Handle::South => (None, Some(VerticalEdge::Bottom)),
            Handle::SouthWest => (Some(HorizontalEdge::Left), Some(VerticalEdge::Bottom)),
            Handle::West => (Some(HorizontalEdge::Left), None),
        }
    }

    /// Center position of this handle on `area`, given the overlay's
    /// border width. Corner handles sit on the border's outer corners;
    /// mid-edge handles share the same outward offset on both axes, so
    /// they sit `border_width` short of true center along their edge.
    pub fn anchor(&self, area: &Frame, border_width: f32) -> (f32, f32) {
        let mid_x = area.left + area.width / 2.0 - border_width;
        let mid_y = area.top + area.height / 2.0 - border_width;
        let out_left = area.left - border_width;
        let out_top = area.top - border_width;
        let out_right = area.right() + border_width;
        let out_bottom = area.bottom() + border_width;

        match self {
            Handle::NorthWest => (out_left, out_top),
            Handle::North => (mid_x, out_top),
            Handle::NorthEast => (out_right, out_top),
            Handle::East => (out_right, mid_y),
            Handle::SouthEast => (out_right, out_bottom),
            Handle::South => (mid_x, out_bottom),
            Handle::SouthWest => (out_left, out_bottom),
            Handle::West => (out_left, mid_y),
        }
    }
}

/// A handle together with its resolved center position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleAnchor {
    pub handle: Handle,
    pub x: f32,
    pub y: f32,
}

impl HandleAnchor {
    /// The square frame this handle occupies.
    pub fn frame(&self, handle_size: f32) -> Frame {
        Frame {
            left: self.x - handle_size / 2.0,
            top: self.y - handle_size / 2.0,
            width: handle_size,
            height: handle_size,
        }
    }
}

// ─── Layout ──────────────────────────────────────────────────────────────

/// The resolved overlay geometry for one selection state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayLayout {
    /// The selection area frame itself.
    pub area: Frame,
    /// Mask frame around the area, inflated by the border width. `None`
    /// when the overlay is configured without a mask.
    pub mask: Option<Frame>,
    /// Resolved handle centers, in paint order.
    pub handles: SmallVec<[HandleAnchor; 8]>,
    options: OverlayOptions,
}

impl OverlayLayout {
    /// Resolve the overlay geometry for `selection`.
    pub fn compute(selection: &Selection, options: &OverlayOptions) -> Self {
        let area = Frame {
            left: selection.left(),
            top: selection.top(),
            width: selection.width(),
            height: selection.height(),
        };

        let mask = options.mask.then(|| area.inflated(options.border_width));

        let handles = Handle::ALL
            .iter()
            .map(|handle| {
                let (x, y) = handle.anchor(&area, options.border_width);
                HandleAnchor {
                    handle: *handle,
                    x,
                    y,
                }
            })
            .collect();

        log::trace!(
            "overlay layout area=({}, {}) {}x{}",
            area.left,
            area.top,
            area.width,
            area.height
        );

        Self {
            area,
            mask,
            handles,
            options: *options,
        }
    }

    /// The topmost handle whose square contains (`x`, `y`), checked in
    /// reverse paint order so later-painted handles win on overlap.
    pub fn handle_at(&self, x: f32, y: f32) -> Option<Handle> {
        self.handles
            .iter()
            .rev()
            .find(|anchor| anchor.frame(self.options.handle_size).contains(x, y))
            .map(|anchor| anchor.handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marq_core::SelectionOptions;
    use pretty_assertions::assert_eq;

    fn selection_10_20_100_50() -> Selection {
        Selection::new(SelectionOptions {
            left: 10.0,
            top: 20.0,
            width: 100.0,
            height: 50.0,
            ..Default::default()
        })
    }

    #[test]
    fn area_frame_mirrors_selection() {
        let layout = OverlayLayout::compute(&selection_10_20_100_50(), &OverlayOptions::default());
        assert_eq!(
            layout.area,
            Frame {
                left: 10.0,
                top: 20.0,
                width: 100.0,
                height: 50.0
            }
        );
    }

    #[test]
    fn mask_frame_inflated_by_border_width() {
        let layout = OverlayLayout::compute(&selection_10_20_100_50(), &OverlayOptions::default());
        assert_eq!(
            layout.mask,
            Some(Frame {
                left: 9.0,
                top: 19.0,
                width: 102.0,
                height: 52.0
            })
        );
    }

    #[test]
    fn mask_disabled_produces_none() {
        let options = OverlayOptions {
            mask: false,
            ..Default::default()
        };
        let layout = OverlayLayout::compute(&selection_10_20_100_50(), &options);
        assert_eq!(layout.mask, None);
    }

    #[test]
    fn corner_handles_sit_on_outer_border_corners() {
        let layout = OverlayLayout::compute(&selection_10_20_100_50(), &OverlayOptions::default());
        let anchor = |handle: Handle| {
            layout
                .handles
                .iter()
                .find(|a| a.handle == handle)
                .map(|a| (a.x, a.y))
                .unwrap()
        };
        assert_eq!(anchor(Handle::NorthWest), (9.0, 19.0));
        assert_eq!(anchor(Handle::NorthEast), (111.0, 19.0));
        assert_eq!(anchor(Handle::SouthEast), (111.0, 71.0));
        assert_eq!(anchor(Handle::SouthWest), (9.0, 71.0));
    }

    #[test]
    fn mid_edge_handles_offset_by_border_width() {
        let layout = OverlayLayout::compute(&selection_10_20_100_50(), &OverlayOptions::default());
        let north = layout
            .handles
            .iter()
            .find(|a| a.handle == Handle::North)
            .unwrap();
        // Midpoint 60 shifted in by the 1px border offset.
        assert_eq!((north.x, north.y), (59.0, 19.0));

        let west = layout
            .handles
            .iter()
            .find(|a| a.handle == Handle::West)
            .unwrap();
        assert_eq!((west.x, west.y), (9.0, 44.0));
    }

    #[test]
    fn edges_route_to_the_expected_mutators() {
        assert_eq!(
            Handle::SouthEast.edges(),
            (Some(HorizontalEdge::Right), Some(VerticalEdge::Bottom))
        );
        assert_eq!(Handle::North.edges(), (None, Some(VerticalEdge::Top)));
        assert_eq!(Handle::West.edges(), (Some(HorizontalEdge::Left), None));
    }

    #[test]
    fn handle_hit_testing_checks_reverse_paint_order() {
        let options = OverlayOptions {
            handle_size: 8.0,
            ..Default::default()
        };
        let layout = OverlayLayout::compute(&selection_10_20_100_50(), &options);

        assert_eq!(layout.handle_at(9.0, 19.0), Some(Handle::NorthWest));
        assert_eq!(layout.handle_at(111.0, 71.0), Some(Handle::SouthEast));
        // Center of the area is nowhere near a handle.
        assert_eq!(layout.handle_at(60.0, 45.0), None);
    }
}
