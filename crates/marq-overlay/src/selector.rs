//! The selector facade: one selection, one detected scale.
//!
//! An [`AreaSelector`] owns the constrained [`Selection`] for a single
//! host element and the display↔natural [`Scale`] detected when it was
//! built. Pointer wiring and rendering are external collaborators: they
//! write through [`set_selection`](AreaSelector::set_selection) or the
//! live view, and read [`selection`](AreaSelector::selection) or
//! [`layout`](AreaSelector::layout) after each interaction.

use crate::layout::{OverlayLayout, OverlayOptions};
use marq_core::{HostMetrics, Scale, Selection, SelectionOptions};
use serde::{Deserialize, Serialize};

/// Construction options for an [`AreaSelector`]: the initial selection
/// geometry and constraints, plus the overlay's geometric parameters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorOptions {
    pub selection: SelectionOptions,
    pub overlay: OverlayOptions,
}

/// An area selector bound to one host element.
#[derive(Debug, Clone)]
pub struct AreaSelector {
    selection: Selection,
    scale: Scale,
    overlay: OverlayOptions,
}

impl AreaSelector {
    /// Build a selector. The scale is detected from `host` once and
    /// stays fixed for the selector's lifetime.
    pub fn new(options: SelectorOptions, host: &HostMetrics) -> Self {
        Self {
            selection: Selection::new(options.selection),
            scale: Scale::detect(host),
            overlay: options.overlay,
        }
    }

    /// The detected display↔natural scale.
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// The selection mapped into the natural coordinate space: a fresh,
    /// independently owned copy on every call. Mutating it never touches
    /// the selector's state.
    pub fn selection(&self) -> Selection {
        self.selection.scaled_axes(self.scale)
    }

    /// Live view of the stored, unscaled selection. This aliases
    /// internal state and is not snapshot-safe: the values change under
    /// later mutation.
    pub fn unscaled_selection(&self) -> &Selection {
        &self.selection
    }

    /// Mutable live view. Drag wiring drives individual edge mutators
    /// (`set_left`, `set_width`, ...) through this.
    pub fn unscaled_selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Replace the selection from a two-corner rectangle.
    ///
    /// Coordinates arrive in display space and are converted through the
    /// detected scale before being written through the model's mutators
    /// in field order. `unscaled` skips the conversion for callers
    /// already working in natural space.
    pub fn set_selection(&mut self, left: f32, top: f32, right: f32, bottom: f32, unscaled: bool) {
        let scale = if unscaled { Scale::UNIT } else { self.scale };
        let width = right - left;
        let height = bottom - top;

        log::trace!(
            "set_selection ({left}, {top})-({right}, {bottom}) scale=({}, {})",
            scale.x,
            scale.y
        );

        self.selection.set_left(left * scale.x);
        self.selection.set_top(top * scale.y);
        self.selection.set_width(width * scale.x);
        self.selection.set_height(height * scale.y);
    }

    /// The resolved overlay geometry for the current selection state.
    pub fn layout(&self) -> OverlayLayout {
        OverlayLayout::compute(&self.selection, &self.overlay)
    }
}
