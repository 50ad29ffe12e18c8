//! Marq core: the geometry behind a rectangular area-selection overlay.
//!
//! The centerpiece is [`Selection`], a rectangle whose four edges stay
//! mutually consistent under independent mutation of any one of them.
//! Optional constraints (bounds, size floors/ceilings, aspect ratio) are
//! applied by the mutators themselves, so a `Selection` is always in a
//! consistent state and never needs a separate normalization pass.
//!
//! [`Scale`] maps between an element's displayed pixel space and its
//! natural (unscaled) pixel space, detected once from [`HostMetrics`].

pub mod options;
pub mod scale;
pub mod selection;

pub use options::{Bounds, Maximums, Minimums, Point, SelectionOptions};
pub use scale::{HostMetrics, Scale};
pub use selection::Selection;
