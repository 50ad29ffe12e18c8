//! Marq overlay: the selector facade and overlay layout geometry.
//!
//! This crate sits between `marq-core` and a host UI layer. The host
//! wires pointer events and drawing however it likes; this crate owns
//! the selection state per host element ([`AreaSelector`]) and resolves
//! the geometry the host needs to draw: the area frame, the mask frame,
//! and the eight resize-handle positions ([`OverlayLayout`]).

pub mod layout;
pub mod selector;

pub use layout::{
    Frame, Handle, HandleAnchor, HorizontalEdge, OverlayLayout, OverlayOptions, VerticalEdge,
};
pub use selector::{AreaSelector, SelectorOptions};
