//! Anchored overlay placement.
//!
//! Callers describe the anchor, the overlay extent and the viewport as an
//! [`OverlayProblem`]; [`solve`] returns the best [`OverlaySolution`] for
//! positioning tooltips, dropdowns and similar floating surfaces.

mod core;

pub use core::{
    DEFAULT_ALIGNS, DEFAULT_SIDES, OverlayAlign, OverlayArrow, OverlayPlacement, OverlayProblem,
    OverlaySide, OverlaySolution, solve,
};
