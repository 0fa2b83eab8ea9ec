//! Typed styling DSL compiling attribute lists into deterministic CSS, plus an
//! anchored overlay placement solver for tooltips and dropdowns.
//!
//! Styling flows one way: [`Attribute`] values wrap [`Rule`] fragments,
//! [`class`] merges and normalizes them into a content-addressed [`Class`],
//! and [`stylesheet`] renders any set of classes into sorted, deduplicated CSS.
//! The overlay solver is independent: [`solve`] maps an [`OverlayProblem`] to
//! an [`OverlaySolution`] in pixel coordinates.

pub mod attrs;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod metrics;
pub mod overlay;
pub mod registry;
pub mod render;
pub mod style;
pub mod values;

pub use error::{Result, StyleError};
pub use geometry::{Point, Rect, Size};
pub use logging::{LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult};
pub use metrics::{MetricSnapshot, StyleMetrics};
pub use overlay::{
    OverlayAlign, OverlayArrow, OverlayPlacement, OverlayProblem, OverlaySide, OverlaySolution,
    solve,
};
pub use registry::{RegistryConfig, StyleRegistry};
pub use render::{RendererSettings, StylesheetRenderer};
pub use style::{
    Attribute, Breakpoint, Class, Declaration, Query, Rule, Scheme, class, serialize, stylesheet,
};
pub use values::{
    Alpha, Color, Duration, FontWeight, GradientStop, Length, TrackCount, font_weight_value,
};
