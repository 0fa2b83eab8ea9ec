use serde::Serialize;

use crate::geometry::{Rect, Size};

/// Side of the anchor the overlay is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlaySide {
    Above,
    Below,
    Left,
    Right,
}

impl OverlaySide {
    fn is_vertical(self) -> bool {
        matches!(self, OverlaySide::Above | OverlaySide::Below)
    }
}

/// Cross-axis alignment relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayAlign {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OverlayPlacement {
    pub side: OverlaySide,
    pub align: OverlayAlign,
}

impl OverlayPlacement {
    pub const fn new(side: OverlaySide, align: OverlayAlign) -> Self {
        Self { side, align }
    }
}

pub const DEFAULT_SIDES: [OverlaySide; 4] = [
    OverlaySide::Below,
    OverlaySide::Above,
    OverlaySide::Right,
    OverlaySide::Left,
];

pub const DEFAULT_ALIGNS: [OverlayAlign; 3] =
    [OverlayAlign::Center, OverlayAlign::Start, OverlayAlign::End];

/// Arrow pointing from the overlay back at the anchor.
///
/// `size_px` is carried for renderers; placement only reads `edge_padding_px`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OverlayArrow {
    size_px: i32,
    edge_padding_px: i32,
}

impl OverlayArrow {
    pub fn new(size_px: i32, edge_padding_px: i32) -> Self {
        Self {
            size_px: size_px.max(0),
            edge_padding_px: edge_padding_px.max(0),
        }
    }

    pub fn size_px(&self) -> i32 {
        self.size_px
    }

    pub fn edge_padding_px(&self) -> i32 {
        self.edge_padding_px
    }
}

/// Declarative placement problem. Build with [`OverlayProblem::new`] and the
/// `with_*` methods; every numeric input is clamped to a usable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayProblem {
    anchor: Rect,
    overlay: Size,
    viewport: Rect,
    sides: Vec<OverlaySide>,
    aligns: Vec<OverlayAlign>,
    offset: i32,
    padding: i32,
    arrow: Option<OverlayArrow>,
}

impl OverlayProblem {
    pub fn new(anchor: Rect, overlay: Size, viewport: Rect) -> Self {
        Self {
            anchor,
            overlay,
            viewport,
            sides: DEFAULT_SIDES.to_vec(),
            aligns: DEFAULT_ALIGNS.to_vec(),
            offset: 0,
            padding: 0,
            arrow: None,
        }
    }

    /// Preferred sides in priority order. An empty list restores the default order.
    pub fn with_sides(mut self, sides: impl IntoIterator<Item = OverlaySide>) -> Self {
        let sides: Vec<_> = sides.into_iter().collect();
        self.sides = if sides.is_empty() {
            DEFAULT_SIDES.to_vec()
        } else {
            sides
        };
        self
    }

    /// Preferred alignments in priority order. An empty list restores the default order.
    pub fn with_aligns(mut self, aligns: impl IntoIterator<Item = OverlayAlign>) -> Self {
        let aligns: Vec<_> = aligns.into_iter().collect();
        self.aligns = if aligns.is_empty() {
            DEFAULT_ALIGNS.to_vec()
        } else {
            aligns
        };
        self
    }

    /// Gap between the anchor edge and the overlay.
    pub fn with_offset(mut self, offset: i32) -> Self {
        self.offset = offset.max(0);
        self
    }

    /// Safe margin kept between the overlay and the viewport edges.
    pub fn with_padding(mut self, padding: i32) -> Self {
        self.padding = padding.max(0);
        self
    }

    pub fn with_arrow(mut self, arrow: OverlayArrow) -> Self {
        self.arrow = Some(arrow);
        self
    }

    pub fn anchor(&self) -> Rect {
        self.anchor
    }

    pub fn overlay(&self) -> Size {
        self.overlay
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn sides(&self) -> &[OverlaySide] {
        &self.sides
    }

    pub fn aligns(&self) -> &[OverlayAlign] {
        &self.aligns
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn padding(&self) -> i32 {
        self.padding
    }

    pub fn arrow(&self) -> Option<OverlayArrow> {
        self.arrow
    }

    /// Solve this problem. Shorthand for [`solve`].
    pub fn solve(&self) -> OverlaySolution {
        solve(self)
    }
}

/// Chosen placement and the overlay's top-left corner.
///
/// `arrow_x` is only set for `Above`/`Below`, `arrow_y` only for `Left`/`Right`,
/// and both stay `None` when the problem carries no arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OverlaySolution {
    pub placement: OverlayPlacement,
    pub x: i32,
    pub y: i32,
    pub arrow_x: Option<i32>,
    pub arrow_y: Option<i32>,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    placement: OverlayPlacement,
    x: i32,
    y: i32,
    overflow: i64,
    shift: i64,
}

impl Candidate {
    fn beats(&self, other: &Candidate) -> bool {
        (self.overflow, self.shift) < (other.overflow, other.shift)
    }
}

/// Pick the placement with the least overflow, then the least clamp shift,
/// then the earliest enumerated (sides outer, alignments inner).
pub fn solve(problem: &OverlayProblem) -> OverlaySolution {
    let pad = problem.padding;
    let safe = problem.viewport.inset(pad, pad, pad, pad);

    let mut best: Option<Candidate> = None;
    for &side in &problem.sides {
        for &align in &problem.aligns {
            let candidate = evaluate(problem, safe, OverlayPlacement::new(side, align));
            if best.is_none_or(|current| candidate.beats(&current)) {
                best = Some(candidate);
            }
        }
    }

    let chosen = best.unwrap_or(Candidate {
        placement: OverlayPlacement::new(OverlaySide::Below, OverlayAlign::Center),
        x: safe.x(),
        y: safe.y(),
        overflow: 0,
        shift: 0,
    });

    let (arrow_x, arrow_y) = match problem.arrow {
        Some(arrow) => arrow_offsets(problem, &chosen, arrow),
        None => (None, None),
    };

    OverlaySolution {
        placement: chosen.placement,
        x: chosen.x,
        y: chosen.y,
        arrow_x,
        arrow_y,
    }
}

fn evaluate(problem: &OverlayProblem, safe: Rect, placement: OverlayPlacement) -> Candidate {
    let (ideal_x, ideal_y) = ideal_position(problem, placement);
    let width = problem.overlay.width();
    let height = problem.overlay.height();

    let x = clamp_axis(ideal_x, safe.x(), safe.right(), width);
    let y = clamp_axis(ideal_y, safe.y(), safe.bottom(), height);

    Candidate {
        placement,
        x,
        y,
        overflow: overflow(safe, x, y, width, height),
        shift: (i64::from(x) - i64::from(ideal_x)).abs()
            + (i64::from(y) - i64::from(ideal_y)).abs(),
    }
}

fn ideal_position(problem: &OverlayProblem, placement: OverlayPlacement) -> (i32, i32) {
    let anchor = problem.anchor;
    let width = problem.overlay.width();
    let height = problem.overlay.height();
    let offset = problem.offset;

    match placement.side {
        OverlaySide::Above => (
            cross_axis(placement.align, anchor.x(), anchor.center_x(), anchor.right(), width),
            anchor.y().saturating_sub(offset).saturating_sub(height),
        ),
        OverlaySide::Below => (
            cross_axis(placement.align, anchor.x(), anchor.center_x(), anchor.right(), width),
            anchor.bottom().saturating_add(offset),
        ),
        OverlaySide::Left => (
            anchor.x().saturating_sub(offset).saturating_sub(width),
            cross_axis(placement.align, anchor.y(), anchor.center_y(), anchor.bottom(), height),
        ),
        OverlaySide::Right => (
            anchor.right().saturating_add(offset),
            cross_axis(placement.align, anchor.y(), anchor.center_y(), anchor.bottom(), height),
        ),
    }
}

fn cross_axis(align: OverlayAlign, start: i32, center: i32, end: i32, extent: i32) -> i32 {
    match align {
        OverlayAlign::Start => start,
        OverlayAlign::Center => center.saturating_sub(extent / 2),
        OverlayAlign::End => end.saturating_sub(extent),
    }
}

/// Clamp into `[min, max - extent]`, falling back to `min` when the overlay
/// does not fit on this axis at all.
fn clamp_axis(value: i32, min: i32, max: i32, extent: i32) -> i32 {
    let upper = max.saturating_sub(extent);
    if upper < min {
        min
    } else {
        value.clamp(min, upper)
    }
}

fn overflow(safe: Rect, x: i32, y: i32, width: i32, height: i32) -> i64 {
    let protrusion = |amount: i64| amount.max(0);
    let (x, y) = (i64::from(x), i64::from(y));
    protrusion(i64::from(safe.x()) - x)
        + protrusion(i64::from(safe.y()) - y)
        + protrusion(x + i64::from(width) - i64::from(safe.right()))
        + protrusion(y + i64::from(height) - i64::from(safe.bottom()))
}

fn arrow_offsets(
    problem: &OverlayProblem,
    chosen: &Candidate,
    arrow: OverlayArrow,
) -> (Option<i32>, Option<i32>) {
    let edge = arrow.edge_padding_px;
    if chosen.placement.side.is_vertical() {
        let upper = edge.max(problem.overlay.width() - edge);
        let arrow_x = problem
            .anchor
            .center_x()
            .saturating_sub(chosen.x)
            .clamp(edge, upper);
        (Some(arrow_x), None)
    } else {
        let upper = edge.max(problem.overlay.height() - edge);
        let arrow_y = problem
            .anchor
            .center_y()
            .saturating_sub(chosen.y)
            .clamp(edge, upper);
        (None, Some(arrow_y))
    }
}
