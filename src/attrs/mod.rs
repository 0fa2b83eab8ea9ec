//! Typed attribute constructors.
//!
//! Each function wraps one CSS property in an [`Attribute`]. Pixel helpers take
//! plain integers; anything richer goes through the [`crate::values`] types.

use crate::style::Attribute;
use crate::values::{
    Alpha, Color, Duration, FontWeight, GradientStop, Length, TrackCount, linear_gradient,
};

fn decl(property: &str, value: impl ToString) -> Attribute {
    Attribute::declaration(property, value.to_string())
}

pub fn display(value: &str) -> Attribute {
    decl("display", value)
}

pub fn position(value: &str) -> Attribute {
    decl("position", value)
}

pub fn top(px: i32) -> Attribute {
    decl("top", Length::px(px))
}

pub fn right(px: i32) -> Attribute {
    decl("right", Length::px(px))
}

pub fn bottom(px: i32) -> Attribute {
    decl("bottom", Length::px(px))
}

pub fn left(px: i32) -> Attribute {
    decl("left", Length::px(px))
}

/// `top`/`left` pair, e.g. for an overlay's solved position.
pub fn offset_at(x: i32, y: i32) -> Vec<Attribute> {
    vec![left(x), top(y)]
}

pub fn width(length: Length) -> Attribute {
    decl("width", length)
}

pub fn height(length: Length) -> Attribute {
    decl("height", length)
}

pub fn min_width(length: Length) -> Attribute {
    decl("min-width", length)
}

pub fn max_width(length: Length) -> Attribute {
    decl("max-width", length)
}

pub fn min_height(length: Length) -> Attribute {
    decl("min-height", length)
}

pub fn max_height(length: Length) -> Attribute {
    decl("max-height", length)
}

pub fn padding(px: i32) -> Attribute {
    decl("padding", Length::px_non_negative(px))
}

pub fn padding_xy(x: i32, y: i32) -> Attribute {
    decl(
        "padding",
        format!(
            "{} {}",
            Length::px_non_negative(y),
            Length::px_non_negative(x)
        ),
    )
}

pub fn margin(px: i32) -> Attribute {
    decl("margin", Length::px(px))
}

pub fn gap(px: i32) -> Attribute {
    decl("gap", Length::px_non_negative(px))
}

pub fn color(color: Color) -> Attribute {
    decl("color", color)
}

pub fn background(color: Color) -> Attribute {
    decl("background", color)
}

pub fn background_gradient(angle_deg: i32, stops: &[GradientStop]) -> Attribute {
    decl("background", linear_gradient(angle_deg, stops))
}

pub fn border_radius(px: i32) -> Attribute {
    decl("border-radius", Length::px_non_negative(px))
}

pub fn font_size(length: Length) -> Attribute {
    decl("font-size", length)
}

pub fn font_weight(weight: FontWeight) -> Attribute {
    decl("font-weight", weight)
}

/// `opacity`, clamped to [0, 1].
pub fn alpha(opacity: f64) -> Attribute {
    decl("opacity", Alpha::new(opacity))
}

pub fn z_index(value: i32) -> Attribute {
    decl("z-index", value)
}

pub fn cursor(value: &str) -> Attribute {
    decl("cursor", value)
}

pub fn flex_direction(value: &str) -> Attribute {
    decl("flex-direction", value)
}

pub fn align_items(value: &str) -> Attribute {
    decl("align-items", value)
}

pub fn justify_content(value: &str) -> Attribute {
    decl("justify-content", value)
}

/// `grid-template-columns` with `count` equal tracks, at least one.
pub fn grid_columns(count: i32) -> Attribute {
    decl("grid-template-columns", TrackCount::new(count))
}

pub fn grid_rows(count: i32) -> Attribute {
    decl("grid-template-rows", TrackCount::new(count))
}

pub fn transition(property: &str, duration: Duration) -> Attribute {
    decl("transition", format!("{property} {duration}"))
}
