//! Opaque CSS scalar values.
//!
//! Each type can only be produced through its constructors. Where CSS bounds a
//! value, the constructor clamps out-of-range input to the nearest valid value
//! instead of failing. `Display` renders the CSS token.

use std::fmt;

/// CSS length token.
#[derive(Debug, Clone, PartialEq)]
pub struct Length(LengthRepr);

#[derive(Debug, Clone, PartialEq)]
enum LengthRepr {
    Px(i32),
    Rem(f64),
    Em(f64),
    Percent(f64),
    Auto,
}

impl Length {
    pub fn px(value: i32) -> Self {
        Self(LengthRepr::Px(value))
    }

    /// Pixel length for sizes that cannot go below zero.
    pub fn px_non_negative(value: i32) -> Self {
        Self(LengthRepr::Px(value.max(0)))
    }

    pub fn rem(value: f64) -> Self {
        Self(LengthRepr::Rem(finite_or_zero(value)))
    }

    pub fn em(value: f64) -> Self {
        Self(LengthRepr::Em(finite_or_zero(value)))
    }

    /// Percentage length. Values past 100 or below 0 are kept as given.
    pub fn percent(value: f64) -> Self {
        Self(LengthRepr::Percent(finite_or_zero(value)))
    }

    pub fn zero() -> Self {
        Self(LengthRepr::Px(0))
    }

    pub fn auto() -> Self {
        Self(LengthRepr::Auto)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            LengthRepr::Px(0) => f.write_str("0"),
            LengthRepr::Px(value) => write!(f, "{value}px"),
            LengthRepr::Rem(value) => write!(f, "{}rem", Number(*value)),
            LengthRepr::Em(value) => write!(f, "{}em", Number(*value)),
            LengthRepr::Percent(value) => write!(f, "{}%", Number(*value)),
            LengthRepr::Auto => f.write_str("auto"),
        }
    }
}

/// CSS color token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// Hex color in `#rgb` or `#rrggbb` form. Anything else renders as
    /// `transparent`.
    pub fn hex(value: &str) -> Self {
        let digits = value.strip_prefix('#').unwrap_or(value);
        let valid = matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
        if valid {
            Self(format!("#{}", digits.to_ascii_lowercase()))
        } else {
            Self::transparent()
        }
    }

    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(format!("rgb({red},{green},{blue})"))
    }

    /// RGB with alpha clamped to [0, 1].
    pub fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self(format!("rgba({red},{green},{blue},{})", Alpha::new(alpha)))
    }

    /// Keyword such as `currentColor` or `rebeccapurple`, passed through as-is.
    pub fn named(keyword: &str) -> Self {
        Self(keyword.to_string())
    }

    pub fn transparent() -> Self {
        Self("transparent".to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Time value in milliseconds, never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Duration(u32);

impl Duration {
    pub fn ms(value: i64) -> Self {
        Self(value.clamp(0, i64::from(u32::MAX)) as u32)
    }

    pub fn as_ms(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Numeric font weight in [1, 1000].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontWeight(u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);

    pub fn new(weight: i32) -> Self {
        Self(weight.clamp(1, 1000) as u16)
    }

    pub fn get(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn font_weight_value(weight: i32) -> FontWeight {
    FontWeight::new(weight)
}

/// Opacity/alpha channel in [0, 1]. NaN becomes 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alpha(f64);

impl Alpha {
    pub fn new(value: f64) -> Self {
        Self(clamp_f64(value, 0.0, 1.0))
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Number(self.0))
    }
}

/// Grid track count, at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackCount(u16);

impl TrackCount {
    pub fn new(count: i32) -> Self {
        Self(count.clamp(1, i32::from(u16::MAX)) as u16)
    }

    pub fn get(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for TrackCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "repeat({},minmax(0,1fr))", self.0)
    }
}

/// Color stop of a gradient, positioned in [0, 100] percent.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    color: Color,
    percent: f64,
}

impl GradientStop {
    pub fn new(color: Color, percent: f64) -> Self {
        Self {
            color,
            percent: clamp_f64(percent, 0.0, 100.0),
        }
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }
}

impl fmt::Display for GradientStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}%", self.color, Number(self.percent))
    }
}

/// `linear-gradient(<angle>deg,<stop>,...)`.
pub fn linear_gradient(angle_deg: i32, stops: &[GradientStop]) -> String {
    let mut out = format!("linear-gradient({}deg", angle_deg.rem_euclid(360));
    for stop in stops {
        out.push(',');
        out.push_str(&stop.to_string());
    }
    out.push(')');
    out
}

/// Shortest decimal rendering, `-0` folded to `0`.
struct Number(f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

fn clamp_f64(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_weight_clamps_inclusive() {
        assert_eq!(font_weight_value(-5).to_string(), "1");
        assert_eq!(font_weight_value(1).to_string(), "1");
        assert_eq!(font_weight_value(1000).to_string(), "1000");
        assert_eq!(font_weight_value(1200).to_string(), "1000");
        assert_eq!(FontWeight::BOLD.get(), 700);
    }

    #[test]
    fn alpha_clamps_and_prints_shortest() {
        assert_eq!(Alpha::new(2.0).to_string(), "1");
        assert_eq!(Alpha::new(-0.5).to_string(), "0");
        assert_eq!(Alpha::new(0.25).to_string(), "0.25");
        assert_eq!(Alpha::new(f64::NAN).to_string(), "0");
    }

    #[test]
    fn lengths_render_css_tokens() {
        assert_eq!(Length::px(12).to_string(), "12px");
        assert_eq!(Length::px(-4).to_string(), "-4px");
        assert_eq!(Length::px_non_negative(-4).to_string(), "0");
        assert_eq!(Length::rem(1.5).to_string(), "1.5rem");
        assert_eq!(Length::auto().to_string(), "auto");
    }

    #[test]
    fn percent_lengths_keep_range() {
        assert_eq!(Length::percent(150.0).to_string(), "150%");
        assert_eq!(Length::percent(-25.0).to_string(), "-25%");
        assert_eq!(Length::percent(f64::NAN).to_string(), "0%");
    }

    #[test]
    fn colors_validate_hex() {
        assert_eq!(Color::hex("#FFAA00").to_string(), "#ffaa00");
        assert_eq!(Color::hex("abc").to_string(), "#abc");
        assert_eq!(Color::hex("#12345").to_string(), "transparent");
        assert_eq!(Color::rgba(0, 0, 0, 3.0).to_string(), "rgba(0,0,0,1)");
    }

    #[test]
    fn durations_and_tracks_clamp() {
        assert_eq!(Duration::ms(-20).to_string(), "0ms");
        assert_eq!(Duration::ms(150).as_ms(), 150);
        assert_eq!(TrackCount::new(0).to_string(), "repeat(1,minmax(0,1fr))");
        assert_eq!(TrackCount::new(3).get(), 3);
    }

    #[test]
    fn gradient_stops_clamp_percentages() {
        let stops = [
            GradientStop::new(Color::hex("#000"), -10.0),
            GradientStop::new(Color::hex("#fff"), 150.0),
        ];
        assert_eq!(
            linear_gradient(-90, &stops),
            "linear-gradient(270deg,#000 0%,#fff 100%)"
        );
    }
}
