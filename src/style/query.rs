use std::fmt;

use crate::values::Length;

/// Preferred color scheme for `prefers-color-scheme` queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Dark,
    Light,
}

/// Media or container query condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    pub fn min_width(length: Length) -> Self {
        Self(format!("(min-width:{length})"))
    }

    pub fn max_width(length: Length) -> Self {
        Self(format!("(max-width:{length})"))
    }

    pub fn reduced_motion() -> Self {
        Self("(prefers-reduced-motion:reduce)".to_string())
    }

    pub fn color_scheme(scheme: Scheme) -> Self {
        let name = match scheme {
            Scheme::Dark => "dark",
            Scheme::Light => "light",
        };
        Self(format!("(prefers-color-scheme:{name})"))
    }

    /// Conjunction `self and other`.
    pub fn and(self, other: Query) -> Self {
        Self(format!("{} and {}", self.0, other.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Named viewport thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Mobile,
    Tablet,
}

impl Breakpoint {
    pub const fn px(self) -> i32 {
        match self {
            Breakpoint::Mobile => 768,
            Breakpoint::Tablet => 1024,
        }
    }

    /// Viewports narrower than the breakpoint.
    pub fn below(self) -> Query {
        Query::max_width(Length::px(self.px() - 1))
    }

    /// Viewports at least as wide as the breakpoint.
    pub fn at_or_above(self) -> Query {
        Query::min_width(Length::px(self.px()))
    }
}
