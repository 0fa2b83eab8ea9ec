//! Style compilation engine.
//!
//! Attributes wrap [`Rule`] fragments. [`class`] folds a list of them into one
//! normalized rule, names it by hashing its CSS, and [`stylesheet`] renders a
//! set of classes into deduplicated CSS text.

mod class;
mod query;
mod rule;
pub mod scope;

pub use class::{Attribute, CLASS_PREFIX, Class, class, class_name, fnv1a, stylesheet};
pub use query::{Breakpoint, Query, Scheme};
pub use rule::{Declaration, Rule, Scopes, serialize};
pub use scope::{
    active, ancestor, container, dark, disabled, focus, focus_visible, group, group_hover,
    hide_below, hover, media, pseudo, reduced_motion, show_below,
};
