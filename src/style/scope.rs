//! Attributes that nest other attributes under a pseudo-class, query or
//! ancestor selector.

use super::class::Attribute;
use super::query::{Breakpoint, Query, Scheme};
use super::rule::Rule;

/// Prefix shared by group marker classes.
pub const GROUP_CLASS_PREFIX: &str = "weft-group-";

pub fn pseudo(name: &str, attrs: impl IntoIterator<Item = Attribute>) -> Attribute {
    scoped(attrs, |outer, inner| outer.with_pseudo(name, inner))
}

pub fn hover(attrs: impl IntoIterator<Item = Attribute>) -> Attribute {
    pseudo("hover", attrs)
}

pub fn focus(attrs: impl IntoIterator<Item = Attribute>) -> Attribute {
    pseudo("focus", attrs)
}

pub fn focus_visible(attrs: impl IntoIterator<Item = Attribute>) -> Attribute {
    pseudo("focus-visible", attrs)
}

pub fn active(attrs: impl IntoIterator<Item = Attribute>) -> Attribute {
    pseudo("active", attrs)
}

pub fn disabled(attrs: impl IntoIterator<Item = Attribute>) -> Attribute {
    pseudo("disabled", attrs)
}

pub fn media(query: &Query, attrs: impl IntoIterator<Item = Attribute>) -> Attribute {
    scoped(attrs, |outer, inner| outer.with_media(query.as_str(), inner))
}

pub fn container(query: &Query, attrs: impl IntoIterator<Item = Attribute>) -> Attribute {
    scoped(attrs, |outer, inner| outer.with_container(query.as_str(), inner))
}

/// Scope under an arbitrary selector prefix, e.g. `.sidebar `.
pub fn ancestor(prefix: &str, attrs: impl IntoIterator<Item = Attribute>) -> Attribute {
    scoped(attrs, |outer, inner| outer.with_ancestor(prefix, inner))
}

pub fn dark(attrs: impl IntoIterator<Item = Attribute>) -> Attribute {
    media(&Query::color_scheme(Scheme::Dark), attrs)
}

pub fn reduced_motion(attrs: impl IntoIterator<Item = Attribute>) -> Attribute {
    media(&Query::reduced_motion(), attrs)
}

/// Marks an element as the named group so descendants can react to it.
pub fn group(name: &str) -> Attribute {
    Attribute::new(Rule::new().with_extra_class(group_class(name)))
}

/// Applies `attrs` while an ancestor marked with [`group`] is hovered.
pub fn group_hover(name: &str, attrs: impl IntoIterator<Item = Attribute>) -> Attribute {
    ancestor(&format!(".{}:hover ", group_class(name)), attrs)
}

pub fn group_class(name: &str) -> String {
    format!("{GROUP_CLASS_PREFIX}{name}")
}

/// `display:none` on viewports narrower than `breakpoint`.
pub fn hide_below(breakpoint: Breakpoint) -> Attribute {
    Attribute::new(Rule::new().with_media(
        breakpoint.below().as_str(),
        Rule::declaration("display", "none"),
    ))
}

/// `display:none` on viewports at or above `breakpoint`.
pub fn show_below(breakpoint: Breakpoint) -> Attribute {
    Attribute::new(Rule::new().with_media(
        breakpoint.at_or_above().as_str(),
        Rule::declaration("display", "none"),
    ))
}

fn scoped(
    attrs: impl IntoIterator<Item = Attribute>,
    nest: impl FnOnce(Rule, Rule) -> Rule,
) -> Attribute {
    let mut inner = Rule::new();
    for attr in attrs {
        inner.absorb(attr.rule());
    }
    Attribute::new(nest(Rule::new(), inner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::class::class;
    use crate::values::Length;

    fn decl(property: &str, value: &str) -> Attribute {
        Attribute::declaration(property, value)
    }

    #[test]
    fn hover_renders_pseudo_block() {
        let compiled = class(&[hover([decl("color", "red")])]);
        assert_eq!(
            compiled.to_css(),
            format!(".{}:hover{{color:red;}}", compiled.name())
        );
    }

    #[test]
    fn repeated_scopes_merge_instead_of_overwrite() {
        let compiled = class(&[
            hover([decl("color", "red")]),
            hover([decl("opacity", "0.5")]),
        ]);
        let hover = &compiled.rule().pseudos()["hover"];
        assert_eq!(hover.declarations().len(), 2);
    }

    #[test]
    fn nested_order_does_not_change_name() {
        let query = Query::min_width(Length::px(600));
        let a = class(&[media(&query, [decl("gap", "4px"), decl("display", "grid")])]);
        let b = class(&[media(&query, [decl("display", "grid"), decl("gap", "4px")])]);
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn container_order_does_not_change_name() {
        let query = Query::min_width(Length::px(320));
        let a = class(&[container(&query, [decl("gap", "2px"), decl("flex-wrap", "wrap")])]);
        let b = class(&[container(&query, [decl("flex-wrap", "wrap"), decl("gap", "2px")])]);
        assert_eq!(a.name(), b.name());
        assert_eq!(a.to_css(), b.to_css());
    }

    #[test]
    fn ancestor_order_does_not_change_name() {
        let a = class(&[
            ancestor(".sidebar ", [decl("color", "red"), decl("margin", "0")]),
            group_hover("card", [decl("opacity", "1"), decl("color", "white")]),
        ]);
        let b = class(&[
            group_hover("card", [decl("color", "white"), decl("opacity", "1")]),
            ancestor(".sidebar ", [decl("margin", "0"), decl("color", "red")]),
        ]);
        assert_eq!(a.name(), b.name());
        assert_eq!(a.to_css(), b.to_css());
    }

    #[test]
    fn group_markers_share_name_but_differ_in_extras() {
        let body = || decl("padding", "8px");
        let card = class(&[group("card"), body()]);
        let row = class(&[body(), group("row")]);

        assert_eq!(card.name(), row.name());
        assert_eq!(card.extra_classes(), &["weft-group-card".to_string()]);
        assert_eq!(row.extra_classes(), &["weft-group-row".to_string()]);
    }

    #[test]
    fn group_hover_prefixes_selector() {
        let compiled = class(&[group_hover("card", [decl("color", "red")])]);
        assert_eq!(
            compiled.to_css(),
            format!(".weft-group-card:hover .{}{{color:red;}}", compiled.name())
        );
    }

    #[test]
    fn extra_classes_hoist_out_of_scopes() {
        let compiled = class(&[focus([group("field"), decl("outline", "none")])]);
        assert_eq!(compiled.extra_classes(), &["weft-group-field".to_string()]);
        assert!(compiled.rule().pseudos()["focus"].extra_classes().is_empty());
    }

    #[test]
    fn breakpoint_visibility_rules() {
        let hidden = class(&[hide_below(Breakpoint::Mobile)]);
        assert_eq!(
            hidden.to_css(),
            format!(
                "@media (max-width:767px){{\n.{}{{display:none;}}\n}}",
                hidden.name()
            )
        );

        let shown = class(&[show_below(Breakpoint::Tablet)]);
        assert!(shown.to_css().starts_with("@media (min-width:1024px){\n"));
    }

    #[test]
    fn container_and_dark_scopes() {
        let compiled = class(&[
            dark([decl("color", "white")]),
            container(&Query::min_width(Length::px(320)), [decl("gap", "2px")]),
        ]);
        let css = compiled.to_css();
        let media_at = css.find("@media (prefers-color-scheme:dark)").unwrap();
        let container_at = css.find("@container (min-width:320px)").unwrap();
        assert!(media_at < container_at);
    }
}
