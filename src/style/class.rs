use super::rule::Rule;

/// Prefix of every generated class name.
pub const CLASS_PREFIX: &str = "wf-";

/// Selector used when hashing, so names do not depend on themselves.
const HASH_SELECTOR: &str = ".x";

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// One fragment of style intent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    rule: Rule,
}

impl Attribute {
    pub fn new(rule: Rule) -> Self {
        Self { rule }
    }

    /// Raw `property:value` attribute for properties without a typed constructor.
    pub fn declaration(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(Rule::declaration(property, value))
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn into_rule(self) -> Rule {
        self.rule
    }
}

impl From<Rule> for Attribute {
    fn from(rule: Rule) -> Self {
        Self::new(rule)
    }
}

/// Compiled, content-addressed style unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Class {
    name: String,
    rule: Rule,
    extra_classes: Vec<String>,
}

impl Class {
    /// Merge, normalize and name a list of attributes.
    ///
    /// The name hashes only the rendered style content, so extra classes such
    /// as group markers change [`Class::extra_classes`] but never the name.
    pub fn compile(attrs: &[Attribute]) -> Self {
        let rule = Rule::fold(attrs.iter().map(Attribute::rule)).normalize();
        let name = class_name(&rule);
        let extra_classes = rule.extra_classes().to_vec();
        Self {
            name,
            rule,
            extra_classes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn extra_classes(&self) -> &[String] {
        &self.extra_classes
    }

    /// Space separated value for an element's `class` attribute.
    pub fn class_list(&self) -> String {
        let mut list = self.name.clone();
        for extra in &self.extra_classes {
            list.push(' ');
            list.push_str(extra);
        }
        list
    }

    /// CSS for this class alone, selected by its generated name.
    pub fn to_css(&self) -> String {
        self.rule.serialize(&format!(".{}", self.name))
    }
}

pub fn class(attrs: &[Attribute]) -> Class {
    Class::compile(attrs)
}

/// Generated name for an already normalized rule.
pub fn class_name(rule: &Rule) -> String {
    let hash = fnv1a(rule.serialize(HASH_SELECTOR).as_bytes());
    format!("{CLASS_PREFIX}{hash:08x}")
}

/// 32-bit FNV-1a.
pub fn fnv1a(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Render classes as one stylesheet: ascending by name, one block per
/// distinct name, independent of input order and repetition.
pub fn stylesheet<'a>(classes: impl IntoIterator<Item = &'a Class>) -> String {
    let mut sorted: Vec<&Class> = classes.into_iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    sorted.dedup_by(|a, b| a.name == b.name);

    sorted.iter().map(|class| class.to_css()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padding(px: i32) -> Attribute {
        Attribute::declaration("padding", format!("{px}px"))
    }

    fn color(value: &str) -> Attribute {
        Attribute::declaration("color", value)
    }

    #[test]
    fn fnv1a_matches_reference_vectors() {
        assert_eq!(fnv1a(b""), 0x811c_9dc5);
        assert_eq!(fnv1a(b"a"), 0xe40c_292c);
        assert_eq!(fnv1a(b"foobar"), 0xbf9c_f968);
    }

    #[test]
    fn names_have_fixed_shape() {
        let name = class(&[padding(4)]).name().to_string();
        assert_eq!(name.len(), 11);
        assert!(name.starts_with(CLASS_PREFIX));
        assert!(
            name[3..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
        assert_eq!(class(&[]).name(), "wf-811c9dc5");
    }

    #[test]
    fn name_ignores_attribute_order() {
        let hover = Attribute::new(Rule::new().with_pseudo(
            "hover",
            Rule::declaration("color", "red").with_declaration("opacity", "0.5"),
        ));
        let hover_swapped = Attribute::new(Rule::new().with_pseudo(
            "hover",
            Rule::declaration("opacity", "0.5").with_declaration("color", "red"),
        ));

        let a = class(&[padding(4), color("blue"), hover]);
        let b = class(&[hover_swapped, color("blue"), padding(4)]);
        assert_eq!(a.name(), b.name());
        assert_eq!(a.to_css(), b.to_css());
    }

    #[test]
    fn last_write_wins() {
        let overridden = class(&[padding(1), padding(2)]);
        let direct = class(&[padding(2)]);
        assert_eq!(overridden, direct);
        assert_eq!(overridden.to_css(), format!(".{}{{padding:2px;}}", direct.name()));
    }

    #[test]
    fn extra_classes_do_not_affect_name() {
        let card = Attribute::new(Rule::new().with_extra_class("weft-group-card"));
        let row = Attribute::new(Rule::new().with_extra_class("weft-group-row"));

        let a = class(&[padding(4), card.clone()]);
        let b = class(&[row, padding(4)]);
        assert_eq!(a.name(), b.name());
        assert_eq!(a.extra_classes(), &["weft-group-card".to_string()]);
        assert_eq!(b.extra_classes(), &["weft-group-row".to_string()]);

        let c = class(&[card.clone(), padding(4), card]);
        assert_eq!(c.extra_classes().len(), 1);
        assert_eq!(c.class_list(), format!("{} weft-group-card", c.name()));
    }

    #[test]
    fn nested_extra_classes_reach_class_list() {
        let focus = Attribute::new(Rule::new().with_pseudo(
            "focus",
            Rule::declaration("outline", "none").with_extra_class("weft-group-field"),
        ));
        let compiled = class(&[padding(2), focus]);
        assert_eq!(compiled.extra_classes(), &["weft-group-field".to_string()]);
        assert_eq!(
            compiled.class_list(),
            format!("{} weft-group-field", compiled.name())
        );
    }

    #[test]
    fn empty_query_scope_changes_name() {
        let empty_media = Attribute::new(Rule::new().with_media("(min-width:600px)", Rule::new()));
        let compiled = class(&[empty_media]);
        assert_ne!(compiled.name(), class(&[]).name());
        assert_eq!(compiled.to_css(), "@media (min-width:600px){\n\n}");
    }

    #[test]
    fn compile_leaves_inputs_untouched() {
        let attrs = vec![padding(3), padding(1)];
        let snapshot = attrs.clone();
        let first = class(&attrs);
        let second = class(&attrs);
        assert_eq!(attrs, snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn stylesheet_is_order_stable_and_deduplicated() {
        let a = class(&[padding(4)]);
        let b = class(&[color("red")]);

        assert_eq!(stylesheet([&a, &b]), stylesheet([&b, &a]));

        let doubled = stylesheet([&a, &a]);
        assert_eq!(doubled, a.to_css());
        assert_eq!(doubled.matches(&format!(".{}{{", a.name())).count(), 1);
    }

    #[test]
    fn stylesheet_sorts_by_name() {
        let classes = vec![class(&[padding(1)]), class(&[padding(2)]), class(&[color("red")])];
        let mut names: Vec<_> = classes.iter().map(|c| c.name().to_string()).collect();
        names.sort();

        let sheet = stylesheet(&classes);
        let positions: Vec<_> = names
            .iter()
            .map(|name| sheet.find(&format!(".{name}{{")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
