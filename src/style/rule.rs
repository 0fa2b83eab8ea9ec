use std::collections::{BTreeMap, HashSet};

/// A single `property:value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Scoped sub-rules keyed by pseudo name, query string or ancestor prefix.
pub type Scopes = BTreeMap<String, Rule>;

/// Tree of declarations plus nested scopes.
///
/// Rules are assembled with [`Rule::merge`], which only concatenates; conflicts
/// are settled later by [`Rule::normalize`]. Keep it that way so merging stays
/// associative regardless of how attribute lists are grouped.
///
/// Extra classes live only on the outermost rule. Nesting a rule under a scope
/// moves its extra classes up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rule {
    declarations: Vec<Declaration>,
    pseudos: Scopes,
    medias: Scopes,
    containers: Scopes,
    ancestors: Scopes,
    extra_classes: Vec<String>,
}

impl Rule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rule holding exactly one declaration.
    pub fn declaration(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().with_declaration(property, value)
    }

    pub fn with_declaration(
        mut self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.declarations.push(Declaration::new(property, value));
        self
    }

    /// Nest `rule` under `:pseudo`.
    pub fn with_pseudo(mut self, pseudo: impl Into<String>, rule: Rule) -> Self {
        merge_scope(&mut self.pseudos, &mut self.extra_classes, pseudo.into(), &rule);
        self
    }

    /// Nest `rule` under `@media query`.
    pub fn with_media(mut self, query: impl Into<String>, rule: Rule) -> Self {
        merge_scope(&mut self.medias, &mut self.extra_classes, query.into(), &rule);
        self
    }

    /// Nest `rule` under `@container query`.
    pub fn with_container(mut self, query: impl Into<String>, rule: Rule) -> Self {
        merge_scope(&mut self.containers, &mut self.extra_classes, query.into(), &rule);
        self
    }

    /// Nest `rule` under a compound selector prefix such as `.card:hover `.
    pub fn with_ancestor(mut self, prefix: impl Into<String>, rule: Rule) -> Self {
        merge_scope(&mut self.ancestors, &mut self.extra_classes, prefix.into(), &rule);
        self
    }

    pub fn with_extra_class(mut self, class: impl Into<String>) -> Self {
        self.extra_classes.push(class.into());
        self
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn pseudos(&self) -> &Scopes {
        &self.pseudos
    }

    pub fn medias(&self) -> &Scopes {
        &self.medias
    }

    pub fn containers(&self) -> &Scopes {
        &self.containers
    }

    pub fn ancestors(&self) -> &Scopes {
        &self.ancestors
    }

    pub fn extra_classes(&self) -> &[String] {
        &self.extra_classes
    }

    /// True when the rule carries no declarations, scopes or extra classes.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
            && self.pseudos.is_empty()
            && self.medias.is_empty()
            && self.containers.is_empty()
            && self.ancestors.is_empty()
            && self.extra_classes.is_empty()
    }

    /// Combine two rules without resolving conflicts: `other`'s declarations
    /// follow ours, shared scope keys merge recursively, new keys are added.
    pub fn merge(&self, other: &Rule) -> Rule {
        let mut merged = self.clone();
        merged.absorb(other);
        merged
    }

    /// Merge an ordered sequence of rules left to right.
    pub fn fold<'a>(rules: impl IntoIterator<Item = &'a Rule>) -> Rule {
        let mut merged = Rule::new();
        for rule in rules {
            merged.absorb(rule);
        }
        merged
    }

    pub(crate) fn absorb(&mut self, other: &Rule) {
        self.declarations.extend(other.declarations.iter().cloned());
        for (key, rule) in &other.pseudos {
            merge_scope(&mut self.pseudos, &mut self.extra_classes, key.clone(), rule);
        }
        for (key, rule) in &other.medias {
            merge_scope(&mut self.medias, &mut self.extra_classes, key.clone(), rule);
        }
        for (key, rule) in &other.containers {
            merge_scope(&mut self.containers, &mut self.extra_classes, key.clone(), rule);
        }
        for (key, rule) in &other.ancestors {
            merge_scope(&mut self.ancestors, &mut self.extra_classes, key.clone(), rule);
        }
        self.extra_classes.extend(other.extra_classes.iter().cloned());
    }

    /// Move extra classes out of this rule, leaving the style content intact.
    fn take_extra_classes(&mut self) -> Vec<String> {
        std::mem::take(&mut self.extra_classes)
    }

    /// Canonical form: last declaration per property wins, declarations and
    /// scope keys sorted bytewise, extra classes deduplicated and sorted.
    /// Applying it twice yields the same rule.
    pub fn normalize(&self) -> Rule {
        let mut seen = HashSet::new();
        let mut declarations: Vec<Declaration> = self
            .declarations
            .iter()
            .rev()
            .filter(|decl| seen.insert(decl.property.as_str()))
            .cloned()
            .collect();
        declarations.sort_by(|a, b| a.property.cmp(&b.property));

        let mut extra_classes = self.extra_classes.clone();
        extra_classes.sort();
        extra_classes.dedup();

        Rule {
            declarations,
            pseudos: normalize_scopes(&self.pseudos),
            medias: normalize_scopes(&self.medias),
            containers: normalize_scopes(&self.containers),
            ancestors: normalize_scopes(&self.ancestors),
            extra_classes,
        }
    }

    /// Render this rule as CSS against `selector`. Extra classes are not style
    /// content and never appear in the output.
    pub fn serialize(&self, selector: &str) -> String {
        let mut out = String::new();
        write_rule(&mut out, selector, self);
        out
    }
}

/// Free-function form of [`Rule::serialize`].
pub fn serialize(selector: &str, rule: &Rule) -> String {
    rule.serialize(selector)
}

/// Extra classes never stay inside a scope; they move up to `hoisted` so
/// they always land on the element carrying the class.
fn merge_scope(scopes: &mut Scopes, hoisted: &mut Vec<String>, key: String, rule: &Rule) {
    let nested = scopes.entry(key).or_default();
    nested.absorb(rule);
    hoisted.append(&mut nested.take_extra_classes());
}

fn normalize_scopes(scopes: &Scopes) -> Scopes {
    scopes
        .iter()
        .map(|(key, rule)| (key.clone(), rule.normalize()))
        .collect()
}

fn write_rule(out: &mut String, selector: &str, rule: &Rule) {
    if !rule.declarations.is_empty() {
        out.push_str(selector);
        out.push('{');
        for decl in &rule.declarations {
            out.push_str(&decl.property);
            out.push(':');
            out.push_str(&decl.value);
            out.push(';');
        }
        out.push('}');
    }

    for (pseudo, nested) in &rule.pseudos {
        write_rule(out, &format!("{selector}:{pseudo}"), nested);
    }

    for (query, nested) in &rule.medias {
        write_at_rule(out, "@media", query, selector, nested);
    }

    for (query, nested) in &rule.containers {
        write_at_rule(out, "@container", query, selector, nested);
    }

    for (prefix, nested) in &rule.ancestors {
        write_rule(out, &format!("{prefix}{selector}"), nested);
    }
}

fn write_at_rule(out: &mut String, keyword: &str, query: &str, selector: &str, nested: &Rule) {
    out.push_str(keyword);
    out.push(' ');
    out.push_str(query);
    out.push_str("{\n");
    write_rule(out, selector, nested);
    out.push_str("\n}");
}
