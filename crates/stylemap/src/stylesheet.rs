//! Parsed stylesheet data structures.
//!
//! A [`Stylesheet`] maps each selector ([`Rule`]) to its [`Declarations`].
//! Selectors are flat: a single class, id or tag name.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;

/// Property name to value. Values are opaque strings.
pub type Declarations = HashMap<String, String>;

/// Category of a selector, decided by its leading character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectorKind {
    /// `.name`
    Class,
    /// `#name`
    Id,
    /// Bare element name
    Tag,
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Class => "class",
            Self::Id => "id",
            Self::Tag => "tag",
        })
    }
}

/// A single selector identifier such as `.box`, `#main` or `div`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rule(String);

impl Rule {
    /// Create a rule from selector text, prefix included.
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    /// Classifies the selector by its prefix.
    ///
    /// ```
    /// use stylemap::{Rule, SelectorKind};
    ///
    /// assert_eq!(Rule::new(".box").kind(), SelectorKind::Class);
    /// assert_eq!(Rule::new("#main").kind(), SelectorKind::Id);
    /// assert_eq!(Rule::new("div").kind(), SelectorKind::Tag);
    /// ```
    pub fn kind(&self) -> SelectorKind {
        if self.0.starts_with('.') {
            SelectorKind::Class
        } else if self.0.starts_with('#') {
            SelectorKind::Id
        } else {
            SelectorKind::Tag
        }
    }

    /// Full selector text, prefix included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Selector text without its `.` or `#` prefix.
    pub fn name(&self) -> &str {
        match self.kind() {
            SelectorKind::Tag => &self.0,
            SelectorKind::Class | SelectorKind::Id => &self.0[1..],
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Rule {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Rule {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for Rule {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The result of parsing: every selector with its declarations.
///
/// # Examples
///
/// ```
/// use stylemap::parse_stylesheet;
///
/// let sheet = parse_stylesheet("a, .b { color: red; }").unwrap();
/// assert_eq!(sheet.len(), 2);
/// assert_eq!(sheet.get("a").unwrap()["color"], "red");
/// assert_eq!(sheet.get(".b").unwrap()["color"], "red");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stylesheet {
    rules: HashMap<Rule, Declarations>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declarations for a selector, looked up by its full text.
    pub fn get(&self, selector: &str) -> Option<&Declarations> {
        self.rules.get(selector)
    }

    pub fn contains(&self, selector: &str) -> bool {
        self.rules.contains_key(selector)
    }

    /// Number of distinct selectors.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Rule, Declarations> {
        self.rules.iter()
    }

    /// All rules of one selector kind, in no particular order.
    pub fn rules_of_kind(&self, kind: SelectorKind) -> impl Iterator<Item = (&Rule, &Declarations)> {
        self.rules.iter().filter(move |(rule, _)| rule.kind() == kind)
    }

    /// Take the underlying map.
    pub fn into_inner(self) -> HashMap<Rule, Declarations> {
        self.rules
    }

    /// Merges a block's declarations into `rule`.
    ///
    /// Properties already present for the rule are kept; only new properties
    /// are added. An empty block still registers the rule.
    pub(crate) fn merge(&mut self, rule: Rule, declarations: &Declarations) {
        let existing = self.rules.entry(rule).or_default();
        for (property, value) in declarations {
            existing
                .entry(property.clone())
                .or_insert_with(|| value.clone());
        }
    }
}

impl<'a> IntoIterator for &'a Stylesheet {
    type Item = (&'a Rule, &'a Declarations);
    type IntoIter = hash_map::Iter<'a, Rule, Declarations>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl IntoIterator for Stylesheet {
    type Item = (Rule, Declarations);
    type IntoIter = hash_map::IntoIter<Rule, Declarations>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decls(pairs: &[(&str, &str)]) -> Declarations {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn classification_is_stable() {
        for (selector, kind) in [
            (".x", SelectorKind::Class),
            ("#x", SelectorKind::Id),
            ("x", SelectorKind::Tag),
        ] {
            let rule = Rule::new(selector);
            assert_eq!(rule.kind(), kind);
            assert_eq!(rule.kind(), rule.kind());
        }
    }

    #[test]
    fn kind_display() {
        assert_eq!(SelectorKind::Class.to_string(), "class");
        assert_eq!(SelectorKind::Id.to_string(), "id");
        assert_eq!(SelectorKind::Tag.to_string(), "tag");
    }

    #[test]
    fn rule_name_strips_prefix() {
        assert_eq!(Rule::new(".box").name(), "box");
        assert_eq!(Rule::new("#main").name(), "main");
        assert_eq!(Rule::new("div").name(), "div");
    }

    #[test]
    fn merge_keeps_existing_values() {
        let mut sheet = Stylesheet::new();
        sheet.merge(Rule::new("a"), &decls(&[("c", "1")]));
        sheet.merge(Rule::new("a"), &decls(&[("c", "2"), ("d", "3")]));

        assert_eq!(sheet.get("a"), Some(&decls(&[("c", "1"), ("d", "3")])));
    }

    #[test]
    fn merge_empty_block_registers_rule() {
        let mut sheet = Stylesheet::new();
        sheet.merge(Rule::new("a"), &Declarations::new());
        assert!(sheet.contains("a"));
        assert!(sheet.get("a").unwrap().is_empty());
    }

    #[test]
    fn into_inner_returns_map() {
        let mut sheet = Stylesheet::new();
        sheet.merge(Rule::new("a"), &decls(&[("c", "1")]));

        let map = sheet.into_inner();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a"), Some(&decls(&[("c", "1")])));
    }

    #[test]
    fn owned_iteration_yields_every_rule() {
        let mut sheet = Stylesheet::new();
        sheet.merge(Rule::new(".b"), &decls(&[("d", "2")]));
        sheet.merge(Rule::new("a"), &decls(&[("c", "1")]));

        let mut rules: Vec<(Rule, Declarations)> = sheet.into_iter().collect();
        rules.sort_by(|x, y| x.0.cmp(&y.0));
        assert_eq!(
            rules,
            vec![
                (Rule::new(".b"), decls(&[("d", "2")])),
                (Rule::new("a"), decls(&[("c", "1")])),
            ]
        );
    }

    #[test]
    fn borrowed_iteration_matches_iter() {
        let mut sheet = Stylesheet::new();
        sheet.merge(Rule::new("a"), &Declarations::new());
        sheet.merge(Rule::new("#b"), &Declarations::new());

        let mut names: Vec<&str> = (&sheet).into_iter().map(|(r, _)| r.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["#b", "a"]);
    }

    #[test]
    fn rules_of_kind_filters() {
        let mut sheet = Stylesheet::new();
        sheet.merge(Rule::new(".a"), &Declarations::new());
        sheet.merge(Rule::new("#b"), &Declarations::new());
        sheet.merge(Rule::new("c"), &Declarations::new());

        let classes: Vec<_> = sheet.rules_of_kind(SelectorKind::Class).collect();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].0.as_str(), ".a");
    }
}
