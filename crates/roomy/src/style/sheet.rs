//! The style-sheet engine: registers styles and hands back class names.

use std::fmt;
use std::hash::Hasher;

use indexmap::IndexSet;
use rustc_hash::{FxHashMap, FxHasher};

use super::selector::{ClassSelector, MatchContext};
use super::value::{Style, StyleValue};
use crate::util::{hyphenate_property, nest_selector, split_selector_list};

/// A class token, or a space separated list of tokens after [`cx`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName(String);

impl ClassName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Individual class tokens.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ClassName> for String {
    fn from(name: ClassName) -> Self {
        name.0
    }
}

/// Composes class tokens into one class list.
///
/// Duplicates are dropped and first-seen order is kept. Precedence between
/// the composed styles is decided by the cascade, never by argument order.
///
/// ```rust
/// use roomy::{cx, ClassName};
///
/// let a = ClassName::new("css-1");
/// let b = ClassName::new("css-2 css-1");
/// assert_eq!(cx([&a, &b]).as_str(), "css-1 css-2");
/// ```
pub fn cx<I, C>(names: I) -> ClassName
where
    I: IntoIterator<Item = C>,
    C: AsRef<str>,
{
    let mut tokens: IndexSet<String> = IndexSet::new();
    for name in names {
        tokens.extend(name.as_ref().split_whitespace().map(str::to_string));
    }
    ClassName(tokens.into_iter().collect::<Vec<_>>().join(" "))
}

/// Anything that turns a [`Style`] into a class name.
///
/// The generator functions are written against this trait so that a host
/// can plug in its own style-sheet engine. [`StyleSheet`] is the bundled
/// implementation.
pub trait StyleEngine {
    /// Registers `style` and returns the class that applies it.
    ///
    /// The same style must always yield the same class.
    fn css(&mut self, style: &Style) -> ClassName;
}

/// How [`StyleSheet`] names the classes it creates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClassNaming {
    /// `css-<hash of the style body>`.
    #[default]
    Hashed,
    /// `css-<n>`, numbered in registration order.
    Sequential,
}

/// A single rendered rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<(String, String)>,
    matchers: Vec<ClassSelector>,
}

impl Rule {
    fn new(selector: String, declarations: Vec<(String, String)>) -> Self {
        let matchers = split_selector_list(&selector)
            .into_iter()
            .filter_map(ClassSelector::parse)
            .collect();
        Self {
            selector,
            declarations,
            matchers,
        }
    }

    fn value_of(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.selector)?;
        for (property, value) in &self.declarations {
            write!(f, "{property}:{value};")?;
        }
        f.write_str("}")
    }
}

/// An in-memory style sheet.
///
/// Each registered style becomes one class; its declarations and nested
/// blocks are flattened into rules kept in registration order. Registering
/// an identical style again returns the existing class.
///
/// # Example
///
/// ```rust
/// use roomy::{ClassNaming, Style, StyleEngine, StyleSheet};
///
/// let mut sheet = StyleSheet::with_naming(ClassNaming::Sequential);
/// let class = sheet.css(&Style::new().add("marginBottom", "12px"));
/// assert_eq!(class.as_str(), "css-0");
/// assert_eq!(sheet.to_css(), ".css-0{margin-bottom:12px;}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    naming: ClassNaming,
    classes: FxHashMap<String, ClassName>,
    rules: Vec<Rule>,
}

impl StyleSheet {
    /// Creates an empty sheet with hashed class names.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_naming(naming: ClassNaming) -> Self {
        Self {
            naming,
            ..Self::default()
        }
    }

    /// Rules in registration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Renders every rule, one per line.
    pub fn to_css(&self) -> String {
        self.rules
            .iter()
            .map(Rule::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Resolves the value `property` takes on the element described by
    /// `ctx`.
    ///
    /// Among the rules whose selector matches, the most specific wins and
    /// later rules win ties. Only class selectors joined by descendant
    /// combinators are matched; rules using other selectors are skipped.
    ///
    /// ```rust
    /// use roomy::{display, Breakpoint, MatchContext, StyleSheet};
    ///
    /// let mut sheet = StyleSheet::new();
    /// let hidden = display(&mut sheet, "none");
    /// let from_md = display(&mut sheet, (Breakpoint::Md, "block"));
    /// let el = roomy::cx([&hidden, &from_md]);
    ///
    /// let narrow = MatchContext::element(el.tokens()).inside(["XS", "SM"]);
    /// let wide = MatchContext::element(el.tokens()).inside(["XS", "SM", "MD"]);
    /// assert_eq!(sheet.resolve(&narrow, "display"), Some("none"));
    /// assert_eq!(sheet.resolve(&wide, "display"), Some("block"));
    /// ```
    pub fn resolve(&self, ctx: &MatchContext, property: &str) -> Option<&str> {
        let mut best: Option<(usize, &str)> = None;
        for rule in &self.rules {
            let Some(value) = rule.value_of(property) else {
                continue;
            };
            let specificity = rule
                .matchers
                .iter()
                .filter(|m| m.matches(ctx.element_classes(), ctx.ancestors()))
                .map(ClassSelector::specificity)
                .max();
            if let Some(specificity) = specificity {
                if best.map_or(true, |(current, _)| specificity >= current) {
                    best = Some((specificity, value));
                }
            }
        }
        best.map(|(_, value)| value)
    }

    fn class_name_for(&self, body: &str) -> ClassName {
        match self.naming {
            ClassNaming::Hashed => {
                let mut hasher = FxHasher::default();
                hasher.write(body.as_bytes());
                ClassName(format!("css-{:x}", hasher.finish()))
            }
            ClassNaming::Sequential => ClassName(format!("css-{}", self.classes.len())),
        }
    }
}

impl StyleEngine for StyleSheet {
    fn css(&mut self, style: &Style) -> ClassName {
        let body = style.body();
        if let Some(existing) = self.classes.get(&body) {
            return existing.clone();
        }
        let class = self.class_name_for(&body);
        flatten(style, &format!(".{class}"), &mut self.rules);
        tracing::trace!(%class, rules = self.rules.len(), "registered style");
        self.classes.insert(body, class.clone());
        class
    }
}

fn flatten(style: &Style, selector: &str, rules: &mut Vec<Rule>) {
    let declarations: Vec<(String, String)> = style
        .iter()
        .filter_map(|(key, value)| match value {
            StyleValue::Declaration(v) => Some((hyphenate_property(key), v.clone())),
            StyleValue::Nested(_) => None,
        })
        .collect();
    if !declarations.is_empty() {
        rules.push(Rule::new(selector.to_string(), declarations));
    }

    for (key, value) in style.iter() {
        if let StyleValue::Nested(nested) = value {
            flatten(nested, &nest_selector(selector, key), rules);
        }
    }
}
