//! Style objects: ordered declarations and nested selector blocks.

use indexmap::IndexMap;
use serde_json::Value;

/// A value inside a [`Style`]: either a declaration or a nested block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    /// A property value, e.g. `"block"` for `display`.
    Declaration(String),
    /// Styles scoped under the owning key's selector.
    Nested(Style),
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Declaration(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Declaration(value)
    }
}

impl From<Style> for StyleValue {
    fn from(style: Style) -> Self {
        StyleValue::Nested(style)
    }
}

/// An ordered mapping from property or selector to [`StyleValue`].
///
/// Keys holding declarations are CSS properties (camelCase is accepted and
/// hyphenated when rendered). Keys holding nested blocks are selectors,
/// where `&` stands for the class the style is registered under.
///
/// # Example
///
/// ```rust
/// use roomy::Style;
///
/// let style = Style::new()
///     .add("padding", "8px")
///     .add("&:hover", Style::new().add("color", "red"));
/// assert_eq!(style.len(), 2);
///
/// // the same style written as JSON
/// let from_json = Style::from(serde_json::json!({
///     "padding": "8px",
///     "&:hover": { "color": "red" },
/// }));
/// assert_eq!(style, from_json);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    entries: IndexMap<String, StyleValue>,
}

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, returning the updated style for chaining.
    ///
    /// Setting a key again replaces its value but keeps its position.
    pub fn add<V: Into<StyleValue>>(mut self, key: &str, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` in place.
    pub fn insert<V: Into<StyleValue>>(&mut self, key: &str, value: V) {
        self.entries.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merges `other` into this style; later values win, nested blocks
    /// under the same key are merged recursively.
    pub fn merge(&mut self, other: Style) {
        for (key, value) in other.entries {
            match (self.entries.get_mut(&key), value) {
                (Some(StyleValue::Nested(existing)), StyleValue::Nested(incoming)) => {
                    existing.merge(incoming);
                }
                (_, value) => {
                    self.entries.insert(key, value);
                }
            }
        }
    }

    /// Canonical text of this style, used to identify it in a style sheet.
    ///
    /// Keys and values are escaped, so distinct styles never share a body.
    pub(crate) fn body(&self) -> String {
        let mut out = String::new();
        self.write_body(&mut out);
        out
    }

    fn write_body(&self, out: &mut String) {
        for (key, value) in &self.entries {
            match value {
                StyleValue::Declaration(v) => {
                    push_escaped(out, key);
                    out.push(':');
                    push_escaped(out, v);
                    out.push(';');
                }
                StyleValue::Nested(style) => {
                    push_escaped(out, key);
                    out.push('{');
                    style.write_body(out);
                    out.push('}');
                }
            }
        }
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        if matches!(c, '\\' | ':' | ';' | '{' | '}') {
            out.push('\\');
        }
        out.push(c);
    }
}

impl FromIterator<(String, StyleValue)> for Style {
    fn from_iter<I: IntoIterator<Item = (String, StyleValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Builds a style from a JSON object.
///
/// Strings, numbers and booleans become declarations, objects become nested
/// blocks, and arrays of objects are merged in order. `null` entries are
/// dropped. A JSON array at the top level merges its objects; any other
/// non-object value yields an empty style.
impl From<Value> for Style {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => map
                .into_iter()
                .filter_map(|(key, value)| json_entry(value).map(|v| (key, v)))
                .collect(),
            Value::Array(items) => merge_all(items.into_iter().map(Style::from)),
            _ => Style::new(),
        }
    }
}

fn json_entry(value: Value) -> Option<StyleValue> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(StyleValue::Declaration(s)),
        Value::Number(n) => Some(StyleValue::Declaration(n.to_string())),
        Value::Bool(b) => Some(StyleValue::Declaration(b.to_string())),
        value @ (Value::Object(_) | Value::Array(_)) => {
            Some(StyleValue::Nested(Style::from(value)))
        }
    }
}

pub(crate) fn merge_all(styles: impl IntoIterator<Item = Style>) -> Style {
    styles.into_iter().fold(Style::new(), |mut acc, style| {
        acc.merge(style);
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_keeps_order() {
        let style = Style::new().add("b", "1").add("a", "2");
        let keys: Vec<_> = style.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_add_replaces_value_in_place() {
        let style = Style::new().add("a", "1").add("b", "2").add("a", "3");
        assert_eq!(style.len(), 2);
        assert_eq!(style.get("a"), Some(&StyleValue::from("3")));
        assert_eq!(style.iter().next().map(|(k, _)| k), Some("a"));
    }

    #[test]
    fn test_from_json_scalars_and_nesting() {
        let style = Style::from(json!({
            "flex": 1,
            "hidden": null,
            "& > * + *": { "marginLeft": "12px" },
        }));
        assert_eq!(style.get("flex"), Some(&StyleValue::from("1")));
        assert_eq!(style.get("hidden"), None);
        assert_eq!(
            style.get("& > * + *"),
            Some(&StyleValue::Nested(Style::new().add("marginLeft", "12px")))
        );
    }

    #[test]
    fn test_from_json_array_merges() {
        let style = Style::from(json!([
            { "color": "red", ".SM &": { "color": "blue" } },
            { "color": "green", ".SM &": { "padding": "0" } },
        ]));
        assert_eq!(style.get("color"), Some(&StyleValue::from("green")));
        let nested = Style::new().add("color", "blue").add("padding", "0");
        assert_eq!(style.get(".SM &"), Some(&StyleValue::Nested(nested)));
    }

    #[test]
    fn test_from_json_non_object() {
        assert!(Style::from(json!("display: none")).is_empty());
    }

    #[test]
    fn test_body_is_canonical() {
        let style = Style::new()
            .add("display", "none")
            .add(".MD &", Style::new().add("display", "block"));
        assert_eq!(style.body(), "display:none;.MD &{display:block;}");
    }

    #[test]
    fn test_body_escapes_separators() {
        let one = Style::new().add("content", "'a;color:red'");
        let two = Style::new().add("content", "'a").add("color", "red'");
        assert_ne!(one.body(), two.body());
        assert_eq!(one.body(), r"content:'a\;color\:red';");
        assert_eq!(
            Style::new().add("&:hover", Style::new()).body(),
            r"&\:hover{}"
        );
    }
}
