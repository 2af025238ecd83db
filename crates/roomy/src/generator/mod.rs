//! Tier-scoped selector and style generation.
//!
//! Styles are scoped to a tier in one of two forms, see [`Scope`]:
//!
//! | Scope | Selector | Applies to |
//! |-------|----------|------------|
//! | `Container` | `&.SM` | the responsive container itself |
//! | `Descendant` | `.SM &` | elements nested inside the container |
//!
//! Everything here is pure: the same input always produces the same
//! selector, and the same class from a given [`StyleEngine`]. Once the class
//! is on an element, only the container's marker classes decide whether the
//! scoped rules apply.

mod cem;
mod display;

pub use cem::{container_rem, container_rem_root, spacing, SpacingValue, CEM_SCALE, CEM_VAR_NAME};
pub use display::{display, DisplayRule};

use serde_json::Value;

use crate::breakpoint::Breakpoint;
use crate::style::{merge_all, ClassName, Style, StyleEngine};

/// Where a tier-scoped style applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// On the container carrying the marker.
    Container,
    /// On elements nested under the container carrying the marker.
    Descendant,
}

impl Scope {
    /// The nested selector key scoping a style to `bp`.
    pub fn selector(self, bp: Breakpoint) -> String {
        match self {
            Scope::Container => container_selector(bp),
            Scope::Descendant => descendant_selector(bp),
        }
    }
}

/// Selector for styles on the responsive container itself.
///
/// ```rust
/// use roomy::{container_selector, Breakpoint};
///
/// assert_eq!(container_selector(Breakpoint::Sm), "&.SM");
/// ```
pub fn container_selector(bp: Breakpoint) -> String {
    format!("&{}", bp.selector())
}

/// Selector for styles on descendants of a responsive container.
///
/// ```rust
/// use roomy::{descendant_selector, Breakpoint};
///
/// assert_eq!(descendant_selector(Breakpoint::Lg), ".LG &");
/// ```
pub fn descendant_selector(bp: Breakpoint) -> String {
    format!("{} &", bp.selector())
}

/// Registers `style` scoped to `bp` on the container itself.
pub fn container_style<E: StyleEngine + ?Sized>(
    engine: &mut E,
    bp: Breakpoint,
    style: Style,
) -> ClassName {
    engine.css(&Style::new().add(&container_selector(bp), style))
}

/// Registers `style` scoped to `bp` on descendants of the container.
pub fn child_style<E: StyleEngine + ?Sized>(
    engine: &mut E,
    bp: Breakpoint,
    style: Style,
) -> ClassName {
    engine.css(&Style::new().add(&descendant_selector(bp), style))
}

/// Input to [`responsive_css`]: one style object or a list merged in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsiveStyle {
    Single(Style),
    List(Vec<Style>),
}

impl From<Style> for ResponsiveStyle {
    fn from(style: Style) -> Self {
        ResponsiveStyle::Single(style)
    }
}

impl From<Vec<Style>> for ResponsiveStyle {
    fn from(styles: Vec<Style>) -> Self {
        ResponsiveStyle::List(styles)
    }
}

impl From<Value> for ResponsiveStyle {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                ResponsiveStyle::List(items.into_iter().map(Style::from).collect())
            }
            other => ResponsiveStyle::Single(Style::from(other)),
        }
    }
}

/// Rewrites the tier keys of a mixed style object into descendant
/// selectors. Other keys pass through unchanged.
pub fn scope_tier_keys(style: Style) -> Style {
    style
        .iter()
        .map(|(key, value)| {
            let key = match Breakpoint::from_key(key) {
                Some(bp) => descendant_selector(bp),
                None => key.to_string(),
            };
            (key, value.clone())
        })
        .collect()
}

/// Registers a style object that mixes ordinary declarations with tier
/// blocks keyed by tier selector (`".MD"`, `".LG"`, ...).
///
/// # Example
///
/// ```rust
/// use roomy::{responsive_css, ClassNaming, StyleSheet};
/// use serde_json::json;
///
/// let mut sheet = StyleSheet::with_naming(ClassNaming::Sequential);
/// responsive_css(&mut sheet, json!({
///     "color": "red",
///     ".MD": { "background": "black" },
/// }));
/// assert_eq!(
///     sheet.to_css(),
///     ".css-0{color:red;}\n.MD .css-0{background:black;}"
/// );
/// ```
pub fn responsive_css<E, S>(engine: &mut E, styles: S) -> ClassName
where
    E: StyleEngine + ?Sized,
    S: Into<ResponsiveStyle>,
{
    let style = match styles.into() {
        ResponsiveStyle::Single(style) => scope_tier_keys(style),
        ResponsiveStyle::List(styles) => merge_all(styles.into_iter().map(scope_tier_keys)),
    };
    engine.css(&style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{ClassNaming, StyleSheet, StyleValue};
    use serde_json::json;

    fn sheet() -> StyleSheet {
        StyleSheet::with_naming(ClassNaming::Sequential)
    }

    #[test]
    fn test_scope_selectors() {
        assert_eq!(Scope::Container.selector(Breakpoint::Xs), "&.XS");
        assert_eq!(Scope::Descendant.selector(Breakpoint::Xl), ".XL &");
    }

    #[test]
    fn test_container_style() {
        let mut sheet = sheet();
        container_style(&mut sheet, Breakpoint::Md, Style::new().add("padding", "4px"));
        assert_eq!(sheet.to_css(), ".css-0.MD{padding:4px;}");
    }

    #[test]
    fn test_child_style() {
        let mut sheet = sheet();
        child_style(&mut sheet, Breakpoint::Sm, Style::new().add("color", "red"));
        assert_eq!(sheet.to_css(), ".SM .css-0{color:red;}");
    }

    #[test]
    fn test_scope_tier_keys_only_rewrites_tiers() {
        let style = scope_tier_keys(
            Style::new()
                .add("color", "red")
                .add(".SM", Style::new().add("color", "blue"))
                .add("SM", "not a tier")
                .add("&:hover", Style::new().add("color", "green")),
        );
        let keys: Vec<_> = style.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["color", ".SM &", "SM", "&:hover"]);
        assert_eq!(style.get("SM"), Some(&StyleValue::from("not a tier")));
    }

    #[test]
    fn test_responsive_css_list_merges() {
        let mut sheet = sheet();
        responsive_css(
            &mut sheet,
            json!([
                { "color": "red", ".LG": { "color": "green" } },
                { ".LG": { "fontWeight": "bold" } },
            ]),
        );
        assert_eq!(
            sheet.to_css(),
            ".css-0{color:red;}\n.LG .css-0{color:green;font-weight:bold;}"
        );
    }

    #[test]
    fn test_responsive_css_is_deterministic() {
        let mut sheet = StyleSheet::new();
        let a = responsive_css(&mut sheet, json!({ ".XL": { "color": "purple" } }));
        let b = child_style(&mut sheet, Breakpoint::Xl, Style::new().add("color", "purple"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_selector_syntax_ignores_thresholds() {
        // selectors only name tiers; any threshold table yields the same text
        let custom = crate::Breakpoints::new([0, 1, 2, 3, 4]).unwrap();
        assert_eq!(custom.min_width(Breakpoint::Md), 2);
        assert_eq!(descendant_selector(Breakpoint::Md), ".MD &");
        assert_eq!(container_selector(Breakpoint::Md), "&.MD");
    }
}
