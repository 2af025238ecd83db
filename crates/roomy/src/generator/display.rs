//! Toggling `display` per tier.

use super::descendant_selector;
use crate::breakpoint::Breakpoint;
use crate::style::{ClassName, Style, StyleEngine};

/// A `display` declaration, unconditional or scoped to a tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayRule {
    /// Applies at every container width.
    Always(String),
    /// Applies inside containers that satisfy the tier.
    At(Breakpoint, String),
}

impl DisplayRule {
    pub fn style(&self) -> Style {
        match self {
            DisplayRule::Always(value) => Style::new().add("display", value.as_str()),
            DisplayRule::At(bp, value) => Style::new().add(
                &descendant_selector(*bp),
                Style::new().add("display", value.as_str()),
            ),
        }
    }
}

impl From<&str> for DisplayRule {
    fn from(value: &str) -> Self {
        DisplayRule::Always(value.to_string())
    }
}

impl From<String> for DisplayRule {
    fn from(value: String) -> Self {
        DisplayRule::Always(value)
    }
}

impl From<(Breakpoint, &str)> for DisplayRule {
    fn from((bp, value): (Breakpoint, &str)) -> Self {
        DisplayRule::At(bp, value.to_string())
    }
}

impl From<(Breakpoint, String)> for DisplayRule {
    fn from((bp, value): (Breakpoint, String)) -> Self {
        DisplayRule::At(bp, value)
    }
}

/// Registers a class that sets `display` for descendants of a responsive
/// container.
///
/// The unconditional form carries one class of specificity and the tiered
/// form two, so composing them with [`cx`](crate::cx) gives the same result
/// in either order.
///
/// # Example
///
/// ```rust
/// use roomy::{cx, display, Breakpoint, StyleSheet};
///
/// let mut sheet = StyleSheet::new();
///
/// // only in XS and SM containers
/// let compact_only = display(&mut sheet, (Breakpoint::Md, "none"));
///
/// // only in LG and XL containers
/// let wide_only = cx([
///     display(&mut sheet, "none"),
///     display(&mut sheet, (Breakpoint::Lg, "block")),
/// ]);
/// # let _ = (compact_only, wide_only);
/// ```
pub fn display<E, R>(engine: &mut E, rule: R) -> ClassName
where
    E: StyleEngine + ?Sized,
    R: Into<DisplayRule>,
{
    engine.css(&rule.into().style())
}
