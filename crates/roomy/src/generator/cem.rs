//! The container rem (`cem`) unit.
//!
//! `--cem` is a custom property whose value follows the tier of the
//! enclosing responsive container, so lengths written with [`spacing`]
//! scale with the container instead of the viewport.

use std::fmt;

use super::Scope;
use crate::breakpoint::Breakpoint;
use crate::style::{ClassName, Style, StyleEngine};

/// Name of the container rem custom property, without the leading `--`.
pub const CEM_VAR_NAME: &str = "cem";

/// `--cem` value per tier.
pub const CEM_SCALE: [(Breakpoint, &str); 5] = [
    (Breakpoint::Xs, "0.5rem"),
    (Breakpoint::Sm, "1rem"),
    (Breakpoint::Md, "1.5rem"),
    (Breakpoint::Lg, "2rem"),
    (Breakpoint::Xl, "2.5rem"),
];

fn cem_style(scope: Scope) -> Style {
    let var = format!("--{CEM_VAR_NAME}");
    CEM_SCALE
        .iter()
        .fold(Style::new(), |style, (bp, value)| match bp {
            // base tier is the unconditional default
            Breakpoint::Xs => style.add(&var, *value),
            _ => style.add(&scope.selector(*bp), Style::new().add(&var, *value)),
        })
}

/// Registers a class declaring `--cem` for an element nested anywhere
/// inside a responsive container.
pub fn container_rem_root<E: StyleEngine + ?Sized>(engine: &mut E) -> ClassName {
    engine.css(&cem_style(Scope::Descendant))
}

/// Registers a class declaring `--cem` on the responsive container itself.
pub fn container_rem<E: StyleEngine + ?Sized>(engine: &mut E) -> ClassName {
    engine.css(&cem_style(Scope::Container))
}

/// One position of a [`spacing`] shorthand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpacingValue {
    /// A multiple of `--cem`.
    Units(f64),
    Auto,
}

impl From<f64> for SpacingValue {
    fn from(n: f64) -> Self {
        SpacingValue::Units(n)
    }
}

impl From<i32> for SpacingValue {
    fn from(n: i32) -> Self {
        SpacingValue::Units(f64::from(n))
    }
}

impl fmt::Display for SpacingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpacingValue::Auto => f.write_str("auto"),
            SpacingValue::Units(n) if *n == 0.0 => f.write_str("0"),
            SpacingValue::Units(n) => write!(f, "calc({n} * var(--{CEM_VAR_NAME}))"),
        }
    }
}

/// Builds a length shorthand (for `padding`, `margin`, ...) in cem units.
///
/// Takes up to four values; any beyond the fourth are ignored.
///
/// ```rust
/// use roomy::{spacing, SpacingValue};
///
/// assert_eq!(spacing(&[2.into()]), "calc(2 * var(--cem))");
/// assert_eq!(
///     spacing(&[1.into(), SpacingValue::Auto]),
///     "calc(1 * var(--cem)) auto"
/// );
/// ```
pub fn spacing(values: &[SpacingValue]) -> String {
    values
        .iter()
        .take(4)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
