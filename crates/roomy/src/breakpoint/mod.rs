//! Breakpoint registry.
//!
//! This module provides the tier vocabulary shared by the observer and the
//! style generator:
//!
//! - [`Breakpoint`]: The five fixed tiers, smallest to largest
//! - [`Tiers`]: A set of tiers, as reported by classification
//! - [`Breakpoints`]: The threshold table mapping each tier to a minimum width
//!
//! A container of width `W` satisfies tier `T` iff `W >= min_width(T)`. Since
//! thresholds are strictly ascending, satisfied tiers are always nested: a
//! container that satisfies `MD` also satisfies `SM` and `XS`.

mod table;
mod tiers;

pub use table::{Breakpoints, DEFAULT_THRESHOLDS};
pub use tiers::Tiers;

use std::fmt;

/// A named container width tier.
///
/// Tiers are ordered from the smallest to the largest threshold, so the
/// derived `Ord` matches threshold order for every valid [`Breakpoints`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// Every tier, in ascending threshold order.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Position of this tier in [`Breakpoint::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The marker class toggled on a container that satisfies this tier.
    ///
    /// ```rust
    /// use roomy::Breakpoint;
    ///
    /// assert_eq!(Breakpoint::Md.class_name(), "MD");
    /// ```
    pub const fn class_name(self) -> &'static str {
        match self {
            Breakpoint::Xs => "XS",
            Breakpoint::Sm => "SM",
            Breakpoint::Md => "MD",
            Breakpoint::Lg => "LG",
            Breakpoint::Xl => "XL",
        }
    }

    /// The class selector matching a container that satisfies this tier.
    ///
    /// This is also the key that marks a tier block inside a mixed style
    /// object (see [`crate::responsive_css`]).
    pub const fn selector(self) -> &'static str {
        match self {
            Breakpoint::Xs => ".XS",
            Breakpoint::Sm => ".SM",
            Breakpoint::Md => ".MD",
            Breakpoint::Lg => ".LG",
            Breakpoint::Xl => ".XL",
        }
    }

    /// Looks up the tier whose selector key is exactly `key`.
    ///
    /// Anything else, including bare class names like `"MD"` or ordinary
    /// style properties, is not a tier and yields `None`.
    ///
    /// ```rust
    /// use roomy::Breakpoint;
    ///
    /// assert_eq!(Breakpoint::from_key(".LG"), Some(Breakpoint::Lg));
    /// assert_eq!(Breakpoint::from_key("color"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Breakpoint> {
        Breakpoint::ALL.into_iter().find(|bp| bp.selector() == key)
    }

    pub(crate) const fn flag(self) -> Tiers {
        match self {
            Breakpoint::Xs => Tiers::XS,
            Breakpoint::Sm => Tiers::SM,
            Breakpoint::Md => Tiers::MD,
            Breakpoint::Lg => Tiers::LG,
            Breakpoint::Xl => Tiers::XL,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Determines whether `key` is a valid tier key.
pub fn is_breakpoint(key: &str) -> bool {
    Breakpoint::from_key(key).is_some()
}
