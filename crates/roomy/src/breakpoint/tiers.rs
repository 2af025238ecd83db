//! Sets of satisfied tiers.

use std::fmt;

use bitflags::bitflags;

use super::Breakpoint;

bitflags! {
    /// A set of [`Breakpoint`] tiers, one bit per tier.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[must_use]
    pub struct Tiers: u8 {
        const XS = 1;
        const SM = 2;
        const MD = 4;
        const LG = 8;
        const XL = 16;
    }
}

impl Tiers {
    /// Returns true if `bp` is in the set.
    pub fn has(self, bp: Breakpoint) -> bool {
        self.contains(bp.flag())
    }

    /// Adds `bp` to the set, returning the updated set.
    pub fn with(self, bp: Breakpoint) -> Self {
        self | bp.flag()
    }

    /// Tiers in the set, in ascending order.
    pub fn breakpoints(self) -> impl Iterator<Item = Breakpoint> {
        Breakpoint::ALL.into_iter().filter(move |bp| self.has(*bp))
    }

    /// The largest tier in the set.
    pub fn largest(self) -> Option<Breakpoint> {
        self.breakpoints().last()
    }

    /// Marker class names of the tiers in the set, in ascending order.
    pub fn class_names(self) -> Vec<&'static str> {
        self.breakpoints().map(Breakpoint::class_name).collect()
    }
}

impl FromIterator<Breakpoint> for Tiers {
    fn from_iter<I: IntoIterator<Item = Breakpoint>>(iter: I) -> Self {
        iter.into_iter().fold(Tiers::empty(), Tiers::with)
    }
}

impl From<Breakpoint> for Tiers {
    fn from(bp: Breakpoint) -> Self {
        bp.flag()
    }
}

impl fmt::Display for Tiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.class_names().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_from_iter() {
        let tiers: Tiers = [Breakpoint::Xs, Breakpoint::Md].into_iter().collect();
        assert!(tiers.has(Breakpoint::Xs));
        assert!(tiers.has(Breakpoint::Md));
        assert!(!tiers.has(Breakpoint::Sm));
        assert_eq!(tiers, Tiers::XS | Tiers::MD);
    }

    #[test]
    fn test_tiers_breakpoints_ascending() {
        let tiers = Tiers::XL | Tiers::XS | Tiers::LG;
        let bps: Vec<_> = tiers.breakpoints().collect();
        assert_eq!(bps, vec![Breakpoint::Xs, Breakpoint::Lg, Breakpoint::Xl]);
        assert_eq!(tiers.largest(), Some(Breakpoint::Xl));
    }

    #[test]
    fn test_tiers_empty() {
        assert_eq!(Tiers::empty().largest(), None);
        assert_eq!(Tiers::empty().to_string(), "{}");
    }

    #[test]
    fn test_tiers_display() {
        assert_eq!((Tiers::XS | Tiers::SM).to_string(), "{XS, SM}");
    }
}
