//! Threshold table for container width tiers.

use serde::{Deserialize, Serialize};

use super::{Breakpoint, Tiers};
use crate::error::ConfigError;

/// Minimum container widths, in pixels, for XS, SM, MD, LG and XL.
pub const DEFAULT_THRESHOLDS: [u32; 5] = [0, 384, 576, 768, 960];

/// Maps each [`Breakpoint`] to the minimum container width that satisfies it.
///
/// Thresholds are strictly ascending in tier order. The table can be
/// overridden at construction time; the selector syntax produced by the
/// style generator does not depend on it.
///
/// # Example
///
/// ```rust
/// use roomy::{Breakpoint, Breakpoints, Tiers};
///
/// let table = Breakpoints::default();
/// assert_eq!(table.min_width(Breakpoint::Sm), 384);
/// assert_eq!(table.satisfied(400.0), Tiers::XS | Tiers::SM);
///
/// let compact = Breakpoints::new([0, 200, 300, 400, 500]).unwrap();
/// assert_eq!(compact.largest(450.0), Some(Breakpoint::Lg));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ThresholdConfig", into = "ThresholdConfig")]
pub struct Breakpoints {
    thresholds: [u32; 5],
}

impl Breakpoints {
    /// Creates a table from thresholds given in tier order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotAscending`] if any threshold is not strictly
    /// greater than the one before it.
    pub fn new(thresholds: [u32; 5]) -> Result<Self, ConfigError> {
        for pair in Breakpoint::ALL.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            let (lower_width, upper_width) =
                (thresholds[lower.index()], thresholds[upper.index()]);
            if upper_width <= lower_width {
                return Err(ConfigError::NotAscending {
                    lower,
                    lower_width,
                    upper,
                    upper_width,
                });
            }
        }
        if thresholds[0] != 0 {
            tracing::debug!(
                xs = thresholds[0],
                "base tier threshold is not zero, narrow containers satisfy no tier"
            );
        }
        Ok(Self { thresholds })
    }

    /// Minimum width for `bp`.
    pub fn min_width(&self, bp: Breakpoint) -> u32 {
        self.thresholds[bp.index()]
    }

    /// Thresholds in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, u32)> + '_ {
        Breakpoint::ALL
            .into_iter()
            .map(move |bp| (bp, self.min_width(bp)))
    }

    /// Returns true if a container of `width` satisfies `bp`.
    ///
    /// The lower bound is inclusive. Negative and NaN widths are treated as
    /// zero; an infinite width satisfies every tier.
    pub fn is_satisfied(&self, bp: Breakpoint, width: f64) -> bool {
        normalize_width(width) >= f64::from(self.min_width(bp))
    }

    /// Every tier satisfied by a container of `width`.
    pub fn satisfied(&self, width: f64) -> Tiers {
        self.iter()
            .filter(|(bp, _)| self.is_satisfied(*bp, width))
            .map(|(bp, _)| bp)
            .collect()
    }

    /// The largest tier satisfied by a container of `width`.
    pub fn largest(&self, width: f64) -> Option<Breakpoint> {
        self.satisfied(width).largest()
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            thresholds: DEFAULT_THRESHOLDS,
        }
    }
}

pub(crate) fn normalize_width(width: f64) -> f64 {
    if width.is_nan() || width < 0.0 {
        0.0
    } else {
        width
    }
}

/// Serialized form of [`Breakpoints`].
///
/// Missing tiers fall back to [`DEFAULT_THRESHOLDS`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThresholdConfig {
    xs: u32,
    sm: u32,
    md: u32,
    lg: u32,
    xl: u32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Breakpoints::default().into()
    }
}

impl TryFrom<ThresholdConfig> for Breakpoints {
    type Error = ConfigError;

    fn try_from(c: ThresholdConfig) -> Result<Self, Self::Error> {
        Breakpoints::new([c.xs, c.sm, c.md, c.lg, c.xl])
    }
}

impl From<Breakpoints> for ThresholdConfig {
    fn from(table: Breakpoints) -> Self {
        let [xs, sm, md, lg, xl] = table.thresholds;
        Self { xs, sm, md, lg, xl }
    }
}
