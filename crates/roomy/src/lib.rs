//! # Roomy - Container Queries
//!
//! `roomy` lets elements respond to the width of the container they live in
//! rather than the width of the viewport.
//!
//! ## How it works
//!
//! 1. A [`ResponsiveObserver`] watches responsive containers through one host
//!    [`ResizeSource`]. Whenever a container resizes it toggles one marker
//!    class per satisfied tier (`XS`, `SM`, `MD`, `LG`, `XL`) on it.
//! 2. Styles are scoped to tiers with selectors such as `.MD &`, generated
//!    by [`display`], [`child_style`], [`responsive_css`] and friends, and
//!    registered with a [`StyleEngine`] that hands back class names.
//! 3. From then on the cascade does the rest; nothing re-renders.
//!
//! Tiers are nested: a container of width `W` carries the marker of every
//! tier whose threshold is `<= W`.
//!
//! ## Quick Start
//!
//! ```rust
//! use roomy::{
//!     cx, display, Breakpoint, Element, MatchContext, MemoryElement, MemoryResizeSource,
//!     ResponsiveObserver, StyleSheet,
//! };
//!
//! // styles: hidden by default, shown from MD up
//! let mut sheet = StyleSheet::new();
//! let label = cx([
//!     display(&mut sheet, "none"),
//!     display(&mut sheet, (Breakpoint::Md, "block")),
//! ]);
//!
//! // markers: one observer for every container
//! let mut observer = ResponsiveObserver::new(MemoryResizeSource::new());
//! let container = MemoryElement::new();
//! observer.register(container.clone());
//!
//! let batch = observer.source().entries([(&container, 700.0)]);
//! observer.on_resize(&batch);
//! assert_eq!(container.classes(), vec!["XS", "SM", "MD"]);
//!
//! let ctx = MatchContext::element(label.tokens()).inside(container.classes());
//! assert_eq!(sheet.resolve(&ctx, "display"), Some("block"));
//! ```
//!
//! ## Breakpoints
//!
//! The default thresholds are XS=0, SM=384, MD=576, LG=768, XL=960 pixels.
//! They can be overridden with [`Breakpoints::new`] or loaded from YAML or
//! JSON with [`Breakpoints::load`]; selectors never depend on them.

pub mod breakpoint;
mod config;
mod error;
pub mod generator;
pub mod observer;
pub mod style;
mod util;

pub use breakpoint::{is_breakpoint, Breakpoint, Breakpoints, Tiers, DEFAULT_THRESHOLDS};
pub use error::ConfigError;
pub use generator::{
    child_style, container_rem, container_rem_root, container_selector, container_style,
    descendant_selector, display, display as d, responsive_css, scope_tier_keys, spacing,
    DisplayRule, ResponsiveStyle, Scope, SpacingValue, CEM_SCALE, CEM_VAR_NAME,
};
pub use observer::{
    reconcile_markers, Element, MemoryElement, MemoryResizeSource, ResizeEntry, ResizeSource,
    ResponsiveObserver,
};
pub use style::{
    cx, ClassName, ClassNaming, MatchContext, Rule, Style, StyleEngine, StyleSheet, StyleValue,
};
pub use util::hyphenate_property;
