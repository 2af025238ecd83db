//! Style objects and the bundled style-sheet engine.
//!
//! - [`Style`] / [`StyleValue`]: Ordered declarations with nested selector blocks
//! - [`StyleEngine`]: The seam between style generation and a style sheet
//! - [`StyleSheet`]: An in-memory engine that renders CSS text
//! - [`MatchContext`]: Describes an element for [`StyleSheet::resolve`]
//! - [`cx`]: Class name composition

mod selector;
mod sheet;
mod value;

pub use selector::MatchContext;
pub use sheet::{cx, ClassName, ClassNaming, Rule, StyleEngine, StyleSheet};
pub use value::{Style, StyleValue};

pub(crate) use value::merge_all;
