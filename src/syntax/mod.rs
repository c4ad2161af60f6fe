//! Syntax highlighting module
//!
//! This module provides the regex rule model and the engine that turns
//! content plus rules into plain and colored segments.

mod style;
mod rules;
mod highlighter;

pub use style::Color;
pub use rules::{RuleSet, SyntaxRule};
pub use highlighter::{Highlighter, Segment, SegmentKind};
