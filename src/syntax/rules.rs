//! Pattern rules for syntax highlighting
//!
//! A rule pairs a compiled regex with the color its matches are
//! rendered in. Rules are kept in configuration order; earlier rules
//! win ties between matches starting at the same offset.

use regex::Regex;

use super::style::Color;
use crate::error::{HighlightError, Result};

/// A single named pattern rule
#[derive(Debug, Clone)]
pub struct SyntaxRule {
    /// Rule name from the configuration (informational)
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Color assigned to matches
    pub color: Color,
}

impl SyntaxRule {
    /// Compile a rule, reporting the rule name on a bad pattern
    pub fn new(name: &str, pattern: &str, color: Color) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| HighlightError::InvalidPattern {
            rule: name.to_string(),
            source,
        })?;
        Ok(Self {
            name: name.to_string(),
            pattern,
            color,
        })
    }

    /// Find the first non-empty match starting at or after `start`
    ///
    /// The search runs over the whole text so anchors and word
    /// boundaries see the real surrounding context. Empty matches are
    /// stepped over one character at a time.
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        let mut pos = start;
        while pos < text.len() {
            let m = self.pattern.find_at(text, pos)?;
            if !m.is_empty() {
                return Some((m.start(), m.end()));
            }
            pos = next_char_boundary(text, m.start());
        }
        None
    }
}

/// Byte offset of the char following the one at `pos`
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| pos + c.len_utf8())
}

/// Ordered collection of rules for one highlighting pass
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<SyntaxRule>,
}

impl RuleSet {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SyntaxRule> {
        self.rules.iter()
    }

    /// Earliest non-empty match at or after `pos` across all rules
    ///
    /// Ties on start offset go to the rule registered first.
    pub fn earliest_match(&self, text: &str, pos: usize) -> Option<(usize, usize, &SyntaxRule)> {
        let mut best: Option<(usize, usize, &SyntaxRule)> = None;
        for rule in &self.rules {
            if let Some((start, end)) = rule.find_at(text, pos) {
                if best.map_or(true, |(best_start, _, _)| start < best_start) {
                    best = Some((start, end, rule));
                }
            }
        }
        best
    }
}

impl FromIterator<SyntaxRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = SyntaxRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
