//! Earliest-start-wins highlighting engine
//!
//! Walks the content left to right. At each step every rule is searched
//! from the cursor and the match starting soonest is colored; the text
//! skipped to reach it is emitted as plain.

use super::rules::RuleSet;
use super::style::Color;

/// How a segment should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Plain,
    Colored(Color),
}

/// A contiguous, non-empty byte range of the content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Byte offset where this segment starts (inclusive)
    pub start: usize,
    /// Byte offset where this segment ends (exclusive)
    pub end: usize,
    pub kind: SegmentKind,
}

impl Segment {
    pub fn plain(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            kind: SegmentKind::Plain,
        }
    }

    pub fn colored(start: usize, end: usize, color: Color) -> Self {
        Self {
            start,
            end,
            kind: SegmentKind::Colored(color),
        }
    }

    /// Slice of `content` covered by this segment
    pub fn text<'a>(&self, content: &'a str) -> &'a str {
        &content[self.start..self.end]
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Lazy segment stream over one piece of content
///
/// Yields segments covering the content exactly once, in order.
pub struct Highlighter<'a> {
    content: &'a str,
    rules: &'a RuleSet,
    /// Start of unprocessed content
    cursor: usize,
    /// Colored segment queued behind a plain gap
    pending: Option<Segment>,
}

impl<'a> Highlighter<'a> {
    pub fn new(content: &'a str, rules: &'a RuleSet) -> Self {
        Self {
            content,
            rules,
            cursor: 0,
            pending: None,
        }
    }
}

impl Iterator for Highlighter<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if let Some(segment) = self.pending.take() {
            return Some(segment);
        }

        let len = self.content.len();
        if self.cursor >= len {
            return None;
        }

        let pos = self.cursor;
        match self.rules.earliest_match(self.content, pos) {
            None => {
                self.cursor = len;
                Some(Segment::plain(pos, len))
            }
            Some((start, end, rule)) => {
                // find_at never returns empty matches, so end > start >= pos
                self.cursor = end;
                let colored = Segment::colored(start, end, rule.color);
                if start > pos {
                    self.pending = Some(colored);
                    Some(Segment::plain(pos, start))
                } else {
                    Some(colored)
                }
            }
        }
    }
}
