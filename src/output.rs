//! Segment output using crossterm

use std::io::Write;

use crossterm::{
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use crate::error::Result;
use crate::syntax::{Color, Highlighter, RuleSet, Segment, SegmentKind};

/// Destination for highlighted text
///
/// Passed explicitly to [`render`] so tests can capture output instead
/// of touching the process terminal.
pub trait Styler {
    /// Write text in the default style
    fn write_plain(&mut self, text: &str) -> Result<()>;

    /// Write text in `color`, leaving no color active afterwards
    fn write_colored(&mut self, color: Color, text: &str) -> Result<()>;

    /// Restore default styling and flush
    fn finish(&mut self) -> Result<()>;
}

/// Styler writing ANSI escape sequences to any writer
///
/// Each segment is flushed as soon as it is written.
pub struct TerminalStyler<W: Write> {
    out: W,
}

impl<W: Write> TerminalStyler<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write a line of unstyled text
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        queue!(self.out, Print(text), Print("\n"))?;
        Ok(())
    }
}

impl<W: Write> Styler for TerminalStyler<W> {
    fn write_plain(&mut self, text: &str) -> Result<()> {
        queue!(self.out, ResetColor, Print(text))?;
        self.out.flush()?;
        Ok(())
    }

    fn write_colored(&mut self, color: Color, text: &str) -> Result<()> {
        match color.foreground() {
            Some(fg) => {
                queue!(self.out, SetForegroundColor(fg), Print(text), ResetColor)?;
            }
            None => {
                queue!(self.out, SetAttribute(Attribute::Reset), Print(text))?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        queue!(self.out, SetAttribute(Attribute::Reset))?;
        self.out.flush()?;
        Ok(())
    }
}

/// Highlight `content` with `rules`, writing each segment as it is produced
///
/// Returns the number of segments written. The styler is finished even
/// when a write fails, so styling is reset on the error path too.
pub fn render<S: Styler>(content: &str, rules: &RuleSet, styler: &mut S) -> Result<usize> {
    let mut count = 0;
    for segment in Highlighter::new(content, rules) {
        if let Err(e) = write_segment(styler, content, segment) {
            let _ = styler.finish();
            return Err(e);
        }
        count += 1;
    }
    styler.finish()?;
    Ok(count)
}

fn write_segment<S: Styler>(styler: &mut S, content: &str, segment: Segment) -> Result<()> {
    debug_assert!(!segment.is_empty());
    let text = segment.text(content);
    match segment.kind {
        SegmentKind::Plain => styler.write_plain(text),
        SegmentKind::Colored(color) => styler.write_colored(color, text),
    }
}
