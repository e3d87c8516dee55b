use crate::foundation::error::{KeyframeError, KeyframeResult};

#[derive(Clone, Copy, Debug)]
struct Line<'a> {
    number: usize, // 1-based, counts dropped blank lines too
    raw: &'a str,
}

/// Forward-only reader over the non-empty lines of a text.
///
/// `current` yields the trimmed content while `indent` inspects the raw line, so structure
/// (leading tabs) survives even though the content is split on tabs after trimming.
#[derive(Clone, Debug)]
pub struct LineCursor<'a> {
    lines: Vec<Line<'a>>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Split `text` into lines, dropping only lines that are literally empty.
    pub fn new(text: &'a str) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .filter(|(_, raw)| !raw.is_empty())
            .map(|(i, raw)| Line { number: i + 1, raw })
            .collect();
        Self { lines, pos: 0 }
    }

    /// True once the cursor has moved past the last line.
    pub fn finished(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// Current line with surrounding whitespace stripped.
    pub fn current(&self) -> KeyframeResult<&'a str> {
        self.lines
            .get(self.pos)
            .map(|l| l.raw.trim())
            .ok_or_else(|| KeyframeError::unexpected_end(format!("no line {}", self.line_number())))
    }

    /// Move to the next line.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }

    /// Leading tab count of the current raw line; 0 once finished.
    pub fn indent(&self) -> usize {
        self.lines
            .get(self.pos)
            .map_or(0, |l| l.raw.bytes().take_while(|&b| b == b'\t').count())
    }

    /// 1-based line number of the current line, or one past the last line once finished.
    pub fn line_number(&self) -> usize {
        match self.lines.get(self.pos) {
            Some(l) => l.number,
            None => self.lines.last().map_or(1, |l| l.number + 1),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/format/cursor.rs"]
mod tests;
