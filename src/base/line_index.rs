//! Byte-offset to line/column conversion
//!
//! Tokens carry byte ranges ([`TextRange`]); diagnostics want line/column.
//! [`LineIndex`] is built once per source document and answers the conversion
//! in O(log lines).

use text_size::{TextRange, TextSize};

use super::position::{Position, Span};

/// A line/column pair (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Maps byte offsets into a source document to line/column positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of the start of each line. `newlines[0]` is always 0.
    newlines: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    /// Build the index for a source document.
    pub fn new(text: &str) -> Self {
        let mut newlines = vec![TextSize::new(0)];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                newlines.push(TextSize::new(i as u32 + 1));
            }
        }
        Self {
            newlines,
            len: TextSize::of(text),
        }
    }

    /// Number of lines in the document (at least 1, even for empty input).
    pub fn line_count(&self) -> usize {
        self.newlines.len()
    }

    /// Convert a byte offset to a line/column pair.
    ///
    /// The column is a byte column within the line. Offsets past the end of
    /// the document clamp to the last line.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self
            .newlines
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.newlines[line];
        LineCol {
            line: line as u32,
            col: (offset - line_start).into(),
        }
    }

    /// Convert a line/column pair back to a byte offset, if it is in bounds.
    pub fn offset(&self, line_col: LineCol) -> Option<TextSize> {
        let line_start = *self.newlines.get(line_col.line as usize)?;
        let offset = line_start + TextSize::new(line_col.col);
        (offset <= self.len).then_some(offset)
    }

    /// Convert a byte range to a line/column [`Span`] for diagnostics.
    pub fn span(&self, range: TextRange) -> Span {
        let start = self.line_col(range.start());
        let end = self.line_col(range.end());
        Span::new(
            Position::new(start.line as usize, start.col as usize),
            Position::new(end.line as usize, end.col as usize),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_single_line() {
        let index = LineIndex::new("<br/>");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_col(TextSize::new(0)), LineCol { line: 0, col: 0 });
        assert_eq!(index.line_col(TextSize::new(4)), LineCol { line: 0, col: 4 });
    }

    #[test]
    fn test_line_col_multi_line() {
        let index = LineIndex::new("<p>\nhello\n</p>");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_col(TextSize::new(4)), LineCol { line: 1, col: 0 });
        assert_eq!(index.line_col(TextSize::new(9)), LineCol { line: 1, col: 5 });
        assert_eq!(index.line_col(TextSize::new(10)), LineCol { line: 2, col: 0 });
    }

    #[test]
    fn test_offset_roundtrip() {
        let text = "a\nbc\ndef";
        let index = LineIndex::new(text);
        for i in 0..=text.len() as u32 {
            let offset = TextSize::new(i);
            assert_eq!(index.offset(index.line_col(offset)), Some(offset));
        }
    }

    #[test]
    fn test_offset_out_of_bounds() {
        let index = LineIndex::new("ab");
        assert_eq!(index.offset(LineCol { line: 1, col: 0 }), None);
        assert_eq!(index.offset(LineCol { line: 0, col: 3 }), None);
    }

    #[test]
    fn test_span_conversion() {
        let index = LineIndex::new("x\n<br/>\ny");
        let span = index.span(TextRange::new(TextSize::new(2), TextSize::new(7)));
        assert_eq!(span, Span::from_coords(1, 0, 1, 5));
    }

    #[test]
    fn test_empty_input() {
        let index = LineIndex::new("");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_col(TextSize::new(0)), LineCol { line: 0, col: 0 });
    }
}
