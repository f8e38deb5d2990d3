//! Source text access and search-window slicing.
//!
//! A [`SearchWindow`] is the span of text between the end of the previous
//! syntactic element and the start of a declaration's name. [`SourceText`]
//! slices that span out of the file irrespective of line boundaries.

use crate::error::CheckError;

/// A location in source text.
///
/// Lines are 1-indexed; columns are 0-indexed character offsets within the
/// line. Positions order lexicographically by (line, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: usize,
    /// Character offset within the line (0-indexed).
    pub column: usize,
}

impl Position {
    /// The absolute start of a file.
    pub const FILE_START: Self = Self { line: 1, column: 0 };

    /// Creates a position.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// The closed text range scanned for a marker comment.
///
/// `end` is always the start of the declaration's name token; `start` is
/// derived from a point strictly before the declaration's modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    /// Start bound (inclusive).
    pub start: Position,
    /// End bound (inclusive of the character at this position).
    pub end: Position,
}

impl SearchWindow {
    /// Creates a window, enforcing `start <= end`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::WindowOrder`] when the bounds are inverted,
    /// which indicates a position invariant violation upstream.
    pub fn new(start: Position, end: Position) -> Result<Self, CheckError> {
        if start > end {
            return Err(CheckError::WindowOrder { start, end });
        }
        Ok(Self { start, end })
    }
}

/// A source file as an ordered sequence of lines.
#[derive(Debug)]
pub struct SourceText {
    lines: Vec<String>,
}

impl SourceText {
    /// Splits raw source into lines.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self {
            lines: source.lines().map(ToOwned::to_owned).collect(),
        }
    }

    /// Returns the line with the given 1-indexed number.
    #[must_use]
    pub fn line(&self, number: usize) -> Option<&str> {
        self.lines.get(number.checked_sub(1)?).map(String::as_str)
    }

    /// Converts a 0-indexed byte column (as reported by tree-sitter) into a
    /// character column on the given line. Saturates at the line length.
    #[must_use]
    pub fn char_column(&self, line: usize, byte_column: usize) -> usize {
        self.line(line).map_or(0, |l| {
            l.char_indices().take_while(|(i, _)| *i < byte_column).count()
        })
    }

    /// Extracts the exact substring a window covers.
    ///
    /// Lines `start.line..=end.line` are joined with `\n`, then
    /// `start.column` characters are dropped from the front and
    /// `(len(last_line) - 1) - end.column` characters from the back, so the
    /// character at the end position (the first character of the name)
    /// stays inside the slice.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::SliceBounds`] when either trim amount is
    /// negative or exceeds the joined text, which indicates a position
    /// computed outside the actual line bounds.
    pub fn slice(&self, window: &SearchWindow) -> Result<String, CheckError> {
        let SearchWindow { start, end } = *window;

        let mut joined = String::new();
        for number in start.line..=end.line {
            let line = self.line(number).ok_or_else(|| {
                CheckError::SliceBounds(format!("line {number} beyond end of file"))
            })?;
            joined.push_str(line);
            if number < end.line {
                joined.push('\n');
            }
        }

        let last_len = self.line(end.line).map_or(0, |l| l.chars().count());
        let back = last_len
            .checked_sub(1)
            .and_then(|max| max.checked_sub(end.column))
            .ok_or_else(|| {
                CheckError::SliceBounds(format!(
                    "column {} beyond line {} (length {last_len})",
                    end.column, end.line
                ))
            })?;

        let front = start.column;
        let total = joined.chars().count();
        let keep = total.checked_sub(front).and_then(|n| n.checked_sub(back));
        let Some(keep) = keep else {
            return Err(CheckError::SliceBounds(format!(
                "window {window:?} trims exceed joined length {total}"
            )));
        };

        Ok(joined.chars().skip(front).take(keep).collect())
    }
}
