//! Source locations for diagnostics

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chars;

/// A position inside a source text, with the line/column pair derived from
/// the byte offset. Lines and columns are zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseLocation {
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl ParseLocation {
    pub fn new(offset: usize, line: usize, col: usize) -> Self {
        ParseLocation { offset, line, col }
    }

    /// Compute the location of `offset` within `source` by counting newlines
    /// up to (but not including) that offset.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut line = 0;
        let mut col = 0;
        for (idx, ch) in source.char_indices() {
            if idx >= offset {
                break;
            }
            if ch == chars::NEWLINE {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        ParseLocation::new(offset, line, col)
    }
}

impl fmt::Display for ParseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
