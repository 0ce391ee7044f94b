//! Byte ranges in template source text.

use std::ops::Range;

/// A half-open byte range `start..end` into the source of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Create a span covering the character at `offset`, clamped to a source
    /// of `source_len` bytes.
    pub fn at(offset: usize, source_len: usize) -> Self {
        let start = offset.min(source_len);
        let end = (start + 1).min(source_len);
        Self::new(start..end)
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
