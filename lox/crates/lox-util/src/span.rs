//! Span module - Source location tracking.
//!
//! A [`Span`] pairs a byte range in the scanned buffer with the 1-based line
//! on which that range starts.
//!
//! # Examples
//!
//! ```
//! use lox_util::span::Span;
//!
//! let span = Span::new(4, 7, 1);
//! assert_eq!(span.slice("var abc = 1;"), Some("abc"));
//! ```

use std::fmt;

/// Source location span
///
/// Offsets are byte offsets into the source buffer and always lie on UTF-8
/// character boundaries when produced by the lexer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    /// Start byte offset in source (inclusive)
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number of `start` (1-based)
    pub line: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use lox_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number of the start offset (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32) -> Self {
        Self { start, end, line }
    }

    /// Create an empty span at a single offset
    ///
    /// # Examples
    ///
    /// ```
    /// use lox_util::span::Span;
    ///
    /// let span = Span::point(12, 3);
    /// assert!(span.is_empty());
    /// ```
    #[inline]
    pub const fn point(offset: usize, line: u32) -> Self {
        Self::new(offset, offset, line)
    }

    /// Length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the text this span covers in `source`.
    ///
    /// Returns `None` when the span is out of bounds or does not fall on
    /// character boundaries of `source`.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}..{}", self.line, self.start, self.end)
    }
}
