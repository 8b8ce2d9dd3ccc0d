//! Byte ranges into parsed source text.

use std::ops::Range;

/// A half-open byte range `start..end` into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span from a byte range.
    ///
    /// # Panics
    /// Panics in debug mode if `range.start > range.end`.
    pub fn new(range: Range<usize>) -> Self {
        debug_assert!(
            range.start <= range.end,
            "Span start {} is after end {}",
            range.start,
            range.end
        );
        Self {
            start: range.start,
            end: range.end,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`.
    pub fn union(&self, other: Span) -> Span {
        Span::new(self.start.min(other.start)..self.end.max(other.end))
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_accessors() {
        let span = Span::new(3..8);

        assert_eq!(span.start(), 3);
        assert_eq!(span.end(), 8);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::new(4..4).is_empty());
    }

    #[test]
    fn test_span_union() {
        let a = Span::new(10..12);
        let b = Span::new(2..5);

        assert_eq!(a.union(b), Span::new(2..12));
        assert_eq!(b.union(a), Span::new(2..12));
    }
}
