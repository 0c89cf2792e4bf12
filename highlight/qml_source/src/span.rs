//! Byte-range spans over document text.
//!
//! Compact 8-byte half-open ranges. All offsets are byte offsets from the
//! start of the document; `end` is exclusive.

use std::fmt;

/// Half-open byte range over document text.
///
/// Two `u32` offsets, 8 bytes total; `start` counts from the beginning of
/// the document and `end` is exclusive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a span from `start` to `end`.
    ///
    /// # Panics
    /// Debug-panics if `start > end`.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Span { start, end }
    }

    /// Create a zero-length span at `offset`.
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if the span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if an offset falls within this span.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Check if this span shares any byte positions with another.
    ///
    /// Adjacent spans (one ending where the other starts) do not intersect.
    #[inline]
    pub fn intersects(&self, other: Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The overlapping sub-range of two spans, or `None` when disjoint.
    #[inline]
    pub fn intersection(&self, other: Span) -> Option<Span> {
        if self.intersects(other) {
            Some(Span {
                start: self.start.max(other.start),
                end: self.end.min(other.end),
            })
        } else {
            None
        }
    }

    /// The smallest span covering both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Convert to a `std::ops::Range` for slicing.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

// Size assertion to prevent accidental regressions
const _: () = assert!(std::mem::size_of::<Span>() == 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_accessors() {
        let span = Span::new(4, 12);
        assert_eq!(span.len(), 8);
        assert!(!span.is_empty());
        assert!(span.contains(4));
        assert!(span.contains(11));
        assert!(!span.contains(12));
        assert!(!span.contains(3));
    }

    #[test]
    fn point_is_empty() {
        let point = Span::point(7);
        assert!(point.is_empty());
        assert_eq!(point.len(), 0);
        assert!(!point.contains(7));
    }

    #[test]
    fn intersects_excludes_adjacency() {
        let a = Span::new(0, 10);
        assert!(a.intersects(Span::new(5, 15)));
        assert!(a.intersects(Span::new(0, 1)));
        assert!(!a.intersects(Span::new(10, 20)));
        assert!(!a.intersects(Span::new(20, 30)));
    }

    #[test]
    fn empty_span_never_intersects() {
        let a = Span::new(0, 10);
        assert!(!a.intersects(Span::point(5)));
        assert!(!Span::point(5).intersects(a));
    }

    #[test]
    fn intersection_clips_to_overlap() {
        let a = Span::new(5, 15);
        assert_eq!(a.intersection(Span::new(10, 20)), Some(Span::new(10, 15)));
        assert_eq!(a.intersection(Span::new(0, 30)), Some(Span::new(5, 15)));
        assert_eq!(a.intersection(Span::new(15, 20)), None);
    }

    #[test]
    fn merge_covers_both() {
        let merged = Span::new(10, 20).merge(Span::new(25, 30));
        assert_eq!(merged, Span::new(10, 30));
    }

    #[test]
    fn display_and_debug() {
        let span = Span::new(18, 25);
        assert_eq!(format!("{span}"), "18..25");
        assert_eq!(format!("{span:?}"), "18..25");
    }

    #[test]
    fn to_range_round_trip() {
        let span = Span::new(3, 9);
        assert_eq!(span.to_range(), 3..9);
    }
}
