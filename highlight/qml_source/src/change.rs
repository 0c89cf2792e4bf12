//! Single text edits and their effect on spans.
//!
//! A [`TextChange`] records that the byte range `[start, old_end)` of the
//! old text was replaced by `new_len` bytes of new text. The interesting
//! operation is [`TextChange::map_span`], which carries a span across the
//! edit with edge-exclusive semantics: text inserted exactly at a span
//! boundary is not absorbed into the span, and a span whose text is deleted
//! collapses to an empty range instead of disappearing.

use crate::Span;

/// A single text edit: `[start, old_end)` replaced by `new_len` bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TextChange {
    /// Start byte offset in the old text.
    pub start: u32,
    /// End byte offset in the old text (exclusive).
    pub old_end: u32,
    /// Length of the replacement text in bytes.
    pub new_len: u32,
}

impl TextChange {
    /// Create a new text change.
    #[inline]
    pub const fn new(start: u32, old_end: u32, new_len: u32) -> Self {
        debug_assert!(start <= old_end, "change start must not exceed old end");
        TextChange {
            start,
            old_end,
            new_len,
        }
    }

    /// Create an insertion (no bytes removed).
    #[inline]
    pub const fn insert(at: u32, len: u32) -> Self {
        TextChange {
            start: at,
            old_end: at,
            new_len: len,
        }
    }

    /// Create a deletion (no bytes inserted).
    #[inline]
    pub const fn delete(start: u32, len: u32) -> Self {
        TextChange {
            start,
            old_end: start + len,
            new_len: 0,
        }
    }

    /// Create a replacement.
    #[inline]
    pub const fn replace(start: u32, old_len: u32, new_len: u32) -> Self {
        TextChange {
            start,
            old_end: start + old_len,
            new_len,
        }
    }

    /// Net change in document length (positive = grew, negative = shrank).
    #[inline]
    pub fn delta(&self) -> i64 {
        i64::from(self.new_len) - i64::from(self.old_end - self.start)
    }

    /// Length of the removed region in the old text.
    #[inline]
    pub const fn old_len(&self) -> u32 {
        self.old_end - self.start
    }

    /// End position of the replacement in the new text.
    #[inline]
    pub const fn new_end(&self) -> u32 {
        self.start + self.new_len
    }

    /// Check if this change shares any byte positions with a span.
    #[inline]
    pub fn intersects(&self, span: Span) -> bool {
        // Two ranges [a, b) and [c, d) intersect iff a < d && c < b
        self.start < span.end && span.start < self.old_end
    }

    /// Carry a span from the old text into the new text.
    ///
    /// Edge-exclusive rules:
    /// - positions strictly before the removed region are unchanged;
    /// - positions at or past its end shift by [`delta`](Self::delta);
    /// - a start inside the removed region clamps to the end of the
    ///   replacement, an end inside it clamps to the start;
    /// - an insertion exactly at the span start shifts the whole span, one
    ///   exactly at the span end leaves it alone.
    ///
    /// A span whose text is entirely removed comes back empty (its two
    /// boundaries meet), never inverted.
    #[must_use]
    pub fn map_span(&self, span: Span) -> Span {
        let a = self.start;
        let b = self.old_end;

        let start = if span.start < a {
            span.start
        } else if span.start >= b {
            shift(span.start, self.delta())
        } else {
            self.new_end()
        };

        let end = if span.end <= a {
            span.end
        } else if span.end >= b {
            shift(span.end, self.delta())
        } else {
            a
        };

        Span::new(start, end.max(start))
    }
}

/// Apply a length delta to a position known to sit at or past the removed
/// region, so the result never goes negative.
#[inline]
#[allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    reason = "position is at or past old_end, so pos + delta >= new_end >= 0"
)]
fn shift(pos: u32, delta: i64) -> u32 {
    (i64::from(pos) + delta) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn constructors() {
        let insert = TextChange::insert(10, 5);
        assert_eq!(insert.delta(), 5);
        assert_eq!(insert.old_len(), 0);
        assert_eq!(insert.new_end(), 15);

        let delete = TextChange::delete(10, 5);
        assert_eq!(delete.delta(), -5);
        assert_eq!(delete.old_len(), 5);

        let replace = TextChange::replace(10, 3, 5);
        assert_eq!(replace.delta(), 2);
        assert_eq!(replace.new_end(), 15);
    }

    #[test]
    fn intersects_is_exclusive_at_edges() {
        let change = TextChange::new(10, 20, 15);
        assert!(!change.intersects(Span::new(0, 10)));
        assert!(change.intersects(Span::new(5, 15)));
        assert!(change.intersects(Span::new(12, 18)));
        assert!(change.intersects(Span::new(15, 25)));
        assert!(!change.intersects(Span::new(20, 30)));
    }

    #[test]
    fn edit_before_span_shifts_it() {
        let span = Span::new(50, 60);
        assert_eq!(TextChange::insert(10, 5).map_span(span), Span::new(55, 65));
        assert_eq!(TextChange::delete(10, 5).map_span(span), Span::new(45, 55));
    }

    #[test]
    fn edit_after_span_leaves_it() {
        let span = Span::new(10, 20);
        assert_eq!(TextChange::insert(30, 5).map_span(span), span);
        assert_eq!(TextChange::delete(25, 5).map_span(span), span);
    }

    #[test]
    fn insertion_at_start_edge_shifts_whole_span() {
        let span = Span::new(10, 20);
        assert_eq!(TextChange::insert(10, 3).map_span(span), Span::new(13, 23));
    }

    #[test]
    fn insertion_at_end_edge_does_not_grow_span() {
        let span = Span::new(10, 20);
        assert_eq!(TextChange::insert(20, 3).map_span(span), span);
    }

    #[test]
    fn insertion_inside_grows_span() {
        let span = Span::new(10, 20);
        assert_eq!(TextChange::insert(15, 4).map_span(span), Span::new(10, 24));
    }

    #[test]
    fn interior_deletion_shrinks_span() {
        let span = Span::new(10, 20);
        assert_eq!(TextChange::delete(12, 5).map_span(span), Span::new(10, 15));
    }

    #[test]
    fn deleting_entire_span_collapses_it() {
        let span = Span::new(10, 20);
        let mapped = TextChange::delete(5, 20).map_span(span);
        assert!(mapped.is_empty());
    }

    #[test]
    fn deleting_head_keeps_tail() {
        // Delete [5, 15) over span [10, 20): surviving bytes were [15, 20)
        let span = Span::new(10, 20);
        assert_eq!(TextChange::delete(5, 10).map_span(span), Span::new(5, 10));
    }

    #[test]
    fn deleting_tail_keeps_head() {
        // Delete [15, 25) over span [10, 20): surviving bytes were [10, 15)
        let span = Span::new(10, 20);
        assert_eq!(TextChange::delete(15, 10).map_span(span), Span::new(10, 15));
    }

    #[test]
    fn replacement_over_span_collapses_to_replacement_end() {
        let span = Span::new(10, 20);
        let mapped = TextChange::replace(10, 10, 4).map_span(span);
        assert!(mapped.is_empty());
        assert_eq!(mapped.start, 14);
    }

    mod proptest_map_span {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn mapped_span_is_well_formed(
                s in 0u32..500,
                len in 0u32..100,
                a in 0u32..500,
                old_len in 0u32..100,
                new_len in 0u32..100,
            ) {
                let span = Span::new(s, s + len);
                let change = TextChange::replace(a, old_len, new_len);
                let mapped = change.map_span(span);
                prop_assert!(mapped.start <= mapped.end);
                // An edit never moves a span past the end of the new document
                let doc_end = 700i64 + change.delta();
                prop_assert!(i64::from(mapped.end) <= doc_end);
            }

            #[test]
            fn disjoint_edit_preserves_length(
                s in 200u32..300,
                len in 1u32..50,
                a in 0u32..100,
                old_len in 0u32..50,
                new_len in 0u32..50,
            ) {
                // Edit entirely before the span
                let span = Span::new(s, s + len);
                let change = TextChange::replace(a, old_len, new_len);
                let mapped = change.map_span(span);
                prop_assert_eq!(mapped.len(), span.len());
            }
        }
    }
}
