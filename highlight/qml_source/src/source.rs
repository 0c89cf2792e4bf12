//! The text-source collaborator seam and its in-memory implementation.
//!
//! The classifier never owns document text. It reads through [`TextSource`],
//! which hands out literal text for a span, the current [`DocumentVersion`],
//! and [`TrackedSpan`] handles that stay meaningful as the document is
//! edited. [`Document`] is the in-memory implementation: a string, a version
//! counter, and the edit history needed to resolve old tracked spans against
//! the current text.

use crate::{DocumentVersion, Span, TextChange};

/// A span captured at a specific document version.
///
/// Holds the range as it was at `since`; [`TextSource::resolve`] replays
/// every later edit to produce the equivalent range in the current text.
/// If the tracked text has been deleted, resolution yields an empty span.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TrackedSpan {
    /// The range as of `since`.
    pub span: Span,
    /// The document version the range was captured at.
    pub since: DocumentVersion,
}

/// Read access to one mutable document.
///
/// All methods are synchronous; text lives in memory. Implementations must
/// keep `version()` strictly increasing across edits so that spans tracked
/// at an older version can be told apart from current ones.
pub trait TextSource {
    /// The version stamp of the current document state.
    fn version(&self) -> DocumentVersion;

    /// Document length in bytes.
    fn len(&self) -> u32;

    /// Whether the document is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The literal text of `span`, clamped to the document.
    fn text_in(&self, span: Span) -> &str;

    /// Capture `span` at the current version for later resolution.
    fn track(&self, span: Span) -> TrackedSpan;

    /// Remap a tracked span into the current document state.
    fn resolve(&self, tracked: &TrackedSpan) -> Span;
}

/// One recorded edit, stamped with the version it produced.
#[derive(Clone, Copy, Debug)]
struct Revision {
    version: DocumentVersion,
    change: TextChange,
}

/// In-memory document: text, version counter, and edit history.
///
/// The history exists solely to resolve [`TrackedSpan`]s captured at older
/// versions; it is scoped to the document session and discarded with it.
#[derive(Debug, Default)]
pub struct Document {
    text: String,
    version: DocumentVersion,
    history: Vec<Revision>,
}

impl Document {
    /// Open a document with the given initial text.
    pub fn new(text: impl Into<String>) -> Self {
        Document {
            text: text.into(),
            version: DocumentVersion::INITIAL,
            history: Vec::new(),
        }
    }

    /// Replace `span` with `replacement`, bumping the version.
    ///
    /// Offsets are byte offsets and must fall on character boundaries.
    /// Spans reaching past the end of the document are clamped.
    pub fn edit(&mut self, span: Span, replacement: &str) {
        let span = self.clamp(span);
        debug_assert!(
            self.text.is_char_boundary(span.start as usize)
                && self.text.is_char_boundary(span.end as usize),
            "edit boundaries must fall on character boundaries"
        );
        self.text.replace_range(span.to_range(), replacement);
        self.version = self.version.next();
        self.history.push(Revision {
            version: self.version,
            change: TextChange::replace(span.start, span.len(), saturating_u32(replacement.len())),
        });
    }

    /// The full current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn clamp(&self, span: Span) -> Span {
        let len = self.len();
        let start = span.start.min(len);
        Span::new(start, span.end.min(len).max(start))
    }
}

impl TextSource for Document {
    fn version(&self) -> DocumentVersion {
        self.version
    }

    fn len(&self) -> u32 {
        saturating_u32(self.text.len())
    }

    fn text_in(&self, span: Span) -> &str {
        let span = self.clamp(span);
        &self.text[span.to_range()]
    }

    fn track(&self, span: Span) -> TrackedSpan {
        TrackedSpan {
            span: self.clamp(span),
            since: self.version,
        }
    }

    fn resolve(&self, tracked: &TrackedSpan) -> Span {
        self.history
            .iter()
            .skip_while(|r| r.version <= tracked.since)
            .fold(tracked.span, |span, r| r.change.map_span(span))
    }
}

/// Saturate a byte count to `u32`; documents beyond 4 GiB clamp at the top.
#[inline]
fn saturating_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
