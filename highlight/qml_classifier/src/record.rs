//! Cached multi-line comment records.

use qml_source::{DocumentVersion, TrackedSpan};

/// The only state the classifier keeps across requests: one record per
/// discovered multi-line comment.
///
/// The span is tracked so it stays aligned as the document is edited
/// elsewhere; `version` is the document version at which the record was
/// last confirmed. A record is served from cache only while the document
/// version still matches — any newer version drops it on next touch.
#[derive(Clone, Debug)]
pub(crate) struct CommentRecord<H> {
    /// Tracked range of the comment, opener through closer.
    pub span: TrackedSpan,
    /// The handle the comment was classified with at creation.
    pub classification: H,
    /// Document version at which `span` was last confirmed valid.
    pub version: DocumentVersion,
}
