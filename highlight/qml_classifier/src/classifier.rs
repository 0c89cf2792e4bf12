//! The classifier session object.
//!
//! One `Classifier` per open document. `classify` serves a request span in
//! three phases: sweep the comment-record cache (serve, invalidate, or
//! evict), scan the uncovered remainder of the request, and merge the two
//! into one ordered result. Block comments that do not close inside the
//! request are stitched together by fetching continuation chunks until the
//! closer or the end of the document, and are then cached as tracked
//! records for later requests.

use qml_lexer_core::{scan, ScanBuffer, ScanState, TokenKind};
use qml_source::{DocumentVersion, Span, TextSource};
use tracing::{debug, trace};

use crate::record::CommentRecord;
use crate::registry::ClassificationRegistry;

/// Bytes fetched per continuation step while chasing a comment closer.
const CONTINUATION_CHUNK: u32 = 2048;

/// One classified range: where, and which handle the consumer registered
/// for its category.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClassificationSpan<H> {
    pub span: Span,
    pub classification: H,
}

/// Error resolving the fixed kind names at construction.
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("classification registry has no entry for kind {name:?}")]
    UnknownClassification { name: &'static str },
}

/// The classification handles for each token kind, resolved once.
struct KindHandles<H> {
    comment: H,
    keyword: H,
    js_keyword: H,
    ty: H,
    string: H,
    other: H,
    property: H,
}

/// Stateful classification session for one open document.
///
/// Holds the resolved kind handles and the multi-line comment cache. Bind
/// one classifier to one document: the tracked records are only meaningful
/// against the text source they were created from. The registry itself is
/// not retained — its handles are resolved at construction and cloned into
/// results from then on.
///
/// Not re-entrant: `classify` takes `&mut self` and completes (including
/// invalidation callbacks) before the next request.
pub struct Classifier<H> {
    handles: KindHandles<H>,
    records: Vec<CommentRecord<H>>,
    invalidate: Option<Box<dyn FnMut(Span)>>,
}

impl<H: Clone> Classifier<H> {
    /// Create a classifier, resolving the seven kind names through the
    /// consumer's registry.
    pub fn new<R>(registry: &R) -> Result<Self, ClassifierError>
    where
        R: ClassificationRegistry<Handle = H>,
    {
        let resolve = |name: &'static str| {
            registry
                .lookup(name)
                .ok_or(ClassifierError::UnknownClassification { name })
        };
        Ok(Classifier {
            handles: KindHandles {
                comment: resolve("Comment")?,
                keyword: resolve("Keyword")?,
                js_keyword: resolve("JsKeyword")?,
                ty: resolve("Type")?,
                string: resolve("String")?,
                other: resolve("Other")?,
                property: resolve("Property")?,
            },
            records: Vec::new(),
            invalidate: None,
        })
    }

    /// Subscribe to invalidation notifications: ranges outside a request
    /// whose previously issued classification is stale and must be
    /// re-requested.
    pub fn on_invalidate(&mut self, callback: impl FnMut(Span) + 'static) {
        self.invalidate = Some(Box::new(callback));
    }

    /// Number of multi-line comments currently tracked.
    pub fn tracked_comment_count(&self) -> usize {
        self.records.len()
    }

    /// Classify every byte of `request`, returning spans ordered by start
    /// offset. Spans may extend past the request when a token does — most
    /// notably an in-progress multi-line comment.
    pub fn classify<S: TextSource>(
        &mut self,
        source: &S,
        request: Span,
    ) -> Vec<ClassificationSpan<H>> {
        let doc_len = source.len();
        let start = request.start.min(doc_len);
        let request = Span::new(start, request.end.min(doc_len).max(start));
        let version = source.version();

        let mut result = Vec::new();
        let mut covered = Vec::new();
        self.sweep_records(source, request, version, &mut result, &mut covered);

        for gap in uncovered_gaps(request, &mut covered) {
            self.scan_gap(source, gap, request, version, &mut result);
        }

        result.sort_unstable_by_key(|s| s.span.start);
        result
    }

    /// Cache sweep: evict collapsed records, invalidate stale ones touching
    /// the request, and serve current ones directly into the result.
    fn sweep_records<S: TextSource>(
        &mut self,
        source: &S,
        request: Span,
        version: DocumentVersion,
        result: &mut Vec<ClassificationSpan<H>>,
        covered: &mut Vec<Span>,
    ) {
        let records = std::mem::take(&mut self.records);
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            let span = source.resolve(&record.span);
            if span.is_empty() {
                trace!(%span, "comment record text deleted; evicting");
                continue;
            }
            if !span.intersects(request) {
                kept.push(record);
                continue;
            }
            if record.version != version {
                debug!(%span, "comment record stale; invalidating");
                self.emit_invalidate(span);
                continue;
            }
            trace!(%span, "serving comment record from cache");
            result.push(ClassificationSpan {
                span,
                classification: record.classification.clone(),
            });
            if let Some(overlap) = span.intersection(request) {
                covered.push(overlap);
            }
            kept.push(record);
        }
        self.records = kept;
    }

    /// Scan one uncovered gap of the request, stitching comment
    /// continuations across chunk fetches.
    fn scan_gap<S: TextSource>(
        &mut self,
        source: &S,
        gap: Span,
        request: Span,
        version: DocumentVersion,
        result: &mut Vec<ClassificationSpan<H>>,
    ) {
        let buffer = ScanBuffer::new(source.text_in(gap));
        let mut offset = 0;
        while offset < buffer.len() {
            let token = scan(&buffer, offset, ScanState::Normal);
            if token.len == 0 {
                break;
            }
            let start = gap.start + offset;
            let mut end = start + token.len;
            let kind = if token.continues {
                end = chase_comment_close(source, end);
                TokenKind::MultilineComment
            } else {
                token.kind
            };
            let token_span = Span::new(start, end);
            let handle = self.handle_for(kind).clone();

            if token.continues {
                let already = self
                    .records
                    .iter()
                    .any(|r| source.resolve(&r.span) == token_span);
                if !already {
                    debug!(span = %token_span, "tracking multi-line comment");
                    self.records.push(CommentRecord {
                        span: source.track(token_span),
                        classification: handle.clone(),
                        version,
                    });
                    if token_span.end > request.end {
                        // The comment reaches past what this request covers;
                        // whatever the consumer rendered there is stale now.
                        self.emit_invalidate(Span::new(request.end, token_span.end));
                    }
                }
            }

            result.push(ClassificationSpan {
                span: token_span,
                classification: handle,
            });
            offset = end - gap.start;
        }
    }

    fn handle_for(&self, kind: TokenKind) -> &H {
        match kind {
            TokenKind::Comment | TokenKind::MultilineComment => &self.handles.comment,
            TokenKind::Keyword => &self.handles.keyword,
            TokenKind::JsKeyword => &self.handles.js_keyword,
            TokenKind::Type => &self.handles.ty,
            TokenKind::String => &self.handles.string,
            TokenKind::Other => &self.handles.other,
            TokenKind::Property => &self.handles.property,
        }
    }

    fn emit_invalidate(&mut self, span: Span) {
        trace!(%span, "invalidation notification");
        if let Some(callback) = self.invalidate.as_mut() {
            callback(span);
        }
    }
}

/// Fetch chunks after `end` and keep scanning in comment state until the
/// closer or the end of the document. Returns the final comment end.
///
/// Each chunk starts one byte before the scanned end so a `*/` straddling
/// two fetches is still seen; the comment end is computed from the chunk
/// base, so the overlapped byte is never double-counted.
fn chase_comment_close<S: TextSource>(source: &S, mut end: u32) -> u32 {
    let doc_len = source.len();
    while end < doc_len {
        let chunk_start = end.saturating_sub(1);
        let chunk = Span::new(chunk_start, (chunk_start + CONTINUATION_CHUNK).min(doc_len));
        trace!(%chunk, "fetching comment continuation");
        let buffer = ScanBuffer::new(source.text_in(chunk));
        let token = scan(&buffer, 0, ScanState::InComment);
        if token.continues {
            end = chunk.end;
        } else {
            return chunk_start + token.len;
        }
    }
    end.min(doc_len)
}

/// Subranges of `request` not covered by any span in `covered`.
fn uncovered_gaps(request: Span, covered: &mut Vec<Span>) -> Vec<Span> {
    covered.sort_unstable_by_key(|s| s.start);
    let mut gaps = Vec::new();
    let mut pos = request.start;
    for span in covered.iter() {
        if span.start > pos {
            gaps.push(Span::new(pos, span.start));
        }
        pos = pos.max(span.end);
    }
    if pos < request.end {
        gaps.push(Span::new(pos, request.end));
    }
    gaps
}
