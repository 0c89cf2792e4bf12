//! The classification-registry collaborator seam.
//!
//! The classifier never interprets classification handles; it resolves the
//! seven fixed kind names through a consumer-owned registry once at
//! construction and hands the handles back untouched. [`InternRegistry`] is
//! the in-crate implementation for consumers (and tests) without a host
//! registry of their own.

use qml_lexer_core::TokenKind;
use rustc_hash::FxHashMap;

/// The fixed kind names, in the order [`InternRegistry`] numbers them.
pub(crate) const STANDARD_NAMES: [&str; 7] = [
    "Comment",
    "Keyword",
    "JsKeyword",
    "Type",
    "String",
    "Other",
    "Property",
];

/// The fixed token-kind → classification-name table.
///
/// Both comment kinds share the `"Comment"` classification: whether a
/// comment closed in one window or was stitched across several is not a
/// rendering distinction.
pub fn classification_name(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::MultilineComment | TokenKind::Comment => "Comment",
        TokenKind::Keyword => "Keyword",
        TokenKind::JsKeyword => "JsKeyword",
        TokenKind::Type => "Type",
        TokenKind::String => "String",
        TokenKind::Other => "Other",
        TokenKind::Property => "Property",
    }
}

/// Maps abstract kind names to opaque classification handles.
///
/// Read-only after setup; one registry may back any number of classifiers
/// concurrently. The handle type is the consumer's business — the
/// classifier only clones and returns it.
pub trait ClassificationRegistry {
    type Handle: Clone;

    /// The handle registered for `name`, if any.
    fn lookup(&self, name: &str) -> Option<Self::Handle>;
}

/// Dense handle issued by [`InternRegistry`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ClassificationId(pub u32);

/// Name-interning registry pre-seeded with the seven standard kind names.
#[derive(Debug)]
pub struct InternRegistry {
    ids: FxHashMap<Box<str>, ClassificationId>,
}

impl InternRegistry {
    /// A registry holding the standard kind names.
    pub fn new() -> Self {
        let mut ids = FxHashMap::default();
        for (index, name) in STANDARD_NAMES.iter().enumerate() {
            ids.insert(
                Box::from(*name),
                ClassificationId(u32::try_from(index).unwrap_or(u32::MAX)),
            );
        }
        InternRegistry { ids }
    }
}

impl Default for InternRegistry {
    fn default() -> Self {
        InternRegistry::new()
    }
}

impl ClassificationRegistry for InternRegistry {
    type Handle = ClassificationId;

    fn lookup(&self, name: &str) -> Option<ClassificationId> {
        self.ids.get(name).copied()
    }
}
