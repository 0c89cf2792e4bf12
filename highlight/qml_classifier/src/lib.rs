//! Incremental syntax classifier for QML documents.
//!
//! One [`Classifier`] per open document. Each [`Classifier::classify`] call
//! covers a requested span with classification spans, iterating the scanner
//! from `qml_lexer_core` over text fetched through a
//! [`TextSource`](qml_source::TextSource) and stitching block comments
//! across window boundaries. Multi-line comments discovered this way are
//! cached as tracked records so unmodified comment regions are served
//! without re-scanning; edited ones are dropped and reported through the
//! invalidation callback.
//!
//! The classification categories themselves stay opaque: the consumer's
//! [`ClassificationRegistry`] maps the fixed kind names to whatever handle
//! type its rendering layer uses.

mod classifier;
mod record;
mod registry;

pub use classifier::{ClassificationSpan, Classifier, ClassifierError};
pub use registry::{
    classification_name, ClassificationId, ClassificationRegistry, InternRegistry,
};
