//! Document text model for the QML highlighter.
//!
//! This crate contains the data structures the classifier needs to talk
//! about a mutable document without owning it:
//! - [`Span`] for half-open byte ranges
//! - [`DocumentVersion`] for monotonically increasing edit stamps
//! - [`TextChange`] for single edits and their span remapping
//! - [`TrackedSpan`] for ranges that survive edits elsewhere in the document
//! - [`TextSource`] as the collaborator seam, with [`Document`] as the
//!   in-memory implementation
//!
//! Everything here is value-oriented: spans and changes are small `Copy`
//! types, and the only stateful entity is [`Document`] itself.

mod change;
mod source;
mod span;
mod version;

pub use change::TextChange;
pub use source::{Document, TextSource, TrackedSpan};
pub use span::Span;
pub use version::DocumentVersion;
