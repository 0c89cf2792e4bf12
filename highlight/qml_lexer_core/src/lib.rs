//! Hand-written lexical scanner for QML syntax classification.
//!
//! This crate is the stateless leaf of the highlighter: one call to
//! [`scan`] reads a single lexical unit out of a text window and reports
//! its [`TokenKind`], its byte length, and whether it must be continued
//! into more text (only block comments do). It knows nothing about
//! documents, requests, or caching — the classifier layers those on top.
//!
//! # Windows and continuation
//!
//! The scanner works on whatever window of text its caller fetched, wrapped
//! in a sentinel-terminated [`ScanBuffer`] so one-byte lookahead never needs
//! a bounds check. A block comment whose `*/` lies outside the window comes
//! back as a [`TokenKind::MultilineComment`] with `continues` set; the
//! caller fetches more text and calls [`scan`] again in
//! [`ScanState::InComment`] to pick up the search.

mod cursor;
mod scan_buffer;
mod scanner;
mod token;
pub mod words;

pub use cursor::Cursor;
pub use scan_buffer::ScanBuffer;
pub use scanner::scan;
pub use token::{ScanState, Token, TokenKind};
