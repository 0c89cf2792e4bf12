//! The scan step: one lexical unit out of one text window.
//!
//! [`scan`] is a pure function of its inputs. Dispatch looks at the byte at
//! the scan offset (and one byte of sentinel-safe lookahead) and hands off
//! to a focused helper per lexical rule; every helper returns a [`Token`]
//! with an exact byte length. Malformed input never errors — unterminated
//! strings and comments degrade to best-effort tokens covering the
//! remaining window.

use crate::cursor::Cursor;
use crate::token::{ScanState, Token, TokenKind};
use crate::{words, ScanBuffer};

/// Scan the next lexical unit starting at `offset`.
///
/// In [`ScanState::InComment`] the scanner only searches for the `*/`
/// closing a block comment carried over from a previous window; otherwise
/// it applies the full lexical rules from `offset`.
///
/// Preconditions: `offset <= buffer.len()`. Scanning at the window end
/// yields an empty `Other` token; callers iterate while `offset` is inside
/// the window.
pub fn scan(buffer: &ScanBuffer, offset: u32, state: ScanState) -> Token {
    debug_assert!(offset <= buffer.len(), "scan offset out of window");
    match state {
        ScanState::InComment => continue_comment(buffer, offset),
        ScanState::Normal => next_token(buffer, offset),
    }
}

/// Search for the `*/` of a comment carried in from a previous window.
fn continue_comment(buffer: &ScanBuffer, offset: u32) -> Token {
    let mut cursor = buffer.cursor();
    cursor.advance_n(offset);
    match cursor.find_comment_close() {
        Some(star) => Token::complete(TokenKind::MultilineComment, star + 2 - offset),
        None => Token::unfinished_comment(buffer.len() - offset),
    }
}

/// Full dispatch on the byte at the scan offset.
fn next_token(buffer: &ScanBuffer, offset: u32) -> Token {
    let mut cursor = buffer.cursor();
    cursor.advance_n(offset);
    match cursor.current() {
        b'"' => string_token(&cursor, offset),
        b'/' if cursor.peek() == b'/' => line_comment(&cursor, offset),
        b'/' if cursor.peek() == b'*' => block_comment(&cursor, offset),
        b'\r' | b'\n' => line_break_run(cursor, offset),
        b if words::is_separator(b) => Token::complete(TokenKind::Other, 1),
        _ => word_token(&cursor, offset),
    }
}

/// String literal: from the opening quote through the next unescaped `"`.
///
/// A string without a closing quote in the window consumes the remainder,
/// non-continuing: strings do not span requests in this language.
fn string_token(cursor: &Cursor<'_>, offset: u32) -> Token {
    let mut search = *cursor;
    search.advance(); // past the opening quote
    while !search.is_eof() {
        let Some(delim) = search.find_string_delim() else {
            break;
        };
        search.advance_n(delim - search.pos());
        if search.current() == b'"' {
            return Token::complete(TokenKind::String, search.pos() + 1 - offset);
        }
        // Backslash: skip it and the escaped byte
        search.advance_n(2);
    }
    Token::complete(TokenKind::String, cursor.window_len() - offset)
}

/// `//` comment: through the end of the line, exclusive of the terminator.
fn line_comment(cursor: &Cursor<'_>, offset: u32) -> Token {
    let mut search = *cursor;
    search.advance_n(2);
    Token::complete(TokenKind::Comment, search.find_line_end() - offset)
}

/// `/*` comment: complete if `*/` lies in the window, carried otherwise.
fn block_comment(cursor: &Cursor<'_>, offset: u32) -> Token {
    let mut search = *cursor;
    search.advance_n(2); // so "/*/" does not close on its own opener
    match search.find_comment_close() {
        Some(star) => Token::complete(TokenKind::Comment, star + 2 - offset),
        None => Token::unfinished_comment(cursor.window_len() - offset),
    }
}

/// A run of line-break bytes, classified as plain text.
fn line_break_run(mut cursor: Cursor<'_>, offset: u32) -> Token {
    cursor.eat_while(|b| b == b'\r' || b == b'\n');
    Token::complete(TokenKind::Other, cursor.pos() - offset)
}

/// Accumulate a word to the next delimiter and classify it.
fn word_token(cursor: &Cursor<'_>, offset: u32) -> Token {
    // `property <type>` phrase fast path: matched as one token before the
    // word loop would split it at the space.
    if let Some(len) = words::property_phrase_len(cursor.slice_to_end(offset)) {
        return Token::complete(TokenKind::Property, len);
    }

    let mut scan = *cursor;
    loop {
        if scan.is_eof() {
            return trailing_word(cursor, offset);
        }
        let ch = scan.current();
        let next = scan.peek();

        if words::is_separator(ch) {
            let word = cursor.slice(offset, scan.pos());
            let colon_coming = ch == b':' || next == b':';
            let following = cursor.slice_to_end(scan.pos());
            let kind = classify_word(word, colon_coming, following);
            return Token::complete(kind, scan.pos() - offset);
        }
        if ch == b'\r' || ch == b'\n' {
            // The line break is consumed with the word it terminates
            let kind = classify_word(cursor.slice(offset, scan.pos()), false, "");
            return Token::complete(kind, scan.pos() + 1 - offset);
        }
        if ch == b'/' && (next == b'/' || next == b'*') {
            // A comment opener ends the word without being consumed
            let kind = classify_word(cursor.slice(offset, scan.pos()), false, "");
            return Token::complete(kind, scan.pos() - offset);
        }
        scan.advance();
    }
}

/// A word cut short by the window end: trimmed, JS-keyword check only.
fn trailing_word(cursor: &Cursor<'_>, offset: u32) -> Token {
    let trimmed = cursor.slice_to_end(offset).trim_end_matches([' ', ';']);
    let kind = if words::is_js_keyword(trimmed) {
        TokenKind::JsKeyword
    } else {
        TokenKind::Other
    };
    Token::complete(kind, cursor.window_len() - offset)
}

/// Classify a delimited word against the fixed lists, in precedence order.
///
/// A structural keyword in label position — the terminating separator is a
/// colon, the next byte is a colon, or the following text starts with one
/// after leading space/tab — is a plain identifier, not a keyword.
fn classify_word(word: &str, colon_coming: bool, following: &str) -> TokenKind {
    if words::is_js_keyword(word) {
        return TokenKind::JsKeyword;
    }
    if words::is_keyword(word) {
        if colon_coming {
            return TokenKind::Other;
        }
        let after = following.trim_start_matches([' ', '\t']);
        if after.starts_with(':') {
            return TokenKind::Other;
        }
        return TokenKind::Keyword;
    }
    if words::is_property_phrase(word) {
        return TokenKind::Property;
    }
    TokenKind::Other
}
