//! Byte cursor over a sentinel-terminated scan window.
//!
//! The cursor advances through the window byte-by-byte. The sentinel tail
//! of the [`ScanBuffer`] guarantees that [`Cursor::current`] and
//! [`Cursor::peek`] are safe at any position up to and including the end of
//! the window, so the scanner's `/`+next-char lookahead never branches on a
//! bounds check: past the end it simply reads `0x00`, which matches no
//! lexical rule.

use crate::ScanBuffer;

/// Byte cursor over one [`ScanBuffer`].
///
/// The cursor is `Copy`, enabling cheap state snapshots while scanning a
/// candidate token.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated bytes (window + `0x00` tail).
    buf: &'a [u8],
    /// Current read position (byte index into the window).
    pos: u32,
    /// Length of the window content (excludes the sentinel tail).
    window_len: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0 over a scan buffer.
    pub(crate) fn new(buffer: &'a ScanBuffer) -> Self {
        Cursor {
            buf: buffer.sentinel_bytes(),
            pos: 0,
            window_len: buffer.len(),
        }
    }

    /// The byte at the current position; `0x00` at or past the window end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// The byte one position ahead; `0x00` when that is past the window end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Current byte offset in the window.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the window content.
    #[inline]
    pub fn window_len(&self) -> u32 {
        self.window_len
    }

    /// Whether the cursor has reached the end of the window.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.window_len
    }

    /// Advance while `pred` accepts the current byte.
    ///
    /// `pred(0)` must return `false` so the sentinel terminates the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.pos < self.window_len && pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Window text between `start` and `end` as `&str`.
    ///
    /// The window was built from `&str`, and the scanner only cuts at ASCII
    /// bytes, so the slice is valid UTF-8 in every reachable case; a
    /// mid-character cut degrades to `""` (classified as plain text).
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end && end <= self.window_len);
        std::str::from_utf8(&self.buf[start as usize..end as usize]).unwrap_or("")
    }

    /// Window text from `start` to the end of the window.
    pub fn slice_to_end(&self, start: u32) -> &'a str {
        self.slice(start, self.window_len)
    }

    /// Index of the `*` of the next `*/` at or after the current position,
    /// or `None` if the window holds no comment closer.
    pub fn find_comment_close(&self) -> Option<u32> {
        let remaining = &self.buf[self.pos as usize..self.window_len as usize];
        memchr::memmem::find(remaining, b"*/").map(|i| self.pos + offset_u32(i))
    }

    /// Index of the next `\r` or `\n` at or after the current position, or
    /// the window length if the window holds no line break.
    pub fn find_line_end(&self) -> u32 {
        let remaining = &self.buf[self.pos as usize..self.window_len as usize];
        match memchr::memchr2(b'\r', b'\n', remaining) {
            Some(i) => self.pos + offset_u32(i),
            None => self.window_len,
        }
    }

    /// Index of the next `"` or `\` at or after the current position, or
    /// `None` if the window holds neither.
    pub fn find_string_delim(&self) -> Option<u32> {
        let remaining = &self.buf[self.pos as usize..self.window_len as usize];
        memchr::memchr2(b'"', b'\\', remaining).map(|i| self.pos + offset_u32(i))
    }
}

/// Narrow a slice offset found by memchr back to `u32`.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "offsets index a window whose length fits in u32"
)]
fn offset_u32(i: usize) -> u32 {
    i as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Navigation ===

    #[test]
    fn current_and_advance() {
        let buf = ScanBuffer::new("abc");
        let mut cursor = buf.cursor();
        assert_eq!(cursor.current(), b'a');
        cursor.advance();
        assert_eq!(cursor.current(), b'b');
        assert_eq!(cursor.pos(), 1);
        cursor.advance_n(2);
        assert!(cursor.is_eof());
    }

    #[test]
    fn peek_past_end_reads_sentinel() {
        let buf = ScanBuffer::new("ab");
        let mut cursor = buf.cursor();
        cursor.advance(); // at 'b'
        assert_eq!(cursor.peek(), 0);
        cursor.advance(); // at EOF
        assert_eq!(cursor.current(), 0);
        assert_eq!(cursor.peek(), 0);
    }

    #[test]
    fn empty_window_is_eof() {
        let buf = ScanBuffer::new("");
        let cursor = buf.cursor();
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), 0);
    }

    // === eat_while ===

    #[test]
    fn eat_while_consumes_matching() {
        let buf = ScanBuffer::new("aaab");
        let mut cursor = buf.cursor();
        cursor.eat_while(|b| b == b'a');
        assert_eq!(cursor.pos(), 3);
        assert_eq!(cursor.current(), b'b');
    }

    #[test]
    fn eat_while_stops_at_window_end() {
        let buf = ScanBuffer::new("aaa");
        let mut cursor = buf.cursor();
        cursor.eat_while(|b| b == b'a');
        assert_eq!(cursor.pos(), 3);
        assert!(cursor.is_eof());
    }

    // === Slicing ===

    #[test]
    fn slice_extracts_window_text() {
        let buf = ScanBuffer::new("hello world");
        let cursor = buf.cursor();
        assert_eq!(cursor.slice(0, 5), "hello");
        assert_eq!(cursor.slice_to_end(6), "world");
    }

    // === Search helpers ===

    #[test]
    fn find_comment_close_locates_star_slash() {
        let buf = ScanBuffer::new("abc */ def");
        let cursor = buf.cursor();
        assert_eq!(cursor.find_comment_close(), Some(4));
    }

    #[test]
    fn find_comment_close_searches_from_pos() {
        let buf = ScanBuffer::new("*/ and */ again");
        let mut cursor = buf.cursor();
        cursor.advance_n(2);
        assert_eq!(cursor.find_comment_close(), Some(7));
    }

    #[test]
    fn find_comment_close_none_when_absent() {
        let buf = ScanBuffer::new("/* never closed * /");
        let cursor = buf.cursor();
        assert_eq!(cursor.find_comment_close(), None);
    }

    #[test]
    fn find_line_end_stops_at_cr_or_lf() {
        let buf = ScanBuffer::new("ab\ncd");
        assert_eq!(buf.cursor().find_line_end(), 2);
        let buf = ScanBuffer::new("ab\r\ncd");
        assert_eq!(buf.cursor().find_line_end(), 2);
    }

    #[test]
    fn find_line_end_defaults_to_window_len() {
        let buf = ScanBuffer::new("no break");
        assert_eq!(buf.cursor().find_line_end(), 8);
    }

    #[test]
    fn find_string_delim_finds_quote_and_backslash() {
        let buf = ScanBuffer::new(r#"ab\c"d"#);
        let cursor = buf.cursor();
        assert_eq!(cursor.find_string_delim(), Some(2));
        let buf = ScanBuffer::new("abcd\"e");
        assert_eq!(buf.cursor().find_string_delim(), Some(4));
    }
}
