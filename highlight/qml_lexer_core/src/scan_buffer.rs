//! Sentinel-terminated buffer for one scanned text window.
//!
//! The buffer appends `0x00` sentinel bytes after the window content, so
//! the scanner's one-byte lookahead (`/` + next char) reads a sentinel past
//! the end instead of needing a bounds check. Windows are small and
//! short-lived — one per classify request or continuation chunk — so the
//! copy is cheap.

use crate::Cursor;

/// Number of trailing `0x00` bytes; covers `current()` and `peek()` at EOF.
const SENTINEL_TAIL: usize = 2;

/// One scanned text window with trailing sentinel bytes.
///
/// # Layout
///
/// ```text
/// [window_bytes..., 0x00, 0x00]
///  ^                ^
///  0                window_len (first sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct ScanBuffer {
    /// Owned bytes: window content followed by `SENTINEL_TAIL` zeros.
    buf: Vec<u8>,
    /// Length of the window content (excludes sentinels).
    window_len: u32,
}

impl ScanBuffer {
    /// Copy a text window into a sentinel-terminated buffer.
    ///
    /// Windows larger than `u32::MAX` bytes are not meaningful for an
    /// editor request and saturate the recorded length.
    pub fn new(window: &str) -> Self {
        let bytes = window.as_bytes();
        let mut buf = vec![0u8; bytes.len() + SENTINEL_TAIL];
        buf[..bytes.len()].copy_from_slice(bytes);
        ScanBuffer {
            buf,
            window_len: u32::try_from(bytes.len()).unwrap_or(u32::MAX),
        }
    }

    /// Length of the window content in bytes.
    pub fn len(&self) -> u32 {
        self.window_len
    }

    /// Whether the window is empty.
    pub fn is_empty(&self) -> bool {
        self.window_len == 0
    }

    /// The window content (without sentinels).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.window_len as usize]
    }

    /// The full buffer including the sentinel tail.
    pub(crate) fn sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }
}
