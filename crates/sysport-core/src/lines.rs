//! Line lookup over raw file bytes.

/// A line located inside a byte buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch<'a> {
    /// Byte offset of the first byte of the line
    pub offset: usize,
    /// Line bytes, without the terminating `\n`
    pub bytes: &'a [u8],
}

impl LineMatch<'_> {
    /// Line as text, lossy for non UTF-8 content
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(self.bytes)
    }

    /// Byte range of the line inside the searched buffer
    pub fn span(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.bytes.len()
    }
}

/// Find the first line of `data` that starts with `prefix`.
///
/// Lines are split on `\n` only; a trailing `\r` stays part of the line and
/// matching is plain byte-prefix equality.
pub fn find_line_by_prefix<'a>(data: &'a [u8], prefix: &str) -> Option<LineMatch<'a>> {
    let prefix = prefix.as_bytes();
    let mut offset = 0;

    for line in data.split(|&b| b == b'\n') {
        if line.starts_with(prefix) {
            return Some(LineMatch {
                offset,
                bytes: line,
            });
        }
        offset += line.len() + 1;
    }

    None
}
