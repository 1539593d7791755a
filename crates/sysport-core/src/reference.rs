//! Import path retargeting.

use std::borrow::Cow;

/// Ordered table of literal `from -> to` replacements.
///
/// Each entry rewrites only the first occurrence of `from`. A missing `from`
/// is not an error; the content passes through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTable {
    entries: Vec<(String, String)>,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table used by the `x/sys/unix` generator: the std `syscall` import
    /// is pointed at the js/wasm copy generated next to it.
    pub fn unix() -> Self {
        Self::new().with(r#""syscall""#, r#""golang.org/x/sys/wasm/syscall""#)
    }

    /// Add an entry
    pub fn with(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.entries.push((from.into(), to.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply every entry in order to `data`.
    pub fn apply<'a>(&self, data: Cow<'a, [u8]>) -> Cow<'a, [u8]> {
        self.entries
            .iter()
            .fold(data, |data, (from, to)| replace_first(data, from.as_bytes(), to.as_bytes()))
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn replace_first<'a>(data: Cow<'a, [u8]>, from: &[u8], to: &[u8]) -> Cow<'a, [u8]> {
    let Some(at) = find(&data, from) else {
        return data;
    };
    let mut out = Vec::with_capacity(data.len() - from.len() + to.len());
    out.extend_from_slice(&data[..at]);
    out.extend_from_slice(to);
    out.extend_from_slice(&data[at + from.len()..]);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_table_rewrites_first_import_only() {
        let src = b"import \"syscall\"\n\nvar _ = \"syscall\"\n";
        let out = ReferenceTable::unix().apply(Cow::Borrowed(&src[..]));
        assert_eq!(
            out.as_ref(),
            &b"import \"golang.org/x/sys/wasm/syscall\"\n\nvar _ = \"syscall\"\n"[..]
        );
    }

    #[test]
    fn test_absent_reference_passes_through() {
        let src = b"package unix\n\nimport \"unsafe\"\n";
        let out = ReferenceTable::unix().apply(Cow::Borrowed(&src[..]));
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out.as_ref(), &src[..]);
    }

    #[test]
    fn test_unquoted_word_is_not_a_reference() {
        let src = b"// wraps syscall.Syscall\n";
        let out = ReferenceTable::unix().apply(Cow::Borrowed(&src[..]));
        assert_eq!(out.as_ref(), &src[..]);
    }

    #[test]
    fn test_entries_apply_in_order() {
        let table = ReferenceTable::new()
            .with(r#""a""#, r#""b""#)
            .with(r#""b""#, r#""c""#);
        let out = table.apply(Cow::Borrowed(&b"import \"a\""[..]));
        assert_eq!(out.as_ref(), &b"import \"c\""[..]);
    }

    #[test]
    fn test_empty_table() {
        let table = ReferenceTable::new();
        assert!(table.is_empty());
        let src = b"import \"syscall\"\n";
        assert!(matches!(table.apply(Cow::Borrowed(&src[..])), Cow::Borrowed(_)));
        assert!(!ReferenceTable::unix().is_empty());
    }
}
