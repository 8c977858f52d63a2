use memchr::{memchr, memchr2};

/// How a closing delimiter may appear inside a quoted run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// `''` inside `'...'`.
    Doubled,
    /// `\'` inside `'...'`.
    Backslash,
    Both,
}

impl Escape {
    fn doubled(self) -> bool {
        matches!(self, Escape::Doubled | Escape::Both)
    }

    fn backslash(self) -> bool {
        matches!(self, Escape::Backslash | Escape::Both)
    }
}

/// Scan a quoted run whose opening delimiter is `bytes[0]`.
/// Returns the byte length including both delimiters, or `None` when the
/// run is not terminated.
pub(crate) fn scan_delimited(bytes: &[u8], close: u8, escape: Escape) -> Option<usize> {
    let mut j = 1;
    while j < bytes.len() {
        let offset = if escape.backslash() {
            memchr2(close, b'\\', &bytes[j..])?
        } else {
            memchr(close, &bytes[j..])?
        };
        let end = j + offset;
        if bytes[end] == b'\\' {
            j = end + 2;
            continue;
        }
        if escape.doubled() && bytes.get(end + 1) == Some(&close) {
            j = end + 2;
            continue;
        }
        return Some(end + 1);
    }
    None
}

/// Scan a triple-quoted string (`'''...'''` or `"""..."""`), `bytes` starting
/// at the first quote. Backslash escapes are honoured.
pub(crate) fn scan_triple(bytes: &[u8], quote: u8) -> Option<usize> {
    let mut i = 3;
    while i + 2 < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote && bytes[i + 1] == quote && bytes[i + 2] == quote => {
                return Some(i + 3);
            }
            _ => i += 1,
        }
    }
    None
}

/// Length of a dollar-quote opening tag (`$$` or `$tag$`) at `bytes[0]`,
/// or `None` when the position does not open a dollar-quoted string.
pub(crate) fn dollar_tag_len(bytes: &[u8]) -> Option<usize> {
    if bytes.first() != Some(&b'$') {
        return None;
    }
    let mut i = 1;
    if i < bytes.len() && (bytes[i].is_ascii_alphabetic() || bytes[i] == b'_') {
        while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
            i += 1;
        }
    }
    (bytes.get(i) == Some(&b'$')).then_some(i + 1)
}

/// Scan a dollar-quoted string whose opening tag is `tag_len` bytes long.
pub(crate) fn scan_dollar(bytes: &[u8], tag_len: usize) -> Option<usize> {
    let tag = &bytes[..tag_len];
    let mut i = tag_len;
    while i + tag_len <= bytes.len() {
        let offset = memchr(b'$', &bytes[i..])?;
        let pos = i + offset;
        if bytes[pos..].starts_with(tag) {
            return Some(pos + tag_len);
        }
        i = pos + 1;
    }
    None
}

/// Scan a block comment starting at `/*`. With `nested`, inner `/*` opens a
/// further level that must be closed as well.
pub(crate) fn scan_block_comment(bytes: &[u8], nested: bool) -> Option<usize> {
    let mut depth = 1usize;
    let mut i = 2;
    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            depth -= 1;
            i += 2;
            if depth == 0 {
                return Some(i);
            }
        } else if nested && bytes[i] == b'/' && bytes[i + 1] == b'*' {
            depth += 1;
            i += 2;
        } else {
            i += 1;
        }
    }
    None
}

/// Length of a line comment, up to but excluding the newline.
pub(crate) fn scan_line_comment(bytes: &[u8]) -> usize {
    memchr(b'\n', bytes).unwrap_or(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_single_quoted_string() {
        assert_eq!(scan_delimited(b"'hello' rest", b'\'', Escape::Doubled), Some(7));
    }

    #[test]
    fn test_scan_doubled_quote() {
        assert_eq!(scan_delimited(b"'it''s' x", b'\'', Escape::Doubled), Some(7));
        // With backslash-only escaping the doubled quote ends the string early.
        assert_eq!(scan_delimited(b"'it''s' x", b'\'', Escape::Backslash), Some(4));
    }

    #[test]
    fn test_scan_backslash_escape() {
        assert_eq!(scan_delimited(b"'it\\'s' rest", b'\'', Escape::Backslash), Some(7));
        assert_eq!(scan_delimited(b"'it\\'s' rest", b'\'', Escape::Doubled), Some(5));
    }

    #[test]
    fn test_scan_bracket_identifier() {
        assert_eq!(scan_delimited(b"[a]]b] x", b']', Escape::Doubled), Some(6));
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(scan_delimited(b"'abc", b'\'', Escape::Both), None);
        assert_eq!(scan_delimited(b"'abc\\'", b'\'', Escape::Backslash), None);
        assert_eq!(scan_triple(b"'''abc''", b'\''), None);
        assert_eq!(scan_block_comment(b"/* a /* b */", true), None);
    }

    #[test]
    fn test_scan_triple() {
        assert_eq!(scan_triple(b"\"\"\"a\"b\"\"\" x", b'"'), Some(9));
    }

    #[test]
    fn test_dollar_strings() {
        assert_eq!(dollar_tag_len(b"$$ body $$"), Some(2));
        assert_eq!(dollar_tag_len(b"$fn$ body $fn$"), Some(4));
        assert_eq!(dollar_tag_len(b"$1"), None);
        assert_eq!(dollar_tag_len(b"$a b"), None);
        assert_eq!(scan_dollar(b"$fn$ a $x$ b $fn$;", 4), Some(17));
        assert_eq!(scan_dollar(b"$$ never", 2), None);
    }

    #[test]
    fn test_block_comments() {
        assert_eq!(scan_block_comment(b"/* a */ x", false), Some(7));
        assert_eq!(scan_block_comment(b"/* a /* b */ c */", false), Some(12));
        assert_eq!(scan_block_comment(b"/* a /* b */ c */", true), Some(17));
    }

    #[test]
    fn test_line_comment() {
        assert_eq!(scan_line_comment(b"-- hi\nnext"), 5);
        assert_eq!(scan_line_comment(b"-- eof"), 6);
    }
}
