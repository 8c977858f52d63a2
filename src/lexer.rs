use compact_str::CompactString;

use crate::dialect::{DialectConfig, IdentChars, QuoteStyle, QuoteType};
use crate::error::{LexError, LexErrorKind};
use crate::string_utils::{
    dollar_tag_len, scan_block_comment, scan_delimited, scan_dollar, scan_line_comment,
    scan_triple,
};
use crate::token::{normalize_phrase, Token, TokenKind};

/// Split `query` into tokens. Whitespace is attached to the token that
/// follows it; the final `EndOfInput` token carries trailing whitespace, so
/// the concatenation of all tokens reproduces the input exactly.
pub fn tokenize(query: &str, config: &DialectConfig) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer {
        src: query,
        bytes: query.as_bytes(),
        config,
        pos: 0,
        tokens: Vec::new(),
    };
    lexer.run()?;
    tracing::debug!(
        dialect = config.name,
        tokens = lexer.tokens.len(),
        "tokenized query"
    );
    Ok(lexer.tokens)
}

struct Lexer<'a> {
    src: &'a str,
    bytes: &'a [u8],
    config: &'a DialectConfig,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn run(&mut self) -> Result<(), LexError> {
        loop {
            let ws_start = self.pos;
            self.pos += skip_whitespace(&self.bytes[self.pos..]);
            let whitespace = &self.src[ws_start..self.pos];
            if self.pos >= self.bytes.len() {
                self.tokens.push(Token::new(
                    TokenKind::EndOfInput,
                    "",
                    CompactString::default(),
                    self.pos,
                    whitespace,
                ));
                return Ok(());
            }
            let (kind, len, value) = self.lex_one()?;
            let start = self.pos;
            let text = &self.src[start..start + len];
            let value = value.unwrap_or_else(|| CompactString::from(text));
            self.tokens
                .push(Token::new(kind, text, value, start, whitespace));
            self.pos += len;
        }
    }

    /// Classify the token at the current position. Returns its kind, byte
    /// length and, where it differs from the raw text, its normalized value.
    fn lex_one(&self) -> Result<(TokenKind, usize, Option<CompactString>), LexError> {
        let rest = &self.bytes[self.pos..];

        if let Some(result) = self.lex_comment(rest) {
            return result.map(|(kind, len)| (kind, len, None));
        }
        for quote in self.config.string_types {
            if let Some(result) = scan_quote(rest, quote) {
                let len = result
                    .map_err(|_| LexError::new(self.pos, LexErrorKind::UnterminatedString))?;
                return Ok((TokenKind::StringLiteral, len, None));
            }
        }
        for quote in self.config.ident_types {
            if let Some(result) = scan_quote(rest, quote) {
                let len = result
                    .map_err(|_| LexError::new(self.pos, LexErrorKind::UnterminatedIdentifier))?;
                return Ok((TokenKind::QuotedIdentifier, len, None));
            }
        }
        if let Some(result) = self.lex_number(rest) {
            return result.map(|(kind, len)| (kind, len, None));
        }
        if let Some((kind, len, key)) = self.lex_parameter(rest)? {
            return Ok((kind, len, Some(key)));
        }
        if let Some(token) = self.lex_word(rest) {
            return Ok(token);
        }
        if let Some(op) = self
            .config
            .operators()
            .iter()
            .find(|op| rest.starts_with(op.as_bytes()))
        {
            return Ok((TokenKind::Operator, op.len(), None));
        }
        let kind = match rest[0] {
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b if self.config.is_open_paren(b) => TokenKind::OpenParen,
            b if self.config.is_close_paren(b) => TokenKind::CloseParen,
            _ => {
                return Err(LexError::new(
                    self.pos,
                    LexErrorKind::UnexpectedCharacter,
                ))
            }
        };
        Ok((kind, 1, None))
    }

    fn lex_comment(&self, rest: &[u8]) -> Option<Result<(TokenKind, usize), LexError>> {
        if rest.starts_with(b"/*") {
            return Some(
                scan_block_comment(rest, self.config.nested_block_comments)
                    .map(|len| (TokenKind::BlockComment, len))
                    .ok_or_else(|| LexError::new(self.pos, LexErrorKind::UnterminatedComment)),
            );
        }
        self.config
            .line_comments
            .iter()
            .any(|marker| rest.starts_with(marker.as_bytes()))
            .then(|| Ok((TokenKind::LineComment, scan_line_comment(rest))))
    }

    /// Numbers, and identifiers that start with digits where the dialect
    /// allows them.
    fn lex_number(&self, rest: &[u8]) -> Option<Result<(TokenKind, usize), LexError>> {
        let starts_number = match rest[0] {
            b'0'..=b'9' => true,
            b'.' => {
                rest.get(1).is_some_and(u8::is_ascii_digit) && !self.after_operand()
            }
            _ => false,
        };
        if !starts_number {
            return None;
        }
        let len = scan_number(rest);
        let chars = self.config.ident_chars;
        match rest.get(len) {
            Some(&b) if is_ident_rest(b, &chars) => {
                if chars.allow_first_char_number && rest[0] != b'.' {
                    Some(Ok((TokenKind::Identifier, scan_identifier_rest(rest, 0, &chars))))
                } else {
                    Some(Err(LexError::new(
                        self.pos + len,
                        LexErrorKind::UnexpectedCharacter,
                    )))
                }
            }
            _ => Some(Ok((TokenKind::NumberLiteral, len))),
        }
    }

    /// Placeholders: quoted (`@"name"`), numbered (`$1`), named (`:name`)
    /// and bare `?`. Returns the kind, length and lookup key.
    fn lex_parameter(
        &self,
        rest: &[u8],
    ) -> Result<Option<(TokenKind, usize, CompactString)>, LexError> {
        let params = self.config.param_types;
        for prefix in params.quoted {
            let Some(after) = rest.strip_prefix(prefix.as_bytes()) else {
                continue;
            };
            for quote in self.config.ident_types {
                if let Some(result) = scan_quote(after, quote) {
                    let len = result.map_err(|_| {
                        LexError::new(self.pos + prefix.len(), LexErrorKind::UnterminatedIdentifier)
                    })?;
                    let key = unquote(&self.src[self.pos + prefix.len()..self.pos + prefix.len() + len]);
                    return Ok(Some((TokenKind::QuotedParameter, prefix.len() + len, key)));
                }
            }
        }
        for prefix in params.numbered {
            let Some(after) = rest.strip_prefix(prefix.as_bytes()) else {
                continue;
            };
            let digits = after.iter().take_while(|b| b.is_ascii_digit()).count();
            if digits > 0 && !after.get(digits).is_some_and(|&b| is_word_byte(b)) {
                let start = self.pos + prefix.len();
                let key = CompactString::from(&self.src[start..start + digits]);
                return Ok(Some((TokenKind::PositionalParameter, prefix.len() + digits, key)));
            }
        }
        for prefix in params.named {
            let Some(after) = rest.strip_prefix(prefix.as_bytes()) else {
                continue;
            };
            let chars = self.config.ident_chars;
            let len = after
                .iter()
                .take_while(|&&b| is_word_byte(b) || chars.rest.as_bytes().contains(&b))
                .count();
            if len > 0 {
                let start = self.pos + prefix.len();
                let key = CompactString::from(&self.src[start..start + len]);
                return Ok(Some((TokenKind::NamedParameter, prefix.len() + len, key)));
            }
        }
        if params.positional && rest[0] == b'?' {
            return Ok(Some((TokenKind::PositionalParameter, 1, CompactString::default())));
        }
        Ok(None)
    }

    /// Reserved phrases, function names, keywords and bare identifiers.
    fn lex_word(&self, rest: &[u8]) -> Option<(TokenKind, usize, Option<CompactString>)> {
        let chars = self.config.ident_chars;
        if !is_ident_start(rest[0], &chars) {
            return None;
        }
        let len = scan_identifier_rest(rest, 1, &chars);
        if self.after_property_dot() {
            return Some((TokenKind::Identifier, len, None));
        }
        let word = self.src[self.pos..self.pos + len].to_uppercase();

        for entry in self.config.phrases_starting_with(&word) {
            let words = entry.phrase.words();
            if let Some(extra) = try_sequence(&rest[len..], &words[1..]) {
                let text = &self.src[self.pos..self.pos + len + extra];
                return Some((entry.kind, len + extra, Some(normalize_phrase(text))));
            }
        }
        let value = Some(CompactString::from(word.as_str()));
        if self.config.is_function(&word) && next_non_whitespace(&rest[len..]) == Some(b'(') {
            return Some((TokenKind::FunctionName, len, value));
        }
        if self.config.is_keyword(&word) {
            return Some((TokenKind::Keyword, len, value));
        }
        Some((TokenKind::Identifier, len, None))
    }

    fn last_significant(&self) -> Option<&Token> {
        self.tokens.iter().rev().find(|t| !t.kind.is_comment())
    }

    /// Whether the previous token ends an operand, so that `.` is member
    /// access rather than the start of a number.
    fn after_operand(&self) -> bool {
        self.last_significant().is_some_and(|t| {
            matches!(
                t.kind,
                TokenKind::Identifier
                    | TokenKind::QuotedIdentifier
                    | TokenKind::CloseParen
                    | TokenKind::StringLiteral
                    | TokenKind::NumberLiteral
            )
        })
    }

    fn after_property_dot(&self) -> bool {
        self.last_significant()
            .is_some_and(|t| t.kind == TokenKind::Operator && t.text == ".")
    }
}

/// Byte length of leading whitespace, newlines included.
fn skip_whitespace(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_whitespace()).count()
}

fn next_non_whitespace(bytes: &[u8]) -> Option<u8> {
    bytes.get(skip_whitespace(bytes)).copied()
}

/// Letters, digits, `_`, and any non-ASCII byte (part of a UTF-8 sequence).
#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

fn is_ident_start(b: u8, chars: &IdentChars) -> bool {
    (is_word_byte(b) && !b.is_ascii_digit()) || chars.first.as_bytes().contains(&b)
}

fn is_ident_rest(b: u8, chars: &IdentChars) -> bool {
    is_word_byte(b) || chars.rest.as_bytes().contains(&b)
}

/// Extend an identifier whose first `from` bytes are already accepted.
/// Dashes are taken only between identifier characters.
fn scan_identifier_rest(bytes: &[u8], from: usize, chars: &IdentChars) -> usize {
    let mut i = from;
    while i < bytes.len() {
        let b = bytes[i];
        if is_ident_rest(b, chars) {
            i += 1;
        } else if chars.dashes
            && b == b'-'
            && bytes.get(i + 1).is_some_and(|&n| is_word_byte(n))
        {
            i += 2;
        } else {
            break;
        }
    }
    i
}

/// Scan a number starting at bytes[0]. Handles:
/// - Hex (0x...), binary (0b...), octal (0o...)
/// - Decimal with optional fractional part and scientific notation
///
/// Returns byte length.
fn scan_number(bytes: &[u8]) -> usize {
    let len = bytes.len();
    let mut i = 0;

    if bytes[0] == b'0' && len > 2 {
        let radix_digit: Option<fn(u8) -> bool> = match bytes[1] {
            b'x' | b'X' => Some(|b| b.is_ascii_hexdigit()),
            b'b' | b'B' => Some(|b| b == b'0' || b == b'1'),
            b'o' | b'O' => Some(|b| (b'0'..=b'7').contains(&b)),
            _ => None,
        };
        if let Some(is_digit) = radix_digit {
            if is_digit(bytes[2]) {
                i = 2;
                while i < len && (is_digit(bytes[i]) || bytes[i] == b'_') {
                    i += 1;
                }
                return i;
            }
        }
    }

    // Integer part: digits and underscores
    while i < len && (bytes[i].is_ascii_digit() || bytes[i] == b'_') {
        i += 1;
    }

    // Decimal part
    if i < len && bytes[i] == b'.' {
        i += 1;
        while i < len && (bytes[i].is_ascii_digit() || bytes[i] == b'_') {
            i += 1;
        }
    }

    // Scientific notation
    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        if j < len && bytes[j].is_ascii_digit() {
            i = j;
            while i < len && (bytes[i].is_ascii_digit() || bytes[i] == b'_') {
                i += 1;
            }
        }
    }

    i
}

/// Try to match a sequence of words after the current position.
/// Skips all whitespace including newlines between words.
/// Returns extra bytes consumed on success.
fn try_sequence(bytes: &[u8], words: &[CompactString]) -> Option<usize> {
    let mut pos = 0;
    for word in words {
        let gap = skip_whitespace(&bytes[pos..]);
        if gap == 0 {
            return None;
        }
        pos += gap;
        let word_bytes = word.as_bytes();
        if pos + word_bytes.len() > bytes.len() {
            return None;
        }
        if !bytes[pos..pos + word_bytes.len()].eq_ignore_ascii_case(word_bytes) {
            return None;
        }
        pos += word_bytes.len();
        // Word boundary, unless the phrase word itself ends in punctuation
        let ends_in_word = word_bytes.last().is_some_and(|&b| is_word_byte(b));
        if ends_in_word && bytes.get(pos).is_some_and(|&b| is_word_byte(b)) {
            return None;
        }
    }
    Some(pos)
}

/// Try to open `quote` at `bytes[0]`, honouring its literal prefixes.
/// `None` when the quote does not start here, `Some(Err(()))` when it starts
/// but is never closed.
fn scan_quote(bytes: &[u8], quote: &QuoteType) -> Option<Result<usize, ()>> {
    let prefix_len = quote
        .prefixes
        .iter()
        .map(|p| p.as_bytes())
        .find(|p| {
            bytes.len() > p.len()
                && bytes[..p.len()].eq_ignore_ascii_case(p)
                && opens(&bytes[p.len()..], quote.style)
        })
        .map(<[u8]>::len)
        .or_else(|| (!quote.require_prefix && opens(bytes, quote.style)).then_some(0))?;
    let body = &bytes[prefix_len..];
    let len = match quote.style {
        QuoteStyle::Delimited { close, escape, .. } => scan_delimited(body, close, escape),
        QuoteStyle::Triple(q) => scan_triple(body, q),
        QuoteStyle::Dollar => dollar_tag_len(body).and_then(|tag| scan_dollar(body, tag)),
    };
    Some(len.map(|n| prefix_len + n).ok_or(()))
}

fn opens(bytes: &[u8], style: QuoteStyle) -> bool {
    match style {
        QuoteStyle::Delimited { open, .. } => bytes.first() == Some(&open),
        QuoteStyle::Triple(q) => bytes.starts_with(&[q, q, q]),
        QuoteStyle::Dollar => dollar_tag_len(bytes).is_some(),
    }
}

/// Strip the delimiters of a quoted name and collapse doubled closers.
fn unquote(text: &str) -> CompactString {
    let (Some(first), Some(last)) = (text.chars().next(), text.chars().last()) else {
        return CompactString::default();
    };
    if text.len() < 2 {
        return CompactString::from(text);
    }
    let inner = &text[first.len_utf8()..text.len() - last.len_utf8()];
    let doubled: String = [last, last].iter().collect();
    CompactString::from(inner.replace(&doubled, &last.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::dialect_from_name;
    use crate::token::reconstruct;

    fn lex(dialect: &str, sql: &str) -> Vec<Token> {
        tokenize(sql, dialect_from_name(dialect).unwrap()).unwrap()
    }

    fn kinds(dialect: &str, sql: &str) -> Vec<(TokenKind, String)> {
        lex(dialect, sql)
            .into_iter()
            .filter(|t| t.kind != TokenKind::EndOfInput)
            .map(|t| (t.kind, t.text.to_string()))
            .collect()
    }

    fn lex_err(dialect: &str, sql: &str) -> LexError {
        tokenize(sql, dialect_from_name(dialect).unwrap()).unwrap_err()
    }

    #[test]
    fn test_scan_number() {
        assert_eq!(scan_number(b"42"), 2);
        assert_eq!(scan_number(b"3.14"), 4);
        assert_eq!(scan_number(b"1e10"), 4);
        assert_eq!(scan_number(b"2.5E-3 "), 6);
        assert_eq!(scan_number(b"0xFF"), 4);
        assert_eq!(scan_number(b"0b1010"), 6);
        assert_eq!(scan_number(b"0o777"), 5);
        assert_eq!(scan_number(b"1_000"), 5);
        assert_eq!(scan_number(b".5"), 2);
    }

    #[test]
    fn test_try_sequence() {
        let by = [CompactString::from("BY")];
        assert_eq!(try_sequence(b" by x", &by), Some(3));
        assert_eq!(try_sequence(b"\n  BY", &by), Some(5));
        assert_eq!(try_sequence(b" byte", &by), None);
        assert_eq!(try_sequence(b"by", &by), None);
    }

    #[test]
    fn test_reconstructs_input() {
        let sql = "  SELECT a , b\n\tFROM  t -- trailing\n WHERE x = 'y' ;  \n";
        let tokens = lex("sql", sql);
        assert_eq!(reconstruct(&tokens), sql);
        let last = tokens.last().unwrap();
        assert_eq!(last.kind, TokenKind::EndOfInput);
        assert_eq!(last.whitespace_before, "  \n");
    }

    #[test]
    fn test_group_by_is_one_clause_token() {
        let tokens = lex("sql", "GROUP BY x");
        assert_eq!(tokens[0].kind, TokenKind::ReservedClause);
        assert_eq!(tokens[0].text, "GROUP BY");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_longest_phrase_wins() {
        let tokens = lex("sql", "a left\n  outer join b");
        assert_eq!(tokens[1].kind, TokenKind::ReservedJoin);
        assert_eq!(tokens[1].text, "left\n  outer join");
        assert_eq!(tokens[1].value, "LEFT OUTER JOIN");
    }

    #[test]
    fn test_phrase_requires_word_boundary() {
        let k = kinds("sql", "select group_byx from t");
        assert_eq!(k[1], (TokenKind::Identifier, "group_byx".into()));
    }

    #[test]
    fn test_function_needs_paren() {
        let k = kinds("sql", "count(x), count");
        assert_eq!(k[0].0, TokenKind::FunctionName);
        assert_eq!(k[5], (TokenKind::Identifier, "count".into()));
        let k = kinds("sql", "LEFT (a, 2)");
        assert_eq!(k[0].0, TokenKind::FunctionName);
    }

    #[test]
    fn test_keyword_value_uppercased() {
        let tokens = lex("sql", "case when");
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].value, "CASE");
        assert_eq!(tokens[0].text, "case");
        assert_eq!(tokens[1].kind, TokenKind::ReservedDependentClause);
    }

    #[test]
    fn test_reserved_word_after_dot_is_identifier() {
        let k = kinds("sql", "t.from");
        assert_eq!(k[1], (TokenKind::Operator, ".".into()));
        assert_eq!(k[2], (TokenKind::Identifier, "from".into()));
    }

    #[test]
    fn test_operators_longest_match() {
        let k = kinds("postgresql", "a::int <= b ->> 'k'");
        assert_eq!(k[1], (TokenKind::Operator, "::".into()));
        assert_eq!(k[3], (TokenKind::Operator, "<=".into()));
        assert_eq!(k[5], (TokenKind::Operator, "->>".into()));
    }

    #[test]
    fn test_strings_and_prefixes() {
        let k = kinds("transactsql", "N'it''s', 'x'");
        assert_eq!(k[0], (TokenKind::StringLiteral, "N'it''s'".into()));
        assert_eq!(k[2], (TokenKind::StringLiteral, "'x'".into()));

        let k = kinds("postgresql", "E'a\\'b' e");
        assert_eq!(k[0], (TokenKind::StringLiteral, "E'a\\'b'".into()));
        assert_eq!(k[1], (TokenKind::Identifier, "e".into()));

        let k = kinds("postgresql", "$fn$ select 1; $fn$ $$x$$");
        assert_eq!(k[0], (TokenKind::StringLiteral, "$fn$ select 1; $fn$".into()));
        assert_eq!(k[1], (TokenKind::StringLiteral, "$$x$$".into()));

        let k = kinds("bigquery", "r'''a'b''' \"q\"");
        assert_eq!(k[0], (TokenKind::StringLiteral, "r'''a'b'''".into()));
        assert_eq!(k[1], (TokenKind::StringLiteral, "\"q\"".into()));
    }

    #[test]
    fn test_quoted_identifiers() {
        let k = kinds("transactsql", "[my]]col] \"x\"");
        assert_eq!(k[0], (TokenKind::QuotedIdentifier, "[my]]col]".into()));
        assert_eq!(k[1], (TokenKind::QuotedIdentifier, "\"x\"".into()));
        let k = kinds("mysql", "`a b`");
        assert_eq!(k[0], (TokenKind::QuotedIdentifier, "`a b`".into()));
    }

    #[test]
    fn test_parameters() {
        let tokens = lex("transactsql", "@id, @\"a b\"");
        assert_eq!(tokens[0].kind, TokenKind::NamedParameter);
        assert_eq!(tokens[0].value, "id");
        assert_eq!(tokens[2].kind, TokenKind::QuotedParameter);
        assert_eq!(tokens[2].value, "a b");

        let tokens = lex("postgresql", "$1 + $12");
        assert_eq!(tokens[0].kind, TokenKind::PositionalParameter);
        assert_eq!(tokens[0].value, "1");
        assert_eq!(tokens[2].value, "12");

        let tokens = lex("sql", "? = ?");
        assert_eq!(tokens[0].kind, TokenKind::PositionalParameter);
        assert_eq!(tokens[2].kind, TokenKind::PositionalParameter);

        let tokens = lex("plsql", "x := :name");
        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert_eq!(tokens[2].kind, TokenKind::NamedParameter);
        assert_eq!(tokens[2].value, "name");
    }

    #[test]
    fn test_identifier_char_extensions() {
        let k = kinds("transactsql", "#temp");
        assert_eq!(k[0], (TokenKind::Identifier, "#temp".into()));
        let k = kinds("bigquery", "my-project.data-set.t");
        assert_eq!(k[0], (TokenKind::Identifier, "my-project".into()));
        assert_eq!(k[2], (TokenKind::Identifier, "data-set".into()));
        let k = kinds("mysql", "1st_col");
        assert_eq!(k[0], (TokenKind::Identifier, "1st_col".into()));
    }

    #[test]
    fn test_comments() {
        let k = kinds("mysql", "a # note\n/* b */ c");
        assert_eq!(k[1], (TokenKind::LineComment, "# note".into()));
        assert_eq!(k[2], (TokenKind::BlockComment, "/* b */".into()));

        let k = kinds("postgresql", "/* a /* b */ c */ x");
        assert_eq!(k[0].1, "/* a /* b */ c */");

        // `#` is an operator, not a comment, in PostgreSQL
        let k = kinds("postgresql", "a # b");
        assert_eq!(k[1], (TokenKind::Operator, "#".into()));
    }

    #[test]
    fn test_extra_parens() {
        let k = kinds("postgresql", "arr[1]");
        assert_eq!(k[1].0, TokenKind::OpenParen);
        assert_eq!(k[3].0, TokenKind::CloseParen);
    }

    #[test]
    fn test_unterminated_errors() {
        assert_eq!(
            lex_err("sql", "select 'abc"),
            LexError::new(7, LexErrorKind::UnterminatedString)
        );
        assert_eq!(
            lex_err("sql", "select 1 /* x").kind,
            LexErrorKind::UnterminatedComment
        );
        assert_eq!(
            lex_err("sql", "select \"abc").kind,
            LexErrorKind::UnterminatedIdentifier
        );
        assert_eq!(
            lex_err("transactsql", "select [abc").kind,
            LexErrorKind::UnterminatedIdentifier
        );
    }

    #[test]
    fn test_unexpected_character() {
        let err = lex_err("sql", "select a \\ b");
        assert_eq!(err, LexError::new(9, LexErrorKind::UnexpectedCharacter));
        let err = lex_err("sql", "select 1abc");
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter);
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"a\"\"b\""), "a\"b");
        assert_eq!(unquote("[x]]y]"), "x]y");
        assert_eq!(unquote("`n`"), "n");
    }

    #[test]
    fn test_unicode_identifiers() {
        let k = kinds("sql", "select naïve from café");
        assert_eq!(k[1], (TokenKind::Identifier, "naïve".into()));
        assert_eq!(k[3], (TokenKind::Identifier, "café".into()));
    }
}
