use compact_str::CompactString;
use serde::Serialize;

/// Position in source string (byte offset).
pub type Pos = usize;

/// All token kinds produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    ReservedCommand,
    ReservedClause,
    ReservedJoin,
    ReservedSetOperation,
    ReservedPhrase,
    ReservedDependentClause,
    Keyword,
    FunctionName,
    Identifier,
    QuotedIdentifier,
    StringLiteral,
    NumberLiteral,
    NamedParameter,
    PositionalParameter,
    QuotedParameter,
    Operator,
    OpenParen,
    CloseParen,
    Comma,
    Semicolon,
    LineComment,
    BlockComment,
    EndOfInput,
}

impl TokenKind {
    /// Kinds that begin a new clause in the structural tree.
    pub fn starts_clause(self) -> bool {
        matches!(
            self,
            Self::ReservedCommand
                | Self::ReservedClause
                | Self::ReservedJoin
                | Self::ReservedSetOperation
        )
    }

    /// Reserved words whose rendering follows the keyword-case option.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            Self::ReservedCommand
                | Self::ReservedClause
                | Self::ReservedJoin
                | Self::ReservedSetOperation
                | Self::ReservedPhrase
                | Self::ReservedDependentClause
                | Self::Keyword
        )
    }

    pub fn is_case_folded(self) -> bool {
        self.is_reserved() || self == Self::FunctionName
    }

    pub fn is_parameter(self) -> bool {
        matches!(
            self,
            Self::NamedParameter | Self::PositionalParameter | Self::QuotedParameter
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(self, Self::LineComment | Self::BlockComment)
    }

    pub fn is_literal(self) -> bool {
        matches!(self, Self::StringLiteral | Self::NumberLiteral)
    }
}

/// A single token. `text` is the raw source slice, `value` its normalized
/// form: reserved words and function names are upper-cased with inner
/// whitespace collapsed, parameters carry their lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: CompactString,
    pub value: CompactString,
    pub start: Pos,
    pub end: Pos,
    pub whitespace_before: CompactString,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        text: &str,
        value: CompactString,
        start: Pos,
        whitespace_before: &str,
    ) -> Self {
        Self {
            kind,
            text: CompactString::from(text),
            value,
            start,
            end: start + text.len(),
            whitespace_before: CompactString::from(whitespace_before),
        }
    }

    /// Case-insensitive test against a normalized word.
    pub fn is_word(&self, word: &str) -> bool {
        self.value.as_str() == word
    }

    /// Whether the whitespace preceding this token contains a line break.
    pub fn starts_line(&self) -> bool {
        self.whitespace_before.contains('\n')
    }

    pub fn is_multiline(&self) -> bool {
        self.text.contains('\n')
    }
}

/// Normalize a reserved phrase: upper-case, single spaces between words.
pub fn normalize_phrase(text: &str) -> CompactString {
    let mut out = CompactString::default();
    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        for c in word.chars() {
            out.extend(c.to_uppercase());
        }
    }
    out
}

/// Concatenate whitespace and text of every token, reproducing the input.
pub fn reconstruct(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.whitespace_before);
        out.push_str(&token.text);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phrase() {
        assert_eq!(normalize_phrase("group\n  by"), "GROUP BY");
        assert_eq!(normalize_phrase("Select"), "SELECT");
    }

    #[test]
    fn test_token_end() {
        let t = Token::new(TokenKind::Identifier, "abc", "abc".into(), 4, " ");
        assert_eq!(t.end, 7);
        assert!(!t.starts_line());
    }

    #[test]
    fn test_kind_classes() {
        assert!(TokenKind::ReservedJoin.starts_clause());
        assert!(!TokenKind::ReservedPhrase.starts_clause());
        assert!(TokenKind::FunctionName.is_case_folded());
        assert!(!TokenKind::Identifier.is_case_folded());
        assert!(TokenKind::QuotedParameter.is_parameter());
    }
}
