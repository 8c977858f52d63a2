use std::fmt;

use thiserror::Error;

/// User-facing errors.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("sqlformatter config error: {0}")]
    Config(String),

    #[error("sqlformatter dialect template error: {0}")]
    Template(#[from] TemplateError),

    #[error("sqlformatter lex error: {0}")]
    Lex(#[from] LexError),

    #[error("sqlformatter structural error: {0}")]
    Structural(#[from] StructuralError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FormatError {
    /// Byte offset into the query for lexical and structural failures.
    pub fn position(&self) -> Option<usize> {
        match self {
            FormatError::Lex(e) => Some(e.position),
            FormatError::Structural(e) => Some(e.position),
            _ => None,
        }
    }
}

/// What went wrong while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    UnterminatedString,
    UnterminatedComment,
    UnterminatedIdentifier,
    UnexpectedCharacter,
}

impl LexErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LexErrorKind::UnterminatedString => "unterminated-string",
            LexErrorKind::UnterminatedComment => "unterminated-comment",
            LexErrorKind::UnterminatedIdentifier => "unterminated-identifier",
            LexErrorKind::UnexpectedCharacter => "unexpected-character",
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at position {position}")]
pub struct LexError {
    pub position: usize,
    pub kind: LexErrorKind,
}

impl LexError {
    pub fn new(position: usize, kind: LexErrorKind) -> Self {
        Self { position, kind }
    }
}

/// Unbalanced or misplaced structure. `found` is the offending token text
/// (empty at end of input), `expected` the delimiter that would have been valid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} at position {position}")]
pub struct StructuralError {
    pub position: usize,
    pub found: String,
    pub expected: Option<String>,
    pub message: String,
}

/// A dialect phrase template that could not be compiled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} at position {position} in template `{template}`")]
pub struct TemplateError {
    pub template: String,
    pub position: usize,
    pub message: String,
}

/// 1-based line and column (in chars) of a byte offset.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let col = before[line_start..].chars().count() + 1;
    (line, col)
}

pub type Result<T> = std::result::Result<T, FormatError>;
