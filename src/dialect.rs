//! Dialect descriptors.
//!
//! A dialect is authored as a [`DialectSpec`]: plain static tables of phrase
//! templates, word lists and lexical conventions. [`DialectConfig::build`]
//! compiles it once into lookup structures the tokenizer and formatter share
//! read-only. The built-in dialects are compiled lazily on first use.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use compact_str::CompactString;
use phf::phf_map;

use crate::dialects;
use crate::error::{FormatError, TemplateError};
use crate::phrase::{self, ExpandedPhrase};
use crate::string_utils::Escape;
use crate::token::TokenKind;

/// How a quoted run is delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    Delimited { open: u8, close: u8, escape: Escape },
    /// `'''...'''` or `"""..."""`.
    Triple(u8),
    /// `$$...$$` and `$tag$...$tag$`.
    Dollar,
}

/// A quote style plus the case-insensitive literal prefixes it accepts
/// (`N'...'`, `X'...'`). Prefixes are listed longest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteType {
    pub style: QuoteStyle,
    pub prefixes: &'static [&'static str],
    /// Only match when one of the prefixes is present.
    pub require_prefix: bool,
}

impl QuoteType {
    pub const fn delimited(open: u8, close: u8, escape: Escape) -> Self {
        Self {
            style: QuoteStyle::Delimited { open, close, escape },
            prefixes: &[],
            require_prefix: false,
        }
    }

    pub const fn with_prefixes(self, prefixes: &'static [&'static str]) -> Self {
        Self { prefixes, ..self }
    }

    pub const fn prefixed_only(self, prefixes: &'static [&'static str]) -> Self {
        Self {
            prefixes,
            require_prefix: true,
            ..self
        }
    }

    pub const fn triple(quote: u8) -> Self {
        Self {
            style: QuoteStyle::Triple(quote),
            prefixes: &[],
            require_prefix: false,
        }
    }

    pub const DOLLAR: Self = Self {
        style: QuoteStyle::Dollar,
        prefixes: &[],
        require_prefix: false,
    };

    /// `'...'` with `''` escapes.
    pub const SINGLE_QQ: Self = Self::delimited(b'\'', b'\'', Escape::Doubled);
    /// `'...'` with `''` and `\'` escapes.
    pub const SINGLE_QQ_BS: Self = Self::delimited(b'\'', b'\'', Escape::Both);
    /// `"..."` with `""` escapes.
    pub const DOUBLE_QQ: Self = Self::delimited(b'"', b'"', Escape::Doubled);
    /// `"..."` with `""` and `\"` escapes.
    pub const DOUBLE_QQ_BS: Self = Self::delimited(b'"', b'"', Escape::Both);
    /// `` `...` `` with doubled backticks.
    pub const BACKTICK: Self = Self::delimited(b'`', b'`', Escape::Doubled);
    /// `[...]` with `]]` escapes.
    pub const BRACKETS: Self = Self::delimited(b'[', b']', Escape::Doubled);
}

/// Extra identifier characters on top of letters, digits and `_`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentChars {
    pub first: &'static str,
    pub rest: &'static str,
    /// Allow `-` between identifier characters (`my-project.dataset`).
    pub dashes: bool,
    /// Allow identifiers such as `1st_col` that start with digits.
    pub allow_first_char_number: bool,
}

/// Parameter placeholder syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParamTypes {
    /// Bare `?`.
    pub positional: bool,
    /// Prefixes followed by digits: `$1`, `:1`, `?1`.
    pub numbered: &'static [&'static str],
    /// Prefixes followed by an identifier: `@name`, `:name`.
    pub named: &'static [&'static str],
    /// Prefixes followed by a quoted name: `@"name"`, `` @`name` ``.
    pub quoted: &'static [&'static str],
}

/// Several static lists read as one, so dialects can extend the shared tables.
pub type WordLists = &'static [&'static [&'static str]];

/// Authoring form of a dialect.
#[derive(Debug, Clone, Copy)]
pub struct DialectSpec {
    pub name: &'static str,
    /// Statement-level commands (`SELECT`, `INSERT INTO`, `CREATE TABLE`).
    pub commands: WordLists,
    /// Clauses continuing a statement (`FROM`, `GROUP BY`).
    pub clauses: WordLists,
    /// Clauses whose body always stays on the keyword line.
    pub oneline_clauses: WordLists,
    pub set_operations: WordLists,
    pub joins: WordLists,
    pub dependent_clauses: WordLists,
    /// Free-standing multi-word phrases (`ON DELETE CASCADE`).
    pub phrases: WordLists,
    pub keywords: WordLists,
    pub functions: WordLists,
    /// Operators beyond the shared base set.
    pub operators: &'static [&'static str],
    pub string_types: &'static [QuoteType],
    pub ident_types: &'static [QuoteType],
    pub ident_chars: IdentChars,
    pub nested_block_comments: bool,
    pub line_comments: &'static [&'static str],
    pub param_types: ParamTypes,
    /// Additional bracket pairs treated like parentheses, e.g. `"[]"`.
    pub extra_parens: &'static [&'static str],
    pub always_dense_operators: &'static [&'static str],
}

/// Operators every dialect understands.
const BASE_OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "=", "<>", "!=", "<", ">", "<=", ">=", ".",
];

/// A compiled phrase and the token kind it produces.
#[derive(Debug, Clone)]
pub struct PhraseEntry {
    pub phrase: ExpandedPhrase,
    pub kind: TokenKind,
}

fn kind_priority(kind: TokenKind) -> u8 {
    match kind {
        TokenKind::ReservedCommand => 0,
        TokenKind::ReservedClause => 1,
        TokenKind::ReservedSetOperation => 2,
        TokenKind::ReservedJoin => 3,
        TokenKind::ReservedDependentClause => 4,
        _ => 5,
    }
}

/// Compiled, immutable dialect configuration.
#[derive(Debug, Clone)]
pub struct DialectConfig {
    pub name: &'static str,
    phrases: HashMap<CompactString, Vec<PhraseEntry>>,
    oneline_clauses: HashSet<CompactString>,
    keywords: HashSet<CompactString>,
    functions: HashSet<CompactString>,
    operators: Vec<&'static str>,
    always_dense: HashSet<&'static str>,
    pub string_types: &'static [QuoteType],
    pub ident_types: &'static [QuoteType],
    pub ident_chars: IdentChars,
    pub nested_block_comments: bool,
    pub line_comments: &'static [&'static str],
    pub param_types: ParamTypes,
    parens: Vec<(u8, u8)>,
}

impl DialectConfig {
    /// Compile a dialect spec. Fails only on malformed phrase templates.
    pub fn build(spec: &DialectSpec) -> Result<Self, TemplateError> {
        let mut phrases: HashMap<CompactString, Vec<PhraseEntry>> = HashMap::new();
        let groups = [
            (spec.commands, TokenKind::ReservedCommand),
            (spec.clauses, TokenKind::ReservedClause),
            (spec.oneline_clauses, TokenKind::ReservedClause),
            (spec.set_operations, TokenKind::ReservedSetOperation),
            (spec.joins, TokenKind::ReservedJoin),
            (spec.dependent_clauses, TokenKind::ReservedDependentClause),
            (spec.phrases, TokenKind::ReservedPhrase),
        ];
        let mut seen = HashSet::new();
        let mut count = 0;
        for (templates, kind) in groups {
            for phrase in phrase::expand(&templates.concat())? {
                if !seen.insert(phrase.clone()) {
                    continue;
                }
                count += 1;
                phrases
                    .entry(phrase.words()[0].clone())
                    .or_default()
                    .push(PhraseEntry { phrase, kind });
            }
        }
        for bucket in phrases.values_mut() {
            bucket.sort_by(|a, b| {
                b.phrase
                    .word_count()
                    .cmp(&a.phrase.word_count())
                    .then_with(|| b.phrase.char_len().cmp(&a.phrase.char_len()))
                    .then_with(|| kind_priority(a.kind).cmp(&kind_priority(b.kind)))
            });
        }

        let oneline_clauses = phrase::expand(&spec.oneline_clauses.concat())?
            .iter()
            .map(|p| CompactString::from(p.to_string()))
            .collect();

        let upper_set = |lists: &[&[&str]]| -> HashSet<CompactString> {
            lists
                .iter()
                .flat_map(|list| list.iter())
                .map(|w| CompactString::from(w.to_ascii_uppercase()))
                .collect()
        };

        let mut operators: Vec<&'static str> = BASE_OPERATORS.to_vec();
        for &op in spec.operators {
            if !operators.contains(&op) {
                operators.push(op);
            }
        }
        operators.sort_by(|a, b| b.len().cmp(&a.len()));

        let parens = std::iter::once("()")
            .chain(spec.extra_parens.iter().copied())
            .filter_map(|pair| match pair.as_bytes() {
                [open, close] => Some((*open, *close)),
                _ => None,
            })
            .collect();

        tracing::debug!(
            dialect = spec.name,
            phrases = count,
            operators = operators.len(),
            "compiled dialect"
        );

        Ok(Self {
            name: spec.name,
            phrases,
            oneline_clauses,
            keywords: upper_set(spec.keywords),
            functions: upper_set(spec.functions),
            operators,
            always_dense: spec.always_dense_operators.iter().copied().collect(),
            string_types: spec.string_types,
            ident_types: spec.ident_types,
            ident_chars: spec.ident_chars,
            nested_block_comments: spec.nested_block_comments,
            line_comments: spec.line_comments,
            param_types: spec.param_types,
            parens,
        })
    }

    /// Candidate phrases starting with `first_word` (upper-case), longest first.
    pub fn phrases_starting_with(&self, first_word: &str) -> &[PhraseEntry] {
        self.phrases.get(first_word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn is_function(&self, word: &str) -> bool {
        self.functions.contains(word)
    }

    /// Whether a normalized clause keyword keeps its body on the keyword line.
    pub fn is_oneline_clause(&self, value: &str) -> bool {
        self.oneline_clauses.contains(value)
    }

    /// Operators, longest first.
    pub fn operators(&self) -> &[&'static str] {
        &self.operators
    }

    pub fn is_always_dense(&self, op: &str) -> bool {
        self.always_dense.contains(op)
    }

    pub fn is_open_paren(&self, b: u8) -> bool {
        self.parens.iter().any(|&(open, _)| open == b)
    }

    pub fn is_close_paren(&self, b: u8) -> bool {
        self.parens.iter().any(|&(_, close)| close == b)
    }

    /// The closing delimiter for an opening one.
    pub fn closing_for(&self, open: &str) -> Option<char> {
        let b = *open.as_bytes().first()?;
        self.parens
            .iter()
            .find(|&&(o, _)| o == b)
            .map(|&(_, close)| close as char)
    }

    /// Whether `-` may appear inside identifiers, in which case it is never
    /// rendered densely.
    pub fn dashed_identifiers(&self) -> bool {
        self.ident_chars.dashes
    }
}

static DIALECT_NAMES: phf::Map<&'static str, usize> = phf_map! {
    "bigquery" => 0,
    "db2" => 1,
    "hive" => 2,
    "mariadb" => 3,
    "mysql" => 4,
    "n1ql" => 5,
    "plsql" => 6,
    "postgresql" => 7,
    "redshift" => 8,
    "singlestoredb" => 9,
    "snowflake" => 10,
    "spark" => 11,
    "sql" => 12,
    "sqlite" => 13,
    "transactsql" => 14,
    "tsql" => 14,
    "trino" => 15,
};

const SPECS: [&DialectSpec; 16] = [
    &dialects::bigquery::SPEC,
    &dialects::db2::SPEC,
    &dialects::hive::SPEC,
    &dialects::mariadb::SPEC,
    &dialects::mysql::SPEC,
    &dialects::n1ql::SPEC,
    &dialects::plsql::SPEC,
    &dialects::postgresql::SPEC,
    &dialects::redshift::SPEC,
    &dialects::singlestoredb::SPEC,
    &dialects::snowflake::SPEC,
    &dialects::spark::SPEC,
    &dialects::sql::SPEC,
    &dialects::sqlite::SPEC,
    &dialects::transactsql::SPEC,
    &dialects::trino::SPEC,
];

static COMPILED: [OnceLock<Result<DialectConfig, TemplateError>>; 16] =
    [const { OnceLock::new() }; 16];

/// Resolve a dialect name (case-insensitive, aliases included) to its
/// compiled configuration.
pub fn dialect_from_name(name: &str) -> Result<&'static DialectConfig, FormatError> {
    let index = DIALECT_NAMES
        .get(name.to_ascii_lowercase().as_str())
        .copied()
        .ok_or_else(|| FormatError::Config(format!("Unsupported SQL dialect: {}", name)))?;
    COMPILED[index]
        .get_or_init(|| DialectConfig::build(SPECS[index]))
        .as_ref()
        .map_err(|e| FormatError::Template(e.clone()))
}

/// The authoring tables behind a built-in dialect name, for callers deriving a custom dialect.
pub fn spec_for_name(name: &str) -> Option<&'static DialectSpec> {
    DIALECT_NAMES
        .get(name.to_ascii_lowercase().as_str())
        .map(|&i| SPECS[i])
}

/// All accepted dialect names, aliases included, sorted.
pub fn supported_dialects() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = DIALECT_NAMES.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_dialects_compile() {
        for name in supported_dialects() {
            let config = dialect_from_name(name)
                .unwrap_or_else(|e| panic!("dialect {name} failed to compile: {e}"));
            assert!(!config.phrases_starting_with("SELECT").is_empty(), "{name}");
            assert!(config.is_keyword("CASE"), "{name} lacks CASE");
            assert!(config.is_keyword("END"), "{name} lacks END");
        }
    }

    #[test]
    fn test_supported_dialect_names() {
        let names = supported_dialects();
        assert_eq!(names.len(), 17);
        assert!(names.contains(&"tsql"));
        assert!(names.contains(&"postgresql"));
    }

    #[test]
    fn test_alias_resolves_to_same_config() {
        let a = dialect_from_name("tsql").unwrap();
        let b = dialect_from_name("transactsql").unwrap();
        assert!(std::ptr::eq(a, b));
        assert!(std::ptr::eq(a, dialect_from_name("TSQL").unwrap()));
    }

    #[test]
    fn test_unknown_dialect() {
        let err = dialect_from_name("cobol").unwrap_err();
        assert_eq!(
            err.to_string(),
            "sqlformatter config error: Unsupported SQL dialect: cobol"
        );
    }

    #[test]
    fn test_phrase_bucket_order() {
        let config = dialect_from_name("sql").unwrap();
        let bucket = config.phrases_starting_with("GROUP");
        assert_eq!(bucket[0].phrase.to_string(), "GROUP BY");
        let lefts: Vec<String> = config
            .phrases_starting_with("LEFT")
            .iter()
            .map(|e| e.phrase.to_string())
            .collect();
        assert_eq!(lefts[0], "LEFT OUTER JOIN");
        assert!(lefts.contains(&"LEFT JOIN".to_string()));
    }

    #[test]
    fn test_operators_longest_first() {
        let config = dialect_from_name("postgresql").unwrap();
        let ops = config.operators();
        let pos = |s: &str| ops.iter().position(|o| *o == s).unwrap();
        assert!(pos("::") < pos("<"));
        assert!(pos("<=") < pos("="));
        assert!(config.is_always_dense("::"));
    }

    #[test]
    fn test_custom_dialect() {
        const SPEC: DialectSpec = DialectSpec {
            name: "tiny",
            commands: &[&["SELECT"]],
            clauses: &[&["FROM", "GROUP BY"]],
            oneline_clauses: &[],
            set_operations: &[&["UNION [ALL]"]],
            joins: &[&["JOIN"]],
            dependent_clauses: &[&["WHEN", "ELSE"]],
            phrases: &[],
            keywords: &[&["CASE", "END", "THEN", "AS", "AND", "OR"]],
            functions: &[&["COUNT"]],
            operators: &[],
            string_types: &[QuoteType::SINGLE_QQ],
            ident_types: &[QuoteType::DOUBLE_QQ],
            ident_chars: IdentChars {
                first: "",
                rest: "",
                dashes: false,
                allow_first_char_number: false,
            },
            nested_block_comments: false,
            line_comments: &["--"],
            param_types: ParamTypes {
                positional: true,
                numbered: &[],
                named: &[],
                quoted: &[],
            },
            extra_parens: &[],
            always_dense_operators: &[],
        };
        let config = DialectConfig::build(&SPEC).unwrap();
        assert_eq!(config.phrases_starting_with("UNION").len(), 2);
        assert!(config.is_function("COUNT"));
        assert_eq!(config.closing_for("("), Some(')'));
        assert_eq!(config.closing_for("["), None);
    }

    #[test]
    fn test_bad_template_reported() {
        let spec = DialectSpec {
            commands: &[&["SELECT [ALL"]],
            ..*spec_for_name("sql").unwrap()
        };
        assert!(DialectConfig::build(&spec).is_err());
    }
}
