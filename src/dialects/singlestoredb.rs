//! SingleStoreDB. MySQL-compatible with a few cast operators of its own.

use crate::dialect::{DialectSpec, ParamTypes, QuoteType};
use crate::dialects::{common, mysql};

const COMMANDS: &[&str] = &[
    "CREATE [ROWSTORE] [REFERENCE | TEMPORARY | GLOBAL TEMPORARY] TABLE [IF NOT EXISTS]",
    "CREATE [OR REPLACE] PIPELINE",
    "START PIPELINE",
    "STOP PIPELINE",
    "OPTIMIZE TABLE",
];

const CLAUSES: &[&str] = &["SHARD KEY", "SORT KEY"];

const OPERATORS: &[&str] = &[
    "%", ":=", "<<", ">>", "<=>", "&&", "||", "!", "&", "|", "^", "~", "->", "->>", "::$", "::%",
    "::", ":>", "!:>",
];

const FUNCTIONS: &[&str] = &["APPROX_COUNT_DISTINCT", "JSON_AGG", "TO_JSON", "VECTOR_SUB"];

pub const SPEC: DialectSpec = DialectSpec {
    name: "singlestoredb",
    commands: &[common::COMMANDS, mysql::COMMANDS, COMMANDS],
    clauses: &[common::CLAUSES, mysql::CLAUSES, CLAUSES],
    oneline_clauses: &[mysql::ONELINE_CLAUSES],
    set_operations: &[common::SET_OPERATIONS, &["MINUS"]],
    joins: &[common::JOINS, mysql::JOINS],
    dependent_clauses: &[common::DEPENDENT_CLAUSES],
    phrases: &[common::PHRASES, mysql::PHRASES],
    keywords: &[common::KEYWORDS, mysql::KEYWORDS],
    functions: &[common::FUNCTIONS, mysql::FUNCTIONS, FUNCTIONS],
    operators: OPERATORS,
    string_types: mysql::STRING_TYPES,
    ident_types: &[QuoteType::BACKTICK],
    ident_chars: mysql::IDENT_CHARS,
    nested_block_comments: false,
    line_comments: &["--", "#"],
    param_types: ParamTypes {
        positional: true,
        numbered: &[],
        named: &[],
        quoted: &[],
    },
    extra_parens: &[],
    always_dense_operators: &["::", "::$", "::%"],
};
