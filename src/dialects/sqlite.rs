//! SQLite.

use crate::dialect::{DialectSpec, IdentChars, ParamTypes, QuoteType};
use crate::dialects::common;

const COMMANDS: &[&str] = &[
    "INSERT [OR ABORT | OR FAIL | OR IGNORE | OR REPLACE | OR ROLLBACK] INTO",
    "REPLACE INTO",
    "UPDATE [OR ABORT | OR FAIL | OR IGNORE | OR REPLACE | OR ROLLBACK]",
    "CREATE [TEMPORARY | TEMP] VIEW [IF NOT EXISTS]",
    "CREATE [UNIQUE] INDEX [IF NOT EXISTS]",
    "CREATE [TEMP | TEMPORARY] TRIGGER [IF NOT EXISTS]",
    "CREATE VIRTUAL TABLE [IF NOT EXISTS]",
    "DROP {INDEX | TRIGGER} [IF EXISTS]",
    "ATTACH [DATABASE]",
    "DETACH [DATABASE]",
    "BEGIN [DEFERRED | IMMEDIATE | EXCLUSIVE] [TRANSACTION]",
    "COMMIT [TRANSACTION]",
    "END TRANSACTION",
    "ROLLBACK [TRANSACTION]",
    "SAVEPOINT",
    "RELEASE [SAVEPOINT]",
    "PRAGMA",
    "VACUUM",
    "REINDEX",
    "EXPLAIN [QUERY PLAN]",
];

const CLAUSES: &[&str] = &["RETURNING", "ON CONFLICT", "DO {NOTHING | UPDATE SET}"];

const ONELINE_CLAUSES: &[&str] = &["ADD [COLUMN]", "DROP [COLUMN]", "RENAME {TO | COLUMN}"];

const KEYWORDS: &[&str] = &[
    "ABORT",
    "AUTOINCREMENT",
    "BLOB",
    "CONFLICT",
    "DEFERRED",
    "EXCLUSIVE",
    "FAIL",
    "GLOB",
    "IGNORE",
    "IMMEDIATE",
    "INDEXED",
    "ISNULL",
    "MATCH",
    "NOTHING",
    "NOTNULL",
    "REGEXP",
    "ROWID",
    "TEXT",
    "VIRTUAL",
    "WITHOUT",
];

const FUNCTIONS: &[&str] = &[
    "CHANGES",
    "DATE",
    "DATETIME",
    "GROUP_CONCAT",
    "HEX",
    "IFNULL",
    "IIF",
    "INSTR",
    "JSON",
    "JSON_EXTRACT",
    "JSON_GROUP_ARRAY",
    "JULIANDAY",
    "LAST_INSERT_ROWID",
    "PRINTF",
    "QUOTE",
    "RANDOM",
    "STRFTIME",
    "SUBSTR",
    "TIME",
    "TOTAL",
    "TYPEOF",
    "UNICODE",
];

pub const SPEC: DialectSpec = DialectSpec {
    name: "sqlite",
    commands: &[common::COMMANDS, COMMANDS],
    clauses: &[common::CLAUSES, CLAUSES],
    oneline_clauses: &[ONELINE_CLAUSES],
    set_operations: &[common::SET_OPERATIONS],
    joins: &[common::JOINS],
    dependent_clauses: &[common::DEPENDENT_CLAUSES],
    phrases: &[common::PHRASES],
    keywords: &[common::KEYWORDS, KEYWORDS],
    functions: &[common::FUNCTIONS, FUNCTIONS],
    operators: &["%", "~", "<<", ">>", "==", "&", "|", "||", "->", "->>"],
    string_types: &[QuoteType::SINGLE_QQ.with_prefixes(&["X"])],
    ident_types: &[QuoteType::DOUBLE_QQ, QuoteType::BACKTICK, QuoteType::BRACKETS],
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
        numbered: &["?"],
        named: &[":", "@", "$"],
        quoted: &[],
    },
    extra_parens: &[],
    always_dense_operators: &[],
};
