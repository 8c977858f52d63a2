//! Standard SQL.

use crate::dialect::{DialectSpec, IdentChars, ParamTypes, QuoteType};
use crate::dialects::common;

const COMMANDS: &[&str] = &[
    "CREATE [RECURSIVE] VIEW",
    "ALTER TABLE",
    "SET SCHEMA",
    "BEGIN [TRANSACTION]",
    "COMMIT [WORK]",
    "ROLLBACK [WORK]",
];

const ONELINE_CLAUSES: &[&str] = &[
    "ADD [COLUMN]",
    "DROP [COLUMN]",
    "RENAME TO",
    "RENAME [COLUMN]",
    "ALTER [COLUMN]",
];

const KEYWORDS: &[&str] = &[
    "ASYMMETRIC",
    "AUTHORIZATION",
    "BLOB",
    "CLOB",
    "CYCLE",
    "DEFERRABLE",
    "GRANT",
    "IDENTITY",
    "NCHAR",
    "OVERLAPS",
    "SIMILAR",
    "SYMMETRIC",
    "WORK",
];

pub const SPEC: DialectSpec = DialectSpec {
    name: "sql",
    commands: &[common::COMMANDS, COMMANDS],
    clauses: &[common::CLAUSES],
    oneline_clauses: &[ONELINE_CLAUSES],
    set_operations: &[common::SET_OPERATIONS],
    joins: &[common::JOINS],
    dependent_clauses: &[common::DEPENDENT_CLAUSES],
    phrases: &[common::PHRASES],
    keywords: &[common::KEYWORDS, KEYWORDS],
    functions: &[common::FUNCTIONS],
    operators: &["%", "||"],
    string_types: &[QuoteType::SINGLE_QQ_BS.with_prefixes(&["X"])],
    ident_types: &[QuoteType::DOUBLE_QQ, QuoteType::BACKTICK],
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
    extra_parens: &["[]"],
    always_dense_operators: &[],
};
