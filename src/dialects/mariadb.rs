//! MariaDB. Shares most of its tables with MySQL.

use crate::dialect::{DialectSpec, ParamTypes, QuoteType};
use crate::dialects::{common, mysql};

const COMMANDS: &[&str] = &[
    "CREATE [OR REPLACE] SEQUENCE [IF NOT EXISTS]",
    "DROP SEQUENCE [IF EXISTS]",
    "SHOW {ENGINES | PLUGINS}",
];

const CLAUSES: &[&str] = &["RETURNING"];

const FUNCTIONS: &[&str] = &["COLUMN_GET", "COLUMN_CREATE", "NEXTVAL", "LASTVAL", "SETVAL"];

pub const SPEC: DialectSpec = DialectSpec {
    name: "mariadb",
    commands: &[common::COMMANDS, mysql::COMMANDS, COMMANDS],
    clauses: &[common::CLAUSES, mysql::CLAUSES, CLAUSES],
    oneline_clauses: &[mysql::ONELINE_CLAUSES],
    set_operations: &[common::SET_OPERATIONS, &["MINUS [ALL | DISTINCT]"]],
    joins: &[common::JOINS, mysql::JOINS],
    dependent_clauses: &[common::DEPENDENT_CLAUSES],
    phrases: &[common::PHRASES, mysql::PHRASES],
    keywords: &[common::KEYWORDS, mysql::KEYWORDS],
    functions: &[common::FUNCTIONS, mysql::FUNCTIONS, FUNCTIONS],
    operators: mysql::OPERATORS,
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
    always_dense_operators: &[],
};
