//! Amazon Redshift.

use crate::dialect::{DialectSpec, IdentChars, ParamTypes, QuoteType};
use crate::dialects::common;

const COMMANDS: &[&str] = &[
    "CREATE [TEMPORARY | TEMP | LOCAL TEMPORARY | LOCAL TEMP] TABLE [IF NOT EXISTS]",
    "ABORT",
    "ALTER DATABASE",
    "ALTER DATASHARE",
    "ALTER DEFAULT PRIVILEGES",
    "ALTER GROUP",
    "ALTER MATERIALIZED VIEW",
    "ALTER PROCEDURE",
    "ALTER SCHEMA",
    "ALTER TABLE APPEND",
    "ALTER USER",
    "ANALYSE [COMPRESSION]",
    "ANALYZE [COMPRESSION]",
    "BEGIN",
    "CALL",
    "CANCEL",
    "CLOSE",
    "COMMENT",
    "COMMIT",
    "COPY",
    "CREATE DATABASE",
    "CREATE DATASHARE",
    "CREATE EXTERNAL {FUNCTION | SCHEMA | TABLE}",
    "CREATE FUNCTION",
    "CREATE GROUP",
    "CREATE LIBRARY",
    "CREATE MODEL",
    "CREATE PROCEDURE",
    "CREATE SCHEMA",
    "CREATE USER",
    "DEALLOCATE",
    "DECLARE",
    "DESC DATASHARE",
    "DROP {DATABASE | DATASHARE | FUNCTION | GROUP | LIBRARY | MODEL | PROCEDURE | SCHEMA | USER}",
    "DROP MATERIALIZED VIEW",
    "EXECUTE",
    "EXPLAIN",
    "FETCH",
    "GRANT",
    "LOCK",
    "PREPARE",
    "REFRESH MATERIALIZED VIEW",
    "RESET",
    "REVOKE",
    "ROLLBACK",
    "SELECT INTO",
    "SET SESSION {AUTHORIZATION | CHARACTERISTICS}",
    "SHOW [EXTERNAL TABLE | MODEL | DATASHARES | PROCEDURE | TABLE | VIEW]",
    "START TRANSACTION",
    "UNLOAD",
    "VACUUM",
];

const CLAUSES: &[&str] = &["QUALIFY"];

const ONELINE_CLAUSES: &[&str] = &["ALTER COLUMN", "ADD [COLUMN]", "DROP COLUMN", "RENAME {TO | COLUMN}"];

const SET_OPERATIONS: &[&str] = &["MINUS"];

const PHRASES: &[&str] = &["NULL AS", "DATA CATALOG", "HIVE METASTORE"];

const KEYWORDS: &[&str] = &[
    "AUTO",
    "BACKUP",
    "BZIP2",
    "DISTKEY",
    "DISTSTYLE",
    "ENCODE",
    "EVEN",
    "GZIP",
    "IAM_ROLE",
    "INTERLEAVED",
    "MANIFEST",
    "SORTKEY",
    "SUPER",
    "ZSTD",
];

const FUNCTIONS: &[&str] = &[
    "CONVERT_TIMEZONE",
    "DATE_PART",
    "DATE_TRUNC",
    "DATEADD",
    "DATEDIFF",
    "GETDATE",
    "JSON_EXTRACT_PATH_TEXT",
    "LISTAGG",
    "MEDIAN",
    "NVL",
    "NVL2",
    "SPLIT_PART",
    "TO_CHAR",
];

pub const SPEC: DialectSpec = DialectSpec {
    name: "redshift",
    commands: &[common::COMMANDS, COMMANDS],
    clauses: &[common::CLAUSES, CLAUSES],
    oneline_clauses: &[ONELINE_CLAUSES],
    set_operations: &[common::SET_OPERATIONS, SET_OPERATIONS],
    joins: &[common::JOINS],
    dependent_clauses: &[common::DEPENDENT_CLAUSES],
    phrases: &[common::PHRASES, PHRASES],
    keywords: &[common::KEYWORDS, KEYWORDS],
    functions: &[common::FUNCTIONS, FUNCTIONS],
    operators: &["%", "~", "|/", "||/", "<<", ">>", "||", "::"],
    string_types: &[QuoteType::SINGLE_QQ],
    ident_types: &[QuoteType::DOUBLE_QQ],
    ident_chars: IdentChars {
        first: "#",
        rest: "",
        dashes: false,
        allow_first_char_number: false,
    },
    nested_block_comments: false,
    line_comments: &["--"],
    param_types: ParamTypes {
        positional: false,
        numbered: &["$"],
        named: &[],
        quoted: &[],
    },
    extra_parens: &[],
    always_dense_operators: &["::"],
};
