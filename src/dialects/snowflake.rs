//! Snowflake.

use crate::dialect::{DialectSpec, IdentChars, ParamTypes, QuoteType};
use crate::dialects::common;

const COMMANDS: &[&str] = &[
    "CREATE [OR REPLACE] [SECURE] [RECURSIVE] VIEW [IF NOT EXISTS]",
    "CREATE [OR REPLACE] [SECURE] MATERIALIZED VIEW [IF NOT EXISTS]",
    "CREATE [OR REPLACE] [{LOCAL | GLOBAL} {TEMP | TEMPORARY | VOLATILE}] [TRANSIENT] TABLE [IF NOT EXISTS]",
    "CREATE [OR REPLACE] {DATABASE | SCHEMA | WAREHOUSE | STAGE | STREAM | TASK | PIPE | SEQUENCE} [IF NOT EXISTS]",
    "CREATE [OR REPLACE] [SECURE] {FUNCTION | PROCEDURE}",
    "ALTER {DATABASE | SCHEMA | WAREHOUSE | STAGE | STREAM | TASK | PIPE | VIEW} [IF EXISTS]",
    "DROP {DATABASE | SCHEMA | WAREHOUSE | STAGE | STREAM | TASK | PIPE | SEQUENCE} [IF EXISTS]",
    "COPY INTO",
    "PUT",
    "GET",
    "LIST",
    "REMOVE",
    "UNDROP {TABLE | SCHEMA | DATABASE}",
    "USE [ROLE | WAREHOUSE | DATABASE | SCHEMA]",
    "SHOW",
    "DESCRIBE",
    "GRANT",
    "REVOKE",
    "CALL",
    "BEGIN [TRANSACTION]",
    "COMMIT",
    "ROLLBACK",
];

const CLAUSES: &[&str] = &[
    "QUALIFY",
    "CLUSTER BY",
    "COPY GRANTS",
    "LATERAL FLATTEN",
    "START WITH",
    "CONNECT BY",
    "MATCH_RECOGNIZE",
    "PIVOT",
    "UNPIVOT",
    "WHEN [NOT] MATCHED [THEN]",
];

const ONELINE_CLAUSES: &[&str] = &[
    "ADD [COLUMN]",
    "DROP [COLUMN]",
    "RENAME {TO | COLUMN}",
    "ALTER [COLUMN]",
    "SWAP WITH",
];

const SET_OPERATIONS: &[&str] = &["MINUS"];

const JOINS: &[&str] = &["ASOF JOIN"];

const PHRASES: &[&str] = &["{ROWS | RANGE} BETWEEN", "NULLS {FIRST | LAST}"];

const KEYWORDS: &[&str] = &[
    "ARRAY",
    "BINARY",
    "FLATTEN",
    "ILIKE",
    "NUMBER",
    "OBJECT",
    "RLIKE",
    "SECURE",
    "STRING",
    "TEXT",
    "TIMESTAMP_LTZ",
    "TIMESTAMP_NTZ",
    "TIMESTAMP_TZ",
    "TRANSIENT",
    "VARIANT",
    "WAREHOUSE",
];

const FUNCTIONS: &[&str] = &[
    "ARRAY_AGG",
    "ARRAY_CONSTRUCT",
    "ARRAY_SIZE",
    "CONVERT_TIMEZONE",
    "DATE_TRUNC",
    "DATEADD",
    "DATEDIFF",
    "DIV0",
    "FLATTEN",
    "IFF",
    "IFNULL",
    "LISTAGG",
    "NVL",
    "OBJECT_CONSTRUCT",
    "PARSE_JSON",
    "SPLIT_PART",
    "TO_DATE",
    "TO_TIMESTAMP",
    "TO_VARCHAR",
    "TRY_CAST",
    "ZEROIFNULL",
];

pub const SPEC: DialectSpec = DialectSpec {
    name: "snowflake",
    commands: &[common::COMMANDS, COMMANDS],
    clauses: &[common::CLAUSES, CLAUSES],
    oneline_clauses: &[ONELINE_CLAUSES],
    set_operations: &[common::SET_OPERATIONS, SET_OPERATIONS],
    joins: &[common::JOINS, JOINS],
    dependent_clauses: &[common::DEPENDENT_CLAUSES],
    phrases: &[common::PHRASES, PHRASES],
    keywords: &[common::KEYWORDS, KEYWORDS],
    functions: &[common::FUNCTIONS, FUNCTIONS],
    operators: &["%", "::", "||", ":", "=>", "->"],
    string_types: &[QuoteType::DOLLAR, QuoteType::SINGLE_QQ_BS.with_prefixes(&["X"])],
    ident_types: &[QuoteType::DOUBLE_QQ],
    ident_chars: IdentChars {
        first: "",
        rest: "$",
        dashes: false,
        allow_first_char_number: false,
    },
    nested_block_comments: false,
    line_comments: &["--", "//"],
    param_types: ParamTypes {
        positional: true,
        numbered: &[],
        named: &[],
        quoted: &[],
    },
    extra_parens: &["[]", "{}"],
    always_dense_operators: &[":", "::"],
};
