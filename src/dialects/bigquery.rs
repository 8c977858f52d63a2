//! Google BigQuery.

use crate::dialect::{DialectSpec, IdentChars, ParamTypes, QuoteType};
use crate::dialects::common;
use crate::string_utils::Escape;

const COMMANDS: &[&str] = &[
    "SELECT [ALL | DISTINCT] [AS STRUCT | AS VALUE]",
    "INSERT [INTO]",
    "CREATE [OR REPLACE] [TEMP | TEMPORARY | SNAPSHOT | EXTERNAL] TABLE [IF NOT EXISTS]",
    "CREATE [OR REPLACE] [MATERIALIZED] VIEW [IF NOT EXISTS]",
    "CREATE [OR REPLACE] [TEMP | TEMPORARY | TABLE] FUNCTION [IF NOT EXISTS]",
    "CREATE [OR REPLACE] PROCEDURE [IF NOT EXISTS]",
    "CREATE SCHEMA [IF NOT EXISTS]",
    "DROP [SNAPSHOT | EXTERNAL] TABLE [IF EXISTS]",
    "DROP [MATERIALIZED] VIEW [IF EXISTS]",
    "DROP SCHEMA [IF EXISTS]",
    "DROP FUNCTION [IF EXISTS]",
    "ALTER TABLE [IF EXISTS]",
    "ALTER VIEW [IF EXISTS]",
    "DECLARE",
    "EXPORT DATA",
    "CALL",
    "BEGIN [TRANSACTION]",
    "COMMIT [TRANSACTION]",
    "ROLLBACK [TRANSACTION]",
];

const CLAUSES: &[&str] = &[
    "QUALIFY",
    "WHEN [NOT] MATCHED [BY SOURCE | BY TARGET] [THEN]",
    "OPTIONS",
    "CLUSTER BY",
    "RETURNS",
    "LANGUAGE",
];

const ONELINE_CLAUSES: &[&str] = &[
    "ADD COLUMN [IF NOT EXISTS]",
    "DROP COLUMN [IF EXISTS]",
    "RENAME {TO | COLUMN}",
    "ALTER COLUMN [IF EXISTS]",
    "SET DEFAULT COLLATE",
    "SET OPTIONS",
];

const JOINS: &[&str] = &["{LEFT | RIGHT | FULL | CROSS | INNER} [OUTER] JOIN"];

const KEYWORDS: &[&str] = &[
    "ASSERT_ROWS_MODIFIED",
    "BYTES",
    "CONTAINS",
    "CUBE",
    "DATETIME",
    "DEFINE",
    "ENUM",
    "EXCLUDE",
    "FLOAT64",
    "GEOGRAPHY",
    "GROUPING",
    "HASH",
    "IGNORE",
    "INT64",
    "JSON",
    "LOOKUP",
    "NEW",
    "PROTO",
    "RESPECT",
    "ROLLUP",
    "STRING",
    "STRUCT",
    "TABLESAMPLE",
    "TREAT",
    "UNNEST",
];

const FUNCTIONS: &[&str] = &[
    "ANY_VALUE",
    "APPROX_COUNT_DISTINCT",
    "ARRAY_CONCAT",
    "ARRAY_LENGTH",
    "ARRAY_TO_STRING",
    "COUNTIF",
    "DATE_ADD",
    "DATE_DIFF",
    "DATE_SUB",
    "DATE_TRUNC",
    "DATETIME_TRUNC",
    "FORMAT_DATE",
    "GENERATE_ARRAY",
    "GENERATE_DATE_ARRAY",
    "IFNULL",
    "JSON_EXTRACT",
    "JSON_EXTRACT_SCALAR",
    "JSON_VALUE",
    "LOGICAL_AND",
    "LOGICAL_OR",
    "PARSE_DATE",
    "REGEXP_CONTAINS",
    "REGEXP_EXTRACT",
    "SAFE_CAST",
    "SAFE_DIVIDE",
    "SPLIT",
    "STRING_AGG",
    "TIMESTAMP_TRUNC",
];

pub const SPEC: DialectSpec = DialectSpec {
    name: "bigquery",
    commands: &[common::COMMANDS, COMMANDS],
    clauses: &[common::CLAUSES, CLAUSES],
    oneline_clauses: &[ONELINE_CLAUSES],
    set_operations: &[common::SET_OPERATIONS],
    joins: &[common::JOINS, JOINS],
    dependent_clauses: &[common::DEPENDENT_CLAUSES],
    phrases: &[common::PHRASES],
    keywords: &[common::KEYWORDS, KEYWORDS],
    functions: &[common::FUNCTIONS, FUNCTIONS],
    operators: &["&", "|", "^", "~", ">>", "<<", "||", "=>"],
    string_types: &[
        QuoteType::triple(b'\'').with_prefixes(&["RB", "BR", "R", "B"]),
        QuoteType::triple(b'"').with_prefixes(&["RB", "BR", "R", "B"]),
        QuoteType::delimited(b'\'', b'\'', Escape::Backslash).with_prefixes(&["RB", "BR", "R", "B"]),
        QuoteType::delimited(b'"', b'"', Escape::Backslash).with_prefixes(&["RB", "BR", "R", "B"]),
    ],
    ident_types: &[QuoteType::BACKTICK],
    ident_chars: IdentChars {
        first: "",
        rest: "",
        dashes: true,
        allow_first_char_number: false,
    },
    nested_block_comments: false,
    line_comments: &["--", "#"],
    param_types: ParamTypes {
        positional: true,
        numbered: &[],
        named: &["@"],
        quoted: &["@"],
    },
    extra_parens: &["[]"],
    always_dense_operators: &[],
};
