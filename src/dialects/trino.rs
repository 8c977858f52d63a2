//! Trino (formerly PrestoSQL).

use crate::dialect::{DialectSpec, IdentChars, ParamTypes, QuoteType};
use crate::dialects::common;

const COMMANDS: &[&str] = &[
    "CREATE [OR REPLACE] [MATERIALIZED] VIEW",
    "CREATE TABLE [IF NOT EXISTS]",
    "CREATE {SCHEMA | ROLE} [IF NOT EXISTS]",
    "DROP {SCHEMA | ROLE} [IF EXISTS]",
    "ALTER {SCHEMA | VIEW | MATERIALIZED VIEW}",
    "REFRESH MATERIALIZED VIEW",
    "DESCRIBE [INPUT | OUTPUT]",
    "EXPLAIN [ANALYZE] [VERBOSE]",
    "SHOW {CATALOGS | COLUMNS | CREATE TABLE | CREATE VIEW | FUNCTIONS | GRANTS | ROLES | SCHEMAS | SESSION | STATS | TABLES}",
    "PREPARE",
    "EXECUTE",
    "DEALLOCATE PREPARE",
    "USE",
    "CALL",
    "GRANT",
    "REVOKE",
    "START TRANSACTION",
    "COMMIT [WORK]",
    "ROLLBACK [WORK]",
    "RESET SESSION",
    "SET SESSION",
];

const CLAUSES: &[&str] = &[
    "MATCH_RECOGNIZE",
    "MEASURES",
    "ONE ROW PER MATCH",
    "ALL ROWS PER MATCH",
    "AFTER MATCH",
    "PATTERN",
    "SUBSET",
    "DEFINE",
];

const ONELINE_CLAUSES: &[&str] = &[
    "ADD COLUMN [IF NOT EXISTS]",
    "DROP COLUMN [IF EXISTS]",
    "RENAME {TO | COLUMN}",
    "ALTER COLUMN",
    "SET AUTHORIZATION",
    "SET PROPERTIES",
];

const PHRASES: &[&str] = &["{ROWS | RANGE | GROUPS} BETWEEN", "AT TIME ZONE"];

const KEYWORDS: &[&str] = &[
    "ARRAY",
    "BERNOULLI",
    "CUBE",
    "GROUPING",
    "IPADDRESS",
    "JSON",
    "MAP",
    "ORDINALITY",
    "ROLLUP",
    "SETS",
    "SYSTEM",
    "TABLESAMPLE",
    "TINYINT",
    "UNNEST",
    "UUID",
    "VARBINARY",
];

const FUNCTIONS: &[&str] = &[
    "APPROX_DISTINCT",
    "APPROX_PERCENTILE",
    "ARBITRARY",
    "ARRAY_JOIN",
    "CARDINALITY",
    "CONTAINS",
    "DATE_ADD",
    "DATE_DIFF",
    "DATE_FORMAT",
    "DATE_PARSE",
    "DATE_TRUNC",
    "ELEMENT_AT",
    "FILTER",
    "FROM_UNIXTIME",
    "JSON_EXTRACT",
    "JSON_EXTRACT_SCALAR",
    "MAP_AGG",
    "REDUCE",
    "REGEXP_LIKE",
    "SPLIT",
    "TRANSFORM",
    "TRY",
    "TRY_CAST",
];

pub const SPEC: DialectSpec = DialectSpec {
    name: "trino",
    commands: &[common::COMMANDS, COMMANDS],
    clauses: &[common::CLAUSES, CLAUSES],
    oneline_clauses: &[ONELINE_CLAUSES],
    set_operations: &[common::SET_OPERATIONS],
    joins: &[common::JOINS],
    dependent_clauses: &[common::DEPENDENT_CLAUSES],
    phrases: &[common::PHRASES, PHRASES],
    keywords: &[common::KEYWORDS, KEYWORDS],
    functions: &[common::FUNCTIONS, FUNCTIONS],
    operators: &["%", "->", "=>", "||", "|", "^"],
    string_types: &[QuoteType::SINGLE_QQ.with_prefixes(&["U&", "X"])],
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
    extra_parens: &["[]", "{}"],
    always_dense_operators: &[],
};
