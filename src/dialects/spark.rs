//! Apache Spark SQL.

use crate::dialect::{DialectSpec, IdentChars, ParamTypes, QuoteType};
use crate::dialects::common;

const COMMANDS: &[&str] = &[
    "INSERT [INTO | OVERWRITE] [TABLE]",
    "CREATE [OR REPLACE] [GLOBAL TEMPORARY | TEMPORARY] VIEW [IF NOT EXISTS]",
    "CREATE [EXTERNAL] TABLE [IF NOT EXISTS]",
    "CREATE {DATABASE | SCHEMA} [IF NOT EXISTS]",
    "CREATE [OR REPLACE] [TEMPORARY] FUNCTION [IF NOT EXISTS]",
    "DROP {DATABASE | SCHEMA | FUNCTION} [IF EXISTS]",
    "ALTER {DATABASE | SCHEMA | VIEW}",
    "CACHE [LAZY] TABLE",
    "UNCACHE TABLE [IF EXISTS]",
    "CLEAR CACHE",
    "REFRESH [TABLE | FUNCTION]",
    "ANALYZE TABLE",
    "DESCRIBE [EXTENDED | FORMATTED] [TABLE | DATABASE | FUNCTION | QUERY]",
    "SHOW {COLUMNS | DATABASES | FUNCTIONS | PARTITIONS | TABLES | VIEWS}",
    "LOAD DATA [LOCAL] INPATH",
    "USE",
];

const CLAUSES: &[&str] = &[
    "SORT BY",
    "CLUSTER BY",
    "DISTRIBUTE BY",
    "LATERAL VIEW [OUTER]",
    "PIVOT",
    "UNPIVOT",
    "TABLESAMPLE",
    "PARTITIONED BY",
    "CLUSTERED BY",
    "LOCATION",
    "TBLPROPERTIES",
    "OPTIONS",
];

const ONELINE_CLAUSES: &[&str] = &[
    "ADD {COLUMN | COLUMNS}",
    "DROP {COLUMN | COLUMNS}",
    "RENAME {TO | COLUMN}",
    "ALTER COLUMN",
];

const SET_OPERATIONS: &[&str] = &["MINUS"];

const JOINS: &[&str] = &["[LEFT] {ANTI | SEMI} JOIN", "NATURAL {ANTI | SEMI} JOIN"];

const KEYWORDS: &[&str] = &[
    "ARRAY",
    "BINARY",
    "BYTE",
    "DIV",
    "EXTERNAL",
    "LAZY",
    "MAP",
    "OVERWRITE",
    "PARQUET",
    "RLIKE",
    "STRING",
    "STRUCT",
    "TINYINT",
];

const FUNCTIONS: &[&str] = &[
    "APPROX_COUNT_DISTINCT",
    "ARRAY_CONTAINS",
    "COLLECT_LIST",
    "COLLECT_SET",
    "CONCAT_WS",
    "DATE_ADD",
    "DATE_FORMAT",
    "DATE_SUB",
    "DATEDIFF",
    "EXPLODE",
    "FROM_JSON",
    "GET_JSON_OBJECT",
    "IF",
    "IFNULL",
    "NVL",
    "POSEXPLODE",
    "REGEXP_EXTRACT",
    "SIZE",
    "SPLIT",
    "TO_DATE",
    "TO_JSON",
    "TRANSFORM",
];

pub const SPEC: DialectSpec = DialectSpec {
    name: "spark",
    commands: &[common::COMMANDS, COMMANDS],
    clauses: &[common::CLAUSES, CLAUSES],
    oneline_clauses: &[ONELINE_CLAUSES],
    set_operations: &[common::SET_OPERATIONS, SET_OPERATIONS],
    joins: &[common::JOINS, JOINS],
    dependent_clauses: &[common::DEPENDENT_CLAUSES],
    phrases: &[common::PHRASES],
    keywords: &[common::KEYWORDS, KEYWORDS],
    functions: &[common::FUNCTIONS, FUNCTIONS],
    operators: &["%", "~", "^", "|", "&", "<=>", "==", "!", "||", "->"],
    string_types: &[
        QuoteType::SINGLE_QQ_BS.with_prefixes(&["R", "X"]),
        QuoteType::DOUBLE_QQ_BS.with_prefixes(&["R", "X"]),
    ],
    ident_types: &[QuoteType::BACKTICK],
    ident_chars: IdentChars {
        first: "",
        rest: "",
        dashes: false,
        allow_first_char_number: true,
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
