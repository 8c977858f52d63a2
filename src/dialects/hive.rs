//! Apache Hive.

use crate::dialect::{DialectSpec, IdentChars, ParamTypes, QuoteType};
use crate::dialects::common;

const COMMANDS: &[&str] = &[
    "INSERT {INTO | OVERWRITE} [TABLE]",
    "CREATE [TEMPORARY] [EXTERNAL] TABLE [IF NOT EXISTS]",
    "CREATE {DATABASE | SCHEMA} [IF NOT EXISTS]",
    "CREATE [TEMPORARY] FUNCTION",
    "DROP {DATABASE | SCHEMA} [IF EXISTS]",
    "ALTER {DATABASE | SCHEMA | VIEW}",
    "LOAD DATA [LOCAL] INPATH",
    "DESCRIBE [EXTENDED | FORMATTED]",
    "SHOW {DATABASES | TABLES | PARTITIONS | FUNCTIONS}",
    "USE",
];

const CLAUSES: &[&str] = &[
    "SORT BY",
    "CLUSTER BY",
    "DISTRIBUTE BY",
    "LATERAL VIEW [OUTER]",
    "ROW FORMAT",
    "STORED AS",
    "LOCATION",
    "TBLPROPERTIES",
    "PARTITIONED BY",
    "CLUSTERED BY",
];

const ONELINE_CLAUSES: &[&str] = &["ADD COLUMNS", "REPLACE COLUMNS", "RENAME TO", "CHANGE [COLUMN]"];

const JOINS: &[&str] = &["LEFT SEMI JOIN"];

const KEYWORDS: &[&str] = &[
    "ARRAY",
    "BINARY",
    "DELIMITED",
    "EXTENDED",
    "EXTERNAL",
    "FIELDS",
    "FORMATTED",
    "LINES",
    "MAP",
    "OVERWRITE",
    "PARQUET",
    "SERDE",
    "STRING",
    "STRUCT",
    "TERMINATED",
    "TEXTFILE",
    "TINYINT",
];

const FUNCTIONS: &[&str] = &[
    "COLLECT_LIST",
    "COLLECT_SET",
    "CONCAT_WS",
    "DATE_ADD",
    "DATE_FORMAT",
    "DATE_SUB",
    "DATEDIFF",
    "EXPLODE",
    "FROM_UNIXTIME",
    "GET_JSON_OBJECT",
    "IF",
    "NVL",
    "POSEXPLODE",
    "REGEXP_EXTRACT",
    "REGEXP_REPLACE",
    "SIZE",
    "SPLIT",
    "SUBSTR",
    "TO_DATE",
    "UNIX_TIMESTAMP",
];

pub const SPEC: DialectSpec = DialectSpec {
    name: "hive",
    commands: &[common::COMMANDS, COMMANDS],
    clauses: &[common::CLAUSES, CLAUSES],
    oneline_clauses: &[ONELINE_CLAUSES],
    set_operations: &[common::SET_OPERATIONS],
    joins: &[common::JOINS, JOINS],
    dependent_clauses: &[common::DEPENDENT_CLAUSES],
    phrases: &[common::PHRASES],
    keywords: &[common::KEYWORDS, KEYWORDS],
    functions: &[common::FUNCTIONS, FUNCTIONS],
    operators: &["%", "~", "^", "|", "&", "<=>", "==", "!", "||"],
    string_types: &[QuoteType::SINGLE_QQ_BS, QuoteType::DOUBLE_QQ_BS],
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
        positional: false,
        numbered: &[],
        named: &[],
        quoted: &[],
    },
    extra_parens: &["[]"],
    always_dense_operators: &[],
};
