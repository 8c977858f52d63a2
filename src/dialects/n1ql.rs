//! Couchbase N1QL.

use crate::dialect::{DialectSpec, IdentChars, ParamTypes, QuoteType};
use crate::dialects::common;

const COMMANDS: &[&str] = &[
    "UPSERT INTO",
    "INSERT INTO",
    "CREATE [PRIMARY] INDEX",
    "CREATE {SCOPE | COLLECTION | FUNCTION}",
    "DROP [PRIMARY] INDEX",
    "DROP {SCOPE | COLLECTION | FUNCTION}",
    "BUILD INDEX",
    "EXECUTE FUNCTION",
    "EXPLAIN",
    "INFER",
    "PREPARE",
    "GRANT",
    "REVOKE",
];

const CLAUSES: &[&str] = &[
    "USE KEYS",
    "USE INDEX",
    "USE HASH",
    "UNNEST",
    "NEST",
    "LET",
    "LETTING",
    "RETURNING",
    "UNSET",
    "WHEN [NOT] MATCHED THEN",
];

const JOINS: &[&str] = &["{LEFT | RIGHT} [OUTER] {NEST | UNNEST}", "INNER {NEST | UNNEST}"];

const PHRASES: &[&str] = &["{SATISFIES | WITHIN} [ANY | EVERY]"];

const KEYWORDS: &[&str] = &[
    "ANY",
    "ARRAY",
    "BUCKET",
    "EVERY",
    "FIRST",
    "KEYSPACE",
    "MISSING",
    "RAW",
    "SATISFIES",
    "USE",
    "VALUED",
];

const FUNCTIONS: &[&str] = &[
    "ARRAY_AGG",
    "ARRAY_APPEND",
    "ARRAY_CONTAINS",
    "ARRAY_COUNT",
    "ARRAY_LENGTH",
    "IFMISSING",
    "IFMISSINGORNULL",
    "IFNULL",
    "META",
    "OBJECT_NAMES",
    "STR_TO_MILLIS",
    "TOSTRING",
];

pub const SPEC: DialectSpec = DialectSpec {
    name: "n1ql",
    commands: &[common::COMMANDS, COMMANDS],
    clauses: &[common::CLAUSES, CLAUSES],
    oneline_clauses: &[],
    set_operations: &[common::SET_OPERATIONS],
    joins: &[common::JOINS, JOINS],
    dependent_clauses: &[common::DEPENDENT_CLAUSES],
    phrases: &[common::PHRASES, PHRASES],
    keywords: &[common::KEYWORDS, KEYWORDS],
    functions: &[common::FUNCTIONS, FUNCTIONS],
    operators: &["%", "==", ":", "||"],
    string_types: &[QuoteType::DOUBLE_QQ_BS, QuoteType::SINGLE_QQ_BS],
    ident_types: &[QuoteType::BACKTICK],
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
        numbered: &["$"],
        named: &["$"],
        quoted: &[],
    },
    extra_parens: &["[]", "{}"],
    always_dense_operators: &[],
};
