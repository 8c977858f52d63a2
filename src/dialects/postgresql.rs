//! PostgreSQL.

use crate::dialect::{DialectSpec, IdentChars, ParamTypes, QuoteType};
use crate::dialects::common;
use crate::string_utils::Escape;

const COMMANDS: &[&str] = &[
    "CREATE [OR REPLACE] [TEMP | TEMPORARY] [RECURSIVE] VIEW [IF NOT EXISTS]",
    "CREATE MATERIALIZED VIEW [IF NOT EXISTS]",
    "CREATE [GLOBAL | LOCAL] [TEMPORARY | TEMP | UNLOGGED] TABLE [IF NOT EXISTS]",
    "CREATE [UNIQUE] INDEX [CONCURRENTLY] [IF NOT EXISTS]",
    "CREATE [OR REPLACE] {FUNCTION | PROCEDURE | TRIGGER | RULE}",
    "CREATE {SCHEMA | SEQUENCE | EXTENSION | TYPE | DOMAIN | ROLE | DATABASE} [IF NOT EXISTS]",
    "DROP {INDEX | SCHEMA | SEQUENCE | EXTENSION | TYPE | DOMAIN | ROLE | DATABASE | FUNCTION} [IF EXISTS]",
    "DROP MATERIALIZED VIEW [IF EXISTS]",
    "ALTER {INDEX | SCHEMA | SEQUENCE | TYPE | ROLE | DATABASE | FUNCTION} [IF EXISTS]",
    "ALTER TABLE [IF EXISTS] [ONLY]",
    "REFRESH MATERIALIZED VIEW [CONCURRENTLY]",
    "COMMENT ON",
    "COPY",
    "EXPLAIN [ANALYZE] [VERBOSE]",
    "VACUUM [FULL] [FREEZE] [VERBOSE] [ANALYZE]",
    "ANALYZE [VERBOSE]",
    "GRANT",
    "REVOKE",
    "LISTEN",
    "NOTIFY",
    "BEGIN [TRANSACTION | WORK]",
    "START TRANSACTION",
    "COMMIT [TRANSACTION | WORK]",
    "ROLLBACK [TRANSACTION | WORK]",
    "SAVEPOINT",
    "SET {SESSION | LOCAL}",
    "RESET",
    "SHOW",
    "DO",
];

const CLAUSES: &[&str] = &[
    "RETURNING",
    "ON CONFLICT",
    "DO {NOTHING | UPDATE SET}",
    "FOR {UPDATE | NO KEY UPDATE | SHARE | KEY SHARE} [OF]",
    "WHERE CURRENT OF",
];

const ONELINE_CLAUSES: &[&str] = &[
    "ADD [COLUMN] [IF NOT EXISTS]",
    "DROP [COLUMN] [IF EXISTS]",
    "ALTER [COLUMN]",
    "RENAME [COLUMN]",
    "RENAME TO",
    "SET SCHEMA",
    "OWNER TO",
];

const PHRASES: &[&str] = &[
    "AT TIME ZONE",
    "{ROWS | RANGE | GROUPS} BETWEEN",
    "GENERATED {ALWAYS | BY DEFAULT} AS IDENTITY",
    "DEFAULT VALUES",
];

const KEYWORDS: &[&str] = &[
    "BYTEA",
    "CONCURRENTLY",
    "CONFLICT",
    "DOUBLE",
    "ILIKE",
    "JSON",
    "JSONB",
    "NOTHING",
    "SERIAL",
    "BIGSERIAL",
    "SIMILAR",
    "TEXT",
    "TIMESTAMPTZ",
    "UNLOGGED",
    "UUID",
    "VARIADIC",
];

const FUNCTIONS: &[&str] = &[
    "AGE",
    "ARRAY_LENGTH",
    "ARRAY_TO_STRING",
    "BOOL_AND",
    "BOOL_OR",
    "DATE_PART",
    "DATE_TRUNC",
    "GENERATE_SERIES",
    "JSON_AGG",
    "JSON_BUILD_OBJECT",
    "JSONB_AGG",
    "JSONB_BUILD_OBJECT",
    "NOW",
    "REGEXP_REPLACE",
    "SPLIT_PART",
    "STRING_AGG",
    "STRPOS",
    "TO_CHAR",
    "TO_DATE",
    "TO_TIMESTAMP",
    "UNNEST",
];

const OPERATORS: &[&str] = &[
    "%", "^", "|/", "||/", "@", ":=", "&", "|", "#", "~", "<<", ">>", "~>~", "~<~", "~>=~",
    "~<=~", "@-@", "@@", "##", "<->", "&&", "&<", "&>", "<<|", "&<|", "|>>", "|&>", "<^", "^>",
    "?#", "?-", "?|", "?-|", "?||", "@>", "<@", "~=", "?", "?&", "->", "->>", "#>", "#>>", "#-",
    "=>", ">>=", "<<=", "~~", "~~*", "!~~", "!~~*", "~*", "!~", "!~*", "-|-", "||", "::",
];

pub const SPEC: DialectSpec = DialectSpec {
    name: "postgresql",
    commands: &[common::COMMANDS, COMMANDS],
    clauses: &[common::CLAUSES, CLAUSES],
    oneline_clauses: &[ONELINE_CLAUSES],
    set_operations: &[common::SET_OPERATIONS],
    joins: &[common::JOINS],
    dependent_clauses: &[common::DEPENDENT_CLAUSES],
    phrases: &[common::PHRASES, PHRASES],
    keywords: &[common::KEYWORDS, KEYWORDS],
    functions: &[common::FUNCTIONS, FUNCTIONS],
    operators: OPERATORS,
    string_types: &[
        QuoteType::DOLLAR,
        QuoteType::delimited(b'\'', b'\'', Escape::Both).prefixed_only(&["E"]),
        QuoteType::SINGLE_QQ.with_prefixes(&["U&", "B", "X"]),
    ],
    ident_types: &[QuoteType::DOUBLE_QQ.with_prefixes(&["U&"])],
    ident_chars: IdentChars {
        first: "",
        rest: "$",
        dashes: false,
        allow_first_char_number: false,
    },
    nested_block_comments: true,
    line_comments: &["--"],
    param_types: ParamTypes {
        positional: false,
        numbered: &["$"],
        named: &[],
        quoted: &[],
    },
    extra_parens: &["[]"],
    always_dense_operators: &["::"],
};
