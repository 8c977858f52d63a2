//! MySQL.

use crate::dialect::{DialectSpec, IdentChars, ParamTypes, QuoteType};
use crate::dialects::common;

pub(crate) const COMMANDS: &[&str] = &[
    "INSERT [LOW_PRIORITY | DELAYED | HIGH_PRIORITY] [IGNORE] [INTO]",
    "REPLACE [LOW_PRIORITY | DELAYED] INTO",
    "UPDATE [LOW_PRIORITY] [IGNORE]",
    "DELETE [LOW_PRIORITY] [QUICK] [IGNORE] FROM",
    "CREATE [OR REPLACE] [TEMPORARY] TABLE [IF NOT EXISTS]",
    "CREATE [OR REPLACE] [ALGORITHM = {UNDEFINED | MERGE | TEMPTABLE}] VIEW",
    "CREATE {DATABASE | SCHEMA} [IF NOT EXISTS]",
    "CREATE [UNIQUE | FULLTEXT | SPATIAL] INDEX",
    "CREATE [DEFINER = CURRENT_USER] {PROCEDURE | FUNCTION | TRIGGER | EVENT}",
    "DROP [TEMPORARY] TABLE [IF EXISTS]",
    "DROP {DATABASE | SCHEMA} [IF EXISTS]",
    "ALTER {DATABASE | SCHEMA | VIEW | EVENT | FUNCTION | PROCEDURE}",
    "RENAME TABLE",
    "LOAD DATA [LOCAL] INFILE",
    "SHOW [FULL] {TABLES | COLUMNS | DATABASES | INDEX | PROCESSLIST | VARIABLES | STATUS}",
    "DESCRIBE",
    "EXPLAIN",
    "USE",
    "CALL",
    "DO",
    "HANDLER",
    "START TRANSACTION",
    "BEGIN [WORK]",
    "COMMIT [WORK]",
    "ROLLBACK [WORK]",
    "LOCK {TABLE | TABLES}",
    "UNLOCK {TABLE | TABLES}",
    "GRANT",
    "REVOKE",
];

pub(crate) const CLAUSES: &[&str] = &[
    "ON DUPLICATE KEY UPDATE",
    "FOR UPDATE",
    "LOCK IN SHARE MODE",
    "INTO {OUTFILE | DUMPFILE}",
];

pub(crate) const ONELINE_CLAUSES: &[&str] = &[
    "ADD [COLUMN]",
    "DROP [COLUMN]",
    "MODIFY [COLUMN]",
    "CHANGE [COLUMN]",
    "RENAME {TO | AS | COLUMN}",
    "ALTER [COLUMN]",
];

pub(crate) const JOINS: &[&str] = &["STRAIGHT_JOIN"];

pub(crate) const PHRASES: &[&str] = &["CHARACTER SET", "{ROWS | RANGE} BETWEEN"];

pub(crate) const KEYWORDS: &[&str] = &[
    "AUTO_INCREMENT",
    "BINARY",
    "BLOB",
    "CHARSET",
    "DATETIME",
    "DIV",
    "ENGINE",
    "ENUM",
    "JSON",
    "LONGTEXT",
    "MEDIUMINT",
    "MEDIUMTEXT",
    "REGEXP",
    "RLIKE",
    "SIGNED",
    "TEXT",
    "TINYINT",
    "TINYTEXT",
    "UNSIGNED",
    "XOR",
    "ZEROFILL",
];

pub(crate) const FUNCTIONS: &[&str] = &[
    "CONCAT_WS",
    "CONVERT",
    "CURDATE",
    "DATE_ADD",
    "DATE_FORMAT",
    "DATE_SUB",
    "DATEDIFF",
    "FIND_IN_SET",
    "FROM_UNIXTIME",
    "GROUP_CONCAT",
    "IF",
    "IFNULL",
    "INSTR",
    "JSON_EXTRACT",
    "JSON_OBJECT",
    "JSON_UNQUOTE",
    "LAST_INSERT_ID",
    "LOCATE",
    "NOW",
    "STR_TO_DATE",
    "SUBSTR",
    "SUBSTRING_INDEX",
    "UNIX_TIMESTAMP",
];

pub(crate) const OPERATORS: &[&str] = &[
    "%", ":=", "<<", ">>", "<=>", "&&", "||", "!", "&", "|", "^", "~", "->", "->>",
];

pub(crate) const STRING_TYPES: &[QuoteType] = &[
    QuoteType::SINGLE_QQ_BS.with_prefixes(&["N", "X", "B"]),
    QuoteType::DOUBLE_QQ_BS,
];

pub(crate) const IDENT_CHARS: IdentChars = IdentChars {
    first: "$",
    rest: "$",
    dashes: false,
    allow_first_char_number: true,
};

pub const SPEC: DialectSpec = DialectSpec {
    name: "mysql",
    commands: &[common::COMMANDS, COMMANDS],
    clauses: &[common::CLAUSES, CLAUSES],
    oneline_clauses: &[ONELINE_CLAUSES],
    set_operations: &[common::SET_OPERATIONS],
    joins: &[common::JOINS, JOINS],
    dependent_clauses: &[common::DEPENDENT_CLAUSES],
    phrases: &[common::PHRASES, PHRASES],
    keywords: &[common::KEYWORDS, KEYWORDS],
    functions: &[common::FUNCTIONS, FUNCTIONS],
    operators: OPERATORS,
    string_types: STRING_TYPES,
    ident_types: &[QuoteType::BACKTICK],
    ident_chars: IDENT_CHARS,
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
