//! IBM Db2.

use crate::dialect::{DialectSpec, IdentChars, ParamTypes, QuoteType};
use crate::dialects::common;

const COMMANDS: &[&str] = &[
    "CREATE [GLOBAL TEMPORARY | EXTERNAL] TABLE [IF NOT EXISTS]",
    "CREATE [OR REPLACE] [SOFT] ALIAS",
    "CREATE [OR REPLACE] FUNCTION",
    "CREATE [OR REPLACE] PROCEDURE",
    "CREATE [UNIQUE] INDEX",
    "DECLARE GLOBAL TEMPORARY TABLE",
    "ALTER {TABLE | VIEW | INDEX | FUNCTION | PROCEDURE}",
    "DROP {INDEX | ALIAS | FUNCTION | PROCEDURE}",
    "COMMENT ON",
    "GRANT",
    "REVOKE",
    "CALL",
    "COMMIT [WORK]",
    "ROLLBACK [WORK]",
    "LOCK TABLE",
];

const CLAUSES: &[&str] = &[
    "FETCH {FIRST | NEXT}",
    "FOR UPDATE [OF]",
    "FOR {READ | FETCH} ONLY",
    "FOR {RR | CS | UR | RS} [USE AND KEEP {SHARE | UPDATE | EXCLUSIVE} LOCKS]",
    "WHEN [NOT] MATCHED [THEN]",
];

const ONELINE_CLAUSES: &[&str] = &[
    "ADD [COLUMN]",
    "DROP [COLUMN]",
    "RENAME [COLUMN]",
    "ALTER [COLUMN]",
    "SET [DATA TYPE]",
];

const PHRASES: &[&str] = &["SET DATA TYPE", "GENERATED {ALWAYS | BY DEFAULT} AS IDENTITY"];

const KEYWORDS: &[&str] = &[
    "ALIAS",
    "BLOB",
    "CCSID",
    "CLOB",
    "CS",
    "DBCLOB",
    "GENERATED",
    "GRAPHIC",
    "IDENTITY",
    "MODE",
    "RR",
    "RS",
    "UR",
    "VARGRAPHIC",
];

const FUNCTIONS: &[&str] = &[
    "CHAR",
    "DAYS",
    "DECIMAL",
    "DIGITS",
    "HEX",
    "INTEGER",
    "LCASE",
    "LISTAGG",
    "LOCATE",
    "NVL",
    "POSSTR",
    "STRIP",
    "SUBSTR",
    "TIMESTAMP_FORMAT",
    "TO_CHAR",
    "TO_DATE",
    "TRANSLATE",
    "UCASE",
    "VALUE",
    "VARCHAR",
    "VARCHAR_FORMAT",
];

pub const SPEC: DialectSpec = DialectSpec {
    name: "db2",
    commands: &[common::COMMANDS, COMMANDS],
    clauses: &[common::CLAUSES, CLAUSES],
    oneline_clauses: &[ONELINE_CLAUSES],
    set_operations: &[common::SET_OPERATIONS],
    joins: &[common::JOINS],
    dependent_clauses: &[common::DEPENDENT_CLAUSES],
    phrases: &[common::PHRASES, PHRASES],
    keywords: &[common::KEYWORDS, KEYWORDS],
    functions: &[common::FUNCTIONS, FUNCTIONS],
    operators: &["**", "%", "|", "&", "^", "~", "!>", "!<", "^=", "^>", "^<", "||", "=>"],
    string_types: &[QuoteType::SINGLE_QQ.with_prefixes(&["GX", "BX", "UX", "U&", "G", "N", "X"])],
    ident_types: &[QuoteType::DOUBLE_QQ],
    ident_chars: IdentChars {
        first: "@#$",
        rest: "@#$",
        dashes: false,
        allow_first_char_number: false,
    },
    nested_block_comments: false,
    line_comments: &["--"],
    param_types: ParamTypes {
        positional: true,
        numbered: &[],
        named: &[":"],
        quoted: &[],
    },
    extra_parens: &[],
    always_dense_operators: &[],
};
