//! Oracle PL/SQL.

use crate::dialect::{DialectSpec, IdentChars, ParamTypes, QuoteType};
use crate::dialects::common;

const COMMANDS: &[&str] = &[
    "CREATE [GLOBAL TEMPORARY | PRIVATE TEMPORARY | SHARDED | DUPLICATED] TABLE",
    "CREATE [OR REPLACE] [NO FORCE | FORCE] [EDITIONING | EDITIONABLE | NONEDITIONABLE] VIEW",
    "CREATE [OR REPLACE] {PROCEDURE | FUNCTION | PACKAGE [BODY] | TRIGGER | TYPE [BODY]}",
    "CREATE [UNIQUE | BITMAP] INDEX",
    "CREATE {SEQUENCE | SYNONYM | PUBLIC SYNONYM}",
    "DROP {SEQUENCE | SYNONYM | INDEX | PROCEDURE | FUNCTION | PACKAGE | TRIGGER}",
    "INSERT [INTO | ALL INTO]",
    "COMMENT ON {TABLE | COLUMN}",
    "GRANT",
    "REVOKE",
    "COMMIT",
    "ROLLBACK [TO SAVEPOINT]",
    "SAVEPOINT",
    "DECLARE",
    "BEGIN",
    "EXCEPTION",
];

const CLAUSES: &[&str] = &[
    "START WITH",
    "CONNECT BY [NOCYCLE]",
    "MODEL",
    "RETURNING",
    "INTO",
    "BULK COLLECT INTO",
    "FOR UPDATE [OF]",
    "WHEN [NOT] MATCHED [THEN]",
];

const ONELINE_CLAUSES: &[&str] = &[
    "ADD",
    "DROP [COLUMN]",
    "MODIFY",
    "RENAME {TO | COLUMN}",
];

const SET_OPERATIONS: &[&str] = &["MINUS"];

const JOINS: &[&str] = &["{CROSS | OUTER} APPLY"];

const KEYWORDS: &[&str] = &[
    "BINARY_INTEGER",
    "BLOB",
    "CLOB",
    "CONSTANT",
    "CURSOR",
    "LOOP",
    "NOCYCLE",
    "NOCOPY",
    "NUMBER",
    "PRIOR",
    "RAISE",
    "RETURN",
    "ROWID",
    "ROWNUM",
    "SYSDATE",
    "VARCHAR2",
    "WHILE",
];

const FUNCTIONS: &[&str] = &[
    "ADD_MONTHS",
    "DECODE",
    "INSTR",
    "LISTAGG",
    "MONTHS_BETWEEN",
    "NVL",
    "NVL2",
    "REGEXP_LIKE",
    "REGEXP_SUBSTR",
    "SUBSTR",
    "SYS_CONTEXT",
    "TO_CHAR",
    "TO_DATE",
    "TO_NUMBER",
    "TRUNC",
];

pub const SPEC: DialectSpec = DialectSpec {
    name: "plsql",
    commands: &[common::COMMANDS, COMMANDS],
    clauses: &[common::CLAUSES, CLAUSES],
    oneline_clauses: &[ONELINE_CLAUSES],
    set_operations: &[common::SET_OPERATIONS, SET_OPERATIONS],
    joins: &[common::JOINS, JOINS],
    dependent_clauses: &[common::DEPENDENT_CLAUSES],
    phrases: &[common::PHRASES],
    keywords: &[common::KEYWORDS, KEYWORDS],
    functions: &[common::FUNCTIONS, FUNCTIONS],
    operators: &["**", ":=", "%", "~=", "^=", ">>", "<<", "=>", "@", "||"],
    string_types: &[QuoteType::SINGLE_QQ.with_prefixes(&["N"])],
    ident_types: &[QuoteType::DOUBLE_QQ],
    ident_chars: IdentChars {
        first: "",
        rest: "$#",
        dashes: false,
        allow_first_char_number: false,
    },
    nested_block_comments: false,
    line_comments: &["--"],
    param_types: ParamTypes {
        positional: false,
        numbered: &[":"],
        named: &[":"],
        quoted: &[],
    },
    extra_parens: &[],
    always_dense_operators: &["@"],
};
