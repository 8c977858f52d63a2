//! Word lists and phrase templates shared by most dialects.

// ---- Commands ----

/// Query and data-manipulation commands found in nearly every dialect.
pub const COMMANDS: &[&str] = &[
    "SELECT [ALL | DISTINCT]",
    "WITH [RECURSIVE]",
    "INSERT [INTO]",
    "UPDATE",
    "DELETE [FROM]",
    "MERGE [INTO]",
    "TRUNCATE [TABLE]",
    "CREATE [OR REPLACE] [TEMPORARY | TEMP] TABLE [IF NOT EXISTS]",
    "CREATE [OR REPLACE] [MATERIALIZED] VIEW [IF NOT EXISTS]",
    "DROP TABLE [IF EXISTS]",
    "DROP VIEW [IF EXISTS]",
    "ALTER TABLE",
];

// ---- Clauses ----

pub const CLAUSES: &[&str] = &[
    "FROM",
    "WHERE",
    "GROUP BY",
    "HAVING",
    "WINDOW",
    "PARTITION BY",
    "ORDER BY",
    "LIMIT",
    "OFFSET",
    "FETCH {FIRST | NEXT}",
    "VALUES",
    "SET",
    "WHEN [NOT] MATCHED [THEN]",
];

pub const SET_OPERATIONS: &[&str] = &[
    "UNION [ALL | DISTINCT]",
    "EXCEPT [ALL | DISTINCT]",
    "INTERSECT [ALL | DISTINCT]",
];

pub const JOINS: &[&str] = &[
    "JOIN",
    "{LEFT | RIGHT | FULL} [OUTER] JOIN",
    "{INNER | CROSS} JOIN",
    "NATURAL [INNER] JOIN",
    "NATURAL {LEFT | RIGHT | FULL} [OUTER] JOIN",
];

pub const DEPENDENT_CLAUSES: &[&str] = &["WHEN", "ELSE"];

pub const PHRASES: &[&str] = &[
    "ON {UPDATE | DELETE} [SET NULL | SET DEFAULT | CASCADE | RESTRICT | NO ACTION]",
    "{ROWS | RANGE | GROUPS} BETWEEN",
    "IS [NOT] DISTINCT FROM",
    "{WITH | WITHOUT} TIME ZONE",
];

// ---- Keywords ----

pub const KEYWORDS: &[&str] = &[
    "ADD",
    "ALL",
    "AND",
    "ANY",
    "ARRAY",
    "AS",
    "ASC",
    "AT",
    "BETWEEN",
    "BIGINT",
    "BOOLEAN",
    "BOTH",
    "BY",
    "CASCADE",
    "CASE",
    "CHAR",
    "CHARACTER",
    "CHECK",
    "COLLATE",
    "COLUMN",
    "CONSTRAINT",
    "CROSS",
    "CURRENT",
    "CURRENT_DATE",
    "CURRENT_TIME",
    "CURRENT_TIMESTAMP",
    "CURRENT_USER",
    "DATE",
    "DAY",
    "DECIMAL",
    "DEFAULT",
    "DESC",
    "DISTINCT",
    "DOUBLE",
    "END",
    "ESCAPE",
    "EXISTS",
    "FALSE",
    "FILTER",
    "FIRST",
    "FLOAT",
    "FOLLOWING",
    "FOR",
    "FOREIGN",
    "FULL",
    "GROUPS",
    "HOUR",
    "IF",
    "IN",
    "INDEX",
    "INNER",
    "INT",
    "INTEGER",
    "INTERVAL",
    "INTO",
    "IS",
    "KEY",
    "LAST",
    "LATERAL",
    "LEADING",
    "LEFT",
    "LIKE",
    "MINUTE",
    "MONTH",
    "NATURAL",
    "NO",
    "NOT",
    "NULL",
    "NULLS",
    "NUMERIC",
    "OF",
    "ON",
    "ONLY",
    "OR",
    "OUTER",
    "OVER",
    "PARTITION",
    "PRECEDING",
    "PRECISION",
    "PRIMARY",
    "RANGE",
    "REAL",
    "RECURSIVE",
    "REFERENCES",
    "RESTRICT",
    "RIGHT",
    "ROW",
    "ROWS",
    "SECOND",
    "SMALLINT",
    "SOME",
    "TABLE",
    "TEMP",
    "TEMPORARY",
    "THEN",
    "TIME",
    "TIMESTAMP",
    "TO",
    "TRAILING",
    "TRUE",
    "UNBOUNDED",
    "UNIQUE",
    "UNKNOWN",
    "USING",
    "VARCHAR",
    "VIEW",
    "WITHIN",
    "YEAR",
    "ZONE",
];

// ---- Functions ----

pub const FUNCTIONS: &[&str] = &[
    "ABS",
    "ARRAY_AGG",
    "AVG",
    "CAST",
    "CEIL",
    "CEILING",
    "CHAR_LENGTH",
    "COALESCE",
    "CONCAT",
    "COUNT",
    "CUME_DIST",
    "DENSE_RANK",
    "EXP",
    "EXTRACT",
    "FIRST_VALUE",
    "FLOOR",
    "GREATEST",
    "LAG",
    "LAST_VALUE",
    "LEAD",
    "LEAST",
    "LEFT",
    "LENGTH",
    "LN",
    "LOG",
    "LOWER",
    "LTRIM",
    "MAX",
    "MIN",
    "MOD",
    "NTH_VALUE",
    "NTILE",
    "NULLIF",
    "PERCENT_RANK",
    "POSITION",
    "POWER",
    "RANK",
    "REPLACE",
    "RIGHT",
    "ROUND",
    "ROW_NUMBER",
    "RTRIM",
    "SIGN",
    "SQRT",
    "STDDEV",
    "SUBSTRING",
    "SUM",
    "TRIM",
    "UPPER",
    "VARIANCE",
];
