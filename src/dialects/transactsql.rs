//! Microsoft Transact-SQL (SQL Server).

use crate::dialect::{DialectSpec, IdentChars, ParamTypes, QuoteType};
use crate::dialects::common;

const COMMANDS: &[&str] = &[
    "SELECT [ALL | DISTINCT]",
    "WITH",
    "INSERT [INTO]",
    "UPDATE",
    "DELETE [FROM]",
    "MERGE [INTO]",
    "CREATE [OR ALTER] [MATERIALIZED] VIEW",
    "CREATE TABLE",
    "DROP TABLE [IF EXISTS]",
    "CREATE [OR ALTER] {PROCEDURE | PROC | FUNCTION | TRIGGER}",
    "DECLARE",
    "{EXEC | EXECUTE}",
    "BEGIN [TRAN | TRANSACTION]",
    "COMMIT [TRAN | TRANSACTION]",
    "ROLLBACK [TRAN | TRANSACTION]",
    "PRINT",
    "USE",
];

const CLAUSES: &[&str] = &[
    "FROM",
    "WHERE",
    "GROUP BY",
    "HAVING",
    "WINDOW",
    "PARTITION BY",
    "ORDER BY",
    "OFFSET",
    "FETCH {FIRST | NEXT}",
    "VALUES",
    "SET",
    "WHERE CURRENT OF",
    "WHEN [NOT] MATCHED [BY TARGET | BY SOURCE] [THEN]",
    "UPDATE SET",
    "OUTPUT",
    "OPTION",
];

const ONELINE_CLAUSES: &[&str] = &[
    // alter table
    "ALTER TABLE",
    "ADD",
    "DROP COLUMN [IF EXISTS]",
    "ALTER COLUMN",
    // truncate
    "TRUNCATE TABLE",
    // statements
    "ADD SENSITIVITY CLASSIFICATION",
    "ADD SIGNATURE",
    "AGGREGATE",
    "ANSI_DEFAULTS",
    "ANSI_NULLS",
    "ANSI_NULL_DFLT_OFF",
    "ANSI_NULL_DFLT_ON",
    "ANSI_PADDING",
    "ANSI_WARNINGS",
    "APPLICATION ROLE",
    "ARITHABORT",
    "ARITHIGNORE",
    "ASSEMBLY",
    "ASYMMETRIC KEY",
    "AUTHORIZATION",
    "AVAILABILITY GROUP",
    "BACKUP",
    "BACKUP CERTIFICATE",
    "BACKUP MASTER KEY",
    "BACKUP SERVICE MASTER KEY",
    "BEGIN CONVERSATION TIMER",
    "BEGIN DIALOG CONVERSATION",
    "BROKER PRIORITY",
    "BULK INSERT",
    "CERTIFICATE",
    "CLOSE MASTER KEY",
    "CLOSE SYMMETRIC KEY",
    "COLLATE",
    "COLUMN ENCRYPTION KEY",
    "COLUMN MASTER KEY",
    "COLUMNSTORE INDEX",
    "CONCAT_NULL_YIELDS_NULL",
    "CONTEXT_INFO",
    "CONTRACT",
    "CREDENTIAL",
    "CRYPTOGRAPHIC PROVIDER",
    "CURSOR_CLOSE_ON_COMMIT",
    "DATABASE",
    "DATABASE AUDIT SPECIFICATION",
    "DATABASE ENCRYPTION KEY",
    "DATABASE HADR",
    "DATABASE SCOPED CONFIGURATION",
    "DATABASE SCOPED CREDENTIAL",
    "DATABASE SET",
    "DATEFIRST",
    "DATEFORMAT",
    "DEADLOCK_PRIORITY",
    "DENY",
    "DENY XML",
    "DISABLE TRIGGER",
    "ENABLE TRIGGER",
    "END CONVERSATION",
    "ENDPOINT",
    "EVENT NOTIFICATION",
    "EVENT SESSION",
    "EXECUTE AS",
    "EXTERNAL DATA SOURCE",
    "EXTERNAL FILE FORMAT",
    "EXTERNAL LANGUAGE",
    "EXTERNAL LIBRARY",
    "EXTERNAL RESOURCE POOL",
    "EXTERNAL TABLE",
    "FIPS_FLAGGER",
    "FMTONLY",
    "FORCEPLAN",
    "FULLTEXT CATALOG",
    "FULLTEXT INDEX",
    "FULLTEXT STOPLIST",
    "FUNCTION",
    "GET CONVERSATION GROUP",
    "GET_TRANSMISSION_STATUS",
    "GRANT",
    "GRANT XML",
    "IDENTITY_INSERT",
    "IMPLICIT_TRANSACTIONS",
    "INDEX",
    "LANGUAGE",
    "LOCK_TIMEOUT",
    "LOGIN",
    "MASTER KEY",
    "MESSAGE TYPE",
    "MOVE CONVERSATION",
    "NOCOUNT",
    "NOEXEC",
    "NUMERIC_ROUNDABORT",
    "OFFSETS",
    "OPEN MASTER KEY",
    "OPEN SYMMETRIC KEY",
    "PARSEONLY",
    "PARTITION FUNCTION",
    "PARTITION SCHEME",
    "PROCEDURE",
    "QUERY_GOVERNOR_COST_LIMIT",
    "QUEUE",
    "QUOTED_IDENTIFIER",
    "RECEIVE",
    "REMOTE SERVICE BINDING",
    "REMOTE_PROC_TRANSACTIONS",
    "RESOURCE GOVERNOR",
    "RESOURCE POOL",
    "RESTORE",
    "RESTORE FILELISTONLY",
    "RESTORE HEADERONLY",
    "RESTORE LABELONLY",
    "RESTORE MASTER KEY",
    "RESTORE REWINDONLY",
    "RESTORE SERVICE MASTER KEY",
    "RESTORE VERIFYONLY",
    "REVERT",
    "REVOKE",
    "REVOKE XML",
    "ROLE",
    "ROUTE",
    "ROWCOUNT",
    "RULE",
    "SCHEMA",
    "SEARCH PROPERTY LIST",
    "SECURITY POLICY",
    "SELECTIVE XML INDEX",
    "SEND",
    "SENSITIVITY CLASSIFICATION",
    "SEQUENCE",
    "SERVER AUDIT",
    "SERVER AUDIT SPECIFICATION",
    "SERVER CONFIGURATION",
    "SERVER ROLE",
    "SERVICE",
    "SERVICE MASTER KEY",
    "SETUSER",
    "SHOWPLAN_ALL",
    "SHOWPLAN_TEXT",
    "SHOWPLAN_XML",
    "SIGNATURE",
    "SPATIAL INDEX",
    "STATISTICS",
    "STATISTICS IO",
    "STATISTICS PROFILE",
    "STATISTICS TIME",
    "STATISTICS XML",
    "SYMMETRIC KEY",
    "SYNONYM",
    "TABLE",
    "TABLE IDENTITY",
    "TEXTSIZE",
    "TRANSACTION ISOLATION LEVEL",
    "TRIGGER",
    "TYPE",
    "UPDATE STATISTICS",
    "USER",
    "WORKLOAD GROUP",
    "XACT_ABORT",
    "XML INDEX",
    "XML SCHEMA COLLECTION",
];

const SET_OPERATIONS: &[&str] = &["UNION [ALL]", "EXCEPT", "INTERSECT"];

const JOINS: &[&str] = &[
    "JOIN",
    "{LEFT | RIGHT | FULL} [OUTER] JOIN",
    "{INNER | CROSS} JOIN",
    "{CROSS | OUTER} APPLY",
];

const PHRASES: &[&str] = &[
    "ON {UPDATE | DELETE} [SET NULL | SET DEFAULT]",
    "{ROWS | RANGE} BETWEEN",
];

const KEYWORDS: &[&str] = &[
    "BIT",
    "CLUSTERED",
    "DATETIME",
    "DATETIME2",
    "DATETIMEOFFSET",
    "HOLDLOCK",
    "IDENTITY",
    "MONEY",
    "NCHAR",
    "NOLOCK",
    "NONCLUSTERED",
    "NTEXT",
    "NVARCHAR",
    "PERCENT",
    "PIVOT",
    "SMALLDATETIME",
    "TIES",
    "TINYINT",
    "TOP",
    "UNIQUEIDENTIFIER",
    "UNPIVOT",
    "VARBINARY",
];

const FUNCTIONS: &[&str] = &[
    "CHARINDEX",
    "CONVERT",
    "DATEADD",
    "DATEDIFF",
    "DATENAME",
    "DATEPART",
    "EOMONTH",
    "FORMAT",
    "GETDATE",
    "GETUTCDATE",
    "IIF",
    "ISNULL",
    "LEN",
    "NEWID",
    "OBJECT_ID",
    "PATINDEX",
    "QUOTENAME",
    "SCOPE_IDENTITY",
    "STRING_AGG",
    "STUFF",
    "SYSDATETIME",
    "TRY_CAST",
    "TRY_CONVERT",
];

pub const SPEC: DialectSpec = DialectSpec {
    name: "transactsql",
    commands: &[COMMANDS],
    clauses: &[CLAUSES],
    oneline_clauses: &[ONELINE_CLAUSES],
    set_operations: &[SET_OPERATIONS],
    joins: &[JOINS],
    dependent_clauses: &[common::DEPENDENT_CLAUSES],
    phrases: &[PHRASES],
    keywords: &[common::KEYWORDS, KEYWORDS],
    functions: &[common::FUNCTIONS, FUNCTIONS],
    operators: &[
        "%", "&", "|", "^", "~", "!<", "!>", "+=", "-=", "*=", "/=", "%=", "|=", "&=", "^=", "::",
    ],
    string_types: &[QuoteType::SINGLE_QQ.with_prefixes(&["N"])],
    ident_types: &[QuoteType::DOUBLE_QQ, QuoteType::BRACKETS],
    ident_chars: IdentChars {
        first: "#@",
        rest: "#@$",
        dashes: false,
        allow_first_char_number: false,
    },
    nested_block_comments: true,
    line_comments: &["--"],
    param_types: ParamTypes {
        positional: false,
        numbered: &[],
        named: &["@"],
        quoted: &["@"],
    },
    extra_parens: &[],
    always_dense_operators: &["::"],
};
