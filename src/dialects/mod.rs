//! Built-in dialect tables.

pub mod common;

pub mod bigquery;
pub mod db2;
pub mod hive;
pub mod mariadb;
pub mod mysql;
pub mod n1ql;
pub mod plsql;
pub mod postgresql;
pub mod redshift;
pub mod singlestoredb;
pub mod snowflake;
pub mod spark;
pub mod sql;
pub mod sqlite;
pub mod transactsql;
pub mod trino;
