//! `db` crate — dynamic data access over arbitrary named tables.
//!
//! Provides a connection pool, catalog introspection, generic row
//! fetch/insert/update driven by table name, and an ad-hoc SQL executor.
//! Rows come back as ordered JSON maps; per-table special cases live in
//! [`profiles`].

pub mod convert;
pub mod error;
pub mod models;
pub mod pool;
pub mod profiles;
pub mod repository;
pub mod sql;

pub use error::DbError;
pub use models::{ColumnInfo, Row, TableStructure};
pub use pool::{DbPool, PoolConfig};
