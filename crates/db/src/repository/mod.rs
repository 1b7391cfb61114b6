//! Repository functions — one function per database operation.
//!
//! Every function takes a `&DbPool` and returns a `Result<T, DbError>`.
//! Table names arrive from the caller unchecked; the catalog decides whether
//! they exist.

pub mod queries;
pub mod schema;
pub mod tables;
