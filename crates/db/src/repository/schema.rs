//! Catalog introspection. Nothing here is cached; every call asks the server.

use sqlx::postgres::types::Oid;
use sqlx::PgPool;
use tracing::debug;

use crate::{
    models::{ColumnInfo, TableStructure},
    sql::quote_ident,
    DbError,
};

const COLUMNS_SQL: &str = r#"
    SELECT a.attname::text AS name,
           format_type(a.atttypid, a.atttypmod) AS "type"
    FROM pg_attribute a
    WHERE a.attrelid = $1
      AND a.attnum > 0
      AND NOT a.attisdropped
    ORDER BY a.attnum
"#;

// indkey is an int2vector, subscripted from zero: the key's first column.
const PRIMARY_KEY_SQL: &str = r#"
    SELECT a.attname::text
    FROM pg_index i
    JOIN pg_attribute a
      ON a.attrelid = i.indrelid
     AND a.attnum = i.indkey[0]
    WHERE i.indrelid = $1
      AND i.indisprimary
"#;

/// Columns (name + textual type) and primary-key column of `table`.
///
/// Returns [`DbError::TableNotFound`] if no relation with that name is visible
/// on the search path.
pub async fn describe(pool: &PgPool, table: &str) -> Result<TableStructure, DbError> {
    let oid = resolve(pool, table).await?;

    let columns = sqlx::query_as::<_, ColumnInfo>(COLUMNS_SQL)
        .bind(oid)
        .fetch_all(pool)
        .await?;
    let primary_key = primary_key_of(pool, oid).await?;

    debug!(%table, columns = columns.len(), ?primary_key, "described table");
    Ok(TableStructure { columns, primary_key })
}

/// The first column of `table`'s primary-key constraint.
pub async fn primary_key(pool: &PgPool, table: &str) -> Result<String, DbError> {
    let oid = resolve(pool, table).await?;
    primary_key_of(pool, oid)
        .await?
        .ok_or_else(|| DbError::NoPrimaryKey(table.to_string()))
}

async fn resolve(pool: &PgPool, table: &str) -> Result<Oid, DbError> {
    let oid: Option<Oid> = sqlx::query_scalar("SELECT to_regclass($1)::oid")
        .bind(quote_ident(table))
        .fetch_one(pool)
        .await?;
    oid.ok_or_else(|| DbError::TableNotFound(table.to_string()))
}

async fn primary_key_of(pool: &PgPool, oid: Oid) -> Result<Option<String>, DbError> {
    let pk = sqlx::query_scalar::<_, String>(PRIMARY_KEY_SQL)
        .bind(oid)
        .fetch_optional(pool)
        .await?;
    Ok(pk)
}
