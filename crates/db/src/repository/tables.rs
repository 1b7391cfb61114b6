//! Generic row operations keyed by table name.
//!
//! Every statement is wrapped with [`sql::json_rows`], so the server renders
//! each row as a JSON object in column order, whatever the column types.

use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::debug;

use crate::{
    models::Row,
    profiles::{self, TableProfile},
    repository::schema,
    sql, DbError,
};

/// Every row of `table`, or its join view when the table has one.
pub async fn fetch_rows(pool: &PgPool, table: &str) -> Result<Vec<Row>, DbError> {
    let profile = profiles::profile(table);
    let select = match profile.and_then(|p| p.view.as_ref()) {
        Some(view) => sql::select_join(table, view),
        None => sql::select_all(table),
    };
    let sql = sql::json_rows(&select);
    debug!(%table, %sql, "fetching rows");

    let mut rows: Vec<Row> = sqlx::query_scalar::<_, Json<Row>>(&sql)
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|Json(row)| row)
        .collect();
    if let Some(profile) = profile {
        rows.iter_mut().for_each(|row| profile.apply_row_rules(row));
    }
    Ok(rows)
}

/// Insert `payload` into `table` and return the stored row.
///
/// Tables with a required-field rule are checked before the database is
/// contacted, and only the required fields are inserted.
pub async fn insert_row(pool: &PgPool, table: &str, payload: &Value) -> Result<Row, DbError> {
    let payload = as_object(payload)?;
    let profile = profiles::profile(table);

    let fields = match profile.and_then(|p| p.required) {
        Some(rule) => rule.extract(payload)?,
        None => payload.clone(),
    };
    if fields.is_empty() {
        return Err(DbError::NoFields("insert"));
    }

    let sql = sql::json_rows(&sql::insert_from_payload(
        table,
        fields.keys().map(String::as_str),
    ));
    debug!(%table, %sql, "inserting row");

    let mut tx = pool.begin().await?;
    let Json(row) = sqlx::query_scalar::<_, Json<Row>>(&sql)
        .bind(Json(&fields))
        .fetch_one(&mut *tx)
        .await?;
    tx.commit().await?;

    Ok(finish(profile, row))
}

/// Update the row identified by the primary-key value in `payload`, setting
/// every other payload field. Returns the updated row.
pub async fn update_row(pool: &PgPool, table: &str, payload: &Value) -> Result<Row, DbError> {
    let payload = as_object(payload)?;
    let pk = schema::primary_key(pool, table).await?;

    if payload.get(&pk).map_or(true, Value::is_null) {
        return Err(DbError::MissingPrimaryKeyValue(pk));
    }
    let columns: Vec<&str> = payload
        .keys()
        .map(String::as_str)
        .filter(|k| *k != pk)
        .collect();
    if columns.is_empty() {
        return Err(DbError::NoFields("update"));
    }

    let sql = sql::json_rows(&sql::update_from_payload(table, &pk, columns));
    debug!(%table, %sql, "updating row");

    let mut tx = pool.begin().await?;
    let Json(row) = sqlx::query_scalar::<_, Json<Row>>(&sql)
        .bind(Json(payload))
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(DbError::NotFound)?;
    tx.commit().await?;

    Ok(finish(profiles::profile(table), row))
}

fn as_object(payload: &Value) -> Result<&Row, DbError> {
    payload.as_object().ok_or(DbError::InvalidPayload)
}

fn finish(profile: Option<&TableProfile>, mut row: Row) -> Row {
    if let Some(profile) = profile {
        profile.apply_row_rules(&mut row);
    }
    row
}
