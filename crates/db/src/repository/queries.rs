//! Ad-hoc SQL console.

use sqlx::PgPool;
use tracing::info;

use crate::{convert, models::Row, DbError};

/// Run `sql_text` exactly as given and return every row it produces.
///
/// Uses the simple query protocol, so any statement the server accepts is
/// allowed, including DDL and several statements separated by `;`. Statements
/// that produce no rows yield an empty list.
pub async fn execute(pool: &PgPool, sql_text: &str) -> Result<Vec<Row>, DbError> {
    if sql_text.trim().is_empty() {
        return Err(DbError::EmptyQuery);
    }

    info!(len = sql_text.len(), "executing ad-hoc query");
    let rows = sqlx::raw_sql(sql_text).fetch_all(pool).await?;
    convert::rows_to_json(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{create_lazy_pool, PoolConfig};

    // The lazy pool never connects, so reaching the database would fail the test.
    #[tokio::test]
    async fn blank_text_is_rejected_before_reaching_the_database() {
        let config = PoolConfig::new("postgres://nobody@127.0.0.1:1/none");
        let pool = create_lazy_pool(&config).unwrap();
        for text in ["", "   ", "\n\t"] {
            let err = execute(&pool, text).await.unwrap_err();
            assert!(matches!(err, DbError::EmptyQuery));
        }
    }
}
