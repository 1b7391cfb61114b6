//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("{}", sqlx_message(.0))]
    Sqlx(#[from] sqlx::Error),

    /// The catalog has no relation with this name.
    #[error("table \"{0}\" does not exist")]
    TableNotFound(String),

    /// A required-field rule rejected the payload. Carries the user-facing message.
    #[error("{0}")]
    MissingFields(&'static str),

    #[error("table \"{0}\" has no primary key")]
    NoPrimaryKey(String),

    #[error("payload must contain the primary key field \"{0}\"")]
    MissingPrimaryKeyValue(String),

    #[error("payload must be a JSON object")]
    InvalidPayload,

    #[error("no fields to {0}")]
    NoFields(&'static str),

    #[error("record not found")]
    NotFound,

    #[error("No query provided")]
    EmptyQuery,
}

/// Database errors surface the server's own message; everything else uses
/// sqlx's description.
fn sqlx_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db) => db.message().to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_sqlx_errors_keep_their_description() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.to_string(), sqlx::Error::RowNotFound.to_string());
    }

    #[test]
    fn validation_messages_are_passed_through_verbatim() {
        let err = DbError::MissingFields("Необходимо указать регион и название города");
        assert_eq!(err.to_string(), "Необходимо указать регион и название города");
        assert_eq!(DbError::EmptyQuery.to_string(), "No query provided");
        assert_eq!(DbError::NoFields("update").to_string(), "no fields to update");
    }
}
