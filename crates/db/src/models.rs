//! Row and catalog structs shared by the repository functions.
//!
//! Rows of user tables are not typed: their shape is only known at runtime,
//! so they travel as ordered JSON maps.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One database record: column name → value, in result-set column order.
pub type Row = serde_json::Map<String, serde_json::Value>;

// ---------------------------------------------------------------------------
// catalog
// ---------------------------------------------------------------------------

/// A column as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ColumnInfo {
    pub name: String,
    /// Textual type, e.g. `integer` or `character varying(100)`.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub data_type: String,
}

/// Columns of a table plus its primary-key column, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStructure {
    pub columns: Vec<ColumnInfo>,
    pub primary_key: Option<String>,
}
