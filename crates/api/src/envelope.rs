//! The `{success, …}` JSON envelope every API route answers with.

use db::ColumnInfo;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Data<T> {
    pub success: bool,
    pub data: T,
}

impl<T> Data<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data }
    }
}

#[derive(Debug, Serialize)]
pub struct Structure {
    pub success: bool,
    pub structure: Vec<ColumnInfo>,
    pub primary_key: Option<String>,
}

impl From<db::TableStructure> for Structure {
    fn from(s: db::TableStructure) -> Self {
        Self {
            success: true,
            structure: s.columns,
            primary_key: s.primary_key,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Failure {
    pub success: bool,
    pub error: String,
}

impl Failure {
    pub fn new(error: impl Into<String>) -> Self {
        Self { success: false, error: error.into() }
    }
}
