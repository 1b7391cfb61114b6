use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use db::{repository::queries, Row};

use super::AppState;
use crate::{envelope::Data, ApiError};

#[derive(serde::Deserialize)]
pub struct ExecuteQueryDto {
    #[serde(default)]
    pub query: Option<String>,
}

pub async fn execute(
    State(state): State<AppState>,
    payload: Result<Json<ExecuteQueryDto>, JsonRejection>,
) -> Result<Json<Data<Vec<Row>>>, ApiError> {
    let Json(payload) = payload?;
    let query = payload.query.unwrap_or_default();
    let rows = queries::execute(&state.pool, &query).await?;
    Ok(Json(Data::ok(rows)))
}
