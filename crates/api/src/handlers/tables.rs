use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use db::{repository::{schema, tables}, Row};
use serde_json::Value;

use super::AppState;
use crate::{
    envelope::{Data, Structure},
    ApiError,
};

pub async fn rows(
    Path(table): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Data<Vec<Row>>>, ApiError> {
    let rows = tables::fetch_rows(&state.pool, &table).await?;
    Ok(Json(Data::ok(rows)))
}

pub async fn structure(
    Path(table): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Structure>, ApiError> {
    let structure = schema::describe(&state.pool, &table).await?;
    Ok(Json(structure.into()))
}

pub async fn add(
    Path(table): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Data<Row>>, ApiError> {
    let Json(payload) = payload?;
    let row = tables::insert_row(&state.pool, &table, &payload).await?;
    Ok(Json(Data::ok(row)))
}

pub async fn update(
    Path(table): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Data<Row>>, ApiError> {
    let Json(payload) = payload?;
    let row = tables::update_row(&state.pool, &table, &payload).await?;
    Ok(Json(Data::ok(row)))
}
