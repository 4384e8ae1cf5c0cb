use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use quoteline_core::{CurrentPrice, Period, SeriesResponse};
use serde::Deserialize;
use serde_json::{Value, json};

use super::ApiError;
use crate::Quoteline;

#[derive(Debug, Deserialize)]
pub struct SeriesParams {
    period: Option<String>,
}

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

pub async fn stock_series(
    State(ql): State<Arc<Quoteline>>,
    Path(symbol): Path<String>,
    query: Result<Query<SeriesParams>, QueryRejection>,
) -> Result<Json<SeriesResponse>, ApiError> {
    let Query(params) = query.map_err(|e| ApiError::from_query_rejection(&e))?;
    let period = params
        .period
        .unwrap_or_else(|| Period::default().code().to_string());
    ql.series(&symbol, &period)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_series(&symbol, &e))
}

pub async fn current_price(
    State(ql): State<Arc<Quoteline>>,
    Path(symbol): Path<String>,
) -> Result<Json<CurrentPrice>, ApiError> {
    ql.current_price(&symbol)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_price(&symbol, &e))
}
