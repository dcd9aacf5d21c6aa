use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;

use super::input::{require_count, Numeric};
use crate::registry::DEFAULT_DRAW_COUNT;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

#[derive(Debug, Deserialize)]
pub struct DrawParams {
    pub count: Option<String>,
}

/// Draws winners at random, with replacement. `count` defaults to three.
pub async fn draw(
    State(state): State<AppState>,
    params: Result<Query<DrawParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let count = match params.count {
        Some(count) => require_count(Some(Numeric::Text(count)), state.limits.max_draw_count)?,
        None => DEFAULT_DRAW_COUNT,
    };

    let winners = state.with_registry(|registry| registry.draw(count))??;
    Ok(success(winners))
}
