//! Handlers for operations applied to every ticket of a user, or to a batch
//! of new tickets.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use super::input::{require_count, require_price, require_username, Numeric};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

/// `/b/sell` shadows `/b/:username` for every method, so the owner literally
/// named "sell" is served by the `*_sell_owner` handlers below.
const SELL_SEGMENT: &str = "sell";

#[derive(Debug, Deserialize)]
pub struct BulkSellRequest {
    pub username: Option<String>,
    pub price: Option<Numeric>,
    pub quantity: Option<Numeric>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkTransferRequest {
    pub old_user_name: Option<String>,
    pub new_user_name: Option<String>,
}

pub async fn sell(
    State(state): State<AppState>,
    payload: Result<Json<BulkSellRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let username = require_username(payload.username)?;
    let price = require_price(payload.price)?;
    let quantity = require_count(payload.quantity, state.limits.max_bulk_quantity)?;

    let tickets =
        state.with_registry(|registry| registry.buy_bulk(&username, price, quantity))?;
    Ok(success(tickets))
}

pub async fn list_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let username = require_username(Some(username))?;
    let tickets = state.with_registry(|registry| registry.list_by_username(&username))?;
    Ok(success(tickets))
}

/// Renames every ticket owner. `oldUserName` falls back to the username in
/// the path when the body omits it.
pub async fn transfer(
    State(state): State<AppState>,
    Path(username): Path<String>,
    payload: Result<Json<BulkTransferRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let old_username = require_username(payload.old_user_name.or(Some(username)))?;
    let new_username = require_username(payload.new_user_name)?;

    let tickets = state.with_registry(|registry| {
        registry.update_bulk(&old_username, &new_username).to_vec()
    })?;
    Ok(success(tickets))
}

pub async fn delete_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let username = require_username(Some(username))?;
    let remaining =
        state.with_registry(|registry| registry.delete_bulk(&username).to_vec())?;
    Ok(success(remaining))
}

pub async fn list_sell_owner(state: State<AppState>) -> Result<impl IntoResponse, AppError> {
    list_by_username(state, Path(SELL_SEGMENT.to_string())).await
}

pub async fn transfer_sell_owner(
    state: State<AppState>,
    payload: Result<Json<BulkTransferRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    transfer(state, Path(SELL_SEGMENT.to_string()), payload).await
}

pub async fn delete_sell_owner(state: State<AppState>) -> Result<impl IntoResponse, AppError> {
    delete_by_username(state, Path(SELL_SEGMENT.to_string())).await
}
