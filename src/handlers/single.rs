//! Handlers for single-ticket operations and the full listing.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use super::input::{require_price, require_username, Numeric};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{message, success};

#[derive(Debug, Deserialize)]
pub struct SellRequest {
    pub username: Option<String>,
    pub price: Option<Numeric>,
}

#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    pub username: Option<String>,
}

pub async fn list_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tickets = state.with_registry(|registry| registry.list_all().to_vec())?;
    debug!(count = tickets.len(), "Listing all tickets");
    Ok(success(tickets))
}

pub async fn sell(
    State(state): State<AppState>,
    payload: Result<Json<SellRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let username = require_username(payload.username)?;
    let price = require_price(payload.price)?;

    let ticket = state.with_registry(|registry| registry.buy(&username, price))?;
    Ok(success(ticket))
}

pub async fn get_ticket(
    State(state): State<AppState>,
    Path(ticket_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let ticket = state
        .with_registry(|registry| registry.get(&ticket_id).cloned())?
        .ok_or_else(|| AppError::NotFound(format!("ticket '{ticket_id}' was not found")))?;
    Ok(success(ticket))
}

pub async fn transfer(
    State(state): State<AppState>,
    Path(ticket_id): Path<String>,
    payload: Result<Json<TransferRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let username = require_username(payload.username)?;

    let ticket = state.with_registry(|registry| registry.update(&ticket_id, &username))??;
    Ok(success(ticket))
}

pub async fn delete_ticket(
    State(state): State<AppState>,
    Path(ticket_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.with_registry(|registry| registry.delete(&ticket_id))?;
    Ok(message("Deleted successfully"))
}
