use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::{bulk, draw, health_check, single};
use crate::state::AppState;

/// Ticket endpoints without middleware. `/s/*` addresses one ticket, `/b/*`
/// addresses every ticket of a user.
pub fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(single::list_all))
        .route("/draw", get(draw::draw))
        .route("/s/sell", post(single::sell))
        .route(
            "/s/:ticket_id",
            get(single::get_ticket)
                .patch(single::transfer)
                .delete(single::delete_ticket),
        )
        .route(
            "/b/sell",
            post(bulk::sell)
                .get(bulk::list_sell_owner)
                .patch(bulk::transfer_sell_owner)
                .delete(bulk::delete_sell_owner),
        )
        .route(
            "/b/:username",
            get(bulk::list_by_username)
                .patch(bulk::transfer)
                .delete(bulk::delete_by_username),
        )
}

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(ticket_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer())
        .layer(create_cors_layer())
}
