pub mod accumulate;
pub mod balance;

use axum::routing::{get, post};
use axum::Router;

use crate::http::state::AppState;

/// Build the full route tree.
pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/spu-member/accumulate", post(accumulate::accumulate))
        .route("/spu-member/balance/:member_id", get(balance::balance))
        .with_state(state)
}
