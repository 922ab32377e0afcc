use axum::extract::{Path, State};
use axum::Json;
use tower::ServiceExt;

use crate::commands::get_balance::GetBalanceRequest;
use crate::http::error::ApiError;
use crate::http::state::AppState;

/// GET /spu-member/balance/:member_id
///
/// Reads the member's current points total.
pub async fn balance(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let res = state.domain.oneshot(GetBalanceRequest { member_id }).await?;

    Ok(Json(serde_json::json!({
        "status": "200",
        "msg": "OK",
        "data": {
            "memberId": res.member_id,
            "totalPoints": res.total_points,
        },
    })))
}
