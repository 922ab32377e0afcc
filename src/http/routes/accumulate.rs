use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tower::ServiceExt;

use crate::commands::accrue_points::AccruePointsRequest;
use crate::http::error::ApiError;
use crate::http::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumulateBody {
    /// Absent and `null` both count as missing; `0` is a present value.
    #[serde(default)]
    member_id: Option<String>,
    #[serde(default)]
    amount_paid: Option<f64>,
}

/// POST /spu-member/accumulate
///
/// Converts a payment amount into points for the member.
pub async fn accumulate(
    State(state): State<AppState>,
    Json(body): Json<AccumulateBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let member_id = body.member_id.ok_or(ApiError::MissingFields)?;
    let amount_paid = body.amount_paid.ok_or(ApiError::MissingFields)?;

    let res = state
        .domain
        .oneshot(AccruePointsRequest {
            member_id,
            amount_paid,
        })
        .await?;

    Ok(Json(serde_json::json!({
        "status": "200",
        "msg": "เพิ่มแต้มสำเร็จ",
        "data": {
            "memberId": res.member_id,
            "earnedPoints": res.earned_points,
            "totalPoints": res.total_points,
        },
    })))
}
