//! Availability handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use skillswap_core::error::AppError;

use crate::dto::request::CreateAvailabilityRequest;
use crate::dto::response::{ApiResponse, SlotResponse};
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/availabilities
pub async fn create_slot(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateAvailabilityRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SlotResponse>>), AppError> {
    let interval = req.into_interval()?;
    let slot = state
        .availability_service
        .add_slot(user.sub, interval)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(slot.into()))))
}

/// GET /api/availabilities
pub async fn list_slots(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<Vec<SlotResponse>>>, AppError> {
    let slots = state.availability_service.list_slots(user.sub).await?;
    Ok(Json(ApiResponse::ok(
        slots.into_iter().map(SlotResponse::from).collect(),
    )))
}
