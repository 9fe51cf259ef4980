//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic. Unknown user ids yield empty lists with a 200
//! status, mirroring the "no data" semantics of the facade.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::HealthResponse;
use super::error::AppError;
use super::state::AppState;
use crate::api::{MeanTimeRow, StartEndRow, TotalTimeRow, UserId, UserInfo};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running and the presence
/// dataset is loadable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let dataset = match state.service.dataset().await {
        Ok(dataset) => format!("loaded ({} users)", dataset.user_count()),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        dataset,
    }))
}

/// GET /api/v1/users
///
/// Users listing for the dropdown, enriched with names and avatars where the
/// directory knows them.
pub async fn list_users(State(state): State<AppState>) -> HandlerResult<Vec<UserInfo>> {
    let users = state.service.users_list().await?;
    Ok(Json(users))
}

/// GET /api/v1/mean_time_weekday/{user_id}
///
/// Mean presence time of the given user grouped by weekday.
pub async fn mean_time_weekday(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> HandlerResult<Vec<MeanTimeRow>> {
    let rows = state
        .service
        .mean_time_by_weekday(UserId::new(user_id))
        .await?;
    Ok(Json(rows))
}

/// GET /api/v1/presence_weekday/{user_id}
///
/// Total presence time of the given user grouped by weekday, with the
/// chart header row first.
pub async fn presence_weekday(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> HandlerResult<Vec<TotalTimeRow>> {
    let rows = state
        .service
        .total_time_by_weekday(UserId::new(user_id))
        .await?;
    Ok(Json(rows))
}

/// GET /api/v1/presence_start_end/{user_id}
///
/// Mean arrival and departure time of the given user per weekday.
pub async fn presence_start_end(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> HandlerResult<Vec<StartEndRow>> {
    let rows = state
        .service
        .mean_start_end_by_weekday(UserId::new(user_id))
        .await?;
    Ok(Json(rows))
}
