use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, stats::StatsResponseDto},
    server::{error::AppError, service::stats::StatsService, state::AppState},
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Get directory statistics.
///
/// Counts servers, bots by approval and verification, and users by rank. Staff are
/// counted once under their highest rank. Recomputed on every request.
///
/// # Access Control
/// - API token, or a caller address on the API allow-list
///
/// # Returns
/// - `200 OK` - Aggregate counts
/// - `401 Unauthorized` - No token presented
/// - `403 Forbidden` - Unknown token
/// - `429 Too Many Requests` - Token quota exhausted
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/v1/stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Directory statistics", body = StatsResponseDto),
        (status = 401, description = "No token presented", body = ErrorDto),
        (status = 403, description = "Unknown token", body = ErrorDto),
        (status = 429, description = "Token quota exhausted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats = StatsService::new(&state.db).get_stats().await?;

    Ok((
        StatusCode::OK,
        Json(StatsResponseDto {
            error: false,
            status: 200,
            stats: stats.into_dto(),
        }),
    ))
}
