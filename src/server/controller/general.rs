use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, HealthDto, RevisionsDto, RootDto, V1RevisionsDto},
    server::state::AppState,
};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static GENERAL_TAG: &str = "general";

pub const UNKNOWN_ENDPOINT_MESSAGE: &str = "Unknown Endpoint";

/// Describe the running release and the API revisions it serves.
///
/// # Returns
/// - `200 OK` - Release version and revision status
#[utoipa::path(
    get,
    path = "/",
    tag = GENERAL_TAG,
    responses(
        (status = 200, description = "Release and API revisions", body = RootDto)
    ),
)]
pub async fn root() -> impl IntoResponse {
    Json(RootDto {
        release: env!("CARGO_PKG_VERSION").to_string(),
        revisions: RevisionsDto {
            v1: V1RevisionsDto {
                v1_old: "discontinued".to_string(),
                v1_revised: "stable".to_string(),
            },
        },
    })
}

/// Report whether the service can reach its database.
///
/// # Returns
/// - `200 OK` - Database reachable
/// - `503 Service Unavailable` - Database ping failed
#[utoipa::path(
    get,
    path = "/health",
    tag = GENERAL_TAG,
    responses(
        (status = 200, description = "Service healthy", body = HealthDto),
        (status = 503, description = "Database unreachable", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthDto {
                error: false,
                status: 200,
                database_ok: true,
            }),
        ),
        Err(e) => {
            tracing::warn!("Database health check failed: {}", e);

            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthDto {
                    error: true,
                    status: 503,
                    database_ok: false,
                }),
            )
        }
    }
}

/// Response for any path or method no route matches.
pub async fn unknown_endpoint() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto::new(404, UNKNOWN_ENDPOINT_MESSAGE)),
    )
}
