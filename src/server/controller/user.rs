use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, user::UserResponseDto},
    server::{error::AppError, service::user::UserService, state::AppState},
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get a user's public profile.
///
/// # Access Control
/// - API token, or a caller address on the API allow-list
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Discord user ID
///
/// # Returns
/// - `200 OK` - Public profile; token, locale, preferences, status and staff tracking
///   are never included
/// - `404 Not Found` - `Unknown User`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/v1/user/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "Discord user ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponseDto),
        (status = 401, description = "No token presented", body = ErrorDto),
        (status = 403, description = "Unknown token", body = ErrorDto),
        (status = 404, description = "Unknown User", body = ErrorDto),
        (status = 429, description = "Token quota exhausted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_user(&id).await?;

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            error: false,
            status: 200,
            user: user.into_dto(),
        }),
    ))
}
