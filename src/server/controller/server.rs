use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, server::ServerResponseDto},
    server::{error::AppError, service::server::ServerService, state::AppState},
};

/// Tag for grouping server endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

/// Get a listed server.
///
/// # Returns
/// - `200 OK` - Server listing without invite code or links
/// - `404 Not Found` - `Unknown Server`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/v1/server/{id}",
    tag = SERVER_TAG,
    params(
        ("id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Server listing", body = ServerResponseDto),
        (status = 401, description = "No token presented", body = ErrorDto),
        (status = 403, description = "Unknown token", body = ErrorDto),
        (status = 404, description = "Unknown Server", body = ErrorDto),
        (status = 429, description = "Token quota exhausted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn get_server(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let server = ServerService::new(&state.db).get_server(&id).await?;

    Ok((
        StatusCode::OK,
        Json(ServerResponseDto {
            error: false,
            status: 200,
            server: server.into_dto(),
        }),
    ))
}
