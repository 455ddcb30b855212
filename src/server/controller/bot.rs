use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        bot::{BotResponseDto, BotsResponseDto, UpdateBotStatsDto},
    },
    server::{
        error::AppError, middleware::auth::Admission, service::bot::BotService, state::AppState,
    },
};

/// Tag for grouping bot endpoints in OpenAPI documentation
pub static BOT_TAG: &str = "bot";

/// Get a listed bot.
///
/// # Access Control
/// - API token, or a caller address on the API allow-list
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Discord bot ID
///
/// # Returns
/// - `200 OK` - Bot listing; token, moderator notes, votes and pending verification
///   are never included
/// - `404 Not Found` - `Unknown Bot`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/v1/bot/{id}",
    tag = BOT_TAG,
    params(
        ("id" = String, Path, description = "Discord bot ID")
    ),
    responses(
        (status = 200, description = "Bot listing", body = BotResponseDto),
        (status = 401, description = "No token presented", body = ErrorDto),
        (status = 403, description = "Unknown token", body = ErrorDto),
        (status = 404, description = "Unknown Bot", body = ErrorDto),
        (status = 429, description = "Token quota exhausted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn get_bot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bot = BotService::new(&state.db).get_bot(&id).await?;

    Ok((
        StatusCode::OK,
        Json(BotResponseDto {
            error: false,
            status: 200,
            bot: bot.into_dto(),
        }),
    ))
}

/// Get every listed bot.
#[utoipa::path(
    get,
    path = "/v1/bots",
    tag = BOT_TAG,
    responses(
        (status = 200, description = "All bot listings", body = BotsResponseDto),
        (status = 401, description = "No token presented", body = ErrorDto),
        (status = 403, description = "Unknown token", body = ErrorDto),
        (status = 429, description = "Token quota exhausted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn get_bots(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bots = BotService::new(&state.db).get_all_bots().await?;

    Ok((
        StatusCode::OK,
        Json(BotsResponseDto {
            error: false,
            status: 200,
            bots: bots.into_iter().map(|bot| bot.into_dto()).collect(),
        }),
    ))
}

/// Post a bot's current server count.
///
/// The body is read raw so that a numeric string is accepted for `guildCount` and
/// every malformed body gets the same 400 message.
///
/// # Access Control
/// - The bot's own API token, or a caller address on the write allow-list
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `admission` - Gate outcome for this request
/// - `id` - Discord bot ID
/// - `body` - JSON body with `guildCount`
///
/// # Returns
/// - `200 OK` - Count updated
/// - `400 Bad Request` - `guildCount (int) is Required`
/// - `403 Forbidden` - Token belongs to another bot
/// - `404 Not Found` - `Unknown Bot`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/v1/bot/{id}",
    tag = BOT_TAG,
    params(
        ("id" = String, Path, description = "Discord bot ID")
    ),
    request_body = UpdateBotStatsDto,
    responses(
        (status = 200, description = "Server count updated", body = MessageDto),
        (status = 400, description = "guildCount missing or invalid", body = ErrorDto),
        (status = 401, description = "No token presented", body = ErrorDto),
        (status = 403, description = "Token does not own this bot", body = ErrorDto),
        (status = 404, description = "Unknown Bot", body = ErrorDto),
        (status = 429, description = "Token quota exhausted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_token" = [])),
)]
pub async fn update_bot_stats(
    State(state): State<AppState>,
    Extension(admission): Extension<Admission>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    admission.require_owner(&id)?;

    BotService::new(&state.db)
        .update_server_count(&id, &body)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            error: false,
            status: 200,
            message: "Updated".to_string(),
        }),
    ))
}
