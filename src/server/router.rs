use axum::{
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::any::Any;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::{ErrorDto, HealthDto, MessageDto, OwnerDto, RevisionsDto, RootDto, V1RevisionsDto},
        bot::{BotDto, BotResponseDto, BotStatusDto, BotsResponseDto, UpdateBotStatsDto},
        server::{ServerDto, ServerResponseDto, ServerStatusDto},
        stats::{
            BotStatsDto, ServerStatsDto, StaffStatsDto, StatsDto, StatsResponseDto, UserStatsDto,
        },
        user::{UserDto, UserRankDto, UserResponseDto},
    },
    server::{
        controller::{bot, general, server, stats, user},
        error::InternalServerError,
        middleware::auth::require_token,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Bot List API", description = "Public REST API for the bot and server directory"),
    paths(
        general::root,
        general::health,
        stats::get_stats,
        user::get_user,
        server::get_server,
        bot::get_bot,
        bot::get_bots,
        bot::update_bot_stats,
    ),
    components(schemas(
        ErrorDto, MessageDto, RootDto, RevisionsDto, V1RevisionsDto, HealthDto, OwnerDto,
        BotDto, BotStatusDto, BotResponseDto, BotsResponseDto, UpdateBotStatsDto,
        ServerDto, ServerStatusDto, ServerResponseDto,
        StatsResponseDto, StatsDto, ServerStatsDto, BotStatsDto, UserStatsDto, StaffStatsDto,
        UserDto, UserRankDto, UserResponseDto,
    )),
    modifiers(&ApiTokenScheme),
)]
pub struct ApiDoc;

/// Registers the `Authorization` header token as the `api_token` security scheme.
struct ApiTokenScheme;

impl Modify for ApiTokenScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
            );
        }
    }
}

async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Renders a panic inside a handler as the standard 500 body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    InternalServerError(format!("Handler panicked: {}", detail)).into_response()
}

/// Builds the full application router.
///
/// `/v1` routes sit behind the token gate through `route_layer`, so requests that
/// match no route reach the `Unknown Endpoint` fallback without being charged. The
/// method fallback is installed after the gate so unsupported methods skip it too.
pub fn router(state: AppState) -> Router {
    let v1 = Router::new()
        .route("/stats", get(stats::get_stats))
        .route("/user/{id}", get(user::get_user))
        .route("/server/{id}", get(server::get_server))
        .route("/bots", get(bot::get_bots))
        .route("/bot/{id}", get(bot::get_bot).post(bot::update_bot_stats))
        .route_layer(from_fn_with_state(state.clone(), require_token))
        .method_not_allowed_fallback(general::unknown_endpoint);

    Router::new()
        .route("/", get(general::root))
        .route("/health", get(general::health))
        .route("/openapi.json", get(openapi))
        .nest("/v1", v1)
        .fallback(general::unknown_endpoint)
        .method_not_allowed_fallback(general::unknown_endpoint)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
