use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header::AUTHORIZATION, Method, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::{
    net::{IpAddr, SocketAddr},
    time::Duration,
};
use test_utils::{
    builder::TestBuilder,
    factory::{bot::BotFactory, server::ServerFactory, user::UserFactory},
};
use tower::ServiceExt;

use crate::server::{
    middleware::auth::AccessPolicy,
    router::router,
    service::rate_limit::{RateLimitPolicy, RateLimiter, API_POINTS},
    state::AppState,
};

mod bot;
mod gate;
mod general;
mod stats;

/// Policy with the production budget but a window long enough that no test sees it
/// reset.
fn test_policy() -> RateLimitPolicy {
    RateLimitPolicy {
        points: API_POINTS,
        window: Duration::from_secs(600),
        block: Duration::from_secs(10),
    }
}

fn app(db: &DatabaseConnection) -> Router {
    app_with_access(db, AccessPolicy::default())
}

fn app_with_access(db: &DatabaseConnection, access: AccessPolicy) -> Router {
    router(AppState::new(
        db.clone(),
        RateLimiter::new(test_policy()),
        access,
    ))
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Body) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, token);
    }
    builder.body(body).unwrap()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    request(Method::GET, uri, token, Body::empty())
}

fn post(uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
    let mut request = request(Method::POST, uri, token, Body::from(body.to_string()));
    request
        .headers_mut()
        .insert("content-type", "application/json".parse().unwrap());
    request
}

/// Attaches a TCP peer address, as the production listener does.
fn from_peer(mut request: Request<Body>, peer: [u8; 4]) -> Request<Body> {
    request
        .extensions_mut()
        .insert(ConnectInfo(SocketAddr::from((peer, 40_000))));
    request
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
