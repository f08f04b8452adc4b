// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::middleware::token_filter,
    models::{LoginRequest, LoginResponse, PublicKeyResponse},
    state::AppState,
};

pub mod auth;
pub mod health;
pub mod users;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/public-key", get(auth::public_key))
        .route("/users/me", get(users::get_current_user))
        .layer(middleware::from_fn_with_state(state.clone(), token_filter))
        .with_state(state);

    Router::new()
        .route("/health", get(health::health))
        .nest("/v1", v1_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::public_key,
        users::get_current_user,
        health::health
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            PublicKeyResponse,
            users::MeResponse,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Auth", description = "Login and token verification keys"),
        (name = "Users", description = "Authenticated identity"),
        (name = "Health", description = "Service probes")
    )
)]
struct ApiDoc;
