// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{collections::HashSet, env, net::SocketAddr, sync::Arc};

use tokio::signal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use relational_auth_server::{
    api::router,
    auth::{password::hash_password, KeyMaterial},
    config,
    state::AppState,
    store::InMemoryUserStore,
};

#[tokio::main]
async fn main() {
    init_tracing();

    let private_pem =
        env::var(config::PRIVATE_KEY_ENV).expect("AUTH_PRIVATE_KEY must be set");
    let public_pem = env::var(config::PUBLIC_KEY_ENV).expect("AUTH_PUBLIC_KEY must be set");

    // Bad key material is fatal. Serving with an unusable signing key would
    // turn every login into a 500 anyway.
    let keys = Arc::new(
        KeyMaterial::from_pem_pair(&private_pem, &public_pem)
            .expect("Failed to load RSA key material"),
    );

    // Unparseable and negative lifetimes both fall back to the default.
    let ttl_hours: i64 = env::var(config::TOKEN_TTL_ENV)
        .ok()
        .and_then(|hours| hours.parse().ok())
        .filter(|hours| *hours >= 0)
        .unwrap_or(config::DEFAULT_TOKEN_TTL_HOURS);

    let store = InMemoryUserStore::new();
    seed_user(&store).await;

    let state = AppState::new(keys, ttl_hours, Arc::new(store));
    let app = router(state);

    let host = env::var(config::HOST_ENV).unwrap_or_else(|_| config::DEFAULT_HOST.to_string());
    let port: u16 = env::var(config::PORT_ENV)
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(config::DEFAULT_PORT);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    tracing::info!(%addr, ttl_hours, "auth server listening (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
}

/// Setup tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let registry = tracing_subscriber::registry().with(filter);
    match env::var(config::LOG_FORMAT_ENV).as_deref() {
        Ok("json") => registry.with(fmt::layer().json()).init(),
        _ => registry.with(fmt::layer()).init(),
    }
}

/// Insert the account named by `SEED_USER_EMAIL`, if configured.
async fn seed_user(store: &InMemoryUserStore) {
    let Ok(email) = env::var(config::SEED_EMAIL_ENV) else {
        tracing::warn!("no seed user configured, every login will be rejected");
        return;
    };

    let password = env::var(config::SEED_PASSWORD_ENV)
        .expect("SEED_USER_PASSWORD must be set when SEED_USER_EMAIL is");
    let roles: HashSet<String> = env::var(config::SEED_ROLES_ENV)
        .unwrap_or_else(|_| config::DEFAULT_SEED_ROLES.to_string())
        .split(',')
        .map(|role| role.trim().to_string())
        .filter(|role| !role.is_empty())
        .collect();

    let hash = hash_password(&password).expect("Failed to hash seed password");
    let user = store.insert(&email, &hash, roles).await;
    tracing::info!(email = %user.email, "seeded user account");
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
