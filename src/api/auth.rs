// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication endpoints.

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    auth::AuthError,
    models::{LoginRequest, LoginResponse, PublicKeyResponse},
    state::AppState,
};

/// Exchange credentials for a signed access token.
///
/// Unknown emails and wrong passwords produce the same empty 401 so the
/// endpoint does not reveal which accounts exist.
#[utoipa::path(
    post,
    path = "/v1/auth/login",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Access token issued", body = LoginResponse),
        (status = 401, description = "Unknown email or wrong password"),
        (status = 500, description = "Token issuance or user store failure"),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, StatusCode> {
    match state
        .auth
        .authenticate(&request.email, &request.password)
        .await
    {
        Ok(token) => Ok(Json(LoginResponse {
            access_token: token,
        })),
        Err(AuthError::InvalidCredentials) => Err(StatusCode::UNAUTHORIZED),
        Err(err) => {
            tracing::error!(error = %err, "login failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Serve the verification key document.
///
/// The response carries the signing algorithm and the public key PEM so
/// downstream services can verify tokens without calling back here.
#[utoipa::path(
    get,
    path = "/v1/auth/public-key",
    tag = "Auth",
    responses(
        (status = 200, description = "Verification key document", body = PublicKeyResponse)
    )
)]
pub async fn public_key(State(state): State<AppState>) -> Json<PublicKeyResponse> {
    Json(state.auth.public_key())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::keys::test_keys;
    use crate::auth::password::hash_password;
    use crate::auth::tokens::ALGORITHM_NAME;
    use crate::store::{InMemoryUserStore, StoreError, UserRecord, UserStore};
    use std::collections::HashSet;
    use std::sync::Arc;

    async fn seeded_state() -> AppState {
        let store = InMemoryUserStore::new();
        store
            .insert(
                "author@example.com",
                &hash_password("s3cret").unwrap(),
                HashSet::from(["AUTHOR".to_string()]),
            )
            .await;
        AppState::new(Arc::new(test_keys::keys()), 24, Arc::new(store))
    }

    #[tokio::test]
    async fn login_issues_token_for_valid_credentials() {
        let state = seeded_state().await;

        let Json(body) = login(
            State(state.clone()),
            Json(LoginRequest {
                email: "author@example.com".to_string(),
                password: "s3cret".to_string(),
            }),
        )
        .await
        .expect("login succeeds");

        assert_eq!(body.access_token.split('.').count(), 3);
        assert!(state.validator.is_valid(&body.access_token));
        assert_eq!(
            state.tokens.extract_email(&body.access_token).unwrap(),
            "author@example.com"
        );
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let state = seeded_state().await;

        let result = login(
            State(state),
            Json(LoginRequest {
                email: "author@example.com".to_string(),
                password: "wrong".to_string(),
            }),
        )
        .await;

        assert_eq!(result.err(), Some(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn login_rejects_unknown_email() {
        let state = seeded_state().await;

        let result = login(
            State(state),
            Json(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "s3cret".to_string(),
            }),
        )
        .await;

        assert_eq!(result.err(), Some(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn login_maps_store_failure_to_500() {
        struct DownStore;

        #[async_trait::async_trait]
        impl UserStore for DownStore {
            async fn find_by_email(&self, _email: &str) -> Result<Option<UserRecord>, StoreError> {
                Err(StoreError::Unavailable("connection refused".to_string()))
            }
        }

        let state = AppState::new(Arc::new(test_keys::keys()), 24, Arc::new(DownStore));

        let result = login(
            State(state),
            Json(LoginRequest {
                email: "author@example.com".to_string(),
                password: "s3cret".to_string(),
            }),
        )
        .await;

        assert_eq!(result.err(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn public_key_serves_verification_document() {
        let state = seeded_state().await;

        let Json(body) = public_key(State(state)).await;

        assert_eq!(body.algorithm, ALGORITHM_NAME);
        assert!(body.pem.starts_with("-----BEGIN PUBLIC KEY-----\n"));
        assert!(body.pem.ends_with("-----END PUBLIC KEY-----\n"));
    }
}
