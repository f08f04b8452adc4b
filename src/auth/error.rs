// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::store::StoreError;

/// Authentication error type.
///
/// Credential failures collapse into one variant with one message so that
/// responses cannot reveal whether an email is registered.
#[derive(Debug)]
pub enum AuthError {
    /// Unknown email or wrong password; the two are indistinguishable.
    InvalidCredentials,
    /// Token signing failed. The cause stays out of the display message and
    /// is only visible in server-side debug logs.
    TokenGeneration(jsonwebtoken::errors::Error),
    /// Token could not be verified (bad signature, malformed structure).
    TokenVerification(jsonwebtoken::errors::Error),
    /// User directory lookup failed.
    Store(StoreError),
    /// Internal error (password hashing and similar).
    Internal(String),
    /// No authentication context on a request that requires one.
    Unauthenticated,
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
    error_code: String,
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::TokenGeneration(_) => "token_generation_failed",
            AuthError::TokenVerification(_) => "token_verification_failed",
            AuthError::Store(_) => "store_error",
            AuthError::Internal(_) => "internal_error",
            AuthError::Unauthenticated => "unauthenticated",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials
            | AuthError::TokenVerification(_)
            | AuthError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AuthError::TokenGeneration(_) | AuthError::Store(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid authentication credentials"),
            AuthError::TokenGeneration(_) => write!(f, "Failed to generate access token"),
            AuthError::TokenVerification(e) => write!(f, "Token verification failed: {e}"),
            AuthError::Store(e) => write!(f, "User directory error: {e}"),
            AuthError::Internal(msg) => write!(f, "Internal authentication error: {msg}"),
            AuthError::Unauthenticated => write!(f, "Authentication required"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<StoreError> for AuthError {
    fn from(e: StoreError) -> Self {
        AuthError::Store(e)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(AuthErrorBody {
            error: self.to_string(),
            error_code: self.error_code().to_string(),
        });
        (status, body).into_response()
    }
}
