// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for the request authentication context.
//!
//! Use the `Auth` extractor in handlers that require authentication:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(context): Auth) -> impl IntoResponse {
//!     // context.principal, context.authorities
//! }
//! ```
//!
//! The token filter is the only authenticator; this extractor reads what
//! the filter established and rejects with 401 when nothing is there. It
//! never looks at headers itself, so it cannot disagree with the filter.

use axum::{extract::FromRequestParts, http::request::Parts};

use super::claims::AuthContext;
use super::error::AuthError;

/// Extractor requiring an established authentication context.
pub struct Auth(pub AuthContext);

impl<S> FromRequestParts<S> for Auth
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .map(Auth)
            .ok_or(AuthError::Unauthenticated)
    }
}
