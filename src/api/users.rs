// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User endpoints.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::{Auth, AuthContext};

/// Response for GET /v1/users/me
#[derive(Debug, Serialize, ToSchema)]
pub struct MeResponse {
    /// Authenticated principal (the email embedded in the token).
    pub principal: String,
    /// Granted authorities, sorted for stable output.
    pub authorities: Vec<String>,
}

impl From<AuthContext> for MeResponse {
    fn from(context: AuthContext) -> Self {
        let mut authorities: Vec<String> = context.authorities.into_iter().collect();
        authorities.sort();
        Self {
            principal: context.principal,
            authorities,
        }
    }
}

/// Get the current authenticated identity.
///
/// Returns the principal and authorities the token filter attached to this
/// request.
#[utoipa::path(
    get,
    path = "/v1/users/me",
    tag = "Users",
    responses(
        (status = 200, description = "Authenticated identity", body = MeResponse),
        (status = 401, description = "Unauthorized - invalid or missing token"),
    )
)]
pub async fn get_current_user(Auth(context): Auth) -> Json<MeResponse> {
    Json(context.into())
}
