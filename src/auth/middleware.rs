// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Bearer token filter.
//!
//! Runs once per request ahead of the handlers. The resolution step is a
//! pure function over the `Authorization` header and any pre-existing
//! context, which keeps the decision table testable without HTTP plumbing;
//! the axum adapter only applies its outcome and always continues the
//! chain exactly once. The filter never rejects a request: it either
//! establishes an [`AuthContext`] in the request extensions or leaves the
//! request unauthenticated. Rejection belongs to downstream authorization.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use super::claims::AuthContext;
use super::error::AuthError;
use super::roles::to_authority;
use super::tokens::TokenCodec;
use super::validator::TokenValidator;
use crate::state::AppState;

/// Exact scheme prefix, case-sensitive, single trailing space.
const BEARER_PREFIX: &str = "Bearer ";

/// Decide whether a request gains a new authentication context.
///
/// Decision table, in order:
/// 1. An existing context always wins; no new context.
/// 2. No header, or a non-Bearer scheme: no new context.
/// 3. Otherwise the token must extract cleanly AND be valid. Any failure
///    is swallowed and the request stays unauthenticated.
pub(crate) fn resolve_context(
    tokens: &TokenCodec,
    validator: &TokenValidator,
    header: Option<&str>,
    existing: Option<&AuthContext>,
) -> Option<AuthContext> {
    if existing.is_some() {
        return None;
    }

    let token = header?.strip_prefix(BEARER_PREFIX)?;

    match establish(tokens, validator, token) {
        Ok(context) => context,
        Err(err) => {
            tracing::debug!(error = %err, "discarding unverifiable bearer token");
            None
        }
    }
}

/// Extract claims and check validity for a presented token.
fn establish(
    tokens: &TokenCodec,
    validator: &TokenValidator,
    token: &str,
) -> Result<Option<AuthContext>, AuthError> {
    let principal = tokens.extract_email(token)?;
    let roles = tokens.extract_roles(token)?;

    if !validator.is_valid(token) {
        return Ok(None);
    }

    Ok(Some(AuthContext {
        principal,
        authorities: roles.iter().map(|role| to_authority(role)).collect(),
    }))
}

/// Axum adapter: resolve against the request, apply the outcome, continue.
pub async fn token_filter(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let resolved = {
        let header = request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        let existing = request.extensions().get::<AuthContext>();
        resolve_context(&state.tokens, &state.validator, header, existing)
    };

    if let Some(context) = resolved {
        request.extensions_mut().insert(context);
    }

    next.run(request).await
}
