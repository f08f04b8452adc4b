// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token claims and the per-request authentication context.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Claims written into every access token at issuance.
///
/// `sub` carries the principal's email; `roles` the bare role names as
/// stored in the user directory (no `ROLE_` prefix at this layer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the authenticated user's email.
    pub sub: String,
    /// Role names granted to the subject.
    pub roles: Vec<String>,
    /// Issuance instant, Unix seconds.
    pub iat: i64,
    /// Expiry instant, Unix seconds. Always `iat` + configured ttl.
    pub exp: i64,
}

/// Authentication context established for a request by the token filter.
///
/// Downstream authorization reads this from request extensions; the filter
/// is the only writer and never overwrites an existing context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Authenticated principal (the token's `sub`).
    pub principal: String,
    /// Granted authorities: role names normalized with the `ROLE_` prefix.
    pub authorities: HashSet<String>,
}
