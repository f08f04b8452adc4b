// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response structures for the REST API. All types derive
//! `Serialize`, `Deserialize`, and `ToSchema` for automatic JSON handling
//! and OpenAPI documentation.
//!
//! ## Model Categories
//!
//! - **Login**: credential submission and the issued access token
//! - **Public key**: the verification key document for external verifiers

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Login Models
// =============================================================================

/// Credentials submitted to `POST /v1/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Plaintext password, verified against the stored bcrypt hash.
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Signed RS256 access token in compact JWS form.
    pub access_token: String,
}

// =============================================================================
// Public Key Models
// =============================================================================

/// The verification key document served to external verifiers.
///
/// Downstream services fetch this once and verify tokens locally instead of
/// calling back into this service per request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicKeyResponse {
    /// Signing algorithm of every token this service issues (`RS256`).
    pub algorithm: String,
    /// Public key as canonical PEM: armor lines and a 64-column base64 body.
    pub pem: String,
}
