// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! RS256 access tokens for the Relational platform: issuance at login,
//! verification on every request, and the per-request authentication
//! context that downstream authorization consumes.
//!
//! ## Token Flow
//!
//! 1. Client POSTs credentials to `/v1/auth/login`
//! 2. The service looks the user up in the directory and checks the bcrypt
//!    password hash
//! 3. On success it issues a compact JWS (RS256) carrying:
//!    - `sub` → the user's email
//!    - `roles` → bare role names
//!    - `iat` / `exp` → issuance and expiry instants
//! 4. Subsequent requests send `Authorization: Bearer <token>`; the token
//!    filter verifies the signature, checks expiry with zero leeway, and
//!    establishes an [`AuthContext`] carrying `ROLE_`-prefixed authorities
//! 5. External services verify tokens on their own against
//!    `GET /v1/auth/public-key`
//!
//! ## Security
//!
//! - Credential failures are indistinguishable: one error, one message
//! - The filter never rejects a request; unauthenticated requests proceed
//!   and downstream authorization rejects where required
//! - A context is established only for tokens that extract cleanly AND
//!   pass the validity check

pub mod claims;
pub mod error;
pub mod extractor;
pub mod keys;
pub mod middleware;
pub mod password;
pub mod roles;
pub mod service;
pub mod tokens;
pub mod validator;

pub use claims::AuthContext;
pub use error::AuthError;
pub use extractor::Auth;
pub use keys::{KeyError, KeyMaterial};
pub use service::AuthService;
pub use tokens::TokenCodec;
pub use validator::TokenValidator;
