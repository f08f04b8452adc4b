// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication flows over the token codec and the user directory.

use std::sync::Arc;

use super::error::AuthError;
use super::password::verify_password;
use super::tokens::{TokenCodec, ALGORITHM_NAME};
use crate::models::PublicKeyResponse;
use crate::store::UserStore;

/// Login and public-key operations.
#[derive(Clone)]
pub struct AuthService {
    tokens: TokenCodec,
    users: Arc<dyn UserStore>,
}

impl AuthService {
    pub fn new(tokens: TokenCodec, users: Arc<dyn UserStore>) -> Self {
        Self { tokens, users }
    }

    /// Authenticate an email/password pair and issue an access token.
    ///
    /// Unknown email and wrong password fail with the same error and the
    /// same message, so responses cannot be used to probe which emails are
    /// registered. A user with no roles authenticates fine; the token then
    /// carries an empty role list.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.email, &user.roles)?;
        tracing::debug!(email = %user.email, "issued access token");
        Ok(token)
    }

    /// The verification key document served to external verifiers.
    pub fn public_key(&self) -> PublicKeyResponse {
        PublicKeyResponse {
            algorithm: ALGORITHM_NAME.to_string(),
            pem: self.tokens.public_key_pem(),
        }
    }
}
