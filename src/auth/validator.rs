// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token validity.

use std::sync::Arc;

use chrono::Utc;

use super::keys::KeyMaterial;
use super::tokens::decode_verified;

/// Boolean validity oracle for bearer tokens.
///
/// Valid means the signature verifies under this service's public key and
/// the expiry lies strictly in the future; a token at exactly its expiry
/// instant is already invalid, and no clock-skew leeway is applied. Every
/// failure of any kind maps to `false`, never to an error.
#[derive(Clone)]
pub struct TokenValidator {
    keys: Arc<KeyMaterial>,
}

impl TokenValidator {
    pub fn new(keys: Arc<KeyMaterial>) -> Self {
        Self { keys }
    }

    /// Whether `token` verifies and is not yet expired.
    pub fn is_valid(&self, token: &str) -> bool {
        match decode_verified(&self.keys, token) {
            Ok(claims) => claims.exp > Utc::now().timestamp(),
            Err(_) => false,
        }
    }
}
