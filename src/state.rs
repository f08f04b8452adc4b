// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::auth::{AuthService, KeyMaterial, TokenCodec, TokenValidator};
use crate::store::UserStore;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub tokens: TokenCodec,
    pub validator: TokenValidator,
}

impl AppState {
    pub fn new(keys: Arc<KeyMaterial>, ttl_hours: i64, users: Arc<dyn UserStore>) -> Self {
        let tokens = TokenCodec::new(Arc::clone(&keys), ttl_hours);
        Self {
            auth: AuthService::new(tokens.clone(), users),
            validator: TokenValidator::new(keys),
            tokens,
        }
    }
}
