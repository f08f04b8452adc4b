// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User directory.
//!
//! The [`UserStore`] trait abstracts the directory this service
//! authenticates against. Lookups are async because a real directory sits
//! behind a network hop; the in-process implementation backs development
//! deployments and tests.

use std::collections::{HashMap, HashSet};

use tokio::sync::RwLock;
use uuid::Uuid;

/// A user record as the directory returns it.
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// Stable record id.
    pub id: Uuid,
    /// Login email, unique within the directory.
    pub email: String,
    /// bcrypt hash of the user's password.
    pub password_hash: String,
    /// Bare role names (no `ROLE_` prefix at this layer).
    pub roles: HashSet<String>,
}

/// Errors from the user directory.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The directory could not be reached or answered abnormally.
    #[error("user store unavailable: {0}")]
    Unavailable(String),
}

/// Trait abstracting the user directory backend.
///
/// Implementations must be `Send + Sync` because the directory handle is
/// shared across request tasks.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Look up a user by email.
    ///
    /// `Ok(None)` means the email is not registered; only infrastructure
    /// failures produce an error.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;
}

/// In-process user directory backed by a map keyed on email.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user, replacing any record with the same email.
    pub async fn insert(
        &self,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        roles: HashSet<String>,
    ) -> UserRecord {
        let record = UserRecord {
            id: Uuid::new_v4(),
            email: email.into(),
            password_hash: password_hash.into(),
            roles,
        };
        self.users
            .write()
            .await
            .insert(record.email.clone(), record.clone());
        record
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.read().await.get(email).cloned())
    }
}
