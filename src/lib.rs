// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Relational Auth - Token Issuance Service
//!
//! This crate provides an RSA-backed authentication service: it exchanges
//! credentials for signed RS256 access tokens, attaches the verified identity
//! to incoming requests, and publishes the verification key so other services
//! can check tokens on their own.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Key material, token issuance and verification, request filter
//! - `store` - User account lookup
//! - `state` - Shared application state

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod state;
pub mod store;
