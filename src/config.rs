// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `AUTH_PRIVATE_KEY` | RSA private key (PKCS#8 PEM) used to sign tokens | Required |
//! | `AUTH_PUBLIC_KEY` | RSA public key (SPKI PEM) used to verify tokens | Required |
//! | `JWT_EXPIRATION_HOURS` | Access token lifetime in hours | `24` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `SEED_USER_EMAIL` | Email of the account seeded at startup | Optional |
//! | `SEED_USER_PASSWORD` | Password of the seeded account | Required with `SEED_USER_EMAIL` |
//! | `SEED_USER_ROLES` | Comma-separated roles for the seeded account | `AUTHOR` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable name for the RSA signing key.
///
/// The value is a PKCS#8 private key PEM. Deployment tooling that cannot
/// inject multi-line values may encode newlines as the literal two-character
/// sequence `\n`; the key loader normalizes both forms.
pub const PRIVATE_KEY_ENV: &str = "AUTH_PRIVATE_KEY";

/// Environment variable name for the RSA verification key.
///
/// The value is an SPKI public key PEM, accepted in the same forms as
/// [`PRIVATE_KEY_ENV`]. This key is also the one served from
/// `GET /v1/auth/public-key`.
pub const PUBLIC_KEY_ENV: &str = "AUTH_PUBLIC_KEY";

/// Environment variable name for the access token lifetime in hours.
///
/// Values that do not parse as a non-negative integer fall back to the
/// default. Zero is legal and issues tokens that are expired on arrival.
///
/// # Default
/// `24`
pub const TOKEN_TTL_ENV: &str = "JWT_EXPIRATION_HOURS";

/// Default access token lifetime in hours.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Environment variable name for the server bind address.
///
/// # Default
/// `0.0.0.0`
pub const HOST_ENV: &str = "HOST";

/// Default server bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Environment variable name for the server bind port.
///
/// # Default
/// `8080`
pub const PORT_ENV: &str = "PORT";

/// Default server bind port.
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable name for the seeded account's email.
///
/// When unset, the server starts with an empty user store and every login
/// attempt is rejected until accounts exist.
pub const SEED_EMAIL_ENV: &str = "SEED_USER_EMAIL";

/// Environment variable name for the seeded account's password.
///
/// The plaintext is bcrypt-hashed at startup and never stored.
pub const SEED_PASSWORD_ENV: &str = "SEED_USER_PASSWORD";

/// Environment variable name for the seeded account's roles.
///
/// Comma-separated bare role names, for example `AUTHOR,PUBLIC`.
///
/// # Default
/// `AUTHOR`
pub const SEED_ROLES_ENV: &str = "SEED_USER_ROLES";

/// Default roles granted to the seeded account.
pub const DEFAULT_SEED_ROLES: &str = "AUTHOR";

/// Environment variable name for the logging format (`json` or `pretty`).
///
/// # Default
/// `pretty`
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";
