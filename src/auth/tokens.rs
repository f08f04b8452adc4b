// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Access token issuance and claim extraction.
//!
//! Tokens are compact JWS documents signed with RS256. Issuance writes the
//! full claim set (`sub`, `roles`, `iat`, `exp`); extraction verifies the
//! signature but not the expiry, so expired tokens still give up their
//! claims. Expiry is the validator's job and is checked with zero leeway
//! there.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use serde::Deserialize;
use serde_json::Value;

use super::claims::TokenClaims;
use super::error::AuthError;
use super::keys::KeyMaterial;

/// Signing algorithm for every token this service issues.
pub const ALGORITHM: Algorithm = Algorithm::RS256;

/// Algorithm name served alongside the public key.
pub const ALGORITHM_NAME: &str = "RS256";

/// Lenient view of the claims used on the decode side.
///
/// `roles` stays a raw JSON value so an absent or malformed claim degrades
/// to an empty role set instead of failing the decode. `exp` defaults to
/// zero so structurally exotic but well-signed tokens still extract; the
/// validator then fails them on expiry.
#[derive(Debug, Deserialize)]
pub(crate) struct RawClaims {
    pub sub: String,
    #[serde(default)]
    pub roles: Value,
    #[serde(default)]
    pub exp: i64,
}

/// Signature-verified decode shared by claim extraction and the validator.
pub(crate) fn decode_verified(
    keys: &KeyMaterial,
    token: &str,
) -> Result<RawClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(ALGORITHM);
    // Expiry is checked separately with zero leeway; the library default
    // would both reject expired tokens here and grant 60s of grace.
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.set_required_spec_claims::<&str>(&[]);

    decode::<RawClaims>(token, keys.decoding(), &validation).map(|data| data.claims)
}

/// Issues access tokens and extracts verified claims from them.
#[derive(Clone)]
pub struct TokenCodec {
    keys: Arc<KeyMaterial>,
    ttl_hours: i64,
}

impl TokenCodec {
    /// A `ttl_hours` of zero issues tokens that are already expired.
    pub fn new(keys: Arc<KeyMaterial>, ttl_hours: i64) -> Self {
        Self { keys, ttl_hours }
    }

    /// Issue a signed token for `email` carrying the given role names.
    ///
    /// A lifetime that is negative or too large to represent fails issuance.
    pub fn issue(&self, email: &str, roles: &HashSet<String>) -> Result<String, AuthError> {
        let now = Utc::now();
        let expires_at = TimeDelta::try_hours(self.ttl_hours)
            .filter(|ttl| *ttl >= TimeDelta::zero())
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                AuthError::Internal(format!(
                    "token lifetime of {} hours is out of range",
                    self.ttl_hours
                ))
            })?;
        let claims = TokenClaims {
            sub: email.to_string(),
            roles: roles.iter().cloned().collect(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(ALGORITHM), &claims, self.keys.encoding())
            .map_err(AuthError::TokenGeneration)
    }

    /// Extract the subject email from a verified token.
    ///
    /// Fails only on signature or structure problems; an expired token
    /// still yields its subject.
    pub fn extract_email(&self, token: &str) -> Result<String, AuthError> {
        decode_verified(&self.keys, token)
            .map(|claims| claims.sub)
            .map_err(AuthError::TokenVerification)
    }

    /// Extract the role set from a verified token.
    ///
    /// An absent or non-array `roles` claim yields the empty set; non-string
    /// array elements are skipped. Neither case is an error.
    pub fn extract_roles(&self, token: &str) -> Result<HashSet<String>, AuthError> {
        let claims = decode_verified(&self.keys, token).map_err(AuthError::TokenVerification)?;

        let roles = match claims.roles {
            Value::Array(items) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => HashSet::new(),
        };
        Ok(roles)
    }

    /// Canonical PEM of the verification key, as served to external
    /// verifiers.
    pub fn public_key_pem(&self) -> String {
        self.keys.public_key_pem()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::keys::test_keys;

    fn role_set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn decode_full(token: &str, keys: &KeyMaterial) -> TokenClaims {
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.validate_aud = false;
        decode::<TokenClaims>(token, keys.decoding(), &validation)
            .unwrap()
            .claims
    }

    #[test]
    fn issued_token_has_three_segments() {
        let codec = TokenCodec::new(Arc::new(test_keys::keys()), 24);
        let token = codec
            .issue("author@example.com", &role_set(&["AUTHOR"]))
            .unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn email_and_roles_round_trip() {
        let codec = TokenCodec::new(Arc::new(test_keys::keys()), 24);
        let roles = role_set(&["AUTHOR", "PUBLIC"]);
        let token = codec.issue("author@example.com", &roles).unwrap();

        assert_eq!(codec.extract_email(&token).unwrap(), "author@example.com");
        assert_eq!(codec.extract_roles(&token).unwrap(), roles);
    }

    #[test]
    fn empty_role_set_round_trips() {
        let codec = TokenCodec::new(Arc::new(test_keys::keys()), 24);
        let token = codec.issue("viewer@example.com", &HashSet::new()).unwrap();
        assert!(codec.extract_roles(&token).unwrap().is_empty());
    }

    #[test]
    fn expiry_is_issuance_plus_ttl() {
        let keys = Arc::new(test_keys::keys());
        let codec = TokenCodec::new(keys.clone(), 24);
        let token = codec.issue("author@example.com", &HashSet::new()).unwrap();

        let claims = decode_full(&token, &keys);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn zero_ttl_expires_at_issuance() {
        let keys = Arc::new(test_keys::keys());
        let codec = TokenCodec::new(keys.clone(), 0);
        let token = codec.issue("author@example.com", &HashSet::new()).unwrap();

        let claims = decode_full(&token, &keys);
        assert_eq!(claims.exp, claims.iat);
    }

    #[test]
    fn out_of_range_ttl_fails_issuance() {
        let keys = Arc::new(test_keys::keys());
        for ttl_hours in [-1, i64::MAX] {
            let codec = TokenCodec::new(keys.clone(), ttl_hours);
            let err = codec
                .issue("author@example.com", &HashSet::new())
                .unwrap_err();
            assert!(
                matches!(err, AuthError::Internal(_)),
                "expected issuance failure for ttl {ttl_hours}"
            );
        }
    }

    #[test]
    fn expired_token_still_yields_claims() {
        let codec = TokenCodec::new(Arc::new(test_keys::keys()), 0);
        let token = codec
            .issue("author@example.com", &role_set(&["AUTHOR"]))
            .unwrap();

        assert_eq!(codec.extract_email(&token).unwrap(), "author@example.com");
        assert_eq!(codec.extract_roles(&token).unwrap(), role_set(&["AUTHOR"]));
    }

    #[test]
    fn cross_key_extraction_fails() {
        let codec = TokenCodec::new(Arc::new(test_keys::keys()), 24);
        let other = TokenCodec::new(Arc::new(test_keys::other_keys()), 24);
        let token = codec.issue("author@example.com", &HashSet::new()).unwrap();

        let err = other.extract_email(&token).unwrap_err();
        assert!(matches!(err, AuthError::TokenVerification(_)));
    }

    #[test]
    fn garbage_tokens_fail_extraction() {
        let codec = TokenCodec::new(Arc::new(test_keys::keys()), 24);
        for garbage in ["invalid.token.format", "", "a.b", "...."] {
            assert!(
                matches!(
                    codec.extract_email(garbage),
                    Err(AuthError::TokenVerification(_))
                ),
                "expected verification failure for {garbage:?}"
            );
        }
    }

    #[test]
    fn missing_roles_claim_yields_empty_set() {
        #[derive(serde::Serialize)]
        struct Bare {
            sub: String,
            iat: i64,
            exp: i64,
        }

        let keys = Arc::new(test_keys::keys());
        let now = Utc::now().timestamp();
        let token = encode(
            &Header::new(ALGORITHM),
            &Bare {
                sub: "author@example.com".to_string(),
                iat: now,
                exp: now + 3600,
            },
            keys.encoding(),
        )
        .unwrap();

        let codec = TokenCodec::new(keys, 24);
        assert_eq!(codec.extract_email(&token).unwrap(), "author@example.com");
        assert!(codec.extract_roles(&token).unwrap().is_empty());
    }

    #[test]
    fn malformed_roles_claim_yields_string_subset() {
        #[derive(serde::Serialize)]
        struct Odd {
            sub: String,
            roles: Value,
            iat: i64,
            exp: i64,
        }

        let keys = Arc::new(test_keys::keys());
        let now = Utc::now().timestamp();
        let issue = |roles: Value| {
            encode(
                &Header::new(ALGORITHM),
                &Odd {
                    sub: "author@example.com".to_string(),
                    roles,
                    iat: now,
                    exp: now + 3600,
                },
                keys.encoding(),
            )
            .unwrap()
        };
        let codec = TokenCodec::new(keys.clone(), 24);

        // Non-array claim degrades to the empty set.
        let token = issue(Value::String("AUTHOR".to_string()));
        assert!(codec.extract_roles(&token).unwrap().is_empty());

        // Mixed array keeps only the string elements.
        let token = issue(serde_json::json!([1, "AUTHOR", true]));
        assert_eq!(
            codec.extract_roles(&token).unwrap(),
            role_set(&["AUTHOR"])
        );
    }
}
