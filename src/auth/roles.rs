// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Role name normalization.
//!
//! Roles are stored and embedded in tokens as bare names (`AUTHOR`); the
//! authorities handed to downstream authorization carry the `ROLE_` prefix
//! (`ROLE_AUTHOR`). `to_authority` is the single place the prefix is applied
//! and is idempotent, so already-prefixed names pass through unchanged and
//! `ROLE_ROLE_*` can never be produced.

/// Prefix marking a role name as an authority.
pub const ROLE_PREFIX: &str = "ROLE_";

/// Authority granted to survey authors.
pub const ROLE_AUTHOR: &str = "ROLE_AUTHOR";

/// Authority granted to public (non-author) accounts.
pub const ROLE_PUBLIC: &str = "ROLE_PUBLIC";

/// Normalize a role name into an authority by prefixing `ROLE_` iff missing.
pub fn to_authority(role: &str) -> String {
    if role.starts_with(ROLE_PREFIX) {
        role.to_string()
    } else {
        format!("{ROLE_PREFIX}{role}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_names_get_prefixed() {
        assert_eq!(to_authority("AUTHOR"), ROLE_AUTHOR);
        assert_eq!(to_authority("PUBLIC"), ROLE_PUBLIC);
    }

    #[test]
    fn prefixing_is_idempotent() {
        assert_eq!(to_authority("ROLE_AUTHOR"), ROLE_AUTHOR);
        assert_eq!(to_authority(&to_authority("AUTHOR")), ROLE_AUTHOR);
    }

    #[test]
    fn unknown_names_are_prefixed_verbatim() {
        assert_eq!(to_authority("reviewer"), "ROLE_reviewer");
    }
}
