//! URL validation.
//!
//! Two historical validation strategies exist for this helper and they are
//! not equivalent, so both are exposed behind [`UrlStrategy`]:
//!
//! - [`UrlStrategy::Strict`] (default): scheme optional (`http`, `https`,
//!   `ftp`), host must be a dotted domain with an alphabetic TLD or a public
//!   IPv4 literal. Private, loopback, and link-local IPv4 addresses are
//!   rejected.
//! - [`UrlStrategy::Loose`]: explicit `http`/`https` scheme required,
//!   optional `www.`, domain with a 1-6 character TLD, optional path/query.
//!   IP literals are not special-cased, so private-looking hosts pass.

mod loose;
mod strict;

use serde::{Deserialize, Serialize};

/// Which validation pattern to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlStrategy {
    #[default]
    Strict,
    Loose,
}

/// Validate `input` with the default (strict) strategy.
/// Empty input is invalid, never an error.
pub fn is_url_valid(input: &str) -> bool {
    is_url_valid_with(input, UrlStrategy::Strict)
}

/// Validate `input` with an explicit strategy.
pub fn is_url_valid_with(input: &str, strategy: UrlStrategy) -> bool {
    if input.is_empty() {
        return false;
    }
    match strategy {
        UrlStrategy::Strict => strict::is_valid(input),
        UrlStrategy::Loose => loose::is_valid(input),
    }
}
