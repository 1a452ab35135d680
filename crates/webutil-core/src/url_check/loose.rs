//! Loose URL validation: scheme required, no IP special-casing.

use regex::Regex;
use std::sync::OnceLock;

// Explicit http/https scheme, optional www., domain with a 1-6 character
// TLD, optional path/query tail.
const SHAPE: &str = r"(?x)
    ^
    https?://
    (?:www\.)?
    [-a-zA-Z0-9@:%._+~\#=]{1,256}
    \.
    [a-zA-Z0-9()]{1,6}
    \b
    [-a-zA-Z0-9()@:%_+.~\#?&/=]*
    $";

fn shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SHAPE).expect("loose url pattern is valid"))
}

pub(super) fn is_valid(input: &str) -> bool {
    shape().is_match(input)
}
