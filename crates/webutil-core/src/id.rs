//! Random identifier generation from 4-character lowercase hex groups.
//!
//! Not cryptographically secure: ids come from the thread-local
//! general-purpose PRNG and must not be used for security-sensitive
//! identifiers (session tokens, API keys, ...).

use rand::Rng;

/// Shape of a generated identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdSpec {
    /// Number of hex groups (default 5). Zero clamps to one group.
    pub groups: usize,
    /// Join groups with `-` (default) or concatenate them directly.
    pub separated: bool,
}

impl Default for IdSpec {
    fn default() -> Self {
        Self {
            groups: 5,
            separated: true,
        }
    }
}

/// Generate an identifier with the thread-local RNG.
pub fn generate(spec: &IdSpec) -> String {
    generate_with(&mut rand::thread_rng(), spec)
}

/// Generate an identifier with a caller-provided RNG (seed it in tests for
/// deterministic output).
///
/// Each group is a uniform draw in `[0x10000, 0x20000)` rendered as lowercase
/// hex with the leading digit dropped. The range forces a 5-digit hex string
/// whose first digit is always `1`, so every group is exactly 4 characters.
pub fn generate_with<R: Rng>(rng: &mut R, spec: &IdSpec) -> String {
    let groups = spec.groups.max(1);
    let mut out = String::with_capacity(groups * 5);

    for i in 0..groups {
        if i > 0 && spec.separated {
            out.push('-');
        }
        let n: u32 = rng.gen_range(0x10000..0x20000);
        let hex = format!("{n:x}");
        out.push_str(&hex[1..]);
    }

    out
}
