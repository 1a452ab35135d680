//! Strict URL validation: optional scheme, public-host enforcement.
//!
//! The `regex` crate has no lookaround, so the historical single-regex form
//! of this validator (negative lookaheads over private IP prefixes) is split
//! in two: a lookaround-free shape pattern, then an explicit `Ipv4Addr`
//! range check when the host is an IP literal. The observable contract is
//! the same.

use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

// Optional http/https/ftp scheme, host (IPv4 literal or lowercase dotted
// domain with an alphabetic TLD of 2+ chars), optional 2-5 digit port,
// optional path. Hosts are matched case-sensitively in lowercase, as the
// historical pattern did.
const SHAPE: &str = r"(?x)
    ^
    (?:(?:https?|ftp)://)?
    (?P<host>
        [0-9]{1,3}(?:\.[0-9]{1,3}){3}
      |
        (?:
            [a-z0-9\x{00a1}-\x{ffff}]
            (?:[a-z0-9\x{00a1}-\x{ffff}-]*[a-z0-9\x{00a1}-\x{ffff}])?
            \.
        )+
        [a-z\x{00a1}-\x{ffff}]{2,}
    )
    (?::[0-9]{2,5})?
    (?:/\S*)?
    $";

fn shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SHAPE).expect("strict url pattern is valid"))
}

pub(super) fn is_valid(input: &str) -> bool {
    let Some(caps) = shape().captures(input) else {
        return false;
    };
    let host = &caps["host"];

    if host.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return is_public_ipv4(host);
    }
    true
}

/// Accept only globally routable unicast IPv4 literals: first octet 1-223,
/// last octet 1-254, and none of 10/8, 127/8, 169.254/16, 172.16/12,
/// 192.168/16.
fn is_public_ipv4(host: &str) -> bool {
    let Ok(addr) = host.parse::<Ipv4Addr>() else {
        return false;
    };
    let octets = addr.octets();
    if octets[0] == 0 || octets[0] > 223 {
        return false;
    }
    if octets[3] == 0 || octets[3] == 255 {
        return false;
    }
    !(addr.is_private() || addr.is_loopback() || addr.is_link_local())
}
