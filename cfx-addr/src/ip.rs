//  IP.rs
//    by Lut99
//
//  Created:
//    14 Oct 2026, 10:12:40
//  Last edited:
//    17 Oct 2026, 16:03:11
//  Auto updated?
//    Yes
//
//  Description:
//!   Recognizes IPv4 and IPv6 literals, optionally followed by a port.
//!
//!   Note that recognition is purely structural. Whether an address is
//!   reserved, multicast or even routable is not our concern; we only care
//!   whether the user typed something that looks like an IP.
//

use std::fmt::{Display, Formatter, Result as FResult};
use std::sync::LazyLock;

use enum_debug::EnumDebug;
use regex::Regex;
use tracing::trace;


/***** CONSTANTS *****/
/// A single IPv4 segment (0-255, no leading zeroes).
const V4_SEG: &str = "(?:[0-9]|[1-9][0-9]|1[0-9][0-9]|2[0-4][0-9]|25[0-5])";
/// A single IPv6 segment (1-4 hex digits).
const V6_SEG: &str = "(?:[0-9a-fA-F]{1,4})";

/// Matches a full dotted-quad IPv4 address.
static IPV4_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let v4 = format!("(?:{V4_SEG}[.]){{3}}{V4_SEG}");
    Regex::new(&format!("^{v4}$")).expect("Static IPv4 regex failed to compile")
});

/// Matches a full IPv6 address, including `::` compression, an embedded IPv4 tail and a trailing
/// `%zone` suffix.
static IPV6_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let v4 = format!("(?:{V4_SEG}[.]){{3}}{V4_SEG}");
    let s = V6_SEG;
    let pattern = format!(
        "^(?:(?:{s}:){{7}}(?:{s}|:)|(?:{s}:){{6}}(?:{v4}|:{s}|:)|(?:{s}:){{5}}(?::{v4}|(?::{s}){{1,2}}|:)|(?:{s}:){{4}}(?:(?::{s}){{0,1}}:{v4}|(?::{s}){{1,3}}|:)|(?:{s}:){{3}}(?:(?::{s}){{0,2}}:{v4}|(?::{s}){{1,4}}|:)|(?:{s}:){{2}}(?:(?::{s}){{0,3}}:{v4}|(?::{s}){{1,5}}|:)|(?:{s}:){{1}}(?:(?::{s}){{0,4}}:{v4}|(?::{s}){{1,6}}|:)|(?::(?:(?::{s}){{0,5}}:{v4}|(?::{s}){{1,7}}|:)))(?:%[0-9a-zA-Z.:\\-]+)?$"
    );
    Regex::new(&pattern).expect("Static IPv6 regex failed to compile")
});





/***** LIBRARY *****/
/// The families of IP literals that we recognize.
#[derive(Clone, Copy, Debug, EnumDebug, Eq, Hash, PartialEq)]
pub enum IpKind {
    /// A dotted-quad IPv4 address.
    V4,
    /// A colon-separated IPv6 address.
    V6,
}
impl Display for IpKind {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}



/// An IP literal with the port that was resolved for it.
///
/// The port is a _candidate_: it has not been checked against the valid port range yet, which is
/// why it's wider than a [`u16`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct IpParts {
    /// The IP literal, as given (i.e., not normalized).
    pub ip:   String,
    /// The candidate port.
    pub port: u64,
}



/// Classifies the given string as an IPv4 literal, an IPv6 literal or neither.
///
/// The entire string has to match; surrounding whitespace or brackets make it "neither".
///
/// # Arguments
/// - `s`: The string to classify.
///
/// # Returns
/// The [`IpKind`] of the literal, or [`None`] if it isn't one.
pub fn classify_ip(s: &str) -> Option<IpKind> {
    if IPV4_REGEX.is_match(s) {
        Some(IpKind::V4)
    } else if IPV6_REGEX.is_match(s) {
        Some(IpKind::V6)
    } else {
        None
    }
}

/// Convenience wrapper around [`classify_ip()`] that only reports whether `s` is an IP literal.
#[inline]
pub fn is_ip(s: &str) -> bool { classify_ip(s).is_some() }



/// Splits a `ip:port` or `[ipv6]:port` string in its two halves.
///
/// If the string contains `]:`, it is assumed to be a bracketed IPv6 address and split there (and
/// the opening bracket is removed). Otherwise, it is split on the last colon.
///
/// # Arguments
/// - `s`: The string to split.
///
/// # Returns
/// A tuple of the host and port halves, or [`None`] if there was nothing to split on or either half
/// ended up empty.
pub fn split_host_port(s: &str) -> Option<(String, &str)> {
    let (host, port): (String, &str) = if let Some((host, port)) = s.split_once("]:") {
        (host.replacen('[', "", 1), port)
    } else if let Some((host, port)) = s.rsplit_once(':') {
        (host.into(), port)
    } else {
        return None;
    };
    if host.is_empty() || port.is_empty() {
        return None;
    }
    Some((host, port))
}

/// Parses a port number the lenient way.
///
/// Leading whitespace and a single `+` are skipped, after which as many decimal digits as possible
/// are read. Anything after the digits is ignored. If there are no digits, or they amount to zero,
/// the given default is returned instead. Very large numbers saturate.
///
/// # Arguments
/// - `s`: The port text.
/// - `default_port`: The port to fall back to.
///
/// # Returns
/// The parsed candidate port.
pub fn parse_port_lenient(s: &str, default_port: u16) -> u64 {
    let s: &str = s.trim_start();
    let s: &str = s.strip_prefix('+').unwrap_or(s);
    let port: u64 = s.bytes().take_while(u8::is_ascii_digit).fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(u64::from(d - b'0')));
    if port == 0 { u64::from(default_port) } else { port }
}

/// Attempts to parse the given string as an IP literal with an optional port.
///
/// # Arguments
/// - `s`: The (already trimmed) string to parse.
/// - `default_port`: The port to assume if none is given, or if the given one isn't a number.
///
/// # Returns
/// The [`IpParts`] found, or [`None`] if `s` isn't an IP literal with or without port.
pub fn try_parse_ip(s: &str, default_port: u16) -> Option<IpParts> {
    // The simple case first
    if is_ip(s) {
        return Some(IpParts { ip: s.into(), port: u64::from(default_port) });
    }

    // Else, attempt to split off a port
    let (ip, port): (String, &str) = split_host_port(s)?;
    if !is_ip(&ip) {
        trace!("Host part {ip:?} of {s:?} is not an IP literal");
        return None;
    }
    let port: u64 = parse_port_lenient(port, default_port);
    Some(IpParts { ip, port })
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ipv4() {
        assert_eq!(classify_ip("127.0.0.1"), Some(IpKind::V4));
        assert_eq!(classify_ip("0.0.0.0"), Some(IpKind::V4));
        assert_eq!(classify_ip("255.255.255.255"), Some(IpKind::V4));
        assert_eq!(classify_ip("256.0.0.1"), None);
        assert_eq!(classify_ip("01.2.3.4"), None);
        assert_eq!(classify_ip("1.2.3"), None);
        assert_eq!(classify_ip("1.2.3.4.5"), None);
        assert_eq!(classify_ip(" 1.2.3.4"), None);
    }

    #[test]
    fn test_classify_ipv6() {
        assert_eq!(classify_ip("::1"), Some(IpKind::V6));
        assert_eq!(classify_ip("::"), Some(IpKind::V6));
        assert_eq!(classify_ip("fe80::1"), Some(IpKind::V6));
        assert_eq!(classify_ip("2001:db8:0:0:0:0:2:1"), Some(IpKind::V6));
        assert_eq!(classify_ip("2001:DB8::2:1"), Some(IpKind::V6));
        assert_eq!(classify_ip("::ffff:192.168.0.1"), Some(IpKind::V6));
        assert_eq!(classify_ip("fe80::1%eth0"), Some(IpKind::V6));
        assert_eq!(classify_ip("1:2:3:4:5:6:7::"), Some(IpKind::V6));
        assert_eq!(classify_ip("1:2:3:4:5:6:7:8:9"), None);
        assert_eq!(classify_ip("[::1]"), None);
        assert_eq!(classify_ip("fe80:::1"), None);
        assert_eq!(classify_ip("12345::1"), None);
        assert_eq!(classify_ip("abc"), None);
    }

    #[test]
    fn test_split_host_port() {
        assert_eq!(split_host_port("1.2.3.4:80"), Some(("1.2.3.4".into(), "80")));
        assert_eq!(split_host_port("[::1]:30120"), Some(("::1".into(), "30120")));
        assert_eq!(split_host_port("a:b:c"), Some(("a:b".into(), "c")));
        assert_eq!(split_host_port("1.2.3.4:"), None);
        assert_eq!(split_host_port(":80"), None);
        assert_eq!(split_host_port("nocolon"), None);
    }

    #[test]
    fn test_parse_port_lenient() {
        assert_eq!(parse_port_lenient("30120", 1), 30120);
        assert_eq!(parse_port_lenient("  42abc", 1), 42);
        assert_eq!(parse_port_lenient("+8080", 1), 8080);
        assert_eq!(parse_port_lenient("abc", 30120), 30120);
        assert_eq!(parse_port_lenient("0", 30120), 30120);
        assert_eq!(parse_port_lenient("-5", 30120), 30120);
        assert_eq!(parse_port_lenient("99999", 30120), 99999);
        assert_eq!(parse_port_lenient("99999999999999999999999999", 30120), u64::MAX);
    }

    #[test]
    fn test_try_parse_ip() {
        assert_eq!(try_parse_ip("127.0.0.1", 30120), Some(IpParts { ip: "127.0.0.1".into(), port: 30120 }));
        assert_eq!(try_parse_ip("127.0.0.1:1234", 30120), Some(IpParts { ip: "127.0.0.1".into(), port: 1234 }));
        assert_eq!(try_parse_ip("[::1]:1234", 30120), Some(IpParts { ip: "::1".into(), port: 1234 }));
        assert_eq!(try_parse_ip("::1", 30120), Some(IpParts { ip: "::1".into(), port: 30120 }));
        assert_eq!(try_parse_ip("127.0.0.1:nope", 30120), Some(IpParts { ip: "127.0.0.1".into(), port: 30120 }));
        assert_eq!(try_parse_ip("127.0.0.1:99999", 30120), Some(IpParts { ip: "127.0.0.1".into(), port: 99999 }));
        assert_eq!(try_parse_ip("host:99999", 30120), None);
        assert_eq!(try_parse_ip("example.com", 30120), None);
    }
}
