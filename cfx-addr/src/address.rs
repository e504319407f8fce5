//  ADDRESS.rs
//    by Lut99
//
//  Created:
//    13 Oct 2026, 15:02:18
//  Last edited:
//    19 Oct 2026, 11:58:36
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the [`ParsedAddress`], which represents the result of
//!   classifying a user-entered server address: either a join code, an IP
//!   literal with port or a generic hostname.
//

use std::fmt::{Display, Formatter, Result as FResult};
use std::str::FromStr;

use enum_debug::EnumDebug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::JOIN_LINK_PREFIX;
use crate::ip::is_ip;
use crate::scan::is_alpha_numeric;


/***** ERRORS *****/
/// Errors that relate to parsing [`ParsedAddress`]es through [`FromStr`].
#[derive(Debug, Error)]
pub enum AddressParseError {
    /// The input was not recognized as any kind of server address.
    #[error("Failed to recognize {raw:?} as a join link, join code, IP address or hostname")]
    NoMatch { raw: String },
}

/// Errors that relate to deserializing [`ParsedAddress`]es that break its invariants.
#[derive(Debug, Error)]
pub enum AddressDeserializeError {
    /// A join code had something else than ASCII letters and digits in it.
    #[error("Join code {code:?} contains non-alphanumeric characters")]
    NonAlphanumericCode { code: String },
    /// The canonical URL of a join code was not the one belonging to it.
    #[error("Canonical URL {got:?} does not belong to join code {code:?} (expected {expected:?})")]
    CanonicalMismatch { code: String, got: String, expected: String },
    /// The IP of an IP address was not an IP literal.
    #[error("{ip:?} is not an IPv4 or IPv6 literal")]
    NotAnIp { ip: String },
    /// The port of an IP address was zero.
    #[error("Port 0 is not a valid server port")]
    ZeroPort,
    /// The display address of an IP address did not match its IP and port.
    #[error("Address {got:?} does not match IP {ip:?} with port {port} (expected {expected:?})")]
    IpAddressMismatch { ip: String, port: u16, got: String, expected: String },
}





/***** AUXILLARY *****/
/// A server referred to by its join code.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct JoinAddress {
    /// The join code itself. Only contains ASCII alphanumeric characters.
    pub address:   String,
    /// The full join URL for this code.
    pub canonical: String,
}

/// A server referred to by an IPv4 or IPv6 literal and a port.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct IpAddress {
    /// The IP literal, without brackets.
    pub ip:      String,
    /// The port of the server.
    pub port:    u16,
    /// The `ip:port` pair, with IPv6 addresses in brackets.
    pub address: String,
}

/// A server referred to by some hostname.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct HostAddress {
    /// The host, possibly including a port.
    pub address: String,
}



/// What a [`ParsedAddress`] looks like on the wire before we've checked it.
///
/// The derived fields (`canonical` and the IP's `address`) may be omitted, in which case they are
/// filled in. If they are given, they must match what we would have derived.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RawParsedAddress {
    Join { address: String, canonical: Option<String> },
    Ip { ip: String, port: u16, address: Option<String> },
    Host { address: String },
}
impl TryFrom<RawParsedAddress> for ParsedAddress {
    type Error = AddressDeserializeError;

    fn try_from(value: RawParsedAddress) -> Result<Self, Self::Error> {
        match value {
            RawParsedAddress::Join { address, canonical } => {
                if !is_alpha_numeric(&address) {
                    return Err(AddressDeserializeError::NonAlphanumericCode { code: address });
                }
                let join: Self = Self::new_join(address);
                if let Some(got) = canonical {
                    let JoinAddress { address, canonical: expected } = join.join();
                    if &got != expected {
                        return Err(AddressDeserializeError::CanonicalMismatch { code: address.clone(), got, expected: expected.clone() });
                    }
                }
                Ok(join)
            },

            RawParsedAddress::Ip { ip, port, address } => {
                if !is_ip(&ip) {
                    return Err(AddressDeserializeError::NotAnIp { ip });
                }
                if port == 0 {
                    return Err(AddressDeserializeError::ZeroPort);
                }
                let res: Self = Self::new_ip(ip, port);
                if let Some(got) = address {
                    let IpAddress { ip, port, address: expected } = res.ip();
                    if &got != expected {
                        return Err(AddressDeserializeError::IpAddressMismatch { ip: ip.clone(), port: *port, got, expected: expected.clone() });
                    }
                }
                Ok(res)
            },

            RawParsedAddress::Host { address } => Ok(Self::new_host(address)),
        }
    }
}





/***** LIBRARY *****/
/// Defines the possible ways a user can refer to a server.
///
/// Deserializing checks the same invariants the constructors uphold; see [`AddressDeserializeError`].
#[derive(Clone, Debug, Deserialize, EnumDebug, Eq, Hash, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase", try_from = "RawParsedAddress")]
pub enum ParsedAddress {
    /// It's a join code (or a join link with a code).
    Join(JoinAddress),
    /// It's an IP literal and a port.
    Ip(IpAddress),
    /// It's a hostname.
    Host(HostAddress),
}
// Constructors
impl ParsedAddress {
    /// Constructor for the ParsedAddress that initializes it for the given join code.
    ///
    /// # Arguments
    /// - `code`: The join code. It is assumed to be alphanumeric already.
    ///
    /// # Returns
    /// A new [`ParsedAddress::Join`] with its canonical URL filled in.
    #[inline]
    pub fn new_join(code: impl Into<String>) -> Self {
        let address: String = code.into();
        let canonical: String = format!("{JOIN_LINK_PREFIX}{address}");
        Self::Join(JoinAddress { address, canonical })
    }

    /// Constructor for the ParsedAddress that initializes it for the given IP literal and port.
    ///
    /// # Arguments
    /// - `ip`: The IP literal (without brackets).
    /// - `port`: The port of the server.
    ///
    /// # Returns
    /// A new [`ParsedAddress::Ip`] with its display address filled in.
    #[inline]
    pub fn new_ip(ip: impl Into<String>, port: u16) -> Self {
        let ip: String = ip.into();
        // IPv6 is the only kind of literal with colons in it
        let address: String = if ip.contains(':') { format!("[{ip}]:{port}") } else { format!("{ip}:{port}") };
        Self::Ip(IpAddress { ip, port, address })
    }

    /// Constructor for the ParsedAddress that initializes it for the given hostname.
    ///
    /// # Arguments
    /// - `address`: The hostname (and optional port).
    ///
    /// # Returns
    /// A new [`ParsedAddress::Host`].
    #[inline]
    pub fn new_host(address: impl Into<String>) -> Self { Self::Host(HostAddress { address: address.into() }) }
}
// Accessors
impl ParsedAddress {
    /// Returns the address that should be shown to the user.
    ///
    /// This is the join code, the `ip:port` pair or the hostname, depending on the variant.
    #[inline]
    pub fn address(&self) -> &str {
        match self {
            Self::Join(join) => &join.address,
            Self::Ip(ip) => &ip.address,
            Self::Host(host) => &host.address,
        }
    }

    /// Checks whether this ParsedAddress is a [join code](ParsedAddress::Join).
    ///
    /// # Returns
    /// True if it is, or false if it isn't.
    #[inline]
    pub const fn is_join(&self) -> bool { matches!(self, Self::Join(_)) }

    /// Checks whether this ParsedAddress is an [IP literal](ParsedAddress::Ip).
    ///
    /// # Returns
    /// True if it is, or false if it isn't.
    #[inline]
    pub const fn is_ip(&self) -> bool { matches!(self, Self::Ip(_)) }

    /// Checks whether this ParsedAddress is a [hostname](ParsedAddress::Host).
    ///
    /// # Returns
    /// True if it is, or false if it isn't.
    #[inline]
    pub const fn is_host(&self) -> bool { matches!(self, Self::Host(_)) }

    /// Assumes self is a [join code](ParsedAddress::Join) and provides read-only access to it.
    ///
    /// # Panics
    /// This function panics if self is actually NOT a [join code](ParsedAddress::Join).
    #[inline]
    #[track_caller]
    pub fn join(&self) -> &JoinAddress {
        if let Self::Join(join) = self { join } else { panic!("Cannot unwrap {:?} as a ParsedAddress::Join", self.variant()) }
    }

    /// Assumes self is an [IP literal](ParsedAddress::Ip) and provides read-only access to it.
    ///
    /// # Panics
    /// This function panics if self is actually NOT an [IP literal](ParsedAddress::Ip).
    #[inline]
    #[track_caller]
    pub fn ip(&self) -> &IpAddress { if let Self::Ip(ip) = self { ip } else { panic!("Cannot unwrap {:?} as a ParsedAddress::Ip", self.variant()) } }

    /// Assumes self is a [hostname](ParsedAddress::Host) and provides read-only access to it.
    ///
    /// # Panics
    /// This function panics if self is actually NOT a [hostname](ParsedAddress::Host).
    #[inline]
    #[track_caller]
    pub fn host(&self) -> &HostAddress {
        if let Self::Host(host) = self { host } else { panic!("Cannot unwrap {:?} as a ParsedAddress::Host", self.variant()) }
    }

    /// Returns the inner [`JoinAddress`] if this is a [join code](ParsedAddress::Join).
    #[inline]
    pub fn into_join(self) -> Option<JoinAddress> { if let Self::Join(join) = self { Some(join) } else { None } }

    /// Returns the inner [`IpAddress`] if this is an [IP literal](ParsedAddress::Ip).
    #[inline]
    pub fn into_ip(self) -> Option<IpAddress> { if let Self::Ip(ip) = self { Some(ip) } else { None } }

    /// Returns the inner [`HostAddress`] if this is a [hostname](ParsedAddress::Host).
    #[inline]
    pub fn into_host(self) -> Option<HostAddress> { if let Self::Host(host) = self { Some(host) } else { None } }
}
// Formatting
impl Display for ParsedAddress {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult { self.address().fmt(f) }
}
// Parsing
impl FromStr for ParsedAddress {
    type Err = AddressParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> { crate::parser::parse(s).ok_or_else(|| AddressParseError::NoMatch { raw: s.into() }) }
}
// Conversion
impl From<JoinAddress> for ParsedAddress {
    #[inline]
    fn from(value: JoinAddress) -> Self { Self::Join(value) }
}
impl From<IpAddress> for ParsedAddress {
    #[inline]
    fn from(value: IpAddress) -> Self { Self::Ip(value) }
}
impl From<HostAddress> for ParsedAddress {
    #[inline]
    fn from(value: HostAddress) -> Self { Self::Host(value) }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use serde_test::{Token, assert_ser_tokens};

    use super::*;

    #[test]
    fn test_address_constructors() {
        let join = ParsedAddress::new_join("abc123");
        assert_eq!(join.join().canonical, "https://cfx.re/join/abc123");
        assert_eq!(join.address(), "abc123");

        let ip = ParsedAddress::new_ip("::1", 30120);
        assert_eq!(ip.address(), "[::1]:30120");
        assert_eq!(ip.ip().port, 30120);

        let ip = ParsedAddress::new_ip("10.0.0.1", 1234);
        assert_eq!(ip.to_string(), "10.0.0.1:1234");

        let host = ParsedAddress::new_host("example.com");
        assert_eq!(host.host().address, "example.com");
    }

    #[test]
    fn test_address_accessors() {
        let join = ParsedAddress::new_join("abc");
        assert!(join.is_join());
        assert!(!join.is_ip());
        assert!(!join.is_host());
        assert_eq!(join.clone().into_join().map(|j| j.address), Some("abc".into()));
        assert_eq!(join.into_host(), None);
    }

    #[test]
    #[should_panic]
    fn test_address_wrong_unwrap() { ParsedAddress::new_host("example.com").ip(); }

    #[test]
    fn test_address_serde() {
        assert_ser_tokens(&ParsedAddress::new_ip("127.0.0.1", 30120), &[
            Token::Struct { name: "IpAddress", len: 4 },
            Token::Str("type"),
            Token::Str("ip"),
            Token::Str("ip"),
            Token::Str("127.0.0.1"),
            Token::Str("port"),
            Token::U16(30120),
            Token::Str("address"),
            Token::Str("127.0.0.1:30120"),
            Token::StructEnd,
        ]);

        let json: String = serde_json::to_string(&ParsedAddress::new_join("abc")).unwrap();
        assert_eq!(json, r#"{"type":"join","address":"abc","canonical":"https://cfx.re/join/abc"}"#);
        let back: ParsedAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ParsedAddress::new_join("abc"));

        let ip: ParsedAddress = serde_json::from_str(r#"{"type":"ip","ip":"::1","port":30120,"address":"[::1]:30120"}"#).unwrap();
        assert_eq!(ip, ParsedAddress::new_ip("::1", 30120));
        let host: ParsedAddress = serde_json::from_str(r#"{"type":"host","address":"play.myserver.ovh:30120"}"#).unwrap();
        assert_eq!(host, ParsedAddress::new_host("play.myserver.ovh:30120"));
    }

    #[test]
    fn test_address_deserialize_fills_derived() {
        let join: ParsedAddress = serde_json::from_str(r#"{"type":"join","address":"abc"}"#).unwrap();
        assert_eq!(join.join().canonical, "https://cfx.re/join/abc");
        let ip: ParsedAddress = serde_json::from_str(r#"{"type":"ip","ip":"10.0.0.1","port":1234}"#).unwrap();
        assert_eq!(ip.address(), "10.0.0.1:1234");
    }

    #[test]
    fn test_address_deserialize_invalid() {
        // Join codes must be alphanumeric, and their canonical URL must be theirs
        assert!(serde_json::from_str::<ParsedAddress>(r#"{"type":"join","address":"a-b","canonical":"https://cfx.re/join/a-b"}"#).is_err());
        assert!(serde_json::from_str::<ParsedAddress>(r#"{"type":"join","address":"abc","canonical":"x"}"#).is_err());

        // IPs must be literals with a non-zero port, and the display address must agree with them
        assert!(serde_json::from_str::<ParsedAddress>(r#"{"type":"ip","ip":"example.com","port":30120}"#).is_err());
        assert!(serde_json::from_str::<ParsedAddress>(r#"{"type":"ip","ip":"127.0.0.1","port":0}"#).is_err());
        assert!(serde_json::from_str::<ParsedAddress>(r#"{"type":"ip","ip":"127.0.0.1","port":65536}"#).is_err());
        assert!(serde_json::from_str::<ParsedAddress>(r#"{"type":"ip","ip":"127.0.0.1","port":30120,"address":"10.0.0.1:1"}"#).is_err());
        assert!(serde_json::from_str::<ParsedAddress>(r#"{"type":"ip","ip":"::1","port":30120,"address":"::1:30120"}"#).is_err());

        assert!(serde_json::from_str::<ParsedAddress>(r#"{"type":"port","address":"30120"}"#).is_err());
    }

    #[test]
    fn test_address_try_from_raw() {
        let err = ParsedAddress::try_from(RawParsedAddress::Join { address: "a b".into(), canonical: None }).unwrap_err();
        assert!(matches!(err, AddressDeserializeError::NonAlphanumericCode { code } if code == "a b"));
        let err = ParsedAddress::try_from(RawParsedAddress::Ip { ip: "1.2.3.4".into(), port: 80, address: Some("1.2.3.4:81".into()) }).unwrap_err();
        assert!(matches!(err, AddressDeserializeError::IpAddressMismatch { expected, .. } if expected == "1.2.3.4:80"));
    }

    #[test]
    fn test_address_from_str() {
        assert_eq!("myserver.example.com".parse::<ParsedAddress>().unwrap(), ParsedAddress::new_host("myserver.example.com"));
        assert!(matches!("   ".parse::<ParsedAddress>(), Err(AddressParseError::NoMatch { .. })));
    }
}
