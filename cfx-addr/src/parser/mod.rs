//  MOD.rs
//    by Lut99
//
//  Created:
//    13 Oct 2026, 16:31:52
//  Last edited:
//    18 Oct 2026, 15:40:27
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the server address parser, which takes whatever the user
//!   typed or pasted and figures out how it refers to a server.
//!
//!   The following rules are tried in order, and the first one that
//!   produces a candidate decides the outcome:
//!   1. Anything with a join link in it (`cfx.re/join/<code>`);
//!   2. IP literals, with or without port;
//!   3. Bare join codes (purely alphanumeric input); and
//!   4. Anything that contains something that looks like a link, which is
//!      then reduced to its host.
//


use tracing::{debug, trace};
use url::Url;

use crate::address::ParsedAddress;
use crate::config::ParserConfig;
use crate::constants::{DUMMY_BASE_URL, JOIN_LINK_DISCRIMINATOR};
use crate::ip::{IpParts, try_parse_ip};
use crate::links::{LinkDetector, LinkDetectorConfig, LinkMatch};
use crate::scan::{is_alpha_numeric, scan_alpha_numeric_run};


/***** HELPER FUNCTIONS *****/
/// Emulates a lenient substring: out-of-bounds indices are clamped, and reversed bounds are swapped.
///
/// # Returns
/// The substring, or [`None`] if the (clamped) bounds don't fall on character boundaries.
fn clamped_substring(s: &str, start: usize, end: usize) -> Option<&str> {
    let (start, end): (usize, usize) = (start.min(s.len()), end.min(s.len()));
    let (start, end): (usize, usize) = if start > end { (end, start) } else { (start, end) };
    s.get(start..end)
}

/// Extracts the host part of a detected link.
///
/// The link is resolved against a placeholder base so that it also works without a scheme. The host
/// is then whatever sits between the scheme (or the placeholder) and the path.
///
/// # Arguments
/// - `link`: The [`LinkMatch`] to extract the host of.
///
/// # Returns
/// The host, or [`None`] if the link could not be parsed as a URL.
fn extract_host(link: &LinkMatch) -> Option<String> {
    let href = link.anchor_href();
    let url: Url = match Url::parse(DUMMY_BASE_URL).and_then(|base| base.join(&href)) {
        Ok(url) => url,
        Err(err) => {
            debug!("Failed to parse detected link {href:?} as a URL: {err}");
            return None;
        },
    };

    // Everything after the host
    let mut remainder: String = url.path().into();
    if let Some(query) = url.query().filter(|q| !q.is_empty()) {
        remainder.push('?');
        remainder.push_str(query);
    }
    if let Some(fragment) = url.fragment().filter(|f| !f.is_empty()) {
        remainder.push('#');
        remainder.push_str(fragment);
    }

    // Find what's before it
    let serialized: &str = url.as_str();
    let end: usize = serialized.len().saturating_sub(remainder.len());
    let host: &str = if serialized.starts_with(DUMMY_BASE_URL) {
        clamped_substring(serialized, DUMMY_BASE_URL.len(), end)?
    } else {
        //                                  http:           //
        clamped_substring(serialized, url.scheme().len() + 1 + 2, end)?
    };
    Some(host.into())
}





/***** LIBRARY *****/
/// Classifies user-entered server addresses.
///
/// Use [`parse()`] if you're happy with the default [`ParserConfig`].
#[derive(Clone, Debug)]
pub struct AddressParser {
    /// The configuration that determines how to parse.
    config: ParserConfig,
    /// The detector used to find links in input that isn't anything else.
    links:  LinkDetector,
}
impl Default for AddressParser {
    #[inline]
    fn default() -> Self { Self::new(ParserConfig::default()) }
}
impl AddressParser {
    /// Constructor for the AddressParser.
    ///
    /// # Arguments
    /// - `config`: The [`ParserConfig`] to parse with.
    ///
    /// # Returns
    /// A new AddressParser.
    #[inline]
    pub fn new(config: ParserConfig) -> Self { Self { config, links: LinkDetector::new(LinkDetectorConfig { scheme: true, www: true, tld: true }) } }

    /// Returns the configuration of this parser.
    #[inline]
    pub const fn config(&self) -> &ParserConfig { &self.config }

    /// Parses the given input as a server address.
    ///
    /// The input is trimmed and lowercased before anything else happens.
    ///
    /// # Arguments
    /// - `raw`: The text the user gave us.
    ///
    /// # Returns
    /// The [`ParsedAddress`] the input refers to, or [`None`] if it doesn't look like a server
    /// address at all.
    pub fn parse(&self, raw: &str) -> Option<ParsedAddress> {
        let input: String = raw.trim().to_lowercase();
        if input.is_empty() {
            return None;
        }

        // 1. Join links
        if let Some(pos) = input.find(JOIN_LINK_DISCRIMINATOR) {
            let mut code: &str = input[pos + JOIN_LINK_DISCRIMINATOR.len()..].trim();
            if code.is_empty() {
                debug!("Found join link in {raw:?} without a join code");
                return None;
            }
            if let Some(junk) = scan_alpha_numeric_run(code) {
                code = &code[..junk];
            }
            trace!("Recognized {raw:?} as join link with code {code:?}");
            return Some(ParsedAddress::new_join(code));
        }

        // 2. IP literals
        if let Some(IpParts { ip, port }) = try_parse_ip(&input, self.config.default_port) {
            let Some(port) = u16::try_from(port).ok().filter(|port| *port != 0) else {
                debug!("Port {port} of IP literal {ip:?} is out of range");
                return None;
            };
            trace!("Recognized {raw:?} as IP literal {ip:?} with port {port}");
            return Some(ParsedAddress::new_ip(ip, port));
        }

        // 3. Bare join codes
        if is_alpha_numeric(&input) {
            trace!("Recognized {raw:?} as bare join code");
            return Some(ParsedAddress::new_join(input));
        }

        // 4. Anything that has a link in it
        let Some(link) = self.links.find_first(&input) else {
            trace!("Found no link in {raw:?}");
            return None;
        };
        let host: String = extract_host(&link)?;
        trace!("Recognized {raw:?} as host {host:?}");
        Some(ParsedAddress::new_host(host))
    }
}



/// Parses the given input as a server address with the default [`ParserConfig`].
///
/// See [`AddressParser::parse()`] for more information.
#[inline]
pub fn parse(raw: &str) -> Option<ParsedAddress> { AddressParser::default().parse(raw) }
