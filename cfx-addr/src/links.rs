//  LINKS.rs
//    by Lut99
//
//  Created:
//    14 Oct 2026, 13:40:02
//  Last edited:
//    19 Oct 2026, 10:31:08
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements a small link detector that finds URL-like tokens in free
//!   text, similar to what chat clients do to "linkify" messages.
//!
//!   Three flavours of link are recognized:
//!   - Links with an explicit scheme (`https://example.com/foo`);
//!   - Links starting with `www.` (`www.example.com`); and
//!   - Bare domains ending in a known top-level domain (`example.com`), or
//!     bare IPv4 addresses (`1.2.3.4`).
//!
//!   All of them may be followed by a port and a path. Note that e-mail
//!   addresses, phone numbers, hashtags and mentions are never detected.
//

use std::borrow::Cow;
use std::sync::LazyLock;

use enum_debug::EnumDebug;
use regex::Regex;

use crate::tlds::tlds_longest_first;


/***** CONSTANTS *****/
/// Characters that may appear in a domain label (besides inner dashes).
const LABEL: &str = r"[\p{L}\p{N}](?:[\p{L}\p{N}\-]*[\p{L}\p{N}])?";
/// What may come after the host: an optional port and an optional path/query/fragment.
const SUFFIX: &str = r"(?::[0-9]+)?(?:[/?#][^\s]*)?";

/// Matches links that come with a scheme.
static SCHEME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z][a-zA-Z0-9+.\-]*://[^\s/?#]+(?:[/?#][^\s]*)?").expect("Static scheme link regex failed to compile"));

/// Matches links starting with `www.`.
static WWW_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"\bwww\.(?:{LABEL}\.)*{LABEL}{SUFFIX}")).expect("Static www link regex failed to compile"));

/// Matches bare domains (with a known TLD) and bare IPv4 addresses.
static TLD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let tlds: String = tlds_longest_first().into_iter().map(regex::escape).collect::<Vec<String>>().join("|");
    Regex::new(&format!(r"(?:(?:[0-9]{{1,3}}\.){{3}}[0-9]{{1,3}}|(?:{LABEL}\.)+(?:{tlds}))\b{SUFFIX}"))
        .expect("Static TLD link regex failed to compile")
});

/// Characters that are dropped from the end of a link, since they're more likely punctuation of the surrounding sentence.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '\'', '"'];





/***** HELPER FUNCTIONS *****/
/// Strips trailing punctuation and unbalanced closing brackets from a link.
///
/// # Arguments
/// - `link`: The link to trim.
///
/// # Returns
/// The trimmed link.
fn trim_trailing_junk(mut link: &str) -> &str {
    loop {
        let Some(last) = link.chars().next_back() else { return link };
        let unbalanced: bool = match last {
            ')' => link.matches('(').count() < link.matches(')').count(),
            ']' => link.matches('[').count() < link.matches(']').count(),
            '}' => link.matches('{').count() < link.matches('}').count(),
            c => TRAILING_PUNCTUATION.contains(&c),
        };
        if !unbalanced {
            return link;
        }
        link = &link[..link.len() - last.len_utf8()];
    }
}





/***** LIBRARY *****/
/// Determines which flavours of link a [`LinkDetector`] looks for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LinkDetectorConfig {
    /// Whether to detect links with an explicit scheme (`https://...`).
    pub scheme: bool,
    /// Whether to detect links starting with `www.`.
    pub www:    bool,
    /// Whether to detect bare domains with a known TLD and bare IPv4 addresses.
    pub tld:    bool,
}
impl Default for LinkDetectorConfig {
    #[inline]
    fn default() -> Self { Self { scheme: true, www: true, tld: true } }
}



/// The flavour of a [`LinkMatch`].
#[derive(Clone, Copy, Debug, EnumDebug, Eq, Hash, PartialEq)]
pub enum LinkKind {
    /// The link came with its own scheme.
    Scheme,
    /// The link started with `www.`.
    Www,
    /// The link was a bare domain or IP address.
    Tld,
}

/// A link found in some text.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LinkMatch<'t> {
    /// The flavour of the link.
    pub kind:   LinkKind,
    /// The byte offset of the link in the source text.
    pub offset: usize,
    /// The matched text itself.
    pub text:   &'t str,
}
impl<'t> LinkMatch<'t> {
    /// Returns the link as it would appear in an anchor's `href`.
    ///
    /// Links without a scheme get `http://` prepended to them; others are returned as-is.
    #[inline]
    pub fn anchor_href(&self) -> Cow<'t, str> {
        match self.kind {
            LinkKind::Scheme => Cow::Borrowed(self.text),
            LinkKind::Www | LinkKind::Tld => Cow::Owned(format!("http://{}", self.text)),
        }
    }
}



/// Finds URL-like tokens in free text.
#[derive(Clone, Debug, Default)]
pub struct LinkDetector {
    /// Which flavours of link to look for.
    config: LinkDetectorConfig,
}
impl LinkDetector {
    /// Constructor for the LinkDetector.
    ///
    /// # Arguments
    /// - `config`: A [`LinkDetectorConfig`] that determines which links are detected.
    ///
    /// # Returns
    /// A new LinkDetector.
    #[inline]
    pub const fn new(config: LinkDetectorConfig) -> Self { Self { config } }

    /// Finds the first link at or after the given position.
    ///
    /// When flavours overlap at the same position, a scheme link beats a `www.` link, which beats a bare one.
    fn find_at<'t>(&self, text: &'t str, start: usize) -> Option<LinkMatch<'t>> {
        let candidates: [(bool, LinkKind, &Regex); 3] = [
            (self.config.scheme, LinkKind::Scheme, &*SCHEME_REGEX),
            (self.config.www, LinkKind::Www, &*WWW_REGEX),
            (self.config.tld, LinkKind::Tld, &*TLD_REGEX),
        ];

        let mut best: Option<(LinkKind, regex::Match<'t>)> = None;
        for (enabled, kind, regex) in candidates {
            if !enabled {
                continue;
            }
            if let Some(m) = regex.find_at(text, start) {
                if best.as_ref().map_or(true, |(_, b)| m.start() < b.start()) {
                    best = Some((kind, m));
                }
            }
        }

        best.map(|(kind, m)| LinkMatch { kind, offset: m.start(), text: trim_trailing_junk(m.as_str()) })
    }

    /// Returns an iterator over all links in the given text, in order of appearance.
    ///
    /// # Arguments
    /// - `text`: The text to search.
    ///
    /// # Returns
    /// An iterator yielding [`LinkMatch`]es.
    pub fn find_iter<'s, 't>(&'s self, text: &'t str) -> impl 's + Iterator<Item = LinkMatch<'t>>
    where
        't: 's,
    {
        let mut pos: usize = 0;
        std::iter::from_fn(move || {
            while pos <= text.len() {
                let link: LinkMatch<'t> = self.find_at(text, pos)?;
                // Trimming may have eaten the entire match (e.g., `a.b` followed by only junk); skip ahead if so
                pos = link.offset + link.text.len().max(1);
                while pos < text.len() && !text.is_char_boundary(pos) {
                    pos += 1;
                }
                if !link.text.is_empty() {
                    return Some(link);
                }
            }
            None
        })
    }

    /// Returns the first link in the given text.
    ///
    /// # Arguments
    /// - `text`: The text to search.
    ///
    /// # Returns
    /// The first [`LinkMatch`], or [`None`] if the text contains no links.
    #[inline]
    pub fn find_first<'t>(&self, text: &'t str) -> Option<LinkMatch<'t>> { self.find_iter(text).next() }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_tld() {
        let detector = LinkDetector::default();
        let link = detector.find_first("myserver.example.com").unwrap();
        assert_eq!(link.kind, LinkKind::Tld);
        assert_eq!(link.text, "myserver.example.com");
        assert_eq!(link.anchor_href(), "http://myserver.example.com");

        let link = detector.find_first("join us at play.example.org:30120 tonight").unwrap();
        assert_eq!(link.offset, 11);
        assert_eq!(link.text, "play.example.org:30120");

        // Country codes are fine too, and `.com` is not cut short at `.co`
        assert_eq!(detector.find_first("server.co.uk").unwrap().text, "server.co.uk");
        assert_eq!(detector.find_first("server.com").unwrap().text, "server.com");

        // Newer generic TLDs, which game server hosts love
        for host in ["play.myserver.ovh", "rp.server.lol", "myserver.city", "server.gold", "server.icu", "server.best", "server.land", "fivem.tools"] {
            let link = detector.find_first(host).unwrap_or_else(|| panic!("Expected a link in '{host}'"));
            assert_eq!(link.kind, LinkKind::Tld);
            assert_eq!(link.text, host);
        }
        // `.community` must win over `.com`
        assert_eq!(detector.find_first("server.community").unwrap().text, "server.community");
    }

    #[test]
    fn test_links_unknown_tld() {
        let detector = LinkDetector::default();
        assert_eq!(detector.find_first("myserver.local"), None);
        // Two letters alone do not make a country code
        assert_eq!(detector.find_first("server.rp"), None);
        assert_eq!(detector.find_first("server.zz"), None);
        assert_eq!(detector.find_first("host:99999"), None);
        assert_eq!(detector.find_first("just some words"), None);
        assert_eq!(detector.find_first(""), None);
    }

    #[test]
    fn test_links_scheme_and_www() {
        let detector = LinkDetector::default();
        let link = detector.find_first("see https://example.com/path?x=1.").unwrap();
        assert_eq!(link.kind, LinkKind::Scheme);
        assert_eq!(link.text, "https://example.com/path?x=1");
        assert_eq!(link.anchor_href(), "https://example.com/path?x=1");

        let link = detector.find_first("www.example.net/foo").unwrap();
        assert_eq!(link.kind, LinkKind::Www);
        assert_eq!(link.anchor_href(), "http://www.example.net/foo");
    }

    #[test]
    fn test_links_ipv4() {
        let detector = LinkDetector::default();
        let link = detector.find_first("1.2.3.4:99999").unwrap();
        assert_eq!(link.kind, LinkKind::Tld);
        assert_eq!(link.text, "1.2.3.4:99999");
    }

    #[test]
    fn test_links_trailing_junk() {
        assert_eq!(trim_trailing_junk("example.com/foo)."), "example.com/foo");
        assert_eq!(trim_trailing_junk("example.com/(foo)"), "example.com/(foo)");
        assert_eq!(trim_trailing_junk("example.com,"), "example.com");
        assert_eq!(trim_trailing_junk("..."), "");
    }

    #[test]
    fn test_links_config() {
        let detector = LinkDetector::new(LinkDetectorConfig { scheme: true, www: false, tld: false });
        assert_eq!(detector.find_first("example.com"), None);
        assert_eq!(detector.find_first("http://example.com").unwrap().text, "http://example.com");

        let links: Vec<&str> = LinkDetector::default().find_iter("a.com and b.net, then c.org").map(|l| l.text).collect();
        assert_eq!(links, vec!["a.com", "b.net", "c.org"]);
    }
}
