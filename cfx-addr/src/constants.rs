//! Constants
//!
//! This file is a collection of constants that are used throughout the address parser. Keeping them
//! in one place means that changing, say, the join link domain does not require hunting through the
//! parsing code.

/// The port a server is assumed to listen on when an IP literal is given without one.
pub const DEFAULT_SERVER_PORT: u16 = 30120;

/// The substring that identifies a join link in arbitrary text.
pub const JOIN_LINK_DISCRIMINATOR: &str = "cfx.re/join/";
/// The prefix of every canonical join URL. A join code is appended to this.
pub const JOIN_LINK_PREFIX: &str = "https://cfx.re/join/";

/// Placeholder base against which schemeless link tokens are resolved. It never leaves the parser.
pub const DUMMY_BASE_URL: &str = "fivem://connect/";
