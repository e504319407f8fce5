//  LIB.rs
//    by Lut99
//
//  Created:
//    13 Oct 2026, 14:48:10
//  Last edited:
//    17 Oct 2026, 16:03:11
//  Auto updated?
//    Yes
//
//  Description:
//!   The `cfx-addr` crate takes free-form, user-entered server addresses
//!   (pasted join links, typed join codes, IP addresses or domains) and
//!   classifies them into a [`ParsedAddress`].
//!
//!   Nothing in here touches the network; we only look at the text.
//

// Declare modules
pub mod address;
pub mod config;
pub mod constants;
pub mod ip;
pub mod links;
pub mod parser;
pub mod scan;
pub mod tlds;

// Bring some stuff into the crate namespace
pub use address::{AddressDeserializeError, AddressParseError, HostAddress, IpAddress, JoinAddress, ParsedAddress};
pub use config::{ConfigError, ParserConfig};
pub use parser::{AddressParser, parse};
