//! Atom feed parsing for arXiv API responses.
//!
//! [`parse_feed`] turns the raw text of an API response into a list of
//! [`Entry`](crate::models::Entry) records. It performs no I/O and keeps no
//! state, so it can be used without the transport layer at all:
//!
//! ```rust
//! use arxiv_feed::feed::parse_feed;
//!
//! let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
//!   <entry>
//!     <id>http://arxiv.org/abs/2101.00001v1</id>
//!     <title>  Quantum Foo  </title>
//!   </entry>
//! </feed>"#;
//!
//! let entries = parse_feed(xml).unwrap();
//! assert_eq!(entries[0].id.as_deref(), Some("2101.00001v1"));
//! assert_eq!(entries[0].title, "Quantum Foo");
//! ```
//!
//! Only a document that is not well-formed XML is an error. Missing elements
//! and attributes inside an entry degrade to empty or absent values.

mod document;
mod parser;

pub use parser::parse_feed;

use std::fmt;

/// Atom namespace URI
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";
/// arXiv extension namespace URI
pub const ARXIV_NS: &str = "http://arxiv.org/schemas/atom";

/// Prefix to namespace table for the namespaces the parser understands
pub const NAMESPACES: [(&str, &str); 2] = [("atom", ATOM_NS), ("arxiv", ARXIV_NS)];

/// Namespace of an element, resolved once when the element is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FeedNamespace {
    Atom,
    Arxiv,
    Other,
}

impl FeedNamespace {
    fn from_uri(uri: &[u8]) -> Self {
        match NAMESPACES.iter().find(|(_, ns)| ns.as_bytes() == uri) {
            Some(("atom", _)) => FeedNamespace::Atom,
            Some(("arxiv", _)) => FeedNamespace::Arxiv,
            _ => FeedNamespace::Other,
        }
    }
}

/// The feed text could not be parsed as XML.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct MalformedDocument {
    message: String,
    position: u64,
}

impl MalformedDocument {
    pub(crate) fn at(position: u64, message: impl fmt::Display) -> Self {
        Self {
            message: message.to_string(),
            position,
        }
    }

    /// Description of what went wrong
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset in the input near which the problem was found
    pub fn position(&self) -> u64 {
        self.position
    }
}

impl fmt::Display for MalformedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed feed document at byte {}: {}",
            self.position, self.message
        )
    }
}
