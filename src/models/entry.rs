//! Entry model representing one result of an arXiv search.

use serde::{Deserialize, Serialize};

/// Base URL for arXiv abstract pages
const ARXIV_ABS_URL: &str = "https://arxiv.org/abs";

/// One entry of an arXiv Atom feed, reduced to the fields callers care about.
///
/// `title` and `summary` are always present (possibly empty), and `authors` and
/// `categories` are always vectors. Everything else is optional because the
/// feed may omit it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Short arXiv identifier, e.g. `2101.00001v1`
    pub id: Option<String>,

    /// Full resource URI as given by the feed
    pub raw_id: Option<String>,

    /// Paper title, whitespace-trimmed
    pub title: String,

    /// Abstract, whitespace-trimmed
    pub summary: String,

    /// Publication timestamp, verbatim
    pub published: Option<String>,

    /// Last update timestamp, verbatim
    pub updated: Option<String>,

    /// Author names in feed order
    pub authors: Vec<String>,

    /// Link to the PDF
    pub pdf_url: Option<String>,

    /// Category terms in feed order
    pub categories: Vec<String>,

    /// The arXiv primary category term
    pub primary_category: Option<String>,
}

impl Entry {
    /// URL of the abstract page for this entry
    pub fn abs_url(&self) -> Option<String> {
        self.id
            .as_deref()
            .map(|id| format!("{}/{}", ARXIV_ABS_URL, id))
    }

    /// Identifier without its version suffix (`2101.00001v2` -> `2101.00001`)
    pub fn base_id(&self) -> Option<&str> {
        self.id.as_deref().map(|id| split_version(id).0)
    }

    /// Version number encoded in the identifier, if any
    pub fn version(&self) -> Option<u32> {
        self.id.as_deref().and_then(|id| split_version(id).1)
    }
}

/// Split a trailing `vN` off an arXiv identifier.
fn split_version(id: &str) -> (&str, Option<u32>) {
    if let Some(pos) = id.rfind('v') {
        let digits = &id[pos + 1..];
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(version) = digits.parse() {
                return (&id[..pos], Some(version));
            }
        }
    }
    (id, None)
}
