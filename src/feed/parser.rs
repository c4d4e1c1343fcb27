//! Extraction of [`Entry`] records from an Atom feed document.

use super::document::{parse_document, Element};
use super::{FeedNamespace, MalformedDocument};
use crate::models::Entry;

use super::FeedNamespace::{Arxiv, Atom};

/// Path segment separating the host part of an entry URI from its arXiv id
const ABS_MARKER: &str = "/abs/";
/// Media type of PDF links
const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Parse the text of an arXiv Atom feed into entries, in document order.
///
/// Fails only when `feed_text` is not well-formed XML. No partial results are
/// returned in that case.
pub fn parse_feed(feed_text: &str) -> Result<Vec<Entry>, MalformedDocument> {
    let root = parse_document(feed_text)?;
    let entries: Vec<Entry> = root.children(Atom, "entry").map(parse_entry).collect();
    tracing::debug!(count = entries.len(), "Parsed arXiv feed");
    Ok(entries)
}

fn parse_entry(entry: &Element) -> Entry {
    let raw_id = child_text(entry, Atom, "id").map(str::to_string);
    let id = raw_id
        .as_deref()
        .and_then(|raw| raw.rsplit_once(ABS_MARKER))
        .map(|(_, id)| id.to_string());

    Entry {
        id,
        raw_id,
        title: trimmed_text(entry, "title"),
        summary: trimmed_text(entry, "summary"),
        published: child_text(entry, Atom, "published").map(str::to_string),
        updated: child_text(entry, Atom, "updated").map(str::to_string),
        authors: authors(entry),
        pdf_url: pdf_url(entry),
        categories: entry
            .children(Atom, "category")
            .filter_map(|category| category.attr("term"))
            .filter(|term| !term.is_empty())
            .map(str::to_string)
            .collect(),
        primary_category: entry
            .child(Arxiv, "primary_category")
            .and_then(|pc| pc.attr("term"))
            .map(str::to_string),
    }
}

fn child_text<'a>(parent: &'a Element, namespace: FeedNamespace, name: &str) -> Option<&'a str> {
    parent.child(namespace, name).and_then(Element::text)
}

fn trimmed_text(entry: &Element, name: &str) -> String {
    child_text(entry, Atom, name)
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

fn authors(entry: &Element) -> Vec<String> {
    entry
        .children(Atom, "author")
        .filter_map(|author| child_text(author, Atom, "name"))
        .map(|name| name.trim().to_string())
        .collect()
}

/// First link typed as PDF or titled "pdf", whichever comes first.
fn pdf_url(entry: &Element) -> Option<String> {
    entry
        .children(Atom, "link")
        .find(|link| {
            link.attr("type") == Some(PDF_MEDIA_TYPE)
                || link
                    .attr("title")
                    .is_some_and(|title| title.to_lowercase() == "pdf")
        })
        .and_then(|link| link.attr("href"))
        .map(str::to_string)
}
