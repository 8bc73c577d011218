//! `Link` header parsing for paginated collections

use regex::Regex;
use std::sync::LazyLock;

// Parameters end at the first comma, so a malformed entry never lends its
// `rel` to the entry before it
static LINK_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([^>]*)>((?:\s*;[^;,<]*)*)").expect("valid link entry regex")
});

static REL_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*rel\s*=\s*(?:"([^"]*)"|([^\s;,]+))"#).expect("valid rel regex")
});

/// One `<url>; rel="name"` entry of a `Link` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRelation {
    pub url: String,
    pub rel: String,
}

/// Parse every well-formed entry of a `Link` header.
///
/// Entries without a `<url>` or without a `rel` parameter are skipped.
pub fn parse_link_header(header: &str) -> Vec<LinkRelation> {
    LINK_ENTRY
        .captures_iter(header)
        .filter_map(|entry| {
            let url = entry.get(1)?.as_str().trim();
            if url.is_empty() {
                return None;
            }
            let params = entry.get(2)?.as_str();
            let rel = REL_PARAM.captures(params)?;
            let rel = rel.get(1).or_else(|| rel.get(2))?.as_str();
            Some(LinkRelation {
                url: url.to_string(),
                rel: rel.to_string(),
            })
        })
        .collect()
}

/// URL of the entry whose relation is exactly `next`, if any
pub fn next_page_url(header: &str) -> Option<String> {
    parse_link_header(header)
        .into_iter()
        .find(|link| link.rel == "next")
        .map(|link| link.url)
}
