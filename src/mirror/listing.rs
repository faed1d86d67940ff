//! Parsing of auto-generated HTML directory listings.
//!
//! Only anchors matter: each `<a href="...">text</a>` is either a file, a
//! subdirectory (href ends in `/`) or navigation chrome that is filtered out.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Anchor texts that are listing chrome rather than data.
pub const IGNORED_LINK_TEXTS: &[&str] = &[
    "Name",
    "Last modified",
    "Size",
    "Description",
    "Parent Directory",
    "www.isip.piconepress.com",
];

fn anchor_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?is)<a\s[^>]*?\bhref\s*=\s*(?:"([^"]*)"|'([^']*)')[^>]*>(.*?)</a\s*>"#)
            .expect("anchor pattern is valid")
    })
}

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern is valid"))
}

/// One hyperlink from a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub text: String,
}

/// Files and subdirectories linked from a listing page, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub files: Vec<String>,
    pub subdirs: Vec<String>,
}

impl Listing {
    pub fn parse(html: &str) -> Self {
        let mut listing = Listing::default();

        for link in extract_links(html) {
            if IGNORED_LINK_TEXTS.contains(&link.text.as_str()) {
                continue;
            }
            if !is_child_href(&link.href) {
                debug!("Ignoring link outside the listing: {}", link.href);
                continue;
            }
            if link.href.ends_with('/') {
                listing.subdirs.push(link.href);
            } else {
                listing.files.push(link.href);
            }
        }

        listing
    }
}

/// Every anchor with an `href`, with its visible text.
pub fn extract_links(html: &str) -> Vec<Link> {
    anchor_pattern()
        .captures_iter(html)
        .filter_map(|caps| {
            let href = caps.get(1).or_else(|| caps.get(2))?.as_str();
            let inner = caps.get(3).map_or("", |m| m.as_str());
            Some(Link {
                href: decode_entities(href.trim()),
                text: decode_entities(tag_pattern().replace_all(inner, "").trim()),
            })
        })
        .collect()
}

/// Whether an href names an entry directly inside the listed directory.
fn is_child_href(href: &str) -> bool {
    let name = href.strip_suffix('/').unwrap_or(href);
    !name.is_empty()
        && !name.contains('/')
        && !name.contains("://")
        && !name.starts_with('?')
        && !name.starts_with('#')
        && name != "."
        && name != ".."
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
