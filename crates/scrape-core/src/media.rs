//! Media-link extraction: anchors on a page whose target is a gif or webm file.

use anyhow::Result;
use scraper::{Html, Selector};

/// Suffixes (lowercase) that mark a URL or name as a media file.
pub const MEDIA_SUFFIXES: [&str; 2] = [".webm", ".gif"];

/// One matching anchor: the raw `href` plus the strings that may name the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaLink {
    /// `href` attribute exactly as written in the page (not resolved).
    pub href: String,
    /// `title` attribute, if present.
    pub title: Option<String>,
    /// `alt` attribute, if present.
    pub alt: Option<String>,
    /// Concatenated text of every descendant text node.
    pub text: String,
}

/// True if `s` ends in `.webm` or `.gif`, ignoring ASCII case.
pub fn is_media_url(s: &str) -> bool {
    MEDIA_SUFFIXES
        .iter()
        .any(|suffix| ends_with_ignore_ascii_case(s, suffix))
}

fn ends_with_ignore_ascii_case(s: &str, suffix: &str) -> bool {
    let Some(start) = s.len().checked_sub(suffix.len()) else {
        return false;
    };
    s.is_char_boundary(start) && s[start..].eq_ignore_ascii_case(suffix)
}

/// Parses `html` and returns every `<a>` whose `href` is a media URL, in document order.
///
/// Duplicates are kept; the name table decides between them.
pub fn extract_media_links(html: &str) -> Result<Vec<MediaLink>> {
    let selector =
        Selector::parse("a[href]").map_err(|e| anyhow::anyhow!("anchor selector: {:?}", e))?;
    let document = Html::parse_document(html);

    let links = document
        .select(&selector)
        .filter_map(|a| {
            let element = a.value();
            let href = element.attr("href")?;
            if !is_media_url(href) {
                return None;
            }
            Some(MediaLink {
                href: href.to_string(),
                title: element.attr("title").map(str::to_string),
                alt: element.attr("alt").map(str::to_string),
                text: a.text().collect(),
            })
        })
        .collect();

    Ok(links)
}
