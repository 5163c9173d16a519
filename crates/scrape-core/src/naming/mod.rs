//! Output filename selection for media links.
//!
//! Each anchor offers one candidate name: the first of `title`, `alt` and text
//! content that itself looks like a media filename, else the last path segment
//! of the href. The per-page [`NameTable`] keeps the most descriptive candidate
//! seen for each href and stores it sanitized.

mod sanitize;
mod table;

pub use sanitize::{sanitize_filename, strip_index_prefix};
pub use table::NameTable;

use crate::media::{is_media_url, MediaLink};

/// Last `/`-separated segment of `href`, or the whole string when it has no `/`.
pub fn href_basename(href: &str) -> &str {
    match href.rfind('/') {
        Some(i) => &href[i + 1..],
        None => href,
    }
}

/// Picks the candidate name for one anchor.
///
/// The basename fallback is taken as-is, without the media-suffix check the
/// other sources must pass.
pub fn choose_candidate(link: &MediaLink) -> &str {
    [link.title.as_deref(), link.alt.as_deref(), Some(link.text.as_str())]
        .into_iter()
        .flatten()
        .find(|s| is_media_url(s))
        .unwrap_or_else(|| href_basename(&link.href))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(href: &str, title: Option<&str>, alt: Option<&str>, text: &str) -> MediaLink {
        MediaLink {
            href: href.to_string(),
            title: title.map(str::to_string),
            alt: alt.map(str::to_string),
            text: text.to_string(),
        }
    }

    #[test]
    fn basename() {
        assert_eq!(href_basename("/media/42.gif"), "42.gif");
        assert_eq!(href_basename("http://example.com/a/b/clip.webm"), "clip.webm");
        assert_eq!(href_basename("clip.webm"), "clip.webm");
    }

    #[test]
    fn title_wins_when_media_like() {
        let l = link("v.webm", Some("cool clip.webm"), Some("alt.webm"), "text.webm");
        assert_eq!(choose_candidate(&l), "cool clip.webm");
    }

    #[test]
    fn falls_through_to_alt_then_text() {
        let l = link("v.webm", Some("not media"), Some("alt.gif"), "text.webm");
        assert_eq!(choose_candidate(&l), "alt.gif");

        let l = link("v.webm", Some("nope"), None, "shown name.webm");
        assert_eq!(choose_candidate(&l), "shown name.webm");
    }

    #[test]
    fn untrimmed_text_does_not_qualify() {
        let l = link("/media/42.gif", None, None, " cat.gif\n");
        assert_eq!(choose_candidate(&l), "42.gif");
    }

    #[test]
    fn basename_fallback_is_unconditional() {
        let l = link("/media/42.gif", Some("Click here"), Some(""), "download");
        assert_eq!(choose_candidate(&l), "42.gif");
    }
}
