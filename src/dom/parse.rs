//! Page source to [`ArenaDom`].

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

use super::arena::ArenaDom;
use super::tree_sink::ArenaSink;

/// Parse an HTML document into an arena DOM.
///
/// Parsing follows the HTML5 tree-construction rules, so the result always
/// has `html`, `head` and `body` elements no matter how sloppy the input is.
///
/// ```
/// use tagscribe::dom::parse_html;
///
/// let dom = parse_html("<title>Hi</title><p>Hello");
/// assert!(dom.find_by_tag("body").is_some());
/// ```
pub fn parse_html(html: &str) -> ArenaDom {
    let sink = ArenaSink::new();
    parse_document(sink, ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .into_dom()
}

/// Parse HTML bytes of unknown encoding.
///
/// Convenience wrapper that handles byte-to-string conversion with encoding
/// detection: UTF-8 first, then the charset the document declares, then
/// Windows-1252.
pub fn parse_html_bytes(html: &[u8]) -> ArenaDom {
    let hint_encoding = crate::util::extract_charset(html);
    let html_str = crate::util::decode_text(html, hint_encoding);
    parse_html(&html_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bytes_windows_1252_fallback() {
        // "café" with 0xE9 as a Latin-1 byte
        let dom = parse_html_bytes(b"<p>caf\xe9</p>");
        let p = dom.find_by_tag("p").expect("should find p");
        assert_eq!(dom.text_content(p), "café");
    }

    #[test]
    fn test_parse_bytes_declared_charset() {
        // 0xC0 is "А" in windows-1251 but "À" in windows-1252
        let dom = parse_html_bytes(b"<meta charset=\"windows-1251\"><p>\xc0</p>");
        let p = dom.find_by_tag("p").expect("should find p");
        assert_eq!(dom.text_content(p), "А");
    }

    #[test]
    fn test_parse_bytes_utf8() {
        let dom = parse_html_bytes("<p>naïve</p>".as_bytes());
        let p = dom.find_by_tag("p").expect("should find p");
        assert_eq!(dom.text_content(p), "naïve");
    }
}
