//! Byte-level helpers for getting page source into a `str`.

use std::borrow::Cow;

/// How far into a document to look for a charset declaration.
const CHARSET_SCAN_LEN: usize = 1024;

/// Decode bytes to a string, handling various encodings.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. If malformed, tries the hint encoding (from `<meta charset>` or `<?xml encoding?>`)
/// 3. Falls back to Windows-1252 (superset of ISO-8859-1, the old web default)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        log::debug!("input is not UTF-8, decoding as {}", encoding.name());
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    log::debug!("input is not UTF-8 and declares no charset, decoding as windows-1252");
    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Extract the declared character encoding from the head of a document.
///
/// Recognizes `encoding="..."` in an XML declaration and `charset=...` in a
/// `<meta>` tag (both the `charset` attribute and the `content` form of
/// `http-equiv`). Only the first kilobyte is inspected.
pub fn extract_charset(bytes: &[u8]) -> Option<&str> {
    let prefix = &bytes[..bytes.len().min(CHARSET_SCAN_LEN)];

    if let Some(xml_start) = prefix.windows(5).position(|w| w == b"<?xml")
        && let Some(value) = value_after(&prefix[xml_start..], b"encoding=")
    {
        return Some(value);
    }

    value_after(prefix, b"charset=")
}

/// Find `key` (ASCII case-insensitive) and return the token that follows it,
/// quoted or bare.
fn value_after<'a>(haystack: &'a [u8], key: &[u8]) -> Option<&'a str> {
    let pos = haystack
        .windows(key.len())
        .position(|w| w.eq_ignore_ascii_case(key))?;
    let rest = &haystack[pos + key.len()..];

    let (start, end) = match rest.first()? {
        &(quote @ (b'"' | b'\'')) => {
            let len = memchr::memchr(quote, &rest[1..])?;
            (1, 1 + len)
        }
        _ => {
            let len = rest
                .iter()
                .position(|&b| {
                    b.is_ascii_whitespace() || matches!(b, b'"' | b'\'' | b';' | b'>' | b'/')
                })
                .unwrap_or(rest.len());
            (0, len)
        }
    };

    if start == end {
        return None;
    }
    std::str::from_utf8(&rest[start..end]).ok()
}
