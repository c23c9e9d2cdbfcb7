//! Attribute and text values → DSL literals.

use std::borrow::Cow;

use memchr::memchr;

use super::tables::{Catalog, ValueKind};

/// Literal emitted when the value carries no information: a missing value or
/// any boolean attribute.
pub const EMPTY_LITERAL: &str = "\"\"";

/// Encode a value as a DSL literal.
///
/// `attr` is the raw (unresolved) name of the owning attribute and selects
/// the literal form; pass `None` for text and comment payloads, which always
/// use the string form.
///
/// - no value → [`EMPTY_LITERAL`]
/// - poly-variant attribute → `` `value `` (see [`poly_variant`])
/// - integer attribute → the raw text, unquoted
/// - boolean attribute → [`EMPTY_LITERAL`], whatever the value says
/// - otherwise → a string literal (see [`string_literal`])
///
/// ```
/// use tagscribe::dsl::{Catalog, encode_value};
///
/// let catalog = Catalog::standard();
/// assert_eq!(encode_value(catalog, Some("post"), Some("method")), "`POST");
/// assert_eq!(encode_value(catalog, Some("4"), Some("rows")), "4");
/// assert_eq!(encode_value(catalog, Some("false"), Some("disabled")), "\"\"");
/// assert_eq!(encode_value(catalog, Some("/x"), Some("href")), "\"/x\"");
/// ```
pub fn encode_value<'a>(
    catalog: &Catalog,
    value: Option<&'a str>,
    attr: Option<&str>,
) -> Cow<'a, str> {
    let Some(value) = value else {
        return Cow::Borrowed(EMPTY_LITERAL);
    };

    let kind = attr.map_or(ValueKind::String, |name| catalog.value_kind(name));
    match kind {
        ValueKind::PolyVariant => Cow::Owned(poly_variant(value)),
        ValueKind::Integer => Cow::Borrowed(value),
        ValueKind::Boolean => Cow::Borrowed(EMPTY_LITERAL),
        ValueKind::String => Cow::Owned(string_literal(value)),
    }
}

/// Encode an enumerated value as a polymorphic variant.
///
/// The value is lower-cased with hyphens turned into underscores. HTTP verbs
/// are the exception: `get` and `post` become `` `GET `` and `` `POST ``.
pub fn poly_variant(value: &str) -> String {
    let lower = value.to_ascii_lowercase();
    let tag = match lower.as_str() {
        "get" | "post" => lower.to_ascii_uppercase(),
        _ => lower,
    };

    let mut out = String::with_capacity(tag.len() + 1);
    out.push('`');
    out.extend(tag.chars().map(|c| if c == '-' { '_' } else { c }));
    out
}

/// Encode text as a string literal.
///
/// Uses `{|...|}` when the text contains a double quote and `"..."`
/// otherwise. Nothing is escaped: newlines and backslashes pass through.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    push_string_literal(&mut out, value);
    out
}

/// [`string_literal`], appending to an existing buffer.
pub fn push_string_literal(out: &mut String, value: &str) {
    if memchr(b'"', value.as_bytes()).is_some() {
        out.push_str("{|");
        out.push_str(value);
        out.push_str("|}");
    } else {
        out.push('"');
        out.push_str(value);
        out.push('"');
    }
}
