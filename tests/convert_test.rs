//! End-to-end conversion tests: page source in, DSL source out.

use std::fs;
use std::io::Write;

use tagscribe::dom::{NodeKind, parse_html};
use tagscribe::dsl::serialize;
use tagscribe::{Error, convert_html, convert_html_bytes};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> String {
    format!("{}/{}", FIXTURES_DIR, name)
}

fn convert(html: &str, root: &str) -> String {
    convert_html(html, root).expect("root should exist").content
}

// ============================================================================
// Single elements
// ============================================================================

#[test]
fn test_void_element() {
    assert_eq!(convert("<br>", "br"), "br [] ");
}

#[test]
fn test_input_with_boolean_attribute() {
    assert_eq!(
        convert(r#"<input type="text" disabled>"#, "input"),
        r#"input [type_ "text"; disabled ""; ] "#
    );
}

#[test]
fn test_link_with_aria_label() {
    assert_eq!(
        convert(r#"<a href="/x" aria-label="Go">Go</a>"#, "a"),
        "a [href \"/x\"; Aria.label \"Go\"; ] [\ntxt \"Go\";]"
    );
}

#[test]
fn test_data_prefixed_htmx() {
    assert_eq!(
        convert(r#"<div data-hx-get="/load"></div>"#, "div"),
        r#"div [Hx.get "/load"; ] []"#
    );
}

#[test]
fn test_comment_with_quotes() {
    assert_eq!(
        convert(r#"<div><!--He said "hi"--></div>"#, "div"),
        "div [] [\ncomment {|He said \"hi\"|};]"
    );
}

#[test]
fn test_boolean_value_is_irrelevant() {
    let a = convert(r#"<input disabled="false">"#, "input");
    let b = convert(r#"<input disabled="">"#, "input");
    assert_eq!(a, b);
}

#[test]
fn test_whitespace_text_is_kept_verbatim() {
    assert_eq!(
        convert("<ul>\n<li>a</li>\n</ul>", "ul"),
        "ul [] [\ntxt \"\n\";\nli [] [\ntxt \"a\";];\ntxt \"\n\";]"
    );
}

#[test]
fn test_entities_are_decoded_not_escaped() {
    assert_eq!(
        convert("<p>a &amp; b &quot;c&quot;</p>", "p"),
        "p [] [\ntxt {|a & b \"c\"|};]"
    );
}

#[test]
fn test_root_lookup_ignores_case() {
    assert_eq!(convert("<P>x</P>", "P"), "p [] [\ntxt \"x\";]");
}

// ============================================================================
// Whole documents
// ============================================================================

#[test]
fn test_minimal_document() {
    let html = "<!DOCTYPE html><html lang=\"en\"><head><title>T</title></head>\
                <body><p>Hi</p></body></html>";
    assert_eq!(
        convert(html, "html"),
        "html [lang \"en\"; ] [\nhead [] [\ntitle [] \"T\";];\nbody [] [\np [] [\ntxt \"Hi\";];];]"
    );
}

#[test]
fn test_fixture_page() {
    let bytes = fs::read(fixture_path("page.html")).expect("fixture should exist");
    let result = convert_html_bytes(&bytes, "html").expect("html root");
    let out = &result.content;

    assert!(out.starts_with("html [lang \"en\"; ] [\nhead [] ["));
    assert!(out.contains("meta [charset \"utf-8\"; ] ;"));
    assert!(out.contains("title [] \"Sign in\";"));
    assert!(out.contains("style [] {|body { font-family: \"Inter\", sans-serif; }|};"));
    assert!(out.contains("comment \" login form \";"));
    assert!(out.contains(
        "form [method_ `POST; action \"/login\"; Hx.post \"/login\"; Hx.swap_oob \"true\"; ] ["
    ));
    assert!(out.contains("label [for_ \"user\"; ] [\ntxt \"User\";];"));
    assert!(out.contains(
        "input [id \"user\"; type_ \"text\"; name \"user\"; maxlength 32; required \"\"; autofocus \"\"; ] ;"
    ));
    assert!(out.contains("option [value \"a\"; selected \"\"; ] \"Admin\";"));
    assert!(out.contains(
        "textarea [rows 4; cols 40; Aria.describedby \"hint\"; ] \"notes\";"
    ));
    assert!(out.contains(
        "button [type_ \"submit\"; Hx.push_url \"true\"; string_attr \"data-testid\" \"submit\"; disabled \"\"; ] [\ntxt \"Go\";]"
    ));
    assert!(out.ends_with("];]"));
    assert!(result.skipped.is_empty());
}

#[test]
fn test_element_count_matches_children() {
    let out = convert("<ol><li>1</li><li>2</li><li>3</li><li>4</li></ol>", "ol");
    assert_eq!(out.matches("\nli [] [").count(), 4);
    let positions: Vec<_> = ["\"1\"", "\"2\"", "\"3\"", "\"4\""]
        .iter()
        .map(|needle| out.find(needle).expect("item present"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_fostered_table_content_keeps_document_order() {
    assert_eq!(
        convert("<table>foo<tr><td>1</td></tr></table>", "body"),
        "body [] [\ntxt \"foo\";\ntable [] [\ntbody [] [\ntr [] [\ntd [] [\ntxt \"1\";];];];];]"
    );
}

#[test]
fn test_template_renders_without_children() {
    assert_eq!(
        convert("<div><template><p>hidden</p></template></div>", "div"),
        "div [] [\ntemplate [] [];]"
    );
}

// ============================================================================
// Roots and skipped nodes
// ============================================================================

#[test]
fn test_missing_root() {
    let err = convert_html("<p>x</p>", "table").unwrap_err();
    assert!(matches!(err, Error::RootNotFound(ref tag) if tag == "table"));
    assert_eq!(err.to_string(), "no <table> element in document");
}

#[test]
fn test_document_node_is_skipped() {
    let dom = parse_html("<!DOCTYPE html><p>x</p>");
    let result = serialize(&dom, dom.document());
    assert_eq!(result.content, "");
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].kind, NodeKind::Document);
}

#[test]
fn test_legacy_encoded_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"<html><body><p title=\"caf\xe9\">na\xefve</p></body></html>")
        .expect("write");

    let bytes = fs::read(file.path()).expect("read back");
    let result = convert_html_bytes(&bytes, "p").expect("p root");
    assert_eq!(result.content, "p [title_ \"café\"; ] [\ntxt \"naïve\";]");
}
