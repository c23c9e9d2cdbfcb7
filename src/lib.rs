//! # tagscribe
//!
//! Turn an HTML page into source for a typed HTML-templating DSL, so a
//! rendered page can be migrated into template code.
//!
//! ## Quick Start
//!
//! ```
//! use tagscribe::convert_html;
//!
//! let result = convert_html(r#"<p class="lead">Hello</p>"#, "p").unwrap();
//! assert_eq!(result.content, "p [class_ \"lead\"; ] [\ntxt \"Hello\";]");
//! ```
//!
//! ## Working with trees
//!
//! The serializer only borrows a [`dom::ArenaDom`]. Build one by hand or
//! with [`dom::parse_html`], then serialize any node in it:
//!
//! ```
//! use tagscribe::dom::ArenaDom;
//! use tagscribe::dsl::serialize;
//!
//! let mut dom = ArenaDom::new();
//! let div = dom.create_html_element("div", &[("data-hx-get", "/load")]);
//! let note = dom.create_comment("lazy");
//! dom.append(div, note);
//!
//! let result = serialize(&dom, div);
//! assert_eq!(result.content, "div [Hx.get \"/load\"; ] [\ncomment \"lazy\";]");
//! ```
//!
//! Nodes without a DSL form (doctypes, processing instructions, the document
//! node itself) are logged through the [`log`] facade, left out of the
//! output and listed in [`RenderResult::skipped`].

pub mod dom;
pub mod dsl;
pub mod error;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use dsl::{Catalog, RenderResult, SkippedNode, serialize};
pub use error::{Error, Result};

/// Tag of the element converted when the caller does not pick one.
pub const DEFAULT_ROOT: &str = "html";

/// Parse `html` and serialize the first `root` element in it.
///
/// The parser always synthesizes `html`, `head` and `body`, so those roots
/// exist for any input; other tags must appear in the markup.
pub fn convert_html(html: &str, root: &str) -> Result<RenderResult> {
    let dom = dom::parse_html(html);
    convert_dom(&dom, root)
}

/// [`convert_html`] for bytes of unknown encoding.
pub fn convert_html_bytes(html: &[u8], root: &str) -> Result<RenderResult> {
    let dom = dom::parse_html_bytes(html);
    convert_dom(&dom, root)
}

fn convert_dom(dom: &dom::ArenaDom, root: &str) -> Result<RenderResult> {
    let id = dom
        .find_by_tag(root)
        .ok_or_else(|| Error::RootNotFound(root.to_string()))?;
    Ok(serialize(dom, id))
}
