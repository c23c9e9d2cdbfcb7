//! HTML tree → templating DSL source.
//!
//! This module turns a borrowed [`ArenaDom`](crate::dom::ArenaDom) subtree
//! into source text for a typed HTML-templating DSL. The pieces are pure
//! functions over static tables, so each can be used and tested on its own:
//!
//! - [`tables`]: attribute and tag classification ([`Catalog`])
//! - [`resolve`]: attribute name → constructor identifier
//! - [`encode`]: attribute / text value → literal
//! - [`serialize`]: the recursive tree walk that ties them together
//!
//! ## Output grammar
//!
//! ```text
//! element   := tag " [" (attr "; ")* "] " children
//! children  := ""                              (void tags)
//!            | string                          (text-bearing tags)
//!            | "[" ("\n" node ";")* "]"        (everything else)
//! attr      := name " " value
//! node      := element | "txt " string | "comment " string
//! ```

mod encode;
mod resolve;
mod serialize;
mod tables;

pub use encode::{EMPTY_LITERAL, encode_value, poly_variant, push_string_literal, string_literal};
pub use resolve::resolve_attr_name;
pub use serialize::{RenderResult, Serializer, SkippedNode, serialize, serialize_with};
pub use tables::{Catalog, NameClass, TagKind, ValueKind};
