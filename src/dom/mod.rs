//! Document trees handed to the DSL serializer.
//!
//! The serializer only ever borrows an [`ArenaDom`]; this module is where the
//! host side builds one, either node by node or by running the html5ever
//! parser over page source.

mod arena;
mod parse;
mod tree_sink;

pub use arena::{
    ArenaDom, ArenaNode, ArenaNodeData, ArenaNodeId, Attribute, ChildrenIter, Descendants,
    NodeKind,
};
pub use parse::{parse_html, parse_html_bytes};
pub use tree_sink::{ArenaSink, NodeHandle};
