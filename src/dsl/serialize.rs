//! DOM → DSL source rendering.
//!
//! Pure string accumulation over a borrowed tree; no I/O happens here.

use crate::dom::{ArenaDom, ArenaNodeData, ArenaNodeId, Attribute, NodeKind};

use super::encode::{encode_value, push_string_literal};
use super::resolve::resolve_attr_name;
use super::tables::{Catalog, TagKind};

/// Result of serializing a subtree.
#[derive(Debug, Clone, Default)]
pub struct RenderResult {
    /// The DSL source text.
    pub content: String,
    /// Nodes that have no DSL form and were left out, in document order.
    pub skipped: Vec<SkippedNode>,
}

/// A node the serializer could not express and omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedNode {
    pub id: ArenaNodeId,
    pub kind: NodeKind,
}

/// Serialize `root` and its subtree with the standard catalog.
///
/// ```
/// use tagscribe::dom::ArenaDom;
/// use tagscribe::dsl::serialize;
///
/// let mut dom = ArenaDom::new();
/// let input = dom.create_html_element("input", &[("type", "text"), ("disabled", "")]);
///
/// let result = serialize(&dom, input);
/// assert_eq!(result.content, r#"input [type_ "text"; disabled ""; ] "#);
/// ```
pub fn serialize(dom: &ArenaDom, root: ArenaNodeId) -> RenderResult {
    serialize_with(dom, Catalog::standard(), root)
}

/// Serialize `root` and its subtree with an explicit catalog.
pub fn serialize_with(dom: &ArenaDom, catalog: &Catalog, root: ArenaNodeId) -> RenderResult {
    Serializer::new(dom, catalog).render(root)
}

/// Rendering state for one serialization run.
pub struct Serializer<'a> {
    dom: &'a ArenaDom,
    catalog: &'a Catalog,
    // Accumulated output
    output: String,
    skipped: Vec<SkippedNode>,
}

impl<'a> Serializer<'a> {
    pub fn new(dom: &'a ArenaDom, catalog: &'a Catalog) -> Self {
        Self {
            dom,
            catalog,
            output: String::new(),
            skipped: Vec::new(),
        }
    }

    /// Render a subtree, consuming the serializer.
    pub fn render(mut self, root: ArenaNodeId) -> RenderResult {
        self.write_node(root);

        log::debug!(
            "serialized {} bytes of DSL, skipped {} nodes",
            self.output.len(),
            self.skipped.len()
        );

        RenderResult {
            content: self.output,
            skipped: self.skipped,
        }
    }

    fn write_node(&mut self, id: ArenaNodeId) {
        let dom = self.dom;
        let Some(node) = dom.get(id) else {
            log::warn!("skipping dangling node reference {id:?}");
            return;
        };

        match &node.data {
            ArenaNodeData::Comment(text) => {
                self.output.push_str("comment ");
                push_string_literal(&mut self.output, text);
            }
            ArenaNodeData::Text(text) => {
                self.output.push_str("txt ");
                push_string_literal(&mut self.output, text);
            }
            ArenaNodeData::Element { name, attrs } => {
                let tag = name.local.to_ascii_lowercase();
                self.write_element(id, &tag, attrs);
            }
            other => self.skip(id, other.kind()),
        }
    }

    fn write_element(&mut self, id: ArenaNodeId, tag: &str, attrs: &[Attribute]) {
        let dom = self.dom;
        self.output.push_str(tag);

        self.output.push_str(" [");
        for attr in attrs {
            // Value kind follows the raw name, not the resolved one
            let name = attr.qualified_name();
            let value = encode_value(self.catalog, Some(&attr.value), Some(&*name));
            self.output.push_str(&resolve_attr_name(self.catalog, &name));
            self.output.push(' ');
            self.output.push_str(&value);
            self.output.push_str("; ");
        }
        self.output.push_str("] ");

        match self.catalog.tag_kind(tag) {
            TagKind::Void => {}
            TagKind::Text => {
                let text = dom.text_content(id);
                push_string_literal(&mut self.output, &text);
            }
            TagKind::Normal => {
                self.output.push('[');
                for child in dom.children(id) {
                    if let Some(kind) = self.unrepresentable(child) {
                        self.skip(child, kind);
                        continue;
                    }
                    self.output.push('\n');
                    self.write_node(child);
                    self.output.push(';');
                }
                self.output.push(']');
            }
        }
    }

    /// Kind of a node that has no DSL form, if `id` is one.
    fn unrepresentable(&self, id: ArenaNodeId) -> Option<NodeKind> {
        match self.dom.kind(id)? {
            NodeKind::Element | NodeKind::Text | NodeKind::Comment => None,
            kind => Some(kind),
        }
    }

    fn skip(&mut self, id: ArenaNodeId, kind: NodeKind) {
        log::warn!("skipping {kind} node {}: no DSL equivalent", id.0);
        self.skipped.push(SkippedNode { id, kind });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(dom: &ArenaDom, id: ArenaNodeId) -> String {
        serialize(dom, id).content
    }

    #[test]
    fn test_void_element() {
        let mut dom = ArenaDom::new();
        let br = dom.create_html_element("br", &[]);
        assert_eq!(render(&dom, br), "br [] ");
    }

    #[test]
    fn test_void_element_ignores_children() {
        let mut dom = ArenaDom::new();
        let img = dom.create_html_element("img", &[("src", "a.png"), ("alt", "")]);
        let stray = dom.create_text("stray");
        dom.append(img, stray);
        assert_eq!(render(&dom, img), r#"img [src "a.png"; alt ""; ] "#);
    }

    #[test]
    fn test_attribute_names_and_values() {
        let mut dom = ArenaDom::new();
        let a = dom.create_html_element("a", &[("href", "/x"), ("aria-label", "Go")]);
        dom.append_text(a, "Go");
        assert_eq!(
            render(&dom, a),
            "a [href \"/x\"; Aria.label \"Go\"; ] [\ntxt \"Go\";]"
        );
    }

    #[test]
    fn test_value_kind_uses_raw_name() {
        let mut dom = ArenaDom::new();
        let form =
            dom.create_html_element("form", &[("method", "post"), ("data-hx-get", "/load")]);
        let ta =
            dom.create_html_element("textarea", &[("rows", "3"), ("required", "required")]);
        dom.append(form, ta);
        assert_eq!(
            render(&dom, form),
            "form [method_ `POST; Hx.get \"/load\"; ] [\ntextarea [rows 3; required \"\"; ] \"\";]"
        );
    }

    #[test]
    fn test_text_bearing_element_flattens_children() {
        let mut dom = ArenaDom::new();
        let script = dom.create_html_element("script", &[]);
        dom.append_text(script, "if (a < b) { go(\"x\"); }");
        assert_eq!(
            render(&dom, script),
            "script [] {|if (a < b) { go(\"x\"); }|}"
        );

        let option = dom.create_html_element("option", &[("value", "1")]);
        let b = dom.create_html_element("b", &[]);
        dom.append_text(option, "One ");
        dom.append(option, b);
        dom.append_text(b, "bold");
        assert_eq!(render(&dom, option), r#"option [value "1"; ] "One bold""#);
    }

    #[test]
    fn test_empty_normal_element() {
        let mut dom = ArenaDom::new();
        let div = dom.create_html_element("div", &[]);
        assert_eq!(render(&dom, div), "div [] []");
    }

    #[test]
    fn test_children_keep_document_order() {
        let mut dom = ArenaDom::new();
        let ul = dom.create_html_element("ul", &[("class", "list")]);
        for label in ["one", "two", "three"] {
            let li = dom.create_html_element("li", &[]);
            dom.append(ul, li);
            dom.append_text(li, label);
        }
        assert_eq!(
            render(&dom, ul),
            "ul [class_ \"list\"; ] [\nli [] [\ntxt \"one\";];\nli [] [\ntxt \"two\";];\nli [] [\ntxt \"three\";];]"
        );
    }

    #[test]
    fn test_comments() {
        let mut dom = ArenaDom::new();
        let c = dom.create_comment(r#"He said "hi""#);
        assert_eq!(render(&dom, c), r#"comment {|He said "hi"|}"#);

        let plain = dom.create_comment(" nav ");
        assert_eq!(render(&dom, plain), r#"comment " nav ""#);
    }

    #[test]
    fn test_tag_is_lowercased() {
        let mut dom = ArenaDom::new();
        let svg = dom.create_html_element("foreignObject", &[]);
        assert_eq!(render(&dom, svg), "foreignobject [] []");
    }

    #[test]
    fn test_unrepresentable_nodes_are_skipped() {
        let mut dom = ArenaDom::new();
        let div = dom.create_html_element("div", &[]);
        let pi = dom.create_pi("xml-stylesheet".into(), "href=\"a.css\"".into());
        let p = dom.create_html_element("p", &[]);
        dom.append(div, pi);
        dom.append(div, p);

        let result = serialize(&dom, div);
        assert_eq!(result.content, "div [] [\np [] [];]");
        assert_eq!(
            result.skipped,
            vec![SkippedNode {
                id: pi,
                kind: NodeKind::ProcessingInstruction
            }]
        );
    }

    #[test]
    fn test_document_root_is_skipped() {
        let dom = ArenaDom::new();
        let result = serialize(&dom, dom.document());
        assert_eq!(result.content, "");
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].kind, NodeKind::Document);
    }

    #[test]
    fn test_custom_catalog() {
        let mut catalog = Catalog::new();
        catalog.register_tags(TagKind::Void, &["widget"]);

        let mut dom = ArenaDom::new();
        let widget = dom.create_html_element("widget", &[("class", "x")]);
        let result = serialize_with(&dom, &catalog, widget);
        assert_eq!(result.content, r#"widget [class "x"; ] "#);
    }
}
