//! Attribute and tag classification tables.
//!
//! Every decision the serializer makes about a name goes through a
//! [`Catalog`]: which constructor an attribute maps to, which literal form
//! its value takes, and whether an element has children at all. The
//! standard catalog is built once and shared.

use std::collections::HashMap;
use std::sync::LazyLock;

// ============================================================================
// Categories
// ============================================================================

/// How an attribute name is spelled on the DSL side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameClass {
    /// Collides with a reserved word; gets a trailing underscore.
    Suffix,
    /// WAI-ARIA attribute, lives in the `Aria` module.
    Aria,
    /// htmx attribute, lives in the `Hx` module.
    Hx,
}

/// Which literal form an attribute value takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueKind {
    /// Closed enumeration, emitted as a backtick-prefixed variant.
    PolyVariant,
    /// Numeric, emitted bare.
    Integer,
    /// Presence-only; the value is dropped.
    Boolean,
    /// Anything else: a string literal.
    #[default]
    String,
}

/// How an element's children are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TagKind {
    /// Never has children.
    Void,
    /// Takes its flattened text content as a single string.
    Text,
    /// Takes a list of child nodes.
    #[default]
    Normal,
}

// ============================================================================
// Standard tables
// ============================================================================

const SUFFIX_ATTRS: &[&str] = &[
    "cite", "class", "data", "for", "form", "label", "method", "object", "open", "slot", "span",
    "style", "title", "type",
];

const ARIA_ATTRS: &[&str] = &[
    "aria-activedescendant",
    "aria-atomic",
    "aria-autocomplete",
    "aria-braillelabel",
    "aria-brailleroledescription",
    "aria-busy",
    "aria-checked",
    "aria-colcount",
    "aria-colindextext",
    "aria-colspan",
    "aria-controls",
    "aria-current",
    "aria-describedby",
    "aria-description",
    "aria-details",
    "aria-disabled",
    "aria-errormessage",
    "aria-expanded",
    "aria-flowto",
    "aria-haspopup",
    "aria-hidden",
    "aria-invalid",
    "aria-keyshortcuts",
    "aria-label",
    "aria-labelledby",
    "aria-level",
    "aria-live",
    "aria-modal",
    "aria-multiline",
    "aria-multiselectable",
    "aria-orientation",
    "aria-owns",
    "aria-placeholder",
    "aria-posinset",
    "aria-pressed",
    "aria-readonly",
    "aria-relevant",
    "aria-required",
    "aria-roledescription",
    "aria-rowcount",
    "aria-rowindex",
    "aria-rowindextext",
    "aria-rowspan",
    "aria-selected",
    "aria-setsize",
    "aria-sort",
    "aria-valuemax",
    "aria-valuemin",
    "aria-valuenow",
    "aria-valuetext",
];

const HX_ATTRS: &[&str] = &[
    "hx-boost",
    "hx-confirm",
    "hx-delete",
    "hx-disable",
    "hx-disinherit",
    "hx-encoding",
    "hx-ext",
    "hx-get",
    "hx-headers",
    "hx-history",
    "hx-history-elt",
    "hx-include",
    "hx-indicator",
    "hx-on",
    "hx-params",
    "hx-patch",
    "hx-post",
    "hx-preload",
    "hx-preserve",
    "hx-prompt",
    "hx-push-url",
    "hx-put",
    "hx-replace-url",
    "hx-request",
    "hx-select",
    "hx-select-oob",
    "hx-sse-connect",
    "hx-sse-swap",
    "hx-swap",
    "hx-swap-oob",
    "hx-sync",
    "hx-target",
    "hx-trigger",
    "hx-validate",
    "hx-vals",
    "hx-ws-connect",
    "hx-ws-send",
];

const POLY_VARIANT_ATTRS: &[&str] = &[
    "autocapitalize",
    "autocomplete",
    "capture",
    "crossorigin",
    "decoding",
    "dir",
    "enctype",
    "fetchpriority",
    "formenctype",
    "formmethod",
    "hidden",
    "http_equiv",
    "inputmode",
    "kind",
    "low",
    "method",
    "preload",
    "referrerpolicy",
    "role",
    "translate",
    "wrap",
];

const INTEGER_ATTRS: &[&str] = &[
    "cols", "colspan", "maxlength", "minlength", "rows", "rowspan", "span", "start", "tabindex",
];

const BOOLEAN_ATTRS: &[&str] = &[
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "controls",
    "default",
    "defer",
    "disabled",
    "draggable",
    "formnovalidate",
    "ismap",
    "loop",
    "multiple",
    "muted",
    "novalidate",
    "open",
    "playsinline",
    "readonly",
    "required",
    "reversed",
    "selected",
];

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const TEXT_TAGS: &[&str] = &["option", "script", "style", "textarea", "title"];

// ============================================================================
// Catalog
// ============================================================================

/// Lookup tables for attribute and tag classification.
///
/// Each name lands in at most one category per table. When a name is
/// registered twice the first registration wins, so the build order of
/// [`Catalog::standard`] is also the precedence order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    names: HashMap<&'static str, NameClass>,
    values: HashMap<&'static str, ValueKind>,
    tags: HashMap<&'static str, TagKind>,
}

impl Catalog {
    /// Create an empty catalog: every attribute is a plain string attribute
    /// and every tag is normal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the standard catalog (cached).
    pub fn standard() -> &'static Self {
        static STANDARD: LazyLock<Catalog> = LazyLock::new(Catalog::build_standard);
        &STANDARD
    }

    fn build_standard() -> Self {
        let mut catalog = Self::new();

        catalog.register_names(NameClass::Suffix, SUFFIX_ATTRS);
        catalog.register_names(NameClass::Aria, ARIA_ATTRS);
        catalog.register_names(NameClass::Hx, HX_ATTRS);

        catalog.register_values(ValueKind::PolyVariant, POLY_VARIANT_ATTRS);
        catalog.register_values(ValueKind::Integer, INTEGER_ATTRS);
        catalog.register_values(ValueKind::Boolean, BOOLEAN_ATTRS);

        catalog.register_tags(TagKind::Void, VOID_TAGS);
        catalog.register_tags(TagKind::Text, TEXT_TAGS);

        catalog
    }

    /// Register attribute names under a naming class.
    pub fn register_names(&mut self, class: NameClass, names: &[&'static str]) {
        for &name in names {
            self.names.entry(name).or_insert(class);
        }
    }

    /// Register attribute names under a value kind.
    pub fn register_values(&mut self, kind: ValueKind, names: &[&'static str]) {
        for &name in names {
            self.values.entry(name).or_insert(kind);
        }
    }

    /// Register tag names under a tag kind.
    pub fn register_tags(&mut self, kind: TagKind, tags: &[&'static str]) {
        for &tag in tags {
            self.tags.entry(tag).or_insert(kind);
        }
    }

    /// Naming class of an attribute, if it has one.
    pub fn name_class(&self, name: &str) -> Option<NameClass> {
        self.names.get(name).copied()
    }

    /// Value kind of an attribute. Unknown attributes are strings.
    pub fn value_kind(&self, name: &str) -> ValueKind {
        self.values.get(name).copied().unwrap_or_default()
    }

    /// Kind of a (lower-cased) tag. Unknown tags are normal.
    pub fn tag_kind(&self, tag: &str) -> TagKind {
        self.tags.get(tag).copied().unwrap_or_default()
    }

    /// Whether `name` is a registered htmx attribute.
    pub fn is_hx(&self, name: &str) -> bool {
        self.name_class(name) == Some(NameClass::Hx)
    }

    /// All attribute names with the given naming class.
    #[cfg(test)]
    pub(crate) fn names_in(&self, class: NameClass) -> impl Iterator<Item = &'static str> + '_ {
        self.names
            .iter()
            .filter(move |&(_, c)| *c == class)
            .map(|(&name, _)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_sizes() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.names_in(NameClass::Suffix).count(), 14);
        assert_eq!(catalog.names_in(NameClass::Aria).count(), 50);
        assert_eq!(catalog.names_in(NameClass::Hx).count(), 37);

        let values_of = |kind| catalog.values.values().filter(|&&k| k == kind).count();
        assert_eq!(values_of(ValueKind::PolyVariant), 21);
        assert_eq!(values_of(ValueKind::Integer), 9);
        assert_eq!(values_of(ValueKind::Boolean), 21);
    }

    #[test]
    fn test_naming_is_independent_of_value_kind() {
        let catalog = Catalog::standard();
        // Reserved words still carry their own value kinds
        assert_eq!(catalog.name_class("method"), Some(NameClass::Suffix));
        assert_eq!(catalog.value_kind("method"), ValueKind::PolyVariant);
        assert_eq!(catalog.name_class("span"), Some(NameClass::Suffix));
        assert_eq!(catalog.value_kind("span"), ValueKind::Integer);
        assert_eq!(catalog.name_class("open"), Some(NameClass::Suffix));
        assert_eq!(catalog.value_kind("open"), ValueKind::Boolean);
    }

    #[test]
    fn test_unknown_names_use_defaults() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.name_class("href"), None);
        assert_eq!(catalog.value_kind("href"), ValueKind::String);
        assert_eq!(catalog.tag_kind("custom-widget"), TagKind::Normal);
        assert_eq!(catalog.tag_kind("div"), TagKind::Normal);
    }

    #[test]
    fn test_tag_kinds() {
        let catalog = Catalog::standard();
        for tag in VOID_TAGS {
            assert_eq!(catalog.tag_kind(tag), TagKind::Void, "{tag}");
        }
        for tag in TEXT_TAGS {
            assert_eq!(catalog.tag_kind(tag), TagKind::Text, "{tag}");
        }
    }

    #[test]
    fn test_first_registration_wins() {
        let mut catalog = Catalog::new();
        catalog.register_values(ValueKind::Integer, &["size"]);
        catalog.register_values(ValueKind::Boolean, &["size"]);
        assert_eq!(catalog.value_kind("size"), ValueKind::Integer);
    }

    #[test]
    fn test_hx_membership() {
        let catalog = Catalog::standard();
        assert!(catalog.is_hx("hx-get"));
        assert!(catalog.is_hx("hx-history-elt"));
        assert!(!catalog.is_hx("hx-unknown"));
        assert!(!catalog.is_hx("aria-label"));
    }
}
