//! Attribute name → DSL constructor.

use std::borrow::Cow;

use super::tables::{Catalog, NameClass};

/// Map a raw attribute name to the DSL identifier of its constructor.
///
/// First match wins:
///
/// | name                          | emitted                 |
/// |-------------------------------|-------------------------|
/// | reserved word (`class`)       | `class_`                |
/// | ARIA (`aria-label`)           | `Aria.label`            |
/// | htmx (`hx-push-url`)          | `Hx.push_url`           |
/// | prefixed htmx (`data-hx-get`) | `Hx.get`                |
/// | other hyphenated (`data-id`)  | `string_attr "data-id"` |
/// | anything else (`href`)        | `href`                  |
///
/// ```
/// use tagscribe::dsl::{Catalog, resolve_attr_name};
///
/// let catalog = Catalog::standard();
/// assert_eq!(resolve_attr_name(catalog, "type"), "type_");
/// assert_eq!(resolve_attr_name(catalog, "data-hx-swap-oob"), "Hx.swap_oob");
/// ```
pub fn resolve_attr_name<'a>(catalog: &Catalog, name: &'a str) -> Cow<'a, str> {
    match catalog.name_class(name) {
        Some(NameClass::Suffix) => return Cow::Owned(format!("{name}_")),
        Some(NameClass::Aria) => {
            let short = name.strip_prefix("aria-").unwrap_or(name);
            return Cow::Owned(format!("Aria.{short}"));
        }
        Some(NameClass::Hx) => {
            return Cow::Owned(hx_ident(name.strip_prefix("hx-").unwrap_or(name)));
        }
        None => {}
    }

    // htmx also accepts every attribute with a data- prefix
    if let Some(hx_name) = name.strip_prefix("data-")
        && catalog.is_hx(hx_name)
        && let Some(rest) = hx_name.strip_prefix("hx-")
    {
        return Cow::Owned(hx_ident(rest));
    }

    if name.contains('-') {
        return Cow::Owned(format!("string_attr \"{name}\""));
    }

    Cow::Borrowed(name)
}

fn hx_ident(rest: &str) -> String {
    format!("Hx.{}", rest.replace('-', "_"))
}
