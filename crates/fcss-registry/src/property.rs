//! Property names and declaration text.

use fcss_style::{Scalar, StyleValue};

/// Properties that accept bare numbers, so no `px` is appended.
const UNITLESS: &[&str] = &[
    "animation-iteration-count",
    "border-image-outset",
    "border-image-slice",
    "border-image-width",
    "box-flex",
    "box-flex-group",
    "box-ordinal-group",
    "column-count",
    "columns",
    "counter-increment",
    "counter-reset",
    "flex",
    "flex-grow",
    "flex-positive",
    "flex-shrink",
    "flex-negative",
    "flex-order",
    "font-weight",
    "grid-area",
    "grid-column",
    "grid-column-end",
    "grid-column-span",
    "grid-column-start",
    "grid-row",
    "grid-row-end",
    "grid-row-span",
    "grid-row-start",
    "line-clamp",
    "line-height",
    "opacity",
    "order",
    "orphans",
    "tab-size",
    "widows",
    "z-index",
    "zoom",
    // SVG
    "fill-opacity",
    "flood-opacity",
    "stop-opacity",
    "stroke-dasharray",
    "stroke-dashoffset",
    "stroke-miterlimit",
    "stroke-opacity",
    "stroke-width",
];

const VENDOR_PREFIXES: &[&str] = &["-webkit-", "-ms-", "-moz-", "-o-"];

/// Convert a camelCase key into a hyphenated CSS property name.
///
/// `backgroundColor` becomes `background-color`; a leading `ms-` gains the
/// vendor dash (`msTransform` becomes `-ms-transform`).
pub fn hyphenate(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    if out.starts_with("ms-") {
        out.insert(0, '-');
    }
    out
}

/// Whether numeric values of `property` are emitted without a unit.
pub fn is_unitless(property: &str) -> bool {
    let bare = VENDOR_PREFIXES
        .iter()
        .find_map(|prefix| property.strip_prefix(prefix))
        .unwrap_or(property);
    UNITLESS.contains(&bare)
}

fn push_declaration(out: &mut String, property: &str, value: &Scalar) {
    if !out.is_empty() {
        out.push(';');
    }
    out.push_str(property);
    out.push(':');
    out.push_str(&value.to_string());
    if matches!(value.as_number(), Some(n) if n != 0.0 && !is_unitless(property)) {
        out.push_str("px");
    }
}

/// Serialize sorted `(property, value)` pairs into declaration text.
///
/// Fallback lists emit one declaration per element; `Null` and nested
/// blocks contribute nothing.
pub fn stringify<'a, I>(properties: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a StyleValue)>,
{
    let mut out = String::new();
    for (property, value) in properties {
        match value {
            StyleValue::Scalar(scalar) => push_declaration(&mut out, property, scalar),
            StyleValue::List(values) => {
                for scalar in values {
                    push_declaration(&mut out, property, scalar);
                }
            }
            StyleValue::Object(_) | StyleValue::Null => {}
        }
    }
    out
}
