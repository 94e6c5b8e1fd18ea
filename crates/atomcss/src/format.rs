//! Property key and value normalization.
//!
//! Style trees use camelCase keys and bare numbers. CSS wants kebab-case and
//! explicit units, except on the properties that are dimensionless.

use std::borrow::Cow;

use phf::phf_set;

use crate::types::Scalar;

/// Properties whose numeric values are printed without a `px` unit.
pub static UNITLESS_PROPERTIES: phf::Set<&'static str> = phf_set! {
    "animation-iteration-count",
    "border-image-outset",
    "border-image-slice",
    "border-image-width",
    "box-flex",
    "box-flex-group",
    "box-ordinal-group",
    "column-count",
    "columns",
    "flex",
    "flex-grow",
    "flex-positive",
    "flex-shrink",
    "flex-negative",
    "flex-order",
    "-ms-flex",
    "-ms-flex-grow",
    "-ms-flex-positive",
    "-ms-flex-shrink",
    "-ms-flex-negative",
    "-ms-flex-order",
    "grid-row",
    "grid-row-end",
    "grid-row-span",
    "grid-row-start",
    "grid-column",
    "grid-column-end",
    "grid-column-span",
    "grid-column-start",
    "-ms-grid-row",
    "-ms-grid-row-end",
    "-ms-grid-row-span",
    "-ms-grid-row-start",
    "-ms-grid-column",
    "-ms-grid-column-end",
    "-ms-grid-column-span",
    "-ms-grid-column-start",
    "font-weight",
    "line-clamp",
    "line-height",
    "opacity",
    "order",
    "orphans",
    "tab-size",
    "widows",
    "z-index",
    "zoom",
    "fill-opacity",
    "flood-opacity",
    "stop-opacity",
    "stroke-dasharray",
    "stroke-dashoffset",
    "stroke-miterlimit",
    "stroke-opacity",
    "stroke-width",
};

/// Converts a style key to its CSS spelling.
///
/// The key is trimmed, a hyphen is inserted before every uppercase ASCII
/// letter and before a leading `ms` vendor prefix, and the result is
/// lowercased. Selector and at-rule keys go through the same conversion.
///
/// ```rust
/// use atomcss::format::normalize_key;
///
/// assert_eq!(normalize_key("borderWidth"), "border-width");
/// assert_eq!(normalize_key("msFlex"), "-ms-flex");
/// assert_eq!(normalize_key("  ABCD "), "-a-b-c-d");
/// ```
pub fn normalize_key(key: &str) -> String {
    let key = key.trim();
    let mut out = String::with_capacity(key.len() + 4);
    if key.starts_with("ms") {
        out.push('-');
    }
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
        }
        out.push(ch);
    }
    out.to_lowercase()
}

/// Formats a leaf value for the (already normalized) property `key`.
///
/// Text passes through untouched. Zero is always printed bare; other
/// numbers get a `px` unit unless `key` is in [`UNITLESS_PROPERTIES`].
pub fn format_scalar<'a>(key: &str, value: Scalar<'a>) -> Cow<'a, str> {
    match value {
        Scalar::Text(text) => Cow::Borrowed(text),
        Scalar::Number(n) if n == 0.0 => Cow::Borrowed("0"),
        Scalar::Number(n) if UNITLESS_PROPERTIES.contains(key) || !n.is_finite() => {
            Cow::Owned(format_number(n))
        }
        Scalar::Number(n) => Cow::Owned(format!("{}px", format_number(n))),
    }
}

/// Prints a number the way CSS authors write it: `10`, `1.5`, `-2`.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_keys() {
        let keys = ["TextText", "   asdf   ", "msTest", "asdfAsdf", "@media print", "&:hover"];
        let normalized: Vec<String> = keys.iter().map(|k| normalize_key(k)).collect();
        assert_eq!(
            normalized,
            ["-text-text", "asdf", "-ms-test", "asdf-asdf", "@media print", "&:hover"]
        );
    }

    #[test]
    fn ms_prefix_only_at_start() {
        assert_eq!(normalize_key("items"), "items");
        assert_eq!(normalize_key("msGridRow"), "-ms-grid-row");
    }

    #[test]
    fn zero_has_no_unit() {
        assert_eq!(format_scalar("margin", Scalar::Number(0.0)), "0");
        assert_eq!(format_scalar("margin", Scalar::Number(-0.0)), "0");
    }

    #[test]
    fn numbers_get_px_unless_unitless() {
        assert_eq!(format_scalar("border-width", Scalar::Number(20.0)), "20px");
        assert_eq!(format_scalar("top", Scalar::Number(-1.5)), "-1.5px");
        assert_eq!(format_scalar("flex", Scalar::Number(10.0)), "10");
        assert_eq!(format_scalar("-ms-flex-order", Scalar::Number(2.0)), "2");
        assert_eq!(format_scalar("opacity", Scalar::Number(0.5)), "0.5");
    }

    #[test]
    fn text_passes_through() {
        assert_eq!(format_scalar("width", Scalar::Text("10em")), "10em");
    }
}
