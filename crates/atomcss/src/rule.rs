//! CSS rule text assembly.
//!
//! Everything here is pure string building. The cache compares rule text and
//! signatures built from these helpers, so the same inputs must always give
//! the same bytes.

/// `key:value;`
pub fn declaration(key: &str, value: &str) -> String {
    format!("{key}:{value};")
}

/// Wraps `body` in a `label{...}` block, or returns it unchanged without a label.
///
/// Used for selector blocks and `@media` blocks alike.
///
/// ```rust
/// use atomcss::rule::wrap;
///
/// assert_eq!(wrap(Some(".t0"), "color:gold;"), ".t0{color:gold;}");
/// assert_eq!(wrap(None, "color:gold;"), "color:gold;");
/// ```
pub fn wrap(label: Option<&str>, body: &str) -> String {
    match label {
        Some(label) => format!("{label}{{{body}}}"),
        None => body.to_string(),
    }
}

/// Turns a nested selector key into the text appended to the parent selector.
///
/// `&`-prefixed keys attach directly (`&:hover` → `:hover`); anything else
/// becomes a descendant (`.button` → ` .button`).
pub fn child_selector_fragment(key: &str) -> String {
    match key.strip_prefix('&') {
        Some(suffix) => suffix.to_string(),
        None => format!(" {key}"),
    }
}

/// Builds the class name for the rule with sequence number `seq`.
pub fn class_name(prefix: &str, seq: usize) -> String {
    format!("{prefix}{}", to_base36(seq))
}

fn to_base36(mut n: usize) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[n % 36]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_text() {
        assert_eq!(wrap(Some("test"), "value"), "test{value}");
        assert_eq!(declaration("test", "value"), "test:value;");
    }

    #[test]
    fn fragments() {
        assert_eq!(child_selector_fragment("&.button"), ".button");
        assert_eq!(child_selector_fragment("&:hover"), ":hover");
        assert_eq!(child_selector_fragment(".button"), " .button");
        assert_eq!(child_selector_fragment("code"), " code");
    }

    #[test]
    fn class_names_count_in_base36() {
        assert_eq!(class_name("t", 0), "t0");
        assert_eq!(class_name("t", 9), "t9");
        assert_eq!(class_name("t", 10), "ta");
        assert_eq!(class_name("t", 35), "tz");
        assert_eq!(class_name("t", 36), "t10");
        assert_eq!(class_name("_cxs", 1295), "_cxszz");
    }
}
