//! Structural interpretation of style keys.
//!
//! A key that holds a nested block is either an at-rule the compiler handles
//! specially or a selector that extends the current context.

use nom::{IResult, branch::alt, bytes::complete::tag, combinator::map};

use crate::format::normalize_key;

/// What a key holding a nested block stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// `@keyframes <name>`: an opaque animation block.
    Keyframes,
    /// `@media <query>`: sets the media context for the block.
    Media,
    /// Any other key: a nested selector (`&:hover`, `.button`, `code`).
    Selector,
}

fn parse_at_rule(input: &str) -> IResult<&str, KeyKind> {
    alt((
        map(tag("@keyframes"), |_| KeyKind::Keyframes),
        map(tag("@media"), |_| KeyKind::Media),
    ))(input)
}

/// Classifies an already normalized key.
///
/// ```rust
/// use atomcss::keys::{classify_key, KeyKind};
///
/// assert_eq!(classify_key("@media print"), KeyKind::Media);
/// assert_eq!(classify_key("@keyframes spin"), KeyKind::Keyframes);
/// assert_eq!(classify_key("&:hover"), KeyKind::Selector);
/// ```
pub fn classify_key(key: &str) -> KeyKind {
    parse_at_rule(key)
        .map(|(_, kind)| kind)
        .unwrap_or(KeyKind::Selector)
}

/// Splits a compound key (`"code, kbd,samp"`) into normalized keys.
///
/// Each piece shares the value and context of the original key.
pub fn split_keys(key: &str) -> impl Iterator<Item = String> + '_ {
    key.split(',').map(normalize_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims() {
        let keys: Vec<String> = split_keys("code, kbd,samp").collect();
        assert_eq!(keys, ["code", "kbd", "samp"]);
    }

    #[test]
    fn single_key_is_normalized() {
        let keys: Vec<String> = split_keys(" fontSize ").collect();
        assert_eq!(keys, ["font-size"]);
    }

    #[test]
    fn at_rules_need_exact_prefix() {
        assert_eq!(classify_key("@mediaprint"), KeyKind::Media);
        assert_eq!(classify_key(" @media print"), KeyKind::Selector);
        assert_eq!(classify_key("@font-face"), KeyKind::Selector);
        assert_eq!(classify_key(".button"), KeyKind::Selector);
    }
}
