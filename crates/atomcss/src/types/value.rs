//! The style tree: the input of the compiler.

/// A leaf value borrowed out of a [`StyleValue`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Text(&'a str),
    Number(f64),
}

/// A value stored under a key of a [`StyleTree`].
///
/// `Null` and `Bool` never produce CSS. They exist so optional fields and
/// decoded JSON can be represented without a separate validation pass; the
/// compiler drops them.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Null,
    Bool(bool),
    Text(String),
    Number(f64),
    /// Multiple values for the same property, one rule each (`display: [flex, -webkit-flex]`).
    List(Vec<StyleValue>),
    /// A nested selector, `@media` or `@keyframes` block.
    Nested(StyleTree),
}

impl StyleValue {
    /// Returns `true` for values that are skipped before any key processing.
    ///
    /// Zero is a meaningful CSS value and is not falsy here.
    pub fn is_falsy(&self) -> bool {
        match self {
            StyleValue::Null | StyleValue::Bool(false) => true,
            StyleValue::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    /// Borrows the value as a scalar leaf, if it is one.
    pub fn as_scalar(&self) -> Option<Scalar<'_>> {
        match self {
            StyleValue::Text(text) => Some(Scalar::Text(text)),
            StyleValue::Number(n) => Some(Scalar::Number(*n)),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            StyleValue::Null => "null",
            StyleValue::Bool(_) => "boolean",
            StyleValue::Text(_) => "text",
            StyleValue::Number(_) => "number",
            StyleValue::List(_) => "list",
            StyleValue::Nested(_) => "object",
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Bool(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

macro_rules! number_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StyleValue {
                fn from(value: $ty) -> Self {
                    StyleValue::Number(value as f64)
                }
            }
        )*
    };
}

number_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<StyleTree> for StyleValue {
    fn from(value: StyleTree) -> Self {
        StyleValue::Nested(value)
    }
}

impl<T: Into<StyleValue>> From<Vec<T>> for StyleValue {
    fn from(values: Vec<T>) -> Self {
        StyleValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(StyleValue::Null, Into::into)
    }
}

/// An insertion-ordered mapping from style keys to values.
///
/// Iteration order is the order keys were first inserted, which is also the
/// order the compiler visits them. Re-inserting an existing key replaces its
/// value in place.
///
/// # Example
///
/// ```rust
/// use atomcss::StyleTree;
///
/// let tree = StyleTree::new()
///     .with("color", "gold")
///     .with("margin", 0)
///     .with("&:hover", StyleTree::new().with("color", "black"));
/// assert_eq!(tree.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTree {
    entries: Vec<(String, StyleValue)>,
}

impl StyleTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key`, replacing any existing value at its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleTree {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = StyleTree::new();
        for (key, value) in iter {
            tree.insert(key, value);
        }
        tree
    }
}
