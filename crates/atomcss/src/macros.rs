//! Declarative style tree construction.

/// Builds a [`StyleTree`](crate::StyleTree) from a literal.
///
/// Keys are string literals. Values are any single token tree convertible
/// into a [`StyleValue`](crate::StyleValue); `{ ... }` nests a block and
/// `[ ... ]` lists alternative values. Wrap longer expressions (including
/// negative numbers) in parentheses.
///
/// # Example
///
/// ```rust
/// use atomcss::{Engine, style};
///
/// let style = style! {
///     "color" => "gold",
///     "display" => ["flex", "-webkit-flex"],
///     "marginTop" => (-4),
///     "&:hover" => {
///         "color" => "black",
///     },
/// };
///
/// let mut engine = Engine::default();
/// assert_eq!(engine.class_names(&style), "t0 t1 t2 t3 t4");
/// ```
#[macro_export]
macro_rules! style {
    (@value { $($inner:tt)* }) => {
        $crate::StyleValue::Nested($crate::style!($($inner)*))
    };

    (@value [ $($item:tt),* $(,)? ]) => {
        $crate::StyleValue::List(vec![$($crate::style!(@value $item)),*])
    };

    (@value $value:expr) => {
        $crate::StyleValue::from($value)
    };

    () => {
        $crate::StyleTree::new()
    };

    ($($key:literal => $value:tt),+ $(,)?) => {{
        let mut tree = $crate::StyleTree::new();
        $(tree.insert($key, $crate::style!(@value $value));)+
        tree
    }};
}
