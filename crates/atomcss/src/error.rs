//! Error types for style input and stylesheet insertion.
//!
//! Compiling a style tree never fails. Errors only surface at the two
//! boundaries the engine does not control: decoding foreign input into a
//! [`StyleTree`](crate::StyleTree), and pushing a rule into a live sheet.

use thiserror::Error;

/// Errors raised while turning external input into a style tree.
///
/// # Examples
///
/// ```rust
/// use atomcss::{StyleError, StyleTree};
///
/// let result = StyleTree::from_json("[1, 2, 3]");
/// assert!(matches!(result, Err(StyleError::NotAnObject(_))));
/// ```
#[derive(Error, Debug)]
pub enum StyleError {
    /// The input was not valid JSON.
    #[error("invalid style JSON")]
    Json(#[from] serde_json::Error),

    /// The top-level value was something other than an object.
    ///
    /// The string names the kind of value that was found instead.
    #[error("style root must be an object, found {0}")]
    NotAnObject(&'static str),
}

/// Errors a live stylesheet may report when a rule is inserted.
///
/// The engine swallows these; they only show up in debug diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    /// The sheet refused the rule, typically because of syntax it does not support.
    #[error("rule not supported: {rule} ({reason})")]
    Rejected { rule: String, reason: String },

    /// The sheet is detached or otherwise cannot accept rules.
    #[error("stylesheet unavailable")]
    Unavailable,
}
