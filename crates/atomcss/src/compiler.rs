//! Recursive style-tree compiler.
//!
//! The compiler walks a [`StyleTree`] depth first, in key order, carrying the
//! selector fragments and media query of the enclosing blocks. Every scalar
//! leaf becomes one atomic rule; nested blocks only extend the context.
//!
//! ```text
//! { color: gold, "&:hover": { color: black }, "@media print": { color: red } }
//!
//! .t0{color:gold;}
//! .t1:hover{color:black;}
//! @media print{.t2{color:red;}}
//! ```

use crate::cache::{RuleCache, Signature};
use crate::format::{format_scalar, normalize_key};
use crate::keys::{KeyKind, classify_key, split_keys};
use crate::rule::{child_selector_fragment, class_name, declaration, wrap};
use crate::sink::Sink;
use crate::types::{Scalar, StyleTree, StyleValue};

/// Selector and media context of the block being compiled.
///
/// Each nested block gets its own extended copy; siblings never see each
/// other's extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileContext {
    selectors: Vec<String>,
    media: Option<String>,
}

impl CompileContext {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    pub fn media(&self) -> Option<&str> {
        self.media.as_deref()
    }

    fn with_selector(&self, fragment: String) -> Self {
        let mut selectors = self.selectors.clone();
        selectors.push(fragment);
        Self {
            selectors,
            media: self.media.clone(),
        }
    }

    /// An inner `@media` replaces the outer query rather than combining with it.
    fn with_media(&self, query: &str) -> Self {
        Self {
            selectors: self.selectors.clone(),
            media: Some(query.to_string()),
        }
    }
}

/// Borrowed view over an engine's mutable state for one compilation.
pub(crate) struct Compiler<'a> {
    pub prefix: &'a str,
    pub classes: &'a mut RuleCache<Signature, String>,
    pub keyframes: &'a mut RuleCache<String, ()>,
    pub sink: &'a mut Sink,
}

impl Compiler<'_> {
    /// Compiles `tree` and returns the class names of its leaves, in order.
    pub fn compile(&mut self, tree: &StyleTree, ctx: &CompileContext) -> Vec<String> {
        let mut tokens = Vec::new();
        for (raw_key, value) in tree.iter() {
            if value.is_falsy() {
                continue;
            }
            for key in split_keys(raw_key) {
                tokens.extend(self.compile_value(&key, value, ctx));
            }
        }
        tokens
    }

    fn compile_value(&mut self, key: &str, value: &StyleValue, ctx: &CompileContext) -> Vec<String> {
        match value {
            StyleValue::Nested(tree) => match classify_key(key) {
                KeyKind::Keyframes => {
                    self.compile_keyframes(key, tree);
                    Vec::new()
                }
                KeyKind::Media => self.compile(tree, &ctx.with_media(key)),
                KeyKind::Selector => {
                    self.compile(tree, &ctx.with_selector(child_selector_fragment(key)))
                }
            },
            // Lists hold alternatives for one property; nested lists and blocks are dropped.
            StyleValue::List(items) => items
                .iter()
                .filter_map(StyleValue::as_scalar)
                .map(|scalar| self.compile_leaf(key, scalar, ctx))
                .collect(),
            other => other
                .as_scalar()
                .map(|scalar| vec![self.compile_leaf(key, scalar, ctx)])
                .unwrap_or_default(),
        }
    }

    fn compile_leaf(&mut self, key: &str, value: Scalar<'_>, ctx: &CompileContext) -> String {
        let value = format_scalar(key, value);
        let signature = Signature {
            media: ctx.media.clone(),
            selectors: ctx.selectors.clone(),
            property: key.to_string(),
            value: value.to_string(),
        };

        let prefix = self.prefix;
        let sink = &mut *self.sink;
        self.classes.get_or_insert_with(signature, || {
            let class = class_name(prefix, sink.len());
            let selector = format!(".{class}{}", ctx.selectors.concat());
            let rule = wrap(
                ctx.media.as_deref(),
                &wrap(Some(&selector), &declaration(key, &value)),
            );
            log::trace!("minted {class} for {rule}");
            sink.insert(rule);
            class
        })
    }

    /// Renders `@keyframes name{stage{k:v;...}...}` and records it once.
    ///
    /// Keyframes contribute no class name; the rendered text is its own cache key.
    fn compile_keyframes(&mut self, key: &str, stages: &StyleTree) {
        let body: String = stages
            .iter()
            .filter_map(|(stage, properties)| match properties {
                StyleValue::Nested(properties) => {
                    Some(wrap(Some(stage), &render_declarations(properties)))
                }
                _ => None,
            })
            .collect();
        let rule = wrap(Some(key), &body);

        let sink = &mut *self.sink;
        self.keyframes.get_or_insert_with(rule.clone(), || {
            log::trace!("recorded {rule}");
            sink.insert(rule);
        });
    }
}

fn render_declarations(properties: &StyleTree) -> String {
    properties
        .iter()
        .filter_map(|(key, value)| {
            let key = normalize_key(key);
            let value = value.as_scalar()?;
            Some(declaration(&key, &format_scalar(&key, value)))
        })
        .collect()
}
