//! The engine: one cache, one rule log, one configuration.

use crate::cache::{RuleCache, Signature};
use crate::compiler::{CompileContext, Compiler};
use crate::config::Config;
use crate::sink::{NonceSource, Sink, StyleHost};
use crate::types::StyleTree;

/// Compiles style trees into atomic class names and keeps the generated CSS.
///
/// Engines are independent: each has its own cache, rule log and class
/// numbering. Give engines that share a document distinct prefixes.
///
/// # Example
///
/// ```rust
/// use atomcss::{Config, Engine, StyleTree};
///
/// let mut engine = Engine::new(Config::default());
/// let style = StyleTree::new()
///     .with("color", "gold")
///     .with("&:hover", StyleTree::new().with("color", "black"));
///
/// assert_eq!(engine.class_names(&style), "t0 t1");
/// assert_eq!(engine.full_css(), ".t0{color:gold;}\n.t1:hover{color:black;}");
/// ```
#[derive(Debug)]
pub struct Engine {
    config: Config,
    classes: RuleCache<Signature, String>,
    keyframes: RuleCache<String, ()>,
    sink: Sink,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Engine {
    /// Creates an engine that keeps rules in memory only.
    pub fn new(config: Config) -> Self {
        let sink = Sink::new(None, config.is_debug());
        Self::from_parts(config, sink)
    }

    /// Creates an engine that mirrors its rules into a sheet created by `host`.
    ///
    /// The sheet's nonce is the configured one, or else whatever `nonce`
    /// finds. With `memory_only` set the host is never touched.
    pub fn with_host<H, N>(config: Config, host: &mut H, nonce: &N) -> Self
    where
        H: StyleHost + ?Sized,
        N: NonceSource + ?Sized,
    {
        if config.is_memory_only() {
            return Self::new(config);
        }
        let nonce = config
            .nonce_str()
            .map(str::to_string)
            .or_else(|| nonce.lookup());
        let sheet = host.create_sheet(nonce.as_deref());
        if config.is_debug() {
            log::debug!(
                "created stylesheet for prefix {:?} (nonce: {})",
                config.prefix_str(),
                nonce.is_some()
            );
        }
        let sink = Sink::new(Some(sheet), config.is_debug());
        Self::from_parts(config, sink)
    }

    fn from_parts(config: Config, sink: Sink) -> Self {
        Self {
            config,
            classes: RuleCache::new(),
            keyframes: RuleCache::new(),
            sink,
        }
    }

    /// Compiles `style` and returns its class names in key order.
    pub fn compile(&mut self, style: &StyleTree) -> Vec<String> {
        let mut compiler = Compiler {
            prefix: self.config.prefix_str(),
            classes: &mut self.classes,
            keyframes: &mut self.keyframes,
            sink: &mut self.sink,
        };
        compiler.compile(style, &CompileContext::root())
    }

    /// Compiles `style` and returns its class names joined by spaces.
    ///
    /// Compiling an equal tree again returns the same string and adds no rules.
    pub fn class_names(&mut self, style: &StyleTree) -> String {
        self.compile(style).join(" ").trim().to_string()
    }

    /// All generated rules, sorted, one per line.
    ///
    /// The sort only makes the output reproducible. It says nothing about
    /// cascade order.
    pub fn full_css(&self) -> String {
        let mut rules: Vec<&str> = self.sink.rules().iter().map(String::as_str).collect();
        rules.sort_unstable();
        rules.join("\n")
    }

    /// Generated rules in the order they were created.
    pub fn rules(&self) -> &[String] {
        self.sink.rules()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn prefix(&self) -> &str {
        self.config.prefix_str()
    }

    /// Whether rules are mirrored into a live stylesheet.
    pub fn has_sheet(&self) -> bool {
        self.sink.has_sheet()
    }
}
