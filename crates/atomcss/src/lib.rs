//! # atomcss - atomic CSS compiler
//!
//! Turns nested style trees into deduplicated, single-declaration CSS rules
//! and the short class names that select them.
//!
//! ## Quick Start
//!
//! ```rust
//! use atomcss::{Config, Engine, style};
//!
//! let mut engine = Engine::new(Config::new().prefix("x"));
//! let classes = engine.class_names(&style! {
//!     "color" => "gold",
//!     "borderWidth" => 2,
//!     ".icon" => { "opacity" => 0.5 },
//!     "@media print" => { "color" => "black" },
//! });
//!
//! assert_eq!(classes, "x0 x1 x2 x3");
//! assert_eq!(
//!     engine.full_css(),
//!     ".x0{color:gold;}\n.x1{border-width:2px;}\n.x2 .icon{opacity:0.5;}\n@media print{.x3{color:black;}}"
//! );
//! ```
//!
//! ## Keys
//!
//! - camelCase properties become kebab-case (`borderWidth` → `border-width`)
//! - `"a, b"` applies the same value to both keys
//! - `&:hover`, `&.active` attach to the element's own class
//! - `.child`, `code` select descendants
//! - `@media <query>` wraps the block's rules in a media query
//! - `@keyframes <name>` emits an animation block and no class name
//!
//! ## Values
//!
//! Numbers get a `px` unit unless they are zero or the property is
//! dimensionless (`flex`, `opacity`, `z-index`, ...). Lists produce one rule
//! per entry. `null`, `false` and empty strings are ignored.
//!
//! ## Modules
//!
//! - [`types`]: the style tree
//! - [`format`]: key and value normalization
//! - [`rule`]: rule text assembly
//! - [`keys`]: compound key splitting and at-rule detection
//! - [`cache`]: deduplication store
//! - [`compiler`]: the recursive compiler
//! - [`sink`]: rule log and live stylesheet collaborators
//! - [`engine`]: the public entry point

pub mod cache;
pub mod compiler;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod keys;
pub mod macros;
pub mod rule;
pub mod sink;
pub mod types;

pub use config::{Config, ConfigFlags};
pub use engine::Engine;
pub use error::{SheetError, StyleError};
pub use sink::{MetaLookup, MetaNonce, NoNonce, NonceSource, RuleSink, StyleHost};
pub use types::{Scalar, StyleTree, StyleValue};
