//! Atomic CSS-in-Rust.
//!
//! Re-exports the [`atomcss`] engine and adds a process-wide default engine
//! for call sites that do not want to thread one through.
//!
//! ```rust
//! use atomstyle::{class_names, full_css, style};
//!
//! let button = class_names(&style! {
//!     "padding" => 8,
//!     "&:hover" => { "opacity" => 0.8 },
//! });
//! assert!(!button.is_empty());
//! assert!(full_css().contains(":hover{opacity:0.8;}"));
//! ```

pub mod log_init;

use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;

pub use atomcss::*;
pub use log_init::init_logger;

/// The shared engine behind the convenience functions.
///
/// Created on first use with the default configuration and kept for the
/// life of the process. It keeps rules in memory only.
static DEFAULT_ENGINE: Lazy<Mutex<Engine>> = Lazy::new(|| {
    log::debug!("creating default style engine");
    Mutex::new(Engine::default())
});

fn default_engine() -> MutexGuard<'static, Engine> {
    DEFAULT_ENGINE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Runs `f` with exclusive access to the default engine.
pub fn with_default<R>(f: impl FnOnce(&mut Engine) -> R) -> R {
    let mut engine = default_engine();
    f(&mut *engine)
}

/// Compiles `style` with the default engine; see [`Engine::class_names`].
pub fn class_names(style: &StyleTree) -> String {
    with_default(|engine| engine.class_names(style))
}

/// All CSS generated by the default engine; see [`Engine::full_css`].
pub fn full_css() -> String {
    with_default(|engine| engine.full_css())
}
