//! Engine configuration.

use bitflags::bitflags;

bitflags! {
    /// Boolean engine options.
    ///
    /// ```
    /// use atomcss::ConfigFlags;
    ///
    /// let flags = ConfigFlags::DEBUG | ConfigFlags::MEMORY_ONLY;
    /// assert!(flags.contains(ConfigFlags::DEBUG));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ConfigFlags: u8 {
        /// Log every live-sheet insertion and rejection.
        const DEBUG = 1 << 0;
        /// Never create or touch a live stylesheet; keep the rule log only.
        const MEMORY_ONLY = 1 << 1;
    }
}

/// Settings resolved once when an [`Engine`](crate::Engine) is built.
///
/// ```
/// use atomcss::Config;
///
/// let config = Config::new().prefix("_cxs").debug(true);
/// assert_eq!(config.prefix_str(), "_cxs");
/// assert!(config.is_debug());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    prefix: String,
    nonce: Option<String>,
    flags: ConfigFlags,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: "t".to_string(),
            nonce: None,
            flags: ConfigFlags::empty(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Class-name namespace. Engines with distinct prefixes never share class names.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Explicit stylesheet nonce; overrides the host's nonce source.
    pub fn nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    pub fn debug(mut self, enabled: bool) -> Self {
        self.flags.set(ConfigFlags::DEBUG, enabled);
        self
    }

    pub fn memory_only(mut self, enabled: bool) -> Self {
        self.flags.set(ConfigFlags::MEMORY_ONLY, enabled);
        self
    }

    pub fn prefix_str(&self) -> &str {
        &self.prefix
    }

    pub fn nonce_str(&self) -> Option<&str> {
        self.nonce.as_deref()
    }

    pub fn flags(&self) -> ConfigFlags {
        self.flags
    }

    pub fn is_debug(&self) -> bool {
        self.flags.contains(ConfigFlags::DEBUG)
    }

    pub fn is_memory_only(&self) -> bool {
        self.flags.contains(ConfigFlags::MEMORY_ONLY)
    }
}
