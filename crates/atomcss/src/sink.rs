//! Where generated rules go.
//!
//! The in-memory rule log is the source of truth. A live stylesheet, when the
//! host provides one, receives a copy of every rule; its failures are logged
//! (with `debug` enabled) and otherwise ignored.

use std::fmt;

use crate::error::SheetError;

/// A live rule list, such as a document stylesheet.
pub trait RuleSink: Send {
    /// Number of rules currently in the sheet.
    fn rule_count(&self) -> usize;

    /// Inserts `rule` at `index`. The sheet may reject rules it cannot parse.
    fn insert_rule(&mut self, rule: &str, index: usize) -> Result<(), SheetError>;
}

/// Creates the style-carrier element a live sheet belongs to.
pub trait StyleHost {
    /// Creates a new sheet, attaching `nonce` to its element before it is
    /// inserted into the document.
    fn create_sheet(&mut self, nonce: Option<&str>) -> Box<dyn RuleSink>;
}

/// Supplies the security nonce for a newly created stylesheet.
pub trait NonceSource {
    fn lookup(&self) -> Option<String>;
}

impl<F: Fn() -> Option<String>> NonceSource for F {
    fn lookup(&self) -> Option<String> {
        self()
    }
}

/// A nonce source that never finds one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNonce;

impl NonceSource for NoNonce {
    fn lookup(&self) -> Option<String> {
        None
    }
}

/// Read access to `<meta property=...>` attributes of the host document.
pub trait MetaLookup {
    fn meta_attribute(&self, property: &str, attribute: &str) -> Option<String>;
}

/// Reads the nonce from `<meta property="csp-nonce" content="...">`.
#[derive(Debug, Clone)]
pub struct MetaNonce<M>(pub M);

impl<M: MetaLookup> NonceSource for MetaNonce<M> {
    fn lookup(&self) -> Option<String> {
        self.0
            .meta_attribute("csp-nonce", "content")
            .filter(|nonce| !nonce.is_empty())
    }
}

/// Append-only rule log with an optional live sheet mirror.
pub struct Sink {
    rules: Vec<String>,
    sheet: Option<Box<dyn RuleSink>>,
    debug: bool,
}

impl Sink {
    pub fn new(sheet: Option<Box<dyn RuleSink>>, debug: bool) -> Self {
        Self {
            rules: Vec::new(),
            sheet,
            debug,
        }
    }

    /// Records `rule` and mirrors it into the live sheet, if any.
    pub fn insert(&mut self, rule: String) {
        if let Some(sheet) = self.sheet.as_mut() {
            let index = sheet.rule_count();
            match sheet.insert_rule(&rule, index) {
                Ok(()) if self.debug => log::debug!("rule inserted: {rule}"),
                Err(err) if self.debug => log::warn!("rule not supported: {rule}: {err}"),
                _ => {}
            }
        }
        self.rules.push(rule);
    }

    /// Rules in the order they were generated.
    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn has_sheet(&self) -> bool {
        self.sheet.is_some()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("rules", &self.rules)
            .field("has_sheet", &self.sheet.is_some())
            .field("debug", &self.debug)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rejecting;

    impl RuleSink for Rejecting {
        fn rule_count(&self) -> usize {
            0
        }

        fn insert_rule(&mut self, rule: &str, _index: usize) -> Result<(), SheetError> {
            Err(SheetError::Rejected {
                rule: rule.to_string(),
                reason: "unsupported".into(),
            })
        }
    }

    #[test]
    fn rejected_rules_still_logged() {
        let mut sink = Sink::new(Some(Box::new(Rejecting)), true);
        sink.insert("::-moz-thing{color:red;}".into());
        assert_eq!(sink.rules(), ["::-moz-thing{color:red;}"]);
    }

    struct Meta(Option<&'static str>);

    impl MetaLookup for Meta {
        fn meta_attribute(&self, property: &str, attribute: &str) -> Option<String> {
            assert_eq!((property, attribute), ("csp-nonce", "content"));
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn meta_nonce() {
        assert_eq!(MetaNonce(Meta(Some("abc"))).lookup().as_deref(), Some("abc"));
        assert_eq!(MetaNonce(Meta(Some(""))).lookup(), None);
        assert_eq!(MetaNonce(Meta(None)).lookup(), None);
    }
}
