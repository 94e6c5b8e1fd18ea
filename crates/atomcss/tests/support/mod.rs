//! Test doubles for the host-side collaborators.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use atomcss::{RuleSink, SheetError, StyleHost};

/// What a [`FakeSheet`] saw, shared with the test after the sheet moves into an engine.
#[derive(Debug, Default)]
pub struct SheetLog {
    pub inserted: Vec<(String, usize)>,
    pub rejected: Vec<String>,
}

/// In-memory stylesheet that rejects any rule containing `reject_marker`.
pub struct FakeSheet {
    log: Arc<Mutex<SheetLog>>,
    reject_marker: Option<&'static str>,
}

impl RuleSink for FakeSheet {
    fn rule_count(&self) -> usize {
        self.log.lock().unwrap().inserted.len()
    }

    fn insert_rule(&mut self, rule: &str, index: usize) -> Result<(), SheetError> {
        let mut log = self.log.lock().unwrap();
        if self.reject_marker.is_some_and(|marker| rule.contains(marker)) {
            log.rejected.push(rule.to_string());
            return Err(SheetError::Rejected {
                rule: rule.to_string(),
                reason: "unsupported".to_string(),
            });
        }
        log.inserted.push((rule.to_string(), index));
        Ok(())
    }
}

/// Host that records every style element it creates and the nonce it carried.
#[derive(Default)]
pub struct FakeHost {
    pub created: Vec<Option<String>>,
    pub sheet: Arc<Mutex<SheetLog>>,
    pub reject_marker: Option<&'static str>,
}

impl FakeHost {
    pub fn rejecting(marker: &'static str) -> Self {
        Self {
            reject_marker: Some(marker),
            ..Self::default()
        }
    }
}

impl StyleHost for FakeHost {
    fn create_sheet(&mut self, nonce: Option<&str>) -> Box<dyn RuleSink> {
        self.created.push(nonce.map(str::to_string));
        Box::new(FakeSheet {
            log: Arc::clone(&self.sheet),
            reject_marker: self.reject_marker,
        })
    }
}
