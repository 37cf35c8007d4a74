//! Hand-written utility stubs for registry, resolver, and session tests

use super::contract::Utility;
use super::error::UtilityError;
use crate::config::Secrets;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Stub utility with a fixed name and alias list that counts its runs
pub struct StubUtility {
    name: String,
    aliases: Vec<&'static str>,
    runs: AtomicUsize,
    configures: AtomicUsize,
    fail: bool,
}

impl StubUtility {
    pub fn new(name: &str, aliases: &[&'static str]) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            aliases: aliases.to_vec(),
            runs: AtomicUsize::new(0),
            configures: AtomicUsize::new(0),
            fail: false,
        })
    }

    /// Stub whose `run` always fails
    pub fn failing(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            aliases: Vec::new(),
            runs: AtomicUsize::new(0),
            configures: AtomicUsize::new(0),
            fail: true,
        })
    }

    pub fn run_count(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }

    pub fn configure_count(&self) -> usize {
        self.configures.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Utility for StubUtility {
    fn name(&self) -> &str {
        &self.name
    }

    fn aliases(&self) -> &[&str] {
        &self.aliases
    }

    fn configure(&self, _secrets: &Secrets) {
        self.configures.fetch_add(1, Ordering::SeqCst);
    }

    async fn run(&self) -> Result<(), UtilityError> {
        self.runs.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(UtilityError::Other("stub failure".to_string()));
        }
        Ok(())
    }
}
