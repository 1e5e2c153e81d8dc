use gradle_inventory::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock DeprecationChecker that captures every check
#[derive(Default, Clone)]
pub struct MockDeprecationChecker {
    pub checks: Arc<Mutex<Vec<(bool, String)>>>,
}

impl MockDeprecationChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_checks(&self) -> Vec<(bool, String)> {
        self.checks.lock().unwrap().clone()
    }

    pub fn check_count(&self) -> usize {
        self.checks.lock().unwrap().len()
    }
}

impl DeprecationChecker for MockDeprecationChecker {
    fn check(&self, warn_only: bool, message: &str) {
        self.checks
            .lock()
            .unwrap()
            .push((warn_only, message.to_string()));
    }
}
