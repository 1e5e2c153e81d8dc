use crate::ports::outbound::DeprecationChecker;
use owo_colors::{OwoColorize, Stream};
use std::cell::RefCell;
use std::collections::HashSet;

/// StderrDeprecationChecker adapter warning about deprecated features on stderr
///
/// Each distinct message is printed once per checker instance. The check
/// never fails: deprecated features stay usable.
#[derive(Debug, Default)]
pub struct StderrDeprecationChecker {
    reported: RefCell<HashSet<String>>,
}

impl StderrDeprecationChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` and returns whether it had not been seen before
    fn first_occurrence(&self, message: &str) -> bool {
        self.reported.borrow_mut().insert(message.to_string())
    }

    pub fn format_warning(warn_only: bool, message: &str) -> String {
        let label = if warn_only {
            "⚠️  Deprecation notice:"
        } else {
            "⚠️  Deprecation warning (scheduled for removal):"
        };
        format!("{} {}", label, message)
    }
}

impl DeprecationChecker for StderrDeprecationChecker {
    fn check(&self, warn_only: bool, message: &str) {
        if !self.first_occurrence(message) {
            return;
        }

        let warning = Self::format_warning(warn_only, message);
        eprintln!(
            "{}",
            warning.if_supports_color(Stream::Stderr, |text| text.yellow())
        );
    }
}
