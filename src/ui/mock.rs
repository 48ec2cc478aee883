//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use specrig::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Fetching template");
//! ui.success("Done!");
//!
//! assert!(ui.has_message("Fetching"));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    spinners: Vec<String>,
    spinner_outcomes: Rc<RefCell<Vec<SpinnerOutcome>>>,
}

/// How a spinner started on a [`MockUI`] finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinnerOutcome {
    Success(String),
    Error(String),
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Messages of every spinner that was started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Final states of finished spinners, in finish order.
    pub fn spinner_outcomes(&self) -> Vec<SpinnerOutcome> {
        self.spinner_outcomes.borrow().clone()
    }

    /// Check if a message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            outcomes: Rc::clone(&self.spinner_outcomes),
        })
    }
}

struct MockSpinner {
    outcomes: Rc<RefCell<Vec<SpinnerOutcome>>>,
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.outcomes
            .borrow_mut()
            .push(SpinnerOutcome::Success(msg.to_string()));
    }

    fn finish_error(&mut self, msg: &str) {
        self.outcomes
            .borrow_mut()
            .push(SpinnerOutcome::Error(msg.to_string()));
    }
}
