use std::cell::RefCell;
use std::io::{BufRead, Write};

// ============================================================================
// Confirmer trait: the yes/no questions asked before risky actions
// ============================================================================

/// Asks the user to approve an action (cross-page fill, overwriting a
/// shortcut, deleting a preset).
pub trait Confirmer {
    fn confirm(&self, message: &str) -> bool;
}

/// Answers every question with the same fixed response.
pub struct AutoConfirm(pub bool);

impl Confirmer for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

/// Interactive confirmation over stdin/stderr. Anything other than `y` or
/// `yes` is a decline, including end of input.
pub struct StdinConfirm;

impl Confirmer for StdinConfirm {
    fn confirm(&self, message: &str) -> bool {
        eprint!("{} [y/N] ", message);
        let _ = std::io::stderr().flush();

        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(_) => matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

/// Records every question and answers with a fixed response. Useful for
/// asserting which confirmations a handler asked for.
pub struct RecordingConfirm {
    answer: bool,
    asked: RefCell<Vec<String>>,
}

impl RecordingConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn questions(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Confirmer for RecordingConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.asked.borrow_mut().push(message.to_string());
        self.answer
    }
}
