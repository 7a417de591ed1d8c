//! User-visible notifications, decoupled from the data operations

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
}

/// One transient message for the user
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotifyKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotifyKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotifyKind::Error,
            message: message.into(),
        }
    }
}

/// Sink for catalog notifications. The catalog calls this after every
/// mutation attempt; implementations must not influence the data path.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Prints notifications to the terminal
pub struct TermNotifier {
    quiet: bool,
}

impl TermNotifier {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for TermNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotifyKind::Success => {
                if !self.quiet {
                    println!("{} {}", "✓".green(), notification.message);
                }
            }
            // Errors always print, even with --quiet
            NotifyKind::Error => {
                eprintln!("{}: {}", "Error".red().bold(), notification.message);
            }
        }
    }
}
