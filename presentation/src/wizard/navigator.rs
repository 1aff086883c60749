//! Console implementation of the navigation port

use colored::Colorize;
use haul_application::Navigator;
use haul_domain::Field;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Prints focus hints and records navigation for the REPL to act on
///
/// The confirmation page is rendered by the REPL once any submission
/// spinner has been cleared.
#[derive(Default)]
pub struct ConsoleNavigator {
    focus: Mutex<Option<Field>>,
    confirmed: AtomicBool,
}

impl ConsoleNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The field that should be prompted first, consumed on read
    pub fn take_focus(&self) -> Option<Field> {
        self.focus.lock().ok().and_then(|mut focus| focus.take())
    }

    /// Whether the confirmation view was requested, consumed on read
    pub fn take_confirmation(&self) -> bool {
        self.confirmed.swap(false, Ordering::SeqCst)
    }
}

impl Navigator for ConsoleNavigator {
    fn focus_field(&self, field: Field) {
        println!("{} {}", "->".cyan(), format!("Check {}", field.label()).bold());
        if let Ok(mut focus) = self.focus.lock() {
            *focus = Some(field);
        }
    }

    fn show_confirmation(&self) {
        self.confirmed.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_is_taken_once() {
        let navigator = ConsoleNavigator::new();
        navigator.focus_field(Field::Phone);

        assert_eq!(navigator.take_focus(), Some(Field::Phone));
        assert_eq!(navigator.take_focus(), None);
    }

    #[test]
    fn test_confirmation_is_recorded() {
        let navigator = ConsoleNavigator::new();
        assert!(!navigator.take_confirmation());
        navigator.show_confirmation();
        assert!(navigator.take_confirmation());
        assert!(!navigator.take_confirmation());
    }
}
