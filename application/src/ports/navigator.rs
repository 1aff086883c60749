//! Navigation port
//!
//! The wizard does not render or route by itself. It signals the navigator
//! when a field needs focus and when the session is complete.

use haul_domain::Field;

/// Receiver of navigation signals from the wizard
pub trait Navigator: Send + Sync {
    /// A field failed validation and should take input focus
    fn focus_field(&self, field: Field);

    /// The quote request was accepted; show the confirmation view
    fn show_confirmation(&self);
}

/// No-op navigator for when navigation signals are not needed
pub struct NoNavigation;

impl Navigator for NoNavigation {
    fn focus_field(&self, _field: Field) {}
    fn show_confirmation(&self) {}
}
