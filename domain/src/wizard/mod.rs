//! Quote wizard state machine.
//!
//! [`WizardState`] owns the current step, the request being filled in and
//! the visible error map. Each transition mutates the state and returns the
//! [`WizardEffect`]s the caller must carry out (focusing a field, dispatching
//! the submission, showing the confirmation). Transitions never perform I/O.

pub mod errors;
pub mod state;
pub mod step;

pub use errors::{ErrorKey, WizardErrors};
pub use state::{SubmissionStatus, WizardEffect, WizardEvent, WizardState};
pub use step::{Step, TOTAL_STEPS};
