//! Submission data: the outbound lead payload, the analytics event and the
//! outcome of one submission attempt.

pub mod event;
pub mod outcome;
pub mod payload;

pub use event::{LEAD_EVENT_NAME, LeadEvent};
pub use outcome::{Outcome, SUBMISSION_ERROR_MESSAGE};
pub use payload::LeadPayload;
