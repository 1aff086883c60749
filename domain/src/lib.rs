//! Domain layer for haul-quote
//!
//! This crate contains the core business logic, entities, and value objects
//! of the livestock hauling quote wizard. It has no dependencies on
//! infrastructure or presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Quote request
//!
//! [`QuoteRequest`] is filled in field by field across five [`Step`]s.
//! Each step owns a fixed set of fields and one validation rule
//! ([`validate_step`]), built from per-field [`Verdict`]s.
//!
//! ## Wizard
//!
//! [`WizardState`] is a state machine over the steps. Transitions mutate
//! the state and return [`WizardEffect`]s for the caller to execute; the
//! submission itself happens outside the domain and is reported back as an
//! [`Outcome`].

pub mod config;
pub mod core;
pub mod normalize;
pub mod quote;
pub mod submission;
pub mod validation;
pub mod wizard;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::error::DomainError;
pub use normalize::normalize_phone;
pub use quote::{Field, QuoteRequest, Species, Timeline};
pub use submission::{
    LEAD_EVENT_NAME, LeadEvent, LeadPayload, Outcome, SUBMISSION_ERROR_MESSAGE,
};
pub use validation::{FieldErrors, Verdict, validate_field, validate_in, validate_step};
pub use wizard::{
    ErrorKey, Step, SubmissionStatus, TOTAL_STEPS, WizardEffect, WizardErrors, WizardEvent,
    WizardState,
};
