//! Field validators and per-step validation rules.

pub mod field;
pub mod step;

pub use field::{Verdict, count_digits, validate_field, validate_in};
pub use step::{FieldErrors, validate_step};
