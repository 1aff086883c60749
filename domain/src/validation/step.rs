//! Step validation rules.
//!
//! A step passes when every field in its validated set passes its field
//! validator. Steps never look at each other's fields.

use super::field::validate_in;
use crate::quote::{Field, QuoteRequest};
use crate::wizard::step::Step;
use std::collections::BTreeMap;

/// Failing fields of a step mapped to their messages, in form order
pub type FieldErrors = BTreeMap<Field, String>;

/// Run a step's validation rule against the request
pub fn validate_step(step: Step, request: &QuoteRequest) -> FieldErrors {
    step.validated_fields()
        .iter()
        .filter_map(|field| {
            validate_in(*field, request)
                .message()
                .map(|message| (*field, message.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::field::validate_field;

    fn filled() -> QuoteRequest {
        let mut request = QuoteRequest::new();
        for (field, value) in [
            (Field::Species, "Cattle"),
            (Field::Quantity, "30"),
            (Field::PickupCity, "Amarillo"),
            (Field::PickupState, "TX"),
            (Field::DropoffCity, "Dodge City"),
            (Field::DropoffState, "KS"),
            (Field::Timeline, "Within 3 days"),
            (Field::Name, "Jo Rancher"),
            (Field::Phone, "555-111-2222"),
            (Field::Email, "jo@ranch.com"),
        ] {
            request.set(field, value).unwrap();
        }
        request
    }

    #[test]
    fn test_filled_request_passes_every_step() {
        let request = filled();
        for step in Step::all() {
            assert!(validate_step(*step, &request).is_empty(), "{step} failed");
        }
    }

    #[test]
    fn test_empty_request_fails_every_validated_field() {
        let request = QuoteRequest::new();
        for step in Step::all() {
            let errors = validate_step(*step, &request);
            let failing: Vec<_> = errors.keys().copied().collect();
            assert_eq!(failing, step.validated_fields().to_vec());
        }
    }

    #[test]
    fn test_blank_quantity_on_first_step() {
        let mut request = filled();
        request.set(Field::Quantity, "").unwrap();
        let errors = validate_step(Step::LivestockDetails, &request);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(&Field::Quantity).map(String::as_str),
            Some("Quantity is required")
        );
    }

    #[test]
    fn test_later_step_does_not_see_earlier_fields() {
        let mut request = filled();
        request.set(Field::Species, "").unwrap();
        assert!(validate_step(Step::ContactInformation, &request).is_empty());
        assert!(!validate_step(Step::LivestockDetails, &request).is_empty());
    }

    #[test]
    fn test_step_result_matches_field_validators() {
        let cases = [
            QuoteRequest::new(),
            filled(),
            filled().with(Field::Phone, "555").unwrap(),
            filled().with(Field::Email, "jo@ranch").unwrap(),
            filled().with(Field::Timeline, "").unwrap(),
            filled().with(Field::PickupState, "  ").unwrap(),
        ];
        for request in &cases {
            for step in Step::all() {
                let all_pass = step
                    .validated_fields()
                    .iter()
                    .all(|f| validate_field(*f, request.get(*f)).is_valid());
                assert_eq!(validate_step(*step, request).is_empty(), all_pass);
            }
        }
    }

    #[test]
    fn test_contact_errors_in_form_order() {
        let errors = validate_step(Step::ContactInformation, &QuoteRequest::new());
        let first = errors.keys().next().copied();
        assert_eq!(first, Some(Field::Name));
    }
}
