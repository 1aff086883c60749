//! Wizard state and its transitions

use super::errors::{ErrorKey, WizardErrors};
use super::step::Step;
use crate::core::error::DomainError;
use crate::quote::{Field, QuoteRequest};
use crate::submission::Outcome;
use crate::validation::validate_step;

/// Progress of the submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Failed,
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEffect {
    /// Move input focus to a field that failed validation
    FocusField(Field),
    /// Hand the request to the submission pipeline and report back with
    /// [`WizardEvent::SubmissionFinished`]
    DispatchSubmission(QuoteRequest),
    /// Leave the wizard for the confirmation view
    ShowConfirmation,
}

/// Input to [`WizardState::apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Advance,
    Retreat,
    UpdateField { field: Field, value: String },
    Submit,
    SubmissionFinished(Outcome),
}

/// State of one wizard session (Entity)
///
/// # Invariants
///
/// - The step only moves forward once its validation rule passes.
/// - Field errors only ever belong to the step validated last; the
///   submission banner is the only other entry.
/// - While a submission is in flight, another cannot be started.
///
/// A transition that returns `Err` leaves the state unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    step: Step,
    request: QuoteRequest,
    errors: WizardErrors,
    status: SubmissionStatus,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> Step {
        self.step
    }

    pub fn request(&self) -> &QuoteRequest {
        &self.request
    }

    pub fn errors(&self) -> &WizardErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Whether a "Back" action is offered
    pub fn can_retreat(&self) -> bool {
        !self.step.is_first()
    }

    /// Label of the forward action on the current step
    pub fn forward_label(&self) -> &'static str {
        if !self.step.is_last() {
            "Next"
        } else if self.is_submitting() {
            "Submitting..."
        } else {
            "Get Free Quote"
        }
    }

    /// Apply one event
    pub fn apply(&mut self, event: WizardEvent) -> Result<Vec<WizardEffect>, DomainError> {
        match event {
            WizardEvent::Advance => self.advance(),
            WizardEvent::Retreat => Ok(self.retreat()),
            WizardEvent::UpdateField { field, value } => {
                self.update_field(field, value)?;
                Ok(Vec::new())
            }
            WizardEvent::Submit => self.submit(),
            WizardEvent::SubmissionFinished(outcome) => self.finish_submission(outcome),
        }
    }

    /// Validate the current step and move to the next one.
    ///
    /// On the last step this is a submission.
    pub fn advance(&mut self) -> Result<Vec<WizardEffect>, DomainError> {
        let Some(next) = self.step.next() else {
            return self.submit();
        };

        if let Some(focus) = self.check_current_step() {
            return Ok(vec![focus]);
        }

        self.errors.clear();
        self.step = next;
        Ok(Vec::new())
    }

    /// Go back one step. Errors are left as they are.
    pub fn retreat(&mut self) -> Vec<WizardEffect> {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        Vec::new()
    }

    /// Store a value and drop that field's error, if any.
    ///
    /// The field is not re-validated.
    pub fn update_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), DomainError> {
        self.request.set(field, value)?;
        self.errors.remove(ErrorKey::Field(field));
        Ok(())
    }

    /// Validate the last step and, if it passes, dispatch the submission.
    pub fn submit(&mut self) -> Result<Vec<WizardEffect>, DomainError> {
        if self.is_submitting() {
            return Err(DomainError::SubmissionInFlight);
        }
        if !self.step.is_last() {
            return Err(DomainError::NotOnLastStep(self.step.number()));
        }

        if let Some(focus) = self.check_current_step() {
            return Ok(vec![focus]);
        }

        self.errors.clear();
        self.status = SubmissionStatus::Submitting;
        Ok(vec![WizardEffect::DispatchSubmission(self.request.clone())])
    }

    /// Record the outcome of the in-flight submission.
    ///
    /// Success discards the session and asks for the confirmation view.
    /// Failure keeps the step and every value so the user can retry.
    pub fn finish_submission(&mut self, outcome: Outcome) -> Result<Vec<WizardEffect>, DomainError> {
        if !self.is_submitting() {
            return Err(DomainError::NoSubmissionInFlight);
        }

        match outcome {
            Outcome::Success => {
                *self = WizardState::new();
                Ok(vec![WizardEffect::ShowConfirmation])
            }
            Outcome::Failure(message) => {
                self.status = SubmissionStatus::Failed;
                self.errors.set_submit(message);
                Ok(Vec::new())
            }
        }
    }

    /// Run the current step's rule; on failure replace the error map and
    /// return the focus effect for the first failing field.
    fn check_current_step(&mut self) -> Option<WizardEffect> {
        let step_errors = validate_step(self.step, &self.request);
        let first = step_errors.keys().next().copied()?;
        self.errors.replace_with(step_errors);
        Some(WizardEffect::FocusField(first))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::SUBMISSION_ERROR_MESSAGE;

    fn fill(state: &mut WizardState, values: &[(Field, &str)]) {
        for (field, value) in values {
            state.update_field(*field, *value).unwrap();
        }
    }

    const STEP_VALUES: [&[(Field, &str)]; 5] = [
        &[(Field::Species, "Cattle"), (Field::Quantity, "30")],
        &[(Field::PickupCity, "Amarillo"), (Field::PickupState, "TX")],
        &[(Field::DropoffCity, "Dodge City"), (Field::DropoffState, "KS")],
        &[(Field::Timeline, "Within 3 days")],
        &[
            (Field::Name, "Jo Rancher"),
            (Field::Phone, "555-111-2222"),
            (Field::Email, "jo@ranch.com"),
        ],
    ];

    /// Fill and advance through the first four steps
    fn on_last_step() -> WizardState {
        let mut state = WizardState::new();
        for values in &STEP_VALUES[..4] {
            fill(&mut state, values);
            assert!(state.advance().unwrap().is_empty());
        }
        fill(&mut state, STEP_VALUES[4]);
        state
    }

    #[test]
    fn test_initial_state() {
        let state = WizardState::new();
        assert_eq!(state.current_step(), Step::LivestockDetails);
        assert_eq!(state.request(), &QuoteRequest::new());
        assert!(state.errors().is_empty());
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert!(!state.can_retreat());
        assert_eq!(state.forward_label(), "Next");
    }

    #[test]
    fn test_advance_blocked_by_blank_quantity() {
        let mut state = WizardState::new();
        fill(&mut state, &[(Field::Species, "Cattle")]);

        let effects = state.advance().unwrap();
        assert_eq!(effects, vec![WizardEffect::FocusField(Field::Quantity)]);
        assert_eq!(state.current_step(), Step::LivestockDetails);
        assert_eq!(state.errors().len(), 1);
        assert_eq!(state.errors().field(Field::Quantity), Some("Quantity is required"));
    }

    #[test]
    fn test_advance_focuses_first_failing_field() {
        let mut state = WizardState::new();
        let effects = state.advance().unwrap();
        assert_eq!(effects, vec![WizardEffect::FocusField(Field::Species)]);
        assert_eq!(state.errors().len(), 2);
    }

    #[test]
    fn test_repeated_failing_advance_never_moves() {
        let mut state = WizardState::new();
        for _ in 0..5 {
            state.advance().unwrap();
            assert_eq!(state.current_step(), Step::LivestockDetails);
        }
    }

    #[test]
    fn test_advance_clears_errors_and_moves_on() {
        let mut state = WizardState::new();
        state.advance().unwrap();
        fill(&mut state, STEP_VALUES[0]);
        assert!(state.errors().is_empty());

        state.advance().unwrap();
        assert_eq!(state.current_step(), Step::PickupLocation);
        assert!(state.errors().is_empty());
        assert!(state.can_retreat());
    }

    #[test]
    fn test_retreat_then_advance_returns_to_same_step() {
        let mut state = on_last_step();
        state.retreat();
        assert_eq!(state.current_step(), Step::Timeline);
        let effects = state.advance().unwrap();
        assert!(effects.is_empty());
        assert_eq!(state.current_step(), Step::ContactInformation);
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_retreat_floors_at_first_step_and_keeps_errors() {
        let mut state = WizardState::new();
        state.advance().unwrap();
        let errors_before = state.errors().clone();
        state.retreat();
        assert_eq!(state.current_step(), Step::LivestockDetails);
        assert_eq!(state.errors(), &errors_before);
    }

    #[test]
    fn test_editing_removes_only_that_error() {
        let mut state = on_last_step();
        fill(
            &mut state,
            &[(Field::Name, ""), (Field::Phone, "12"), (Field::Email, "x")],
        );
        state.submit().unwrap();
        assert_eq!(state.errors().len(), 3);

        state.update_field(Field::Phone, "1").unwrap();
        assert_eq!(state.errors().len(), 2);
        assert!(state.errors().field(Field::Phone).is_none());
        assert!(state.errors().field(Field::Name).is_some());
        assert!(state.errors().field(Field::Email).is_some());
    }

    #[test]
    fn test_update_field_rejects_unknown_choice() {
        let mut state = WizardState::new();
        state.advance().unwrap();
        let before = state.clone();
        let result = state.update_field(Field::Species, "Llamas");
        assert!(result.is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_submit_only_on_last_step() {
        let mut state = WizardState::new();
        assert_eq!(state.submit(), Err(DomainError::NotOnLastStep(1)));
    }

    #[test]
    fn test_submit_validates_contact_step() {
        let mut state = on_last_step();
        state.update_field(Field::Email, "jo@ranch").unwrap();
        let effects = state.submit().unwrap();
        assert_eq!(effects, vec![WizardEffect::FocusField(Field::Email)]);
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert_eq!(
            state.errors().field(Field::Email),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_advance_on_last_step_submits() {
        let mut state = on_last_step();
        let effects = state.advance().unwrap();
        assert_eq!(
            effects,
            vec![WizardEffect::DispatchSubmission(state.request().clone())]
        );
        assert_eq!(state.current_step(), Step::ContactInformation);
        assert!(state.is_submitting());
        assert_eq!(state.forward_label(), "Submitting...");
    }

    #[test]
    fn test_in_flight_guard() {
        let mut state = on_last_step();
        state.submit().unwrap();
        assert_eq!(state.submit(), Err(DomainError::SubmissionInFlight));
        assert_eq!(state.advance(), Err(DomainError::SubmissionInFlight));
    }

    #[test]
    fn test_failed_submission_keeps_everything() {
        let mut state = on_last_step();
        let request = state.request().clone();
        state.submit().unwrap();

        let effects = state.finish_submission(Outcome::failure()).unwrap();
        assert!(effects.is_empty());
        assert_eq!(state.status(), SubmissionStatus::Failed);
        assert_eq!(state.errors().submit(), Some(SUBMISSION_ERROR_MESSAGE));
        assert_eq!(state.current_step(), Step::ContactInformation);
        assert_eq!(state.request(), &request);

        // Retry is allowed and hides the banner
        let effects = state.submit().unwrap();
        assert_eq!(effects, vec![WizardEffect::DispatchSubmission(request)]);
        assert!(state.errors().submit().is_none());
    }

    #[test]
    fn test_successful_submission_discards_request() {
        let mut state = on_last_step();
        state.submit().unwrap();
        let effects = state.finish_submission(Outcome::Success).unwrap();
        assert_eq!(effects, vec![WizardEffect::ShowConfirmation]);
        assert_eq!(state, WizardState::new());
    }

    #[test]
    fn test_finish_without_submission_is_rejected() {
        let mut state = WizardState::new();
        assert_eq!(
            state.finish_submission(Outcome::Success),
            Err(DomainError::NoSubmissionInFlight)
        );
    }

    #[test]
    fn test_apply_dispatches_events() {
        let mut state = WizardState::new();
        for (field, value) in STEP_VALUES[0] {
            state
                .apply(WizardEvent::UpdateField {
                    field: *field,
                    value: value.to_string(),
                })
                .unwrap();
        }
        state.apply(WizardEvent::Advance).unwrap();
        assert_eq!(state.current_step(), Step::PickupLocation);
        state.apply(WizardEvent::Retreat).unwrap();
        assert_eq!(state.current_step(), Step::LivestockDetails);
    }
}
