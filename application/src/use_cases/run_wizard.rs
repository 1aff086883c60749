//! Run Wizard use case
//!
//! Drives a [`WizardState`] with user events and carries out the effects
//! each transition requests: focus signals and the completion signal go to
//! the [`Navigator`], submissions go through [`SubmitQuoteUseCase`].

use super::submit_quote::SubmitQuoteUseCase;
use crate::ports::analytics::AnalyticsSink;
use crate::ports::intake_gateway::IntakeGateway;
use crate::ports::navigator::Navigator;
use haul_domain::{DomainError, Field, WizardEffect, WizardEvent, WizardState};
use std::sync::Arc;
use tracing::debug;

/// Where the session stands after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionProgress {
    /// The wizard is still collecting or retrying
    InProgress,
    /// The request was accepted and the confirmation view was requested
    Completed,
}

/// One wizard session from first step to confirmation
pub struct WizardSession<G, A, N>
where
    G: IntakeGateway + 'static,
    A: AnalyticsSink + 'static,
    N: Navigator + 'static,
{
    state: WizardState,
    submit: SubmitQuoteUseCase<G, A>,
    navigator: Arc<N>,
}

impl<G, A, N> WizardSession<G, A, N>
where
    G: IntakeGateway + 'static,
    A: AnalyticsSink + 'static,
    N: Navigator + 'static,
{
    pub fn new(submit: SubmitQuoteUseCase<G, A>, navigator: Arc<N>) -> Self {
        Self {
            state: WizardState::new(),
            submit,
            navigator,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub async fn advance(&mut self) -> Result<SessionProgress, DomainError> {
        self.dispatch(WizardEvent::Advance).await
    }

    pub async fn retreat(&mut self) -> Result<SessionProgress, DomainError> {
        self.dispatch(WizardEvent::Retreat).await
    }

    pub async fn update_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<SessionProgress, DomainError> {
        self.dispatch(WizardEvent::UpdateField {
            field,
            value: value.into(),
        })
        .await
    }

    pub async fn submit(&mut self) -> Result<SessionProgress, DomainError> {
        self.dispatch(WizardEvent::Submit).await
    }

    /// Apply an event and run every effect it produces.
    ///
    /// A dispatched submission is awaited here, so the session never has
    /// more than one in flight.
    pub async fn dispatch(&mut self, event: WizardEvent) -> Result<SessionProgress, DomainError> {
        debug!("Wizard event {:?} on step {}", event, self.state.current_step().number());
        let mut pending = self.state.apply(event)?;
        let mut progress = SessionProgress::InProgress;

        while !pending.is_empty() {
            let mut next = Vec::new();
            for effect in pending {
                match effect {
                    WizardEffect::FocusField(field) => self.navigator.focus_field(field),
                    WizardEffect::DispatchSubmission(request) => {
                        let outcome = self.submit.execute(&request).await;
                        next.extend(
                            self.state
                                .apply(WizardEvent::SubmissionFinished(outcome))?,
                        );
                    }
                    WizardEffect::ShowConfirmation => {
                        self.navigator.show_confirmation();
                        progress = SessionProgress::Completed;
                    }
                }
            }
            pending = next;
        }

        Ok(progress)
    }
}
