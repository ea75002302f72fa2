use crate::core::client::SubmissionClient;
use crate::core::draft::FormController;
use crate::domain::model::SubmitOutcome;
use crate::domain::ports::{ConfigProvider, Notifier};
use crate::utils::error::Result;

pub const CONNECTIVITY_ERROR: &str = "Failed to submit form. Please check your connection.";
pub const IN_FLIGHT_ERROR: &str = "A submission is already in progress.";

/// Ties the form controller, submission client and notifier together and
/// drives one submission cycle: read the draft, send it, surface the
/// outcome, and reset the draft only when the backend accepted it.
pub struct IntakeEngine<C: ConfigProvider, N: Notifier> {
    controller: FormController,
    client: SubmissionClient<C>,
    notifier: N,
}

impl<C: ConfigProvider, N: Notifier> IntakeEngine<C, N> {
    pub fn new(controller: FormController, client: SubmissionClient<C>, notifier: N) -> Self {
        Self {
            controller,
            client,
            notifier,
        }
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FormController {
        &mut self.controller
    }

    pub fn client(&self) -> &SubmissionClient<C> {
        &self.client
    }

    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        let outcome = self.client.submit(self.controller.draft()).await?;

        match &outcome {
            SubmitOutcome::Accepted { message } => {
                tracing::info!("Submission accepted: {}", message);
                self.notifier.notify_success(message);
                self.controller.reset_draft();
            }
            SubmitOutcome::Rejected { detail } => {
                tracing::warn!("Submission rejected: {}", detail);
                self.notifier.notify_error(detail);
            }
            SubmitOutcome::Unreachable => {
                tracing::warn!("Backend unreachable, draft kept for retry");
                self.notifier.notify_error(CONNECTIVITY_ERROR);
            }
            SubmitOutcome::AlreadyInFlight => {
                self.notifier.notify_error(IN_FLIGHT_ERROR);
            }
        }

        Ok(outcome)
    }
}
