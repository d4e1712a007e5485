use tracing::{debug, info};

use crate::domain::{
    common::entities::app_errors::CoreError,
    diagnosis::{entities::DiagnosisResponse, ports::DiagnosisClient},
    page::ports::SessionGateway,
    symptom_form::form::SymptomForm,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    Idle,
    Loading,
    Success(DiagnosisResponse),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Diagnosed,
    /// The client reported a failure; the page is back to idle.
    Failed,
    /// Nothing to submit, or the page was not idle.
    Ignored,
}

/// Owns the request lifecycle of one symptom page.
pub struct PageController<C> {
    client: C,
    form: SymptomForm,
    state: PageState,
}

impl<C> PageController<C>
where
    C: DiagnosisClient,
{
    pub fn new(client: C) -> Self {
        Self::with_form(client, SymptomForm::new())
    }

    pub fn with_form(client: C, form: SymptomForm) -> Self {
        Self {
            client,
            form,
            state: PageState::Idle,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn form(&self) -> &SymptomForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SymptomForm {
        &mut self.form
    }

    pub fn is_loading(&self) -> bool {
        self.state == PageState::Loading
    }

    pub fn diagnosis(&self) -> Option<&DiagnosisResponse> {
        match &self.state {
            PageState::Success(response) => Some(response),
            _ => None,
        }
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.state != PageState::Idle {
            return SubmitOutcome::Ignored;
        }
        let Some(event) = self.form.submit() else {
            return SubmitOutcome::Ignored;
        };

        debug!(
            symptoms = event.symptoms.len(),
            language = %event.language,
            "Submitting symptoms"
        );
        self.state = PageState::Loading;
        self.form.set_busy(true);

        let result = self
            .client
            .request_diagnosis(&event.symptoms, &event.language)
            .await;

        self.form.set_busy(false);
        match result {
            Some(response) => {
                self.state = PageState::Success(response);
                SubmitOutcome::Diagnosed
            }
            None => {
                self.state = PageState::Idle;
                SubmitOutcome::Failed
            }
        }
    }

    /// Discards the stored diagnosis and starts a fresh form.
    pub fn reset(&mut self) {
        if let PageState::Success(_) = self.state {
            self.state = PageState::Idle;
            self.form.reset();
        }
    }

    pub async fn sign_out<S>(&mut self, session: &S) -> Result<(), CoreError>
    where
        S: SessionGateway,
    {
        session.sign_out().await?;
        info!("Session signed out");
        self.state = PageState::Idle;
        self.form.reset();
        Ok(())
    }
}
