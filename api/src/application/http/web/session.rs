use curetrackr_core::domain::{
    common::entities::app_errors::CoreError, page::ports::SessionGateway,
};
use tracing::info;

/// Browser session handled by an external identity provider; signing out here
/// only means sending the browser back to its login page.
#[derive(Debug, Clone)]
pub struct RedirectSessionGateway {
    redirect_url: String,
}

impl RedirectSessionGateway {
    pub fn new(redirect_url: impl Into<String>) -> Self {
        Self {
            redirect_url: redirect_url.into(),
        }
    }

    pub fn redirect_url(&self) -> &str {
        &self.redirect_url
    }
}

impl SessionGateway for RedirectSessionGateway {
    async fn sign_out(&self) -> Result<(), CoreError> {
        if self.redirect_url.trim().is_empty() {
            tracing::error!("No sign-out redirect configured");
            return Err(CoreError::InternalServerError);
        }
        info!(redirect = %self.redirect_url, "Signing out");
        Ok(())
    }
}
