use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// External identity provider session.
pub trait SessionGateway: Send + Sync {
    fn sign_out(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}
