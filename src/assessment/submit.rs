use gloo_console::log;
use gloo_net::http::Request;
use thiserror::Error;

use crate::config;

use super::engine::AnswerRecord;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to reach the assessment endpoint: {0}")]
    Network(String),
    #[error("assessment endpoint returned status {0}")]
    Status(u16),
}

/// Hand a completed answer record to the submission endpoint.
///
/// No backend ships with this repository: with no backend URL configured the
/// hand-off logs the payload, waits briefly and reports success, so the rest
/// of the flow (clearing saved progress, closing the dialog) behaves as it
/// will against the real endpoint. Safe to call again after a failure; the
/// endpoint contract is a plain "accept the full record".
pub async fn submit_assessment(answers: &AnswerRecord) -> Result<(), SubmitError> {
    let backend = config::get_backend_url();
    if backend.is_empty() {
        if let Ok(payload) = serde_json::to_string(answers) {
            log!("Submitting assessment data:", payload);
        }
        gloo_timers::future::TimeoutFuture::new(1_000).await;
        return Ok(());
    }

    let response = Request::post(&format!("{}/api/assessment/submit", backend))
        .json(answers)
        .map_err(|err| SubmitError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| SubmitError::Network(err.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Status(response.status()))
    }
}
