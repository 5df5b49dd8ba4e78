//! Submission entry points
//!
//! Each call runs validate → build → send → decode → normalize and always ends in
//! exactly one [`SubmissionResult`]. Calls share no mutable state, so any
//! number may be in flight at once.

use std::sync::Arc;
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use super::media::{FileInput, MediaKind, RawInput};
use super::normalize::{decode_body, normalize};
use super::request::build;
use super::result::SubmissionResult;
use super::transport::{ClientError, HttpTransport, Transport, send};
use super::validator::validate;
use crate::config::ServiceConfig;

#[derive(Clone)]
pub struct Classifier {
    transport: Arc<dyn Transport>,
}

impl Classifier {
    pub fn new(service: &ServiceConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::from_config(service)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn submit_text(&self, text: impl Into<String>) -> SubmissionResult {
        self.submit(RawInput::Text(text.into()), MediaKind::Text).await
    }

    pub async fn submit_image(&self, files: Vec<FileInput>) -> SubmissionResult {
        self.submit(RawInput::Files(files), MediaKind::Image).await
    }

    pub async fn submit_video(&self, files: Vec<FileInput>) -> SubmissionResult {
        self.submit(RawInput::Files(files), MediaKind::Video).await
    }

    pub async fn submit(&self, input: RawInput, kind: MediaKind) -> SubmissionResult {
        let submission_id = Uuid::new_v4();
        let span = info_span!("submission", %submission_id, %kind);

        self.run(input, kind).instrument(span).await
    }

    async fn run(&self, input: RawInput, kind: MediaKind) -> SubmissionResult {
        debug!("Validating input");
        let payload = match validate(input, kind) {
            Ok(payload) => payload,
            Err(rejection) => {
                debug!(reason = %rejection, "Input rejected");
                return rejection.into();
            }
        };

        debug!("Building request");
        let request = build(payload);
        let endpoint = request.endpoint.path();

        debug!(endpoint, "Sending request");
        let response = match send(self.transport.as_ref(), request).await {
            Ok(response) => response,
            Err(error) => {
                warn!(endpoint, error = %error, "Submission failed");
                return error.into();
            }
        };

        debug!(endpoint, "Normalizing response");
        let body = match decode_body(&response, kind) {
            Ok(body) => body,
            Err(error) => {
                warn!(endpoint, error = %error, "Unreadable classification response");
                return error.into();
            }
        };
        let verdict = normalize(&body, kind);
        info!(endpoint, fields = verdict.fields.len(), "Submission classified");

        verdict.into()
    }
}
