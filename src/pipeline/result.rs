//! Uniform submission outcome handed back to callers

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use super::media::MediaKind;
use super::transport::TransportError;
use super::validator::Rejection;

pub type Fields = BTreeMap<String, Value>;

/// Normalized output of a successful classification
///
/// Fields the service did not return are absent from `fields`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub kind: MediaKind,
    pub fields: Fields,
}

impl Verdict {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    pub fn f64_field(&self, name: &str) -> Option<f64> {
        self.field(name).and_then(Value::as_f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionResult {
    Success(Verdict),
    Rejected { reason: String },
    TransportError { message: String },
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success(_))
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            SubmissionResult::Success(verdict) => Some(verdict),
            _ => None,
        }
    }

    /// User-facing message for the failure variants
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionResult::Success(_) => None,
            SubmissionResult::Rejected { reason } => Some(reason),
            SubmissionResult::TransportError { message } => Some(message),
        }
    }
}

impl From<Rejection> for SubmissionResult {
    fn from(rejection: Rejection) -> Self {
        SubmissionResult::Rejected {
            reason: rejection.to_string(),
        }
    }
}

impl From<TransportError> for SubmissionResult {
    fn from(error: TransportError) -> Self {
        SubmissionResult::TransportError {
            message: error.message(),
        }
    }
}

impl From<Verdict> for SubmissionResult {
    fn from(verdict: Verdict) -> Self {
        SubmissionResult::Success(verdict)
    }
}
