//! Submission pipeline for the remote classification service
//!
//! ```text
//! RawInput ─ validate ─> ValidatedPayload ─ build ─> OutboundRequest
//!     ─ send ─> RawResponse ─ decode_body ─> JSON ─ normalize ─> Verdict
//! ```
//!
//! A failure at any stage ends the submission with a
//! [`SubmissionResult::Rejected`] or [`SubmissionResult::TransportError`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use verdict::config::Config;
//! use verdict::pipeline::Classifier;
//!
//! let config = Config::load()?;
//! let classifier = Classifier::new(&config.service)?;
//! let result = classifier.submit_text("Meta hires new CEO").await;
//! ```

mod client;
mod media;
mod normalize;
mod request;
mod result;
mod rules;
mod transport;
mod validator;

pub use client::Classifier;
pub use media::{FileInput, MediaKind, RawInput};
pub use normalize::{decode_body, normalize};
pub use request::{Endpoint, FILE_FIELD, FilePart, NewsRequest, OutboundRequest, RequestBody, build};
pub use result::{Fields, SubmissionResult, Verdict};
pub use rules::{
    ConstraintRule, IMAGE_EXTENSIONS, MIN_TEXT_LENGTH, VIDEO_EXTENSIONS, content_type_for, rule_for,
};
pub use transport::{
    ClientError, HttpConfig, HttpTransport, RawResponse, Transport, TransportError,
    network_failure_message, send, server_failure_message,
};
pub use validator::{Rejection, ValidatedPayload, validate};
