//! Outbound request construction

use mime::Mime;
use serde::Serialize;

use super::media::{FileInput, MediaKind};
use super::rules::content_type_for;
use super::validator::ValidatedPayload;

pub const FILE_FIELD: &str = "file";

/// Remote classification endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    PredictNews,
    PredictImage,
    PredictVideo,
}

impl Endpoint {
    pub fn for_kind(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Text => Endpoint::PredictNews,
            MediaKind::Image => Endpoint::PredictImage,
            MediaKind::Video => Endpoint::PredictVideo,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::PredictNews => "/predict-news",
            Endpoint::PredictImage => "/predict-image",
            Endpoint::PredictVideo => "/predict-video",
        }
    }
}

/// JSON body of `/predict-news`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsRequest {
    pub text: String,
}

/// A single-file multipart body
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub field: &'static str,
    pub file: FileInput,
    pub content_type: Option<Mime>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(NewsRequest),
    Multipart(FilePart),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub kind: MediaKind,
    pub endpoint: Endpoint,
    pub body: RequestBody,
}

/// Build the request for a validated payload
///
/// Encoding and endpoint follow the payload kind only; adding a kind means
/// extending this match.
pub fn build(payload: ValidatedPayload) -> OutboundRequest {
    let kind = payload.kind();
    let body = match payload {
        ValidatedPayload::Text(text) => RequestBody::Json(NewsRequest { text }),
        ValidatedPayload::Image(file) | ValidatedPayload::Video(file) => {
            RequestBody::Multipart(FilePart {
                field: FILE_FIELD,
                content_type: content_type_for(&file.extension()),
                file,
            })
        }
    };

    OutboundRequest {
        kind,
        endpoint: Endpoint::for_kind(kind),
        body,
    }
}
