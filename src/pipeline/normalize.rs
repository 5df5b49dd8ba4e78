//! Maps each endpoint's success body onto a [`Verdict`]

use serde_json::Value;
use tracing::warn;

use super::media::MediaKind;
use super::result::{Fields, Verdict};
use super::transport::{RawResponse, TransportError};

/// Response field that feeds the caller-facing `field` for `kind`
///
/// The video endpoint names its score `probability`; callers see the same
/// `probability_fake` name as for images.
fn source_field(kind: MediaKind, field: &'static str) -> &'static str {
    match (kind, field) {
        (MediaKind::Video, "probability_fake") => "probability",
        (_, field) => field,
    }
}

/// Parse a success body as JSON
///
/// A body that is not JSON, or is `null`, counts as a failed exchange just
/// like a connection dropped mid-response.
pub fn decode_body(raw: &RawResponse, kind: MediaKind) -> Result<Value, TransportError> {
    match serde_json::from_slice::<Value>(&raw.body) {
        Ok(Value::Null) => Err(TransportError::Unreachable {
            kind,
            detail: "response body is null".to_string(),
        }),
        Ok(body) => Ok(body),
        Err(e) => Err(TransportError::Unreachable {
            kind,
            detail: format!("response body is not JSON: {}", e),
        }),
    }
}

/// Never fails: fields that are missing or `null` are left absent.
pub fn normalize(body: &Value, kind: MediaKind) -> Verdict {
    let mut fields = Fields::new();
    for &field in kind.output_fields() {
        let source = source_field(kind, field);
        match body.get(source) {
            Some(Value::Null) | None => {
                warn!(%kind, field = source, "Field missing from classification response");
            }
            Some(value) => {
                fields.insert(field.to_string(), value.clone());
            }
        }
    }

    Verdict { kind, fields }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_fields_are_copied_verbatim() {
        let body = json!({
            "classification": "FAKE",
            "reason": "No reputable source reports this.",
            "extra": true
        });

        let verdict = normalize(&body, MediaKind::Text);
        assert_eq!(verdict.kind, MediaKind::Text);
        assert_eq!(verdict.fields.len(), 2);
        assert_eq!(verdict.str_field("classification"), Some("FAKE"));
        assert_eq!(verdict.str_field("reason"), Some("No reputable source reports this."));
    }

    #[test]
    fn image_fields_keep_their_names() {
        let body = json!({
            "prediction": "real",
            "confidence": 0.7,
            "probability_fake": 0.3
        });

        let verdict = normalize(&body, MediaKind::Image);
        assert_eq!(verdict.str_field("prediction"), Some("real"));
        assert_eq!(verdict.f64_field("confidence"), Some(0.7));
        assert_eq!(verdict.f64_field("probability_fake"), Some(0.3));
    }

    #[test]
    fn video_probability_is_renamed() {
        let body = json!({
            "prediction": "fake",
            "confidence": 0.92,
            "probability": 0.81
        });

        let verdict = normalize(&body, MediaKind::Video);
        let expected: Fields = [
            ("prediction".to_string(), json!("fake")),
            ("confidence".to_string(), json!(0.92)),
            ("probability_fake".to_string(), json!(0.81)),
        ]
        .into_iter()
        .collect();
        assert_eq!(verdict.fields, expected);
        assert!(verdict.field("probability").is_none());
    }

    #[test]
    fn image_ignores_video_field_name() {
        let body = json!({ "prediction": "fake", "probability": 0.5 });

        let verdict = normalize(&body, MediaKind::Image);
        assert!(verdict.field("probability_fake").is_none());
        assert!(verdict.field("confidence").is_none());
    }

    #[test]
    fn null_and_missing_fields_are_absent() {
        let body = json!({ "classification": "REAL", "reason": null });

        let verdict = normalize(&body, MediaKind::Text);
        assert_eq!(verdict.str_field("classification"), Some("REAL"));
        assert!(verdict.field("reason").is_none());
    }

    #[test]
    fn non_object_json_yields_empty_fields() {
        for body in [json!([1, 2]), json!("ok"), json!(42)] {
            let verdict = normalize(&body, MediaKind::Video);
            assert_eq!(verdict.kind, MediaKind::Video);
            assert!(verdict.fields.is_empty());
        }
    }

    #[test]
    fn decode_body_accepts_any_json_value() {
        let raw = RawResponse::new(200, r#"{"classification":"FAKE"}"#);
        assert_eq!(
            decode_body(&raw, MediaKind::Text).unwrap(),
            json!({ "classification": "FAKE" })
        );

        let raw = RawResponse::new(200, "[1, 2]");
        assert_eq!(decode_body(&raw, MediaKind::Image).unwrap(), json!([1, 2]));
    }

    #[test]
    fn decode_body_rejects_unparseable_and_null_bodies() {
        for body in ["<html>proxy page</html>", "", "null"] {
            let raw = RawResponse::new(200, body);

            let err = decode_body(&raw, MediaKind::Video).unwrap_err();
            assert!(matches!(
                err,
                TransportError::Unreachable { kind: MediaKind::Video, .. }
            ));
            assert_eq!(err.message(), "Failed to upload video. Please try again.");
        }

        let err = decode_body(&RawResponse::new(200, "null"), MediaKind::Text).unwrap_err();
        assert_eq!(err.message(), "Network error. Please try again.");
    }
}
