//! Terminal rendering of submission results

use serde_json::Value;
use verdict::pipeline::{MediaKind, SubmissionResult, Verdict};

const ABSENT: &str = "-";

fn label(field: &str) -> &str {
    match field {
        "classification" | "prediction" => "Prediction",
        "reason" => "Reason",
        "confidence" => "Confidence",
        "probability_fake" => "Probability",
        other => other,
    }
}

fn display_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => ABSENT.to_string(),
        Some(other) => other.to_string(),
    }
}

pub fn render_verdict(verdict: &Verdict) -> String {
    let mut out = String::from("Result\n");
    for field in verdict.kind.output_fields() {
        out.push_str(&format!("{}: {}\n", label(field), display_value(verdict.field(field))));
    }
    out.push_str("Results may not be perfect, please recheck\n");
    out
}

/// Rendered text and whether it belongs on stderr
pub fn render(result: &SubmissionResult) -> (String, bool) {
    match result {
        SubmissionResult::Success(verdict) => (render_verdict(verdict), false),
        SubmissionResult::Rejected { reason } => (format!("Rejected: {}\n", reason), true),
        SubmissionResult::TransportError { message } => (format!("Error: {}\n", message), true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use verdict::pipeline::Fields;

    #[test]
    fn renders_text_verdict() {
        let mut fields = Fields::new();
        fields.insert("classification".to_string(), json!("FAKE"));
        fields.insert("reason".to_string(), json!("No source"));
        let verdict = Verdict {
            kind: MediaKind::Text,
            fields,
        };

        assert_eq!(
            render_verdict(&verdict),
            "Result\nPrediction: FAKE\nReason: No source\nResults may not be perfect, please recheck\n"
        );
    }

    #[test]
    fn renders_absent_media_fields_as_dash() {
        let mut fields = Fields::new();
        fields.insert("prediction".to_string(), json!("real"));
        fields.insert("confidence".to_string(), json!(0.92));
        let result = SubmissionResult::Success(Verdict {
            kind: MediaKind::Image,
            fields,
        });

        let (text, is_error) = render(&result);
        assert!(!is_error);
        assert!(text.contains("Prediction: real\n"));
        assert!(text.contains("Confidence: 0.92\n"));
        assert!(text.contains("Probability: -\n"));
    }

    #[test]
    fn renders_one_row_per_output_field() {
        for kind in [MediaKind::Text, MediaKind::Image, MediaKind::Video] {
            let text = render_verdict(&Verdict {
                kind,
                fields: Fields::new(),
            });
            let rows = text.lines().filter(|line| line.ends_with(": -")).count();
            assert_eq!(rows, kind.output_fields().len());
        }
    }

    #[test]
    fn renders_failures_to_stderr() {
        let (text, is_error) = render(&SubmissionResult::Rejected {
            reason: "File is required".to_string(),
        });
        assert!(is_error);
        assert_eq!(text, "Rejected: File is required\n");

        let (text, is_error) = render(&SubmissionResult::TransportError {
            message: "Server error".to_string(),
        });
        assert!(is_error);
        assert_eq!(text, "Error: Server error\n");
    }
}
