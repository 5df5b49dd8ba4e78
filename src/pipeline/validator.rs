//! Local validation of raw input against the constraint rules
//!
//! [`ValidatedPayload`] can only be produced here, so nothing downstream can
//! send input that skipped these checks.

use thiserror::Error;

use super::media::{FileInput, MediaKind, RawInput};
use super::rules::{ConstraintRule, rule_for};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("News cannot be less than {min} characters")]
    TextTooShort { min: usize },

    #[error("File is required")]
    FileRequired,

    #[error("{message}")]
    DisallowedExtension { extension: String, message: String },
}

/// Input proven to satisfy the rule of its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedPayload {
    Text(String),
    Image(FileInput),
    Video(FileInput),
}

impl ValidatedPayload {
    pub fn kind(&self) -> MediaKind {
        match self {
            ValidatedPayload::Text(_) => MediaKind::Text,
            ValidatedPayload::Image(_) => MediaKind::Image,
            ValidatedPayload::Video(_) => MediaKind::Video,
        }
    }
}

pub fn validate(input: RawInput, kind: MediaKind) -> Result<ValidatedPayload, Rejection> {
    let rule = rule_for(kind);

    match kind {
        MediaKind::Text => validate_text(input, rule).map(ValidatedPayload::Text),
        MediaKind::Image => validate_file(input, rule).map(ValidatedPayload::Image),
        MediaKind::Video => validate_file(input, rule).map(ValidatedPayload::Video),
    }
}

fn validate_text(input: RawInput, rule: ConstraintRule) -> Result<String, Rejection> {
    let min = match rule {
        ConstraintRule::MinTextLength(min) => min,
        ConstraintRule::AllowedExtensions { .. } => 0,
    };

    match input {
        RawInput::Text(text) if !text.is_empty() && text.chars().count() >= min => Ok(text),
        _ => Err(Rejection::TextTooShort { min }),
    }
}

fn validate_file(input: RawInput, rule: ConstraintRule) -> Result<FileInput, Rejection> {
    let file = match input {
        RawInput::Files(mut files) if files.len() == 1 => files.remove(0),
        _ => return Err(Rejection::FileRequired),
    };

    let extension = file.extension();
    if !rule.allows_extension(&extension) {
        return Err(Rejection::DisallowedExtension {
            message: rule.extension_message().unwrap_or_default(),
            extension,
        });
    }

    Ok(file)
}
