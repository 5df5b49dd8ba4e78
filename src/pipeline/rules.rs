//! Static constraint rules per media kind

use mime::Mime;

use super::media::MediaKind;

pub const MIN_TEXT_LENGTH: usize = 10;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "webm"];

/// Validation policy for one media kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintRule {
    MinTextLength(usize),
    AllowedExtensions {
        extensions: &'static [&'static str],
        /// Noun used in the rejection message ("files", "videos")
        noun: &'static str,
    },
}

pub const TEXT_RULE: ConstraintRule = ConstraintRule::MinTextLength(MIN_TEXT_LENGTH);

pub const IMAGE_RULE: ConstraintRule = ConstraintRule::AllowedExtensions {
    extensions: IMAGE_EXTENSIONS,
    noun: "files",
};

pub const VIDEO_RULE: ConstraintRule = ConstraintRule::AllowedExtensions {
    extensions: VIDEO_EXTENSIONS,
    noun: "videos",
};

pub fn rule_for(kind: MediaKind) -> ConstraintRule {
    match kind {
        MediaKind::Text => TEXT_RULE,
        MediaKind::Image => IMAGE_RULE,
        MediaKind::Video => VIDEO_RULE,
    }
}

/// Content type sent with an uploaded file, keyed by lower-cased extension
pub fn content_type_for(extension: &str) -> Option<Mime> {
    match extension {
        "jpg" | "jpeg" => Some(mime::IMAGE_JPEG),
        "png" => Some(mime::IMAGE_PNG),
        "webp" => "image/webp".parse().ok(),
        "mp4" => "video/mp4".parse().ok(),
        "mov" => "video/quicktime".parse().ok(),
        "webm" => "video/webm".parse().ok(),
        _ => None,
    }
}

impl ConstraintRule {
    /// Whether `extension` (already lower-cased) is on the allow-list
    ///
    /// Always false for text rules and for the empty extension.
    pub fn allows_extension(&self, extension: &str) -> bool {
        match self {
            ConstraintRule::AllowedExtensions { extensions, .. } => {
                !extension.is_empty() && extensions.contains(&extension)
            }
            ConstraintRule::MinTextLength(_) => false,
        }
    }

    /// e.g. "Only .jpg, .jpeg, .png, .webp files are allowed."
    pub fn extension_message(&self) -> Option<String> {
        match self {
            ConstraintRule::AllowedExtensions { extensions, noun } => {
                let listed = extensions
                    .iter()
                    .map(|ext| format!(".{}", ext))
                    .collect::<Vec<_>>()
                    .join(", ");
                Some(format!("Only {} {} are allowed.", listed, noun))
            }
            ConstraintRule::MinTextLength(_) => None,
        }
    }
}
