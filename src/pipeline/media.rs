//! Media kinds and raw caller input

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The three kinds of content the classification service accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Text,
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Text => "text",
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    /// Output field names a successful submission of this kind surfaces
    pub fn output_fields(&self) -> &'static [&'static str] {
        match self {
            MediaKind::Text => &["classification", "reason"],
            MediaKind::Image | MediaKind::Video => &["prediction", "confidence", "probability_fake"],
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single file picked by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInput {
    pub name: String,
    pub content: Bytes,
    /// Size reported by the caller, which may disagree with `content`
    pub declared_size: u64,
}

impl FileInput {
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        let content = content.into();
        Self {
            name: name.into(),
            declared_size: content.len() as u64,
            content,
        }
    }

    pub fn with_declared_size(mut self, declared_size: u64) -> Self {
        self.declared_size = declared_size;
        self
    }

    /// Read a file from disk, keeping only its final path component as the name
    ///
    /// Invalid UTF-8 in the name is replaced with U+FFFD.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(name, content))
    }

    /// Lower-cased text after the final `.` of the name
    ///
    /// Empty when the name has no `.` or the file is empty.
    pub fn extension(&self) -> String {
        if self.declared_size == 0 {
            return String::new();
        }

        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default()
    }
}

/// Caller input for one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    Text(String),
    Files(Vec<FileInput>),
}

impl RawInput {
    pub fn text(text: impl Into<String>) -> Self {
        RawInput::Text(text.into())
    }

    pub fn file(file: FileInput) -> Self {
        RawInput::Files(vec![file])
    }

    pub fn no_file() -> Self {
        RawInput::Files(Vec::new())
    }
}
