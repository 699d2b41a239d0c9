use std::fmt;
use std::path::{Path, PathBuf};

/// Where an image should come from when the user asks for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSourceMode {
    Library,
    Camera,
}

impl fmt::Display for ImageSourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSourceMode::Library => write!(f, "library"),
            ImageSourceMode::Camera => write!(f, "camera"),
        }
    }
}

/// Handle to a picked or captured photo on the local file system.
///
/// An empty locator is never a valid reference; use `Option<ImageReference>`
/// for the absent case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageReference {
    path: PathBuf,
}

impl ImageReference {
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            log::debug!("[IMAGE_REFERENCE] rejecting empty image locator");
            return None;
        }
        Some(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// OCR output for an image. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedText(String);

impl RecognizedText {
    pub fn from_raw(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for RecognizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
