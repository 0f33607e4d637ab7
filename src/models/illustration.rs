use std::path::Path;

use serde::Serialize;

/// One illustration to produce with the image-generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IllustrationJob {
    pub word: &'static str,
    /// Name of the object in the image bucket (`chat.webp`).
    pub filename: &'static str,
    pub prompt: &'static str,
}

impl IllustrationJob {
    /// Name of the file written by the generator. The service returns PNG data,
    /// so the bucket extension is swapped for `.png`.
    pub fn output_filename(&self) -> String {
        let stem = Path::new(self.filename)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(self.filename);
        format!("{}.png", stem)
    }
}

/// A job that could not be downloaded.
#[derive(Debug, Clone, Serialize)]
pub struct FailedImage {
    pub filename: String,
    pub error: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub succeeded: Vec<String>,
    pub failed: Vec<FailedImage>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}
