//! Offline illustration batches.
//!
//! Both batches walk the job list one image at a time with a pause between
//! requests, so the free image service is not hammered. A failed image is
//! recorded and the batch moves on.

mod generator;
mod jobs;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};

pub use generator::{DownloadError, ImageGenerator};
pub use jobs::ILLUSTRATIONS;

use crate::models::{BatchReport, FailedImage, IllustrationJob};
use crate::retry::retry;

/// How a batch treats each job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Attempts per image, including the first one.
    pub attempts: u32,
    /// Pause before retrying a failed image.
    pub retry_delay: Duration,
    /// Pause between two images.
    pub request_delay: Duration,
    /// Skip jobs whose output file already exists.
    pub only_missing: bool,
}

impl BatchOptions {
    /// Generate every illustration once.
    pub fn generate_all() -> Self {
        Self {
            attempts: 1,
            retry_delay: Duration::ZERO,
            request_delay: Duration::from_secs(2),
            only_missing: false,
        }
    }

    /// Fill the gaps left by an earlier run, retrying each image.
    pub fn regenerate_missing() -> Self {
        Self {
            attempts: 3,
            retry_delay: Duration::from_secs(3),
            request_delay: Duration::from_secs(3),
            only_missing: true,
        }
    }
}

/// Jobs to run for `out_dir`.
pub fn pending_jobs(
    jobs: &[IllustrationJob],
    out_dir: &Path,
    only_missing: bool,
) -> Vec<IllustrationJob> {
    jobs.iter()
        .filter(|job| !only_missing || !out_dir.join(job.output_filename()).exists())
        .copied()
        .collect()
}

/// Download every pending job into `out_dir`, printing progress.
pub async fn run_batch(
    generator: &ImageGenerator,
    jobs: &[IllustrationJob],
    out_dir: &Path,
    options: BatchOptions,
) -> Result<BatchReport> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let pending = pending_jobs(jobs, out_dir, options.only_missing);
    let total = pending.len();
    let mut report = BatchReport::default();
    tracing::info!("Generating {} illustrations into {}", total, out_dir.display());

    for (index, job) in pending.iter().enumerate() {
        println!(
            "[{}/{}] Generating: {} ({})",
            index + 1,
            total,
            job.word,
            job.filename
        );

        let result = retry(options.attempts, options.retry_delay, |attempt| async move {
            let result = generator.generate(job, out_dir).await;
            if let Err(e) = &result {
                println!("  ✗ Attempt {} failed: {}", attempt, e);
            }
            result
        })
        .await;

        match result {
            Ok(path) => {
                let name = job.output_filename();
                println!("  ✓ Saved: {}", name);
                tracing::debug!("Saved {}", path.display());
                report.succeeded.push(name);
            }
            Err(e) => report.failed.push(FailedImage {
                filename: job.output_filename(),
                error: e.to_string(),
            }),
        }

        if index + 1 < total {
            tokio::time::sleep(options.request_delay).await;
        }
    }

    Ok(report)
}

/// Print the end-of-run tally.
pub fn print_summary(report: &BatchReport, out_dir: &Path) {
    println!();
    println!("Summary");
    println!("  Success: {:>3} images", report.succeeded.len());
    println!("  Failed:  {:>3} images", report.failed.len());

    if !report.failed.is_empty() {
        println!();
        println!("Failed images:");
        for failed in &report.failed {
            println!("  - {}: {}", failed.filename, failed.error);
        }
    }

    println!();
    println!("Images saved to: {}", out_dir.display());
    println!("Upload them to the public storage bucket once reviewed.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::VOCABULARY;

    #[test]
    fn every_job_matches_an_illustrated_word() {
        assert_eq!(ILLUSTRATIONS.len(), 50);
        for job in ILLUSTRATIONS {
            let entry = VOCABULARY
                .iter()
                .find(|e| e.text == job.word)
                .unwrap_or_else(|| panic!("{} missing from vocabulary", job.word));
            assert_eq!(entry.illustration, Some(job.filename));
        }
    }

    #[test]
    fn pending_jobs_skips_existing_files_only_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("chat.png"), b"png").unwrap();

        let all = pending_jobs(ILLUSTRATIONS, dir.path(), false);
        assert_eq!(all.len(), ILLUSTRATIONS.len());

        let missing = pending_jobs(ILLUSTRATIONS, dir.path(), true);
        assert_eq!(missing.len(), ILLUSTRATIONS.len() - 1);
        assert!(missing.iter().all(|j| j.word != "chat"));
    }

    #[test]
    fn regenerate_retries_and_generate_does_not() {
        assert_eq!(BatchOptions::generate_all().attempts, 1);
        assert_eq!(BatchOptions::regenerate_missing().attempts, 3);
        assert!(BatchOptions::regenerate_missing().only_missing);
    }
}
