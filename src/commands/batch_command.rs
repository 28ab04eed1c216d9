//! Batch extraction command
//!
//! This module implements the command for running several extraction
//! jobs from a TOML job file, one (input, output) pair per job.

use clap::ArgMatches;
use log::{info, warn};
use std::fs;

use crate::commands::command_traits::Command;
use crate::notebook::errors::{NotebookResult, NotebookError};
use crate::extractor::ImageExtractor;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// A single extraction job: one notebook, one output directory
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionJob {
    /// Path to the notebook file
    pub input: String,
    /// Directory to write extracted images into
    pub output: String,
}

/// Parsed batch job file
///
/// The file lists jobs as TOML array-of-tables:
///
/// ```toml
/// [[job]]
/// input = "knn_cuda_native.ipynb"
/// output = "figures/knn"
///
/// [[job]]
/// input = "kmeans_cuda_native.ipynb"
/// output = "figures/kmeans"
/// ```
#[derive(Debug, Default)]
pub struct BatchConfig {
    /// Jobs in file order
    pub jobs: Vec<ExtractionJob>,
}

impl BatchConfig {
    /// Parse a batch job file from a TOML string
    pub fn from_str(content: &str) -> NotebookResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(NotebookError::GenericError(format!("Failed to parse job file: {}", e))),
        };

        let mut config = BatchConfig::default();

        if let Some(entries) = toml_value.get("job").and_then(|v| v.as_array()) {
            for (index, entry) in entries.iter().enumerate() {
                let input = entry.get("input").and_then(|v| v.as_str())
                    .ok_or_else(|| NotebookError::GenericError(
                        format!("Job #{} is missing the 'input' key", index)))?;
                let output = entry.get("output").and_then(|v| v.as_str())
                    .ok_or_else(|| NotebookError::GenericError(
                        format!("Job #{} is missing the 'output' key", index)))?;

                config.jobs.push(ExtractionJob {
                    input: input.to_string(),
                    output: output.to_string(),
                });
            }
        }

        Ok(config)
    }

    /// Load a batch job file from disk
    pub fn from_file(path: &str) -> NotebookResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return Err(NotebookError::IoError(e)),
        };

        Self::from_str(&contents)
    }
}

/// Command for running a list of extraction jobs
pub struct BatchCommand<'a> {
    /// Path to the TOML job file
    job_file: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> BatchCommand<'a> {
    /// Create a new batch command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new BatchCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> NotebookResult<Self> {
        let job_file = args.get_one::<String>("input")
            .ok_or_else(|| NotebookError::GenericError("Missing job file".to_string()))?
            .clone();
        info!("Job file: {}", job_file);

        Ok(BatchCommand {
            job_file,
            logger,
        })
    }
}

impl<'a> Command for BatchCommand<'a> {
    fn execute(&self) -> NotebookResult<()> {
        let config = BatchConfig::from_file(&self.job_file)?;

        if config.jobs.is_empty() {
            warn!("Job file {} declares no jobs", self.job_file);
            return Ok(());
        }

        info!("Running {} extraction job(s)", config.jobs.len());
        let progress = ProgressTracker::new(config.jobs.len() as u64, "Extracting notebooks");

        let mut counts = Vec::new();
        for job in &config.jobs {
            progress.set_message(&job.input);

            let mut extractor = ImageExtractor::new(self.logger);
            let count = extractor.extract(&job.input, &job.output)?;
            info!("Total images extracted from {}: {}", job.input, count);

            counts.push((job.input.clone(), count));
            progress.increment(1);
        }
        progress.finish();

        self.logger.print_extraction_summary(&counts)?;

        let total: usize = counts.iter().map(|(_, count)| count).sum();
        info!("Total images extracted: {}", total);

        Ok(())
    }
}
