//! Image extraction command
//!
//! This module implements the command for extracting embedded images
//! from notebook files into an output directory.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::notebook::errors::{NotebookResult, NotebookError};
use crate::extractor::ImageExtractor;
use crate::utils::logger::Logger;

/// Command for extracting embedded images from notebook files
pub struct ExtractCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Directory to write extracted images into
    output_dir: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> NotebookResult<Self> {
        info!("Creating new extract command from arguments");

        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| NotebookError::GenericError("Missing input file".to_string()))?
            .clone();
        info!("Input file: {}", input_file);

        let output_dir = args.get_one::<String>("output")
            .ok_or_else(|| NotebookError::GenericError("Missing output directory for extraction".to_string()))?
            .clone();
        info!("Output directory: {}", output_dir);

        Ok(ExtractCommand {
            input_file,
            output_dir,
            logger,
        })
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> NotebookResult<()> {
        info!("Extracting images from {}...", self.input_file);

        let mut extractor = ImageExtractor::new(self.logger);
        let count = extractor.extract(&self.input_file, &self.output_dir)?;

        info!("Total images extracted: {}", count);
        Ok(())
    }
}
