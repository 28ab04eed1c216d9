//! Notebook structure analysis command
//!
//! This module implements the command for analyzing and displaying
//! the structure of notebook documents.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::notebook::NotebookReader;
use crate::notebook::errors::{NotebookResult, NotebookError};
use crate::notebook::constants::{cell_types, output_types};
use crate::notebook::media::get_display_name;
use crate::notebook::types::{Cell, Notebook};
use crate::utils::logger::Logger;

/// Command for analyzing notebook structure
pub struct AnalyzeCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Whether to enable verbose output
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new AnalyzeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> NotebookResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| NotebookError::GenericError("Missing input file".to_string()))?
            .clone();

        let verbose = args.get_flag("verbose");

        Ok(AnalyzeCommand {
            input_file,
            verbose,
            logger,
        })
    }

    /// Display basic notebook information
    ///
    /// Shows the declared format version and cell counts by type.
    ///
    /// # Arguments
    /// * `notebook` - The notebook structure to analyze
    fn display_notebook_summary(&self, notebook: &Notebook) {
        info!("Notebook Analysis Results:");
        match (notebook.nbformat, notebook.nbformat_minor) {
            (Some(major), Some(minor)) => info!("  Format: nbformat {}.{}", major, minor),
            (Some(major), None) => info!("  Format: nbformat {}", major),
            _ => info!("  Format: undeclared"),
        }
        info!("  Number of cells: {}", notebook.cell_count());
        info!("  Code cells: {}", notebook.count_cells_of_type(cell_types::CODE));
        info!("  Markdown cells: {}", notebook.count_cells_of_type(cell_types::MARKDOWN));
        info!("  Raw cells: {}", notebook.count_cells_of_type(cell_types::RAW));
    }

    /// Display output information for a single code cell
    ///
    /// Shows each output's declared kind and, for media-bearing kinds,
    /// the media types present in its data mapping.
    ///
    /// # Arguments
    /// * `cell` - The cell to analyze
    /// * `index` - Position of the cell in the document sequence
    fn display_cell_outputs(&self, cell: &Cell, index: usize) {
        if cell.outputs.is_empty() && !self.verbose {
            return;
        }

        info!("\nCell #{} (code)", index);
        info!("  Number of outputs: {}", cell.outputs.len());

        for (output_index, output) in cell.outputs.iter().enumerate() {
            let kind = output.output_type.as_deref().unwrap_or("undeclared");
            info!("  Output #{}: {}", output_index, kind);

            if output_types::carries_media(kind) {
                for media_type in output.media_types() {
                    info!("    {} ({})", media_type, get_display_name(media_type));
                }
            }
        }
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> NotebookResult<()> {
        debug!("Executing analyze command for {}", self.input_file);

        let mut reader = NotebookReader::new(self.logger);
        let notebook = reader.load(&self.input_file)?;

        self.display_notebook_summary(&notebook);

        for (index, cell) in notebook.code_cells() {
            self.display_cell_outputs(cell, index);
        }

        Ok(())
    }
}
