use log::info;

use crate::notebook::errors::NotebookResult;
use crate::notebook::constants::output_types;
use crate::notebook::media::get_display_name;
use crate::notebook::reader::NotebookReader;
use crate::extractor::ImageExtractor;
use crate::utils::logger::Logger;

/// Main interface to the NbKit library
pub struct NbKit {
    logger: Logger,
}

impl NbKit {
    /// Create a new NbKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "nbkit.log"
    ///
    /// # Returns
    /// A NbKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> NotebookResult<Self> {
        let log_path = log_file.unwrap_or("nbkit.log");
        let logger = Logger::new(log_path)?;
        Ok(NbKit { logger })
    }

    /// Analyze a notebook file and return information about its structure
    ///
    /// # Arguments
    /// * `input_path` - Path to the notebook file to analyze
    ///
    /// # Returns
    /// String containing analysis information or an error
    pub fn analyze(&self, input_path: &str) -> NotebookResult<String> {
        // Load the document directly
        let mut reader = NotebookReader::new(&self.logger);
        let notebook = reader.load(input_path)?;

        // Format a summary of the document
        let mut result = format!("Notebook Analysis Results:\n");
        match (notebook.nbformat, notebook.nbformat_minor) {
            (Some(major), Some(minor)) => result.push_str(&format!("  Format: nbformat {}.{}\n", major, minor)),
            (Some(major), None) => result.push_str(&format!("  Format: nbformat {}\n", major)),
            _ => result.push_str("  Format: undeclared\n"),
        }
        result.push_str(&format!("  Number of cells: {}\n", notebook.cell_count()));
        result.push_str(&format!("  Code cells: {}\n", notebook.count_cells_of_type("code")));
        result.push_str(&format!("  Markdown cells: {}\n", notebook.count_cells_of_type("markdown")));

        // Add details for each code cell that produced output
        for (index, cell) in notebook.code_cells() {
            if cell.outputs.is_empty() {
                continue;
            }

            result.push_str(&format!("\nCell #{} (code)\n", index));
            result.push_str(&format!("  Number of outputs: {}\n", cell.outputs.len()));

            for (output_index, output) in cell.outputs.iter().enumerate() {
                let kind = output.output_type.as_deref().unwrap_or("undeclared");
                result.push_str(&format!("  Output #{}: {}\n", output_index, kind));

                if output.output_type.as_deref().map(output_types::carries_media).unwrap_or(false) {
                    for media_type in output.media_types() {
                        result.push_str(&format!("    {} ({})\n",
                                                 media_type,
                                                 get_display_name(media_type)));
                    }
                }
            }
        }

        Ok(result)
    }

    /// Extract embedded images from a notebook file
    ///
    /// Walks the document's code cells in order and writes every
    /// base64-encoded PNG payload found in their outputs to
    /// `output_dir`, one file per output, named by the zero-based cell
    /// and output positions.
    ///
    /// # Arguments
    /// * `input_path` - Path to the input notebook file
    /// * `output_dir` - Directory to write extracted images into
    ///
    /// # Returns
    /// The number of images written, or an error
    pub fn extract(&self, input_path: &str, output_dir: &str) -> NotebookResult<usize> {
        let mut extractor = ImageExtractor::new(&self.logger);
        extractor.extract(input_path, output_dir)
    }

    /// Extract embedded images from a list of notebook/output pairs
    ///
    /// Jobs run sequentially and independently; each document is walked
    /// once and its count recorded. The per-document counts and the
    /// grand total are written to the log file.
    ///
    /// # Arguments
    /// * `jobs` - Pairs of notebook path and output directory
    ///
    /// # Returns
    /// The total number of images written across all jobs, or the
    /// first error encountered
    pub fn extract_batch(&self, jobs: &[(String, String)]) -> NotebookResult<usize> {
        let mut counts = Vec::new();

        for (input_path, output_dir) in jobs {
            info!("Extracting images from {}...", input_path);
            let count = self.extract(input_path, output_dir)?;
            info!("Total images extracted from {}: {}", input_path, count);
            counts.push((input_path.clone(), count));
        }

        self.logger.print_extraction_summary(&counts)?;

        let total = counts.iter().map(|(_, count)| count).sum();
        info!("Total images extracted: {}", total);
        Ok(total)
    }
}
