//! Embedded image extraction
//!
//! This module implements the walk over a notebook document that
//! locates base64-encoded image payloads in code cell outputs, decodes
//! them and writes each one to disk under an index-derived name.

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::notebook::constants::{media, output_types};
use crate::notebook::errors::{NotebookError, NotebookResult};
use crate::notebook::reader::NotebookReader;
use crate::notebook::types::{Notebook, Output};
use crate::notebook::media::get_file_extension;
use crate::utils::decode_utils;
use crate::utils::logger::Logger;

/// Extractor for embedded notebook images
pub struct ImageExtractor<'a> {
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ImageExtractor<'a> {
    /// Creates a new image extractor
    pub fn new(logger: &'a Logger) -> Self {
        ImageExtractor { logger }
    }

    /// Extract all embedded images from a notebook file
    ///
    /// Loads and parses the document, ensures the output directory
    /// exists, then walks the cell sequence writing one PNG file per
    /// image-bearing output.
    ///
    /// # Arguments
    /// * `notebook_path` - Path to the notebook file
    /// * `output_dir` - Directory to write extracted images into,
    ///   created (with parents) if absent
    ///
    /// # Returns
    /// The number of images written, or the first error encountered
    pub fn extract(&mut self, notebook_path: &str, output_dir: &str) -> NotebookResult<usize> {
        info!("Extracting images from {} into {}", notebook_path, output_dir);

        let mut reader = NotebookReader::new(self.logger);
        let notebook = reader.load(notebook_path)?;

        self.extract_notebook(&notebook, Path::new(output_dir))
    }

    /// Extract all embedded images from an already-parsed notebook
    ///
    /// The walk visits every cell in document order, keeping zero-based
    /// positions for cells and outputs regardless of how many of them
    /// carry image data, so filenames stay stable across runs.
    ///
    /// A malformed payload aborts the whole extraction; files written
    /// before the failure point are left on disk.
    pub fn extract_notebook(&self, notebook: &Notebook, output_dir: &Path) -> NotebookResult<usize> {
        fs::create_dir_all(output_dir)?;
        debug!("Output directory ready: {}", output_dir.display());

        let mut image_count = 0;

        for (cell_index, cell) in notebook.cells.iter().enumerate() {
            if !cell.is_code() {
                continue;
            }

            for (output_index, output) in cell.outputs.iter().enumerate() {
                if let Some(payload) = Self::image_payload(output)? {
                    let path = self.write_image(&payload, output_dir, cell_index, output_index)?;
                    info!("Extracted: {}", path.display());
                    image_count += 1;
                }
            }
        }

        info!("Extraction finished, {} image(s) written", image_count);
        Ok(image_count)
    }

    /// Returns the decoded image bytes for an output, if it carries any
    ///
    /// Only the two output kinds that embed media are inspected, and
    /// only the PNG payload key is consulted. An output whose payload
    /// is present but malformed fails the call rather than being
    /// skipped.
    fn image_payload(output: &Output) -> NotebookResult<Option<Vec<u8>>> {
        let recognized = output.output_type.as_deref()
            .map(output_types::carries_media)
            .unwrap_or(false);
        if !recognized {
            return Ok(None);
        }

        let Some(value) = output.data.get(media::IMAGE_PNG) else {
            return Ok(None);
        };

        let text = value.as_text().ok_or_else(|| NotebookError::GenericError(
            format!("Payload for {} is not text", media::IMAGE_PNG)))?;

        let bytes = decode_utils::decode_base64_payload(&text)?;
        Ok(Some(bytes))
    }

    /// Write decoded image bytes to the index-derived filename
    ///
    /// An existing file under the same name is overwritten.
    fn write_image(&self, bytes: &[u8], output_dir: &Path,
                   cell_index: usize, output_index: usize) -> NotebookResult<PathBuf> {
        let extension = get_file_extension(media::IMAGE_PNG);
        let filename = decode_utils::output_filename(cell_index, output_index, &extension);
        let path = output_dir.join(filename);

        debug!("Writing {} bytes to {}", bytes.len(), path.display());
        fs::write(&path, bytes)?;

        Ok(path)
    }
}
