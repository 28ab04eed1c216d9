//! Notebook file reader implementation
//!
//! This module implements the reader that loads a notebook document
//! from disk and materializes it fully in memory.

use log::{debug, info};
use std::fs;

use crate::notebook::errors::NotebookResult;
use crate::notebook::types::Notebook;
use crate::utils::logger::Logger;

/// Reader for notebook documents
pub struct NotebookReader<'a> {
    /// Logger instance
    logger: &'a Logger,
    /// Current file path
    current_file: Option<String>,
}

impl<'a> NotebookReader<'a> {
    /// Creates a new notebook reader
    pub fn new(logger: &'a Logger) -> Self {
        NotebookReader {
            logger,
            current_file: None,
        }
    }

    /// Loads a notebook document from the given path
    ///
    /// This is the main entry point for loading a document. The file is
    /// read fully into memory and parsed in one pass.
    ///
    /// # Arguments
    /// * `path` - Path to the notebook file
    ///
    /// # Returns
    /// The parsed notebook or an error if the file is unreadable or
    /// the content is not a valid document
    pub fn load(&mut self, path: &str) -> NotebookResult<Notebook> {
        info!("Loading notebook file: {}", path);
        self.current_file = Some(path.to_string());

        let content = fs::read_to_string(path)?;
        debug!("Read {} bytes from {}", content.len(), path);

        let notebook = self.read_str(&content)?;
        info!("Parsed notebook with {} cells", notebook.cell_count());
        self.logger.log(&format!("Loaded {}: {} cells", path, notebook.cell_count()))?;

        Ok(notebook)
    }

    /// Parses a notebook document from a JSON string
    ///
    /// A document without the required top-level cell sequence fails
    /// here rather than silently defaulting to an empty one.
    pub fn read_str(&self, content: &str) -> NotebookResult<Notebook> {
        let notebook: Notebook = serde_json::from_str(content)?;
        Ok(notebook)
    }

    /// Returns the path of the last loaded file, if any
    pub fn current_file(&self) -> Option<&str> {
        self.current_file.as_deref()
    }
}
