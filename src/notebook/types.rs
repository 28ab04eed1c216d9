//! Core notebook data structures
//!
//! The document model mirrors the on-disk ipynb shape: a notebook holds
//! an ordered list of cells, code cells hold an ordered list of outputs,
//! and outputs carry a media-type keyed data mapping.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::notebook::constants::cell_types;

/// Represents a parsed notebook document
///
/// The `cells` field is required; a document without it fails to parse.
/// Format version fields are kept for display only and never validated.
#[derive(Debug, Deserialize)]
pub struct Notebook {
    /// Ordered cell sequence of the document
    pub cells: Vec<Cell>,
    /// Major format version, when declared
    #[serde(default)]
    pub nbformat: Option<u32>,
    /// Minor format version, when declared
    #[serde(default)]
    pub nbformat_minor: Option<u32>,
}

impl Notebook {
    /// Returns the number of cells in the document
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of cells declaring the given type
    pub fn count_cells_of_type(&self, cell_type: &str) -> usize {
        self.cells.iter()
            .filter(|cell| cell.cell_type.as_deref() == Some(cell_type))
            .count()
    }

    /// Returns references to the code cells, paired with their
    /// zero-based position in the original cell sequence
    pub fn code_cells(&self) -> Vec<(usize, &Cell)> {
        self.cells.iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_code())
            .collect()
    }
}

impl fmt::Display for Notebook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Notebook Document:")?;
        match (self.nbformat, self.nbformat_minor) {
            (Some(major), Some(minor)) => writeln!(f, "  Format: nbformat {}.{}", major, minor)?,
            (Some(major), None) => writeln!(f, "  Format: nbformat {}", major)?,
            _ => writeln!(f, "  Format: undeclared")?,
        }
        writeln!(f, "  Number of cells: {}", self.cells.len())?;
        Ok(())
    }
}

/// A single notebook cell
#[derive(Debug, Deserialize)]
pub struct Cell {
    /// Declared cell type ("code", "markdown", "raw"), when present
    #[serde(default)]
    pub cell_type: Option<String>,
    /// Ordered output sequence, empty when the cell declares none
    #[serde(default)]
    pub outputs: Vec<Output>,
}

impl Cell {
    /// Returns true when the cell declares the "code" type
    pub fn is_code(&self) -> bool {
        self.cell_type.as_deref() == Some(cell_types::CODE)
    }
}

/// A single cell output
#[derive(Debug, Deserialize)]
pub struct Output {
    /// Declared output kind ("display_data", "execute_result", ...),
    /// when present
    #[serde(default)]
    pub output_type: Option<String>,
    /// Media-type keyed payload mapping, empty when absent
    #[serde(default)]
    pub data: BTreeMap<String, MediaValue>,
}

impl Output {
    /// Returns the payload for a media type as joined text
    ///
    /// Returns `None` when the key is absent or the payload is not
    /// textual (some media types embed structured JSON values).
    pub fn media_text(&self, media_type: &str) -> Option<String> {
        self.data.get(media_type).and_then(MediaValue::as_text)
    }

    /// Returns the media types present in the data mapping
    pub fn media_types(&self) -> Vec<&str> {
        self.data.keys().map(String::as_str).collect()
    }
}

/// Payload value in an output's data mapping
///
/// The format stores textual payloads either as a single string or as a
/// list of line fragments; other media types carry arbitrary JSON.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MediaValue {
    /// Single-string payload
    Text(String),
    /// Payload split into line fragments
    Lines(Vec<String>),
    /// Non-textual payload (structured JSON, numbers, ...)
    Other(serde_json::Value),
}

impl MediaValue {
    /// Returns the payload as one string, joining line fragments
    pub fn as_text(&self) -> Option<String> {
        match self {
            MediaValue::Text(s) => Some(s.clone()),
            MediaValue::Lines(lines) => Some(lines.concat()),
            MediaValue::Other(_) => None,
        }
    }

    /// Returns true when the payload carries text
    pub fn is_text(&self) -> bool {
        !matches!(self, MediaValue::Other(_))
    }
}
