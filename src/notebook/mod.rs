//! Notebook document parsing module
//!
//! This module provides structures and functions for reading
//! Jupyter-style notebook documents.

pub mod errors;
pub mod types;
pub mod reader;
mod tests;
pub mod media;
pub mod constants;

pub use errors::{NotebookError, NotebookResult};
pub use types::{Notebook, Cell, Output, MediaValue};
pub use reader::NotebookReader;
pub use media::{get_display_name, get_file_extension, is_image_media_type};
