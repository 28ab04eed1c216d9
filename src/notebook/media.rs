//! Media type definitions and utilities
//!
//! This module provides lookup tables for the media-type keys found in
//! notebook output data mappings.

use std::collections::HashMap;
use std::fs;
use lazy_static::lazy_static;
use crate::notebook::errors::{NotebookError, NotebookResult};

lazy_static! {
    // Parse the TOML file at startup
    static ref MEDIA_DEFINITIONS: MediaDefinitions = {
        let content = include_str!("../../notebook_media.toml");
        MediaDefinitions::from_str(content).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse media type definitions: {}", e);
                MediaDefinitions::default()
            })
    };
}

/// Container for media type definitions
#[derive(Debug, Default)]
pub struct MediaDefinitions {
    // Maps media types to readable display names
    pub display_names: HashMap<String, String>,
    // Maps media types to file extensions
    pub file_extensions: HashMap<String, String>,
}

impl MediaDefinitions {
    /// Parse media definitions from a TOML string
    pub fn from_str(content: &str) -> NotebookResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(NotebookError::GenericError(format!("Failed to parse TOML: {}", e))),
        };

        let mut defs = MediaDefinitions::default();

        Self::parse_string_table(&toml_value, "display_names", &mut defs.display_names);
        Self::parse_string_table(&toml_value, "file_extensions", &mut defs.file_extensions);

        Ok(defs)
    }

    /// Helper to parse string tables from TOML
    fn parse_string_table(toml_value: &toml::Value, table_name: &str, target: &mut HashMap<String, String>) {
        if let Some(table) = toml_value.get(table_name).and_then(|v| v.as_table()) {
            for (k, v) in table {
                if let Some(value) = v.as_str() {
                    target.insert(k.clone(), value.to_string());
                }
            }
        }
    }

    /// Load media definitions from a TOML file
    pub fn from_file(path: &str) -> NotebookResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return Err(NotebookError::IoError(e)),
        };

        Self::from_str(&contents)
    }

    /// Get a display name for a media type
    pub fn get_display_name(&self, media_type: &str) -> String {
        self.display_names.get(media_type)
            .cloned()
            .unwrap_or_else(|| media_type.to_string())
    }

    /// Get a file extension for a media type
    pub fn get_file_extension(&self, media_type: &str) -> String {
        self.file_extensions.get(media_type)
            .cloned()
            .unwrap_or_else(|| "bin".to_string())
    }
}

/// Get the display name for a media type from the compiled-in table
pub fn get_display_name(media_type: &str) -> String {
    MEDIA_DEFINITIONS.get_display_name(media_type)
}

/// Get the file extension for a media type from the compiled-in table
pub fn get_file_extension(media_type: &str) -> String {
    MEDIA_DEFINITIONS.get_file_extension(media_type)
}

/// Check whether a media type names an embedded image payload
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}
