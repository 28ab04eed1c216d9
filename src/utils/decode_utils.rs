//! Payload decoding utilities
//!
//! Helper functions for turning embedded base64 payload text into raw
//! bytes and for building the index-derived output filenames.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::notebook::errors::NotebookResult;

/// Decode a base64 payload string into raw bytes
///
/// Notebook files wrap long payloads across lines, so ASCII whitespace
/// is stripped before the strict decoder runs. Any other invalid
/// character fails the decode.
pub fn decode_base64_payload(text: &str) -> NotebookResult<Vec<u8>> {
    let cleaned: String = text.chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = STANDARD.decode(cleaned.as_bytes())?;
    Ok(bytes)
}

/// Build the output filename for an extracted payload
///
/// The name encodes the zero-based cell and output positions so that
/// re-running an extraction reproduces identical names and provenance
/// stays traceable from the filename alone.
pub fn output_filename(cell_index: usize, output_index: usize, extension: &str) -> String {
    format!("cell_{}_output_{}.{}", cell_index, output_index, extension)
}
