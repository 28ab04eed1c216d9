//! Notebook format constants
//!
//! This module defines constants used throughout the notebook processing
//! code, replacing magic strings with descriptive names.

/// Cell type literals as stored in the document
pub mod cell_types {
    /// Executable code cell
    pub const CODE: &str = "code";

    /// Markdown documentation cell
    pub const MARKDOWN: &str = "markdown";

    /// Raw text cell
    pub const RAW: &str = "raw";
}

/// Output kind literals as stored in the document
pub mod output_types {
    /// Rich display output emitted by the kernel
    pub const DISPLAY_DATA: &str = "display_data";

    /// Result value of executing a cell
    pub const EXECUTE_RESULT: &str = "execute_result";

    /// Stream output (stdout/stderr)
    pub const STREAM: &str = "stream";

    /// Error traceback output
    pub const ERROR: &str = "error";

    /// Returns true for the two kinds that can carry embedded images
    ///
    /// Both are treated identically: they differ in how the kernel
    /// produced them, not in how their data mapping is laid out.
    pub fn carries_media(output_type: &str) -> bool {
        output_type == DISPLAY_DATA || output_type == EXECUTE_RESULT
    }
}

/// Media type keys in an output's data mapping
pub mod media {
    /// The embedded image payload key consulted for extraction
    pub const IMAGE_PNG: &str = "image/png";

    /// Plain text representation
    pub const TEXT_PLAIN: &str = "text/plain";

    /// HTML representation
    pub const TEXT_HTML: &str = "text/html";
}
