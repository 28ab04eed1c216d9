//! Image extraction from notebook documents
//!
//! This module provides functionality to extract embedded image data
//! from code cell outputs and persist it on disk.

mod image_extractor;

// Public exports
pub use image_extractor::ImageExtractor;
