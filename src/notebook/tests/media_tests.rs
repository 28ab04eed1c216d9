//! Tests for the media type definitions module

extern crate std;

use crate::notebook::media::{self, MediaDefinitions};

#[test]
fn test_compiled_in_definitions() {
    std::assert_eq!(media::get_file_extension("image/png"), "png");
    std::assert_eq!(media::get_display_name("image/png"), "PNG image");
    std::assert_eq!(media::get_display_name("text/plain"), "Plain text");
}

#[test]
fn test_unknown_media_type_fallbacks() {
    // Unknown types display as themselves and get a generic extension
    std::assert_eq!(media::get_display_name("application/x-custom"), "application/x-custom");
    std::assert_eq!(media::get_file_extension("application/x-custom"), "bin");
}

#[test]
fn test_is_image_media_type() {
    std::assert!(media::is_image_media_type("image/png"));
    std::assert!(media::is_image_media_type("image/jpeg"));
    std::assert!(!media::is_image_media_type("text/plain"));
    std::assert!(!media::is_image_media_type("application/json"));
}

#[test]
fn test_definitions_from_str() {
    let defs = MediaDefinitions::from_str(r#"
        [display_names]
        "image/webp" = "WebP image"

        [file_extensions]
        "image/webp" = "webp"
    "#).unwrap();

    std::assert_eq!(defs.get_display_name("image/webp"), "WebP image");
    std::assert_eq!(defs.get_file_extension("image/webp"), "webp");
}

#[test]
fn test_definitions_from_invalid_toml() {
    let result = MediaDefinitions::from_str("display_names = not toml");
    std::assert!(result.is_err());
}

#[test]
fn test_definitions_ignore_non_string_values() {
    let defs = MediaDefinitions::from_str(r#"
        [file_extensions]
        "image/webp" = 42
    "#).unwrap();

    // Non-string entries are skipped, lookup falls back
    std::assert_eq!(defs.get_file_extension("image/webp"), "bin");
}
