//! Integration tests for the notebook extraction workflow

extern crate std;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

// Import crate items
use nbkit::NbKit;
use nbkit::commands::BatchConfig;
use nbkit::notebook::NotebookError;

/// Bytes stood in for a real PNG payload
const IMAGE_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3, 4];

/// Returns a fresh scratch directory for one test
fn scratch_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join("nbkit_integration").join(name);
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Creates an NbKit instance logging into the scratch directory
fn nbkit_in(dir: &Path) -> NbKit {
    let log_path = dir.join("test.log");
    NbKit::new(Some(log_path.to_str().unwrap())).unwrap()
}

fn write_notebook(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn sample_notebook_with_image() -> String {
    format!(r##"{{
        "nbformat": 4,
        "nbformat_minor": 5,
        "cells": [
            {{"cell_type": "markdown", "source": ["# Results"]}},
            {{
                "cell_type": "code",
                "source": ["plot()"],
                "outputs": [
                    {{
                        "output_type": "display_data",
                        "data": {{"image/png": "{}"}}
                    }}
                ]
            }}
        ]
    }}"##, STANDARD.encode(IMAGE_BYTES))
}

#[test]
fn test_extracts_image_with_original_cell_position() {
    let dir = scratch_dir("single_image");
    let kit = nbkit_in(&dir);

    let notebook_path = write_notebook(&dir, "sample.ipynb", &sample_notebook_with_image());
    let output_dir = dir.join("figures");

    let count = kit.extract(&notebook_path, output_dir.to_str().unwrap()).unwrap();
    std::assert_eq!(count, 1);

    // The markdown cell occupies position 0, so the file names cell 1
    let image_path = output_dir.join("cell_1_output_0.png");
    std::assert!(image_path.exists());
    std::assert_eq!(fs::read(&image_path).unwrap(), IMAGE_BYTES);

    // No file for the markdown cell
    std::assert!(!output_dir.join("cell_0_output_0.png").exists());
}

#[test]
fn test_extraction_is_reproducible() {
    let dir = scratch_dir("reproducible");
    let kit = nbkit_in(&dir);

    let notebook_path = write_notebook(&dir, "sample.ipynb", &sample_notebook_with_image());
    let output_dir = dir.join("figures");

    let first = kit.extract(&notebook_path, output_dir.to_str().unwrap()).unwrap();
    let second = kit.extract(&notebook_path, output_dir.to_str().unwrap()).unwrap();

    std::assert_eq!(first, second);
    std::assert_eq!(fs::read(output_dir.join("cell_1_output_0.png")).unwrap(), IMAGE_BYTES);

    // Exactly one file, overwritten in place
    let entries = fs::read_dir(&output_dir).unwrap().count();
    std::assert_eq!(entries, 1);
}

#[test]
fn test_extracts_from_multiple_code_cells() {
    let dir = scratch_dir("two_cells");
    let kit = nbkit_in(&dir);

    let payload = STANDARD.encode(IMAGE_BYTES);
    let content = format!(r#"{{
        "cells": [
            {{
                "cell_type": "code",
                "outputs": [
                    {{"output_type": "display_data", "data": {{"image/png": "{payload}"}}}}
                ]
            }},
            {{
                "cell_type": "code",
                "outputs": [
                    {{"output_type": "execute_result", "data": {{"image/png": "{payload}"}}}}
                ]
            }}
        ]
    }}"#);

    let notebook_path = write_notebook(&dir, "two.ipynb", &content);
    let output_dir = dir.join("figures");

    let count = kit.extract(&notebook_path, output_dir.to_str().unwrap()).unwrap();
    std::assert_eq!(count, 2);
    std::assert!(output_dir.join("cell_0_output_0.png").exists());
    std::assert!(output_dir.join("cell_1_output_0.png").exists());
}

#[test]
fn test_no_code_cells_extracts_nothing() {
    let dir = scratch_dir("no_code");
    let kit = nbkit_in(&dir);

    let content = r#"{"cells": [{"cell_type": "markdown", "source": ["text"]}]}"#;
    let notebook_path = write_notebook(&dir, "prose.ipynb", content);
    let output_dir = dir.join("figures");

    let count = kit.extract(&notebook_path, output_dir.to_str().unwrap()).unwrap();
    std::assert_eq!(count, 0);
    std::assert_eq!(fs::read_dir(&output_dir).unwrap().count(), 0);
}

#[test]
fn test_skips_unrecognized_output_kinds_and_missing_keys() {
    let dir = scratch_dir("skips");
    let kit = nbkit_in(&dir);

    let payload = STANDARD.encode(IMAGE_BYTES);
    let content = format!(r#"{{
        "cells": [
            {{
                "cell_type": "code",
                "outputs": [
                    {{"output_type": "stream", "text": ["running...\n"]}},
                    {{"output_type": "display_data", "data": {{"text/plain": "<Figure>"}}}},
                    {{"output_type": "execute_result", "data": {{"image/png": "{payload}"}}}}
                ]
            }}
        ]
    }}"#);

    let notebook_path = write_notebook(&dir, "mixed.ipynb", &content);
    let output_dir = dir.join("figures");

    let count = kit.extract(&notebook_path, output_dir.to_str().unwrap()).unwrap();
    std::assert_eq!(count, 1);

    // Output index 2 is preserved even though earlier outputs produced nothing
    std::assert!(output_dir.join("cell_0_output_2.png").exists());
    std::assert!(!output_dir.join("cell_0_output_0.png").exists());
    std::assert!(!output_dir.join("cell_0_output_1.png").exists());
}

#[test]
fn test_invalid_base64_aborts_extraction() {
    let dir = scratch_dir("invalid_base64");
    let kit = nbkit_in(&dir);

    let content = r#"{
        "cells": [
            {
                "cell_type": "code",
                "outputs": [
                    {"output_type": "display_data", "data": {"image/png": "!!!not-base64!!!"}}
                ]
            }
        ]
    }"#;

    let notebook_path = write_notebook(&dir, "broken.ipynb", content);
    let output_dir = dir.join("figures");

    let result = kit.extract(&notebook_path, output_dir.to_str().unwrap());
    std::assert!(std::matches!(result, Err(NotebookError::Base64Error(_))));

    // The directory was created before the walk, but no file was written
    std::assert!(output_dir.exists());
    std::assert_eq!(fs::read_dir(&output_dir).unwrap().count(), 0);
}

#[test]
fn test_failure_keeps_earlier_files() {
    let dir = scratch_dir("partial_failure");
    let kit = nbkit_in(&dir);

    let payload = STANDARD.encode(IMAGE_BYTES);
    let content = format!(r#"{{
        "cells": [
            {{
                "cell_type": "code",
                "outputs": [
                    {{"output_type": "display_data", "data": {{"image/png": "{payload}"}}}},
                    {{"output_type": "display_data", "data": {{"image/png": "!!!not-base64!!!"}}}}
                ]
            }}
        ]
    }}"#);

    let notebook_path = write_notebook(&dir, "half.ipynb", &content);
    let output_dir = dir.join("figures");

    let result = kit.extract(&notebook_path, output_dir.to_str().unwrap());
    std::assert!(result.is_err());

    // The first output was written before the failure point, no rollback
    std::assert!(output_dir.join("cell_0_output_0.png").exists());
    std::assert!(!output_dir.join("cell_0_output_1.png").exists());
}

#[test]
fn test_malformed_document_fails() {
    let dir = scratch_dir("malformed");
    let kit = nbkit_in(&dir);

    let notebook_path = write_notebook(&dir, "broken.ipynb", "{\"nbformat\": 4}");
    let output_dir = dir.join("figures");

    let result = kit.extract(&notebook_path, output_dir.to_str().unwrap());
    std::assert!(std::matches!(result, Err(NotebookError::JsonError(_))));
}

#[test]
fn test_analyze_reports_structure_without_writing() {
    let dir = scratch_dir("analyze");
    let kit = nbkit_in(&dir);

    let notebook_path = write_notebook(&dir, "sample.ipynb", &sample_notebook_with_image());

    let summary = kit.analyze(&notebook_path).unwrap();
    std::assert!(summary.contains("Number of cells: 2"));
    std::assert!(summary.contains("Code cells: 1"));
    std::assert!(summary.contains("image/png"));
    std::assert!(summary.contains("PNG image"));

    // Analysis never creates output files
    std::assert!(!dir.join("figures").exists());
}

#[test]
fn test_batch_extraction_sums_counts() {
    let dir = scratch_dir("batch");
    let kit = nbkit_in(&dir);

    let first = write_notebook(&dir, "first.ipynb", &sample_notebook_with_image());
    let second = write_notebook(&dir, "second.ipynb", &sample_notebook_with_image());

    let jobs = vec![
        (first, dir.join("figures/first").to_str().unwrap().to_string()),
        (second, dir.join("figures/second").to_str().unwrap().to_string()),
    ];

    let total = kit.extract_batch(&jobs).unwrap();
    std::assert_eq!(total, 2);
    std::assert!(dir.join("figures/first/cell_1_output_0.png").exists());
    std::assert!(dir.join("figures/second/cell_1_output_0.png").exists());
}

#[test]
fn test_batch_config_parsing() {
    let config = BatchConfig::from_str(r#"
        [[job]]
        input = "knn_cuda_native.ipynb"
        output = "figures/knn"

        [[job]]
        input = "kmeans_cuda_native.ipynb"
        output = "figures/kmeans"
    "#).unwrap();

    std::assert_eq!(config.jobs.len(), 2);
    std::assert_eq!(config.jobs[0].input, "knn_cuda_native.ipynb");
    std::assert_eq!(config.jobs[0].output, "figures/knn");
    std::assert_eq!(config.jobs[1].input, "kmeans_cuda_native.ipynb");
}

#[test]
fn test_batch_config_rejects_incomplete_job() {
    let result = BatchConfig::from_str(r#"
        [[job]]
        input = "only_input.ipynb"
    "#);

    std::assert!(result.is_err());
}
