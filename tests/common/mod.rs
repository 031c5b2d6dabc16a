/*!
 * Common test utilities for the subcue test suite
 */

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

// Re-export the mock cue parser module
pub mod mock_parser;

/// Initializes test logging once; later calls are no-ops
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample SRT file for testing
pub fn create_test_srt(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = "1\n00:00:01,000 --> 00:00:02,000\n{\\i1}Hello{\\i}\n\n2\n00:00:02,000 --> 00:00:03,500\nSecond line\n";
    create_test_file(dir, filename, content)
}

/// Creates a sample ASS script for testing
pub fn create_test_ass(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = "[Script Info]\nTitle: Test\n\n[Events]\nFormat: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\nDialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,{\\i1}Hello{\\i0}\nDialogue: 0,0:00:03.00,0:00:04.50,Default,,0,0,0,,Line one\\NLine two\n";
    create_test_file(dir, filename, content)
}
