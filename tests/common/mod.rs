/*!
 * Common test utilities for the scim2fcitx test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use tempfile::TempDir;

/// Route library log output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A small but complete SCIM table source
pub const SAMPLE_SCIM: &str = "\
### A sample table
SCIM_Generic_Table_Phrase_Library_TEXT
VERSION_1_0

BEGIN_DEFINITION
NAME = Test Table
VALID_INPUT_CHARS = abcdefghijklmnopqrstuvwxyz
MAX_KEY_LENGTH = 4
DYNAMIC_ADJUST = TRUE
AUTO_COMMIT = FALSE
AUTO_FILL = FALSE
SHOW_KEY_PROMPT = TRUE
END_DEFINITION

BEGIN_TABLE
ab\t中文\t100
END_TABLE
";

/// Creates the sample SCIM table in the given directory
pub fn create_sample_scim(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_SCIM)
}
