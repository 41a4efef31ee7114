use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{ConvertError, ConvertResult};

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> ConvertResult<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(|e| ConvertError::io(path, e))?;
        }
        Ok(())
    }

    // @generates: `<output_dir>/<im_name>.<extension>`
    pub fn output_path<P: AsRef<Path>>(output_dir: P, im_name: &str, extension: &str) -> PathBuf {
        output_dir.as_ref().join(format!("{}.{}", im_name, extension))
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> ConvertResult<String> {
        let path = path.as_ref();
        fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))
    }

    /// Write a string to a file, replacing any existing content
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> ConvertResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(path, content).map_err(|e| ConvertError::io(path, e))
    }
}
