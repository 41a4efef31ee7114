/*!
 * Error types for the scim2fcitx converter.
 *
 * Every failure is fatal to the conversion: parsing and rendering stop at the
 * first error and hand it back to the caller unchanged.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a SCIM table or rendering fcitx files
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Reading the input or writing an output file failed
    #[error("I/O error on {path:?}: {source}")]
    Io {
        /// File that was being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A definition line without exactly one `=`
    #[error("Malformed definition at line {line_no}: {line:?} (expected exactly one '=')")]
    MalformedDefinition {
        /// 1-based line number in the source file
        line_no: usize,
        /// The trimmed offending line
        line: String,
    },

    /// A definition key needed by a formatter is absent
    #[error("Missing required definition key: {0}")]
    MissingKey(String),

    /// A TRUE/FALSE flag holding some other value
    #[error("Invalid value for {key}: {value:?} (expected TRUE or FALSE)")]
    InvalidFlag {
        key: String,
        value: String,
    },

    /// A value that should be an integer isn't one
    #[error("Invalid integer for {key}: {value:?}")]
    InvalidInteger {
        key: String,
        value: String,
    },

    /// A table row with fewer than the two required fields
    #[error("Table row {row} has {} field(s), expected at least 2: {fields:?}", .fields.len())]
    ShortRow {
        /// 1-based row index within the table section(s)
        row: usize,
        /// Raw fields of the offending row
        fields: Vec<String>,
    },
}

impl ConvertError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the library
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;
