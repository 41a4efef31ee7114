/*!
 * # scim2fcitx - SCIM table to fcitx table converter
 *
 * Reads a table-based SCIM input method source (`BEGIN_DEFINITION` /
 * `BEGIN_TABLE` sections) and produces the two plain-text files fcitx needs
 * for a table input method: the `[CodeTable]` configuration and the code
 * table data file.
 *
 * ## Architecture
 *
 * - `scim_parser`: section scanner producing definitions and table rows
 * - `fcitx`: the two output formatters:
 *   - `fcitx::conf_file`: configuration document
 *   - `fcitx::data_file`: data document
 * - `app_controller`: parse, render and write orchestration
 * - `app_config`: optional JSON configuration
 * - `file_utils`: file system operations
 * - `language_utils`: locale tag utilities
 * - `errors`: error types
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod fcitx;
pub mod file_utils;
pub mod language_utils;
pub mod scim_parser;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{ConvertedTables, Controller, OutputTarget};
pub use errors::{ConvertError, ConvertResult};
pub use scim_parser::{Definitions, ScimTable, TableRow};
