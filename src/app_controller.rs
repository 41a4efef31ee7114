use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::ConvertResult;
use crate::fcitx::{self, FcitxOptions, CONF_EXTENSION, DATA_EXTENSION};
use crate::file_utils::FileManager;
use crate::scim_parser::ScimTable;

// @module: Application controller for SCIM to fcitx conversion

/// Where the rendered documents go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Both documents, configuration first, on standard output
    Stdout,
    /// `<name>.conf` and `<name>.txt` inside the given directory
    Directory(PathBuf),
}

/// Both fcitx documents rendered in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedTables {
    /// Configuration document
    pub conf: String,
    /// Data document
    pub data: String,
    /// Number of code table rows carried over
    pub row_count: usize,
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    fn fcitx_options(&self) -> FcitxOptions {
        FcitxOptions {
            lang_code: self.config.lang_code.clone(),
            choose_keys: self.config.choose_keys.clone(),
        }
    }

    /// Render both documents from an already parsed table
    pub fn convert_table(&self, im_name: &str, table: &ScimTable) -> ConvertResult<ConvertedTables> {
        let conf = fcitx::render_conf_file(im_name, &table.definitions, &self.fcitx_options())?;
        let data = fcitx::render_data_file(&table.definitions, &table.rows)?;

        Ok(ConvertedTables {
            conf,
            data,
            row_count: table.rows.len(),
        })
    }

    /// Parse a SCIM table file and render both documents
    pub fn convert_file<P: AsRef<Path>>(&self, input_file: P, im_name: &str) -> ConvertResult<ConvertedTables> {
        let table = ScimTable::from_path(input_file.as_ref())?;

        debug!("Parsed {}", table);
        for (key, value) in table.definitions.sorted() {
            debug!("  {} = {}", key, value);
        }

        self.convert_table(im_name, &table)
    }

    /// Convert `input_file` and write the result to `target`.
    ///
    /// Returns the files written, empty for standard output.
    pub fn run<P: AsRef<Path>>(&self, input_file: P, im_name: &str, target: &OutputTarget) -> Result<Vec<PathBuf>> {
        let input_file = input_file.as_ref();
        let converted = self.convert_file(input_file, im_name)
            .with_context(|| format!("Failed to convert {:?}", input_file))?;

        let written = match target {
            OutputTarget::Stdout => {
                let mut handle = std::io::stdout().lock();
                for document in [&converted.conf, &converted.data] {
                    handle.write_all(document.as_bytes())
                        .context("Failed to write to stdout")?;
                }
                handle.flush().context("Failed to flush stdout")?;
                Vec::new()
            }
            OutputTarget::Directory(dir) => self.write_files(dir, im_name, &converted)?,
        };

        info!("Converted {} table rows for '{}'", converted.row_count, im_name);
        Ok(written)
    }

    /// Write both documents into `output_dir`, configuration first, overwriting
    pub fn write_files(&self, output_dir: &Path, im_name: &str, converted: &ConvertedTables) -> Result<Vec<PathBuf>> {
        let conf_path = FileManager::output_path(output_dir, im_name, CONF_EXTENSION);
        let data_path = FileManager::output_path(output_dir, im_name, DATA_EXTENSION);

        for (path, content) in [(&conf_path, &converted.conf), (&data_path, &converted.data)] {
            info!("write to {}", path.display());
            FileManager::write_to_file(path, content)?;
        }

        Ok(vec![conf_path, data_path])
    }
}
