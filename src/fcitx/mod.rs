/*!
 * fcitx table output.
 *
 * Two independent formatters read a parsed SCIM table and each render one
 * fcitx document:
 *
 * - `conf_file`: the `[CodeTable]` configuration (`<name>.conf`)
 * - `data_file`: the code table data (`<name>.txt`)
 *
 * Neither formatter mutates its input, and both render to an in-memory
 * `String`; writing is left to the caller.
 */

use std::fmt::Display;

pub use self::conf_file::render_conf_file;
pub use self::data_file::render_data_file;

pub mod conf_file;
pub mod data_file;

/// Extension of the configuration document
pub const CONF_EXTENSION: &str = "conf";

/// Extension of the data document
pub const DATA_EXTENSION: &str = "txt";

/// Extension of the compiled table the configuration points at
pub const COMPILED_DATA_EXTENSION: &str = "mb";

/// Default `LangCode`
pub const DEFAULT_LANG_CODE: &str = "zh_TW";

/// Default `Choose` keys
pub const DEFAULT_CHOOSE_KEYS: &str = "1234567890";

/// Settings for the fixed fields of the configuration document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FcitxOptions {
    pub lang_code: String,
    pub choose_keys: String,
}

impl Default for FcitxOptions {
    fn default() -> Self {
        Self {
            lang_code: DEFAULT_LANG_CODE.to_string(),
            choose_keys: DEFAULT_CHOOSE_KEYS.to_string(),
        }
    }
}

// @struct: Line-oriented `Key=Value` document builder
#[derive(Debug, Default)]
pub(crate) struct KeyValueDocument {
    text: String,
}

impl KeyValueDocument {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a raw line such as a section header or comment
    pub(crate) fn line(&mut self, line: impl Display) {
        self.text.push_str(&line.to_string());
        self.text.push('\n');
    }

    pub(crate) fn entry(&mut self, key: impl Display, value: impl Display) {
        self.line(format!("{}={}", key, value));
    }

    /// Append a boolean entry rendered as `True`/`False`
    pub(crate) fn flag(&mut self, key: impl Display, value: bool) {
        self.entry(key, if value { "True" } else { "False" });
    }

    pub(crate) fn finish(self) -> String {
        self.text
    }
}
