use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use log::{debug, warn};

use crate::errors::{ConvertError, ConvertResult};
use crate::file_utils::FileManager;

// @module: SCIM table source parsing

const BEGIN_DEFINITION: &str = "BEGIN_DEFINITION";
const END_DEFINITION: &str = "END_DEFINITION";
const BEGIN_TABLE: &str = "BEGIN_TABLE";
const END_TABLE: &str = "END_TABLE";

/// Separator between a definition key and its value
const DEFINITION_SEPARATOR: char = '=';

/// Separator between the fields of a table row
const FIELD_SEPARATOR: char = '\t';

/// Prefix of localized name keys, e.g. `NAME.zh_TW`
const LOCALIZED_NAME_PREFIX: &str = "NAME.";

// @enum: Scanner position relative to the file's sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    Top,
    Definition,
    Table,
}

impl ParserState {
    fn name(self) -> &'static str {
        match self {
            Self::Top => "top level",
            Self::Definition => "definition section",
            Self::Table => "table section",
        }
    }
}

/// Definition keys and their values.
///
/// Lookups are by exact key. Iteration order is unspecified; callers that
/// need a stable order sort what they read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definitions {
    values: HashMap<String, String>,
}

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition, replacing any earlier value for the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Look up a key that must be present
    pub fn require(&self, key: &str) -> ConvertResult<&str> {
        self.get(key)
            .ok_or_else(|| ConvertError::MissingKey(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// True when the key is present and its value is exactly `TRUE`
    pub fn is_true(&self, key: &str) -> bool {
        self.get(key) == Some("TRUE")
    }

    /// Localized `NAME.<locale>` entries as `(locale, name)`, sorted by locale
    pub fn localized_names(&self) -> Vec<(&str, &str)> {
        let mut names: Vec<(&str, &str)> = self
            .values
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(LOCALIZED_NAME_PREFIX)
                    .map(|locale| (locale, value.as_str()))
            })
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All definitions sorted by key, for logging
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut all: Vec<(&str, &str)> = self
            .values
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        all.sort_unstable();
        all
    }
}

// @struct: One code table row, split on tabs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub fields: Vec<String>,
}

impl TableRow {
    /// Split a trimmed table line into its fields
    pub fn from_line(line: &str) -> Self {
        TableRow {
            fields: line.split(FIELD_SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// Key sequence typed by the user
    pub fn code(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }

    /// Candidate phrase produced by the key sequence
    pub fn phrase(&self) -> Option<&str> {
        self.fields.get(1).map(String::as_str)
    }

    /// Frequency/priority column; parsed but not used by the fcitx output
    pub fn priority(&self) -> Option<&str> {
        self.fields.get(2).map(String::as_str)
    }
}

/// Parsed SCIM table: its definitions and its code table rows in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScimTable {
    pub definitions: Definitions,
    pub rows: Vec<TableRow>,
}

impl ScimTable {
    /// Read and parse a SCIM table source file
    pub fn from_path<P: AsRef<Path>>(path: P) -> ConvertResult<Self> {
        let content = FileManager::read_to_string(path.as_ref())?;
        Self::parse_str(&content)
    }

    /// Parse SCIM table source text.
    ///
    /// Lines outside any section are ignored. Blank lines are not special:
    /// inside a definition section they are malformed, inside a table section
    /// they become one-field rows. A section left open at end of input is
    /// accepted with whatever it contained.
    pub fn parse_str(content: &str) -> ConvertResult<Self> {
        let mut table = ScimTable::default();
        let mut state = ParserState::Top;

        for (idx, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();

            match state {
                ParserState::Top => {
                    if line == BEGIN_DEFINITION {
                        state = ParserState::Definition;
                    } else if line == BEGIN_TABLE {
                        state = ParserState::Table;
                    } else {
                        continue;
                    }
                    debug!("Line {}: entering {}", idx + 1, state.name());
                }
                ParserState::Definition => {
                    if line == END_DEFINITION {
                        state = ParserState::Top;
                        continue;
                    }
                    let (key, value) = Self::parse_definition(idx + 1, line)?;
                    table.definitions.insert(key, value);
                }
                ParserState::Table => {
                    if line == END_TABLE {
                        state = ParserState::Top;
                        continue;
                    }
                    table.rows.push(TableRow::from_line(line));
                }
            }
        }

        if state != ParserState::Top {
            warn!("Input ended inside the {} without its end marker", state.name());
        }

        Ok(table)
    }

    // @parses: `KEY = VALUE` with exactly one separator
    fn parse_definition(line_no: usize, line: &str) -> ConvertResult<(&str, &str)> {
        let mut parts = line.split(DEFINITION_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => Ok((key.trim(), value.trim())),
            _ => Err(ConvertError::MalformedDefinition {
                line_no,
                line: line.to_string(),
            }),
        }
    }
}

impl fmt::Display for ScimTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "SCIM Table")?;
        writeln!(f, "Name: {}", self.definitions.get("NAME").unwrap_or("<unnamed>"))?;
        writeln!(f, "Definitions: {}", self.definitions.len())?;
        writeln!(f, "Rows: {}", self.rows.len())?;
        Ok(())
    }
}
