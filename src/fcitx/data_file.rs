/*!
 * fcitx code table data document.
 *
 * A fixed header followed by `[Data]` and one `<code> <phrase>` line per
 * table row, in the order the rows were read.
 */

use crate::errors::{ConvertError, ConvertResult};
use crate::scim_parser::{Definitions, TableRow};

use super::KeyValueDocument;

const VERSION_MARKER: &str = ";fcitx Version 0x03 Table file";
const DATA_SECTION: &str = "[Data]";

/// Leading character marking a pinyin lookup
const PINYIN_CHAR: char = '@';
/// Longest pinyin accepted after the marker
const PINYIN_LENGTH: u32 = 5;
/// Leading character for reverse code lookup
const PROMPT_CHAR: char = '&';
/// Leading character for building phrases from characters
const CONSTRUCT_PHRASE_CHAR: char = '^';

const KEY_VALID_INPUT_CHARS: &str = "VALID_INPUT_CHARS";
const KEY_MAX_KEY_LENGTH: &str = "MAX_KEY_LENGTH";

/// Parse `MAX_KEY_LENGTH` as a signed integer; only non-numeric text is rejected
pub fn max_key_length(definitions: &Definitions) -> ConvertResult<i64> {
    let value = definitions.require(KEY_MAX_KEY_LENGTH)?;
    value.parse::<i64>().map_err(|_| ConvertError::InvalidInteger {
        key: KEY_MAX_KEY_LENGTH.to_string(),
        value: value.to_string(),
    })
}

/// Render the data document; rows with fewer than two fields are rejected
pub fn render_data_file(definitions: &Definitions, rows: &[TableRow]) -> ConvertResult<String> {
    let key_code = definitions.require(KEY_VALID_INPUT_CHARS)?;
    let length = max_key_length(definitions)?;

    let mut doc = KeyValueDocument::new();
    doc.line(VERSION_MARKER);
    doc.entry("KeyCode", key_code);
    doc.entry("Length", length);
    doc.entry("Pinyin", PINYIN_CHAR);
    doc.entry("PinyinLength", PINYIN_LENGTH);
    doc.entry("Prompt", PROMPT_CHAR);
    doc.entry("ConstructPhrase", CONSTRUCT_PHRASE_CHAR);
    doc.line(DATA_SECTION);

    for (idx, row) in rows.iter().enumerate() {
        match (row.code(), row.phrase()) {
            (Some(code), Some(phrase)) => doc.line(format!("{} {}", code, phrase)),
            _ => {
                return Err(ConvertError::ShortRow {
                    row: idx + 1,
                    fields: row.fields.clone(),
                });
            }
        }
    }

    Ok(doc.finish())
}
