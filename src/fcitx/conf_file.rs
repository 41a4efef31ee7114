/*!
 * fcitx `[CodeTable]` configuration document.
 *
 * Field order is fixed. Required keys are `NAME` and `DYNAMIC_ADJUST`; the
 * boolean flags (`AUTO_COMMIT`, `AUTO_FILL`, `SHOW_KEY_PROMPT`) read as false
 * when absent.
 */

use log::{debug, warn};

use crate::errors::{ConvertError, ConvertResult};
use crate::language_utils;
use crate::scim_parser::Definitions;

use super::{COMPILED_DATA_EXTENSION, FcitxOptions, KeyValueDocument};

const SECTION_HEADER: &str = "[CodeTable]";

const KEY_NAME: &str = "NAME";
const KEY_DYNAMIC_ADJUST: &str = "DYNAMIC_ADJUST";
const KEY_AUTO_COMMIT: &str = "AUTO_COMMIT";
const KEY_AUTO_FILL: &str = "AUTO_FILL";
const KEY_SHOW_KEY_PROMPT: &str = "SHOW_KEY_PROMPT";
const KEY_SINGLE_WILDCARD: &str = "SINGLE_WILDCARD_CHAR";
const KEY_MULTI_WILDCARD: &str = "MULTI_WILDCARD_CHAR";

/// Candidate ordering policy of the generated table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustOrder {
    /// Reorder candidates by how often they are picked
    AdjustFreq,
    /// Keep table order
    AdjustNo,
}

impl AdjustOrder {
    /// Map the `DYNAMIC_ADJUST` flag; anything but TRUE/FALSE is rejected
    pub fn from_definitions(definitions: &Definitions) -> ConvertResult<Self> {
        match definitions.require(KEY_DYNAMIC_ADJUST)? {
            "TRUE" => Ok(Self::AdjustFreq),
            "FALSE" => Ok(Self::AdjustNo),
            other => Err(ConvertError::InvalidFlag {
                key: KEY_DYNAMIC_ADJUST.to_string(),
                value: other.to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AdjustFreq => "AdjustFreq",
            Self::AdjustNo => "AdjustNo",
        }
    }
}

/// Wildcard key for the target engine; the multi wildcard wins over the single one
pub fn matching_key(definitions: &Definitions) -> Option<&str> {
    definitions
        .get(KEY_MULTI_WILDCARD)
        .or_else(|| definitions.get(KEY_SINGLE_WILDCARD))
}

/// Render the configuration document for `im_name`
pub fn render_conf_file(
    im_name: &str,
    definitions: &Definitions,
    options: &FcitxOptions,
) -> ConvertResult<String> {
    let name = definitions.require(KEY_NAME)?;
    let adjust_order = AdjustOrder::from_definitions(definitions)?;
    let matching_key = matching_key(definitions);

    let mut doc = KeyValueDocument::new();
    doc.line(SECTION_HEADER);
    doc.entry("UniqueName", im_name);
    doc.entry("Name", name);

    for (locale, localized) in definitions.localized_names() {
        match language_utils::get_language_name(locale) {
            Some(language) => debug!("Localized name for {} ({}): {}", locale, language, localized),
            None => warn!("Unrecognized locale in {}.{}", KEY_NAME, locale),
        }
        doc.entry(format!("Name[{}]", locale), localized);
    }

    doc.entry("IconName", im_name);
    doc.entry("File", format!("{}.{}", im_name, COMPILED_DATA_EXTENSION));
    doc.entry("AdjustOrder", adjust_order.as_str());
    doc.flag("UseAutoSend", definitions.is_true(KEY_AUTO_COMMIT));
    doc.flag("UseMatchingKey", matching_key.is_some());
    doc.entry("MatchingKey", matching_key.unwrap_or_default());
    doc.flag("ExactMatch", false);
    doc.flag("AutoPhrase", definitions.is_true(KEY_AUTO_FILL));
    doc.flag("PromptTableCode", definitions.is_true(KEY_SHOW_KEY_PROMPT));
    doc.entry("Choose", &options.choose_keys);
    doc.entry("LangCode", &options.lang_code);
    doc.flag("Enabled", true);

    Ok(doc.finish())
}
