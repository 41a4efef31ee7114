//! Locale tag utilities
//!
//! fcitx and SCIM both use POSIX-style locale tags such as `zh_TW`: an
//! ISO 639-1 language code, optionally followed by `_` (or `-`) and a region.

use anyhow::{Result, anyhow};
use isolang::Language;

/// Split a locale tag into its language and optional region parts
pub fn split_locale(tag: &str) -> (&str, Option<&str>) {
    match tag.trim().split_once(['_', '-']) {
        Some((language, region)) => (language, Some(region)),
        None => (tag.trim(), None),
    }
}

/// Check whether the language part of a locale tag is a known ISO 639-1 code
pub fn is_known_locale(tag: &str) -> bool {
    let (language, _) = split_locale(tag);
    language.len() == 2 && Language::from_639_1(&language.to_lowercase()).is_some()
}

/// Validate a locale tag, naming the offending tag on failure
pub fn validate_locale(tag: &str) -> Result<()> {
    if tag.trim().is_empty() {
        return Err(anyhow!("Locale tag is empty"));
    }
    if !is_known_locale(tag) {
        return Err(anyhow!("Invalid locale tag: {}", tag));
    }
    Ok(())
}

/// English name of a locale tag's language, if known
pub fn get_language_name(tag: &str) -> Option<&'static str> {
    let (language, _) = split_locale(tag);
    Language::from_639_1(&language.to_lowercase()).map(|lang| lang.to_name())
}
