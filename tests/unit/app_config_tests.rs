/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use scim2fcitx::app_config::{Config, LogLevel};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.output_dir, ".");
    assert_eq!(config.lang_code, "zh_TW");
    assert_eq!(config.choose_keys, "1234567890");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.lang_code = "xx_YY".to_string();
    assert!(config.validate().is_err());
    config.lang_code = "zh_CN".to_string();
    assert!(config.validate().is_ok());

    config.choose_keys = String::new();
    assert!(config.validate().is_err());
    config.choose_keys = "asdfjkl;".to_string();
    assert!(config.validate().is_ok());
}

/// Test loading a config file from disk
#[test]
fn test_load_or_default_withExistingFile_shouldReadIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "output_dir": "out", "log_level": "debug" }"#,
    )?;

    let config = Config::load_or_default(Some(&path))?;

    assert_eq!(config.output_dir, "out");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.lang_code, "zh_TW");
    Ok(())
}

/// Test that a missing config file falls back to defaults without creating it
#[test]
fn test_load_or_default_withMissingFile_shouldUseDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("absent.json");

    let config = Config::load_or_default(Some(&path))?;

    assert_eq!(config, Config::default());
    assert!(!path.exists());
    Ok(())
}

/// Test that a malformed config file is an error
#[test]
fn test_from_file_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    assert!(Config::from_file(&path).is_err());
    Ok(())
}
