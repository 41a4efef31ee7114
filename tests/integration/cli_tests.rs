/*!
 * Tests running the scim2fcitx binary
 */

use std::path::Path;
use std::process::{Command, Output};
use anyhow::Result;
use crate::common;

fn run_cli(dir: &Path, args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_scim2fcitx"))
        .current_dir(dir)
        .args(args)
        .output()?)
}

/// Test that --stdout prints both documents and writes no files
#[test]
fn test_cli_withStdoutFlag_shouldPrintBothDocuments() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_sample_scim(temp_dir.path(), "test.scim")?;

    let output = run_cli(temp_dir.path(), &["-n", "test", "-s", "test.scim"])?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("[CodeTable]\nUniqueName=test\n"));
    assert!(stdout.contains("Enabled=True\n;fcitx Version 0x03 Table file\n"));
    assert!(stdout.ends_with("[Data]\nab 中文\n"));
    assert!(!temp_dir.path().join("test.conf").exists());
    Ok(())
}

/// Test that the default mode writes both files into the working directory
#[test]
fn test_cli_withoutStdoutFlag_shouldWriteFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_sample_scim(temp_dir.path(), "test.scim")?;

    let output = run_cli(temp_dir.path(), &["--name", "test", "test.scim"])?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(temp_dir.path().join("test.conf").exists());
    assert!(temp_dir.path().join("test.txt").exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("write to"));
    Ok(())
}

/// Test that a malformed definition exits non-zero and names the line
#[test]
fn test_cli_withMalformedDefinition_shouldExitNonZero() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::SAMPLE_SCIM.replace("AUTO_FILL = FALSE", "FOO=BAR=BAZ");
    common::create_test_file(temp_dir.path(), "bad.scim", &source)?;

    let output = run_cli(temp_dir.path(), &["-n", "bad", "bad.scim"])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("FOO=BAR=BAZ"));
    Ok(())
}

/// Test that a missing --name is rejected
#[test]
fn test_cli_withoutName_shouldExitNonZero() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_sample_scim(temp_dir.path(), "test.scim")?;

    let output = run_cli(temp_dir.path(), &["test.scim"])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--name <NAME>"));
    assert!(stderr.contains("Usage:"));
    assert!(!temp_dir.path().join("test.conf").exists());
    Ok(())
}

/// Test that a missing input file argument is reported with usage text
#[test]
fn test_cli_withoutInfile_shouldShowUsage() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let output = run_cli(temp_dir.path(), &["-n", "test"])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("<INFILE>"));
    assert!(stderr.contains("Usage:"));
    Ok(())
}

/// Test that the completions subcommand needs neither --name nor INFILE
#[test]
fn test_cli_withCompletionsSubcommand_shouldNotRequireConvertArgs() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let output = run_cli(temp_dir.path(), &["completions", "bash"])?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("scim2fcitx"));
    Ok(())
}
