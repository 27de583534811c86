use anyhow::Result;

use crate::{CliTest, stdout_of};

const MODULE_A: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project name="Demo">
    <Package name="alpha">
        <Key ID="STR_alpha_one">
            <English>one</English>
            <German>eins</German>
        </Key>
        <Key ID="STR_alpha_two">
            <English>two</English>
        </Key>
    </Package>
</Project>"#;

const MODULE_B: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project name="Demo">
    <Package name="beta">
        <Key ID="STR_beta_three">
            <German>drei</German>
        </Key>
    </Package>
</Project>"#;

fn two_module_project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_module("alpha", MODULE_A)?;
    test.write_module("beta", MODULE_B)?;
    Ok(test)
}

#[test]
fn test_markdown_report() -> Result<()> {
    let test = two_module_project()?;

    let stdout = stdout_of(&mut test.markdown_command());

    assert!(stdout.contains("**Translation Status Report**"));
    assert!(stdout.contains("_Total number of keys: 3_"));
    assert!(stdout.contains("| Language | Missing Entries | Modules Missing Keys | % Complete |"));
    assert!(stdout.contains("| English | **1 \u{26a0}\u{fe0f}** | beta | 67% |"));
    assert!(stdout.contains("| German | **1 \u{26a0}\u{fe0f}** | alpha | 67% |"));
    assert!(stdout.contains("<summary>English (1 missing)</summary>"));
    assert!(stdout.contains("- **beta**: STR_beta_three"));
    assert!(stdout.contains("- **alpha**: STR_alpha_two"));

    Ok(())
}

#[test]
fn test_markdown_report_is_deterministic() -> Result<()> {
    let test = two_module_project()?;

    let first = stdout_of(&mut test.markdown_command());
    let second = stdout_of(&mut test.markdown_command());
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_complete_language_has_no_details_section() -> Result<()> {
    let test = CliTest::new()?;
    test.write_module(
        "alpha",
        r#"<Project>
    <Key ID="STR_one"><English>one</English></Key>
</Project>"#,
    )?;

    let stdout = stdout_of(&mut test.markdown_command());

    assert!(stdout.contains("| English | 0 | - | 100% |"));
    assert!(!stdout.contains("<details>"));

    Ok(())
}

#[test]
fn test_plain_report() -> Result<()> {
    let test = two_module_project()?;

    let stdout = stdout_of(&mut test.report_command());

    assert!(stdout.contains("Languages present in the project:"));
    assert!(stdout.contains("English, German"));
    assert!(stdout.contains("Total number of keys: 3"));
    assert!(stdout.contains("2/3"));
    assert!(stdout.contains("67%"));

    Ok(())
}

#[test]
fn test_module_without_table_is_silently_skipped() -> Result<()> {
    let test = two_module_project()?;
    test.make_dir("addons/bare")?;

    let output = test.markdown_command().output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("_Total number of keys: 3_"));
    assert!(!stdout.contains("bare"));
    assert!(output.stderr.is_empty());

    Ok(())
}

#[test]
fn test_malformed_table_is_silently_skipped() -> Result<()> {
    let test = two_module_project()?;
    test.write_module("broken", "<Project><Key ID=\"x\">")?;

    let output = test.markdown_command().output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("_Total number of keys: 3_"));
    assert!(!stdout.contains("broken"));
    assert!(output.stderr.is_empty());

    Ok(())
}

#[test]
fn test_missing_modules_root_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.report_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("Failed to list modules root"));

    Ok(())
}

#[test]
fn test_modules_root_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "mods/alpha/stringtable.xml",
        r#"<Project><Key ID="STR_one"><English>one</English></Key></Project>"#,
    )?;

    let mut cmd = test.markdown_command();
    cmd.args(["--modules-root", "./mods"]);
    let stdout = stdout_of(&mut cmd);

    assert!(stdout.contains("_Total number of keys: 1_"));

    Ok(())
}

#[test]
fn test_config_file_settings() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".locauditrc.json",
        r#"{
         "modulesRoot": "./mods",
         "tableFile": "Stringtable.xml"
     }"#,
    )?;
    test.write_file(
        "mods/alpha/Stringtable.xml",
        r#"<Project><Key ID="STR_one"><English>one</English></Key></Project>"#,
    )?;

    let stdout = stdout_of(&mut test.markdown_command());

    assert!(stdout.contains("_Total number of keys: 1_"));

    Ok(())
}

#[test]
fn test_config_ignores_modules() -> Result<()> {
    let test = two_module_project()?;
    test.write_file(".locauditrc.json", r#"{ "ignores": ["beta"] }"#)?;

    let stdout = stdout_of(&mut test.markdown_command());

    assert!(stdout.contains("_Total number of keys: 2_"));
    assert!(!stdout.contains("beta"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let stdout = stdout_of(&mut cmd);

    assert!(stdout.contains("report"));
    assert!(stdout.contains("init"));

    Ok(())
}
